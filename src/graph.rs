use rustc_hash::FxHashMap;
use tracing::warn;

use crate::geometry::distance;
use crate::{Category, City, CityId, Coordinate, Length, Road, RoutingError};

/// Undirected road network.
/// Exposes the behavior the routing algorithms need from the graph they run on.
pub trait RoadNetwork {
    /// Gets the location of the city.
    /// Fails if the city doesn't belong to the network.
    fn get_city_location(&self, city: CityId) -> Result<Coordinate, RoutingError>;

    /// Gets an iterator over all the roads connected to the given city.
    /// For each road returns the city at its other end and the road category, in the order the
    /// roads were added to the network.
    /// Returns an empty iterator if the city is isolated or doesn't belong to the network.
    fn city_roads(&self, city: CityId) -> impl Iterator<Item = (CityId, Category)>;

    /// Returns true only if the city belongs to the network.
    fn contains_city(&self, city: CityId) -> bool {
        self.get_city_location(city).is_ok()
    }

    /// Gets the straight line distance between two cities.
    fn get_distance(&self, from: CityId, to: CityId) -> Result<Length, RoutingError> {
        let from = self.get_city_location(from)?;
        let to = self.get_city_location(to)?;
        Ok(distance(from, to))
    }

    /// Gets the category of the first road added between the two cities.
    /// Returns None if the cities are not directly connected.
    fn get_road_category(&self, from: CityId, to: CityId) -> Option<Category> {
        self.city_roads(from)
            .find(|&(city, _)| city == to)
            .map(|(_, category)| category)
    }
}

/// Road network built once and then only read.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    cities: Vec<City>,
    roads: Vec<Road>,
    /// Index of the first city with a given ID.
    city_index: FxHashMap<CityId, usize>,
    /// Both directions of every road, in insertion order.
    adjacency: FxHashMap<CityId, Vec<(CityId, Category)>>,
}

/// Builds the road network from its cities and roads.
pub fn build_graph(
    cities: impl IntoIterator<Item = City>,
    roads: impl IntoIterator<Item = Road>,
) -> RoadGraph {
    let mut graph = RoadGraph::default();

    for city in cities {
        graph.add_city(city);
    }

    for road in roads {
        graph.add_road(road);
    }

    graph
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a city to the graph.
    /// Cities are never deduplicated: if the ID was already taken the city is still stored, but
    /// lookups keep returning the city that was added first.
    pub fn add_city(&mut self, city: City) {
        let index = self.cities.len();

        if self.city_index.contains_key(&city.id) {
            warn!("Duplicate city {}, lookups return the first one", city.id);
        } else {
            self.city_index.insert(city.id, index);
        }

        self.cities.push(city);
    }

    /// Adds an undirected road to the graph, that can be travelled in both directions.
    pub fn add_road(&mut self, road: Road) {
        let [a, b] = road.cities;
        self.adjacency
            .entry(a)
            .or_default()
            .push((b, road.category));
        self.adjacency
            .entry(b)
            .or_default()
            .push((a, road.category));
        self.roads.push(road);
    }

    pub fn find_city(&self, id: CityId) -> Result<&City, RoutingError> {
        self.city_index
            .get(&id)
            .map(|&index| &self.cities[index])
            .ok_or(RoutingError::CityNotFound(id))
    }

    /// Gets the cities adjacent to the given one, with the category of the road leading there.
    pub fn neighbors(&self, id: CityId) -> &[(CityId, Category)] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }
}

impl RoadNetwork for RoadGraph {
    fn get_city_location(&self, city: CityId) -> Result<Coordinate, RoutingError> {
        self.find_city(city).map(|city| city.location)
    }

    fn city_roads(&self, city: CityId) -> impl Iterator<Item = (CityId, Category)> {
        self.neighbors(city).iter().copied()
    }
}
