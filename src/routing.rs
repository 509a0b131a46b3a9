pub mod dijkstra;
pub mod path;
pub mod summary;

use tracing::debug;

use crate::routing::dijkstra::shortest_path_tree;
use crate::routing::path::unpack_path;
use crate::{CityId, Cost, Mode, RoadNetwork, RoutingError, SpeedTable};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterConfig {
    /// Speeds used to compute travel times, for both the search and the route summary.
    pub speeds: SpeedTable,
}

/// Optimal route between two cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Cities from the origin to the destination, both included.
    /// Empty if the destination cannot be reached.
    pub cities: Vec<CityId>,
    /// Total cost in the unit of the query mode (distance or hours).
    pub cost: Cost,
}

impl Path {
    pub const fn not_found() -> Self {
        Self {
            cities: Vec::new(),
            cost: Cost::MAX,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.cities.is_empty()
    }
}

/// Finds the optimal route between two cities for the given mode.
///
/// Unknown cities fail the query before any search, while an unreachable destination is not an
/// error and results in an empty path. The path from a city to itself is that single city.
pub fn find_path<G: RoadNetwork>(
    config: &RouterConfig,
    graph: &G,
    origin: CityId,
    destination: CityId,
    mode: Mode,
) -> Result<Path, RoutingError> {
    if origin == destination {
        graph.get_city_location(origin)?;
        return Ok(Path {
            cities: vec![origin],
            cost: Cost::ZERO,
        });
    }

    let tree = shortest_path_tree(config, graph, origin, destination, mode)?;
    let cities = unpack_path(&tree.previous, destination);

    match tree.costs.get(&destination) {
        Some(&cost) if !cities.is_empty() => Ok(Path { cities, cost }),
        _ => {
            debug!("No {mode} path {origin} -> {destination}");
            Ok(Path::not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use test_log::test;

    use super::*;
    use crate::graph::tests::{isolated_graph, triangle_graph, unknown_category_graph};
    use crate::{Category, Road};

    #[test]
    fn find_path_001() {
        let graph = triangle_graph();
        let config = RouterConfig::default();

        let path = find_path(&config, &graph, CityId(1), CityId(3), Mode::ShortestDistance);
        assert_eq!(
            path,
            Ok(Path {
                cities: vec![CityId(1), CityId(2), CityId(3)],
                cost: Cost::from_value(7.0)
            })
        );

        let path = find_path(&config, &graph, CityId(1), CityId(3), Mode::FastestTime).unwrap();
        assert_eq!(path.cities, [CityId(1), CityId(2), CityId(3)]);
        assert_abs_diff_eq!(path.cost.value(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn find_path_002() {
        let graph = isolated_graph();
        let config = RouterConfig::default();

        for mode in [Mode::ShortestDistance, Mode::FastestTime] {
            let path = find_path(&config, &graph, CityId(1), CityId(4), mode).unwrap();
            assert!(!path.is_found());
            assert!(path.cities.is_empty());

            let path = find_path(&config, &graph, CityId(4), CityId(4), mode).unwrap();
            assert_eq!(path.cities, [CityId(4)]);
            assert_eq!(path.cost, Cost::ZERO);
        }
    }

    #[test]
    fn find_path_003() {
        let graph = triangle_graph();
        let config = RouterConfig::default();

        assert_eq!(
            find_path(&config, &graph, CityId(5), CityId(5), Mode::ShortestDistance),
            Err(RoutingError::CityNotFound(CityId(5)))
        );
        assert_eq!(
            find_path(&config, &graph, CityId(1), CityId(5), Mode::FastestTime),
            Err(RoutingError::CityNotFound(CityId(5)))
        );
    }

    #[test]
    fn find_path_004() {
        let mut graph = triangle_graph();
        graph.add_road(Road::new(1, 3, 4));
        let config = RouterConfig::default();

        let shortest =
            find_path(&config, &graph, CityId(1), CityId(3), Mode::ShortestDistance).unwrap();
        assert_eq!(shortest.cities, [CityId(1), CityId(3)]);
        assert_eq!(shortest.cost, Cost::from_value(5.0));

        let fastest = find_path(&config, &graph, CityId(1), CityId(3), Mode::FastestTime).unwrap();
        assert_eq!(fastest.cities, [CityId(1), CityId(2), CityId(3)]);
        assert_abs_diff_eq!(fastest.cost.value(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn find_path_005() {
        let graph = unknown_category_graph();
        let config = RouterConfig::default();

        let path = find_path(&config, &graph, CityId(3), CityId(1), Mode::ShortestDistance);
        assert_eq!(path.map(|p| p.cities), Ok(vec![CityId(3), CityId(2), CityId(1)]));

        assert_eq!(
            find_path(&config, &graph, CityId(3), CityId(1), Mode::FastestTime),
            Err(RoutingError::UnknownCategory(Category(9)))
        );
    }

    #[test]
    fn find_path_road_to_unknown_city() {
        let mut graph = triangle_graph();
        graph.add_road(Road::new(2, 99, 1));
        let config = RouterConfig::default();

        // the graph is left untouched by the failed query
        assert_eq!(
            find_path(&config, &graph, CityId(1), CityId(3), Mode::ShortestDistance),
            Err(RoutingError::CityNotFound(CityId(99)))
        );
        assert_eq!(graph.roads().len(), 3);
    }
}
