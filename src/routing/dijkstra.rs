use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::weight::edge_weight;
use crate::{CityId, Cost, Mode, RoadNetwork, RouterConfig, RoutingError};

/// Outcome of a single search: the best costs and predecessors found before the search stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTree {
    /// Best known cost from the origin to each discovered city.
    /// Only final for the cities popped before the search stopped, destination included.
    pub costs: FxHashMap<CityId, Cost>,
    /// Previous city (value) on the best known route from the origin to this city (key).
    /// The origin has no previous city.
    pub previous: FxHashMap<CityId, CityId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Current best cost from origin to this city.
    cost: Cost,
    city: CityId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            // breaking ties in a deterministic way
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs Dijkstra from the origin until the destination is settled or every reachable city has
/// been visited.
///
/// Edge costs come from [`edge_weight`] for the given mode, so a road whose category has no speed
/// aborts a fastest route search as soon as it is relaxed. Superseded frontier entries are left in
/// the queue and skipped when popped.
pub fn shortest_path_tree<G: RoadNetwork>(
    config: &RouterConfig,
    graph: &G,
    origin: CityId,
    destination: CityId,
    mode: Mode,
) -> Result<SearchTree, RoutingError> {
    debug!("Computing {mode} route tree {origin} -> {destination}");

    graph.get_city_location(origin)?;
    graph.get_city_location(destination)?;

    // (current) best cost from origin to this city
    let mut costs = FxHashMap::from_iter([(origin, Cost::ZERO)]);

    // previous city (value) on the current best known route from origin to this city (key)
    let mut previous: FxHashMap<CityId, CityId> = FxHashMap::default();

    // priority queue of discovered cities that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        cost: Cost::ZERO,
        city: origin,
    }]);

    while let Some(HeapElement { cost, city }) = frontier.pop() {
        if city == destination {
            break;
        }

        // check if we already know a cheaper way to get to this city from the origin
        let best = costs.get(&city).copied().unwrap_or(Cost::MAX);
        if cost > best {
            continue;
        }

        for (neighbor, category) in graph.city_roads(city) {
            let weight = edge_weight(&config.speeds, graph, city, neighbor, category, mode)?;
            let neighbor_cost = cost + weight;

            // check if we can follow the current route to reach the neighbor in a cheaper way
            if neighbor_cost < costs.get(&neighbor).copied().unwrap_or(Cost::MAX) {
                trace!("Relax {neighbor} through {city}: {}", neighbor_cost.value());
                costs.insert(neighbor, neighbor_cost);
                previous.insert(neighbor, city);
                frontier.push(HeapElement {
                    cost: neighbor_cost,
                    city: neighbor,
                });
            }
        }
    }

    Ok(SearchTree { costs, previous })
}
