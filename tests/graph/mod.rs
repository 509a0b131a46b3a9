use std::sync::LazyLock;

use cityroute::{CityId, RoadGraph, RoadNetwork, read_road_network};

/// Cities 1, 2, 3, 5, 6 and 7 are connected, 8 and 9 only to each other and 4 to nothing.
/// Road categories are written along the roads:
///
///   7 ---3--- 3 ---2--- 6
///   |       / |         |
///   3     4   1         3
///   |   /     |         |
///   1 ---1--- 2 ---2--- 5
pub static NETWORK_GRAPH: LazyLock<RoadGraph> = LazyLock::new(|| {
    let data = include_str!("../data/cities.dat");
    read_road_network(data.as_bytes()).unwrap()
});

/// Gets the length of every simple path between two cities by exhaustive enumeration.
#[allow(dead_code)]
pub fn simple_path_lengths(graph: &RoadGraph, origin: CityId, destination: CityId) -> Vec<f64> {
    fn visit(
        graph: &RoadGraph,
        city: CityId,
        destination: CityId,
        length: f64,
        visited: &mut Vec<CityId>,
        lengths: &mut Vec<f64>,
    ) {
        if city == destination {
            lengths.push(length);
            return;
        }

        for (next, _) in graph.city_roads(city) {
            if visited.contains(&next) {
                continue;
            }

            let road = graph.get_distance(city, next).unwrap().units();
            visited.push(next);
            visit(graph, next, destination, length + road, visited, lengths);
            visited.pop();
        }
    }

    let mut lengths = vec![];
    visit(graph, origin, destination, 0.0, &mut vec![origin], &mut lengths);
    lengths
}
