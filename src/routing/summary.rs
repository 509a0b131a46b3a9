use crate::{CityId, Length, RoadNetwork, RouterConfig, RoutingError, TravelTime};

/// Totals of a route, computed independently of the search that found it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteSummary {
    pub distance: Length,
    pub time: TravelTime,
}

/// Computes the total distance and the total travel time along the given cities.
///
/// Each leg is driven on the first road added between the two cities, and the travel time is
/// always computed: a road category without speed fails the summary whatever the query mode was.
///
/// When two cities are joined by roads of different categories, the fastest search may take a
/// faster road than the first one added, so the summarized time can then exceed the path cost.
pub fn summarize<G: RoadNetwork>(
    config: &RouterConfig,
    graph: &G,
    path: &[CityId],
) -> Result<RouteSummary, RoutingError> {
    let mut summary = RouteSummary::default();

    for window in path.windows(2) {
        let [from, to] = [window[0], window[1]];

        let category = graph
            .get_road_category(from, to)
            .ok_or(RoutingError::RoadNotFound(from, to))?;
        let length = graph.get_distance(from, to)?;
        let speed = config.speeds.get_speed(category)?;

        summary.distance += length;
        summary.time += length / speed;
    }

    Ok(summary)
}

/// Gets the geometry of the route, one point per city.
#[cfg(feature = "geo")]
pub fn path_line_string<G: RoadNetwork>(
    graph: &G,
    path: &[CityId],
) -> Result<geo::LineString, RoutingError> {
    path.iter()
        .map(|&city| graph.get_city_location(city).map(geo::Coord::from))
        .collect()
}
