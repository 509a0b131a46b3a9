use std::fmt;

use crate::routing::summary::{RouteSummary, summarize};
use crate::{CityId, Mode, RoadNetwork, RouterConfig, RoutingError, find_path};

/// Human readable outcome of a route query.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteReport {
    NotFound,
    Found {
        mode: Mode,
        cities: Vec<CityId>,
        summary: RouteSummary,
    },
}

impl RouteReport {
    /// Finds the optimal route for the mode and summarizes its distance and travel time.
    pub fn new<G: RoadNetwork>(
        config: &RouterConfig,
        graph: &G,
        origin: CityId,
        destination: CityId,
        mode: Mode,
    ) -> Result<Self, RoutingError> {
        let path = find_path(config, graph, origin, destination, mode)?;
        if !path.is_found() {
            return Ok(Self::NotFound);
        }

        let summary = summarize(config, graph, &path.cities)?;

        Ok(Self::Found {
            mode,
            cities: path.cities,
            summary,
        })
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Found {
            mode,
            cities,
            summary,
        } = self
        else {
            return writeln!(f, "No route between cities");
        };

        writeln!(f, "Optimal route ({mode}):")?;
        for (i, city) in cities.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{city}")?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Total distance: {:.2}, total time: {:.2}",
            summary.distance.units(),
            summary.time.hours()
        )
    }
}
