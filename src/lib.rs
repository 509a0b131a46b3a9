#![doc = include_str!("../README.md")]

mod error;
mod geometry;
mod graph;
mod model;
mod reader;
mod report;
mod routing;
mod weight;

pub use error::{ReadError, RoutingError};
pub use geometry::distance;
pub use graph::{RoadGraph, RoadNetwork, build_graph};
pub use model::{
    Category, City, CityId, Coordinate, Cost, Length, Mode, Road, Speed, TravelTime,
};
pub use reader::{load_road_network, read_road_network};
pub use report::RouteReport;
pub use routing::dijkstra::{SearchTree, shortest_path_tree};
pub use routing::path::unpack_path;
#[cfg(feature = "geo")]
pub use routing::summary::path_line_string;
pub use routing::summary::{RouteSummary, summarize};
pub use routing::{Path, RouterConfig, find_path};
pub use weight::{SpeedTable, edge_weight};
