//! Plain text road network format, all fields separated by whitespace:
//!
//! 1. The number of cities, then for each city its `id x y`.
//! 2. The number of roads, then for each road its `city1 city2 category`.
//!
//! Anything after the last road is ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::{City, ReadError, Road, RoadGraph};

/// Reads a road network from a file.
pub fn load_road_network(path: impl AsRef<std::path::Path>) -> Result<RoadGraph, ReadError> {
    let file = File::open(path)?;
    read_road_network(BufReader::new(file))
}

/// Reads a road network, fails if any field is missing or cannot be parsed.
pub fn read_road_network(mut reader: impl Read) -> Result<RoadGraph, ReadError> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;

    let mut fields = Fields(data.split_whitespace());
    let mut graph = RoadGraph::new();

    let city_count: usize = fields.next("city count")?;
    for _ in 0..city_count {
        let id = fields.next("city id")?;
        let x = fields.next_coordinate("city x")?;
        let y = fields.next_coordinate("city y")?;
        graph.add_city(City::new(id, x, y));
    }

    let road_count: usize = fields.next("road count")?;
    for _ in 0..road_count {
        let a = fields.next("road city")?;
        let b = fields.next("road city")?;
        let category = fields.next("road category")?;
        graph.add_road(Road::new(a, b, category));
    }

    debug!("Read {city_count} cities and {road_count} roads");
    Ok(graph)
}

struct Fields<'a>(SplitWhitespace<'a>);

impl Fields<'_> {
    fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, ReadError> {
        let value = self.0.next().ok_or(ReadError::MissingField(field))?;
        value.parse().map_err(|_| ReadError::InvalidField {
            field,
            value: value.to_owned(),
        })
    }

    fn next_coordinate(&mut self, field: &'static str) -> Result<f64, ReadError> {
        let value: f64 = self.next(field)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ReadError::InvalidField {
                field,
                value: value.to_string(),
            })
        }
    }
}
