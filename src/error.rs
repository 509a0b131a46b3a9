use std::io::ErrorKind;

use thiserror::Error;

use crate::{Category, CityId};

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum RoutingError {
    #[error("City {0} not found")]
    CityNotFound(CityId),
    #[error("Road category {0} has no speed")]
    UnknownCategory(Category),
    #[error("No road between cities {0} and {1}")]
    RoadNotFound(CityId, CityId),
    #[error("Road category {0} speed must be strictly positive")]
    InvalidSpeed(Category),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ReadError {
    #[error("Road network I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("Road network is missing the {0}")]
    MissingField(&'static str),
    #[error("Road network {field} is not valid: {value}")]
    InvalidField { field: &'static str, value: String },
}

impl From<std::io::Error> for ReadError {
    fn from(error: std::io::Error) -> Self {
        Self::IO(error.kind())
    }
}
