use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div};

use approx::abs_diff_eq;
use ordered_float::OrderedFloat;
use strum::{Display, EnumIter, EnumString};

/// Externally assigned identifier of a city.
/// Identifiers are not required to be contiguous nor to start from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId(pub i64);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Planar position of a city.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        const EPSILON: f64 = 1e-9;
        abs_diff_eq!(self.x, other.x, epsilon = EPSILON)
            && abs_diff_eq!(self.y, other.y, epsilon = EPSILON)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub id: CityId,
    pub location: Coordinate,
}

impl City {
    pub const fn new(id: i64, x: f64, y: f64) -> Self {
        Self {
            id: CityId(id),
            location: Coordinate { x, y },
        }
    }
}

/// Road category.
/// The category selects the speed driven on the road, categories without a speed can still be
/// stored in the graph but any travel time computed over them fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(pub i32);

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Undirected road connecting two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Road {
    pub cities: [CityId; 2],
    pub category: Category,
}

impl Road {
    pub const fn new(a: i64, b: i64, category: i32) -> Self {
        Self {
            cities: [CityId(a), CityId(b)],
            category: Category(category),
        }
    }
}

/// Optimality criterion of a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Mode {
    /// Minimizes the travelled distance.
    #[strum(to_string = "shortest", serialize = "1")]
    ShortestDistance,
    /// Minimizes the travel time, that is the distance divided by the road category speed.
    #[strum(to_string = "fastest", serialize = "2")]
    FastestTime,
}

/// Distance in the units of the city coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(OrderedFloat<f64>);

impl Length {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const MAX: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn from_units(units: f64) -> Self {
        Self(OrderedFloat(units))
    }

    pub const fn units(&self) -> f64 {
        self.0.0
    }
}

impl Add for Length {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, length| acc + length)
    }
}

impl Div<Speed> for Length {
    type Output = TravelTime;
    fn div(self, speed: Speed) -> Self::Output {
        TravelTime::from_hours(self.units() / speed.0)
    }
}

/// Speed in length units per hour, always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    pub const fn from_units_per_hour(speed: f64) -> Self {
        Self(speed)
    }

    pub const fn units_per_hour(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TravelTime(OrderedFloat<f64>);

impl TravelTime {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const MAX: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn from_hours(hours: f64) -> Self {
        Self(OrderedFloat(hours))
    }

    pub const fn hours(&self) -> f64 {
        self.0.0
    }
}

impl Add for TravelTime {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for TravelTime {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for TravelTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, time| acc + time)
    }
}

/// Route cost in the unit of the query mode: a length for the shortest route, hours for the
/// fastest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const MAX: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn from_value(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn value(&self) -> f64 {
        self.0.0
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Length> for Cost {
    fn from(length: Length) -> Self {
        Self(length.0)
    }
}

impl From<TravelTime> for Cost {
    fn from(time: TravelTime) -> Self {
        Self(time.0)
    }
}

#[cfg(feature = "geo")]
impl From<Coordinate> for geo::Coord<f64> {
    fn from(Coordinate { x, y }: Coordinate) -> Self {
        geo::coord! { x: x, y: y }
    }
}

#[cfg(feature = "geo")]
impl From<geo::Coord<f64>> for Coordinate {
    fn from(geo::Coord { x, y }: geo::Coord<f64>) -> Self {
        Self { x, y }
    }
}
