use rustc_hash::FxHashMap;

use crate::{Category, CityId, Cost, Mode, RoadNetwork, RoutingError, Speed};

/// Speed driven on the roads of each category.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTable(FxHashMap<Category, Speed>);

impl Default for SpeedTable {
    fn default() -> Self {
        Self(FxHashMap::from_iter([
            (Category(1), Speed::from_units_per_hour(140.0)),
            (Category(2), Speed::from_units_per_hour(120.0)),
            (Category(3), Speed::from_units_per_hour(90.0)),
            (Category(4), Speed::from_units_per_hour(50.0)),
        ]))
    }
}

impl SpeedTable {
    /// Builds a table from the speed of each category.
    /// Fails if any speed is not strictly positive, since its travel times would not be valid
    /// edge weights.
    pub fn new(speeds: impl IntoIterator<Item = (Category, Speed)>) -> Result<Self, RoutingError> {
        let mut table = FxHashMap::default();

        for (category, speed) in speeds {
            if speed.units_per_hour() > 0.0 {
                table.insert(category, speed);
            } else {
                return Err(RoutingError::InvalidSpeed(category));
            }
        }

        Ok(Self(table))
    }

    pub fn get_speed(&self, category: Category) -> Result<Speed, RoutingError> {
        self.0
            .get(&category)
            .copied()
            .ok_or(RoutingError::UnknownCategory(category))
    }
}

/// Gets the cost of travelling the road between two adjacent cities.
///
/// The cost is the road length when looking for the shortest route, and the time needed to drive
/// the road at its category speed when looking for the fastest one. The category is only checked
/// in the latter case.
pub fn edge_weight<G: RoadNetwork>(
    speeds: &SpeedTable,
    graph: &G,
    from: CityId,
    to: CityId,
    category: Category,
    mode: Mode,
) -> Result<Cost, RoutingError> {
    let length = graph.get_distance(from, to)?;

    match mode {
        Mode::ShortestDistance => Ok(length.into()),
        Mode::FastestTime => {
            let speed = speeds.get_speed(category)?;
            Ok((length / speed).into())
        }
    }
}
