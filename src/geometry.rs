use crate::{Coordinate, Length};

/// Gets the Euclidean distance between two planar coordinates.
pub fn distance(a: Coordinate, b: Coordinate) -> Length {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    Length::from_units((dx * dx + dy * dy).sqrt())
}
