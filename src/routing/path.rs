use rustc_hash::FxHashMap;

use crate::CityId;

/// Unpacks the route from the destination back to the origin of the search, and returns it from
/// the origin to the destination.
///
/// Returns an empty route if the destination has no previous city, which is also the case when
/// the destination is the origin: a trivial route must be told apart by the caller.
pub fn unpack_path(previous: &FxHashMap<CityId, CityId>, destination: CityId) -> Vec<CityId> {
    if !previous.contains_key(&destination) {
        return vec![];
    }

    let mut cities = vec![destination];
    let mut next = destination;

    while let Some(&city) = previous.get(&next) {
        next = city;
        cities.push(city);
    }

    cities.reverse();
    cities
}
