use super::models::Trip;
use std::collections::HashMap;
use tracing::warn;

/// Fills in missing trip directions from the distinct cleaned headsigns of
/// each route, in first-seen order. Feed-provided direction ids are kept.
/// A route with more than two distinct headsigns leaves the excess trips
/// unassigned.
pub fn infer_directions(trips: &mut [Trip]) {
    let mut headsigns_per_route: HashMap<u64, Vec<String>> = HashMap::new();

    for trip in trips.iter_mut() {
        if trip.direction.is_some() {
            continue;
        }
        let headsigns = headsigns_per_route.entry(trip.route_id).or_default();
        let index = match headsigns.iter().position(|h| h == &trip.headsign) {
            Some(index) => index,
            None => {
                headsigns.push(trip.headsign.clone());
                headsigns.len() - 1
            }
        };
        if index < 2 {
            trip.direction = Some(index as u8);
        } else {
            warn!(
                "Route {} has more than two headsigns, trip {} keeps no direction",
                trip.route_id, trip.trip_id
            );
        }
    }
}
