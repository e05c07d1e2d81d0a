//! Nearest-free-spot resolution. Pure computation: no I/O, no state, safe to
//! call from any task or thread.

use crate::domain::model::{Coordinate, ParkingSpot, Resolution, ResolutionResult};

/// Mean Earth radius in meters (6371 km sphere).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates via the haversine formula,
/// in meters. Inputs are decimal degrees.
pub fn haversine_distance_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Selects the nearest spot whose occupancy state is exactly free. Unknown
/// occupancy (`occupied: null`) is excluded from the candidate set. An empty
/// candidate set yields `NotFound`, which callers surface as a normal
/// business outcome.
///
/// Ties keep the first spot in input order; the tie-break is arbitrary but
/// deterministic.
pub fn resolve_nearest_free_spot(
    reference: Coordinate,
    spots: &[ParkingSpot],
) -> ResolutionResult {
    let mut nearest: Option<Resolution> = None;

    for spot in spots.iter().filter(|spot| spot.is_free()) {
        let distance_m = haversine_distance_m(reference, spot.coordinate());
        let closer = match &nearest {
            Some(current) => distance_m < current.distance_m,
            None => true,
        };
        if closer {
            nearest = Some(Resolution {
                spot: spot.clone(),
                distance_m,
            });
        }
    }

    match nearest {
        Some(resolution) => ResolutionResult::Found(resolution),
        None => ResolutionResult::NotFound,
    }
}
