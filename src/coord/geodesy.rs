//! Great-circle geometry on a spherical Earth
//!
//! Distance, initial bearing, destination point and midpoint, following the
//! spherical formulas from <http://www.movable-type.co.uk/scripts/latlong.html>.
//!
//! Inputs and outputs are degrees; radians only exist inside each function.
//! Every operation returns a new value and never touches its inputs.

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::GeoPoint;

/// Calculate the distance between two points in kilometers (Haversine formula)
///
/// Symmetric, and zero for coincident points. The haversine term is clamped
/// to [0, 1] so rounding near antipodal pairs cannot produce NaN.
pub fn great_circle_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial bearing (forward azimuth) from `a` towards `b`
///
/// # Returns
/// Degrees clockwise from true north, signed in (-180, 180]. Use
/// [`normalize_bearing`] for a 0-360 compass value.
///
/// Not symmetric: the bearing back from `b` generally differs from the
/// reverse of this one because great circles cross meridians at varying angles.
pub fn bearing_to(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    wrap_degrees(y.atan2(x).to_degrees())
}

/// Project a point `distance_km` along the great circle starting at `bearing_deg`
///
/// # Arguments
/// * `origin` - Starting point
/// * `distance_km` - Distance to travel in kilometers
/// * `bearing_deg` - Initial compass bearing in degrees
///
/// # Returns
/// The destination, with its longitude normalized into (-180, 180] so paths
/// crossing the antimeridian stay in range.
pub fn point_at_distance_and_bearing(
    origin: &GeoPoint,
    distance_km: f64,
    bearing_deg: f64,
) -> GeoPoint {
    let angular = distance_km / EARTH_RADIUS_KM;
    let bearing = bearing_deg.to_radians();

    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();

    let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let y = bearing.sin() * angular.sin() * lat1.cos();
    let x = angular.cos() - lat1.sin() * lat2.sin();
    let lng2 = lng1 + y.atan2(x);

    GeoPoint::new(lat2.to_degrees(), normalize_longitude(lng2.to_degrees()))
}

/// Midpoint along the great circle between `a` and `b`
///
/// The result carries no address or location type.
pub fn midpoint_to(a: &GeoPoint, b: &GeoPoint) -> GeoPoint {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let lng1 = a.lng.to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let bx = lat2.cos() * delta_lng.cos();
    let by = lat2.cos() * delta_lng.sin();

    let lat3 = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lng3 = lng1 + by.atan2(lat1.cos() + bx);

    GeoPoint::new(lat3.to_degrees(), normalize_longitude(lng3.to_degrees()))
}

/// Wrap a longitude in degrees into (-180, 180]
pub fn normalize_longitude(lng: f64) -> f64 {
    wrap_degrees(lng)
}

/// Wrap a bearing in degrees into [0, 360)
pub fn normalize_bearing(bearing: f64) -> f64 {
    let wrapped = bearing.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
