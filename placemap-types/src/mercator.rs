//! Web Mercator (EPSG:3857) projection math.

use crate::cartesian::Point2;
use crate::geo::GeoPoint2d;

/// Semi-major axis of the WGS84 ellipsoid, in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Length of the equator in projected coordinates, in meters.
pub const EQUATOR_LENGTH: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS;

/// Width of a map tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// Latitude beyond which the projection is not defined.
pub const MAX_LATITUDE: f64 = 85.06;

/// Projects a geographic point into Web Mercator coordinates.
///
/// Returns `None` for points outside of the projection bounds (near the
/// poles), where the Y coordinate is not finite.
pub fn project(point: &GeoPoint2d) -> Option<Point2> {
    let x = EARTH_RADIUS * point.lon_rad();
    let y = EARTH_RADIUS
        * (std::f64::consts::FRAC_PI_4 + point.lat_rad() / 2.0)
            .tan()
            .ln();

    if x.is_finite() && y.is_finite() && point.lat().abs() <= MAX_LATITUDE {
        Some(Point2::new(x, y))
    } else {
        None
    }
}

/// Converts a Web Mercator point back into geographic coordinates.
pub fn unproject(point: &Point2) -> GeoPoint2d {
    let lat = 2.0 * (point.y / EARTH_RADIUS).exp().atan() - std::f64::consts::FRAC_PI_2;
    let lon = point.x / EARTH_RADIUS;

    GeoPoint2d::latlon(lat.to_degrees(), lon.to_degrees())
}

/// Resolution (meters per pixel) of the given zoom level of the standard
/// 256-pixel Web Mercator tile pyramid.
pub fn resolution(zoom: u32) -> f64 {
    EQUATOR_LENGTH / (TILE_SIZE as f64 * (1u64 << zoom) as f64)
}
