//! [`MapView`] specifies the currently visible part of the map.

use placemap_types::cartesian::{Point2, Size};
use placemap_types::geo::GeoPoint2d;
use placemap_types::mercator;

/// Position and zoom level of the map viewport.
///
/// The view is a value type. All modifying methods return a new instance, and
/// the map is updated by giving it the new view through [`crate::Map::set_view`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    center: GeoPoint2d,
    zoom: u32,
    size: Size,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: GeoPoint2d::default(),
            zoom: 0,
            size: Size::default(),
        }
    }
}

impl MapView {
    /// Creates a new view centered at the given point.
    pub fn new(center: GeoPoint2d, zoom: u32) -> Self {
        Self {
            center,
            zoom,
            ..Default::default()
        }
    }

    /// Center of the viewport.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Zoom level of the standard Web Mercator tile pyramid.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Size of the viewport in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resolution of the view in meters per pixel.
    pub fn resolution(&self) -> f64 {
        mercator::resolution(self.zoom)
    }

    /// Returns a copy of the view with the given center.
    pub fn with_center(&self, center: GeoPoint2d) -> Self {
        Self { center, ..*self }
    }

    /// Returns a copy of the view with the given zoom level.
    pub fn with_zoom(&self, zoom: u32) -> Self {
        Self { zoom, ..*self }
    }

    /// Returns a copy of the view with the given viewport size.
    pub fn with_size(&self, size: Size) -> Self {
        Self { size, ..*self }
    }

    /// Converts a geographic position into screen pixel coordinates relative
    /// to the top-left corner of the viewport.
    ///
    /// Returns `None` if the point or the view center cannot be projected.
    pub fn geo_to_screen(&self, point: &GeoPoint2d) -> Option<Point2> {
        let center = mercator::project(&self.center)?;
        let projected = mercator::project(point)?;
        let resolution = self.resolution();

        Some(Point2::new(
            self.size.half_width() + (projected.x - center.x) / resolution,
            self.size.half_height() - (projected.y - center.y) / resolution,
        ))
    }

    /// Converts screen pixel coordinates into a geographic position.
    pub fn screen_to_geo(&self, point: &Point2) -> Option<GeoPoint2d> {
        let center = mercator::project(&self.center)?;
        let resolution = self.resolution();

        let projected = Point2::new(
            center.x + (point.x - self.size.half_width()) * resolution,
            center.y - (point.y - self.size.half_height()) * resolution,
        );

        Some(mercator::unproject(&projected))
    }
}
