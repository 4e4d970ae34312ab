//! Geographic primitives shared by the placemap crates: geographic points,
//! screen-space points and sizes, and the Web Mercator projection used to
//! convert between the two.

pub mod cartesian;
pub mod geo;
pub mod mercator;

pub use cartesian::{Point2, Size};
pub use geo::GeoPoint2d;
