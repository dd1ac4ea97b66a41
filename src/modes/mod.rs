//! The drawing modes.

mod averaging;
mod bezier;
mod fractal;
mod geometry;
mod points;
mod sketchy;

pub use averaging::Averaging;
pub use bezier::BezierMode;
pub use fractal::{FractalMode, FractalState};
pub use geometry::{Geometry, Handle};
pub use points::Points;
pub use sketchy::Sketchy;

use kurbo::{Point, Size};

/// Point markers are filled circles of this radius.
pub(crate) const MARKER_RADIUS: f64 = 27.0;

/// The default placement of a two-point layout: the first point a third of
/// the way in from the bottom-left, the second a third in from the top-right.
pub(crate) fn default_pair(size: Size) -> (Point, Point) {
    let a = Point::new(size.width / 3.0, 2.0 * size.height / 3.0);
    let b = Point::new(2.0 * size.width / 3.0, size.height / 3.0);
    (a, b)
}
