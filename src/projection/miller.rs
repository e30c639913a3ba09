use std::f64::consts::PI;
use geo::Point;
use crate::constants::{EARTH_RADIUS, MILLER_SHAPE};
use crate::projection::Projection;

/// Miller cylindrical projection of `(longitude, latitude)` in degrees.
pub fn project(longitude: f64, latitude: f64) -> (f64, f64) {
    let l = EARTH_RADIUS * PI * 2.0;
    let h = l / 2.0;

    let x = longitude * PI / 180.0;
    let y = latitude * PI / 180.0;
    let y = 1.25 * (0.25 * PI + 0.4 * y).tan().ln();

    let x = (l / 2.0) + (l / (2.0 * PI)) * x;
    let y = (h / 2.0) - (h / (2.0 * MILLER_SHAPE)) * y;
    (x, y)
}

pub struct MillerProjection;

impl Projection for MillerProjection {
    fn project(&self, x: f64, y: f64) -> Point {
        project(x, y).into()
    }
}
