mod miller;

use geo::Point;
use serde::{Deserialize, Serialize};

pub use miller::{project, MillerProjection};

/// Maps incoming `(x_or_lon, y_or_lat)` pairs onto the plane the grid lives in.
pub trait Projection: Send + Sync {
    fn project(&self, x: f64, y: f64) -> Point;
}

/// Coordinates are already planar and are used as-is.
pub struct IdentityProjection;

impl Projection for IdentityProjection {
    fn project(&self, x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    #[default]
    Planar,
    Miller,
}

impl ProjectionKind {
    pub fn projection(&self) -> Box<dyn Projection> {
        match self {
            ProjectionKind::Planar => Box::new(IdentityProjection),
            ProjectionKind::Miller => Box::new(MillerProjection),
        }
    }
}
