mod interpolate;
mod partition;

pub use interpolate::{densify, InterpolationReport};
pub use partition::partition;
