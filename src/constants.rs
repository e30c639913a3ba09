/// Earth radius used by the Miller projection, in metres.
pub const EARTH_RADIUS: f64 = 6_381_372.0;
pub const MILLER_SHAPE: f64 = 2.3;

/// Neighbour origins closer than this on both axes are considered the same cell.
pub const NEIGHBOR_TOLERANCE: f64 = 1e-4;
pub const MIN_RESOLVED_NEIGHBORS: usize = 3;

/// Upper bound on grid resolution; keeps `slice_count²` cells addressable and allocatable.
pub const MAX_SLICE_COUNT: usize = 4096;

pub const DEFAULT_MIN_X: f64 = 102.85;
pub const DEFAULT_MIN_Y: f64 = 35.78;
pub const DEFAULT_WIDTH: f64 = 1.35;
pub const DEFAULT_SLICE_COUNT: usize = 25;
pub const DEFAULT_INTERPOLATION_ITERATIONS: usize = 35;

/// Value-column tokens that mark a header row in the station CSV exports.
pub const HEADER_TOKENS: [&str; 2] = ["pm", "PM25_V"];
pub const RAW_ROW_ARITY: usize = 5;
