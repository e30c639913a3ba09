use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::constants::{DEFAULT_INTERPOLATION_ITERATIONS, DEFAULT_MIN_X, DEFAULT_MIN_Y, DEFAULT_SLICE_COUNT, DEFAULT_WIDTH, MAX_SLICE_COUNT};
use crate::error::{FieldError, FieldResult};
use crate::projection::ProjectionKind;

/// Square region covered by a field.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, width: f64) -> Self {
        Self { min_x, min_y, width }
    }

    pub fn height(&self) -> f64 {
        self.width
    }

    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_X, DEFAULT_MIN_Y, DEFAULT_WIDTH)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub bounds: BoundingBox,
    pub slice_count: usize,
    pub interpolation_iterations: usize,
    pub projection: ProjectionKind,
    /// Run the centroid-distance outlier filter before partitioning
    pub outlier_filter: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            bounds: BoundingBox::default(),
            slice_count: DEFAULT_SLICE_COUNT,
            interpolation_iterations: DEFAULT_INTERPOLATION_ITERATIONS,
            projection: ProjectionKind::Planar,
            outlier_filter: true,
        }
    }
}

impl FieldConfig {
    pub fn from_file(path: &Path) -> FieldResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: FieldConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_slice_count(mut self, slice_count: usize) -> Self {
        self.slice_count = slice_count;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.interpolation_iterations = iterations;
        self
    }

    pub fn with_projection(mut self, projection: ProjectionKind) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_outlier_filter(mut self, enabled: bool) -> Self {
        self.outlier_filter = enabled;
        self
    }

    pub fn validate(&self) -> FieldResult<()> {
        validate_grid(&self.bounds, self.slice_count)
    }
}

pub(crate) fn validate_grid(bounds: &BoundingBox, slice_count: usize) -> FieldResult<()> {
    if !bounds.min_x.is_finite() || !bounds.min_y.is_finite() {
        return Err(FieldError::InvalidConfig(format!("bounding box origin ({}, {}) is not finite", bounds.min_x, bounds.min_y)));
    }
    if !(bounds.width.is_finite() && bounds.width > 0.0) {
        return Err(FieldError::InvalidConfig(format!("width must be positive, got {}", bounds.width)));
    }
    if slice_count == 0 {
        return Err(FieldError::InvalidConfig("slice count must be positive".to_string()));
    }
    if slice_count > MAX_SLICE_COUNT || slice_count.checked_mul(slice_count).is_none() {
        return Err(FieldError::InvalidConfig(format!("slice count {} exceeds the maximum of {}", slice_count, MAX_SLICE_COUNT)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.slice_count, 25);
        assert_eq!(config.interpolation_iterations, 35);
        assert!(config.outlier_filter);
        assert_eq!(config.bounds.max_x(), 102.85 + 1.35);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: FieldConfig = serde_json::from_str(r#"{"slice_count": 10, "projection": "miller"}"#).unwrap();
        assert_eq!(config.slice_count, 10);
        assert_eq!(config.projection, ProjectionKind::Miller);
        assert_eq!(config.bounds, BoundingBox::default());
    }

    #[test]
    fn test_validate_rejects_degenerate_grid() {
        let config = FieldConfig::default().with_slice_count(0);
        assert!(matches!(config.validate(), Err(FieldError::InvalidConfig(_))));
        let config = FieldConfig::default().with_bounds(BoundingBox::new(0.0, 0.0, -1.0));
        assert!(matches!(config.validate(), Err(FieldError::InvalidConfig(_))));
        let config = FieldConfig::default().with_bounds(BoundingBox::new(f64::NAN, 0.0, 1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let config = FieldConfig::default().with_slice_count(1usize << 33);
        assert!(matches!(config.validate(), Err(FieldError::InvalidConfig(_))));
        let config = FieldConfig::default().with_slice_count(MAX_SLICE_COUNT + 1);
        assert!(matches!(config.validate(), Err(FieldError::InvalidConfig(_))));
        assert!(FieldConfig::default().with_slice_count(MAX_SLICE_COUNT).validate().is_ok());
    }
}
