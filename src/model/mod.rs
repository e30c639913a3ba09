pub mod cell;
pub mod config;
pub mod field;
pub mod point;

pub use cell::{Cell, CellValue};
pub use config::{BoundingBox, FieldConfig};
pub use field::{Field, FieldSummary, RenderCell};
pub use point::MeasurementPoint;
