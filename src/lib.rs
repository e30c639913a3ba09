pub mod builder;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod grid;
pub mod io;
pub mod model;
pub mod projection;
pub mod render;
pub mod stream;

pub use builder::{BatchOutcome, FieldBuilder, RawBatch};
pub use error::{FieldError, FieldResult, RowError};
pub use model::{BoundingBox, Cell, CellValue, Field, FieldConfig, MeasurementPoint};
