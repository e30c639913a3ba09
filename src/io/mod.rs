pub mod csv_source;

pub use csv_source::{discover_batches, read_batch};
