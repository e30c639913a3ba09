pub mod colors;
pub mod heatmap;

pub use colors::{ColorSelect, DotCountColorSelect, PmValueColorSelect, Rgb};
pub use heatmap::HeatmapRenderer;
