mod outlier;

pub use outlier::{filter_outliers, Positioned};
