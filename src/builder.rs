use std::sync::Arc;
use rayon::prelude::*;
use rerun::RecordingStream;
use tracing::{info, warn};
use crate::error::{FieldError, FieldResult, RowError};
use crate::filtering::filter_outliers;
use crate::grid::{densify, partition, InterpolationReport};
use crate::model::{Field, FieldConfig, MeasurementPoint};
use crate::projection::Projection;
use crate::render::{ColorSelect, PmValueColorSelect};
use crate::stream::Stream;

/// Rows read from one source, processed into one field.
#[derive(Clone, Debug)]
pub struct RawBatch {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub field: Field,
    pub rejected_rows: Vec<RowError>,
    pub interpolation: InterpolationReport,
}

pub struct FieldBuilder {
    config: FieldConfig,
    projection: Box<dyn Projection>,
    rerun_stream: Option<Arc<RecordingStream>>,
    color_select: Arc<dyn ColorSelect>,
}

impl FieldBuilder {
    pub fn new(config: FieldConfig) -> FieldResult<Self> {
        config.validate()?;
        let projection = config.projection.projection();
        Ok(Self {
            config,
            projection,
            rerun_stream: None,
            color_select: Arc::new(PmValueColorSelect),
        })
    }

    pub fn with_rerun_stream(mut self, stream: Arc<RecordingStream>) -> Self {
        self.rerun_stream = Some(stream);
        self
    }

    /// Colours used when streaming fields to the viewer.
    pub fn with_color_select(mut self, color_select: Arc<dyn ColorSelect>) -> Self {
        self.color_select = color_select;
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Parses rows into points, collecting the rows that fail instead of aborting.
    pub fn parse_rows<R, S>(&self, batch_name: &str, rows: &[R]) -> (Vec<MeasurementPoint>, Vec<RowError>)
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut points = vec![];
        let mut rejected = vec![];
        for (line, row) in rows.iter().enumerate() {
            match MeasurementPoint::from_row(row.as_ref(), line, batch_name, self.projection.as_ref()) {
                Ok(point) => points.push(point),
                Err(err) => {
                    warn!(batch = batch_name, "skipping row: {err}");
                    self.rerun_stream.stream_message(&format!("{batch_name}/rejected"), &err.to_string());
                    rejected.push(err);
                }
            }
        }
        (points, rejected)
    }

    pub fn build<R, S>(&self, batch_name: &str, rows: &[R]) -> FieldResult<BatchOutcome>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let (points, rejected_rows) = self.parse_rows(batch_name, rows);
        let parsed = points.len();

        let points = if self.config.outlier_filter {
            filter_outliers(points).unwrap_or_default()
        } else {
            points
        };
        if points.is_empty() {
            return Err(FieldError::EmptyBatch(batch_name.to_string()));
        }
        info!(batch = batch_name, parsed, kept = points.len(), rejected = rejected_rows.len(), "filtered measurement points");

        let mut field = partition(batch_name, points, self.config.bounds, self.config.slice_count)?;
        let interpolation = densify(&mut field, self.config.interpolation_iterations);

        for (pass, filled) in interpolation.filled_per_pass.iter().enumerate() {
            self.rerun_stream.stream_scalar(&format!("{batch_name}/filled"), pass as i64, *filled as f64);
        }
        self.rerun_stream.stream_field(&format!("{batch_name}/field"), &field, self.color_select.as_ref());

        let summary = field.summary();
        info!(
            batch = batch_name,
            resolved = summary.resolved,
            unresolved = summary.unresolved,
            assigned_points = summary.assigned_points,
            "built field"
        );

        Ok(BatchOutcome { field, rejected_rows, interpolation })
    }

    /// Builds every batch independently, in parallel. Results keep the input order.
    pub fn build_all(&self, batches: &[RawBatch]) -> Vec<(String, FieldResult<BatchOutcome>)> {
        batches.par_iter()
            .map(|batch| (batch.name.clone(), self.build(&batch.name, &batch.rows)))
            .collect()
    }
}
