use std::sync::Arc;
use rerun::{Boxes2D, RecordingStream, TextLog};
use crate::model::Field;
use crate::render::ColorSelect;

/// Optional visual log of a build. Implemented for `Option<Arc<RecordingStream>>` so callers
/// without a viewer can pass `None`.
pub trait Stream {
    fn stream_message(&self, path: &str, message: &str);

    fn stream_scalar(&self, path: &str, step: i64, scalar: f64);

    fn stream_field(&self, path: &str, field: &Field, color_select: &dyn ColorSelect);
}

/// Cell boxes as `(mins, sizes, rgb)`, skipping cells the colour selection does not draw.
pub(crate) fn field_boxes(field: &Field, color_select: &dyn ColorSelect) -> (Vec<[f32; 2]>, Vec<[f32; 2]>, Vec<(u8, u8, u8)>) {
    let mut mins = vec![];
    let mut sizes = vec![];
    let mut colors = vec![];
    for cell in field.render_cells() {
        if let Some(color) = color_select.color(&cell) {
            mins.push([cell.origin_x as f32, cell.origin_y as f32]);
            sizes.push([cell.width as f32, cell.height as f32]);
            colors.push((color.0, color.1, color.2));
        }
    }
    (mins, sizes, colors)
}

impl Stream for RecordingStream {
    fn stream_message(&self, path: &str, message: &str) {
        if let Err(err) = self.log(path, &TextLog::new(message)) {
            tracing::warn!("failed to stream message: {err}");
        }
    }

    fn stream_scalar(&self, path: &str, step: i64, scalar: f64) {
        self.set_time_sequence("pass", step);
        if let Err(err) = self.log(path, &rerun::Scalar::new(scalar)) {
            tracing::warn!("failed to stream scalar: {err}");
        }
    }

    fn stream_field(&self, path: &str, field: &Field, color_select: &dyn ColorSelect) {
        let (mins, sizes, colors) = field_boxes(field, color_select);
        let colors: Vec<rerun::Color> = colors.into_iter().map(|(r, g, b)| rerun::Color::from_rgb(r, g, b)).collect();
        let boxes = Boxes2D::from_mins_and_sizes(mins, sizes).with_colors(colors);
        if let Err(err) = self.log(path, &boxes) {
            tracing::warn!("failed to stream field: {err}");
        }
    }
}

impl Stream for Option<Arc<RecordingStream>> {
    fn stream_message(&self, path: &str, message: &str) {
        if let Some(stream) = self {
            stream.stream_message(path, message)
        }
    }

    fn stream_scalar(&self, path: &str, step: i64, scalar: f64) {
        if let Some(stream) = self {
            stream.stream_scalar(path, step, scalar)
        }
    }

    fn stream_field(&self, path: &str, field: &Field, color_select: &dyn ColorSelect) {
        if let Some(stream) = self {
            stream.stream_field(path, field, color_select)
        }
    }
}
