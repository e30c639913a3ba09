use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use plotly::common::{Marker, Mode, Title};
use plotly::layout::{Axis, Shape, ShapeLine, ShapeType};
use plotly::{Layout, Plot, Scatter};
use crate::error::{FieldError, FieldResult};
use crate::model::Field;
use crate::render::colors::ColorSelect;

/// Writes each field as an HTML plot of coloured cell rectangles.
pub struct HeatmapRenderer {
    output_dir: PathBuf,
    color_select: Arc<dyn ColorSelect>,
    draw_points: bool,
}

impl HeatmapRenderer {
    pub fn new(output_dir: &Path, color_select: Arc<dyn ColorSelect>) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            color_select,
            draw_points: false,
        }
    }

    pub fn with_points(mut self, draw_points: bool) -> Self {
        self.draw_points = draw_points;
        self
    }

    pub fn plot(&self, field: &Field) -> Plot {
        let mut layout = Layout::new()
            .title(Title::new(field.name()))
            .x_axis(Axis::new().range(vec![field.bounds().min_x, field.bounds().max_x()]))
            .y_axis(Axis::new().range(vec![field.bounds().min_y, field.bounds().max_y()]));

        for cell in field.render_cells() {
            let Some(color) = self.color_select.color(&cell) else {
                continue;
            };
            layout.add_shape(
                Shape::new()
                    .shape_type(ShapeType::Rect)
                    .x0(cell.origin_x)
                    .y0(cell.origin_y)
                    .x1(cell.origin_x + cell.width)
                    .y1(cell.origin_y + cell.height)
                    .fill_color(color.to_hex())
                    .line(ShapeLine::new().width(0.))
            );
        }

        let mut plot = Plot::new();
        if self.draw_points {
            let xs: Vec<f64> = field.points().iter().map(|p| p.x()).collect();
            let ys: Vec<f64> = field.points().iter().map(|p| p.y()).collect();
            let trace = Scatter::new(xs, ys)
                .mode(Mode::Markers)
                .marker(Marker::new().size(4))
                .name("stations");
            plot.add_trace(trace);
        }
        plot.set_layout(layout);
        plot
    }

    pub fn output_path(&self, field: &Field) -> PathBuf {
        self.output_dir.join(format!("{}.html", field.name()))
    }

    pub fn save(&self, field: &Field) -> FieldResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_path(field);
        let file_name = path.to_str().ok_or_else(|| FieldError::Render(format!("non UTF-8 output path {:?}", path)))?;
        self.plot(field).write_html(file_name);
        Ok(path)
    }
}
