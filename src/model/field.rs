use geojson::{Feature, FeatureCollection, JsonObject};
use ndarray::{Array1, Array2};
use ndarray_stats::QuantileExt;
use serde::Serialize;
use serde_json::json;
use crate::model::cell::{Cell, CellValue};
use crate::model::config::BoundingBox;
use crate::model::point::MeasurementPoint;

/// The N×N grid built from one measurement batch.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) bounds: BoundingBox,
    pub(crate) slice_count: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) points: Vec<MeasurementPoint>,
}

/// What a renderer needs to draw one cell.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct RenderCell {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    pub value: Option<f64>,
    pub point_count: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FieldSummary {
    pub cells: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub points: usize,
    pub assigned_points: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn points(&self) -> &[MeasurementPoint] {
        &self.points
    }

    /// Cell at x-index `i`, y-index `j`.
    pub fn cell(&self, i: usize, j: usize) -> Option<&Cell> {
        if i >= self.slice_count || j >= self.slice_count {
            return None;
        }
        self.cells.get(i * self.slice_count + j)
    }

    pub fn cell_points<'a>(&'a self, cell: &'a Cell) -> impl Iterator<Item = &'a MeasurementPoint> + 'a {
        cell.point_indices.iter().map(move |idx| &self.points[*idx])
    }

    pub fn resolved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value.is_resolved()).count()
    }

    /// Values indexed `[x-index, y-index]`.
    pub fn value_grid(&self) -> Array2<Option<f64>> {
        let n = self.slice_count;
        Array2::from_shape_fn((n, n), |(i, j)| self.cells[i * n + j].value.value())
    }

    pub fn render_cells(&self) -> Vec<RenderCell> {
        self.cells.iter().map(|cell| RenderCell {
            origin_x: cell.origin.x,
            origin_y: cell.origin.y,
            width: cell.width,
            height: cell.height,
            value: cell.value.value(),
            point_count: cell.point_count(),
        }).collect()
    }

    pub fn summary(&self) -> FieldSummary {
        let values: Array1<f64> = self.cells.iter().filter_map(|cell| cell.value.value()).collect();
        let resolved = values.len();
        FieldSummary {
            cells: self.cells.len(),
            resolved,
            unresolved: self.cells.len() - resolved,
            points: self.points.len(),
            assigned_points: self.cells.iter().map(Cell::point_count).sum(),
            min: values.min().ok().copied(),
            max: values.max().ok().copied(),
            mean: values.mean(),
        }
    }

    pub fn to_geojson(&self) -> String {
        let features = self.cells.iter().map(|cell| {
            let mut properties = JsonObject::new();
            let value = match cell.value {
                CellValue::Resolved(v) => json!(v),
                CellValue::Unresolved => json!(null),
            };
            properties.insert("value".to_string(), value);
            properties.insert("point_count".to_string(), json!(cell.point_count()));
            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(&cell.rect().to_polygon()))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        }).collect();

        let mut foreign_members = JsonObject::new();
        foreign_members.insert("name".to_string(), json!(self.name));
        let collection = FeatureCollection {
            bbox: Some(vec![self.bounds.min_x, self.bounds.min_y, self.bounds.max_x(), self.bounds.max_y()]),
            features,
            foreign_members: Some(foreign_members),
        };
        geojson::GeoJson::from(collection).to_string()
    }
}
