use geo::coord;
use rayon::prelude::*;
use crate::error::FieldResult;
use crate::model::config::validate_grid;
use crate::model::{BoundingBox, Cell, CellValue, Field, MeasurementPoint};

/// Splits `bounds` into `slice_count`² cells and averages the points falling strictly inside each.
///
/// Cells are ordered with the x-index outer and the y-index inner. Points on a shared edge or
/// outside the box are kept on the field but assigned to no cell.
pub fn partition(name: &str, points: Vec<MeasurementPoint>, bounds: BoundingBox, slice_count: usize) -> FieldResult<Field> {
    validate_grid(&bounds, slice_count)?;

    let width = bounds.width / slice_count as f64;
    let height = bounds.height() / slice_count as f64;

    let mut cells = Vec::with_capacity(slice_count * slice_count);
    for i in 0..slice_count {
        for j in 0..slice_count {
            let origin = coord! { x: bounds.min_x + width * i as f64, y: bounds.min_y + height * j as f64 };
            cells.push(Cell::new(origin, width, height));
        }
    }

    cells.par_iter_mut().for_each(|cell| {
        cell.point_indices = points.iter()
            .enumerate()
            .filter(|(_, point)| cell.contains(point.x(), point.y()))
            .map(|(idx, _)| idx)
            .collect();
        if !cell.point_indices.is_empty() {
            let total: f64 = cell.point_indices.iter().map(|idx| points[*idx].value).sum();
            cell.value = CellValue::Resolved(total / cell.point_indices.len() as f64);
        }
    });

    Ok(Field {
        name: name.to_string(),
        bounds,
        slice_count,
        cells,
        points,
    })
}
