use geo::Coord;
use rayon::prelude::*;
use tracing::debug;
use crate::constants::{MIN_RESOLVED_NEIGHBORS, NEIGHBOR_TOLERANCE};
use crate::model::{Cell, CellValue, Field};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterpolationReport {
    /// Number of cells resolved in each pass
    pub filled_per_pass: Vec<usize>,
    pub unresolved: usize,
}

impl InterpolationReport {
    pub fn total_filled(&self) -> usize {
        self.filled_per_pass.iter().sum()
    }
}

fn same_origin(a: &Coord, b: &Coord) -> bool {
    (a.x - b.x).abs() < NEIGHBOR_TOLERANCE && (a.y - b.y).abs() < NEIGHBOR_TOLERANCE
}

/// Mean of the resolved neighbours of `cell`, if at least three of them are known.
fn neighbor_mean(cell: &Cell, resolved: &[(Coord, f64)]) -> Option<f64> {
    let neighbors = cell.neighbor_origins();
    let mut total = 0.0;
    let mut count = 0;
    for (origin, value) in resolved {
        for neighbor in &neighbors {
            if same_origin(origin, neighbor) {
                total += value;
                count += 1;
            }
        }
    }
    if count >= MIN_RESOLVED_NEIGHBORS {
        Some(total / count as f64)
    } else {
        None
    }
}

/// Fills unresolved cells from their resolved neighbours, running every one of `iterations` passes.
///
/// Resolved cells are snapshotted at the start of each pass, so a cell filled during a pass only
/// counts as a neighbour from the following pass on. Resolved cells are never touched.
pub fn densify(field: &mut Field, iterations: usize) -> InterpolationReport {
    let mut report = InterpolationReport::default();

    for pass in 0..iterations {
        let resolved: Vec<(Coord, f64)> = field.cells.iter()
            .filter_map(|cell| cell.value.value().map(|v| (cell.origin, v)))
            .collect();

        let updates: Vec<(usize, f64)> = field.cells.par_iter()
            .enumerate()
            .filter(|(_, cell)| !cell.value.is_resolved())
            .filter_map(|(idx, cell)| neighbor_mean(cell, &resolved).map(|v| (idx, v)))
            .collect();

        for (idx, value) in &updates {
            field.cells[*idx].value = CellValue::Resolved(*value);
        }
        debug!(field = %field.name, pass, filled = updates.len(), "interpolation pass");
        report.filled_per_pass.push(updates.len());
    }

    report.unresolved = field.cells.len() - field.resolved_count();
    report
}
