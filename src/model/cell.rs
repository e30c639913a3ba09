use geo::{coord, Coord, Rect};
use serde::Serialize;

/// Aggregated value of a cell. `Unresolved` is the NO_DATA state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum CellValue {
    Resolved(f64),
    Unresolved,
}

impl CellValue {
    pub fn is_resolved(&self) -> bool {
        matches!(self, CellValue::Resolved(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            CellValue::Resolved(v) => Some(*v),
            CellValue::Unresolved => None,
        }
    }

    /// Legacy `-1` encoding for renderers that expect a negative NO_DATA marker.
    pub fn as_sentinel(&self) -> f64 {
        self.value().unwrap_or(-1.0)
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    pub origin: Coord,
    pub width: f64,
    pub height: f64,
    pub value: CellValue,
    /// Indices into the owning field's point list
    pub(crate) point_indices: Vec<usize>,
}

impl Cell {
    pub fn new(origin: Coord, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
            value: CellValue::Unresolved,
            point_indices: vec![],
        }
    }

    /// Open-rectangle test; points on an edge belong to no cell.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let max_x = self.origin.x + self.width;
        let max_y = self.origin.y + self.height;
        self.origin.x < x && x < max_x && self.origin.y < y && y < max_y
    }

    pub fn point_indices(&self) -> &[usize] {
        &self.point_indices
    }

    pub fn point_count(&self) -> usize {
        self.point_indices.len()
    }

    /// Origins of the 8 surrounding cells: N, S, E, W, then the diagonals.
    pub fn neighbor_origins(&self) -> [Coord; 8] {
        let Coord { x, y } = self.origin;
        let (w, h) = (self.width, self.height);
        [
            coord! { x: x, y: y + h },
            coord! { x: x, y: y - h },
            coord! { x: x + w, y: y },
            coord! { x: x - w, y: y },
            coord! { x: x - w, y: y - h },
            coord! { x: x + w, y: y - h },
            coord! { x: x - w, y: y + h },
            coord! { x: x + w, y: y + h },
        ]
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.origin, coord! { x: self.origin.x + self.width, y: self.origin.y + self.height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_open() {
        let cell = Cell::new(coord! { x: 0.0, y: 0.0 }, 1.0, 1.0);
        assert!(cell.contains(0.5, 0.5));
        assert!(!cell.contains(0.0, 0.5));
        assert!(!cell.contains(1.0, 0.5));
        assert!(!cell.contains(0.5, 1.0));
        assert!(!cell.contains(0.5, 0.0));
        assert!(!cell.contains(1.5, 0.5));
    }

    #[test]
    fn test_neighbor_origins() {
        let cell = Cell::new(coord! { x: 2.0, y: 2.0 }, 1.0, 0.5);
        let origins = cell.neighbor_origins();
        assert_eq!(origins[0], coord! { x: 2.0, y: 2.5 });
        assert_eq!(origins[3], coord! { x: 1.0, y: 2.0 });
        assert_eq!(origins[7], coord! { x: 3.0, y: 2.5 });
        assert!(!origins.contains(&cell.origin));
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(CellValue::Unresolved.as_sentinel(), -1.0);
        assert_eq!(CellValue::Resolved(12.5).as_sentinel(), 12.5);
    }
}
