use crate::model::RenderCell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub trait ColorSelect: Send + Sync {
    /// `None` means the cell is not drawn.
    fn color(&self, cell: &RenderCell) -> Option<Rgb>;
}

/// Colours by how many stations fell into the cell.
pub struct DotCountColorSelect;

impl ColorSelect for DotCountColorSelect {
    fn color(&self, cell: &RenderCell) -> Option<Rgb> {
        let color = match cell.point_count {
            0 => Rgb(0, 0, 0),
            1..=5 => Rgb(0, 128, 0),
            6..=10 => Rgb(191, 191, 0),
            _ => Rgb(0, 0, 255),
        };
        Some(color)
    }
}

// Green to red in 0x11 steps
const PM_RAMP: [Rgb; 25] = [
    Rgb(0x00, 0xcc, 0), Rgb(0x11, 0xcc, 0), Rgb(0x22, 0xcc, 0), Rgb(0x33, 0xcc, 0), Rgb(0x44, 0xcc, 0),
    Rgb(0x55, 0xcc, 0), Rgb(0x66, 0xcc, 0), Rgb(0x77, 0xcc, 0), Rgb(0x88, 0xcc, 0), Rgb(0x99, 0xcc, 0),
    Rgb(0xaa, 0xcc, 0), Rgb(0xbb, 0xcc, 0), Rgb(0xcc, 0xcc, 0), Rgb(0xcc, 0xbb, 0), Rgb(0xcc, 0xaa, 0),
    Rgb(0xcc, 0x99, 0), Rgb(0xcc, 0x88, 0), Rgb(0xcc, 0x77, 0), Rgb(0xcc, 0x66, 0), Rgb(0xcc, 0x55, 0),
    Rgb(0xcc, 0x44, 0), Rgb(0xcc, 0x33, 0), Rgb(0xcc, 0x22, 0), Rgb(0xcc, 0x11, 0), Rgb(0xcc, 0x00, 0),
];
const PM_FIRST_THRESHOLD: f64 = 5.0;
const PM_THRESHOLD_STEP: f64 = 4.0;
const PM_LIMIT: f64 = 101.0;

/// Colours by PM value: thresholds 5, 9, 13, ... up to 97 each pick the next ramp step.
/// Unresolved cells are white; values at or above the last threshold are not drawn.
pub struct PmValueColorSelect;

impl PmValueColorSelect {
    fn thresholds() -> impl Iterator<Item = (f64, Rgb)> {
        (0..)
            .map(|k| PM_FIRST_THRESHOLD + PM_THRESHOLD_STEP * k as f64)
            .take_while(|threshold| *threshold < PM_LIMIT)
            .zip(PM_RAMP)
    }
}

impl ColorSelect for PmValueColorSelect {
    fn color(&self, cell: &RenderCell) -> Option<Rgb> {
        let value = match cell.value {
            Some(v) => v,
            None => return Some(Rgb(0xff, 0xff, 0xff)),
        };
        Self::thresholds()
            .find(|(threshold, _)| value < *threshold)
            .map(|(_, color)| color)
    }
}
