use geo::Point;
use crate::constants::RAW_ROW_ARITY;
use crate::error::RowError;
use crate::projection::Projection;

/// A single station sample, positioned on the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementPoint {
    pub station_id: String,
    pub station_name: String,
    pub batch: String,
    pub position: Point,
    pub value: f64,
}

impl MeasurementPoint {
    pub fn new(station_id: &str, station_name: &str, batch: &str, x: f64, y: f64, value: f64) -> Self {
        Self {
            station_id: station_id.to_string(),
            station_name: station_name.to_string(),
            batch: batch.to_string(),
            position: Point::new(x, y),
            value,
        }
    }

    /// Parses `(station_id, station_name, x_or_lon, y_or_lat, value)`. Coordinates pass through
    /// `projection` before they are stored.
    pub fn from_row<S: AsRef<str>>(row: &[S], line: usize, batch: &str, projection: &dyn Projection) -> Result<Self, RowError> {
        if row.len() != RAW_ROW_ARITY {
            return Err(RowError::WrongArity { line, expected: RAW_ROW_ARITY, actual: row.len() });
        }
        let x = parse_number(row[2].as_ref(), "x", line)?;
        let y = parse_number(row[3].as_ref(), "y", line)?;
        let value = parse_number(row[4].as_ref(), "value", line)?;
        let position = projection.project(x, y);

        Ok(Self {
            station_id: row[0].as_ref().trim().to_string(),
            station_name: row[1].as_ref().trim().to_string(),
            batch: batch.to_string(),
            position,
            value,
        })
    }

    pub fn x(&self) -> f64 {
        self.position.x()
    }

    pub fn y(&self) -> f64 {
        self.position.y()
    }
}

fn parse_number(raw: &str, field: &'static str, line: usize) -> Result<f64, RowError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RowError::InvalidNumber { line, field, raw: raw.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use crate::projection::IdentityProjection;
    use super::*;

    #[test]
    fn test_from_row() {
        let row = ["1001A", "Lanzhou", "103.84", "36.05", "42.5"];
        let point = MeasurementPoint::from_row(&row, 0, "day1.csv", &IdentityProjection).unwrap();
        assert_eq!(point.station_id, "1001A");
        assert_eq!(point.batch, "day1.csv");
        assert_eq!(point.x(), 103.84);
        assert_eq!(point.y(), 36.05);
        assert_eq!(point.value, 42.5);
    }

    #[test]
    fn test_from_row_wrong_arity() {
        let row = ["1001A", "Lanzhou", "103.84", "36.05"];
        let err = MeasurementPoint::from_row(&row, 3, "b", &IdentityProjection).unwrap_err();
        assert_eq!(err, RowError::WrongArity { line: 3, expected: 5, actual: 4 });
    }

    #[test]
    fn test_from_row_not_a_number() {
        let row = ["1001A", "Lanzhou", "103.84", "north", "12"];
        let err = MeasurementPoint::from_row(&row, 7, "b", &IdentityProjection).unwrap_err();
        assert!(matches!(err, RowError::InvalidNumber { line: 7, field: "y", .. }));

        let row = ["1001A", "Lanzhou", "103.84", "36.0", "NaN"];
        assert!(MeasurementPoint::from_row(&row, 8, "b", &IdentityProjection).is_err());
    }
}
