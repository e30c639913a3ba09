use geo::{EuclideanDistance, Point};
use crate::model::MeasurementPoint;

pub trait Positioned {
    fn position(&self) -> Point;
}

impl Positioned for MeasurementPoint {
    fn position(&self) -> Point {
        self.position
    }
}

/// Drops items whose distance to the centroid deviates too much from the mean distance.
///
/// An item is kept only if `(d - mean(d))^2` is strictly below the mean of that same squared
/// deviation over all items. Returns `None` for empty input. Identical positions give a zero
/// mean deviation, so nothing survives.
pub fn filter_outliers<T: Positioned>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        return None;
    }
    let count = items.len() as f64;
    let center = Point::new(
        items.iter().map(|item| item.position().x()).sum::<f64>() / count,
        items.iter().map(|item| item.position().y()).sum::<f64>() / count,
    );

    let distances: Vec<f64> = items.iter().map(|item| item.position().euclidean_distance(&center)).collect();
    let avg_distance = distances.iter().sum::<f64>() / count;
    let deviations: Vec<f64> = distances.iter().map(|d| (d - avg_distance).powi(2)).collect();
    let avg_deviation = deviations.iter().sum::<f64>() / count;

    Some(
        items.into_iter()
            .zip(deviations)
            .filter(|(_, deviation)| *deviation < avg_deviation)
            .map(|(item, _)| item)
            .collect()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Positioned for (f64, f64) {
        fn position(&self) -> Point {
            Point::new(self.0, self.1)
        }
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<(f64, f64)> = vec![];
        assert!(filter_outliers(empty).is_none());
    }

    #[test]
    fn test_identical_points_all_dropped() {
        let points = vec![(1.0, 2.0); 4];
        assert!(filter_outliers(points).unwrap().is_empty());
    }

    #[test]
    fn test_far_point_dropped() {
        let points = vec![(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0), (12.0, 0.0), (0.5, 0.5)];
        let kept = filter_outliers(points).unwrap();
        assert_eq!(kept, vec![(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0), (0.5, 0.5)]);
    }

    #[test]
    fn test_equal_deviation_is_excluded() {
        // Every distance is 1, so every deviation equals the mean deviation of 0.
        let points = vec![(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)];
        assert!(filter_outliers(points).unwrap().is_empty());
    }

    #[test]
    fn test_nonzero_equal_deviation_is_excluded() {
        // Distances 0, 0, 2, 2 -> mean 1; every deviation is 1.0, equal to the mean.
        let points = vec![(0.0, 0.0), (0.0, 0.0), (2.0, 0.0), (-2.0, 0.0)];
        assert!(filter_outliers(points).unwrap().is_empty());
    }

    #[test]
    fn test_centre_point_dropped() {
        // Distances 1, 1, 1, 1, 0 -> mean 0.8; deviations 0.04 x4 and 0.64 -> mean 0.16.
        // The centre point itself is the one dropped.
        let points = vec![(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0), (0.0, 0.0)];
        let kept = filter_outliers(points).unwrap();
        assert_eq!(kept.len(), 4);
        assert!(!kept.contains(&(0.0, 0.0)));
    }
}
