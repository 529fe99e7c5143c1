//! Common operations on f64 points in D-dimensional space.

use parry3d_f64::na::Point;

/// Returns the euclidean distance between two points in D-dimensional space.
///
/// # Arguments
///
/// * `a`: the first point
/// * `b`: the second point
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use fpsample::common::points::dist;
/// use fpsample::Point3;
/// let a = Point3::new(1.0, 2.0, 2.0);
/// let b = Point3::new(1.0, 5.0, 6.0);
/// assert_eq!(dist(&a, &b), 5.0);
/// ```
pub fn dist<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> f64 {
    (a - b).norm()
}

/// Returns the index of the first point which has a NaN or infinite coordinate, or `None` if
/// every coordinate of every point is finite.
///
/// # Examples
///
/// ```
/// use fpsample::common::points::first_non_finite;
/// use fpsample::Point3;
/// let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(f64::NAN, 1.0, 2.0)];
/// assert_eq!(first_non_finite(&points), Some(1));
/// ```
pub fn first_non_finite<const D: usize>(points: &[Point<f64, D>]) -> Option<usize> {
    points
        .iter()
        .position(|p| p.coords.iter().any(|c| !c.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point3;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case((0.0, 0.0, 0.0), (10.0, 0.0, 0.0), 10.0)]
    #[test_case((10.0, 0.0, 0.0), (5.0, 0.0, 0.0), 5.0)]
    #[test_case((1.0, 1.0, 1.0), (2.0, 2.0, 2.0), 3.0_f64.sqrt())]
    #[test_case((-1.0, 0.0, 3.0), (-1.0, 0.0, 3.0), 0.0)]
    fn distance_between(a: (f64, f64, f64), b: (f64, f64, f64), expected: f64) {
        let a = Point3::new(a.0, a.1, a.2);
        let b = Point3::new(b.0, b.1, b.2);
        assert_relative_eq!(dist(&a, &b), expected, epsilon = 1e-12);
        assert_relative_eq!(dist(&b, &a), expected, epsilon = 1e-12);
    }

    #[test]
    fn near_tied_distances_stay_distinct() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(1.0 + 1e-12, 0.0, 0.0);
        assert!(dist(&origin, &b) > dist(&origin, &a));
    }

    #[test]
    fn all_finite_points() {
        let points = vec![Point3::new(0.0, 1.0, 2.0), Point3::new(-3.0, 4.0, 5.0)];
        assert_eq!(first_non_finite(&points), None);
    }

    #[test]
    fn reports_first_infinite_point() {
        let points = vec![
            Point3::new(0.0, 1.0, 2.0),
            Point3::new(0.0, f64::INFINITY, 2.0),
            Point3::new(f64::NAN, 1.0, 2.0),
        ];
        assert_eq!(first_non_finite(&points), Some(1));
    }
}
