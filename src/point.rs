use num_traits::{PrimInt, Signed, ToPrimitive};

use crate::campus::Zone;

/// A delivery point. Throughout the crate a point is referred to by its index in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub coords: [i64; 2],
    /// Only assigned when building spanning trees, see [Point::classify].
    pub zone: Option<Zone>,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            coords: [x, y],
            zone: None,
        }
    }

    pub fn classify(&mut self) {
        if self.zone.is_none() {
            self.zone = Some(Zone::classify(self.coords));
        }
    }

    /// Squared distance, used wherever only comparisons are needed.
    ///
    /// With `enforce_zone_barrier` set, a pair of points on opposite campuses is infinitely far apart.
    pub fn distance_squared(&self, other: &Self, enforce_zone_barrier: bool) -> f64 {
        if enforce_zone_barrier {
            if let (Some(a), Some(b)) = (self.zone, other.zone) {
                if a.is_separated_from(b) {
                    return f64::INFINITY;
                }
            }
        }
        abs_distance_squared(self.coords, other.coords)
    }

    /// Straight line distance. The zone barrier never applies to travel.
    pub fn distance(&self, other: &Self) -> f64 {
        abs_distance_squared(self.coords, other.coords).sqrt()
    }
}

pub fn classify_all(points: &mut [Point]) {
    points.iter_mut().for_each(Point::classify);
}

/// Squared euclidean distance, computed in floating point so that large coordinates can't overflow.
pub fn abs_distance_squared<T: PrimInt + Signed + ToPrimitive>(a: [T; 2], b: [T; 2]) -> f64 {
    let dx = b[0].to_f64().unwrap_or(f64::NAN) - a[0].to_f64().unwrap_or(f64::NAN);
    let dy = b[1].to_f64().unwrap_or(f64::NAN) - a[1].to_f64().unwrap_or(f64::NAN);
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.distance_squared(&b, false), 25.);
        assert_eq!(a.distance(&b), 5.);
        assert_eq!(b.distance(&a), 5.);
    }

    #[test]
    fn test_distance_does_not_overflow() {
        let a = Point::new(i64::MIN / 2, 0);
        let b = Point::new(i64::MAX / 2, 0);
        assert!(a.distance(&b).is_finite());
        assert_eq!(abs_distance_squared([-3i32, 0], [0, 4]), 25.);
    }

    #[test]
    fn test_zone_barrier() {
        let mut points = [Point::new(1, 1), Point::new(-1, -1), Point::new(0, 0)];
        // Unlabelled points never see the barrier
        assert_eq!(points[0].distance_squared(&points[1], true), 8.);

        classify_all(&mut points);
        assert_eq!(points[0].distance_squared(&points[1], true), f64::INFINITY);
        assert_eq!(points[1].distance_squared(&points[0], true), f64::INFINITY);
        assert_eq!(points[0].distance_squared(&points[1], false), 8.);
        assert_eq!(points[0].distance_squared(&points[2], true), 2.);
        assert_eq!(points[1].distance_squared(&points[2], true), 2.);
        // Travel is unaffected
        assert_eq!(points[0].distance(&points[1]), 8f64.sqrt());
    }

    #[test]
    fn test_classify_only_once() {
        let mut point = Point::new(-2, -2);
        point.classify();
        point.coords = [2, 2];
        point.classify();
        assert_eq!(point.zone, Some(Zone::MedicalCampus));
    }
}
