//! Great-circle distances between stops.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_MILES`]. The spherical model is accurate to well under a
//! percent at the tens-of-miles scale of a crew's day, and the expected
//! figures in the tests depend on it.
//!
//! Route lengths are open paths: the last stop does not return to the first.

use crate::{Location, RoutePoint};

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two stops in miles.
///
/// The result is symmetric bit for bit and exactly `0.0` for coincident
/// stops.
///
/// # Examples
/// ```
/// use turfroute_core::{RoutePoint, distance};
///
/// # fn main() -> Result<(), turfroute_core::CoordinateError> {
/// let a = RoutePoint::new("a", 0.0, 0.0)?;
/// let b = RoutePoint::new("b", 0.0, 1.0)?;
/// let miles = distance(&a, &b);
/// assert!((miles - 69.09).abs() < 0.01);
/// assert_eq!(miles, distance(&b, &a));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn distance(a: &RoutePoint, b: &RoutePoint) -> f64 {
    location_distance(&a.location(), &b.location())
}

/// Great-circle distance between two locations in miles.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is floating-point trigonometry"
)]
pub fn location_distance(a: &Location, b: &Location) -> f64 {
    // Evaluate in a fixed argument order so swapping inputs cannot change
    // the rounding.
    let (from, to) = if a.precedes(b) { (a, b) } else { (b, a) };

    let from_lat = from.latitude().to_radians();
    let to_lat = to.latitude().to_radians();
    let half_d_lat = (to.latitude() - from.latitude()).to_radians() / 2.0;
    let half_d_lon = (to.longitude() - from.longitude()).to_radians() / 2.0;

    let h = half_d_lat.sin().powi(2) + from_lat.cos() * to_lat.cos() * half_d_lon.sin().powi(2);
    // Rounding can push `h` a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

/// Total open-path length of a route in miles.
///
/// Routes with fewer than two stops have length `0.0`.
///
/// # Examples
/// ```
/// use turfroute_core::{RoutePoint, distance, route_distance};
///
/// # fn main() -> Result<(), turfroute_core::CoordinateError> {
/// let a = RoutePoint::new("a", 0.0, 0.0)?;
/// let b = RoutePoint::new("b", 0.0, 1.0)?;
/// let c = RoutePoint::new("c", 1.0, 1.0)?;
/// let total = route_distance(&[a.clone(), b.clone(), c.clone()]);
/// assert_eq!(total, distance(&a, &b) + distance(&b, &c));
/// assert_eq!(route_distance(&[]), 0.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn route_distance(points: &[RoutePoint]) -> f64 {
    sum_legs(points.windows(2).map(|pair| match pair {
        [from, to] => distance(from, to),
        _ => 0.0,
    }))
}

/// Sum leg lengths left to right starting from `0.0`.
///
/// [`DistanceMatrix::path_length`] folds in the same order, so totals
/// computed from points and from a matrix agree exactly.
#[expect(clippy::float_arithmetic, reason = "summing leg lengths")]
fn sum_legs(legs: impl Iterator<Item = f64>) -> f64 {
    legs.fold(0.0, |total, leg| total + leg)
}

/// Dense symmetric matrix of pairwise distances in miles.
///
/// Built once per optimisation so the search never repeats trigonometry.
///
/// # Examples
/// ```
/// use turfroute_core::{DistanceMatrix, Location};
///
/// # fn main() -> Result<(), turfroute_core::CoordinateError> {
/// let locations = [Location::new(0.0, 0.0)?, Location::new(0.0, 1.0)?];
/// let matrix = DistanceMatrix::from_locations(&locations);
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
/// assert_eq!(matrix.get(0, 0), Some(0.0));
/// assert_eq!(matrix.get(0, 2), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    miles: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute every pairwise distance between `locations`.
    #[must_use]
    pub fn from_locations(locations: &[Location]) -> Self {
        let size = locations.len();
        let miles = locations
            .iter()
            .flat_map(|from| locations.iter().map(move |to| location_distance(from, to)))
            .collect();
        Self { size, miles }
    }

    /// Number of locations covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no locations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance from location `from` to location `to`, if both indices exist.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.miles.get(from * self.size + to).copied()
    }

    /// Open-path length of the location sequence given by `order`.
    ///
    /// Returns `None` when any index in `order` is outside the matrix.
    /// Legs are summed in the same order as [`route_distance`].
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "summing leg lengths")]
    pub fn path_length(&self, order: &[usize]) -> Option<f64> {
        if order.iter().any(|&idx| idx >= self.size) {
            return None;
        }
        order.windows(2).try_fold(0.0, |total, pair| match pair {
            [from, to] => self.get(*from, *to).map(|leg| total + leg),
            _ => Some(total),
        })
    }
}
