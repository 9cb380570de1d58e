//! Validated WGS84 positions.
//!
//! A [`Location`] can only be built from finite, in-range coordinates, so
//! every downstream distance calculation operates on trusted input.

use geo::Coord;
use thiserror::Error;

/// Inclusive latitude bound in decimal degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Inclusive longitude bound in decimal degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Errors returned when a latitude/longitude pair is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was NaN or infinite.
    #[error("latitude {value} is not a finite number")]
    NonFiniteLatitude {
        /// Rejected latitude.
        value: f64,
    },
    /// Longitude was NaN or infinite.
    #[error("longitude {value} is not a finite number")]
    NonFiniteLongitude {
        /// Rejected longitude.
        value: f64,
    },
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        value: f64,
    },
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        value: f64,
    },
}

/// A position on the WGS84 sphere.
///
/// Stored as a [`geo::Coord`] with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use turfroute_core::Location;
///
/// # fn main() -> Result<(), turfroute_core::CoordinateError> {
/// let depot = Location::new(51.5, -0.12)?;
/// assert_eq!(depot.latitude(), 51.5);
/// assert_eq!(depot.coord().x, -0.12);
/// assert!(Location::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    coord: Coord<f64>,
}

impl Location {
    /// Validate and construct a [`Location`] from decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is non-finite or out
    /// of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() {
            return Err(CoordinateError::NonFiniteLatitude { value: latitude });
        }
        if !longitude.is_finite() {
            return Err(CoordinateError::NonFiniteLongitude { value: longitude });
        }
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange { value: latitude });
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange { value: longitude });
        }
        Ok(Self {
            coord: Coord {
                x: longitude,
                y: latitude,
            },
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coord.x
    }

    /// The underlying `geo` coordinate.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        self.coord
    }

    /// Lexicographic `(latitude, longitude)` ordering used to canonicalise
    /// distance arguments.
    pub(crate) fn precedes(&self, other: &Self) -> bool {
        (self.latitude(), self.longitude()) <= (other.latitude(), other.longitude())
    }
}

impl From<Location> for Coord<f64> {
    fn from(location: Location) -> Self {
        location.coord
    }
}

impl TryFrom<Coord<f64>> for Location {
    type Error = CoordinateError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Location;

    #[derive(Serialize, Deserialize)]
    struct LocationRecord {
        latitude: f64,
        longitude: f64,
    }

    impl Serialize for Location {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            LocationRecord {
                latitude: self.latitude(),
                longitude: self.longitude(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Location {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let record = LocationRecord::deserialize(deserializer)?;
            Self::new(record.latitude, record.longitude).map_err(serde::de::Error::custom)
        }
    }
}
