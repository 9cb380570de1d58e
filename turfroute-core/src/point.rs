//! Stops on a crew's route.

use crate::{CoordinateError, Location};

/// One stop on a route.
///
/// Points are immutable value objects: the coordinates are validated when
/// the point is built, and the optimiser only ever clones them. The
/// `sequence_order` field is a hint from the scheduling layer; route order is
/// always expressed by position in a slice.
///
/// # Examples
/// ```
/// use turfroute_core::RoutePoint;
///
/// # fn main() -> Result<(), turfroute_core::CoordinateError> {
/// let stop = RoutePoint::new("job-17", 40.71, -74.0)?
///     .with_name("Hedge trim")
///     .with_duration_minutes(45);
/// assert_eq!(stop.id(), "job-17");
/// assert_eq!(stop.duration_minutes(), 45);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RoutePointRecord", into = "RoutePointRecord")
)]
pub struct RoutePoint {
    id: String,
    location: Location,
    address: String,
    name: String,
    duration_minutes: u32,
    sequence_order: Option<u32>,
}

impl RoutePoint {
    /// Construct a point from raw decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when the coordinates are non-finite or out
    /// of range.
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, CoordinateError> {
        Ok(Self::with_location(id, Location::new(latitude, longitude)?))
    }

    /// Construct a point at an already validated location.
    #[must_use]
    pub fn with_location(id: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.into(),
            location,
            address: String::new(),
            name: String::new(),
            duration_minutes: 0,
            sequence_order: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the display address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the expected on-site service time.
    #[must_use]
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Attach the scheduling layer's sequence hint.
    #[must_use]
    pub fn with_sequence_order(mut self, order: u32) -> Self {
        self.sequence_order = Some(order);
        self
    }

    /// Stable identifier, unique within a route.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Validated position of the stop.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.longitude()
    }

    /// Display address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expected on-site service time in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Sequence hint supplied by the scheduling layer, if any.
    #[must_use]
    pub const fn sequence_order(&self) -> Option<u32> {
        self.sequence_order
    }
}

/// Wire shape of a [`RoutePoint`] as produced by the job-scheduling screens.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoutePointRecord {
    id: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    address: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sequence_order: Option<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RoutePointRecord> for RoutePoint {
    type Error = CoordinateError;

    fn try_from(record: RoutePointRecord) -> Result<Self, Self::Error> {
        let location = Location::new(record.latitude, record.longitude)?;
        Ok(Self {
            id: record.id,
            location,
            address: record.address,
            name: record.name,
            duration_minutes: record.duration_minutes,
            sequence_order: record.sequence_order,
        })
    }
}

#[cfg(feature = "serde")]
impl From<RoutePoint> for RoutePointRecord {
    fn from(point: RoutePoint) -> Self {
        Self {
            latitude: point.latitude(),
            longitude: point.longitude(),
            id: point.id,
            address: point.address,
            name: point.name,
            duration_minutes: point.duration_minutes,
            sequence_order: point.sequence_order,
        }
    }
}
