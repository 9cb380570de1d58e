//! Analysis requests as supplied by the scheduling layer.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Location, RoutePoint};

/// Stops to analyse, with an optional departure point.
///
/// # Examples
/// ```
/// use turfroute_core::{AnalysisRequest, RoutePoint};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = AnalysisRequest::new(vec![
///     RoutePoint::new("a", 0.0, 0.0)?,
///     RoutePoint::new("b", 0.0, 1.0)?,
/// ]);
/// request.validate()?;
/// assert!(request.start.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AnalysisRequest {
    /// Stops in the order the crew would currently visit them.
    pub stops: Vec<RoutePoint>,
    /// Where the crew departs from, if not the first stop.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start: Option<Location>,
}

/// Errors returned by [`AnalysisRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisRequestError {
    /// A stop had an empty identifier.
    #[error("stop at position {index} has an empty id")]
    EmptyStopId {
        /// Position of the offending stop.
        index: usize,
    },
    /// Two stops shared an identifier.
    #[error("stop id {id:?} appears more than once")]
    DuplicateStopId {
        /// The repeated identifier.
        id: String,
    },
}

impl AnalysisRequest {
    /// Construct a request without a start location.
    #[must_use]
    pub const fn new(stops: Vec<RoutePoint>) -> Self {
        Self { stops, start: None }
    }

    /// Set the departure point.
    #[must_use]
    pub fn with_start(mut self, start: Location) -> Self {
        self.start = Some(start);
        self
    }

    /// Check that every stop has a non-empty id that is unique within the
    /// request.
    ///
    /// Coordinates need no checking here; [`RoutePoint`] and [`Location`]
    /// reject bad values when they are built.
    ///
    /// # Errors
    ///
    /// Returns the first [`AnalysisRequestError`] found, scanning stops in
    /// order.
    pub fn validate(&self) -> Result<(), AnalysisRequestError> {
        let mut seen = HashSet::with_capacity(self.stops.len());
        for (index, stop) in self.stops.iter().enumerate() {
            if stop.id().is_empty() {
                return Err(AnalysisRequestError::EmptyStopId { index });
            }
            if !seen.insert(stop.id()) {
                return Err(AnalysisRequestError::DuplicateStopId {
                    id: stop.id().to_owned(),
                });
            }
        }
        Ok(())
    }
}
