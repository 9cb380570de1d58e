//! Core routing types for turfroute.
//!
//! The crate measures and shortens the daily routes of landscaping crews:
//! [`distance`] and [`route_distance`] give great-circle mileage,
//! [`TwoOptOptimizer`] re-orders stops with 2-opt local search, and
//! [`analyze`] compares a route before and after optimisation.
//!
//! Everything here is pure and synchronous. Coordinates are validated when a
//! [`Location`] or [`RoutePoint`] is built, so the distance and optimisation
//! functions cannot fail.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod analysis;
pub mod distance;
pub mod location;
pub mod optimizer;
pub mod point;
pub mod request;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use analysis::{
    AnalysisConfig, AnalysisConfigError, DEFAULT_AVERAGE_SPEED_MPH, RouteAnalysis, analyze,
    analyze_with,
};
pub use distance::{
    DistanceMatrix, EARTH_RADIUS_MILES, distance, location_distance, route_distance,
};
pub use location::{CoordinateError, Location};
pub use optimizer::{
    OptimizationStats, OptimizedRoute, RouteOptimizer, TwoOptOptimizer, optimize,
};
pub use point::RoutePoint;
pub use request::{AnalysisRequest, AnalysisRequestError};
