//! Facade crate for the turfroute routing engine.
//!
//! This crate re-exports the core domain types and the 2-opt optimiser so
//! applications depend on a single crate.

#![forbid(unsafe_code)]

pub use turfroute_core::{
    AnalysisConfig, AnalysisConfigError, AnalysisRequest, AnalysisRequestError, CoordinateError,
    DEFAULT_AVERAGE_SPEED_MPH, DistanceMatrix, EARTH_RADIUS_MILES, Location, OptimizationStats,
    OptimizedRoute, RouteAnalysis, RouteOptimizer, RoutePoint, TwoOptOptimizer, analyze,
    analyze_with, distance, location_distance, optimize, route_distance,
};
