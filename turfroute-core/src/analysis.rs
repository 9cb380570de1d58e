//! Before/after comparison of an optimised route.
//!
//! Time savings are derived from distance at an assumed average driving
//! speed, not from traffic data.

use geo::{BoundingRect, LineString, Rect};
use thiserror::Error;

use crate::{Location, OptimizationStats, RouteOptimizer, RoutePoint, TwoOptOptimizer};

/// Assumed average speed between stops, in miles per hour.
pub const DEFAULT_AVERAGE_SPEED_MPH: f64 = 30.0;

/// Errors returned by [`AnalysisConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnalysisConfigError {
    /// The average speed was zero, negative, NaN or infinite.
    #[error("average speed must be a positive finite number of mph, got {value}")]
    InvalidAverageSpeed {
        /// Rejected speed.
        value: f64,
    },
}

/// Tunables for [`analyze_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    average_speed_mph: f64,
}

impl AnalysisConfig {
    /// Validate and construct a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisConfigError::InvalidAverageSpeed`] unless the speed
    /// is finite and strictly positive.
    pub fn new(average_speed_mph: f64) -> Result<Self, AnalysisConfigError> {
        if !average_speed_mph.is_finite() || average_speed_mph <= 0.0 {
            return Err(AnalysisConfigError::InvalidAverageSpeed {
                value: average_speed_mph,
            });
        }
        Ok(Self { average_speed_mph })
    }

    /// Average speed used to convert miles saved into minutes saved.
    #[must_use]
    pub const fn average_speed_mph(&self) -> f64 {
        self.average_speed_mph
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            average_speed_mph: DEFAULT_AVERAGE_SPEED_MPH,
        }
    }
}

/// Comparison between a route as given and its optimised ordering.
///
/// Both routes hold the same stops. When a start location was supplied the
/// distances include the leg from it to the first stop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RouteAnalysis {
    /// Length of the route in its original order.
    pub original_distance_miles: f64,
    /// Length of the optimised route.
    pub optimized_distance_miles: f64,
    /// `original - optimized`; never negative.
    pub distance_saved_miles: f64,
    /// Distance saved converted to minutes at the configured average speed.
    pub time_saved_minutes: f64,
    /// Distance saved as a percentage of the original, `0` for a zero-length
    /// original.
    pub savings_percent: f64,
    /// The stops in the order supplied.
    pub original_route: Vec<RoutePoint>,
    /// The stops in optimised order.
    pub optimized_route: Vec<RoutePoint>,
    /// Departure point, when one was supplied.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start: Option<Location>,
    /// Optimiser counters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: OptimizationStats,
}

impl RouteAnalysis {
    /// The optimised path as a line string for map rendering, starting at
    /// the departure point when there is one.
    #[must_use]
    pub fn optimized_path(&self) -> LineString<f64> {
        self.start
            .iter()
            .copied()
            .chain(self.optimized_route.iter().map(RoutePoint::location))
            .map(geo::Coord::from)
            .collect()
    }

    /// Bounding rectangle of every location on the route, or `None` for an
    /// empty route.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.optimized_path().bounding_rect()
    }
}

/// Analyse `points` with the default 30 mph assumption and 2-opt optimiser.
///
/// # Examples
/// ```
/// use turfroute_core::{RoutePoint, analyze};
///
/// # fn main() -> Result<(), turfroute_core::CoordinateError> {
/// let stops = vec![
///     RoutePoint::new("a", 0.0, 0.0)?,
///     RoutePoint::new("b", 0.0, 2.0)?,
///     RoutePoint::new("d", 1.0, -1.0)?,
///     RoutePoint::new("c", 1.0, 1.0)?,
/// ];
/// let report = analyze(&stops, None);
/// assert!(report.distance_saved_miles > 0.0);
/// assert!(report.savings_percent > 0.0 && report.savings_percent < 100.0);
/// assert_eq!(report.original_route, stops);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn analyze(points: &[RoutePoint], start: Option<Location>) -> RouteAnalysis {
    analyze_with(points, start, &AnalysisConfig::default(), &TwoOptOptimizer)
}

/// Analyse `points` with an explicit configuration and optimiser.
#[must_use]
pub fn analyze_with(
    points: &[RoutePoint],
    start: Option<Location>,
    config: &AnalysisConfig,
    optimizer: &dyn RouteOptimizer,
) -> RouteAnalysis {
    let optimized = optimizer.optimize_route(start, points);
    let original = optimized.original_distance_miles;
    let savings = Savings::between(original, optimized.distance_miles, config);
    log::debug!(
        "route of {} stops: {original:.3} mi -> {:.3} mi ({:.1}% saved)",
        points.len(),
        optimized.distance_miles,
        savings.percent
    );

    RouteAnalysis {
        original_distance_miles: original,
        optimized_distance_miles: optimized.distance_miles,
        distance_saved_miles: savings.miles,
        time_saved_minutes: savings.minutes,
        savings_percent: savings.percent,
        original_route: points.to_vec(),
        optimized_route: optimized.route,
        start,
        stats: optimized.stats,
    }
}

struct Savings {
    miles: f64,
    minutes: f64,
    percent: f64,
}

impl Savings {
    #[expect(
        clippy::float_arithmetic,
        reason = "savings are ratios of floating-point distances"
    )]
    fn between(original: f64, optimized: f64, config: &AnalysisConfig) -> Self {
        // A foreign optimiser could hand back a longer route; report no
        // saving rather than a negative one.
        let miles = (original - optimized).max(0.0);
        let minutes = miles / config.average_speed_mph() * 60.0;
        let percent = if original > 0.0 {
            miles / original * 100.0
        } else {
            0.0
        };
        Self {
            miles,
            minutes,
            percent,
        }
    }
}
