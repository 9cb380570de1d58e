//! 2-opt route improvement.
//!
//! The optimiser keeps the first stop of a route in place and repeatedly
//! reverses interior segments while doing so shortens the open path. Each
//! pass scans every `(i, j)` pair with `1 <= i < j < n` in a fixed order and
//! adopts a reversal only when the new total is strictly shorter, so the
//! result is deterministic and never longer than the input. Passes repeat
//! until one completes without an improvement.
//!
//! The search is a local optimum, not a global one, and makes no polynomial
//! guarantee on the number of passes. It is sized for a crew's daily route
//! of a few dozen stops at most.

use log::{debug, trace, warn};

use crate::{DistanceMatrix, Location, RoutePoint};

/// Counters describing a single optimisation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OptimizationStats {
    /// Full scans over all segment pairs, including the final idle pass.
    pub passes: usize,
    /// Segment reversals that were adopted.
    pub improvements: usize,
    /// Candidate routes whose length was evaluated.
    pub candidates_evaluated: usize,
}

/// Output of a [`RouteOptimizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedRoute {
    /// Re-ordered copy of the input stops.
    pub route: Vec<RoutePoint>,
    /// Length of the input order, including the leg from the start location
    /// when one was supplied.
    pub original_distance_miles: f64,
    /// Length of [`Self::route`], measured the same way.
    pub distance_miles: f64,
    /// Search counters.
    pub stats: OptimizationStats,
}

/// Re-order stops to shorten the travelled distance.
///
/// Implementations must return a permutation of the input: no stop may be
/// added, dropped, or duplicated. Optimisers must be `Send + Sync` so a
/// single instance can serve concurrent callers.
pub trait RouteOptimizer: Send + Sync {
    /// Optimise `points`.
    ///
    /// Without a `start`, the first stop stays first. With a `start`, the
    /// crew departs from that location and every stop may move; the start
    /// itself is not part of the returned route.
    fn optimize_route(&self, start: Option<Location>, points: &[RoutePoint]) -> OptimizedRoute;
}

/// First-improvement 2-opt search over a precomputed [`DistanceMatrix`].
///
/// # Examples
/// ```
/// use turfroute_core::{RouteOptimizer, RoutePoint, TwoOptOptimizer, route_distance};
///
/// # fn main() -> Result<(), turfroute_core::CoordinateError> {
/// let stops = vec![
///     RoutePoint::new("a", 0.0, 0.0)?,
///     RoutePoint::new("b", 0.0, 2.0)?,
///     RoutePoint::new("d", 1.0, -1.0)?,
///     RoutePoint::new("c", 1.0, 1.0)?,
/// ];
/// let optimized = TwoOptOptimizer.optimize_route(None, &stops);
/// assert_eq!(optimized.route[0].id(), "a");
/// assert!(route_distance(&optimized.route) < route_distance(&stops));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoOptOptimizer;

impl RouteOptimizer for TwoOptOptimizer {
    fn optimize_route(&self, start: Option<Location>, points: &[RoutePoint]) -> OptimizedRoute {
        let mut locations = Vec::with_capacity(points.len() + 1);
        locations.extend(start);
        locations.extend(points.iter().map(RoutePoint::location));

        let matrix = DistanceMatrix::from_locations(&locations);
        let initial: Vec<usize> = (0..locations.len()).collect();
        let Some(original_distance_miles) = matrix.path_length(&initial) else {
            warn!("distance matrix does not cover {} locations", locations.len());
            return OptimizedRoute {
                route: points.to_vec(),
                original_distance_miles: 0.0,
                distance_miles: 0.0,
                stats: OptimizationStats::default(),
            };
        };
        let (order, distance_miles, stats) = improve(&matrix, initial, original_distance_miles);

        // With a start location, matrix index 0 is the depot and stop `k`
        // lives at index `k + 1`.
        let offset = usize::from(start.is_some());
        let route = order
            .iter()
            .filter_map(|&idx| idx.checked_sub(offset))
            .filter_map(|idx| points.get(idx).cloned())
            .collect();

        OptimizedRoute {
            route,
            original_distance_miles,
            distance_miles,
            stats,
        }
    }
}

/// Optimise `points` with [`TwoOptOptimizer`], keeping the first stop fixed.
///
/// The input is never mutated; routes of two or fewer stops come back as an
/// unchanged copy.
///
/// # Examples
/// ```
/// use turfroute_core::{RoutePoint, optimize};
///
/// # fn main() -> Result<(), turfroute_core::CoordinateError> {
/// assert!(optimize(&[]).is_empty());
/// let single = vec![RoutePoint::new("only", 45.0, -122.0)?];
/// assert_eq!(optimize(&single), single);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn optimize(points: &[RoutePoint]) -> Vec<RoutePoint> {
    TwoOptOptimizer.optimize_route(None, points).route
}

/// Run passes until one finds no improving reversal.
///
/// Position 0 of `order` never moves.
fn improve(
    matrix: &DistanceMatrix,
    mut order: Vec<usize>,
    mut length: f64,
) -> (Vec<usize>, f64, OptimizationStats) {
    let mut stats = OptimizationStats::default();
    if order.len() <= 2 {
        return (order, length, stats);
    }

    loop {
        stats.passes += 1;
        let improved = run_pass(matrix, &mut order, &mut length, &mut stats);
        debug!(
            "2-opt pass {} over {} locations: improved={improved}, length={length:.3} mi",
            stats.passes,
            order.len()
        );
        if !improved {
            break;
        }
    }

    debug!(
        "2-opt converged after {} passes ({} improvements, {} candidates)",
        stats.passes, stats.improvements, stats.candidates_evaluated
    );
    (order, length, stats)
}

/// One full scan over every segment `[i..=j]` with `1 <= i < j < n`.
///
/// Candidates are evaluated by reversing in place and reversing back when
/// rejected; reversal is its own inverse so the order is restored exactly.
fn run_pass(
    matrix: &DistanceMatrix,
    order: &mut [usize],
    length: &mut f64,
    stats: &mut OptimizationStats,
) -> bool {
    let n = order.len();
    let mut improved = false;
    for i in 1..n {
        for j in (i + 1)..n {
            let Some(segment) = order.get_mut(i..=j) else {
                continue;
            };
            segment.reverse();
            stats.candidates_evaluated += 1;

            let measured = matrix.path_length(order);
            if let Some(candidate) = measured.filter(|miles| *miles < *length) {
                trace!("2-opt reversed [{i}..={j}]: {length:.3} -> {candidate:.3} mi");
                *length = candidate;
                stats.improvements += 1;
                improved = true;
            } else if let Some(rejected) = order.get_mut(i..=j) {
                rejected.reverse();
            }
        }
    }
    improved
}
