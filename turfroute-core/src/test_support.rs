//! Fixture routes shared by unit, property and behaviour tests.
//!
//! Compiled for this crate's unit tests and, for other test suites, behind
//! the `test-support` feature.
//!
//! These helpers panic on invalid coordinates, so they are only suitable for
//! hand-written literals.

use crate::RoutePoint;

/// Build a stop from literal coordinates.
///
/// # Panics
///
/// Panics when the coordinates are out of range.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture helpers take literal coordinates known to be valid"
)]
pub fn stop(id: &str, latitude: f64, longitude: f64) -> RoutePoint {
    RoutePoint::new(id, latitude, longitude).expect("fixture coordinates must be valid")
}

/// A four-stop route whose plotted path crosses itself.
///
/// Stops `a(0, 0)`, `b(0, 2)`, `d(1, -1)` and `c(1, 1)` in that order. The
/// 2-opt optimiser untangles it to `a, d, c, b`.
#[must_use]
pub fn crossed_route() -> Vec<RoutePoint> {
    vec![
        stop("a", 0.0, 0.0),
        stop("b", 0.0, 2.0),
        stop("d", 1.0, -1.0),
        stop("c", 1.0, 1.0),
    ]
}

/// Stops on a grid `columns` wide with 0.01 degree spacing, emitted in
/// raster order.
///
/// Every row ends with a long jump back to the first column, which gives the
/// optimiser something to untangle at any size.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "grid coordinates are derived from small integer indices"
)]
pub fn grid_route(count: usize, columns: usize) -> Vec<RoutePoint> {
    let width = columns.max(1);
    (0..count)
        .map(|idx| {
            let row = idx / width;
            let column = idx % width;
            stop(
                &format!("grid-{idx}"),
                40.0 + 0.01 * row as f64,
                -75.0 + 0.01 * column as f64,
            )
        })
        .collect()
}
