//! Circular layout strategy
//!
//! Places node `i` of `n` at angle `2π·i / n` on a circle centered on the
//! canvas. The radius is a fixed fraction of the smaller canvas dimension,
//! leaving a margin for labels around the circle.

use std::f32::consts::TAU;

use archgraph_core::geometry::{Point, Size};

/// Default radius as a fraction of `min(width, height)`.
pub const DEFAULT_RADIUS_FACTOR: f32 = 0.35;

/// Angle of node `index` out of `count`, in radians.
///
/// `count` must be non-zero.
pub fn angle(index: usize, count: usize) -> f32 {
    TAU * index as f32 / count as f32
}

/// Circle radius for the given canvas.
pub fn radius(canvas: Size, radius_factor: f32) -> f32 {
    canvas.min_dimension() * radius_factor
}

/// Positions for `count` nodes evenly spaced around the canvas center.
///
/// Returns no positions when `count` is zero or the canvas has a zero
/// dimension.
pub fn positions(count: usize, canvas: Size, radius_factor: f32) -> Vec<Point> {
    if count == 0 || canvas.is_degenerate() {
        return Vec::new();
    }

    let center = canvas.center();
    let radius = radius(canvas, radius_factor);

    (0..count)
        .map(|index| {
            let theta = angle(index, count);
            center.add_point(Point::new(radius * theta.cos(), radius * theta.sin()))
        })
        .collect()
}
