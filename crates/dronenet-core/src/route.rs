//! Distance aggregation over an ordered route plan.

use crate::models::RoutePoint;
use crate::spatial::distance;

/// Sum of consecutive leg distances in kilometers.
///
/// Fewer than two points means there is nothing to fly, so the total is 0.
pub fn route_distance(points: &[RoutePoint]) -> f64 {
    points
        .windows(2)
        .map(|leg| distance(leg[0].position, leg[1].position))
        .sum()
}

/// Distance of each leg in order; `result[i]` is the leg from `points[i]` to `points[i + 1]`.
pub fn segment_distances(points: &[RoutePoint]) -> Vec<f64> {
    points
        .windows(2)
        .map(|leg| distance(leg[0].position, leg[1].position))
        .collect()
}
