use crate::metric::{Metric, Point};
use ordered_float::OrderedFloat;

/// Rank `points` by squared distance to `query` and keep the closest `k`.
/// Ties keep input order; asking for more points than exist returns them all.
/// Scores are squared degrees under `metric` and are not comparable with
/// scores from a different metric.
pub fn k_nearest(
    metric: &Metric,
    points: &[(i64, Point)],
    query: Point,
    k: usize,
) -> Vec<(i64, f64)> {
    let mut ranked: Vec<(i64, f64)> = points
        .iter()
        .map(|&(id, p)| (id, metric.squared_distance(query, p)))
        .collect();
    ranked.sort_by_key(|&(_, d2)| OrderedFloat(d2));
    ranked.truncate(k);
    ranked
}

/// All points whose squared distance to `query` is at most `r2`, in input
/// order. The boundary is inclusive.
pub fn within_squared_radius(
    metric: &Metric,
    points: &[(i64, Point)],
    query: Point,
    r2: f64,
) -> Vec<(i64, f64)> {
    points
        .iter()
        .map(|&(id, p)| (id, metric.squared_distance(query, p)))
        .filter(|&(_, d2)| d2 <= r2)
        .collect()
}
