//! Local tangent-plane distance for lon/lat points: build one [`Metric`] per
//! reference latitude, then score point pairs with it.

pub mod metric;
pub mod nearest;

pub use metric::{planar_squared_distance, Metric, Point};
