/// A longitude/latitude pair in degrees. Longitude is x, latitude is y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scale factors for a local tangent plane centered on a reference latitude.
///
/// Meridians converge toward the poles, so a degree of longitude shrinks by
/// cos(latitude). A metric built at `reference_latitude` weighs longitude
/// differences by that factor and leaves latitude differences alone. Results
/// are only accurate near the reference latitude, and only comparable when
/// they come from the same metric.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Metric {
    scale_x: f64,
    scale_y: f64,
}

impl Metric {
    /// Build the metric for `reference_latitude` in degrees. Defined for any
    /// real input; geodetically meaningful only in [-90, 90]. At the poles
    /// `scale_x` is 0 and pure-longitude separations collapse to zero.
    pub fn new(reference_latitude: f64) -> Self {
        Self {
            scale_x: reference_latitude.to_radians().cos(),
            scale_y: 1.0,
        }
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Squared scaled-Euclidean distance between two points, in squared
    /// degrees. A locally-accurate stand-in for squared great-circle distance
    /// near the reference latitude, not true geodesic distance.
    pub fn squared_distance(&self, p1: Point, p2: Point) -> f64 {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        (dx * self.scale_x).powi(2) + (dy * self.scale_y).powi(2)
    }

    /// Rotate `p` counterclockwise by `angle_deg` about `origin`, with the
    /// turn measured in the scaled tangent frame. Distance to `origin` under
    /// `squared_distance` is unchanged, and a zero angle returns `p`. At
    /// reference latitude ±90 the frame collapses (`scale_x` = 0) and the
    /// longitude of the result is non-finite.
    pub fn rotate(&self, p: Point, origin: Point, angle_deg: f64) -> Point {
        let (sin_t, cos_t) = angle_deg.to_radians().sin_cos();
        let u = (p.x - origin.x) * self.scale_x;
        let v = (p.y - origin.y) * self.scale_y;
        Point {
            x: origin.x + (u * cos_t - v * sin_t) / self.scale_x,
            y: origin.y + (u * sin_t + v * cos_t) / self.scale_y,
        }
    }
}

/// Unscaled Euclidean squared distance, for callers that want no latitude
/// correction at all. Agrees with a metric built at the equator.
pub fn planar_squared_distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn scale_follows_cosine() {
        for lat in [-90.0, -60.0, -45.0, 0.0, 30.0, 60.0, 90.0] {
            let m = Metric::new(lat);
            assert!((m.scale_x() - lat.to_radians().cos()).abs() < TOL);
            assert!(m.scale_x() >= 0.0 && m.scale_x() <= 1.0);
            assert_eq!(m.scale_y(), 1.0);
        }
        assert!((Metric::new(0.0).scale_x() - 1.0).abs() < TOL);
        assert!(Metric::new(90.0).scale_x().abs() < TOL);
        assert!(Metric::new(-90.0).scale_x().abs() < TOL);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let m = Metric::new(37.5);
        let p = Point::new(-122.27, 37.87);
        assert_eq!(m.squared_distance(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric_and_non_negative() {
        let m = Metric::new(52.0);
        let p1 = Point::new(13.4, 52.5);
        let p2 = Point::new(2.35, 48.85);
        let d12 = m.squared_distance(p1, p2);
        let d21 = m.squared_distance(p2, p1);
        assert!(d12 >= 0.0);
        assert!((d12 - d21).abs() < TOL);
    }

    #[test]
    fn equator_keeps_longitude_at_full_weight() {
        let m = Metric::new(0.0);
        let d = m.squared_distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!((d - 1.0).abs() < TOL);
    }

    #[test]
    fn pole_collapses_longitude() {
        let m = Metric::new(90.0);
        let d = m.squared_distance(Point::new(0.0, 0.0), Point::new(5.0, 0.0));
        assert!(d.abs() < TOL);
        // Latitude still counts at the pole.
        let d = m.squared_distance(Point::new(0.0, 0.0), Point::new(5.0, 2.0));
        assert!((d - 4.0).abs() < TOL);
    }

    #[test]
    fn sixty_degrees_halves_longitude() {
        let m = Metric::new(60.0);
        let d = m.squared_distance(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL);
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        let m = Metric::new(45.0);
        let origin = Point::new(10.0, 45.0);
        let p = Point::new(11.25, 44.5);
        let r = m.rotate(p, origin, 0.0);
        assert!((r.x - p.x).abs() < TOL);
        assert!((r.y - p.y).abs() < TOL);
    }

    #[test]
    fn rotate_preserves_distance_to_origin() {
        let m = Metric::new(45.0);
        let origin = Point::new(10.0, 45.0);
        let p = Point::new(11.25, 44.5);
        let d = m.squared_distance(origin, p);
        for angle in [-270.0, -90.0, 17.3, 30.0, 90.0, 180.0, 360.0] {
            let r = m.rotate(p, origin, angle);
            assert!((m.squared_distance(origin, r) - d).abs() < TOL);
        }
    }

    #[test]
    fn rotate_quarter_turn_swaps_axes_in_the_scaled_frame() {
        // At latitude 60, one degree of longitude spans half a degree of the
        // scaled frame, so a quarter turn lands it on the latitude axis.
        let m = Metric::new(60.0);
        let origin = Point::new(0.0, 60.0);
        let r = m.rotate(Point::new(1.0, 60.0), origin, 90.0);
        assert!((r.x - 0.0).abs() < TOL);
        assert!((r.y - 60.5).abs() < TOL);
    }

    #[test]
    fn planar_matches_equatorial_metric() {
        let m = Metric::new(0.0);
        let p1 = Point::new(3.0, -1.0);
        let p2 = Point::new(-2.0, 4.0);
        let planar = planar_squared_distance(p1, p2);
        assert!((planar - m.squared_distance(p1, p2)).abs() < TOL);
        assert!((planar - 50.0).abs() < TOL);
    }
}
