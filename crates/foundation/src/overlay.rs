use crate::geo::{GeoBounds, GeoPoint};

/// Percentage offsets into an overlay container.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayPosition {
    pub left_pct: f64,
    pub top_pct: f64,
}

/// Linear min-max normalization of geographic coordinates into 0-100%
/// container offsets. Higher latitude maps to a smaller top offset
/// (north-up convention).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayProjection {
    bounds: GeoBounds,
    lat_range: f64,
    lng_range: f64,
}

impl OverlayProjection {
    /// A zero coordinate span is substituted with 1.0: co-located points
    /// collapse toward one container edge instead of dividing by zero.
    pub fn for_bounds(bounds: GeoBounds) -> Self {
        let lat_span = bounds.lat_span();
        let lng_span = bounds.lng_span();
        Self {
            bounds,
            lat_range: if lat_span == 0.0 { 1.0 } else { lat_span },
            lng_range: if lng_span == 0.0 { 1.0 } else { lng_span },
        }
    }

    /// Returns `None` for an empty slice.
    pub fn for_points(points: &[GeoPoint]) -> Option<Self> {
        GeoBounds::from_points(points).map(Self::for_bounds)
    }

    pub fn project(&self, point: GeoPoint) -> OverlayPosition {
        OverlayPosition {
            left_pct: (point.lng_deg - self.bounds.min_lng) / self.lng_range * 100.0,
            top_pct: (self.bounds.max_lat - point.lat_deg) / self.lat_range * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoPoint, OverlayProjection};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn corners_land_on_container_edges() {
        let points = [GeoPoint::new(10.0, 100.0), GeoPoint::new(20.0, 110.0)];
        let projection = OverlayProjection::for_points(&points).unwrap();

        // South-west corner: left edge, bottom edge.
        let sw = projection.project(points[0]);
        assert_close(sw.left_pct, 0.0, 1e-12);
        assert_close(sw.top_pct, 100.0, 1e-12);

        // North-east corner: right edge, top edge.
        let ne = projection.project(points[1]);
        assert_close(ne.left_pct, 100.0, 1e-12);
        assert_close(ne.top_pct, 0.0, 1e-12);
    }

    #[test]
    fn midpoint_lands_in_the_middle() {
        let points = [GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 10.0)];
        let projection = OverlayProjection::for_points(&points).unwrap();
        let mid = projection.project(GeoPoint::new(5.0, 5.0));
        assert_close(mid.left_pct, 50.0, 1e-12);
        assert_close(mid.top_pct, 50.0, 1e-12);
    }

    #[test]
    fn colocated_points_project_finite_and_deterministic() {
        let point = GeoPoint::new(13.7563, 100.5018);
        let projection = OverlayProjection::for_points(&[point, point, point]).unwrap();
        let pos = projection.project(point);
        assert!(pos.left_pct.is_finite());
        assert!(pos.top_pct.is_finite());
        assert_close(pos.left_pct, 0.0, 1e-12);
        assert_close(pos.top_pct, 0.0, 1e-12);
    }

    #[test]
    fn shared_longitude_only_substitutes_that_axis() {
        let points = [GeoPoint::new(10.0, 100.0), GeoPoint::new(20.0, 100.0)];
        let projection = OverlayProjection::for_points(&points).unwrap();
        let north = projection.project(points[1]);
        assert_close(north.left_pct, 0.0, 1e-12);
        assert_close(north.top_pct, 0.0, 1e-12);
        let south = projection.project(points[0]);
        assert_close(south.top_pct, 100.0, 1e-12);
    }
}
