/// Geographic point in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lng_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lng_deg: f64) -> Self {
        Self { lat_deg, lng_deg }
    }
}

/// Axis-aligned geographic bounding box in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            min_lat: point.lat_deg,
            max_lat: point.lat_deg,
            min_lng: point.lng_deg,
            max_lng: point.lng_deg,
        }
    }

    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_point(*first);
        for point in rest {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: GeoPoint) {
        self.min_lat = self.min_lat.min(point.lat_deg);
        self.max_lat = self.max_lat.max(point.lat_deg);
        self.min_lng = self.min_lng.min(point.lng_deg);
        self.max_lng = self.max_lng.max(point.lng_deg);
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoBounds, GeoPoint};

    #[test]
    fn from_points_empty_is_none() {
        assert_eq!(GeoBounds::from_points(&[]), None);
    }

    #[test]
    fn from_points_single_is_degenerate_box() {
        let p = GeoPoint::new(13.7563, 100.5018);
        let bounds = GeoBounds::from_points(&[p]).unwrap();
        assert_eq!(bounds.min_lat, 13.7563);
        assert_eq!(bounds.max_lat, 13.7563);
        assert_eq!(bounds.lat_span(), 0.0);
        assert_eq!(bounds.lng_span(), 0.0);
    }

    #[test]
    fn extend_grows_in_all_directions() {
        let mut bounds = GeoBounds::from_point(GeoPoint::new(10.0, 100.0));
        bounds.extend(GeoPoint::new(12.0, 99.0));
        bounds.extend(GeoPoint::new(9.0, 101.5));
        assert_eq!(bounds.min_lat, 9.0);
        assert_eq!(bounds.max_lat, 12.0);
        assert_eq!(bounds.min_lng, 99.0);
        assert_eq!(bounds.max_lng, 101.5);
    }
}
