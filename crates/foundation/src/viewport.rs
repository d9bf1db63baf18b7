use crate::geo::{GeoBounds, GeoPoint};

/// How an interactive view should frame a marker set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportFit {
    /// Exactly one point: center the view on it at a fixed zoom.
    Center(GeoPoint),
    /// Several points: fit the view to their bounding box.
    Fit(GeoBounds),
}

impl ViewportFit {
    /// Returns `None` for an empty slice.
    pub fn for_points(points: &[GeoPoint]) -> Option<Self> {
        match points {
            [] => None,
            [single] => Some(ViewportFit::Center(*single)),
            many => GeoBounds::from_points(many).map(ViewportFit::Fit),
        }
    }
}
