use foundation::{GeoPoint, OverlayProjection};
use records::LocationRecord;

/// Separator glyph between title and category in the visible label.
const LABEL_SEPARATOR: &str = " — ";

/// One absolutely-positioned marker of the static overlay: a pure
/// view-model the host materializes into DOM nodes (built off-document
/// and appended in one batch).
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMarker {
    pub left_pct: f64,
    pub top_pct: f64,
    pub href: Option<String>,
    /// Accessible name of the marker link.
    pub aria_label: String,
    /// Visible text label.
    pub label: String,
}

/// Builds one overlay marker per record, positioned by min-max
/// normalization of the record coordinates. Returns an empty list for
/// empty input.
pub fn build_overlay_markers(records: &[LocationRecord]) -> Vec<OverlayMarker> {
    let points: Vec<GeoPoint> = records.iter().map(LocationRecord::point).collect();
    let Some(projection) = OverlayProjection::for_points(&points) else {
        return Vec::new();
    };

    records
        .iter()
        .zip(points)
        .map(|(record, point)| {
            let position = projection.project(point);
            OverlayMarker {
                left_pct: position.left_pct,
                top_pct: position.top_pct,
                href: record.url.clone(),
                aria_label: match &record.category {
                    Some(category) => format!("{} ({category})", record.title),
                    None => record.title.clone(),
                },
                label: match &record.category {
                    Some(category) => format!("{}{LABEL_SEPARATOR}{category}", record.title),
                    None => record.title.clone(),
                },
            }
        })
        .collect()
}
