use foundation::ViewportFit;
use records::LocationRecord;

use crate::options::InteractiveMapOptions;
use crate::popup::{PopupVariant, popup_html};
use crate::tile_map::TileMapHandle;

const SCALE_CONTROL_POSITION: &str = "bottomleft";

/// Renders location records onto an interactive tile map.
///
/// Adds the scale control and base tile layer, places one popup-bound
/// marker per record, then frames the viewport: a single record centers
/// the view at the configured zoom, several records fit their bounding
/// box with the configured padding. An empty list is a no-op; the host
/// handles the empty state before a map exists.
pub fn render_map(
    map: &mut impl TileMapHandle,
    records: &[LocationRecord],
    options: &InteractiveMapOptions,
    variant: PopupVariant,
) {
    if records.is_empty() {
        return;
    }

    map.add_scale_control(SCALE_CONTROL_POSITION);
    map.add_tile_layer(&options.tile_url, &options.attribution);

    let mut points = Vec::with_capacity(records.len());
    for record in records {
        let point = record.point();
        map.add_marker(point, &popup_html(record, variant));
        points.push(point);
    }

    match ViewportFit::for_points(&points) {
        Some(ViewportFit::Center(point)) => map.set_view(point, options.single_marker_zoom),
        Some(ViewportFit::Fit(bounds)) => map.fit_bounds(bounds, options.fit_padding_px),
        None => {}
    }
}
