use foundation::{GeoBounds, GeoPoint};

/// Capability surface of the external tile-map library.
///
/// Widgets never consult ambient globals; the host hands them either a
/// live handle or [`MapProvider::Unavailable`], decided once at
/// composition time.
pub trait TileMapHandle {
    fn add_scale_control(&mut self, position: &str);
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);
    fn add_marker(&mut self, point: GeoPoint, popup_html: &str);
    fn set_view(&mut self, center: GeoPoint, zoom: f64);
    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: u32);
}

/// Presence of the tile-map library on the hosting page.
#[derive(Debug)]
pub enum MapProvider<M> {
    Available(M),
    Unavailable,
}

/// One observed call against a [`RecordingTileMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    ScaleControl {
        position: String,
    },
    TileLayer {
        url_template: String,
        attribution: String,
    },
    Marker {
        point: GeoPoint,
        popup_html: String,
    },
    SetView {
        center: GeoPoint,
        zoom: f64,
    },
    FitBounds {
        bounds: GeoBounds,
        padding_px: u32,
    },
}

/// In-memory stand-in for the real tile-map library: records every call
/// for inspection instead of drawing anything.
#[derive(Debug, Default)]
pub struct RecordingTileMap {
    pub calls: Vec<MapCall>,
}

impl RecordingTileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> Vec<&MapCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, MapCall::Marker { .. }))
            .collect()
    }
}

impl TileMapHandle for RecordingTileMap {
    fn add_scale_control(&mut self, position: &str) {
        self.calls.push(MapCall::ScaleControl {
            position: position.to_string(),
        });
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        self.calls.push(MapCall::TileLayer {
            url_template: url_template.to_string(),
            attribution: attribution.to_string(),
        });
    }

    fn add_marker(&mut self, point: GeoPoint, popup_html: &str) {
        self.calls.push(MapCall::Marker {
            point,
            popup_html: popup_html.to_string(),
        });
    }

    fn set_view(&mut self, center: GeoPoint, zoom: f64) {
        self.calls.push(MapCall::SetView { center, zoom });
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: u32) {
        self.calls.push(MapCall::FitBounds { bounds, padding_px });
    }
}
