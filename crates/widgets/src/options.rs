use serde::{Deserialize, Serialize};

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Scroll-wheel zoom behavior of the interactive map.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollWheelZoom {
    Disabled,
    Enabled,
    /// Zoom toward the view center regardless of cursor position.
    Center,
}

/// Interactive map configuration. Defaults carry the production values;
/// the host page may override any field through a JSON data attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveMapOptions {
    pub scroll_wheel_zoom: ScrollWheelZoom,
    pub wheel_px_per_zoom_level: f64,
    pub zoom_control: bool,
    pub tile_url: String,
    pub attribution: String,
    pub single_marker_zoom: f64,
    pub fit_padding_px: u32,
}

impl Default for InteractiveMapOptions {
    fn default() -> Self {
        Self {
            scroll_wheel_zoom: ScrollWheelZoom::Center,
            wheel_px_per_zoom_level: 120.0,
            zoom_control: true,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            single_marker_zoom: 14.0,
            fit_padding_px: 30,
        }
    }
}

impl InteractiveMapOptions {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Which renderer the POI widget uses, selected by the container's
/// `data-renderer` attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PoiRendererKind {
    StaticOverlay,
    Interactive,
}

impl PoiRendererKind {
    /// Unrecognized or absent values fall back to the static overlay.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("interactive") => PoiRendererKind::Interactive,
            _ => PoiRendererKind::StaticOverlay,
        }
    }
}
