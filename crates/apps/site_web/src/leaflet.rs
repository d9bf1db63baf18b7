//! Minimal bindings over the Leaflet global (`window.L`), covering only
//! the surface the widgets drive.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use foundation::{GeoBounds, GeoPoint};
use widgets::{InteractiveMapOptions, MapProvider, ScrollWheelZoom, TileMapHandle};

#[wasm_bindgen]
unsafe extern "C" {
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(container: &HtmlElement, options: &Object) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &Array, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &Map, bounds: &Array, options: &Object) -> Map;

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &Object) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn tile_layer_add_to(this: &TileLayer, map: &Map) -> TileLayer;

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(lat_lng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn marker_add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    pub type Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = scale)]
    fn scale_control(options: &Object) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    fn control_add_to(this: &Control, map: &Map) -> Control;
}

/// One composition-time presence check for the map library global.
pub fn library_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::has(&window, &JsValue::from_str("L")).unwrap_or(false)
}

/// Checks the global once and builds the map capability for one
/// container.
pub fn provider(
    container: &HtmlElement,
    options: &InteractiveMapOptions,
) -> MapProvider<LeafletTileMap> {
    if !library_available() {
        return MapProvider::Unavailable;
    }
    let map = leaflet_map(container, &map_init_options(options));
    MapProvider::Available(LeafletTileMap { map })
}

/// Live Leaflet map implementing the widgets' tile-map capability.
pub struct LeafletTileMap {
    map: Map,
}

impl LeafletTileMap {
    fn lat_lng(point: GeoPoint) -> Array {
        Array::of2(
            &JsValue::from_f64(point.lat_deg),
            &JsValue::from_f64(point.lng_deg),
        )
    }
}

impl TileMapHandle for LeafletTileMap {
    fn add_scale_control(&mut self, position: &str) {
        let options = Object::new();
        set(&options, "position", &JsValue::from_str(position));
        scale_control(&options).control_add_to(&self.map);
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        let options = Object::new();
        set(&options, "attribution", &JsValue::from_str(attribution));
        tile_layer(url_template, &options).tile_layer_add_to(&self.map);
    }

    fn add_marker(&mut self, point: GeoPoint, popup_html: &str) {
        leaflet_marker(&Self::lat_lng(point))
            .marker_add_to(&self.map)
            .bind_popup(popup_html);
    }

    fn set_view(&mut self, center: GeoPoint, zoom: f64) {
        self.map.set_view(&Self::lat_lng(center), zoom);
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: u32) {
        let corners = Array::of2(
            &Self::lat_lng(GeoPoint::new(bounds.min_lat, bounds.min_lng)),
            &Self::lat_lng(GeoPoint::new(bounds.max_lat, bounds.max_lng)),
        );
        let options = Object::new();
        let pad = f64::from(padding_px);
        set(
            &options,
            "padding",
            &Array::of2(&JsValue::from_f64(pad), &JsValue::from_f64(pad)),
        );
        self.map.fit_bounds(&corners, &options);
    }
}

fn map_init_options(options: &InteractiveMapOptions) -> Object {
    let init = Object::new();
    let scroll = match options.scroll_wheel_zoom {
        ScrollWheelZoom::Disabled => JsValue::FALSE,
        ScrollWheelZoom::Enabled => JsValue::TRUE,
        ScrollWheelZoom::Center => JsValue::from_str("center"),
    };
    set(&init, "scrollWheelZoom", &scroll);
    set(&init, "zoomControl", &JsValue::from_bool(options.zoom_control));
    set(
        &init,
        "wheelPxPerZoomLevel",
        &JsValue::from_f64(options.wheel_px_per_zoom_level),
    );
    init
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}
