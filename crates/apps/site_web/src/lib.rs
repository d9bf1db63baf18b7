use console_error_panic_hook::set_once;
use wasm_bindgen::prelude::*;

mod dom;
mod leaflet;
mod poi_map;
mod station_form;
mod transport_map;

/// Initializes every widget present on the page. Each init marks its
/// anchor element once bound, so hosts may call this again after
/// injecting content.
#[wasm_bindgen]
pub fn boot() {
    init_transport_map();
    init_poi_map();
    bind_station_form();
}

#[wasm_bindgen]
pub fn init_transport_map() {
    transport_map::init();
}

#[wasm_bindgen]
pub fn init_poi_map() {
    if let Err(err) = poi_map::init() {
        log_widget_error("poi map", &err);
    }
}

#[wasm_bindgen]
pub fn bind_station_form() {
    if let Err(err) = station_form::bind() {
        log_widget_error("station form sync", &err);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    dom::on_document_ready(boot)?;
    // The CMS admin injects form fields after initial load and announces
    // it with this event.
    dom::on_document_event("wagtail:ready", bind_station_form)?;
    Ok(())
}

fn log_widget_error(widget: &str, err: &JsValue) {
    web_sys::console::log_1(&JsValue::from_str(&format!("{widget} init error: {err:?}")));
}
