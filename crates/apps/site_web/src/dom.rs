use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use widgets::InteractiveMapOptions;

const BOUND_FLAG: &str = "data-widget-bound";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// The two DOM anchors of one widget instance: the embedded payload text
/// and the container it renders into.
pub struct WidgetAnchors {
    pub payload: String,
    pub container: HtmlElement,
}

/// Returns `None` when either anchor is missing: the page simply does
/// not carry this widget.
pub fn widget_anchors(data_id: &str, container_id: &str) -> Option<WidgetAnchors> {
    let document = document()?;
    let data_el = document.get_element_by_id(data_id)?;
    let container = document
        .get_element_by_id(container_id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(WidgetAnchors {
        payload: data_el.text_content().unwrap_or_default(),
        container,
    })
}

/// Marks an element as initialized; returns `false` when it already was.
pub fn mark_bound(element: &Element) -> bool {
    if element.has_attribute(BOUND_FLAG) {
        return false;
    }
    let _ = element.set_attribute(BOUND_FLAG, "true");
    true
}

/// Host-configured empty-state message (`data-empty`).
pub fn empty_message(container: &HtmlElement) -> Option<String> {
    container.dataset().get("empty")
}

/// Host-configured map option overrides (`data-map-options`, JSON).
/// Invalid JSON is reported to the console and falls back to defaults.
pub fn map_options_for(container: &HtmlElement) -> InteractiveMapOptions {
    let Some(raw) = container.dataset().get("mapOptions") else {
        return InteractiveMapOptions::default();
    };
    match InteractiveMapOptions::from_json_str(&raw) {
        Ok(options) => options,
        Err(err) => {
            web_sys::console::log_1(&JsValue::from_str(&format!(
                "ignoring invalid map options: {err}"
            )));
            InteractiveMapOptions::default()
        }
    }
}

/// Runs `callback` once the document is ready; immediately when it has
/// already left the `loading` state.
pub fn on_document_ready(callback: fn()) -> Result<(), JsValue> {
    let Some(document) = document() else {
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let closure = Closure::<dyn FnMut()>::wrap(Box::new(callback));
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        callback();
    }
    Ok(())
}

/// Subscribes `callback` to a document-level event for the lifetime of
/// the page.
pub fn on_document_event(event: &str, callback: fn()) -> Result<(), JsValue> {
    let Some(document) = document() else {
        return Ok(());
    };
    let closure = Closure::<dyn FnMut()>::wrap(Box::new(callback));
    document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
