use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use widgets::{
    DATA_UNAVAILABLE_MESSAGE, LIBRARY_UNAVAILABLE_MESSAGE, LoadOutcome, MapProvider,
    OverlayMarker, PoiRendererKind, PopupVariant, build_overlay_markers, load_locations,
    render_map,
};

use crate::dom;
use crate::leaflet;

const DATA_ID: &str = "poi-map-data";
const CONTAINER_ID: &str = "poi-map";

/// Boots the POI map when its anchors are present. The container's
/// `data-renderer` attribute selects the interactive renderer; the
/// default is the static percentage overlay.
pub fn init() -> Result<(), JsValue> {
    let Some(anchors) = dom::widget_anchors(DATA_ID, CONTAINER_ID) else {
        return Ok(());
    };
    if !dom::mark_bound(&anchors.container) {
        return Ok(());
    }

    let empty_message = dom::empty_message(&anchors.container);
    let records = match load_locations(&anchors.payload, empty_message.as_deref()) {
        LoadOutcome::Unavailable => {
            anchors
                .container
                .set_text_content(Some(DATA_UNAVAILABLE_MESSAGE));
            return Ok(());
        }
        LoadOutcome::Empty(message) => {
            anchors.container.set_text_content(Some(&message));
            return Ok(());
        }
        LoadOutcome::Ready(records) => records,
    };

    let renderer = PoiRendererKind::from_attr(
        anchors.container.dataset().get("renderer").as_deref(),
    );
    match renderer {
        PoiRendererKind::Interactive => {
            let options = dom::map_options_for(&anchors.container);
            match leaflet::provider(&anchors.container, &options) {
                MapProvider::Available(mut map) => {
                    render_map(
                        &mut map,
                        &records,
                        &options,
                        PopupVariant::LinkedTitleCategory,
                    );
                }
                MapProvider::Unavailable => {
                    anchors
                        .container
                        .set_text_content(Some(LIBRARY_UNAVAILABLE_MESSAGE));
                }
            }
            Ok(())
        }
        PoiRendererKind::StaticOverlay => {
            let markers = build_overlay_markers(&records);
            append_overlay_markers(&anchors.container, &markers)
        }
    }
}

// Marker nodes are collected into an off-document fragment and appended
// in one batch.
fn append_overlay_markers(
    container: &HtmlElement,
    markers: &[OverlayMarker],
) -> Result<(), JsValue> {
    let document = container
        .owner_document()
        .ok_or_else(|| JsValue::from_str("container detached from document"))?;
    let fragment = document.create_document_fragment();

    for marker in markers {
        let root = create_html(&document, "div")?;
        root.set_class_name("poi-map__marker");
        root.style().set_property("left", &format!("{}%", marker.left_pct))?;
        root.style().set_property("top", &format!("{}%", marker.top_pct))?;

        let link = create_html(&document, "a")?;
        link.set_class_name("poi-map__marker-link");
        if let Some(href) = &marker.href {
            link.set_attribute("href", href)?;
        }
        link.set_attribute("aria-label", &marker.aria_label)?;

        let dot = create_html(&document, "span")?;
        dot.set_class_name("poi-map__marker-dot");

        let label = create_html(&document, "span")?;
        label.set_class_name("poi-map__marker-label");
        label.set_text_content(Some(&marker.label));

        link.append_child(&dot)?;
        link.append_child(&label)?;
        root.append_child(&link)?;
        fragment.append_child(&root)?;
    }

    container.append_child(&fragment)?;
    Ok(())
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("expected an html element"))
}
