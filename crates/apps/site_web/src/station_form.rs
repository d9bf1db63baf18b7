use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlInputElement, HtmlSelectElement};

use widgets::{StationForm, sync_station_selection};

use crate::dom;

const STATION_SELECT_SELECTOR: &str = r#"select[name$="station"]"#;
const TITLE_SELECTORS: [&str; 2] = [r#"input[name="title"]"#, "#id_title"];
const SLUG_SELECTORS: [&str; 2] = [r#"input[name="slug"]"#, "#id_slug"];

struct DomStationForm {
    select: HtmlSelectElement,
    title: HtmlInputElement,
    slug: HtmlInputElement,
}

impl StationForm for DomStationForm {
    fn station_label(&self) -> Option<String> {
        self.select.selected_options().item(0)?.text_content()
    }

    fn set_title(&mut self, value: &str) {
        self.title.set_value(value);
    }

    fn slug(&self) -> String {
        self.slug.value()
    }

    fn set_slug(&mut self, value: &str) {
        self.slug.set_value(value);
    }
}

/// Locates the station select and its dependent fields and attaches the
/// change listener. Any missing field means the feature does not apply
/// to this page. Safe to call on every readiness signal: an
/// already-bound select is skipped.
pub fn bind() -> Result<(), JsValue> {
    let Some(document) = dom::document() else {
        return Ok(());
    };
    let Some(select) = query::<HtmlSelectElement>(&document, &[STATION_SELECT_SELECTOR]) else {
        return Ok(());
    };
    let Some(title) = query::<HtmlInputElement>(&document, &TITLE_SELECTORS) else {
        return Ok(());
    };
    let Some(slug) = query::<HtmlInputElement>(&document, &SLUG_SELECTORS) else {
        return Ok(());
    };

    if !dom::mark_bound(&select) {
        return Ok(());
    }

    let mut form = DomStationForm {
        select: select.clone(),
        title,
        slug,
    };
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event: Event| {
        sync_station_selection(&mut form);
    }));
    select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// First selector that matches and casts wins.
fn query<T: JsCast>(document: &Document, selectors: &[&str]) -> Option<T> {
    for selector in selectors {
        if let Ok(Some(element)) = document.query_selector(selector) {
            if let Ok(element) = element.dyn_into::<T>() {
                return Some(element);
            }
        }
    }
    None
}
