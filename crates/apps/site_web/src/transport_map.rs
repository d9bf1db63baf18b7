use widgets::{
    DATA_UNAVAILABLE_MESSAGE, LIBRARY_UNAVAILABLE_MESSAGE, LoadOutcome, MapProvider, PopupVariant,
    load_locations, render_map,
};

use crate::dom;
use crate::leaflet;

const DATA_ID: &str = "transport-map-data";
const CONTAINER_ID: &str = "transport-map";

/// Boots the interactive transport map when its anchors are present.
pub fn init() {
    let Some(anchors) = dom::widget_anchors(DATA_ID, CONTAINER_ID) else {
        return;
    };
    if !dom::mark_bound(&anchors.container) {
        return;
    }

    let empty_message = dom::empty_message(&anchors.container);
    let records = match load_locations(&anchors.payload, empty_message.as_deref()) {
        LoadOutcome::Unavailable => {
            anchors
                .container
                .set_text_content(Some(DATA_UNAVAILABLE_MESSAGE));
            return;
        }
        LoadOutcome::Empty(message) => {
            anchors.container.set_text_content(Some(&message));
            return;
        }
        LoadOutcome::Ready(records) => records,
    };

    let options = dom::map_options_for(&anchors.container);
    match leaflet::provider(&anchors.container, &options) {
        MapProvider::Available(mut map) => {
            render_map(&mut map, &records, &options, PopupVariant::TitleSubtitle);
        }
        MapProvider::Unavailable => {
            anchors
                .container
                .set_text_content(Some(LIBRARY_UNAVAILABLE_MESSAGE));
        }
    }
}
