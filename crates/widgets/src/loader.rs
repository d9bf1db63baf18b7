use records::{LocationRecord, parse_locations};

/// Rendered in place of a widget whose payload did not parse.
pub const DATA_UNAVAILABLE_MESSAGE: &str = "Map data unavailable.";
/// Rendered in place of a widget whose payload parsed to an empty list,
/// unless the host configures its own message.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No locations available.";
/// Rendered in place of an interactive widget when the map library is
/// missing from the page.
pub const LIBRARY_UNAVAILABLE_MESSAGE: &str = "Map library unavailable.";

/// Terminal result of loading an embedded payload.
///
/// Missing DOM anchors never reach the loader: a page without the widget
/// is a silent no-op on the host side.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The payload did not parse; render [`DATA_UNAVAILABLE_MESSAGE`].
    Unavailable,
    /// The payload parsed to an empty list; render the carried message.
    Empty(String),
    Ready(Vec<LocationRecord>),
}

/// Parses a payload into the widget's terminal load state.
///
/// `empty_message` is the host-configured empty-state override (the
/// container's `data-empty` attribute); blank overrides fall back to
/// [`DEFAULT_EMPTY_MESSAGE`].
pub fn load_locations(payload: &str, empty_message: Option<&str>) -> LoadOutcome {
    let records = match parse_locations(payload) {
        Ok(records) => records,
        Err(_) => return LoadOutcome::Unavailable,
    };

    if records.is_empty() {
        let message = empty_message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(DEFAULT_EMPTY_MESSAGE);
        return LoadOutcome::Empty(message.to_string());
    }

    LoadOutcome::Ready(records)
}
