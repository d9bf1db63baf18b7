/// Derives a URL-safe token from a display label: lowercased, runs of
/// non-alphanumeric ASCII collapsed to single hyphens, no leading or
/// trailing hyphen. May return an empty string.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for ch in value.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Typed binding to the station page form, supplied by the host at
/// construction time instead of selector lookups.
pub trait StationForm {
    /// Visible text of the currently selected station option, if any.
    fn station_label(&self) -> Option<String>;
    fn set_title(&mut self, value: &str);
    fn slug(&self) -> String;
    fn set_slug(&mut self, value: &str);
}

/// Applies one station-selection change to the dependent fields.
///
/// A blank selection is ignored. The title is always overwritten with
/// the trimmed station label; the slug is only filled while it is empty,
/// and only with a non-empty derived token.
pub fn sync_station_selection(form: &mut impl StationForm) {
    let Some(label) = form.station_label() else {
        return;
    };
    let label = label.trim();
    if label.is_empty() {
        return;
    }

    form.set_title(label);

    if form.slug().is_empty() {
        let slug = slugify(label);
        if !slug.is_empty() {
            form.set_slug(&slug);
        }
    }
}

/// Plain in-memory form, used by tests and by hosts without a DOM.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InMemoryStationForm {
    pub station_label: Option<String>,
    pub title: String,
    pub slug: String,
}

impl StationForm for InMemoryStationForm {
    fn station_label(&self) -> Option<String> {
        self.station_label.clone()
    }

    fn set_title(&mut self, value: &str) {
        self.title = value.to_string();
    }

    fn slug(&self) -> String {
        self.slug.clone()
    }

    fn set_slug(&mut self, value: &str) {
        self.slug = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryStationForm, slugify, sync_station_selection};
    use pretty_assertions::assert_eq;

    #[test]
    fn selection_fills_title_and_empty_slug() {
        let mut form = InMemoryStationForm {
            station_label: Some("Central Station".to_string()),
            ..Default::default()
        };
        sync_station_selection(&mut form);
        assert_eq!(form.title, "Central Station");
        assert_eq!(form.slug, "central-station");
    }

    #[test]
    fn existing_slug_is_preserved() {
        let mut form = InMemoryStationForm {
            station_label: Some("Central Station".to_string()),
            slug: "keep-me".to_string(),
            ..Default::default()
        };
        sync_station_selection(&mut form);
        assert_eq!(form.title, "Central Station");
        assert_eq!(form.slug, "keep-me");
    }

    #[test]
    fn title_is_always_overwritten() {
        let mut form = InMemoryStationForm {
            station_label: Some("  Mo Chit  ".to_string()),
            title: "Old title".to_string(),
            slug: "old-slug".to_string(),
        };
        sync_station_selection(&mut form);
        assert_eq!(form.title, "Mo Chit");
        assert_eq!(form.slug, "old-slug");
    }

    #[test]
    fn blank_selection_is_ignored() {
        let mut form = InMemoryStationForm {
            station_label: Some("   ".to_string()),
            title: "Unchanged".to_string(),
            ..Default::default()
        };
        sync_station_selection(&mut form);
        assert_eq!(form.title, "Unchanged");
        assert_eq!(form.slug, "");
    }

    #[test]
    fn missing_selection_is_ignored() {
        let mut form = InMemoryStationForm::default();
        sync_station_selection(&mut form);
        assert_eq!(form, InMemoryStationForm::default());
    }

    #[test]
    fn punctuation_only_label_leaves_slug_empty() {
        let mut form = InMemoryStationForm {
            station_label: Some("!!!".to_string()),
            ..Default::default()
        };
        sync_station_selection(&mut form);
        assert_eq!(form.title, "!!!");
        assert_eq!(form.slug, "");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Central Station"), "central-station");
        assert_eq!(slugify("Élève 2024!!"), "l-ve-2024");
        assert_eq!(slugify("  On  Nut -- BTS  "), "on-nut-bts");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_never_emits_consecutive_or_edge_hyphens() {
        for input in ["a--b", "--a--", "a !@# b", "...a...", "9 / 11"] {
            let slug = slugify(input);
            assert!(!slug.contains("--"), "consecutive hyphens in {slug:?}");
            assert!(!slug.starts_with('-'), "leading hyphen in {slug:?}");
            assert!(!slug.ends_with('-'), "trailing hyphen in {slug:?}");
        }
    }
}
