use records::LocationRecord;

/// Which popup body a map widget renders.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PopupVariant {
    /// Bold title plus an optional subtitle line (transport widget).
    TitleSubtitle,
    /// Title linking to the record URL plus an optional category line
    /// (POI widget).
    LinkedTitleCategory,
}

/// Builds the popup markup for one record. All record text is escaped
/// here; hosts must not escape again.
pub fn popup_html(record: &LocationRecord, variant: PopupVariant) -> String {
    match variant {
        PopupVariant::TitleSubtitle => {
            let mut html = format!("<strong>{}</strong>", escape_html(&record.title));
            if let Some(subtitle) = &record.subtitle {
                html.push_str("<br>");
                html.push_str(&escape_html(subtitle));
            }
            html
        }
        PopupVariant::LinkedTitleCategory => {
            let title = escape_html(&record.title);
            let mut html = match &record.url {
                Some(url) => format!(
                    "<strong><a href=\"{}\">{title}</a></strong>",
                    escape_html(url)
                ),
                None => format!("<strong>{title}</strong>"),
            };
            if let Some(category) = &record.category {
                html.push_str("<br>");
                html.push_str(&escape_html(category));
            }
            html
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
