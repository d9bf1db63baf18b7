use foundation::GeoPoint;
use serde_json::{Map, Value};

/// One point of interest: coordinates, display title, and optional
/// descriptive/link fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub url: Option<String>,
}

impl LocationRecord {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

#[derive(Debug)]
pub enum PayloadError {
    Json(String),
    NotAnArray,
    InvalidRecord { index: usize, reason: String },
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::Json(msg) => write!(f, "JSON parse error: {msg}"),
            PayloadError::NotAnArray => write!(f, "expected a JSON array of location records"),
            PayloadError::InvalidRecord { index, reason } => {
                write!(f, "invalid record at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for PayloadError {}

/// Parses an embedded payload text into location records.
///
/// The payload is a JSON array of objects with numeric `lat`/`lng`, a
/// non-blank `title`, and optional `subtitle`/`category`/`url` strings.
pub fn parse_locations(payload: &str) -> Result<Vec<LocationRecord>, PayloadError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| PayloadError::Json(e.to_string()))?;
    locations_from_json_value(&value)
}

pub fn locations_from_json_value(value: &Value) -> Result<Vec<LocationRecord>, PayloadError> {
    let items = value.as_array().ok_or(PayloadError::NotAnArray)?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record =
            parse_record(item).map_err(|reason| PayloadError::InvalidRecord { index, reason })?;
        records.push(record);
    }
    Ok(records)
}

fn parse_record(value: &Value) -> Result<LocationRecord, String> {
    let obj = value.as_object().ok_or("record must be an object".to_string())?;

    let lat = coordinate(obj, "lat", 90.0)?;
    let lng = coordinate(obj, "lng", 180.0)?;

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .ok_or("record missing title".to_string())?
        .trim();
    if title.is_empty() {
        return Err("title must not be blank".to_string());
    }

    Ok(LocationRecord {
        lat,
        lng,
        title: title.to_string(),
        subtitle: optional_text(obj, "subtitle"),
        category: optional_text(obj, "category"),
        url: optional_text(obj, "url"),
    })
}

// Latitude [-90, 90], longitude [-180, 180]. The comparison is written
// so NaN fails it.
fn coordinate(obj: &Map<String, Value>, key: &str, limit_deg: f64) -> Result<f64, String> {
    let value = obj
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| format!("record missing numeric {key}"))?;
    if !(value >= -limit_deg && value <= limit_deg) {
        return Err(format!("{key} out of range: {value}"));
    }
    Ok(value)
}

// Absent, null, non-string, and blank values all read as "not provided".
fn optional_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Semantic round-trip exporter: emits the embedded-payload JSON array.
/// Optional fields are omitted when absent.
pub fn locations_to_json_value(records: &[LocationRecord]) -> Value {
    let mut items: Vec<Value> = Vec::with_capacity(records.len());
    for record in records {
        let mut obj = Map::new();
        obj.insert("lat".to_string(), Value::from(record.lat));
        obj.insert("lng".to_string(), Value::from(record.lng));
        obj.insert("title".to_string(), Value::String(record.title.clone()));
        if let Some(subtitle) = &record.subtitle {
            obj.insert("subtitle".to_string(), Value::String(subtitle.clone()));
        }
        if let Some(category) = &record.category {
            obj.insert("category".to_string(), Value::String(category.clone()));
        }
        if let Some(url) = &record.url {
            obj.insert("url".to_string(), Value::String(url.clone()));
        }
        items.push(Value::Object(obj));
    }
    Value::Array(items)
}

#[cfg(test)]
mod tests {
    use super::{
        LocationRecord, PayloadError, locations_to_json_value, parse_locations,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_transport_records() {
        let payload = r#"[
            {"lat": 13.7457, "lng": 100.5347, "title": "Siam", "subtitle": "BTS · Sukhumvit Line"},
            {"lat": 13.7649, "lng": 100.5383, "title": "Victory Monument", "subtitle": ""}
        ]"#;
        let records = parse_locations(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Siam");
        assert_eq!(records[0].subtitle.as_deref(), Some("BTS · Sukhumvit Line"));
        // A blank subtitle reads as "not provided".
        assert_eq!(records[1].subtitle, None);
        assert_eq!(records[1].category, None);
        assert_eq!(records[1].url, None);
    }

    #[test]
    fn parses_poi_records() {
        let payload = r#"[
            {"title": "Wat Arun", "category": "Temple", "url": "/places/wat-arun/",
             "lat": 13.7437, "lng": 100.4888}
        ]"#;
        let records = parse_locations(payload).unwrap();
        assert_eq!(
            records,
            vec![LocationRecord {
                lat: 13.7437,
                lng: 100.4888,
                title: "Wat Arun".to_string(),
                subtitle: None,
                category: Some("Temple".to_string()),
                url: Some("/places/wat-arun/".to_string()),
            }]
        );
    }

    #[test]
    fn empty_array_parses_to_empty_list() {
        assert_eq!(parse_locations("[]").unwrap(), vec![]);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            parse_locations("{not json"),
            Err(PayloadError::Json(_))
        ));
    }

    #[test]
    fn non_array_payload_is_rejected() {
        assert!(matches!(
            parse_locations(r#"{"lat": 1}"#),
            Err(PayloadError::NotAnArray)
        ));
    }

    #[test]
    fn record_missing_coordinate_is_rejected_with_index() {
        let payload = r#"[
            {"lat": 13.7, "lng": 100.5, "title": "ok"},
            {"lat": 13.7, "title": "no lng"}
        ]"#;
        match parse_locations(payload) {
            Err(PayloadError::InvalidRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("lng"), "unexpected reason: {reason}");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn string_coordinate_is_rejected() {
        let payload = r#"[{"lat": "13.7", "lng": 100.5, "title": "t"}]"#;
        assert!(matches!(
            parse_locations(payload),
            Err(PayloadError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let payload = r#"[{"lat": 91.0, "lng": 100.5, "title": "t"}]"#;
        match parse_locations(payload) {
            Err(PayloadError::InvalidRecord { reason, .. }) => {
                assert!(reason.contains("lat out of range"), "{reason}");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let payload = r#"[{"lat": 1.0, "lng": 2.0, "title": "   "}]"#;
        match parse_locations(payload) {
            Err(PayloadError::InvalidRecord { reason, .. }) => {
                assert_eq!(reason, "title must not be blank");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn title_is_trimmed() {
        let payload = r#"[{"lat": 1.0, "lng": 2.0, "title": "  Hua Lamphong  "}]"#;
        let records = parse_locations(payload).unwrap();
        assert_eq!(records[0].title, "Hua Lamphong");
    }

    #[test]
    fn exporter_round_trips() {
        let records = vec![
            LocationRecord {
                lat: 13.7563,
                lng: 100.5018,
                title: "City Pillar Shrine".to_string(),
                subtitle: None,
                category: Some("Landmark".to_string()),
                url: Some("/places/city-pillar/".to_string()),
            },
            LocationRecord {
                lat: 13.7457,
                lng: 100.5347,
                title: "Siam".to_string(),
                subtitle: Some("BTS".to_string()),
                category: None,
                url: None,
            },
        ];
        let value = locations_to_json_value(&records);
        let reparsed = super::locations_from_json_value(&value).unwrap();
        assert_eq!(reparsed, records);
        // Optional fields are omitted, not null.
        assert!(value[1].get("category").is_none());
        assert!(value[1].get("url").is_none());
    }
}
