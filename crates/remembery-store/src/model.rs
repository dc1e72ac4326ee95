//! Memory record model persisted by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user-authored memory.
///
/// Serialized as `{ "id", "text", "time", "image" }` with `image: null`
/// when no photo is attached, matching the persisted collection format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryRecord {
    /// Creation timestamp in milliseconds since the Unix epoch; unique
    /// within the collection and the chronological sort key.
    pub id: i64,
    /// The memory's content. Never empty for a stored record.
    pub text: String,
    /// Creation moment, serialized as RFC 3339.
    pub time: DateTime<Utc>,
    /// Opaque local file reference to an attached photo.
    pub image: Option<String>,
}

impl MemoryRecord {
    /// Whether a photo reference is attached.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryRecord;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_missing_image_as_null() {
        let record = MemoryRecord {
            id: 1_700_000_000_000,
            text: "keys are in the drawer".to_string(),
            time: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            image: None,
        };
        let raw = serde_json::to_string(&record).expect("serialize");
        assert!(raw.contains("\"image\":null"), "raw: {raw}");
    }

    #[test]
    fn round_trips_all_fields() {
        let records = vec![
            MemoryRecord {
                id: 1,
                text: "passport in the safe".to_string(),
                time: Utc.timestamp_millis_opt(1).unwrap(),
                image: Some("file:///photos/safe.jpg".to_string()),
            },
            MemoryRecord {
                id: 2,
                text: "spare charger at the office".to_string(),
                time: Utc.timestamp_millis_opt(2).unwrap(),
                image: None,
            },
        ];
        let raw = serde_json::to_string(&records).expect("serialize");
        let decoded: Vec<MemoryRecord> = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(decoded, records);
    }

    #[test]
    fn decodes_the_original_collection_format() {
        let raw = r#"[{"id":1712345678901,"text":"Left the keys under the mat","time":"2024-04-05T17:34:38.901Z","image":null}]"#;
        let decoded: Vec<MemoryRecord> = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, 1_712_345_678_901);
        assert_eq!(decoded[0].text, "Left the keys under the mat");
        assert!(!decoded[0].has_image());
    }
}
