//! Note data model
//!
//! `Note` is the only entity. The wire shape is
//! `{id, title, content, lastModified}` with `lastModified` rendered as an
//! ISO-8601 UTC timestamp at millisecond precision.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned note identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Id from a URL path segment, taking its leading digits.
    ///
    /// `"12abc"` and `"12.5"` both address note 12. Leading whitespace and a
    /// single `+` are skipped. `None` when no digits lead the segment.
    pub fn from_path_segment(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());

        unsigned[..end].parse::<u64>().ok().map(Self)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// Client-supplied fields for create and update.
///
/// Both fields are required. Unknown keys in the request body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
}

impl NoteFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A persisted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(with = "iso_millis")]
    pub last_modified: DateTime<Utc>,
}

impl Note {
    /// Title for display, falling back to "Untitled" when empty
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// `lastModified` wire format: `2024-05-01T12:00:00.123Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> Note {
        Note {
            id: NoteId::new(3),
            title: "Groceries".into(),
            content: "eggs".into(),
            last_modified: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_and_millis() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "title": "Groceries",
                "content": "eggs",
                "lastModified": "2024-05-01T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn fields_reject_wrong_types() {
        let err = serde_json::from_value::<NoteFields>(json!({ "title": 5, "content": "x" }));
        assert!(err.is_err());

        let err = serde_json::from_value::<NoteFields>(json!({ "title": "only title" }));
        assert!(err.is_err());
    }

    #[test]
    fn fields_ignore_unknown_keys() {
        let fields: NoteFields =
            serde_json::from_value(json!({ "title": "a", "content": "b", "pinned": true })).unwrap();
        assert_eq!(fields, NoteFields::new("a", "b"));
    }

    #[test]
    fn note_id_parsing() {
        assert_eq!("42".parse::<NoteId>().unwrap(), NoteId::new(42));
        assert!("abc".parse::<NoteId>().is_err());
        assert!("-1".parse::<NoteId>().is_err());
    }

    #[test]
    fn path_segment_takes_leading_digits() {
        assert_eq!(NoteId::from_path_segment("7"), Some(NoteId::new(7)));
        assert_eq!(NoteId::from_path_segment("1abc"), Some(NoteId::new(1)));
        assert_eq!(NoteId::from_path_segment("1.5"), Some(NoteId::new(1)));
        assert_eq!(NoteId::from_path_segment("+3"), Some(NoteId::new(3)));
        assert_eq!(NoteId::from_path_segment(" 4"), Some(NoteId::new(4)));

        assert_eq!(NoteId::from_path_segment("abc"), None);
        assert_eq!(NoteId::from_path_segment("-1"), None);
        assert_eq!(NoteId::from_path_segment("+"), None);
        assert_eq!(NoteId::from_path_segment(""), None);
    }

    #[test]
    fn empty_title_displays_as_untitled() {
        let mut note = sample();
        note.title.clear();
        assert_eq!(note.display_title(), "Untitled");
    }
}
