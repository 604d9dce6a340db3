//! Note and label data model
//!
//! The note collection is a cached, server-authoritative snapshot; the
//! client holds copies and re-derives views after every mutation. Date
//! fields arrive from the wire and may be malformed, so deserialization
//! is lenient: an unparseable timestamp becomes `None` rather than
//! failing the whole cache.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{NotelitError, Result};

/// A label (tag) attachable to notes. Identity is the `name`; the color
/// is presentation metadata carried alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Unique key within the available label set
    pub name: String,
    /// Display color (hex string or named color, opaque to this crate)
    #[serde(default)]
    pub color: String,
}

impl Label {
    /// Create a label with a name and color
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A single note in the cached collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier, immutable once assigned
    pub id: String,
    /// Note title
    pub title: String,
    /// Note body text
    #[serde(default)]
    pub content: String,
    /// Attached labels in attachment order (a name appears at most once)
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Whether the note is pinned to the promoted shelf
    #[serde(default)]
    pub is_pinned: bool,
    /// When the note was pinned; cleared on unpin
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub pinned_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp; takes precedence over `created_at` for recency
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Create a new note with a fresh id and creation timestamp
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            content: content.into(),
            labels: Vec::new(),
            is_pinned: false,
            pinned_at: None,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    /// The timestamp used wherever "most recent" is needed:
    /// `updated_at`, falling back to `created_at`, falling back to epoch
    /// so malformed records sort as oldest instead of breaking the view.
    pub fn recency(&self) -> DateTime<Utc> {
        self.updated_at
            .or(self.created_at)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Whether a label with the given name is attached
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }

    /// Attach a label, enforcing at-most-once per name
    pub fn attach_label(&mut self, label: Label) -> Result<()> {
        if self.has_label(&label.name) {
            return Err(NotelitError::already_exists("label", &label.name));
        }
        self.labels.push(label);
        Ok(())
    }

    /// Detach a label by name
    pub fn detach_label(&mut self, name: &str) -> Result<()> {
        let before = self.labels.len();
        self.labels.retain(|l| l.name != name);
        if self.labels.len() == before {
            return Err(NotelitError::not_found("label", name));
        }
        Ok(())
    }

    /// Pin the note, recording when
    pub fn pin(&mut self) {
        self.is_pinned = true;
        self.pinned_at = Some(Utc::now());
    }

    /// Unpin the note, clearing the pin timestamp
    pub fn unpin(&mut self) {
        self.is_pinned = false;
        self.pinned_at = None;
    }

    /// Record an edit by bumping the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Generate a new note id (`nl-` prefix + lowercase ULID)
pub fn generate_id() -> String {
    format!("nl-{}", Ulid::new().to_string().to_lowercase())
}

/// Parse a timestamp from the wire, accepting RFC 3339 or a bare
/// `YYYY-MM-DD` date. Returns `None` for anything else.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn lenient_datetime<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_datetime))
}
