//! Derived note views: filter, sort, and pinned partitioning
//!
//! `derive_view` is a pure function over the cached collection; it never
//! mutates its input and is cheap enough to re-run on every keystroke.
//! Stage order is fixed: label filter, pinned filter, search filter, sort.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotelitError;
use crate::note::Note;

/// Sort key for the note list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Preserve existing order (user drag-order, maintained upstream)
    #[default]
    Manual,
    /// Case-insensitive lexicographic by title, ascending
    Title,
    /// Recency descending (`updated_at` falling back to `created_at`)
    Newest,
    /// Recency ascending
    Oldest,
}

impl FromStr for SortKey {
    type Err = NotelitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(SortKey::Manual),
            "title" => Ok(SortKey::Title),
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            other => Err(NotelitError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Manual => write!(f, "manual"),
            SortKey::Title => write!(f, "title"),
            SortKey::Newest => write!(f, "newest"),
            SortKey::Oldest => write!(f, "oldest"),
        }
    }
}

/// View parameters driving the derived note list. Ephemeral client
/// state; defaults mean "show everything in stored order".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewParams {
    /// Substring search over title and content; empty or whitespace-only
    /// means no filter
    #[serde(default)]
    pub search_query: String,
    /// Sort key; ignored while `show_pinned_only` is set
    #[serde(default)]
    pub sort_by: SortKey,
    /// Keep only notes carrying this label name
    #[serde(default)]
    pub selected_label: Option<String>,
    /// Keep only pinned notes, always ordered by recency descending
    #[serde(default)]
    pub show_pinned_only: bool,
}

/// Derive the display list for the given parameters.
///
/// Pinned-only views are a recency-ordered shelf, not a user-sortable
/// list, so `sort_by` is ignored while `show_pinned_only` is set. All
/// sorts are stable: equal keys keep their input order, which is what
/// makes `Manual` a no-op rather than a scramble.
pub fn derive_view(notes: &[Note], params: &ViewParams) -> Vec<Note> {
    let mut notes: Vec<Note> = notes.to_vec();

    if let Some(label) = params.selected_label.as_deref() {
        notes.retain(|n| n.has_label(label));
    }

    if params.show_pinned_only {
        notes.retain(|n| n.is_pinned);
    }

    let query = params.search_query.trim().to_lowercase();
    if !query.is_empty() {
        notes.retain(|n| {
            n.title.to_lowercase().contains(&query) || n.content.to_lowercase().contains(&query)
        });
    }

    if params.show_pinned_only {
        notes.sort_by_key(|n| Reverse(n.recency()));
        return notes;
    }

    match params.sort_by {
        SortKey::Manual => {}
        SortKey::Title => notes.sort_by_key(|n| n.title.to_lowercase()),
        SortKey::Newest => notes.sort_by_key(|n| Reverse(n.recency())),
        SortKey::Oldest => notes.sort_by_key(Note::recency),
    }

    notes
}

/// Split a collection into the pinned shelf and the rest.
///
/// The pinned side is ordered by recency descending; the unpinned side
/// keeps its input order for the caller to sort per view parameters.
pub fn partition_pinned(notes: &[Note]) -> (Vec<Note>, Vec<Note>) {
    let (mut pinned, rest): (Vec<Note>, Vec<Note>) =
        notes.iter().cloned().partition(|n| n.is_pinned);
    pinned.sort_by_key(|n| Reverse(n.recency()));
    (pinned, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{parse_datetime, Label};

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            labels: Vec::new(),
            is_pinned: false,
            pinned_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id.as_str()).collect()
    }

    fn sample_collection() -> Vec<Note> {
        let mut grocery = note("n1", "Grocery List", "milk and eggs");
        grocery.created_at = parse_datetime("2025-03-29");

        let mut study = note("n2", "Study Plan", "rust ownership chapter");
        study.created_at = parse_datetime("2025-04-30");
        study.updated_at = parse_datetime("2025-05-01");

        let mut meeting = note("n3", "Meeting Notes", "standup follow-ups");
        meeting.created_at = parse_datetime("2025-04-01");
        meeting.labels.push(Label::new("work", "#3366ff"));

        vec![grocery, study, meeting]
    }

    #[test]
    fn default_params_are_identity() {
        let notes = sample_collection();
        let view = derive_view(&notes, &ViewParams::default());
        assert_eq!(ids(&view), ids(&notes));
    }

    #[test]
    fn empty_collection_yields_empty_view() {
        let view = derive_view(&[], &ViewParams::default());
        assert!(view.is_empty());
    }

    #[test]
    fn absent_label_filter_yields_empty() {
        let notes = sample_collection();
        let params = ViewParams {
            selected_label: Some("no-such-label".to_string()),
            ..Default::default()
        };
        assert!(derive_view(&notes, &params).is_empty());
    }

    #[test]
    fn label_filter_keeps_only_matching_notes() {
        let notes = sample_collection();
        let params = ViewParams {
            selected_label: Some("work".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&notes, &params)), vec!["n3"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let notes = sample_collection();
        for query in ["meet", "MEETING"] {
            let params = ViewParams {
                search_query: query.to_string(),
                ..Default::default()
            };
            assert_eq!(ids(&derive_view(&notes, &params)), vec!["n3"], "query {query:?}");
        }
    }

    #[test]
    fn search_matches_content_too() {
        let notes = sample_collection();
        let params = ViewParams {
            search_query: "OWNERSHIP".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&notes, &params)), vec!["n2"]);
    }

    #[test]
    fn whitespace_query_is_no_filter() {
        let notes = sample_collection();
        let params = ViewParams {
            search_query: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(derive_view(&notes, &params).len(), notes.len());
    }

    #[test]
    fn newest_uses_updated_falling_back_to_created() {
        let notes = sample_collection();
        let params = ViewParams {
            sort_by: SortKey::Newest,
            ..Default::default()
        };
        // Study Plan's updated_at (2025-05-01) beats Grocery List's
        // created_at (2025-03-29).
        assert_eq!(ids(&derive_view(&notes, &params)), vec!["n2", "n3", "n1"]);
    }

    #[test]
    fn oldest_is_reverse_of_newest_here() {
        let notes = sample_collection();
        let params = ViewParams {
            sort_by: SortKey::Oldest,
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&notes, &params)), vec!["n1", "n3", "n2"]);
    }

    #[test]
    fn title_sort_is_idempotent() {
        let notes = sample_collection();
        let params = ViewParams {
            sort_by: SortKey::Title,
            ..Default::default()
        };
        let once = derive_view(&notes, &params);
        let twice = derive_view(&once, &params);
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(ids(&once), vec!["n1", "n3", "n2"]);
    }

    #[test]
    fn title_sort_is_stable_on_ties() {
        let mut notes = vec![
            note("a", "Duplicate", ""),
            note("b", "Duplicate", ""),
            note("c", "Another", ""),
        ];
        notes[0].created_at = parse_datetime("2025-01-02");
        notes[1].created_at = parse_datetime("2025-01-01");
        let params = ViewParams {
            sort_by: SortKey::Title,
            ..Default::default()
        };
        // "a" and "b" tie on title and must keep input order.
        assert_eq!(ids(&derive_view(&notes, &params)), vec!["c", "a", "b"]);
    }

    #[test]
    fn pinned_only_ignores_sort_key() {
        let mut notes = sample_collection();
        notes[0].pin();
        notes[2].pin();

        let mut expected: Option<Vec<String>> = None;
        for sort_by in [SortKey::Title, SortKey::Manual] {
            let params = ViewParams {
                sort_by,
                show_pinned_only: true,
                ..Default::default()
            };
            let order: Vec<String> = derive_view(&notes, &params)
                .iter()
                .map(|n| n.id.clone())
                .collect();
            match &expected {
                None => expected = Some(order),
                Some(prev) => assert_eq!(prev, &order, "sort_by {sort_by} changed shelf order"),
            }
        }
        // Meeting Notes (2025-04-01) is more recent than Grocery List.
        assert_eq!(expected.unwrap(), vec!["n3", "n1"]);
    }

    #[test]
    fn unpinning_removes_note_from_pinned_view() {
        let mut notes = sample_collection();
        notes[1].pin();
        let params = ViewParams {
            show_pinned_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&notes, &params)), vec!["n2"]);

        notes[1].unpin();
        assert!(notes[1].pinned_at.is_none());
        assert!(derive_view(&notes, &params).is_empty());
    }

    #[test]
    fn malformed_dates_sort_as_oldest() {
        let mut notes = sample_collection();
        notes.push(note("n4", "No Dates", ""));
        let params = ViewParams {
            sort_by: SortKey::Newest,
            ..Default::default()
        };
        let view = derive_view(&notes, &params);
        assert_eq!(view.last().unwrap().id, "n4");
    }

    #[test]
    fn partition_orders_shelf_by_recency_and_keeps_rest_in_place() {
        let mut notes = sample_collection();
        notes[0].is_pinned = true;
        notes[2].is_pinned = true;

        let (pinned, rest) = partition_pinned(&notes);
        assert_eq!(ids(&pinned), vec!["n3", "n1"]);
        assert_eq!(ids(&rest), vec!["n2"]);
    }
}
