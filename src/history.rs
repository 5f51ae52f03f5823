//! Grouping history entries into per-day sections

use crate::core::types::HistoryItem;
use crate::text::format_day_heading;

/// One day's worth of history, labeled for a section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub label: String,
    pub entries: Vec<HistoryItem>,
}

/// Single step of a left-to-right fold that buckets history by calendar day.
///
/// Groups appear in first-seen order and entries keep their input order
/// within a group, so folding a visit-sorted list yields sections ready for
/// display:
///
/// ```
/// # use safarikit::core::types::HistoryItem;
/// # use safarikit::history::group_history_by_day;
/// # let items: Vec<HistoryItem> = Vec::new();
/// let groups = items.into_iter().fold(Vec::new(), group_history_by_day);
/// # assert!(groups.is_empty());
/// ```
///
/// An entry whose day label comes back empty is dropped; that is a defensive
/// no-op, unparsable timestamps label as "Invalid Date" and still group.
pub fn group_history_by_day(mut groups: Vec<DayGroup>, entry: HistoryItem) -> Vec<DayGroup> {
    let label = format_day_heading(&entry.last_visited);
    if label.is_empty() {
        return groups;
    }

    if let Some(group) = groups.iter_mut().find(|group| group.label == label) {
        group.entries.push(entry);
    } else {
        groups.push(DayGroup {
            label,
            entries: vec![entry],
        });
    }
    groups
}
