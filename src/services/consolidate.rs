use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

use crate::models::slot::ConsolidatedRange;
use crate::services::selection::SlotSelection;

/// Collapse a selection into the minimal list of contiguous ranges per date.
///
/// For every date with at least one selected offset, the emitted ranges cover
/// exactly the selected offsets, are non-overlapping, and are maximal: two
/// ranges on the same date are always separated by at least one unselected
/// offset. Output is ordered by date ascending, then start offset ascending,
/// regardless of selection insertion order.
pub fn consolidate(selection: &SlotSelection) -> Vec<ConsolidatedRange> {
    if selection.is_empty() {
        return Vec::new();
    }

    // Group selected offsets by date
    let mut date_groups: HashMap<NaiveDate, Vec<u8>> = HashMap::new();
    for index in selection.iter() {
        date_groups
            .entry(index.date)
            .or_default()
            .push(index.slot_offset);
    }

    let mut ranges = Vec::new();

    for (date, mut offsets) in date_groups {
        offsets.sort_unstable();

        // Scan sorted offsets into maximal runs
        let mut start = offsets[0];
        let mut end = offsets[0];

        for &offset in offsets.iter().skip(1) {
            if offset == end + 1 {
                end = offset;
            } else {
                ranges.push(ConsolidatedRange {
                    date,
                    start_offset: start,
                    end_offset: end + 1,
                });
                start = offset;
                end = offset;
            }
        }

        // Close the final run; the exclusive end is one past the last offset
        ranges.push(ConsolidatedRange {
            date,
            start_offset: start,
            end_offset: end + 1,
        });
    }

    ranges.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.start_offset.cmp(&b.start_offset))
    });

    debug!(
        "Consolidated {} selected cells into {} ranges",
        selection.len(),
        ranges.len()
    );

    ranges
}
