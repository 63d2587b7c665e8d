use std::collections::HashSet;
use tracing::debug;

use crate::models::slot::DaySlotIndex;

/// In-progress slot selection for one calendar view instance.
///
/// Tracks which grid cells are currently selected, independent of anything
/// already persisted. Owned by a single view; cleared after a successful save
/// or an explicit cancel.
#[derive(Debug, Clone, Default)]
pub struct SlotSelection {
    selected: HashSet<DaySlotIndex>,
}

impl SlotSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of a cell. Two toggles of the same cell cancel out.
    pub fn toggle(&mut self, index: DaySlotIndex) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Empty the selection, used after save or cancel.
    pub fn clear(&mut self) {
        debug!("Clearing selection of {} cells", self.selected.len());
        self.selected.clear();
    }

    /// Number of selected cells; non-zero means the save/cancel affordance
    /// is shown.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, index: &DaySlotIndex) -> bool {
        self.selected.contains(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySlotIndex> {
        self.selected.iter()
    }
}

/// One continuous press-drag-release interaction.
///
/// Cells visited during the gesture are tracked separately from the
/// selection itself: a cell toggles at most once per gesture, so a drag that
/// doubles back over a cell leaves it as the first pass set it. A new gesture
/// starts with an empty visited set and may toggle the same cells again.
#[derive(Debug, Default)]
pub struct DragGesture {
    visited: HashSet<DaySlotIndex>,
}

impl DragGesture {
    /// Start a gesture from the initial press on a cell.
    pub fn press(selection: &mut SlotSelection, index: DaySlotIndex) -> Self {
        let mut gesture = Self::default();
        gesture.visit(selection, index);
        gesture
    }

    /// Pointer entered a cell while the press is held.
    pub fn enter(&mut self, selection: &mut SlotSelection, index: DaySlotIndex) {
        self.visit(selection, index);
    }

    /// End the gesture. The visited set is discarded; the selection keeps
    /// whatever the gesture toggled.
    pub fn release(self) {}

    fn visit(&mut self, selection: &mut SlotSelection, index: DaySlotIndex) {
        if self.visited.insert(index) {
            selection.toggle(index);
        } else {
            debug!(
                "Cell {:?} offset {} already visited in this gesture",
                index.date, index.slot_offset
            );
        }
    }

    /// Number of distinct cells this gesture has touched.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
