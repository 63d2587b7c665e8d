use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// First selectable slot of the day starts at 06:00.
pub const GRID_START_MINUTES: u16 = 6 * 60;

/// Width of one grid slot in minutes.
pub const SLOT_MINUTES: u16 = 30;

/// Slots per day: 06:00 through 22:00 inclusive in 30-minute steps.
pub const SLOTS_PER_DAY: u8 = 33;

// Convert a slot offset (0..SLOTS_PER_DAY) to minutes since midnight
pub fn slot_offset_minutes(offset: u8) -> u16 {
    GRID_START_MINUTES + offset as u16 * SLOT_MINUTES
}

// Format minutes since midnight as zero-padded 24-hour "HH:MM"
pub fn format_wall_clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// One fixed-width time-of-day bucket in the visible grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub minutes_from_midnight: u16,
}

impl TimeSlot {
    pub fn from_offset(offset: u8) -> Self {
        Self {
            minutes_from_midnight: slot_offset_minutes(offset),
        }
    }

    /// Display label for the slot start, e.g. "08:30".
    pub fn label(&self) -> String {
        format_wall_clock(self.minutes_from_midnight)
    }
}

/// Enumerate the day's slots in grid order.
pub fn day_slots() -> impl Iterator<Item = TimeSlot> {
    (0..SLOTS_PER_DAY).map(TimeSlot::from_offset)
}

/// Compound key identifying one selectable cell: a date plus the slot's
/// position (0..=32) within that day's slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DaySlotIndex {
    pub date: NaiveDate,
    pub slot_offset: u8,
}

impl DaySlotIndex {
    pub fn new(date: NaiveDate, slot_offset: u8) -> Self {
        Self { date, slot_offset }
    }
}

/// A maximal run of consecutive selected slot offsets for one date,
/// expressed as a half-open offset interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsolidatedRange {
    pub date: NaiveDate,
    pub start_offset: u8,
    /// Exclusive: the first offset past the run.
    pub end_offset: u8,
}

impl ConsolidatedRange {
    /// Wall-clock start, e.g. offset 4 -> "08:00".
    pub fn start_time(&self) -> String {
        TimeSlot::from_offset(self.start_offset).label()
    }

    /// Wall-clock end; the exclusive offset maps directly to the end time.
    pub fn end_time(&self) -> String {
        TimeSlot::from_offset(self.end_offset).label()
    }

    /// Day of week with the backend's fixed numbering: 0=Sunday..6=Saturday.
    pub fn day_of_week(&self) -> u8 {
        self.date.weekday().num_days_from_sunday() as u8
    }
}
