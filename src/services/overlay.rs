use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use tracing::warn;

use crate::client::AvailabilityRecord;
use crate::models::slot::{day_slots, DaySlotIndex, SLOT_MINUTES};

/// Day scope of a persisted rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleWindow {
    /// Applies every week on this day, 0=Sunday..6=Saturday.
    Recurring { day_of_week: u8 },
    /// Applies to a single calendar date.
    OneTime { date: NaiveDate },
}

/// A persisted availability rule mapped into typed form at the API boundary.
/// Core logic never sees the raw record's string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedRule {
    pub window: RuleWindow,
    pub start_minutes: u16,
    pub end_minutes: u16,
}

impl PersistedRule {
    /// Map a backend record into a typed rule. Returns `None` for records
    /// with an unknown type or unparseable fields.
    pub fn from_record(record: &AvailabilityRecord) -> Option<Self> {
        let start_minutes = parse_wall_clock(&record.start_time)?;
        let end_minutes = parse_wall_clock(&record.end_time)?;

        let window = match record.availability_type.as_str() {
            "recurring" => RuleWindow::Recurring {
                day_of_week: record.day_of_week?,
            },
            "one_time" => RuleWindow::OneTime {
                date: record.specific_date?,
            },
            _ => return None,
        };

        Some(Self {
            window,
            start_minutes,
            end_minutes,
        })
    }
}

/// Map a list of backend records, skipping any that fail to parse.
pub fn map_records(records: &[AvailabilityRecord]) -> Vec<PersistedRule> {
    records
        .iter()
        .filter_map(|record| {
            let mapped = PersistedRule::from_record(record);
            if mapped.is_none() {
                warn!(
                    "Skipping unmappable availability record {} (type: {})",
                    record.id, record.availability_type
                );
            }
            mapped
        })
        .collect()
}

// Parse "HH:MM" or "HH:MM:SS" into minutes since midnight
fn parse_wall_clock(time: &str) -> Option<u16> {
    let mut parts = time.split(':');
    let hour: u16 = parts.next()?.parse().ok()?;
    let minute: u16 = parts.next()?.parse().ok()?;

    if hour > 23 || minute > 59 {
        return None;
    }

    Some(hour * 60 + minute)
}

/// Compute which grid cells to pre-highlight as already available for the
/// 7-day window starting at `week_start`.
///
/// A cell is highlighted when its full 30-minute window lies inside a rule
/// window whose day matches the cell's date.
pub fn highlighted_cells(
    rules: &[PersistedRule],
    week_start: NaiveDate,
) -> HashSet<DaySlotIndex> {
    let mut cells = HashSet::new();

    for day in 0..7 {
        let date = week_start + chrono::Duration::days(day);
        let weekday = date.weekday().num_days_from_sunday() as u8;

        for rule in rules {
            let applies = match rule.window {
                RuleWindow::Recurring { day_of_week } => day_of_week == weekday,
                RuleWindow::OneTime { date: rule_date } => rule_date == date,
            };
            if !applies {
                continue;
            }

            for (offset, slot) in day_slots().enumerate() {
                let slot_start = slot.minutes_from_midnight;
                if slot_start >= rule.start_minutes
                    && slot_start + SLOT_MINUTES <= rule.end_minutes
                {
                    cells.insert(DaySlotIndex::new(date, offset as u8));
                }
            }
        }
    }

    cells
}
