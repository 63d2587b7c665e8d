#[cfg(test)]
mod overlay_tests {
    use chrono::NaiveDate;

    use crate::client::AvailabilityRecord;
    use crate::models::slot::DaySlotIndex;
    use crate::services::overlay::{
        highlighted_cells, map_records, PersistedRule, RuleWindow,
    };

    fn record(
        availability_type: &str,
        day_of_week: Option<u8>,
        specific_date: Option<NaiveDate>,
        start_time: &str,
        end_time: &str,
    ) -> AvailabilityRecord {
        AvailabilityRecord {
            id: "rule_1".to_string(),
            worker_id: "worker-17".to_string(),
            availability_type: availability_type.to_string(),
            day_of_week,
            specific_date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            priority: "preferred".to_string(),
        }
    }

    // Week starting Sunday 2025-06-01
    fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_map_recurring_record() {
        let rule =
            PersistedRule::from_record(&record("recurring", Some(1), None, "09:00", "11:00"))
                .unwrap();

        assert_eq!(rule.window, RuleWindow::Recurring { day_of_week: 1 });
        assert_eq!(rule.start_minutes, 540);
        assert_eq!(rule.end_minutes, 660);
    }

    #[test]
    fn test_map_record_with_seconds() {
        let rule =
            PersistedRule::from_record(&record("recurring", Some(2), None, "09:00:00", "11:30:00"))
                .unwrap();

        assert_eq!(rule.start_minutes, 540);
        assert_eq!(rule.end_minutes, 690);
    }

    #[test]
    fn test_map_skips_malformed_records() {
        let records = vec![
            record("recurring", Some(1), None, "09:00", "11:00"),
            // Unknown type
            record("blackout", Some(1), None, "09:00", "11:00"),
            // Recurring without a day of week
            record("recurring", None, None, "09:00", "11:00"),
            // Unparseable time
            record("recurring", Some(1), None, "9am", "11:00"),
            // Out-of-range time
            record("recurring", Some(1), None, "25:00", "26:00"),
        ];

        let mapped = map_records(&records);
        assert_eq!(mapped.len(), 1);
    }

    #[test]
    fn test_recurring_rule_highlights_matching_weekday_only() {
        // Monday 09:00-11:00
        let rules =
            map_records(&[record("recurring", Some(1), None, "09:00", "11:00")]);

        let cells = highlighted_cells(&rules, week_start());

        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let expected: Vec<DaySlotIndex> = (6..=9)
            .map(|offset| DaySlotIndex::new(monday, offset))
            .collect();

        assert_eq!(cells.len(), expected.len());
        for cell in expected {
            assert!(cells.contains(&cell), "missing {:?}", cell);
        }
    }

    #[test]
    fn test_one_time_rule_highlights_only_its_date() {
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        let rules = map_records(&[record(
            "one_time",
            None,
            Some(wednesday),
            "06:00",
            "07:00",
        )]);

        let cells = highlighted_cells(&rules, week_start());

        assert_eq!(cells.len(), 2);
        assert!(cells.contains(&DaySlotIndex::new(wednesday, 0)));
        assert!(cells.contains(&DaySlotIndex::new(wednesday, 1)));
    }

    #[test]
    fn test_one_time_rule_outside_week_highlights_nothing() {
        let next_month = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();
        let rules = map_records(&[record(
            "one_time",
            None,
            Some(next_month),
            "06:00",
            "07:00",
        )]);

        assert!(highlighted_cells(&rules, week_start()).is_empty());
    }

    #[test]
    fn test_rule_window_clipped_to_grid_hours() {
        // 05:00-07:00: only the 06:00 and 06:30 slots fall inside the grid
        let rules =
            map_records(&[record("recurring", Some(0), None, "05:00", "07:00")]);

        let cells = highlighted_cells(&rules, week_start());

        let sunday = week_start();
        assert_eq!(cells.len(), 2);
        assert!(cells.contains(&DaySlotIndex::new(sunday, 0)));
        assert!(cells.contains(&DaySlotIndex::new(sunday, 1)));
    }

    #[test]
    fn test_partially_covered_slot_not_highlighted() {
        // 09:15-10:00 fully covers only the 09:30 slot
        let rules =
            map_records(&[record("recurring", Some(1), None, "09:15", "10:00")]);

        let cells = highlighted_cells(&rules, week_start());

        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(cells.len(), 1);
        assert!(cells.contains(&DaySlotIndex::new(monday, 7)));
    }
}
