#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use trackscribe::libs::billing::{compute_cycle, BillingConfig, DEFAULT_START_DAY};
    use trackscribe::libs::error::TrackError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_of_month_after_start_day() {
        let cycle = compute_cycle(&BillingConfig::DayOfMonth { start_day: 13 }, date(2024, 1, 20)).unwrap();
        assert_eq!(cycle.start, date(2024, 1, 13));
        assert_eq!(cycle.end, date(2024, 2, 12));
        assert_eq!(cycle.label, "Jan 13 - Feb 12");
    }

    #[test]
    fn test_day_of_month_before_start_day() {
        let cycle = compute_cycle(&BillingConfig::DayOfMonth { start_day: 13 }, date(2024, 1, 5)).unwrap();
        assert_eq!(cycle.start, date(2023, 12, 13));
        assert_eq!(cycle.end, date(2024, 1, 12));
    }

    #[test]
    fn test_start_day_is_inside_cycle() {
        let cycle = compute_cycle(&BillingConfig::default(), date(2024, 3, 13)).unwrap();
        assert_eq!(cycle.start, date(2024, 3, DEFAULT_START_DAY));
        assert!(cycle.contains(date(2024, 3, 13)));
        assert!(cycle.contains(date(2024, 4, 12)));
        assert!(!cycle.contains(date(2024, 4, 13)));
        assert!(!cycle.contains_opt(None));
    }

    #[test]
    fn test_start_day_clamps_in_short_months() {
        let config = BillingConfig::DayOfMonth { start_day: 31 };

        let feb = compute_cycle(&config, date(2024, 2, 29)).unwrap();
        assert_eq!(feb.start, date(2024, 2, 29));
        assert_eq!(feb.end, date(2024, 3, 30));

        let early_march = compute_cycle(&config, date(2024, 3, 1)).unwrap();
        assert_eq!(early_march, feb);
    }

    #[test]
    fn test_consecutive_days_never_skip_a_cycle() {
        let config = BillingConfig::DayOfMonth { start_day: 30 };
        let mut day = date(2023, 12, 1);
        let mut previous = compute_cycle(&config, day).unwrap();
        while day < date(2024, 12, 31) {
            day = day.succ_opt().unwrap();
            let cycle = compute_cycle(&config, day).unwrap();
            assert!(cycle.contains(day), "{} not in {:?}", day, cycle);
            if cycle != previous {
                assert_eq!(cycle.start, previous.end.succ_opt().unwrap());
            }
            previous = cycle;
        }
    }

    #[test]
    fn test_range_mode_returns_range() {
        let config = BillingConfig::Range {
            start: date(2024, 5, 1),
            end: date(2024, 5, 31),
        };
        let cycle = compute_cycle(&config, date(2025, 1, 1)).unwrap();
        assert_eq!(cycle.start, date(2024, 5, 1));
        assert_eq!(cycle.end, date(2024, 5, 31));
        assert_eq!(cycle.label, "May 1, 2024 - May 31, 2024");
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        for day in [0, 32] {
            let result = compute_cycle(&BillingConfig::DayOfMonth { start_day: day }, date(2024, 1, 1));
            assert!(matches!(result, Err(TrackError::InvalidInput(_))));
        }
        let backwards = BillingConfig::Range {
            start: date(2024, 6, 1),
            end: date(2024, 5, 1),
        };
        assert!(matches!(backwards.validate(), Err(TrackError::InvalidInput(_))));
    }

    #[test]
    fn test_config_serializes_with_mode_tag() {
        let json = serde_json::to_string(&BillingConfig::DayOfMonth { start_day: 5 }).unwrap();
        assert_eq!(json, r#"{"mode":"day_of_month","start_day":5}"#);
        let parsed: BillingConfig = serde_json::from_str(r#"{"mode":"range","start":"2024-01-01","end":"2024-01-31"}"#).unwrap();
        assert_eq!(
            parsed,
            BillingConfig::Range {
                start: date(2024, 1, 1),
                end: date(2024, 1, 31)
            }
        );
    }
}
