#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use trackscribe::libs::aggregate::{aggregate, bucket_by_date, generate_auto_name, DashboardSummary, CHART_DAYS};
    use trackscribe::libs::billing::{compute_cycle, BillingConfig};
    use trackscribe::libs::entry::{EntryStatus, NewEntry, TimeEntry};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: i64, name: &str, seconds: u64, day: NaiveDate, status: EntryStatus) -> TimeEntry {
        let draft = NewEntry::new("owner", name, "Mantis", seconds, day, day.and_hms_opt(9, 0, 0).unwrap()).with_status(status);
        TimeEntry::from_new(id, &draft)
    }

    fn sample() -> Vec<TimeEntry> {
        vec![
            entry(1, "a.wav", 1800, date(2024, 1, 10), EntryStatus::Completed),
            entry(2, "b.wav", 3600, date(2024, 1, 15), EntryStatus::Completed),
            entry(3, "c.wav", 600, date(2024, 1, 16), EntryStatus::PendingQA),
            entry(4, "d.wav", 90, date(2024, 1, 16), EntryStatus::InProgress),
            entry(5, "e.wav", 1200, date(2024, 2, 13), EntryStatus::Completed),
        ]
    }

    #[test]
    fn test_aggregate_counts_and_sums() {
        let entries = sample();
        let completed = aggregate(&entries, |e| e.status == EntryStatus::Completed);
        assert_eq!(completed.count, 3);
        assert_eq!(completed.total_seconds, 6600);

        let none = aggregate(&entries, |_| false);
        assert_eq!(none.count, 0);
        assert_eq!(none.total_seconds, 0);
    }

    #[test]
    fn test_aggregate_is_repeatable() {
        let entries = sample();
        let predicate = |e: &TimeEntry| e.client == "Mantis";
        assert_eq!(aggregate(&entries, predicate), aggregate(&entries, predicate));
    }

    #[test]
    fn test_bucket_by_date_floors_minutes_per_entry() {
        let entries = sample();
        let buckets = bucket_by_date(&entries, CHART_DAYS);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].date, date(2024, 1, 10));
        // 600s + 90s on the 16th: 10 + 1 whole minutes
        assert_eq!(buckets[2].date, date(2024, 1, 16));
        assert_eq!(buckets[2].minutes, 11);
    }

    #[test]
    fn test_bucket_by_date_keeps_latest_days() {
        let entries: Vec<TimeEntry> = (1..=10)
            .map(|d| entry(d as i64, "x.wav", 60, date(2024, 3, d), EntryStatus::Completed))
            .collect();
        let buckets = bucket_by_date(&entries, 7);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets.first().unwrap().date, date(2024, 3, 4));
        assert_eq!(buckets.last().unwrap().date, date(2024, 3, 10));
    }

    #[test]
    fn test_dateless_entries_are_not_bucketed() {
        let mut undated = entry(1, "x.wav", 600, date(2024, 1, 1), EntryStatus::Completed);
        undated.date = None;
        assert!(bucket_by_date(&[undated], CHART_DAYS).is_empty());
    }

    #[test]
    fn test_generate_auto_name() {
        assert_eq!(generate_auto_name(&[]), "Unnamed File 1");

        let entries = vec![
            entry(1, "Unnamed File 1", 60, date(2024, 1, 1), EntryStatus::InProgress),
            entry(2, "Unnamed File 3", 60, date(2024, 1, 1), EntryStatus::InProgress),
            entry(3, "interview.wav", 60, date(2024, 1, 1), EntryStatus::InProgress),
        ];
        assert_eq!(generate_auto_name(&entries), "Unnamed File 4");
    }

    #[test]
    fn test_generate_auto_name_at_largest_suffix() {
        let entries = vec![
            entry(1, "Unnamed File", 60, date(2024, 1, 1), EntryStatus::InProgress),
            entry(2, "Unnamed File 18446744073709551615", 60, date(2024, 1, 1), EntryStatus::InProgress),
            entry(3, "Unnamed File 3", 60, date(2024, 1, 1), EntryStatus::InProgress),
        ];
        assert_eq!(generate_auto_name(&entries), "Unnamed File 2");
    }

    #[test]
    fn test_dashboard_summary() {
        let entries = sample();
        let cycle = compute_cycle(&BillingConfig::default(), date(2024, 1, 20)).unwrap();
        let summary = DashboardSummary::compute(&entries, cycle);

        // Only entry 2 is Completed and dated Jan 13 - Feb 12
        assert_eq!(summary.cycle_completed.count, 1);
        assert_eq!(summary.cycle_completed.total_seconds, 3600);
        assert_eq!(summary.lifetime_completed, 3);
        assert_eq!(summary.pending_qa, 1);
        assert_eq!(summary.chart.len(), 4);
    }
}
