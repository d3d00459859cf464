#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use trackscribe::libs::entry::{status_rank, EntryStatus, NewEntry, TimeEntry, UNKNOWN_STATUS_RANK};
    use trackscribe::libs::query::{filter, sort, EntryFilter, SortDirection, SortKey, ALL_CLIENTS};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn entry(id: i64, name: &str, client: &str, day: u32, status: EntryStatus) -> TimeEntry {
        let draft = NewEntry::new("owner", name, client, 600, date(day), date(day).and_hms_opt(8, 0, 0).unwrap()).with_status(status);
        TimeEntry::from_new(id, &draft)
    }

    fn ids(entries: &[&TimeEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    fn sample() -> Vec<TimeEntry> {
        vec![
            entry(1, "Interview_A.wav", "Mantis", 3, EntryStatus::Completed),
            entry(2, "podcast.mp3", "cricket", 1, EntryStatus::InProgress),
            entry(3, "interview_b.wav", "Cricket", 2, EntryStatus::PendingQA),
        ]
    }

    #[test]
    fn test_sort_by_status_is_stable_both_ways() {
        let entries = vec![
            entry(1, "a", "Mantis", 1, EntryStatus::Completed),
            entry(2, "b", "Mantis", 1, EntryStatus::Completed),
        ];
        let refs: Vec<&TimeEntry> = entries.iter().collect();
        assert_eq!(ids(&sort(refs.clone(), SortKey::Status, SortDirection::Asc)), vec![1, 2]);
        assert_eq!(ids(&sort(refs, SortKey::Status, SortDirection::Desc)), vec![1, 2]);
    }

    #[test]
    fn test_sort_keys() {
        let entries = sample();
        let refs: Vec<&TimeEntry> = entries.iter().collect();

        assert_eq!(ids(&sort(refs.clone(), SortKey::Date, SortDirection::Desc)), vec![1, 3, 2]);
        assert_eq!(ids(&sort(refs.clone(), SortKey::Date, SortDirection::Asc)), vec![2, 3, 1]);
        assert_eq!(ids(&sort(refs.clone(), SortKey::Status, SortDirection::Asc)), vec![2, 3, 1]);
        // Client comparison ignores case, so the two Cricket entries tie
        assert_eq!(ids(&sort(refs, SortKey::Client, SortDirection::Asc)), vec![2, 3, 1]);
    }

    #[test]
    fn test_status_rank_order() {
        assert!(EntryStatus::InProgress.rank() < EntryStatus::PendingQA.rank());
        assert!(EntryStatus::PendingQA.rank() < EntryStatus::Completed.rank());
        assert_eq!(status_rank("Archived"), UNKNOWN_STATUS_RANK);
    }

    #[test]
    fn test_filter_text_is_case_insensitive() {
        let entries = sample();
        let f = EntryFilter {
            text: Some("INTERVIEW".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&entries, &f)), vec![1, 3]);
    }

    #[test]
    fn test_filter_combines_fields() {
        let entries = sample();
        let f = EntryFilter {
            text: Some("interview".to_string()),
            date: Some(date(2)),
            client: Some("Cricket".to_string()),
        };
        assert_eq!(ids(&filter(&entries, &f)), vec![3]);
    }

    #[test]
    fn test_all_clients_disables_client_filter() {
        let entries = sample();
        let f = EntryFilter {
            client: Some(ALL_CLIENTS.to_string()),
            ..Default::default()
        };
        assert_eq!(filter(&entries, &f).len(), 3);
        assert_eq!(filter(&entries, &EntryFilter::default()).len(), 3);
    }
}
