#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use trackscribe::commands::add::EntryFields;
    use trackscribe::db::{db::Db, entries::Entries};
    use trackscribe::libs::book::{EntryBook, EntryForm};
    use trackscribe::libs::clock::FixedClock;
    use trackscribe::libs::entry::{EntryPatch, EntryStatus, LegacyRecord, NewEntry, TimeEntry};
    use trackscribe::libs::error::{TrackError, TrackResult};
    use trackscribe::libs::store::{EntryStore, MemoryStore};

    const OWNER: &str = "owner-1";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn form(name: &str, time: &str) -> EntryForm {
        let mut form = EntryForm::blank(today());
        form.file_name = name.to_string();
        form.client = "Mantis".to_string();
        form.set_time(time);
        form
    }

    /// Lists normally but rejects every write.
    struct ReadOnlyStore(MemoryStore);

    impl EntryStore for ReadOnlyStore {
        fn list(&self, owner_id: &str) -> TrackResult<Vec<TimeEntry>> {
            self.0.list(owner_id)
        }
        fn create(&mut self, _entry: &NewEntry) -> TrackResult<TimeEntry> {
            Err(TrackError::persistence("read-only"))
        }
        fn update(&mut self, _id: i64, _patch: &EntryPatch) -> TrackResult<()> {
            Err(TrackError::persistence("read-only"))
        }
        fn delete(&mut self, _id: i64) -> TrackResult<()> {
            Err(TrackError::persistence("read-only"))
        }
    }

    #[test]
    fn test_submit_creates_and_refreshes() {
        let clock = FixedClock::on(today());
        let mut book = EntryBook::open(MemoryStore::new(), OWNER).unwrap();

        let id = book.submit(&form("call.wav", "45:30"), None, &clock).unwrap();
        let entry = book.find(id).unwrap();
        assert_eq!(entry.duration_seconds, 2730);
        assert_eq!(entry.date, Some(today()));
        assert_eq!(entry.created_at, clock.0);
        assert_eq!(entry.owner_id, OWNER);
    }

    #[test]
    fn test_blank_names_are_auto_numbered() {
        let clock = FixedClock::on(today());
        let mut book = EntryBook::open(MemoryStore::new(), OWNER).unwrap();

        let first = book.submit(&form("  ", "10"), None, &clock).unwrap();
        let second = book.submit(&form("", "10"), None, &clock).unwrap();
        assert_eq!(book.find(first).unwrap().file_name, "Unnamed File 1");
        assert_eq!(book.find(second).unwrap().file_name, "Unnamed File 2");
    }

    #[test]
    fn test_edit_round_trips_the_form() {
        let clock = FixedClock::on(today());
        let mut book = EntryBook::open(MemoryStore::new(), OWNER).unwrap();
        let id = book.submit(&form("call.wav", "1:02:03"), None, &clock).unwrap();

        let mut edit = EntryForm::from_entry(book.find(id).unwrap(), today());
        assert_eq!(edit.time_string, "01:02:03");
        edit.status = EntryStatus::PendingQA;
        edit.notes = "needs QA".to_string();
        book.submit(&edit, Some(id), &clock).unwrap();

        let entry = book.find(id).unwrap();
        assert_eq!(entry.duration_seconds, 3723);
        assert_eq!(entry.status, EntryStatus::PendingQA);
        assert_eq!(entry.notes.as_deref(), Some("needs QA"));
        assert_eq!(book.entries().len(), 1);
    }

    #[test]
    fn test_editing_unknown_id_is_invalid_input() {
        let clock = FixedClock::on(today());
        let mut book = EntryBook::open(MemoryStore::new(), OWNER).unwrap();
        let result = book.submit(&form("a.wav", "10"), Some(42), &clock);
        assert!(matches!(result, Err(TrackError::InvalidInput(_))));
        assert!(matches!(book.delete(42), Err(TrackError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_time_writes_nothing() {
        let clock = FixedClock::on(today());
        let mut book = EntryBook::open(MemoryStore::new(), OWNER).unwrap();
        let mut bad = form("a.wav", "10");
        bad.time_string = "1:2:3:4".to_string();

        assert!(matches!(book.submit(&bad, None, &clock), Err(TrackError::InvalidInput(_))));
        assert!(book.entries().is_empty());
    }

    #[test]
    fn test_time_flag_is_parsed_as_given() {
        let clock = FixedClock::on(today());
        let mut book = EntryBook::open(MemoryStore::new(), OWNER).unwrap();

        for raw in ["1h30", "1.5"] {
            let mut form = EntryForm::blank(today());
            let fields = EntryFields {
                time: Some(raw.to_string()),
                ..Default::default()
            };
            fields.apply(&mut form);
            assert_eq!(form.time_string, raw);
            assert!(matches!(book.submit(&form, None, &clock), Err(TrackError::InvalidInput(_))));
        }
        assert!(book.entries().is_empty());

        let mut form = EntryForm::blank(today());
        let fields = EntryFields {
            time: Some(" 1:30:00 ".to_string()),
            ..Default::default()
        };
        fields.apply(&mut form);
        let id = book.submit(&form, None, &clock).unwrap();
        assert_eq!(book.find(id).unwrap().duration_seconds, 5400);
    }

    #[test]
    fn test_failed_write_keeps_cached_list() {
        let clock = FixedClock::on(today());
        let mut seeded = MemoryStore::new();
        seeded
            .create(&NewEntry::new(OWNER, "seed.wav", "Mantis", 60, today(), clock.0))
            .unwrap();

        let mut book = EntryBook::open(ReadOnlyStore(seeded), OWNER).unwrap();
        let before = book.entries().to_vec();

        assert!(matches!(book.submit(&form("a.wav", "10"), None, &clock), Err(TrackError::PersistenceFailure(_))));
        assert!(matches!(book.delete(before[0].id), Err(TrackError::PersistenceFailure(_))));
        assert_eq!(book.entries(), before.as_slice());
    }

    #[test]
    fn test_delete_refreshes() {
        let clock = FixedClock::on(today());
        let mut book = EntryBook::open(Entries::with_db(Db::in_memory().unwrap()), OWNER).unwrap();
        let id = book.submit(&form("a.wav", "10"), None, &clock).unwrap();
        assert_eq!(book.entries().len(), 1);

        book.delete(id).unwrap();
        assert!(book.entries().is_empty());
    }

    #[test]
    fn test_import_numbers_unnamed_records() {
        let clock = FixedClock::on(today());
        let mut book = EntryBook::open(MemoryStore::new(), OWNER).unwrap();
        let records = vec![
            LegacyRecord {
                total_minutes: Some(5),
                ..Default::default()
            },
            LegacyRecord {
                total_minutes: Some(7),
                ..Default::default()
            },
        ];

        assert_eq!(book.import(records, &clock).unwrap(), 2);
        let mut names: Vec<&str> = book.entries().iter().map(|e| e.file_name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Unnamed File 1", "Unnamed File 2"]);
    }
}
