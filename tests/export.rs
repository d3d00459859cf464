#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use trackscribe::libs::billing::{compute_cycle, BillingConfig, BillingCycle};
    use trackscribe::libs::entry::{EntryStatus, NewEntry, TimeEntry};
    use trackscribe::libs::export::{ExportData, ExportFormat, Exporter};

    struct ExportTestContext {
        temp_dir: TempDir,
        entries: Vec<TimeEntry>,
        cycle: BillingCycle,
    }

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn entry(id: i64, name: &str, seconds: u64, date: NaiveDate, status: EntryStatus) -> TimeEntry {
        let draft = NewEntry::new("owner", name, "Mantis", seconds, date, date.and_hms_opt(9, 0, 0).unwrap()).with_status(status);
        TimeEntry::from_new(id, &draft)
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let entries = vec![
                entry(3, "late.wav", 1800, day(1, 25), EntryStatus::Completed),
                entry(1, "early.wav", 3600, day(1, 14), EntryStatus::Completed),
                entry(2, "pending.wav", 600, day(1, 15), EntryStatus::PendingQA),
                entry(4, "old.wav", 900, day(1, 2), EntryStatus::Completed),
            ];
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                entries,
                cycle: compute_cycle(&BillingConfig::default(), day(1, 20)).unwrap(),
            }
        }
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None, 3);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("trackscribe_export_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_cycle_json_holds_completed_entries_in_cycle(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("cycle.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()), 3);
        exporter.export(ExportData::Cycle, &ctx.entries, &ctx.cycle).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["cycle"], "Jan 13 - Feb 12");
        assert_eq!(json["files_completed"], 2);
        assert_eq!(json["total_seconds"], 5400);
        assert_eq!(json["total_hours"], "1.500");

        let ids: Vec<i64> = json["entries"].as_array().unwrap().iter().map(|e| e["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_entries_csv_has_every_entry(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("entries.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()), 2);
        let written = exporter.export(ExportData::Entries, &ctx.entries, &ctx.cycle).unwrap();
        assert_eq!(written, path);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "ID");
        assert_eq!(&headers[5], "Hours");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[1][1], "early.wav");
        assert_eq!(&rows[1][4], "1h 0m 0s");
        assert_eq!(&rows[1][5], "1.00");
        assert_eq!(&rows[2][6], "Pending QA");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_cycle_csv_starts_with_summary(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("cycle.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone()), 3)
            .export(ExportData::Cycle, &ctx.entries, &ctx.cycle)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("BILLING CYCLE,Jan 13 - Feb 12"));
        assert!(content.contains("Files Completed,2"));
        assert!(content.contains("early.wav"));
        assert!(!content.contains("old.wav"));
        assert!(!content.contains("pending.wav"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_file_is_written(ctx: &mut ExportTestContext) {
        for data in [ExportData::Cycle, ExportData::Entries] {
            let path = ctx.temp_dir.path().join(format!("{:?}.xlsx", data));
            Exporter::new(ExportFormat::Excel, Some(path.clone()), 3)
                .export(data, &ctx.entries, &ctx.cycle)
                .unwrap();
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
    }
}
