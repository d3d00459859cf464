//! Exporting entries and billing-cycle statements.
//!
//! Writes either the completed entries of the active billing cycle together
//! with their totals (the invoice statement), or every entry of the owner, in
//! one of three formats.
//!
//! ## Features
//!
//! - **Export Formats**: CSV, JSON, and Excel with a bold header row
//! - **Data Types**: billing-cycle statement or the full entry list
//! - **File Naming**: timestamped default names such as
//!   `trackscribe_export_20240120_101500.csv`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trackscribe::libs::export::{Exporter, ExportFormat, ExportData};
//!
//! # fn demo(entries: &[trackscribe::libs::entry::TimeEntry], cycle: &trackscribe::libs::billing::BillingCycle) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Csv, None, 3);
//! let path = exporter.export(ExportData::Cycle, entries, cycle)?;
//! # Ok(())
//! # }
//! ```

use super::aggregate::aggregate;
use super::billing::BillingCycle;
use super::duration::{format_compound, format_decimal_hours};
use super::entry::{EntryStatus, TimeEntry};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Completed entries of the active billing cycle with totals
    Cycle,
    /// Every entry
    Entries,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportEntry {
    pub id: i64,
    pub file_name: String,
    pub client: String,
    pub date: String,
    pub duration: String,
    pub duration_seconds: u64,
    pub hours: String,
    pub status: String,
    pub link: String,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportCycle {
    pub cycle: String,
    pub start: String,
    pub end: String,
    pub files_completed: usize,
    pub total_seconds: u64,
    pub total_hours: String,
    pub entries: Vec<ExportEntry>,
}

const ENTRY_HEADERS: [&str; 9] = ["ID", "File", "Client", "Date", "Duration", "Hours", "Status", "Link", "Notes"];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
    decimal_places: usize,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, decimal_places: usize) -> Self {
        let default_name = format!("trackscribe_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self {
            format,
            output_path,
            decimal_places,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the export and returns the file it went to.
    pub fn export(&self, data: ExportData, entries: &[TimeEntry], cycle: &BillingCycle) -> Result<PathBuf> {
        match data {
            ExportData::Cycle => {
                let statement = self.gather_cycle(entries, cycle);
                match self.format {
                    ExportFormat::Csv => self.export_cycle_csv(&statement)?,
                    ExportFormat::Json => self.write_json(&statement)?,
                    ExportFormat::Excel => self.export_cycle_excel(&statement)?,
                }
            }
            ExportData::Entries => {
                let rows: Vec<ExportEntry> = entries.iter().map(|e| self.export_entry(e)).collect();
                match self.format {
                    ExportFormat::Csv => self.export_entries_csv(&rows)?,
                    ExportFormat::Json => self.write_json(&rows)?,
                    ExportFormat::Excel => self.export_entries_excel(&rows)?,
                }
            }
        }
        Ok(self.output_path.clone())
    }

    fn export_entry(&self, entry: &TimeEntry) -> ExportEntry {
        ExportEntry {
            id: entry.id,
            file_name: entry.file_name.clone(),
            client: entry.client.clone(),
            date: entry.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            duration: format_compound(entry.duration_seconds),
            duration_seconds: entry.duration_seconds,
            hours: format_decimal_hours(entry.duration_seconds, self.decimal_places),
            status: entry.status.label().to_string(),
            link: entry.link.clone().unwrap_or_default(),
            notes: entry.notes.clone().unwrap_or_default(),
        }
    }

    fn gather_cycle(&self, entries: &[TimeEntry], cycle: &BillingCycle) -> ExportCycle {
        let in_cycle = |e: &TimeEntry| e.status == EntryStatus::Completed && cycle.contains_opt(e.date);
        let totals = aggregate(entries, in_cycle);

        let mut rows: Vec<&TimeEntry> = entries.iter().filter(|e| in_cycle(e)).collect();
        rows.sort_by_key(|e| (e.date, e.id));

        ExportCycle {
            cycle: cycle.label.clone(),
            start: cycle.start.format("%Y-%m-%d").to_string(),
            end: cycle.end.format("%Y-%m-%d").to_string(),
            files_completed: totals.count,
            total_seconds: totals.total_seconds,
            total_hours: format_decimal_hours(totals.total_seconds, self.decimal_places),
            entries: rows.into_iter().map(|e| self.export_entry(e)).collect(),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn entry_record(entry: &ExportEntry) -> [String; 9] {
        [
            entry.id.to_string(),
            entry.file_name.clone(),
            entry.client.clone(),
            entry.date.clone(),
            entry.duration.clone(),
            entry.hours.clone(),
            entry.status.clone(),
            entry.link.clone(),
            entry.notes.clone(),
        ]
    }

    fn export_entries_csv(&self, rows: &[ExportEntry]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(ENTRY_HEADERS)?;
        for row in rows {
            wtr.write_record(Self::entry_record(row))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_cycle_csv(&self, statement: &ExportCycle) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        let blank = ["", "", "", "", "", "", "", "", ""];

        wtr.write_record(["BILLING CYCLE", &statement.cycle, "", "", "", "", "", "", ""])?;
        wtr.write_record(["Start", &statement.start, "", "", "", "", "", "", ""])?;
        wtr.write_record(["End", &statement.end, "", "", "", "", "", "", ""])?;
        wtr.write_record(["Files Completed", &statement.files_completed.to_string(), "", "", "", "", "", "", ""])?;
        wtr.write_record(["Audio Hours", &statement.total_hours, "", "", "", "", "", "", ""])?;
        wtr.write_record(blank)?;

        wtr.write_record(ENTRY_HEADERS)?;
        for row in &statement.entries {
            wtr.write_record(Self::entry_record(row))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_entries_sheet(worksheet: &mut rust_xlsxwriter::Worksheet, first_row: u32, rows: &[ExportEntry]) -> Result<()> {
        let header_format = Format::new().set_bold();
        for (col, header) in ENTRY_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(first_row, col as u16, *header, &header_format)?;
        }
        for (i, row) in rows.iter().enumerate() {
            let r = first_row + 1 + i as u32;
            worksheet.write_number(r, 0, row.id as f64)?;
            worksheet.write_string(r, 1, &row.file_name)?;
            worksheet.write_string(r, 2, &row.client)?;
            worksheet.write_string(r, 3, &row.date)?;
            worksheet.write_string(r, 4, &row.duration)?;
            worksheet.write_number(r, 5, row.duration_seconds as f64 / 3600.0)?;
            worksheet.write_string(r, 6, &row.status)?;
            worksheet.write_string(r, 7, &row.link)?;
            worksheet.write_string(r, 8, &row.notes)?;
        }
        Ok(())
    }

    fn export_entries_excel(&self, rows: &[ExportEntry]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Entries")?;
        Self::write_entries_sheet(worksheet, 0, rows)?;
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_cycle_excel(&self, statement: &ExportCycle) -> Result<()> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Billing Cycle")?;
        worksheet.write_string_with_format(0, 0, "Billing Cycle", &bold)?;
        worksheet.write_string(0, 1, &statement.cycle)?;
        worksheet.write_string_with_format(1, 0, "Start", &bold)?;
        worksheet.write_string(1, 1, &statement.start)?;
        worksheet.write_string_with_format(2, 0, "End", &bold)?;
        worksheet.write_string(2, 1, &statement.end)?;
        worksheet.write_string_with_format(3, 0, "Files Completed", &bold)?;
        worksheet.write_number(3, 1, statement.files_completed as f64)?;
        worksheet.write_string_with_format(4, 0, "Audio Hours", &bold)?;
        worksheet.write_string(4, 1, &statement.total_hours)?;

        Self::write_entries_sheet(worksheet, 6, &statement.entries)?;
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
