use super::aggregate::{Aggregate, DashboardSummary};
use super::duration::{format_compound, format_decimal_hours, format_hhmmss};
use super::entry::TimeEntry;
use super::timer::TimerSession;
use prettytable::{row, Table};

/// Widest bar on the activity chart, in characters.
pub const CHART_WIDTH: u64 = 40;

pub struct View {}

impl View {
    pub fn entries(entries: &[&TimeEntry], decimal_places: usize) {
        let mut table = Table::new();

        table.add_row(row!["ID", "FILE", "CLIENT", "DATE", "DURATION", "STATUS", "LINK"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.file_name,
                entry.client,
                entry.date.map(|d| d.format("%b %-d, %Y").to_string()).unwrap_or_default(),
                format_compound(entry.duration_seconds),
                entry.status,
                entry.link.as_deref().unwrap_or("")
            ]);
        }

        let totals = super::aggregate::aggregate(entries.iter().copied(), |_| true);
        table.add_row(row![
            "",
            format!("{} file(s)", totals.count),
            "",
            "",
            format_compound(totals.total_seconds),
            format!("{} h", format_decimal_hours(totals.total_seconds, decimal_places)),
            ""
        ]);
        table.printstd();
    }

    pub fn entry(entry: &TimeEntry) {
        let mut table = Table::new();
        table.add_row(row!["ID", entry.id]);
        table.add_row(row!["FILE", entry.file_name]);
        table.add_row(row!["CLIENT", entry.client]);
        table.add_row(row!["DATE", entry.date.map(|d| d.to_string()).unwrap_or_default()]);
        table.add_row(row!["DURATION", format!("{} ({})", format_compound(entry.duration_seconds), format_hhmmss(entry.duration_seconds))]);
        table.add_row(row!["STATUS", entry.status]);
        table.add_row(row!["LINK", entry.link.as_deref().unwrap_or("")]);
        table.add_row(row!["NOTES", entry.notes.as_deref().unwrap_or("")]);
        table.add_row(row!["CREATED", entry.created_at.format("%b %-d, %Y %H:%M")]);
        table.printstd();
    }

    pub fn billing_card(label: &str, totals: &Aggregate, decimal_places: usize) {
        let mut table = Table::new();
        table.add_row(row!["CURRENT BILLING CYCLE", label]);
        table.add_row(row!["Files Completed", totals.count]);
        table.add_row(row!["Audio Hours", format_decimal_hours(totals.total_seconds, decimal_places)]);
        table.printstd();
    }

    pub fn dashboard(summary: &DashboardSummary, decimal_places: usize) {
        Self::billing_card(&summary.cycle.label, &summary.cycle_completed, decimal_places);

        let mut stats = Table::new();
        stats.add_row(row!["Total Lifetime Files", summary.lifetime_completed]);
        stats.add_row(row!["Pending Review", summary.pending_qa]);
        stats.printstd();

        if summary.chart.is_empty() {
            return;
        }
        let max = summary.chart.iter().map(|b| b.minutes).max().unwrap_or(0).max(1);
        let mut chart = Table::new();
        chart.add_row(row!["DAY", "MINUTES", ""]);
        for bucket in &summary.chart {
            chart.add_row(row![bucket.date.format("%a %b %-d"), bucket.minutes, "█".repeat(Self::bar_width(bucket.minutes, max))]);
        }
        chart.printstd();
    }

    /// Bar length for `minutes` on a chart whose longest bar is `max` minutes.
    pub fn bar_width(minutes: u64, max: u64) -> usize {
        if max == 0 {
            return 0;
        }
        (u128::from(minutes.min(max)) * u128::from(CHART_WIDTH) / u128::from(max)) as usize
    }

    /// One-line timer status, redrawn in place.
    pub fn timer_line(session: &TimerSession) -> String {
        format!(
            "[{}] {} / {}  {:?}",
            session.stage().short_name(),
            format_hhmmss(session.remaining_seconds()),
            format_hhmmss(session.target_seconds()),
            session.phase()
        )
    }
}
