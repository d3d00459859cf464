//! Counting and totalling entries for the dashboard, list view and exports.

use super::billing::BillingCycle;
use super::entry::{EntryStatus, TimeEntry};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Number of trailing days shown on the activity chart.
pub const CHART_DAYS: usize = 7;

const AUTO_NAME_PREFIX: &str = "Unnamed File";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub count: usize,
    pub total_seconds: u64,
}

/// Count and summed duration of the entries matching `predicate`.
pub fn aggregate<'a, I, P>(entries: I, predicate: P) -> Aggregate
where
    I: IntoIterator<Item = &'a TimeEntry>,
    P: Fn(&TimeEntry) -> bool,
{
    entries.into_iter().filter(|e| predicate(e)).fold(Aggregate::default(), |acc, e| Aggregate {
        count: acc.count + 1,
        total_seconds: acc.total_seconds + e.duration_seconds,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub minutes: u64,
}

/// Per-day minute totals, ascending by date, limited to the last `last_n` days
/// that have entries. Each entry contributes its whole minutes; entries
/// without a date are skipped.
pub fn bucket_by_date(entries: &[TimeEntry], last_n: usize) -> Vec<DailyBucket> {
    let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for entry in entries {
        if let Some(date) = entry.date {
            *by_date.entry(date).or_default() += entry.duration_seconds / 60;
        }
    }

    let skip = by_date.len().saturating_sub(last_n);
    by_date
        .into_iter()
        .skip(skip)
        .map(|(date, minutes)| DailyBucket { date, minutes })
        .collect()
}

/// Next free `"Unnamed File {n}"` name.
///
/// `n` is one more than the largest suffix among existing names of that shape
/// (a bare `"Unnamed File"` counts as 1). It is derived from `entries` on every
/// call, so deleted entries free their numbers. When the largest suffix is
/// `u64::MAX` the smallest unused suffix is taken instead.
pub fn generate_auto_name(entries: &[TimeEntry]) -> String {
    let used: BTreeSet<u64> = entries.iter().filter_map(|e| auto_name_suffix(&e.file_name)).collect();
    let next = match used.last() {
        None => 1,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| (1..u64::MAX).find(|n| !used.contains(n)).unwrap_or(u64::MAX)),
    };
    format!("{} {}", AUTO_NAME_PREFIX, next)
}

fn auto_name_suffix(name: &str) -> Option<u64> {
    let rest = name.strip_prefix(AUTO_NAME_PREFIX)?;
    if rest.is_empty() {
        return Some(1);
    }
    let digits = rest.strip_prefix(' ')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub cycle: BillingCycle,
    /// Completed entries dated inside the cycle.
    pub cycle_completed: Aggregate,
    pub lifetime_completed: usize,
    pub pending_qa: usize,
    pub chart: Vec<DailyBucket>,
}

impl DashboardSummary {
    pub fn compute(entries: &[TimeEntry], cycle: BillingCycle) -> Self {
        let cycle_completed = aggregate(entries, |e| e.status == EntryStatus::Completed && cycle.contains_opt(e.date));
        let lifetime_completed = aggregate(entries, |e| e.status == EntryStatus::Completed).count;
        let pending_qa = aggregate(entries, |e| e.status == EntryStatus::PendingQA).count;

        DashboardSummary {
            cycle,
            cycle_completed,
            lifetime_completed,
            pending_qa,
            chart: bucket_by_date(entries, CHART_DAYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_parsing() {
        assert_eq!(auto_name_suffix("Unnamed File"), Some(1));
        assert_eq!(auto_name_suffix("Unnamed File 12"), Some(12));
        assert_eq!(auto_name_suffix("Unnamed File x"), None);
        assert_eq!(auto_name_suffix("Unnamed Filed 3"), None);
        assert_eq!(auto_name_suffix("Unnamed File 3 copy"), None);
        assert_eq!(auto_name_suffix("interview.wav"), None);
    }
}
