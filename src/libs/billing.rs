//! Billing cycle windows.
//!
//! Completed work is invoiced per billing cycle. A cycle is configured either
//! as a recurring start day of the month (the default is the 13th, so a cycle
//! runs from the 13th to the 12th of the next month) or as an explicit date
//! range the user maintains by hand.
//!
//! ## Short months
//!
//! A start day that does not exist in a month (the 31st in April, the 30th in
//! February) is clamped to that month's last day, so every date belongs to
//! exactly one cycle.
//!
//! ## Usage
//!
//! ```rust
//! use trackscribe::libs::billing::{compute_cycle, BillingConfig};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
//! let cycle = compute_cycle(&BillingConfig::DayOfMonth { start_day: 13 }, today)?;
//! assert_eq!(cycle.label, "Jan 13 - Feb 12");
//! # Ok::<(), trackscribe::libs::error::TrackError>(())
//! ```

use super::error::{TrackError, TrackResult};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_START_DAY: u32 = 13;

/// How the active billing cycle is determined. Only one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BillingConfig {
    /// Recurring cycle starting on `start_day` (1-31) every month.
    DayOfMonth { start_day: u32 },
    /// Fixed window, advanced manually by saving new settings.
    Range { start: NaiveDate, end: NaiveDate },
}

impl Default for BillingConfig {
    fn default() -> Self {
        BillingConfig::DayOfMonth {
            start_day: DEFAULT_START_DAY,
        }
    }
}

impl BillingConfig {
    pub fn validate(&self) -> TrackResult<()> {
        match *self {
            BillingConfig::DayOfMonth { start_day } if !(1..=31).contains(&start_day) => {
                Err(TrackError::invalid_input(format!("billing start day {} is outside 1-31", start_day)))
            }
            BillingConfig::Range { start, end } if start > end => Err(TrackError::invalid_input(format!(
                "billing start {} is after end {}",
                start, end
            ))),
            _ => Ok(()),
        }
    }
}

/// An inclusive `[start, end]` date window with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingCycle {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl BillingCycle {
    /// True when `date` falls on any day from `start` through `end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Like [`contains`](Self::contains), false for entries without a date.
    pub fn contains_opt(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|d| self.contains(d))
    }
}

/// Computes the cycle that `reference` falls in.
///
/// # Errors
///
/// [`TrackError::InvalidInput`] for a start day outside 1-31 or a range whose
/// start is after its end.
pub fn compute_cycle(config: &BillingConfig, reference: NaiveDate) -> TrackResult<BillingCycle> {
    config.validate()?;

    match *config {
        BillingConfig::DayOfMonth { start_day } => {
            let this_start = anchor(reference, start_day, 0)?;
            let (start, next_start) = if reference >= this_start {
                (this_start, anchor(reference, start_day, 1)?)
            } else {
                (anchor(reference, start_day, -1)?, this_start)
            };
            let end = next_start
                .checked_sub_days(Days::new(1))
                .ok_or_else(|| TrackError::invalid_input("billing cycle end out of range"))?;
            Ok(BillingCycle {
                start,
                end,
                label: format!("{} - {}", start.format("%b %-d"), end.format("%b %-d")),
            })
        }
        BillingConfig::Range { start, end } => Ok(BillingCycle {
            start,
            end,
            label: format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y")),
        }),
    }
}

/// `start_day` in the month `offset` months away from `reference`, clamped to
/// that month's length.
fn anchor(reference: NaiveDate, start_day: u32, offset: i32) -> TrackResult<NaiveDate> {
    let first = reference
        .with_day(1)
        .ok_or_else(|| TrackError::invalid_input("reference date out of range"))?;
    let month = match offset {
        o if o >= 0 => first.checked_add_months(Months::new(o as u32)),
        o => first.checked_sub_months(Months::new(o.unsigned_abs())),
    }
    .ok_or_else(|| TrackError::invalid_input("billing cycle month out of range"))?;

    let day = start_day.min(days_in_month(month));
    month
        .with_day(day)
        .ok_or_else(|| TrackError::invalid_input(format!("invalid billing day {}", day)))
}

fn days_in_month(first_of_month: NaiveDate) -> u32 {
    first_of_month
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_clamps_to_month_end() {
        assert_eq!(anchor(date(2024, 2, 10), 31, 0).unwrap(), date(2024, 2, 29));
        assert_eq!(anchor(date(2024, 4, 10), 31, 0).unwrap(), date(2024, 4, 30));
        assert_eq!(anchor(date(2024, 1, 10), 31, -1).unwrap(), date(2023, 12, 31));
    }
}
