use super::open_book;
use crate::{
    libs::{
        aggregate::DashboardSummary,
        billing::compute_cycle,
        clock::{Clock, SystemClock},
        messages::Message,
        view::View,
    },
    msg_print,
};
use anyhow::Result;

/// Billing card, lifetime stats and the recent activity chart.
pub fn cmd() -> Result<()> {
    let (config, book) = open_book()?;
    let cycle = compute_cycle(&config.billing, SystemClock.today())?;
    let summary = DashboardSummary::compute(book.entries(), cycle);

    msg_print!(Message::DashboardHeader, true);
    View::dashboard(&summary, config.decimal_places);
    Ok(())
}
