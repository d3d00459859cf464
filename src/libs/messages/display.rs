//! Display implementation for trackscribe messages.
//!
//! Every user-facing string lives here, keyed by a [`Message`] variant, so
//! commands never build prose inline.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryCreated(id) => format!("Entry #{} saved", id),
            Message::EntryUpdated(id) => format!("Entry #{} updated", id),
            Message::EntryDeleted(id) => format!("Entry #{} deleted", id),
            Message::EntryNotFound(id) => format!("Entry #{} not found", id),
            Message::EntrySaveFailed(error) => format!("Failed to save entry: {}", error),
            Message::ConfirmDeleteEntry(name) => format!("Delete \"{}\"? This cannot be undone", name),
            Message::NoEntries => "No entries yet".to_string(),
            Message::NoEntriesMatching => "No entries match the current filter".to_string(),
            Message::EntriesHeader => "All Files".to_string(),
            Message::PromptFileName => "File name (blank to auto-name)".to_string(),
            Message::PromptClient => "Client".to_string(),
            Message::PromptDuration => "Duration".to_string(),
            Message::PromptEntryDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptStatus => "Status".to_string(),
            Message::PromptLink => "Link (optional)".to_string(),
            Message::PromptNotes => "Notes (optional)".to_string(),
            Message::DurationFormatHint => "Use MM, MM:SS or HH:MM:SS".to_string(),

            // === BILLING MESSAGES ===
            Message::BillingCycleHeader => "Current Billing Cycle".to_string(),
            Message::BillingSaved(label) => format!("Billing cycle set: {}", label),
            Message::BillingInvalid(error) => format!("Invalid billing configuration: {}", error),
            Message::ConfigModuleBilling => "Billing cycle".to_string(),
            Message::BillingModeDayOfMonth => "Monthly, from a start day".to_string(),
            Message::BillingModeRange => "Fixed date range".to_string(),
            Message::PromptBillingMode => "How should billing cycles be computed?".to_string(),
            Message::PromptBillingStartDay => "Cycle start day (1-31)".to_string(),
            Message::BillingStartDayRange => "Start day must be between 1 and 31".to_string(),
            Message::PromptBillingRangeStart => "Range start (YYYY-MM-DD)".to_string(),
            Message::PromptBillingRangeEnd => "Range end (YYYY-MM-DD)".to_string(),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader => "Overview".to_string(),
            Message::ChartHeader => "Last 7 active days (minutes)".to_string(),

            // === TIMER MESSAGES ===
            Message::TimerHeader => "TAT Timer".to_string(),
            Message::PromptAudioDuration => "Audio duration (HH:MM:SS)".to_string(),
            Message::PromptTimerFileName => "File name (blank to auto-name)".to_string(),
            Message::TimerControls => "p + Enter: pause/resume   f + Enter: finish stage   q + Enter: quit".to_string(),
            Message::TimerStarted(stage) => format!("{} timer started", stage),
            Message::TimerPaused => "Timer paused".to_string(),
            Message::TimerResumed => "Timer resumed".to_string(),
            Message::TimerExpired(stage) => format!("Time is up for {}", stage),
            Message::TimerFirstReviewSaved(id) => format!("First review saved as entry #{}, moving to speaker verification", id),
            Message::TimerCompleted(id) => format!("Entry #{} completed", id),
            Message::TimerAborted => "Timer closed without finishing".to_string(),
            Message::TimerUnknownCommand(cmd) => format!("Unknown command: {}", cmd),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDisplay => "Display".to_string(),
            Message::PromptDecimalPlaces => "Decimal places for hour totals".to_string(),
            Message::PromptAutoStart => "Start the timer automatically?".to_string(),
            Message::PromptClients => "Clients (comma separated)".to_string(),
            Message::InvalidDateFormat(value) => format!("Invalid date \"{}\", expected YYYY-MM-DD", value),

            // === IMPORT / EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::ImportCompleted(count) => format!("Imported {} entries", count),
            Message::ImportReadFailed(error) => format!("Failed to read import file: {}", error),

            // === MENU MESSAGES ===
            Message::MenuPrompt => "Where to?".to_string(),
            Message::MenuAddEntry => "Add entry".to_string(),
            Message::MenuExport => "Export billing cycle".to_string(),
            Message::MenuBilling => "Billing settings".to_string(),
            Message::MenuQuit => "Quit".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
        };

        write!(f, "{}", text)
    }
}
