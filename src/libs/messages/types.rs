#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryCreated(i64),
    EntryUpdated(i64),
    EntryDeleted(i64),
    EntryNotFound(i64),
    EntrySaveFailed(String),
    ConfirmDeleteEntry(String),
    NoEntries,
    NoEntriesMatching,
    EntriesHeader,
    PromptFileName,
    PromptClient,
    PromptDuration,
    PromptEntryDate,
    PromptStatus,
    PromptLink,
    PromptNotes,
    DurationFormatHint,

    // === BILLING MESSAGES ===
    BillingCycleHeader,
    BillingSaved(String),
    BillingInvalid(String),
    ConfigModuleBilling,
    BillingModeDayOfMonth,
    BillingModeRange,
    PromptBillingMode,
    PromptBillingStartDay,
    BillingStartDayRange,
    PromptBillingRangeStart,
    PromptBillingRangeEnd,

    // === DASHBOARD MESSAGES ===
    DashboardHeader,
    ChartHeader,

    // === TIMER MESSAGES ===
    TimerHeader,
    PromptAudioDuration,
    PromptTimerFileName,
    TimerControls,
    TimerStarted(String),
    TimerPaused,
    TimerResumed,
    TimerExpired(String),
    TimerFirstReviewSaved(i64),
    TimerCompleted(i64),
    TimerAborted,
    TimerUnknownCommand(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDisplay,
    PromptDecimalPlaces,
    PromptAutoStart,
    PromptClients,
    InvalidDateFormat(String),

    // === IMPORT / EXPORT MESSAGES ===
    ExportCompleted(String),
    ImportCompleted(usize),
    ImportReadFailed(String),

    // === MENU MESSAGES ===
    MenuPrompt,
    MenuAddEntry,
    MenuExport,
    MenuBilling,
    MenuQuit,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
}
