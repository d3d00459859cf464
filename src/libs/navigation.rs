//! Which screen the interactive menu shows.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Timer,
    ListView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ShowDashboard,
    ShowTimer,
    ShowList,
    /// Saving or deleting an entry returns to the list.
    EntrySaved,
    /// The timer finished both stages.
    TimerCompleted,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Dashboard, Screen::Timer, Screen::ListView];

    pub fn navigate(self, action: NavAction) -> Screen {
        match action {
            NavAction::ShowDashboard => Screen::Dashboard,
            NavAction::ShowTimer => Screen::Timer,
            NavAction::ShowList | NavAction::EntrySaved => Screen::ListView,
            NavAction::TimerCompleted => match self {
                Screen::Timer => Screen::Dashboard,
                other => other,
            },
        }
    }

    pub fn action(self) -> NavAction {
        match self {
            Screen::Dashboard => NavAction::ShowDashboard,
            Screen::Timer => NavAction::ShowTimer,
            Screen::ListView => NavAction::ShowList,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Dashboard
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Dashboard => f.write_str("Overview"),
            Screen::Timer => f.write_str("TAT Timer"),
            Screen::ListView => f.write_str("All Files"),
        }
    }
}
