#[cfg(test)]
mod tests {
    use trackscribe::libs::navigation::{NavAction, Screen};

    #[test]
    fn test_starts_on_dashboard() {
        assert_eq!(Screen::default(), Screen::Dashboard);
    }

    #[test]
    fn test_show_actions_reach_every_screen() {
        for from in Screen::ALL {
            for to in Screen::ALL {
                assert_eq!(from.navigate(to.action()), to);
            }
        }
    }

    #[test]
    fn test_saving_an_entry_opens_the_list() {
        assert_eq!(Screen::Dashboard.navigate(NavAction::EntrySaved), Screen::ListView);
        assert_eq!(Screen::Timer.navigate(NavAction::EntrySaved), Screen::ListView);
    }

    #[test]
    fn test_completed_timer_returns_to_dashboard() {
        assert_eq!(Screen::Timer.navigate(NavAction::TimerCompleted), Screen::Dashboard);
        assert_eq!(Screen::ListView.navigate(NavAction::TimerCompleted), Screen::ListView);
    }

    #[test]
    fn test_screen_titles() {
        let titles: Vec<String> = Screen::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(titles, vec!["Overview", "TAT Timer", "All Files"]);
    }
}
