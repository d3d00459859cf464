#[cfg(test)]
mod tests {
    use trackscribe::libs::duration::{
        format_compound, format_decimal_hours, format_hhmmss, format_time_field, is_full_hhmmss, parse_duration,
        sanitize_time_input,
    };
    use trackscribe::libs::error::TrackError;
    use trackscribe::libs::messages::Message;

    #[test]
    fn test_parse_duration_forms() {
        assert_eq!(parse_duration("01:02:03").unwrap(), 3723);
        assert_eq!(parse_duration("45:30").unwrap(), 2730);
        assert_eq!(parse_duration("90").unwrap(), 5400);
        assert_eq!(parse_duration("").unwrap(), 0);
    }

    #[test]
    fn test_parse_duration_empty_components_count_as_zero() {
        assert_eq!(parse_duration(":30").unwrap(), 30);
        assert_eq!(parse_duration("1::").unwrap(), 3600);
    }

    #[test]
    fn test_parse_duration_rejects_bad_input() {
        assert!(matches!(parse_duration("1:2:3:4"), Err(TrackError::InvalidInput(_))));
        assert!(matches!(parse_duration("12a"), Err(TrackError::InvalidInput(_))));
        assert!(matches!(parse_duration("-5"), Err(TrackError::InvalidInput(_))));
    }

    #[test]
    fn test_hhmmss_round_trip() {
        for seconds in [0, 1, 59, 60, 3599, 3600, 3723, 86_399, 360_000, 1_234_567] {
            assert_eq!(parse_duration(&format_hhmmss(seconds)).unwrap(), seconds, "seconds = {}", seconds);
        }
    }

    #[test]
    fn test_format_compound() {
        assert_eq!(format_compound(0), "0s");
        assert_eq!(format_compound(45), "45s");
        assert_eq!(format_compound(90), "1m 30s");
        assert_eq!(format_compound(3600), "1h 0m 0s");
        assert_eq!(format_compound(3723), "1h 2m 3s");
    }

    #[test]
    fn test_format_decimal_hours() {
        assert_eq!(format_decimal_hours(3600, 3), "1.000");
        assert_eq!(format_decimal_hours(0, 3), "0.000");
        assert_eq!(format_decimal_hours(2700, 2), "0.75");
    }

    #[test]
    fn test_time_field_parses_back() {
        assert_eq!(format_time_field(2730), "45:30");
        assert_eq!(format_time_field(3723), "01:02:03");
        assert_eq!(parse_duration(&format_time_field(2730)).unwrap(), 2730);
    }

    #[test]
    fn test_sanitize_and_full_hhmmss() {
        assert_eq!(sanitize_time_input("1h:2m"), "1:2");
        assert!(is_full_hhmmss("00:10:00"));
        assert!(!is_full_hhmmss("10:00"));
        assert!(!is_full_hhmmss("0a:10:00"));
    }

    #[test]
    fn test_format_hint_treats_bare_number_as_minutes() {
        let hint = Message::DurationFormatHint.to_string();
        assert!(hint.contains("MM, MM:SS or HH:MM:SS"));
        assert!(!hint.contains("SS, MM:SS"));
        assert_eq!(parse_duration("45").unwrap(), 45 * 60);
    }
}
