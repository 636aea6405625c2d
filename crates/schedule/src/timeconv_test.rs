//! Unit tests for time-of-day conversion

#[cfg(test)]
mod tests {
    use crate::error::ScheduleError;
    use crate::timeconv::{TimeConverter, TimeOfDay};
    use chrono::NaiveDate;

    // Bogota has a fixed UTC-5 offset (no DST), so any reference date
    // gives the same result.
    const BOGOTA: &str = "America/Bogota";

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn time(input: &str) -> TimeOfDay {
        input.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(time("22:00").to_string(), "22:00");
        assert_eq!(time("7:5").to_string(), "07:05");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["25:00", "12:60", "12", "aa:bb", ""] {
            let result: Result<TimeOfDay, _> = input.parse();
            assert!(
                matches!(result, Err(ScheduleError::InvalidTime(_))),
                "'{input}' should not parse"
            );
        }
    }

    #[test]
    fn test_add_minutes_within_day() {
        let (t, carry) = time("11:00").add_minutes(7);
        assert_eq!(t, time("11:07"));
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_add_minutes_zero_is_identity() {
        let (t, carry) = time("06:30").add_minutes(0);
        assert_eq!(t, time("06:30"));
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_add_minutes_reports_midnight_crossing() {
        let (t, carry) = time("23:58").add_minutes(5);
        assert_eq!(t, time("00:03"));
        assert_eq!(carry, 1);
    }

    #[test]
    fn test_local_to_utc_late_evening_shifts_forward() {
        let converter = TimeConverter::new(BOGOTA, reference()).unwrap();

        let (utc, shift) = converter.local_to_utc(time("22:00")).unwrap();
        assert_eq!(utc, time("03:00"));
        assert_eq!(shift, 1);

        let (utc, shift) = converter.local_to_utc(time("23:00")).unwrap();
        assert_eq!(utc, time("04:00"));
        assert_eq!(shift, 1);
    }

    #[test]
    fn test_local_to_utc_morning_keeps_the_day() {
        let converter = TimeConverter::new(BOGOTA, reference()).unwrap();
        let (utc, shift) = converter.local_to_utc(time("03:00")).unwrap();
        assert_eq!(utc, time("08:00"));
        assert_eq!(shift, 0);
    }

    #[test]
    fn test_utc_to_local_is_the_display_inverse() {
        let converter = TimeConverter::new(BOGOTA, reference()).unwrap();
        assert_eq!(converter.utc_to_local(time("03:00")), time("22:00"));
        assert_eq!(converter.utc_to_local(time("11:00")), time("06:00"));
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        let err = TimeConverter::new("America/Nowhere", reference()).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownTimeZone(_)));
    }

    #[test]
    fn test_dst_gap_is_an_error() {
        // 2026-03-08 02:30 does not exist in New York: clocks jump from
        // 02:00 to 03:00.
        let gap_date = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        let converter = TimeConverter::new("America/New_York", gap_date).unwrap();
        let err = converter.local_to_utc(time("02:30")).unwrap_err();
        assert!(matches!(err, ScheduleError::NonexistentLocalTime { .. }));
    }

    #[test]
    fn test_dst_ambiguity_resolves_to_earliest() {
        // 2026-11-01 01:30 happens twice in New York; the earliest
        // occurrence is still EDT (UTC-4).
        let fold_date = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        let converter = TimeConverter::new("America/New_York", fold_date).unwrap();
        let (utc, shift) = converter.local_to_utc(time("01:30")).unwrap();
        assert_eq!(utc, time("05:30"));
        assert_eq!(shift, 0);
    }
}
