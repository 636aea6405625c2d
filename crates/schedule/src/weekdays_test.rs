//! Unit tests for weekday normalization

#[cfg(test)]
mod tests {
    use crate::error::ScheduleError;
    use crate::weekdays::WeekdaySpec;

    #[test]
    fn test_parse_named_range() {
        let spec = WeekdaySpec::parse("lunes-viernes").unwrap();
        assert_eq!(spec.days(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_is_case_and_accent_insensitive() {
        let spec = WeekdaySpec::parse("Miércoles,SÁBADO").unwrap();
        assert_eq!(spec.days(), &[3, 6]);
        assert_eq!(spec, WeekdaySpec::parse("miercoles,sabado").unwrap());
    }

    #[test]
    fn test_parse_named_circular_range() {
        // End before start wraps through the week boundary
        let spec = WeekdaySpec::parse("viernes-domingo").unwrap();
        assert_eq!(spec.days(), &[5, 6, 0]);
    }

    #[test]
    fn test_parse_numeric_circular_range() {
        let spec = WeekdaySpec::parse("5-0").unwrap();
        assert_eq!(spec.days(), &[5, 6, 0]);
    }

    #[test]
    fn test_parse_numeric_is_idempotent_for_canonical_input() {
        let spec = WeekdaySpec::parse("5,6,0").unwrap();
        assert_eq!(spec.to_kube(), "5,6,0");
        assert_eq!(spec, WeekdaySpec::parse(&spec.to_kube()).unwrap());
    }

    #[test]
    fn test_parse_numeric_range_with_whitespace() {
        let spec = WeekdaySpec::parse(" 1 - 5 ").unwrap();
        assert_eq!(spec.days(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_empty_means_every_day() {
        let spec = WeekdaySpec::parse("").unwrap();
        assert_eq!(spec.len(), 7);
        assert_eq!(spec, WeekdaySpec::every_day());
    }

    #[test]
    fn test_parse_mixed_names_and_ranges() {
        let spec = WeekdaySpec::parse("lunes-viernes,domingo").unwrap();
        assert_eq!(spec.days(), &[1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn test_parse_deduplicates_preserving_first_occurrence() {
        let spec = WeekdaySpec::parse("viernes,lunes-viernes").unwrap();
        assert_eq!(spec.days(), &[5, 1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_unknown_day_names_the_token() {
        let err = WeekdaySpec::parse("lunes,funday").unwrap_err();
        match err {
            ScheduleError::UnknownDay(token) => assert_eq!(token, "funday"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_index() {
        let err = WeekdaySpec::parse("7").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDayIndex(_)));
    }

    #[test]
    fn test_round_trip_preserves_membership() {
        for input in ["lunes-viernes", "viernes,sábado,domingo", "0-6", "3"] {
            let spec = WeekdaySpec::parse(input).unwrap();
            let reparsed = WeekdaySpec::parse(&spec.to_kube()).unwrap();
            assert_eq!(spec, reparsed, "round trip changed membership for '{input}'");
        }
    }

    #[test]
    fn test_to_human_uses_accented_names() {
        let spec = WeekdaySpec::parse("viernes,sabado,domingo").unwrap();
        assert_eq!(spec.to_human(), "viernes,sábado,domingo");
    }

    #[test]
    fn test_to_human_empty_set_is_sentinel() {
        assert_eq!(WeekdaySpec::default().to_human(), "todos");
    }

    #[test]
    fn test_shift_zero_is_identity() {
        for input in ["1-5", "5-0", "", "6"] {
            let spec = WeekdaySpec::parse(input).unwrap();
            assert_eq!(spec.shift(0), spec);
        }
    }

    #[test]
    fn test_shift_wraps_modulo_seven() {
        let spec = WeekdaySpec::parse("5,6,0").unwrap();
        assert_eq!(spec.shift(1).days(), &[6, 0, 1]);
        assert_eq!(spec.shift(-1).days(), &[4, 5, 6]);
    }

    #[test]
    fn test_shift_composes() {
        let spec = WeekdaySpec::parse("lunes-viernes").unwrap();
        assert_eq!(spec.shift(3).shift(5), spec.shift((3 + 5) % 7));
        assert_eq!(spec.shift(1).shift(-1), spec);
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(
            WeekdaySpec::parse("1,2,3").unwrap(),
            WeekdaySpec::parse("3,1,2").unwrap()
        );
    }
}
