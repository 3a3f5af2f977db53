//! Unit tests for hos-core primitives.

#[cfg(test)]
mod status {
    use crate::DutyStatus;

    #[test]
    fn index_matches_grid_order() {
        for (i, s) in DutyStatus::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn on_duty_and_rest_partition() {
        for s in DutyStatus::ALL {
            assert_ne!(s.is_on_duty(), s.is_rest(), "{s}");
        }
        assert!(DutyStatus::Driving.is_on_duty());
        assert!(DutyStatus::SleeperBerth.is_rest());
    }

    #[test]
    fn display() {
        assert_eq!(DutyStatus::SleeperBerth.to_string(), "sleeper_berth");
    }
}

#[cfg(test)]
mod event {
    use chrono::NaiveDate;

    use crate::{DutyEvent, DutyStatus};

    #[test]
    fn end_is_start_plus_duration() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(23, 45, 0).unwrap();
        let e = DutyEvent::new(DutyStatus::OnDuty, start, 30 * 60, "Yard", "Pre-trip");
        assert_eq!(e.end, start + e.duration());
        assert_eq!(e.end.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(e.duration_minutes(), 30.0);
        assert_eq!(e.duration_hours(), 0.5);
    }

    #[test]
    fn negative_duration_clamped() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
        let e = DutyEvent::new(DutyStatus::Driving, start, -5, "x", "y");
        assert_eq!(e.duration_secs, 0);
        assert_eq!(e.end, e.start);
    }
}

#[cfg(test)]
mod time {
    use chrono::NaiveDate;

    use crate::time::{hour_of_day, hours_to_secs, minutes_to_secs, next_midnight};

    #[test]
    fn minute_rounding() {
        assert_eq!(minutes_to_secs(30.0), 1_800);
        assert_eq!(minutes_to_secs(0.0083), 0); // 0.498 s
        assert_eq!(minutes_to_secs(-3.0), 0);
        assert_eq!(minutes_to_secs(f64::NAN), 0);
        assert_eq!(hours_to_secs(1.5), 5_400);
    }

    #[test]
    fn day_helpers() {
        let t = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(hour_of_day(t), 18.5);
        let m = next_midnight(t);
        assert_eq!(m, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, RouteLeg};

    #[test]
    fn one_degree_is_69_miles() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        assert!((a.straight_line_miles(b) - 69.0).abs() < 1e-9);
    }

    #[test]
    fn straight_line_leg_at_fallback_speed() {
        let leg = RouteLeg::straight_line(
            "A, AL", GeoPoint::new(0.0, 0.0),
            "B, GA", GeoPoint::new(3.0, 4.0),
            50.0,
        );
        assert!((leg.distance_miles - 345.0).abs() < 1e-9);
        assert!((leg.duration_hours - 6.9).abs() < 1e-9);
        assert_eq!(leg.end_location, "B, GA");
    }
}

#[cfg(test)]
mod leg {
    use crate::RouteLeg;

    #[test]
    fn avg_speed_fallback_on_zero_duration() {
        let leg = RouteLeg::new(100.0, 0.0, "A", "B");
        assert_eq!(leg.avg_speed_mph(50.0), 50.0);
        let leg = RouteLeg::new(120.0, 2.0, "A", "B");
        assert_eq!(leg.avg_speed_mph(50.0), 60.0);
    }

    #[test]
    fn validate_rejects_non_finite() {
        assert!(RouteLeg::new(f64::NAN, 1.0, "A", "B").validate().is_err());
        assert!(RouteLeg::new(10.0, -1.0, "A", "B").validate().is_err());
        assert!(RouteLeg::new(0.0, 0.0, "A", "B").validate().is_ok());
    }
}

#[cfg(test)]
mod config {
    use crate::{HosRules, TripConfig};

    #[test]
    fn default_rules_validate() {
        let rules = HosRules::default();
        assert!(rules.validate().is_ok());
        assert_eq!(rules.cycle_label(), "70 / 8");
        assert_eq!(rules.cycle_restart_minutes, 34 * 60);
    }

    #[test]
    fn bad_values_rejected() {
        let rules = HosRules { log_speed_mph: 0.0, ..HosRules::default() };
        assert!(rules.validate().is_err());

        let rules = HosRules { max_leg_iterations: 0, ..HosRules::default() };
        assert!(rules.validate().is_err());

        let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(6, 0, 0).unwrap();
        let mut cfg = TripConfig::new(start);
        cfg.initial_cycle_used_hours = -1.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn event_minutes_capped_at_one_week() {
        use crate::time::MAX_EVENT_MINUTES;

        let rules = HosRules { break_minutes: i64::MAX, ..HosRules::default() };
        assert!(rules.validate().is_err());

        let rules = HosRules { arrival_minutes: MAX_EVENT_MINUTES + 1, ..HosRules::default() };
        assert!(rules.validate().is_err());

        let rules = HosRules { cycle_restart_minutes: MAX_EVENT_MINUTES, ..HosRules::default() };
        assert!(rules.validate().is_ok());
    }
}

#[cfg(test)]
mod label {
    use crate::{FixedRoute, LabelRng, RouteNumbers, interpolated_label, region_code};

    #[test]
    fn region_code_takes_last_two_letter_upper_token() {
        assert_eq!(region_code("Chicago, IL"), "IL");
        assert_eq!(region_code("New York, NY 10001"), "NY");
        assert_eq!(region_code("OK City, TX"), "TX");
        assert_eq!(region_code("Springfield"), "");
        assert_eq!(region_code("Lower case, il"), "");
        assert_eq!(region_code(""), "");
    }

    #[test]
    fn label_switches_region_at_midpoint() {
        let mut n = FixedRoute(80);
        assert_eq!(interpolated_label(0.2, "NY", "IL", "US", &mut n), "Highway I-80, NY");
        assert_eq!(interpolated_label(0.5, "NY", "IL", "US", &mut n), "Highway I-80, IL");
        assert_eq!(interpolated_label(0.9, "NY", "", "US", &mut n), "Highway I-80, US");
    }

    #[test]
    fn rng_is_seeded_and_in_range() {
        let mut a = LabelRng::new(7);
        let mut b = LabelRng::new(7);
        for _ in 0..200 {
            let x = a.next_route_number();
            assert_eq!(x, b.next_route_number());
            assert!((1..=99).contains(&x));
        }
    }

    #[test]
    fn per_trip_seeds_differ() {
        let mut a = LabelRng::for_trip(1, 0);
        let mut b = LabelRng::for_trip(1, 1);
        let xs: Vec<u8> = (0..16).map(|_| a.next_route_number()).collect();
        let ys: Vec<u8> = (0..16).map(|_| b.next_route_number()).collect();
        assert_ne!(xs, ys);
    }
}
