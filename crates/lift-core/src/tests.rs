//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, PassengerId};

    #[test]
    fn fleet_index_is_zero_based() {
        assert_eq!(ElevatorId(1).fleet_index(), 0);
        assert_eq!(ElevatorId(4).fleet_index(), 3);
    }

    #[test]
    fn car_zero_never_maps_into_a_fleet() {
        assert_eq!(ElevatorId(0).fleet_index(), usize::MAX);
    }

    #[test]
    fn passenger_index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(3).to_string(), "car#3");
        assert_eq!(PassengerId(7).to_string(), "passenger#7");
    }
}

#[cfg(test)]
mod time {
    use crate::{Instant, Secs, SimClock};

    #[test]
    fn parse_epoch() {
        assert_eq!(Instant::parse("1970-01-01 00:00:00").unwrap(), Instant::EPOCH);
    }

    #[test]
    fn parse_known_instant() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(
            Instant::parse("2023-11-14 22:13:20").unwrap(),
            Instant(1_700_000_000)
        );
    }

    #[test]
    fn parse_accepts_t_separator_and_padding() {
        assert_eq!(
            Instant::parse("  2023-11-14T22:13:20 ").unwrap(),
            Instant(1_700_000_000)
        );
    }

    #[test]
    fn parse_leap_day() {
        let leap = Instant::parse("2024-02-29 00:00:00").unwrap();
        let next = Instant::parse("2024-03-01 00:00:00").unwrap();
        assert_eq!(next - leap, Secs(86_400));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in [
            "",
            "nome",
            "2023-11-14",
            "2023-13-01 00:00:00",
            "2023-02-29 00:00:00",
            "2023-01-01 24:00:00",
            "2023-01-01 10:60:00",
            "2023-01-01 10:00",
            "2023-01-01 10:00:00:00",
            "2023-1a-01 10:00:00",
        ] {
            assert!(Instant::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn parse_rejects_years_out_of_range() {
        assert!(Instant::parse("9999999999999999-01-01 00:00:00").is_err());
        assert!(Instant::parse("10000-01-01 00:00:00").is_err());
    }

    #[test]
    fn display_matches_arrival_format() {
        let t = Instant::parse("2019-07-04 08:05:09").unwrap();
        assert_eq!(t.to_string(), "2019-07-04 08:05:09");
    }

    #[test]
    fn display_before_epoch() {
        let t = Instant::parse("1969-12-31 23:59:59").unwrap();
        assert_eq!(t, Instant(-1));
        assert_eq!(t.to_string(), "1969-12-31 23:59:59");
    }

    #[test]
    fn display_outside_calendar_range_is_raw_seconds() {
        assert_eq!(Instant(i64::MAX).to_string(), format!("@{}", i64::MAX));
    }

    #[test]
    fn instant_arithmetic() {
        let t = Instant(100);
        assert_eq!(t + Secs(8), Instant(108));
        assert_eq!(t - Secs(20), Instant(80));
        assert_eq!(Instant(108) - t, Secs(8));
    }

    #[test]
    fn secs_arithmetic_is_signed() {
        assert_eq!(Secs(2) - Secs(5), Secs(-3));
        assert_eq!(-Secs(4), Secs(-4));
        assert_eq!(Secs(2) * 3, Secs(6));
        let total: Secs = [Secs(1), Secs(2), Secs(-4)].into_iter().sum();
        assert_eq!(total, Secs(-1));
    }

    #[test]
    fn clock_advance() {
        let mut clock = SimClock::new(Instant(1_000), Secs(1));
        clock.advance();
        clock.advance();
        assert_eq!(clock.current, Instant(1_002));
        assert_eq!(clock.elapsed(), Secs(2));
        assert_eq!(clock.initial, Instant(1_000));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, Secs, SimConfig};

    #[test]
    fn defaults() {
        let c = SimConfig::default();
        assert_eq!(c.elevator_count, 4);
        assert_eq!(c.dwell(), Secs(20));
        assert_eq!(c.inter_floor(), Secs(2));
        assert_eq!(c.capacity, 8);
        assert_eq!(c.min_floor, 1);
        assert_eq!(c.max_floor, 25);
        assert_eq!(c.start_floor(), 1);
        assert_eq!(c.tick(), Secs(1));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn start_floor_override() {
        let c = SimConfig { initial_floor: Some(7), ..SimConfig::default() };
        assert_eq!(c.start_floor(), 7);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unusable_configs() {
        let bad = [
            SimConfig { elevator_count: 0, ..SimConfig::default() },
            SimConfig { capacity: 0, ..SimConfig::default() },
            SimConfig { tick_secs: 0, ..SimConfig::default() },
            SimConfig { min_floor: 10, max_floor: 5, ..SimConfig::default() },
            SimConfig { initial_floor: Some(26), ..SimConfig::default() },
            SimConfig { initial_floor: Some(0), ..SimConfig::default() },
        ];
        for c in bad {
            assert!(c.validate().is_err(), "{c:?} should be rejected");
        }
    }

    #[test]
    fn periods_must_be_whole_ticks() {
        let bad = [
            SimConfig { tick_secs: 4, ..SimConfig::default() },
            SimConfig { tick_secs: 2, dwell_secs: 3, ..SimConfig::default() },
            SimConfig { inter_floor_secs: 0, ..SimConfig::default() },
            SimConfig { dwell_secs: 0, ..SimConfig::default() },
        ];
        for c in bad {
            assert!(matches!(c.validate(), Err(CoreError::Config(_))), "{c:?} should be rejected");
        }
        let coarse = SimConfig { tick_secs: 2, ..SimConfig::default() };
        assert!(coarse.validate().is_ok());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn elevator_count_must_fit_car_ids() {
        let c = SimConfig { elevator_count: u32::MAX as usize + 1, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn serves_is_inclusive() {
        let c = SimConfig::default();
        assert!(c.serves(1));
        assert!(c.serves(25));
        assert!(!c.serves(0));
        assert!(!c.serves(26));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<usize> = (0..20).map(|_| a.index(4).unwrap()).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.index(4).unwrap()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn index_stays_in_range() {
        let mut r = SimRng::new(1);
        for _ in 0..1_000 {
            assert!(r.index(3).unwrap() < 3);
        }
        assert_eq!(r.index(0), None);
    }
}

#[cfg(test)]
mod passenger {
    use crate::{CoreError, Instant, Passenger, PassengerId, Secs};

    fn ana() -> Passenger {
        Passenger::new(PassengerId(0), "Ana", 5, Instant(100))
    }

    #[test]
    fn durations_undefined_until_set() {
        let p = ana();
        assert_eq!(p.queue_wait(), None);
        assert_eq!(p.transit(), None);
        assert_eq!(p.total(), None);
        assert!(!p.has_boarded());
        assert!(!p.has_disembarked());
    }

    #[test]
    fn durations_after_full_trip() {
        let mut p = ana();
        p.record_boarding(Instant(130)).unwrap();
        assert_eq!(p.queue_wait(), Some(Secs(30)));
        assert_eq!(p.transit(), None);
        assert_eq!(p.total(), None);

        p.record_disembark(Instant(138)).unwrap();
        assert_eq!(p.transit(), Some(Secs(8)));
        assert_eq!(p.total(), Some(Secs(38)));
    }

    #[test]
    fn boarding_set_once() {
        let mut p = ana();
        p.record_boarding(Instant(100)).unwrap();
        assert!(matches!(
            p.record_boarding(Instant(101)),
            Err(CoreError::AlreadyRecorded { .. })
        ));
        assert_eq!(p.boarding(), Some(Instant(100)));
    }

    #[test]
    fn boarding_before_arrival_rejected() {
        let mut p = ana();
        assert!(matches!(
            p.record_boarding(Instant(99)),
            Err(CoreError::OutOfOrder { .. })
        ));
        assert!(!p.has_boarded());
    }

    #[test]
    fn disembark_requires_boarding() {
        let mut p = ana();
        assert!(matches!(
            p.record_disembark(Instant(120)),
            Err(CoreError::NotBoarded(PassengerId(0)))
        ));
    }

    #[test]
    fn not_boarded_message_names_passenger() {
        let err = ana().record_disembark(Instant(120)).unwrap_err();
        assert_eq!(err.to_string(), "passenger#0: cannot disembark without having boarded");
    }

    #[test]
    fn disembark_before_boarding_rejected() {
        let mut p = ana();
        p.record_boarding(Instant(110)).unwrap();
        assert!(matches!(
            p.record_disembark(Instant(109)),
            Err(CoreError::OutOfOrder { .. })
        ));
        p.record_disembark(Instant(110)).unwrap();
        assert!(matches!(
            p.record_disembark(Instant(111)),
            Err(CoreError::AlreadyRecorded { .. })
        ));
    }
}
