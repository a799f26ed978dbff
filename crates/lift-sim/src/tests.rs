//! Integration tests for lift-sim.

use lift_car::Elevator;
use lift_core::{ElevatorId, Instant, Passenger, PassengerId, Secs, SimConfig};
use lift_dispatch::{DispatchPolicy, DispatchResult, LeastEstimatedWait, PolicyKind, RoundRobin};

use crate::{
    DisembarkEvent, NoopObserver, SimBuilder, SimError, SimObserver, SimStatistics, SimStatus,
    compare_policies,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const T0: Instant = Instant(1_700_000_000);

fn config(elevators: usize) -> SimConfig {
    SimConfig { elevator_count: elevators, seed: Some(7), ..SimConfig::default() }
}

/// Passengers from `(offset_secs, floor)` pairs, ids in list order.
fn passengers(rows: &[(i64, i32)]) -> Vec<Passenger> {
    rows.iter()
        .enumerate()
        .map(|(i, &(offset, floor))| {
            Passenger::new(PassengerId(i as u32), format!("p{i}"), floor, T0 + Secs(offset))
        })
        .collect()
}

/// Records every callback for later assertions.
#[derive(Default)]
struct Recorder {
    ticks:      usize,
    boards:     Vec<(Instant, ElevatorId, PassengerId)>,
    disembarks: Vec<(Instant, ElevatorId, PassengerId)>,
    fleet_lens: Vec<usize>,
    ends:       Vec<SimStatistics>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _now: Instant) {
        self.ticks += 1;
    }

    fn on_board(&mut self, now: Instant, car: ElevatorId, passenger: &Passenger) {
        self.boards.push((now, car, passenger.id));
    }

    fn on_disembark(&mut self, event: &DisembarkEvent<'_>) {
        self.disembarks.push((event.instant, event.car, event.passenger.id));
        self.fleet_lens.push(event.fleet.len());
    }

    fn on_sim_end(&mut self, stats: &SimStatistics) {
        self.ends.push(stats.clone());
    }
}

/// Always picks a car id that does not exist.
struct Misdirect;

impl DispatchPolicy for Misdirect {
    fn select(&mut self, _: &[Elevator], _: &Passenger, _: Instant) -> DispatchResult<ElevatorId> {
        Ok(ElevatorId(99))
    }

    fn name(&self) -> &str {
        "misdirect"
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_fleet_idle_at_base() {
        let sim = SimBuilder::new(config(4), passengers(&[(5, 3), (0, 9)]), RoundRobin::new())
            .build()
            .unwrap();
        let ids: Vec<u32> = sim.fleet().iter().map(|c| c.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(sim.fleet().iter().all(|c| c.floor() == 1));
        assert_eq!(sim.now(), T0);
        assert_eq!(sim.clock().initial, T0);
        assert_eq!(sim.status(), SimStatus::Running);
    }

    #[test]
    fn empty_passengers_rejected() {
        let err = SimBuilder::new(config(1), vec![], RoundRobin::new()).build().err().unwrap();
        assert!(matches!(err, SimError::EmptyPassengers));
    }

    #[test]
    fn bad_config_rejected() {
        let cfg = SimConfig { elevator_count: 0, ..SimConfig::default() };
        let err = SimBuilder::new(cfg, passengers(&[(0, 3)]), RoundRobin::new()).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn unreachable_destination_rejected() {
        let err = SimBuilder::new(config(1), passengers(&[(0, 3), (0, 26)]), RoundRobin::new())
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::DestinationOutOfRange { passenger: PassengerId(1), floor: 26, .. }
        ));
    }

    #[test]
    fn ids_must_match_positions() {
        let mut ps = passengers(&[(0, 3), (0, 4)]);
        ps.swap(0, 1);
        let err = SimBuilder::new(config(1), ps, RoundRobin::new()).build().err().unwrap();
        assert!(matches!(err, SimError::PassengerIndex { index: 0, id: PassengerId(1) }));
    }

    #[test]
    fn reused_passengers_rejected() {
        let mut ps = passengers(&[(0, 3)]);
        ps[0].record_boarding(T0).unwrap();
        let err = SimBuilder::new(config(1), ps, RoundRobin::new()).build().err().unwrap();
        assert!(matches!(err, SimError::StalePassenger(PassengerId(0))));
    }

    #[test]
    fn arrivals_must_sit_on_tick_grid() {
        let cfg = SimConfig { tick_secs: 2, ..config(1) };
        let err = SimBuilder::new(cfg, passengers(&[(0, 3), (3, 4)]), RoundRobin::new())
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::ArrivalOffGrid { passenger: PassengerId(1), .. }));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn elevator_count_beyond_id_range_rejected() {
        let cfg = SimConfig { elevator_count: u32::MAX as usize + 1, ..config(1) };
        let err = SimBuilder::new(cfg, passengers(&[(0, 5)]), RoundRobin::new())
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn tick_longer_than_a_floor_rejected() {
        let cfg = SimConfig { tick_secs: 4, ..config(1) };
        let err = SimBuilder::new(cfg, passengers(&[(0, 5)]), RoundRobin::new())
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(ref msg) if msg.contains("inter_floor_secs")));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn single_passenger_to_floor_five() {
        let mut sim = SimBuilder::new(config(1), passengers(&[(0, 5)]), RoundRobin::new())
            .build()
            .unwrap();
        let stats = sim.run(&mut NoopObserver).unwrap();

        let p = &sim.passengers()[0];
        assert_eq!(p.boarding(), Some(T0));
        assert_eq!(p.disembark(), Some(T0 + Secs(8)));
        assert_eq!(sim.finished(), Some(T0 + Secs(8)));
        assert_eq!(stats.transit.max, Some(Secs(8)));
        assert_eq!(stats.queue_wait.max, Some(Secs(0)));
        assert_eq!(stats.makespan(), Some(Secs(8)));
    }

    #[test]
    fn lone_base_rider_leaves_next_tick() {
        let mut sim = SimBuilder::new(config(1), passengers(&[(0, 1)]), RoundRobin::new())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let p = &sim.passengers()[0];
        assert_eq!(p.boarding(), Some(T0));
        assert_eq!(p.disembark(), Some(T0 + Secs(1)));
        assert!(p.disembark() > p.boarding());
    }

    #[test]
    fn two_second_tick_keeps_one_floor_per_period() {
        let cfg = SimConfig { tick_secs: 2, ..config(1) };
        let mut sim = SimBuilder::new(cfg, passengers(&[(0, 5)]), RoundRobin::new())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        // Departure is seen on the first tick after boarding, then 4 floors at 2 s.
        let p = &sim.passengers()[0];
        assert_eq!(p.boarding(), Some(T0));
        assert_eq!(p.disembark(), Some(T0 + Secs(10)));
    }

    #[test]
    fn overflow_waits_for_next_trip() {
        let cfg = SimConfig { capacity: 2, ..config(1) };
        let mut sim = SimBuilder::new(cfg, passengers(&[(0, 3), (0, 3), (0, 3)]), RoundRobin::new())
            .build()
            .unwrap();

        let mut recorder = Recorder::default();
        loop {
            let status = sim.run_ticks(1, &mut recorder).unwrap();
            for car in sim.fleet() {
                assert!(car.riders().len() <= 2);
            }
            if status == SimStatus::Finished {
                break;
            }
        }

        let ps = sim.passengers();
        assert_eq!(ps[0].disembark(), Some(T0 + Secs(4)));
        assert_eq!(ps[1].disembark(), Some(T0 + Secs(4)));
        // Car returns at +28 and takes the leftover passenger.
        assert_eq!(ps[2].boarding(), Some(T0 + Secs(28)));
        assert_eq!(ps[2].disembark(), Some(T0 + Secs(32)));
        assert_eq!(recorder.boards.len(), 3);
    }

    #[test]
    fn cars_starting_above_base_come_down_first() {
        let cfg = SimConfig { initial_floor: Some(3), ..config(1) };
        let mut sim = SimBuilder::new(cfg, passengers(&[(0, 5)]), RoundRobin::new())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let p = &sim.passengers()[0];
        assert_eq!(p.queue_wait(), Some(Secs(4)));
        assert_eq!(p.disembark(), Some(T0 + Secs(12)));
    }

    #[test]
    fn round_robin_assignment_sequence() {
        let ps = passengers(&[(0, 3), (0, 4), (0, 5), (0, 6), (0, 7)]);
        let mut sim = SimBuilder::new(config(4), ps, RoundRobin::new()).build().unwrap();
        let mut recorder = Recorder::default();
        sim.run(&mut recorder).unwrap();

        let mut by_passenger: Vec<(PassengerId, ElevatorId)> =
            recorder.disembarks.iter().map(|&(_, car, p)| (p, car)).collect();
        by_passenger.sort();
        let cars: Vec<u32> = by_passenger.iter().map(|(_, c)| c.0).collect();
        assert_eq!(cars, vec![2, 3, 4, 1, 2]);
    }

    #[test]
    fn disembark_events_carry_fleet_snapshot() {
        let ps = passengers(&[(0, 3), (2, 8), (2, 8), (9, 1)]);
        let mut sim = SimBuilder::new(config(3), ps, LeastEstimatedWait::new()).build().unwrap();
        let mut recorder = Recorder::default();
        let stats = sim.run(&mut recorder).unwrap();

        assert_eq!(recorder.disembarks.len(), 4);
        assert!(recorder.fleet_lens.iter().all(|&n| n == 3));
        assert_eq!(recorder.ends, vec![stats]);
        assert!(recorder.ticks > 0);
    }

    #[test]
    fn every_policy_delivers_everyone_in_order() {
        let rows: Vec<(i64, i32)> = (0..40).map(|i| ((i / 3) as i64 * 2, 1 + (i * 7 % 25) as i32)).collect();
        for kind in PolicyKind::ALL {
            let mut sim = SimBuilder::new(config(4), passengers(&rows), kind.build(Some(3)))
                .build()
                .unwrap();
            let stats = sim.run(&mut NoopObserver).unwrap();

            assert_eq!(sim.status(), SimStatus::Finished, "{kind}");
            assert_eq!(stats.never_boarded, 0, "{kind}");
            assert_eq!(stats.never_disembarked, 0, "{kind}");
            assert_eq!(stats.total.count, 40, "{kind}");
            for p in sim.passengers() {
                let boarding = p.boarding().unwrap();
                let disembark = p.disembark().unwrap();
                assert!(p.arrival <= boarding && boarding <= disembark, "{kind}: {p:?}");
            }
        }
    }
}

// ── Sequencing and errors ─────────────────────────────────────────────────────

#[cfg(test)]
mod sequencing {
    use super::*;

    #[test]
    fn stepping_past_finish_is_an_error() {
        let mut sim = SimBuilder::new(config(1), passengers(&[(0, 2)]), RoundRobin::new())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        let finished = sim.finished().unwrap();

        // Re-processing the finishing instant is harmless.
        assert_eq!(sim.process_tick(&mut NoopObserver).unwrap(), SimStatus::Finished);

        sim.advance_tick();
        assert!(matches!(
            sim.process_tick(&mut NoopObserver),
            Err(SimError::SteppedPastFinish { finished: f, .. }) if f == finished
        ));
    }

    #[test]
    fn rerun_only_reports() {
        let mut sim = SimBuilder::new(config(1), passengers(&[(0, 2)]), RoundRobin::new())
            .build()
            .unwrap();
        let first = sim.run(&mut NoopObserver).unwrap();
        let second = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn policy_must_pick_a_fleet_member() {
        let mut sim = SimBuilder::new(config(2), passengers(&[(0, 2)]), Misdirect).build().unwrap();
        assert!(matches!(
            sim.run(&mut NoopObserver),
            Err(SimError::UnknownElevator(ElevatorId(99)))
        ));
    }

    #[test]
    fn boxed_policies_drive_the_engine() {
        let policy: Box<dyn DispatchPolicy> = PolicyKind::LeastEstimatedWait.build(None);
        let mut sim = SimBuilder::new(config(2), passengers(&[(0, 6)]), policy).build().unwrap();
        let stats = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(stats.policy, "least-wait");
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod statistics {
    use super::*;

    use crate::DurationSummary;

    #[test]
    fn summary_of_nothing() {
        let s = DurationSummary::from_durations(std::iter::empty());
        assert_eq!(s.count, 0);
        assert_eq!(s.max, None);
        assert_eq!(s.mean, None);
        assert_eq!(s.to_string(), "n=0");
    }

    #[test]
    fn summary_mean_and_max() {
        let s = DurationSummary::from_durations([Secs(2), Secs(4), Secs(9)]);
        assert_eq!(s.count, 3);
        assert_eq!(s.max, Some(Secs(9)));
        assert_eq!(s.mean, Some(5.0));
        assert_eq!(s.to_string(), "n=3 max=9s mean=5.00s");
    }

    #[test]
    fn mid_run_counts_pending_passengers() {
        let mut sim = SimBuilder::new(config(1), passengers(&[(0, 5), (3, 2)]), RoundRobin::new())
            .build()
            .unwrap();
        sim.run_ticks(2, &mut NoopObserver).unwrap();

        let stats = sim.statistics();
        assert_eq!(stats.passengers, 2);
        assert_eq!(stats.never_boarded, 1);
        assert_eq!(stats.never_disembarked, 2);
        assert_eq!(stats.queue_wait.count, 1);
        assert_eq!(stats.transit.count, 0);
        assert_eq!(stats.transit.mean, None);
        assert_eq!(stats.finished, None);
    }

    #[test]
    fn statistics_are_idempotent() {
        let mut sim = SimBuilder::new(config(2), passengers(&[(0, 5), (1, 9), (1, 4)]), RoundRobin::new())
            .build()
            .unwrap();
        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(sim.statistics(), sim.statistics());
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.statistics(), sim.statistics());
    }
}

// ── Policy comparison ─────────────────────────────────────────────────────────

#[cfg(test)]
mod comparison {
    use super::*;

    #[test]
    fn one_run_per_policy_on_independent_copies() {
        let ps = passengers(&[(0, 5), (0, 12), (1, 3), (4, 20), (4, 20)]);
        let runs = compare_policies(&config(3), &ps, &PolicyKind::ALL).unwrap();

        assert_eq!(runs.len(), 3);
        for (run, kind) in runs.iter().zip(PolicyKind::ALL) {
            assert_eq!(run.kind, kind);
            assert_eq!(run.stats.policy, kind.as_str());
            assert_eq!(run.stats.never_disembarked, 0);
        }
        // The input list is untouched.
        assert!(ps.iter().all(|p| !p.has_boarded()));
    }

    #[test]
    fn deterministic_policies_repeat() {
        let ps = passengers(&[(0, 5), (0, 12), (1, 3), (4, 20)]);
        let kinds = [PolicyKind::RoundRobin, PolicyKind::LeastEstimatedWait];
        let a = compare_policies(&config(2), &ps, &kinds).unwrap();
        let b = compare_policies(&config(2), &ps, &kinds).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.stats, y.stats);
        }
    }
}
