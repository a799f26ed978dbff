//! Plain data row types written by output backends.

use lift_car::CarSnapshot;
use lift_core::{Instant, Secs};
use lift_sim::{DisembarkEvent, DurationSummary, SimStatistics};

/// One passenger leaving a car.
#[derive(Debug, Clone, PartialEq)]
pub struct DisembarkRow {
    pub instant:           Instant,
    pub car:               u32,
    pub passenger:         u32,
    pub name:              String,
    pub destination_floor: i32,
    pub arrival:           Instant,
    /// `None` only if the engine delivered a passenger it never boarded.
    pub boarding:          Option<Instant>,
    pub queue_wait:        Option<Secs>,
    pub transit:           Option<Secs>,
    /// The fleet right after the doors opened, see [`fleet_summary`].
    pub fleet:             String,
}

impl DisembarkRow {
    pub fn from_event(event: &DisembarkEvent<'_>) -> Self {
        let p = event.passenger;
        Self {
            instant:           event.instant,
            car:               event.car.0,
            passenger:         p.id.0,
            name:              p.name.clone(),
            destination_floor: p.destination_floor,
            arrival:           p.arrival,
            boarding:          p.boarding(),
            queue_wait:        p.queue_wait(),
            transit:           p.transit(),
            fleet:             fleet_summary(event.fleet),
        }
    }
}

/// End-of-run statistics flattened to one row.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub policy:            String,
    pub passengers:        usize,
    pub started:           Instant,
    pub finished:          Option<Instant>,
    pub queue_wait:        DurationSummary,
    pub transit:           DurationSummary,
    pub total:             DurationSummary,
    pub never_boarded:     usize,
    pub never_disembarked: usize,
}

impl From<&SimStatistics> for SummaryRow {
    fn from(s: &SimStatistics) -> Self {
        Self {
            policy:            s.policy.clone(),
            passengers:        s.passengers,
            started:           s.started,
            finished:          s.finished,
            queue_wait:        s.queue_wait.clone(),
            transit:           s.transit.clone(),
            total:             s.total.clone(),
            never_boarded:     s.never_boarded,
            never_disembarked: s.never_disembarked,
        }
    }
}

/// One line per car, `; `-separated, e.g.
/// `car#1: floor=5 state=stopped_descending riders=0[] queued=0; car#2: …`.
pub fn fleet_summary(fleet: &[CarSnapshot]) -> String {
    fleet.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
