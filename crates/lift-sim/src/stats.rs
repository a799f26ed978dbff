//! Aggregate wait and transit statistics.

use std::fmt;

use lift_core::{Instant, Passenger, Secs};

/// Count, maximum, and mean over the passengers for which a duration is
/// defined.  `max` and `mean` are `None` when `count == 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct DurationSummary {
    pub count: usize,
    pub max:   Option<Secs>,
    pub mean:  Option<f64>,
}

impl DurationSummary {
    pub fn from_durations<I: IntoIterator<Item = Secs>>(durations: I) -> Self {
        let mut count = 0usize;
        let mut sum = 0i64;
        let mut max: Option<Secs> = None;
        for d in durations {
            count += 1;
            sum += d.as_i64();
            max = Some(max.map_or(d, |m| m.max(d)));
        }
        let mean = (count > 0).then(|| sum as f64 / count as f64);
        Self { count, max, mean }
    }
}

impl fmt::Display for DurationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.max, self.mean) {
            (Some(max), Some(mean)) => {
                write!(f, "n={} max={} mean={:.2}s", self.count, max, mean)
            }
            _ => write!(f, "n=0"),
        }
    }
}

/// End-of-run report for one simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimStatistics {
    /// Name of the dispatch policy that produced this run.
    pub policy:            String,
    pub passengers:        usize,
    pub started:           Instant,
    /// `None` while the run is still going.
    pub finished:          Option<Instant>,
    pub queue_wait:        DurationSummary,
    pub transit:           DurationSummary,
    pub total:             DurationSummary,
    pub never_boarded:     usize,
    pub never_disembarked: usize,
}

impl SimStatistics {
    pub fn compute(
        policy:     &str,
        passengers: &[Passenger],
        started:    Instant,
        finished:   Option<Instant>,
    ) -> Self {
        Self {
            policy:            policy.to_owned(),
            passengers:        passengers.len(),
            started,
            finished,
            queue_wait:        DurationSummary::from_durations(passengers.iter().filter_map(Passenger::queue_wait)),
            transit:           DurationSummary::from_durations(passengers.iter().filter_map(Passenger::transit)),
            total:             DurationSummary::from_durations(passengers.iter().filter_map(Passenger::total)),
            never_boarded:     passengers.iter().filter(|p| !p.has_boarded()).count(),
            never_disembarked: passengers.iter().filter(|p| !p.has_disembarked()).count(),
        }
    }

    /// Simulated time from the first arrival to the last disembark.
    pub fn makespan(&self) -> Option<Secs> {
        self.finished.map(|end| end - self.started)
    }
}

impl fmt::Display for SimStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "policy:            {}", self.policy)?;
        writeln!(f, "passengers:        {}", self.passengers)?;
        writeln!(f, "started:           {}", self.started)?;
        match self.finished {
            Some(end) => writeln!(f, "finished:          {} (+{})", end, end - self.started)?,
            None => writeln!(f, "finished:          -")?,
        }
        writeln!(f, "queue wait:        {}", self.queue_wait)?;
        writeln!(f, "transit:           {}", self.transit)?;
        writeln!(f, "total:             {}", self.total)?;
        writeln!(f, "never boarded:     {}", self.never_boarded)?;
        write!(f, "never disembarked: {}", self.never_disembarked)
    }
}
