//! Simulation time model.
//!
//! # Design
//!
//! Time is whole seconds.  An [`Instant`] is an absolute point (seconds since
//! the Unix epoch, UTC) and a [`Secs`] is a signed span between two points.
//! Keeping both integral makes every elevator period exact: a car that needs
//! 2 s per floor reaches floor 5 from floor 1 in exactly 8 s, with no
//! floating-point drift across a long run.
//!
//! `Secs` is signed on purpose.  The phase correction used by the
//! least-estimated-wait estimate is negative while a phase is still running,
//! and estimate totals are allowed to go below zero.
//!
//! Arrival files carry instants as `yyyy-MM-dd HH:mm:ss`, read as UTC civil
//! datetimes through `jiff`.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

use crate::{CoreError, CoreResult};

/// Instant format used by arrival files.
const ARRIVAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ── Secs ──────────────────────────────────────────────────────────────────────

/// A signed span of simulated seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Secs(pub i64);

impl Secs {
    pub const ZERO: Secs = Secs(0);

    #[inline]
    pub fn new(secs: i64) -> Secs {
        Secs(secs)
    }

    #[inline]
    pub fn as_i64(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Add for Secs {
    type Output = Secs;
    #[inline]
    fn add(self, rhs: Secs) -> Secs {
        Secs(self.0 + rhs.0)
    }
}

impl AddAssign for Secs {
    #[inline]
    fn add_assign(&mut self, rhs: Secs) {
        self.0 += rhs.0;
    }
}

impl Sub for Secs {
    type Output = Secs;
    #[inline]
    fn sub(self, rhs: Secs) -> Secs {
        Secs(self.0 - rhs.0)
    }
}

impl Neg for Secs {
    type Output = Secs;
    #[inline]
    fn neg(self) -> Secs {
        Secs(-self.0)
    }
}

impl Mul<i64> for Secs {
    type Output = Secs;
    #[inline]
    fn mul(self, rhs: i64) -> Secs {
        Secs(self.0 * rhs)
    }
}

impl Sum for Secs {
    fn sum<I: Iterator<Item = Secs>>(iter: I) -> Secs {
        iter.fold(Secs::ZERO, Add::add)
    }
}

impl fmt::Display for Secs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

// ── Instant ───────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in whole seconds since the Unix epoch (UTC).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant(pub i64);

impl Instant {
    pub const EPOCH: Instant = Instant(0);

    #[inline]
    pub fn from_unix_secs(secs: i64) -> Instant {
        Instant(secs)
    }

    #[inline]
    pub fn unix_secs(self) -> i64 {
        self.0
    }

    /// Parse `yyyy-MM-dd HH:mm:ss` (a `T` separator is accepted too).
    pub fn parse(s: &str) -> CoreResult<Instant> {
        let s = s.trim();
        let civil = DateTime::strptime(ARRIVAL_FORMAT, s)
            .or_else(|_| DateTime::strptime(ISO_FORMAT, s))
            .map_err(|e| CoreError::Parse(format!("invalid instant {s:?}: {e}")))?;
        let ts = civil
            .to_zoned(TimeZone::UTC)
            .map_err(|e| CoreError::Parse(format!("instant {s:?} out of range: {e}")))?
            .timestamp();
        Ok(Instant(ts.as_second()))
    }

    /// This instant as a `jiff` timestamp, or `None` outside jiff's range.
    pub fn to_timestamp(self) -> Option<Timestamp> {
        Timestamp::from_second(self.0).ok()
    }
}

impl Add<Secs> for Instant {
    type Output = Instant;
    #[inline]
    fn add(self, rhs: Secs) -> Instant {
        Instant(self.0 + rhs.0)
    }
}

impl Sub<Secs> for Instant {
    type Output = Instant;
    #[inline]
    fn sub(self, rhs: Secs) -> Instant {
        Instant(self.0 - rhs.0)
    }
}

impl Sub for Instant {
    type Output = Secs;
    #[inline]
    fn sub(self, rhs: Instant) -> Secs {
        Secs(self.0 - rhs.0)
    }
}

impl FromStr for Instant {
    type Err = CoreError;
    fn from_str(s: &str) -> CoreResult<Instant> {
        Instant::parse(s)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_timestamp() {
            Some(ts) => write!(f, "{}", ts.to_zoned(TimeZone::UTC).datetime().strftime(ARRIVAL_FORMAT)),
            None => write!(f, "@{}", self.0),
        }
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The engine's logical clock: where the run started, where it is now, and
/// how far one tick moves it.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Earliest passenger arrival; the instant of the first tick.
    pub initial: Instant,
    /// The instant being processed — advanced by `SimClock::advance()`.
    pub current: Instant,
    /// Span added per tick.  Default: 1 s.
    pub tick: Secs,
}

impl SimClock {
    pub fn new(initial: Instant, tick: Secs) -> Self {
        Self { initial, current: initial, tick }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current + self.tick;
    }

    /// Simulated time elapsed since the first tick.
    #[inline]
    pub fn elapsed(&self) -> Secs {
        self.current - self.initial
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.current, self.elapsed())
    }
}
