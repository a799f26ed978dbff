//! Simulation parameters.
//!
//! `SimConfig` is passed by value into the engine at construction; there is
//! no process-wide configuration state.  Every field has a default, so a
//! configuration file only needs to name the values it changes.

use crate::{CoreError, CoreResult, Secs};

/// Default number of cars in the fleet.
pub const DEFAULT_ELEVATOR_COUNT: usize = 4;
/// Default dwell at a stop, in seconds.
pub const DEFAULT_DWELL_SECS: u32 = 20;
/// Default travel time between adjacent floors, in seconds (0.5 floor/s).
pub const DEFAULT_INTER_FLOOR_SECS: u32 = 2;
/// Default passengers per car.
pub const DEFAULT_CAPACITY: usize = 8;
/// Default base (lowest) floor.
pub const DEFAULT_MIN_FLOOR: i32 = 1;
/// Default top floor.
pub const DEFAULT_MAX_FLOOR: i32 = 25;
/// Default tick length, in seconds.  The coarsest step that loses no event
/// when every period is a whole number of seconds.
pub const DEFAULT_TICK_SECS: u32 = 1;

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML file by the application crate (with the
/// `serde` feature) and handed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of cars.  Cars get ids `1..=elevator_count`.
    pub elevator_count: usize,

    /// How long a car stays stopped at a floor before moving on.
    pub dwell_secs: u32,

    /// How long a car takes to travel one floor.
    pub inter_floor_secs: u32,

    /// Maximum riders per car.
    pub capacity: usize,

    /// Base floor: where passengers board and where idle cars wait.
    pub min_floor: i32,

    /// Highest floor a car may reach.
    pub max_floor: i32,

    /// Floor each car starts on.  `None` means `min_floor`.
    pub initial_floor: Option<i32>,

    /// Seconds the clock advances per tick.
    pub tick_secs: u32,

    /// Seed for randomised dispatch.  `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            elevator_count:   DEFAULT_ELEVATOR_COUNT,
            dwell_secs:       DEFAULT_DWELL_SECS,
            inter_floor_secs: DEFAULT_INTER_FLOOR_SECS,
            capacity:         DEFAULT_CAPACITY,
            min_floor:        DEFAULT_MIN_FLOOR,
            max_floor:        DEFAULT_MAX_FLOOR,
            initial_floor:    None,
            tick_secs:        DEFAULT_TICK_SECS,
            seed:             None,
        }
    }
}

impl SimConfig {
    /// The floor cars start on.
    #[inline]
    pub fn start_floor(&self) -> i32 {
        self.initial_floor.unwrap_or(self.min_floor)
    }

    #[inline]
    pub fn dwell(&self) -> Secs {
        Secs(self.dwell_secs as i64)
    }

    #[inline]
    pub fn inter_floor(&self) -> Secs {
        Secs(self.inter_floor_secs as i64)
    }

    #[inline]
    pub fn tick(&self) -> Secs {
        Secs(self.tick_secs as i64)
    }

    /// `true` if `floor` lies within `[min_floor, max_floor]`.
    #[inline]
    pub fn serves(&self, floor: i32) -> bool {
        (self.min_floor..=self.max_floor).contains(&floor)
    }

    /// Reject configurations under which a run could never make progress.
    pub fn validate(&self) -> CoreResult<()> {
        if self.elevator_count == 0 {
            return Err(CoreError::Config("elevator_count must be at least 1".into()));
        }
        if self.capacity == 0 {
            return Err(CoreError::Config("capacity must be at least 1".into()));
        }
        if self.tick_secs == 0 {
            return Err(CoreError::Config("tick_secs must be at least 1".into()));
        }
        // A car completes at most one period per tick.
        for (name, period) in [("inter_floor_secs", self.inter_floor_secs), ("dwell_secs", self.dwell_secs)] {
            if period == 0 || period % self.tick_secs != 0 {
                return Err(CoreError::Config(format!(
                    "{name} = {period} must be a positive multiple of tick_secs = {}",
                    self.tick_secs
                )));
            }
        }
        if u32::try_from(self.elevator_count).is_err() {
            return Err(CoreError::Config(format!(
                "elevator_count {} exceeds the car id range",
                self.elevator_count
            )));
        }
        if self.min_floor > self.max_floor {
            return Err(CoreError::Config(format!(
                "min_floor {} is above max_floor {}",
                self.min_floor, self.max_floor
            )));
        }
        if !self.serves(self.start_floor()) {
            return Err(CoreError::Config(format!(
                "initial_floor {} is outside [{}, {}]",
                self.start_floor(),
                self.min_floor,
                self.max_floor
            )));
        }
        Ok(())
    }
}
