//! The `Elevator` — one car's position, riders, lobby queue, and motion.

use std::collections::{BTreeSet, VecDeque};

use lift_core::{ElevatorId, Instant, Secs, SimConfig};
use tracing::trace;

use crate::{CarError, CarResult, CarSnapshot, MotionState, Rider};

// ── CarParams ─────────────────────────────────────────────────────────────────

/// The fixed physical parameters shared by every car in a fleet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarParams {
    pub min_floor:   i32,
    pub max_floor:   i32,
    pub capacity:    usize,
    /// Travel time for one floor.
    pub inter_floor: Secs,
    /// Time doors stay open at a stop.
    pub dwell:       Secs,
}

impl CarParams {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            min_floor:   config.min_floor,
            max_floor:   config.max_floor,
            capacity:    config.capacity,
            inter_floor: config.inter_floor(),
            dwell:       config.dwell(),
        }
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One elevator car.
///
/// Invariants upheld by every method:
///
/// - `min_floor <= floor <= max_floor`
/// - `riders.len() <= capacity`
/// - riders are only released while the car is stopped at their floor
///
/// Two cars compare equal iff their ids match.
#[derive(Clone, Debug)]
pub struct Elevator {
    pub(crate) id:     ElevatorId,
    pub(crate) params: CarParams,
    pub(crate) floor:  i32,
    pub(crate) state:  MotionState,
    /// Instant the current period started.  A period completes once
    /// `now - mark` reaches it; the mark then moves forward by that period.
    pub(crate) mark:   Instant,
    pub(crate) riders: Vec<Rider>,
    pub(crate) lobby:  VecDeque<Rider>,
}

impl PartialEq for Elevator {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Elevator {}

impl Elevator {
    /// Build a car on `start_floor` with its clock mark at `now`.
    ///
    /// A car that starts on the base floor is `IdleAtBase`; one that starts
    /// higher is `Descending` and returns to base empty before serving.
    pub fn new(id: ElevatorId, params: CarParams, start_floor: i32, now: Instant) -> CarResult<Self> {
        if params.capacity == 0 {
            return Err(CarError::ZeroCapacity(id));
        }
        if start_floor < params.min_floor || start_floor > params.max_floor {
            return Err(CarError::StartFloor {
                car:   id,
                floor: start_floor,
                min:   params.min_floor,
                max:   params.max_floor,
            });
        }
        let state = if start_floor == params.min_floor {
            MotionState::IdleAtBase
        } else {
            MotionState::Descending
        };
        Ok(Self {
            id,
            params,
            floor: start_floor,
            state,
            mark: now,
            riders: Vec::with_capacity(params.capacity),
            lobby: VecDeque::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn params(&self) -> &CarParams {
        &self.params
    }

    #[inline]
    pub fn floor(&self) -> i32 {
        self.floor
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn mark(&self) -> Instant {
        self.mark
    }

    /// Riders currently aboard, in boarding order.
    #[inline]
    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    /// Passengers assigned to this car but not yet aboard, FIFO.
    #[inline]
    pub fn lobby(&self) -> &VecDeque<Rider> {
        &self.lobby
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.riders.len() >= self.params.capacity
    }

    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            id:     self.id,
            floor:  self.floor,
            state:  self.state,
            riders: self.riders.clone(),
            queued: self.lobby.len(),
        }
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    /// Rider destinations still ahead on the way up: in
    /// `[floor, max_floor]`, with repetition.
    pub fn pending_stops(&self) -> impl Iterator<Item = i32> + '_ {
        let (lo, hi) = (self.floor, self.params.max_floor);
        self.riders
            .iter()
            .map(|r| r.destination_floor)
            .filter(move |&f| f >= lo && f <= hi)
    }

    /// Distinct pending stops strictly above the current floor.
    pub fn stops_above(&self) -> BTreeSet<i32> {
        self.pending_stops().filter(|&f| f > self.floor).collect()
    }

    /// Highest pending stop, or the current floor if there is none.
    pub fn last_stop(&self) -> i32 {
        self.pending_stops().max().unwrap_or(self.floor)
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Advance the car's state to `now`.
    ///
    /// At most one period completes per call; callers step `now` by a tick
    /// no longer than the shortest period.
    ///
    /// # Errors
    /// [`CarError::AboveTop`] / [`CarError::BelowBase`] if a floor step would
    /// leave the shaft.  Either means the stop bookkeeping is broken.
    pub fn advance(&mut self, now: Instant) -> CarResult<()> {
        match self.state {
            MotionState::StoppedAscending => {
                if self.complete_period(now, self.params.dwell) {
                    self.state = if self.stops_above().is_empty() {
                        // Nothing further up: turn around in place.
                        MotionState::StoppedDescending
                    } else {
                        MotionState::Ascending
                    };
                    self.trace_transition(now);
                }
            }

            MotionState::StoppedDescending => {
                if self.complete_period(now, self.params.dwell) {
                    self.state = if self.floor == self.params.min_floor {
                        MotionState::IdleAtBase
                    } else {
                        MotionState::Descending
                    };
                    self.trace_transition(now);
                }
            }

            MotionState::Ascending => {
                if self.complete_period(now, self.params.inter_floor) {
                    let next = self.floor + 1;
                    if next > self.params.max_floor {
                        return Err(CarError::AboveTop {
                            car:   self.id,
                            floor: next,
                            max:   self.params.max_floor,
                        });
                    }
                    self.floor = next;
                    self.settle_after_ascent();
                    self.trace_transition(now);
                }
            }

            MotionState::Descending => {
                if self.complete_period(now, self.params.inter_floor) {
                    let next = self.floor - 1;
                    if next < self.params.min_floor {
                        return Err(CarError::BelowBase {
                            car:   self.id,
                            floor: next,
                            min:   self.params.min_floor,
                        });
                    }
                    self.floor = next;
                    if self.floor == self.params.min_floor {
                        let base = self.params.min_floor;
                        self.state = if self.riders.iter().any(|r| r.destination_floor == base) {
                            MotionState::StoppedDescending
                        } else {
                            MotionState::IdleAtBase
                        };
                    }
                    self.trace_transition(now);
                }
            }

            MotionState::IdleAtBase => {}
        }
        Ok(())
    }

    /// `true` once `period` has elapsed since the mark; moves the mark to
    /// the end of the completed period.
    fn complete_period(&mut self, now: Instant, period: Secs) -> bool {
        if now - self.mark >= period {
            self.mark = self.mark + period;
            true
        } else {
            false
        }
    }

    /// After arriving one floor higher: stop if this floor is a pending stop.
    fn settle_after_ascent(&mut self) {
        let stops: BTreeSet<i32> = self.pending_stops().collect();
        if stops.contains(&self.floor) {
            self.state = if stops.len() == 1 {
                MotionState::StoppedDescending
            } else {
                MotionState::StoppedAscending
            };
        }
    }

    fn trace_transition(&self, now: Instant) {
        trace!(car = %self.id, %now, floor = self.floor, state = %self.state, "car transition");
    }

    // ── Riders ────────────────────────────────────────────────────────────

    /// Append `rider` to the back of the lobby queue.
    pub fn enqueue(&mut self, rider: Rider) {
        self.lobby.push_back(rider);
    }

    /// Remove and return every rider whose destination is the current floor.
    ///
    /// Only a stopped car opens its doors; in any other state this returns
    /// an empty `Vec`.
    pub fn release_riders(&mut self) -> Vec<Rider> {
        if !self.state.is_stopped() {
            return vec![];
        }
        let floor = self.floor;
        let (leaving, staying): (Vec<Rider>, Vec<Rider>) = std::mem::take(&mut self.riders)
            .into_iter()
            .partition(|r| r.destination_floor == floor);
        self.riders = staying;
        leaving
    }

    /// Board from the lobby queue if the car is idle at base.
    ///
    /// A non-empty queue promotes the car to `StoppedAscending`.  Riders are
    /// taken in FIFO order until the car is full; the rest stay queued for
    /// the next time the car is idle at base.  Returns the riders boarded.
    ///
    /// The doors are already open while idle, so the base dwell counts as
    /// served: the car leaves on the next tick.
    pub fn board_from_lobby(&mut self, now: Instant) -> Vec<Rider> {
        if self.state != MotionState::IdleAtBase || self.lobby.is_empty() {
            return vec![];
        }
        self.state = MotionState::StoppedAscending;
        self.mark = now - self.params.dwell;

        let room = self.params.capacity.saturating_sub(self.riders.len());
        let take = room.min(self.lobby.len());
        let boarded: Vec<Rider> = self.lobby.drain(..take).collect();
        self.riders.extend_from_slice(&boarded);
        self.trace_transition(now);
        boarded
    }
}
