//! `PolicyKind` — selecting a policy by name.

use std::fmt;
use std::str::FromStr;

use crate::{DispatchError, DispatchPolicy, LeastEstimatedWait, RandomChoice, RoundRobin};

/// The built-in dispatch policies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PolicyKind {
    RoundRobin,
    Random,
    LeastEstimatedWait,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::RoundRobin,
        PolicyKind::Random,
        PolicyKind::LeastEstimatedWait,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::RoundRobin         => "round-robin",
            PolicyKind::Random             => "random",
            PolicyKind::LeastEstimatedWait => "least-wait",
        }
    }

    /// A fresh policy of this kind.  `seed` only affects `Random`.
    pub fn build(self, seed: Option<u64>) -> Box<dyn DispatchPolicy> {
        match self {
            PolicyKind::RoundRobin         => Box::new(RoundRobin::new()),
            PolicyKind::Random             => Box::new(RandomChoice::new(seed)),
            PolicyKind::LeastEstimatedWait => Box::new(LeastEstimatedWait::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "round-robin" | "roundrobin" | "sequential" => Ok(PolicyKind::RoundRobin),
            "random" => Ok(PolicyKind::Random),
            "least-wait" | "least-estimated-wait" | "least-time" => Ok(PolicyKind::LeastEstimatedWait),
            _ => Err(DispatchError::UnknownPolicy(s.to_owned())),
        }
    }
}
