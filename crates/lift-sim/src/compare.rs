//! Running one scenario under several dispatch policies.
//!
//! Every run gets its own fleet and its own copy of the passenger list, so
//! runs never see each other's timestamps.  With the `parallel` feature the
//! runs execute on Rayon's thread pool.

use lift_core::{Passenger, SimConfig};
use lift_dispatch::PolicyKind;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{NoopObserver, SimBuilder, SimObserver, SimResult, SimStatistics};

/// Result of one policy's run.
#[derive(Clone, Debug)]
pub struct PolicyRun {
    pub kind:  PolicyKind,
    pub stats: SimStatistics,
}

/// Run `passengers` once per policy in `kinds`, in order.
pub fn compare_policies(
    config:     &SimConfig,
    passengers: &[Passenger],
    kinds:      &[PolicyKind],
) -> SimResult<Vec<PolicyRun>> {
    let runs = compare_policies_with(config, passengers, kinds, |_| NoopObserver)?;
    Ok(runs.into_iter().map(|(run, _)| run).collect())
}

/// Like [`compare_policies`], with an observer per run built by
/// `make_observer`.  The observers are returned alongside each run.
pub fn compare_policies_with<O, F>(
    config:        &SimConfig,
    passengers:    &[Passenger],
    kinds:         &[PolicyKind],
    make_observer: F,
) -> SimResult<Vec<(PolicyRun, O)>>
where
    O: SimObserver + Send,
    F: Fn(PolicyKind) -> O + Sync,
{
    let run_one = |&kind: &PolicyKind| -> SimResult<(PolicyRun, O)> {
        let mut observer = make_observer(kind);
        let policy = kind.build(config.seed);
        let mut sim = SimBuilder::new(config.clone(), passengers.to_vec(), policy).build()?;
        let stats = sim.run(&mut observer)?;
        Ok((PolicyRun { kind, stats }, observer))
    };

    #[cfg(feature = "parallel")]
    {
        kinds.par_iter().map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        kinds.iter().map(run_one).collect()
    }
}
