//! The fixed, ordered rule set.
//!
//! Each rule is independent: it reads the policy and the container,
//! appends zero or more messages, and returns its own pass/fail verdict.
//! No rule's outcome depends on another's. Order is load-bearing — the
//! message log must reproduce rule order exactly, so dispatch is a
//! statically ordered sequence of calls.

use crate::model::ContainerMetadata;
use crate::policy::Policy;
use imageguard_types::MessageLog;

mod container_size;
mod env_keys;
mod healthcheck;
mod labels;
mod layer_count;
mod port_range;
mod port_requirement;
mod volumes;


pub(crate) fn run_all(
    policy: &Policy,
    container: &ContainerMetadata,
    log: &mut MessageLog,
) -> bool {
    let mut passing = true;
    passing &= labels::run(policy, container, log);
    passing &= env_keys::run(policy, container, log);
    passing &= volumes::run(policy, container, log);
    passing &= port_requirement::run(policy, container, log);
    passing &= port_range::run(policy, container, log);
    passing &= container_size::run(policy, container, log);
    passing &= healthcheck::run(policy, container, log);
    passing &= layer_count::run(policy, container, log);
    passing
}
