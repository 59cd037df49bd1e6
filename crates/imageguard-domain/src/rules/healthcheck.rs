use crate::model::ContainerMetadata;
use crate::policy::Policy;
use imageguard_types::MessageLog;

pub(crate) fn run(policy: &Policy, container: &ContainerMetadata, log: &mut MessageLog) -> bool {
    let test = container.healthcheck_test();

    // The Dockerfile spec outlines `HEALTHCHECK NONE` to disable an
    // inherited check; treat it (and an absent or empty Test list) the
    // same as no healthcheck at all.
    let none_specified = test
        .and_then(|t| t.first())
        .is_some_and(|t| t.eq_ignore_ascii_case("none"));
    let no_check = test.is_none_or(|t| t.is_empty()) || none_specified;

    if no_check {
        log.success("no healthcheck specified");
        return true;
    }

    if policy.healthcheck.disallowed {
        log.failure("healthcheck is disallowed");
        return false;
    }

    log.success("healthcheck specified, allowed");
    true
}
