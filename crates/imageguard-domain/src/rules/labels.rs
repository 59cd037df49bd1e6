use crate::model::ContainerMetadata;
use crate::policy::Policy;
use imageguard_types::MessageLog;

pub(crate) fn run(policy: &Policy, container: &ContainerMetadata, log: &mut MessageLog) -> bool {
    let disallowed = policy.labels.disallow.as_deref().unwrap_or_default();

    // Offenders keep the container's own listing order.
    let failed: Vec<&str> = container
        .label_names()
        .into_iter()
        .filter(|name| disallowed.iter().any(|d| d == name))
        .collect();

    if failed.is_empty() {
        log.success("labels validated");
        true
    } else {
        log.failure(format!("disallowed labels present: {}", failed.join(", ")));
        false
    }
}
