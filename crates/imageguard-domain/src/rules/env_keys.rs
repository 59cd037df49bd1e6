use crate::model::ContainerMetadata;
use crate::policy::Policy;
use imageguard_types::MessageLog;

pub(crate) fn run(policy: &Policy, container: &ContainerMetadata, log: &mut MessageLog) -> bool {
    let disallowed = policy.env_keys.disallow.as_deref().unwrap_or_default();

    // Environment entries are in shell syntax (KEY=VALUE); the key is
    // everything before the first `=`.
    let failed: Vec<&str> = container
        .env_entries()
        .iter()
        .map(|entry| entry.split_once('=').map_or(entry.as_str(), |(key, _)| key))
        .filter(|key| disallowed.iter().any(|d| d == key))
        .collect();

    if failed.is_empty() {
        log.success("env keys validated");
        true
    } else {
        log.failure(format!("disallowed env keys present: {}", failed.join(", ")));
        false
    }
}
