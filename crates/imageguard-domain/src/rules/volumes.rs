use crate::model::ContainerMetadata;
use crate::policy::Policy;
use imageguard_types::MessageLog;

/// Volumes are currently a simple on/off flag: `disallowed: true` fails
/// any container that defines one.
pub(crate) fn run(policy: &Policy, container: &ContainerMetadata, log: &mut MessageLog) -> bool {
    let volumes = container.volume_paths();
    let disallowed = policy.volumes.disallowed;

    if disallowed && !volumes.is_empty() {
        log.failure(format!("volumes are disallowed: {}", volumes.join(", ")));
        return false;
    }

    let text = if disallowed {
        "volumes not allowed, none defined".to_string()
    } else if !volumes.is_empty() {
        format!("volumes allowed: {}", volumes.join(", "))
    } else {
        "volumes not in use".to_string()
    };
    log.success(text);

    true
}
