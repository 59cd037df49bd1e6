use crate::model::ContainerMetadata;
use crate::policy::Policy;
use imageguard_types::MessageLog;

pub(crate) fn run(policy: &Policy, container: &ContainerMetadata, log: &mut MessageLog) -> bool {
    let available = !container.exposed_ports().is_empty();

    if policy.ports.required {
        if !available {
            log.failure("exposed port(s) required");
            return false;
        }

        log.success("exposed ports required, detected");
        return true;
    }

    if available {
        log.success("exposed ports allowed, detected");
    } else {
        log.success("exposed ports allowed, none detected");
    }

    true
}
