use crate::model::ContainerMetadata;
use crate::policy::Policy;
use imageguard_types::MessageLog;

/// Checks every exposed port against an inclusive `"low-high"` range.
///
/// Without a configured range this rule is silent: absence of a range is
/// not absence of ports, and requiring ports is the previous rule's job.
pub(crate) fn run(policy: &Policy, container: &ContainerMetadata, log: &mut MessageLog) -> bool {
    let Some(range) = policy.ports.range.as_deref() else {
        return true;
    };

    // A range that does not parse, or runs high-to-low, is a policy
    // authoring error rather than a container violation.
    let Some((low, high)) = parse_range(range) else {
        log.exception(format!("invalid port range specified: {range}"));
        return false;
    };
    if high < low {
        log.exception(format!("invalid port range specified: {low}-{high}"));
        return false;
    }

    let ports = container.exposed_ports();
    if ports.is_empty() {
        log.success(format!("no exposed ports for range check [{range}]"));
        return true;
    }

    let mut port_numbers = Vec::new();
    let mut failed = Vec::new();
    for port in ports {
        let number = port.split_once('/').map_or(port, |(number, _proto)| number);
        port_numbers.push(number);

        // An unparseable port key counts as out of range; a malformed
        // ExposedPorts entry must not widen the policy.
        match number.parse::<i64>() {
            Ok(n) if (low..=high).contains(&n) => {}
            _ => failed.push(number),
        }
    }

    if failed.is_empty() {
        log.success(format!(
            "ports {} within range [{range}]",
            port_numbers.join(", ")
        ));
        return true;
    }

    let noun = if failed.len() > 1 { "ports" } else { "port" };
    log.failure(format!(
        "{noun} {} outside of required range [{range}]",
        failed.join(", ")
    ));

    false
}

fn parse_range(range: &str) -> Option<(i64, i64)> {
    let (low, high) = range.split_once('-')?;
    Some((low.trim().parse().ok()?, high.trim().parse().ok()?))
}
