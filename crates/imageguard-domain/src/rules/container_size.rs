use crate::model::ContainerMetadata;
use crate::policy::{Policy, ScalarValue};
use imageguard_types::MessageLog;

pub(crate) fn run(policy: &Policy, container: &ContainerMetadata, log: &mut MessageLog) -> bool {
    let max = policy.size.max.as_ref().and_then(ScalarValue::threshold);
    let warning = policy.size.warning.as_ref().and_then(ScalarValue::threshold);

    // A warning threshold at or above the hard maximum could never fire
    // before the failure does; reject the policy outright.
    if let (Some(warn), Some(max)) = (warning, max)
        && warn >= max
    {
        log.exception(format!(
            "invalid policy: warning size ({warn}MB) must be less than max size ({max}MB)"
        ));
        return false;
    }

    // Inspect reports bytes; thresholds are whole MB, rounded up.
    let size = container.size_megabytes() as i64;
    let crossed_warning = warning.filter(|w| size >= *w);

    let Some(max) = max else {
        match crossed_warning {
            Some(warn) => log.warning(format!(
                "{size}MB container size, recommend < {warn}MB"
            )),
            None => log.success("no max container size limit specified"),
        }
        // No max configured means nothing can fail.
        return true;
    };

    if size > max {
        log.failure(format!(
            "{size}MB container size, exceeded {max}MB maximum"
        ));
        return false;
    }

    match crossed_warning {
        Some(warn) => log.warning(format!(
            "{size}MB container size, recommend < {warn}MB"
        )),
        None => log.success(format!("{size}MB container size, maximum: {max}MB")),
    }

    true
}
