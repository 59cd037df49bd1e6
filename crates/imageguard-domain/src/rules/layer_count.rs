use crate::model::ContainerMetadata;
use crate::policy::{Policy, ScalarValue};
use imageguard_types::MessageLog;

/// Same three-way success/warning/failure shape as the size rule, with
/// the filesystem layer count in place of size-in-MB.
pub(crate) fn run(policy: &Policy, container: &ContainerMetadata, log: &mut MessageLog) -> bool {
    let max = policy.layers.max.as_ref().and_then(ScalarValue::threshold);
    let warning = policy
        .layers
        .warning
        .as_ref()
        .and_then(ScalarValue::threshold);

    if let (Some(warn), Some(max)) = (warning, max)
        && warn >= max
    {
        log.exception(format!(
            "invalid policy: layer count warning ({warn}) must be less than max count ({max})"
        ));
        return false;
    }

    let count = container.layer_count() as i64;
    let crossed_warning = warning.filter(|w| count >= *w);

    let Some(max) = max else {
        match crossed_warning {
            Some(warn) => log.warning(format!(
                "{count} filesystem layers, recommended < {warn}"
            )),
            None => log.success("no maximum container layer count specified"),
        }
        return true;
    };

    if count > max {
        log.failure(format!(
            "{count} filesystem layers, exceeded {max} maximum"
        ));
        return false;
    }

    match crossed_warning {
        Some(warn) => log.warning(format!(
            "{count} filesystem layers, recommended < {warn}"
        )),
        None => log.success(format!("{count} filesystem layers, maximum: {max}")),
    }

    true
}
