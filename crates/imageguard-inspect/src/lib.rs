//! Decoding `docker inspect` output into the domain model.
//!
//! `docker inspect` prints a JSON array with one element per inspected
//! object; imageguard evaluates exactly one image at a time, so the
//! first element is taken and an empty array is rejected.

#![forbid(unsafe_code)]

use anyhow::{bail, Context};
use imageguard_domain::model::ContainerMetadata;

pub fn parse_inspect_json(input: &str) -> anyhow::Result<ContainerMetadata> {
    let mut entries: Vec<ContainerMetadata> =
        serde_json::from_str(input).context("malformed docker inspect output")?;

    if entries.is_empty() {
        bail!("docker inspect output contains no entries");
    }

    Ok(entries.swap_remove(0))
}
