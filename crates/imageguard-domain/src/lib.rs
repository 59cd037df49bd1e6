//! Pure policy evaluation (no IO).
//!
//! Input: a decoded policy and container metadata, constructed elsewhere.
//! Output: pass/fail verdict + an ordered message log.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;

mod engine;
mod rules;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{evaluate, Evaluation};
