//! Stable DTOs shared across the imageguard workspace.
//!
//! This crate is intentionally boring:
//! - severity taxonomy and the ordered message log
//! - data types for the emitted report envelope

#![forbid(unsafe_code)]

pub mod message;
pub mod report;

pub use message::{Message, MessageLog, Severity};
pub use report::{ScanData, ScanReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
