//! Terminal rendering for scan results.

#![forbid(unsafe_code)]

mod text;

pub use text::{
    render_message, render_override, render_scan_header, render_status, severity_label, ScanHeader,
};
