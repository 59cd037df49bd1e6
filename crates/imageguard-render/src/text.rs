use imageguard_types::{Message, Severity, Verdict};

/// Scan banner fields, printed before any rule output.
#[derive(Clone, Debug)]
pub struct ScanHeader<'a> {
    pub image_id: &'a str,
    pub docker_version: &'a str,
    pub parent: &'a str,
    pub policy_path: &'a str,
}

pub fn render_scan_header(header: &ScanHeader<'_>) -> String {
    format!(
        "\nScanning <{}>\nDocker Build: {}\nParent: {}\n\nUsing policy <{}>\n",
        header.image_id, header.docker_version, header.parent, header.policy_path
    )
}

pub fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "PASS",
        Severity::Warning => "WARN",
        Severity::Failure => "FAIL",
        Severity::Exception => "EXCEPTION",
    }
}

pub fn render_message(message: &Message) -> String {
    format!("[{}] {}", severity_label(message.severity), message.text)
}

pub fn render_override(description: &str) -> String {
    format!("<Policy Override> {description}")
}

pub fn render_status(verdict: Verdict) -> String {
    let status = match verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    format!("\nStatus [{status}]")
}
