//! CLI entry point for imageguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O,
//! and exit codes. Evaluation lives in the library crates.

use anyhow::Context;
use clap::Parser;
use imageguard_domain::evaluate;
use imageguard_inspect::parse_inspect_json;
use imageguard_render::{
    render_message, render_override, render_scan_header, render_status, ScanHeader,
};
use imageguard_settings::{apply_overrides, parse_policy_yaml, Overrides};
use imageguard_types::{ScanData, ScanReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use std::io::Read;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

#[derive(Parser, Debug)]
#[command(
    name = "imageguard",
    version,
    about = "Checks a Docker image's properties against a policy"
)]
struct Cli {
    /// Image policy YAML.
    #[arg(short, long, default_value = "default_policy.yaml")]
    policy: PathBuf,

    /// Docker inspect JSON file; reads stdin when omitted.
    #[arg(short, long)]
    inspect: Option<PathBuf>,

    /// Image size max override, in MB.
    #[arg(short, long)]
    max: Option<i64>,

    /// Image size warning override, in MB.
    #[arg(short, long)]
    warning: Option<i64>,

    /// Add disallowed labels, comma-separated.
    #[arg(short, long)]
    labels: Option<String>,

    /// Add disallowed env keys, comma-separated.
    #[arg(short, long)]
    envs: Option<String>,

    /// Low-high ports that are allowed.
    #[arg(short, long)]
    range: Option<String>,

    /// Maximum number of filesystem layers.
    #[arg(long)]
    layers_max: Option<i64>,

    /// Warning number of filesystem layers.
    #[arg(long)]
    layers_warning: Option<i64>,

    /// Where to write a JSON report, if anywhere.
    #[arg(long)]
    report_out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("imageguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let started_at = OffsetDateTime::now_utc();

    if !cli.policy.exists() {
        anyhow::bail!("policy does not exist: {}", cli.policy.display());
    }
    if cli.policy.is_dir() {
        anyhow::bail!("cannot read policy: {}", cli.policy.display());
    }

    let policy_text = std::fs::read_to_string(&cli.policy)
        .with_context(|| format!("read policy: {}", cli.policy.display()))?;
    let base_policy = parse_policy_yaml(&policy_text)
        .with_context(|| format!("unable to parse policy YAML: {}", cli.policy.display()))?;

    let inspect_text = read_inspect_input(cli)?;
    if inspect_text.trim().is_empty() {
        anyhow::bail!("docker inspect output required (stdin or --inspect)");
    }
    let container = parse_inspect_json(&inspect_text)?;

    let overrides = Overrides {
        max: cli.max,
        warning: cli.warning,
        labels: cli.labels.clone(),
        envs: cli.envs.clone(),
        range: cli.range.clone(),
        layers_max: cli.layers_max,
        layers_warning: cli.layers_warning,
    };
    let (policy, applied) = apply_overrides(&base_policy, &overrides);

    let policy_path = cli.policy.display().to_string();
    print!(
        "{}",
        render_scan_header(&ScanHeader {
            image_id: &container.id,
            docker_version: &container.docker_version,
            parent: &container.parent,
            policy_path: &policy_path,
        })
    );
    for description in &applied {
        println!("{}", render_override(description));
    }
    if !applied.is_empty() {
        println!();
    }

    let evaluation = evaluate(&policy, &container);

    for message in evaluation.messages() {
        println!("{}", render_message(message));
    }
    println!("{}", render_status(evaluation.verdict()));

    if let Some(report_out) = &cli.report_out {
        let finished_at = OffsetDateTime::now_utc();
        let report = ScanReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "imageguard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            started_at,
            finished_at,
            verdict: evaluation.verdict(),
            messages: evaluation.messages().to_vec(),
            data: ScanData {
                image_id: container.id.clone(),
                docker_version: container.docker_version.clone(),
                policy_path: Some(policy_path),
                overrides_applied: applied,
            },
        };
        write_report_file(report_out, &report).context("write report json")?;
    }

    Ok(verdict_exit_code(evaluation.verdict()))
}

fn read_inspect_input(cli: &Cli) -> anyhow::Result<String> {
    match &cli.inspect {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read inspect file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_report_file(path: &Path, report: &ScanReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {}", parent.display()))?;
    }
    let data = serde_json::to_string_pretty(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path.display()))?;
    Ok(())
}

/// Map verdict to exit code: 0 = pass, 2 = fail (1 is reserved for
/// runtime errors).
fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
