use anyhow::{Context, bail};
use log::info;
use serde_json::{Value, json};
use std::io::Read;
use std::path::PathBuf;
use triage_score::utils::logging::log_warning;
use triage_score::{TriageConfig, process_batch};

const USAGE: &str = "usage: triage-score [PAYLOAD.json | -] [--config CONFIG.json]";

/// Payload used when no input is given
fn demo_payload() -> Value {
    json!({
        "fever_above_102": true,
        "urgent_symptoms": ["confusion", "persistent_vomiting"],
        "severe_pain": false,
        "infection_symptoms": [],
        "has_immune_condition": false,
        "recent_fall": false,
        "can_bear_weight": false,
        "has_chronic_condition": false,
        "worsened_symptoms": false,
        "mental_health_concerns": [],
        "daily_assistance_needs": [],
        "medication_management_issues": false,
        "nutrition_concerns": false,
        "social_isolation": false
    })
}

fn read_payload(source: &str) -> anyhow::Result<Value> {
    let content = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read payload from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read payload file {source}"))?
    };
    serde_json::from_str(&content).context("Payload is not valid JSON")
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut payload_source: Option<String> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if payload_source.is_none() => payload_source = Some(arg.clone()),
            _ => bail!("unexpected argument `{arg}`\n{USAGE}"),
        }
    }

    let config = match &config_path {
        Some(path) => TriageConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TriageConfig::survey_form(),
    };

    let payload = match &payload_source {
        Some(source) => read_payload(source)?,
        None => {
            log_warning("No payload given", Some("running the demonstration payload"));
            demo_payload()
        }
    };

    let assessed_at = chrono::Local::now().naive_local();
    let reports = process_batch(&payload, assessed_at, &config)?;
    info!("Processed {} assessment(s)", reports.len());

    let output = match reports.as_slice() {
        [single] if !payload.is_array() => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(&reports)?,
    };
    println!("{output}");

    Ok(())
}
