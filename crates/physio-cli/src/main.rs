use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eyre::eyre;
use physio_bedrock::BedrockReportWriter;
use physio_engine::Doctor;
use physio_knowledge::KnowledgeBase;
use physio_session::{Mode, ScriptedQuestions, SessionDriver, SessionState};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

mod config;

use config::{LogFormat, PhysioConfig};

const USAGE: &str = "usage: physio-triage <intake-or-history.json> | --init-config";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = config::load_config()?;
    init_tracing(config.log_format);

    let arg = std::env::args_os()
        .nth(1)
        .ok_or_else(|| eyre!(USAGE))?;
    if arg == "--init-config" {
        return init_config(&config);
    }

    let kb = KnowledgeBase::load()?;
    let doctor = Arc::new(Doctor::new(Arc::new(kb)));

    let path = PathBuf::from(arg);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre!("failed to read {}: {e}", path.display()))?;
    let input: Value = serde_json::from_str(&contents)?;

    match input {
        Value::Object(mut obj) if obj.contains_key("history") => {
            let mode = match obj.remove("mode") {
                Some(Value::String(mode)) => Some(mode.parse::<Mode>()?),
                _ => None,
            };
            let history = obj.remove("history").unwrap_or(Value::Null);
            run_session(doctor, &config, history, mode).await
        }
        Value::Array(_) => run_session(doctor, &config, input, None).await,
        intake => {
            let result = doctor.consult_value(intake)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn init_config(config: &PhysioConfig) -> eyre::Result<()> {
    let path = config::config_path()?;
    if path.exists() {
        return Err(eyre!("config already exists at {}", path.display()));
    }
    config::save_config(config)?;
    println!("{}", path.display());
    Ok(())
}

/// Replay an answer history and print the final summary as Markdown.
async fn run_session(
    doctor: Arc<Doctor>,
    config: &PhysioConfig,
    history: Value,
    mode: Option<Mode>,
) -> eyre::Result<()> {
    let history = physio_session::parse_history(history)?;

    let mut driver =
        SessionDriver::new(doctor, Box::new(ScriptedQuestions)).with_max_turns(config.max_turns);

    let writer_config = &config.report_writer;
    if writer_config.enabled {
        let client = physio_bedrock::client::build_client(&writer_config.region).await;
        driver = driver.with_report_writer(Arc::new(BedrockReportWriter::new(
            client,
            writer_config.model_id.clone(),
            Duration::from_secs(writer_config.timeout_secs),
        )));
    }
    let mode = mode.unwrap_or(if writer_config.enabled { Mode::Ai } else { Mode::Sim });

    let mut state = SessionState::new();
    state.replay(&history);
    tracing::info!(answers = history.len(), ?mode, "summarising session");

    let summary = driver.summary_now(&state, &history, mode).await;
    println!("{}", physio_notes::summary::render_summary_markdown(&summary)?);
    Ok(())
}
