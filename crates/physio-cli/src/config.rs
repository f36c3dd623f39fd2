use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config schema version written by this build. Every bump needs a step in
/// [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the config location when set.
const CONFIG_ENV: &str = "PHYSIO_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysioConfig {
    /// Schema version. Missing or 0 = hand-written file without one.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,
    #[serde(default)]
    pub report_writer: ReportWriterConfig,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportWriterConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PhysioConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            log_format: LogFormat::default(),
            max_turns: default_max_turns(),
            report_writer: ReportWriterConfig::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl Default for ReportWriterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            region: default_region(),
            model_id: default_model_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_max_turns() -> usize {
    physio_session::DEFAULT_MAX_TURNS
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_model_id() -> String {
    "us.anthropic.claude-sonnet-4-20250514-v1:0".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("physio-triage"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(config_dir()?.join("config.json")),
    }
}

/// Load the config from [`config_path`]. A missing file yields defaults.
pub fn load_config() -> eyre::Result<PhysioConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<PhysioConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PhysioConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Migrations run on the raw value, before the typed parse.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: PhysioConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update physio-triage."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: unversioned file, fields already match v1
    if from_version < 1 {
        obj.insert("config_version".to_string(), serde_json::Value::Number(1.into()));
        tracing::info!("stamped unversioned config as v1");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &PhysioConfig) -> eyre::Result<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &PhysioConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Readers never see a half-written file.
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
