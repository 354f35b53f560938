use std::path::{Path, PathBuf};

use clap::ValueEnum;
use eyre::WrapErr;
use serde::{Deserialize, Serialize};

use physio_report::styles::DocumentStyles;

/// Version stamped into every saved config. Raising it needs a matching
/// step in [`migrate`].
pub const CURRENT_VERSION: u32 = 2;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysioConfig {
    /// 0 when the file predates versioning.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    /// Bedrock model or inference profile used for summaries. Added in v1.
    pub model_id: String,
    /// Named AWS profile; the default credential chain when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_profile: Option<String>,
    /// Added in v1.
    pub log_format: LogFormat,
    /// DOCX export fonts. Added in v2.
    #[serde(default)]
    pub docx: DocumentStyles,
    pub created_at: jiff::Timestamp,
}

impl Default for PhysioConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            aws_profile: None,
            log_format: LogFormat::default(),
            docx: DocumentStyles::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("physio-notes"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// A config read from disk, or the defaults.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: PhysioConfig,
    /// Set when the file was written by an older build and upgraded in memory.
    pub migrated_from: Option<u32>,
}

impl LoadedConfig {
    fn defaults() -> Self {
        Self {
            config: PhysioConfig::default(),
            migrated_from: None,
        }
    }
}

/// The config on disk, or defaults when there is none.
pub fn load_or_default() -> eyre::Result<LoadedConfig> {
    let path = config_path()?;
    if path.exists() {
        load_config(&path)
    } else {
        Ok(LoadedConfig::defaults())
    }
}

pub fn load_config(path: &Path) -> eyre::Result<LoadedConfig> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config at {}", path.display()))?;

    let raw: serde_json::Value = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("invalid config at {}", path.display()))?;
    let version = raw
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

    let upgraded = migrate(raw, version).wrap_err_with(|| format!("invalid config at {}", path.display()))?;
    let config = serde_json::from_value(upgraded)
        .wrap_err_with(|| format!("invalid config at {}", path.display()))?;

    Ok(LoadedConfig {
        config,
        migrated_from: (version < CURRENT_VERSION).then_some(version),
    })
}

/// Bring a raw config value written at `from_version` up to
/// [`CURRENT_VERSION`], one step per version. Fields a step introduces are
/// only filled in when absent.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update physio-notes."
        ));
    }

    let fields = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // 1: Bedrock model and log format
    if from_version < 1 {
        fields
            .entry("model_id")
            .or_insert_with(|| serde_json::Value::String(DEFAULT_MODEL_ID.to_string()));
        fields
            .entry("log_format")
            .or_insert_with(|| serde_json::Value::String("pretty".to_string()));
    }

    // 2: docx styles
    if from_version < 2 && !fields.contains_key("docx") {
        fields.insert("docx".to_string(), serde_json::to_value(DocumentStyles::default())?);
    }

    fields.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );

    Ok(json)
}

/// Write `config.json` into `dir` through a sibling temp file, so a reader
/// never sees a half-written config. The file is owner-only on Unix.
pub fn save_config_in(dir: &Path, config: &PhysioConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;

    let stamped = PhysioConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };
    let body = serde_json::to_string_pretty(&stamped)?;

    let path = dir.join("config.json");
    let staging = dir.join("config.json.tmp");
    std::fs::write(&staging, body.as_bytes())
        .wrap_err_with(|| format!("failed to write {}", staging.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&staging, &path).wrap_err_with(|| format!("failed to replace {}", path.display()))?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
