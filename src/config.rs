use crate::domain::constants::{DEFAULT_API_BASE, SUCCESS_CLEAR_DELAY};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Client settings from `~/.config/fim/config.toml`; every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub api_base: String,
    pub success_clear_secs: u64,
    /// Ignore responses from calls that a newer call of the same workflow superseded.
    pub drop_stale_responses: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            success_clear_secs: SUCCESS_CLEAR_DELAY.as_secs(),
            drop_stale_responses: true,
        }
    }
}

impl Settings {
    pub fn success_clear_after(&self) -> Duration {
        Duration::from_secs(self.success_clear_secs)
    }

    /// Command-line (or `FIM_API_BASE`) base URL wins over the file.
    pub fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.to_string();
        }
        self
    }
}

pub fn settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/fim/config.toml"))
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    parse_settings(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

fn parse_settings(raw: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(raw)
}
