//! Companion security record stored next to the model environment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::{EnvError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityConfig {
    /// Refuse data from outside the project
    pub block_external_data: bool,
    /// Requests per minute
    pub rate_limit: u32,
    pub pii_redaction: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            block_external_data: true,
            rate_limit: 60,
            pii_redaction: true,
        }
    }
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rate_limit == 0 {
            warn!(rate_limit = self.rate_limit, "rejected security config");
            return Err(EnvError::InvalidConfig(
                "rate_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a `.json` or `.toml` file, chosen by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self> = match ext.as_str() {
            "json" => Self::from_json_str,
            "toml" => Self::from_toml_str,
            _ => {
                warn!(path = %path.display(), "unsupported security config format");
                return Err(EnvError::UnsupportedFormat(path.display().to_string()));
            }
        };

        let raw = fs::read_to_string(path)?;
        let cfg = parse(&raw)?;
        debug!(path = %path.display(), ?cfg, "loaded security config");
        Ok(cfg)
    }

    /// Render in the layout of the shipped `security_config.json`.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests;
