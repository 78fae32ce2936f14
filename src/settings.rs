//! Administrator configuration for UPS rate requests
//!
//! Loaded from a TOML file, by default `<config dir>/commerce-ups/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::core::{resolve_password, CredentialError, CredentialStore, Credentials};

/// Errors loading or interpreting settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("UPS password not found in config, keyring or UPS_PASSWORD")]
    MissingPassword(#[source] CredentialError),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Which UPS environment requests are sent to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Customer integration environment
    #[default]
    Test,
    /// Production
    Live,
}

/// UPS account settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiInformation {
    pub access_key: String,

    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default)]
    pub mode: Mode,
}

/// Rate options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateOptions {
    /// 0 requests published rates; anything else requests negotiated rates
    #[serde(default, deserialize_with = "deserialize_int_like")]
    pub rate_type: i64,
}

/// Full UPS settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsSettings {
    pub api_information: ApiInformation,

    #[serde(default)]
    pub rate_options: RateOptions,

    /// Service codes the store offers at checkout
    #[serde(default)]
    pub services: Vec<String>,
}

impl UpsSettings {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::config_dir()
            .map(|dir| dir.join("commerce-ups").join("config.toml"))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml(&content)?;
        tracing::debug!(
            "Loaded UPS settings from {} ({} services enabled)",
            path.display(),
            settings.services.len()
        );
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Whether requests go to the integration environment
    pub fn use_integration_mode(&self) -> bool {
        self.api_information.mode == Mode::Test
    }

    pub fn rate_type(&self) -> i64 {
        self.rate_options.rate_type
    }

    pub fn is_service_enabled(&self, code: &str) -> bool {
        self.services.iter().any(|s| s == code)
    }

    /// Build credentials, looking up the password if it is not configured
    pub fn credentials(&self, store: &dyn CredentialStore) -> Result<Credentials, SettingsError> {
        let api = &self.api_information;
        let password = resolve_password(api.password.as_deref(), &api.user_id, store)
            .map_err(SettingsError::MissingPassword)?;
        Ok(Credentials::new(&api.access_key, &api.user_id, password))
    }
}

/// Read an integer the way loosely-typed form values arrive: numbers, numeric
/// strings or booleans. Anything else reads as 0.
fn deserialize_int_like<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntLike {
        Int(i64),
        Float(f64),
        Bool(bool),
        Str(String),
    }

    Ok(match IntLike::deserialize(deserializer)? {
        IntLike::Int(i) => i,
        IntLike::Float(f) => f.trunc() as i64,
        IntLike::Bool(b) => i64::from(b),
        IntLike::Str(s) => parse_leading_int(&s),
    })
}

/// Parse the leading integer of a string, 0 if there is none
fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
