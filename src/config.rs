//! Platform SDK configuration supplied at build time.
//!
//! `build.rs` forwards the keys from the build environment (or a `.env` file)
//! as compile-time variables; [`PlatformConfig::from_build_env`] reads them
//! back with `option_env!`. A missing key is a startup failure.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Serialize;

pub const API_KEY: &str = "FIREBASE_API_KEY";
pub const AUTH_DOMAIN: &str = "FIREBASE_AUTH_DOMAIN";
pub const PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const STORAGE_BUCKET: &str = "FIREBASE_STORAGE_BUCKET";
pub const MESSAGING_SENDER_ID: &str = "FIREBASE_MESSAGING_SENDER_ID";
pub const APP_ID: &str = "FIREBASE_APP_ID";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing platform configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("failed to encode platform configuration: {0}")]
    Encode(String),
}

/// Named secrets for the platform SDK, serialized as its init options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl PlatformConfig {
    /// Build from the values baked in at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if any key was absent or blank when
    /// the crate was built.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_KEY => option_env!("FIREBASE_API_KEY"),
                AUTH_DOMAIN => option_env!("FIREBASE_AUTH_DOMAIN"),
                PROJECT_ID => option_env!("FIREBASE_PROJECT_ID"),
                STORAGE_BUCKET => option_env!("FIREBASE_STORAGE_BUCKET"),
                MESSAGING_SENDER_ID => option_env!("FIREBASE_MESSAGING_SENDER_ID"),
                APP_ID => option_env!("FIREBASE_APP_ID"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build from any key lookup. Blank values count as missing; every
    /// missing key is reported, not just the first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] listing every absent or blank key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut read = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let config = Self {
            api_key: read(API_KEY),
            auth_domain: read(AUTH_DOMAIN),
            project_id: read(PROJECT_ID),
            storage_bucket: read(STORAGE_BUCKET),
            messaging_sender_id: read(MESSAGING_SENDER_ID),
            app_id: read(APP_ID),
        };

        if missing.is_empty() { Ok(config) } else { Err(ConfigError::Missing(missing)) }
    }

    /// JSON options object handed to the SDK initializer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Encode(e.to_string()))
    }
}
