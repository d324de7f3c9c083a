//! User settings, read from `config.json` in the config directory.
//!
//! Every key is optional:
//!
//! ```json
//! {
//!   "base_url": "https://api.artic.edu/api/v1",
//!   "page_size": 25,
//!   "timeout_secs": 30,
//!   "placeholder_image": "/placeholder-image.png",
//!   "log_level": "debug"
//! }
//! ```

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use artic_lib::ArticClient;
use artic_lib::DEFAULT_BASE_URL;
use artic_lib::api::DEFAULT_PAGE_SIZE;
use artic_lib::model::ARTWORK_FIELDS;
use artic_lib::model::PLACEHOLDER_IMAGE;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub base_url: String,
    pub page_size: usize,
    /// Per-request timeout. Requests have none when unset.
    pub timeout_secs: Option<u64>,
    pub placeholder_image: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: None,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        Self::parse(&text).map_err(|e| match e {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Parses and validates settings from JSON text.
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(text).map_err(|source| SettingsError::Parse {
                path: String::new(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.page_size == 0 {
            return Err(SettingsError::Invalid {
                key: "page_size",
                message: "must be positive".to_string(),
            });
        }
        if self.timeout_secs == Some(0) {
            return Err(SettingsError::Invalid {
                key: "timeout_secs",
                message: "must be positive".to_string(),
            });
        }
        LevelFilter::from_str(&self.log_level).map_err(|_| SettingsError::Invalid {
            key: "log_level",
            message: format!("unknown level `{}`", self.log_level),
        })?;
        Ok(())
    }

    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Builds the API client these settings describe.
    pub fn client(&self) -> Result<ArticClient, artic_lib::Error> {
        let mut builder = ArticClient::builder()
            .url(self.base_url.as_str())
            .fields(ARTWORK_FIELDS);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}
