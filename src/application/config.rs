/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{
    ENV_POLYGON_API_KEY, ENV_POLYGON_BASE_URL, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL,
    POLYGON_BASE_URL,
};
use crate::error::AppError;
use crate::utils::config::{non_blank, raw_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Settings for the Polygon market data API
pub struct PolygonConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// API key sent as the `apiKey` query parameter; empty when not configured
    pub api_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Settings for the Supabase backend
pub struct SupabaseConfig {
    /// Project URL; empty when not configured
    pub url: String,
    /// Anonymous public key; empty when not configured
    pub anon_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration, read once at startup and immutable afterwards
pub struct Config {
    /// Polygon market data settings
    pub polygon: PolygonConfig,
    /// Supabase settings
    pub supabase: SupabaseConfig,
}

/// A secret that was absent from the environment while loading [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingSetting {
    /// `NEXT_PUBLIC_POLYGON_API_KEY`
    PolygonApiKey,
    /// `NEXT_PUBLIC_SUPABASE_URL`
    SupabaseUrl,
    /// `NEXT_PUBLIC_SUPABASE_ANON_KEY`
    SupabaseAnonKey,
}

impl MissingSetting {
    /// Name of the environment variable the setting is read from
    pub fn env_var(&self) -> &'static str {
        match self {
            MissingSetting::PolygonApiKey => ENV_POLYGON_API_KEY,
            MissingSetting::SupabaseUrl => ENV_SUPABASE_URL,
            MissingSetting::SupabaseAnonKey => ENV_SUPABASE_ANON_KEY,
        }
    }
}

impl fmt::Display for MissingSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Outcome of loading the configuration
///
/// Loading never fails: absent secrets are replaced by empty strings and
/// listed in `missing`, and the caller decides whether to carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoad {
    /// Configuration with empty strings in place of missing values
    pub config: Config,
    /// Settings that were not found
    pub missing: Vec<MissingSetting>,
}

impl ConfigLoad {
    /// Returns true when every setting was found
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Logs one warning per missing setting
    pub fn warn_missing(&self) {
        for setting in &self.missing {
            warn!(
                "{} not set; requests depending on it will fail when attempted",
                setting
            );
        }
    }

    /// Returns the configuration, proceeding despite missing settings after warning about them
    pub fn into_config(self) -> Config {
        self.warn_missing();
        self.config
    }

    /// Returns the configuration only if nothing is missing
    pub fn into_complete(self) -> Result<Config, AppError> {
        if self.is_complete() {
            return Ok(self.config);
        }
        let names: Vec<&str> = self.missing.iter().map(MissingSetting::env_var).collect();
        Err(AppError::InvalidInput(format!(
            "missing configuration: {}",
            names.join(", ")
        )))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment (and `.env`), warning about
    /// anything missing and carrying on with empty values
    pub fn new() -> Self {
        Self::load().into_config()
    }

    /// Loads the configuration from the environment, including a `.env` file if present
    pub fn load() -> ConfigLoad {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }
        Self::from_lookup(raw_env)
    }

    /// Builds the configuration from an arbitrary variable lookup
    ///
    /// The Polygon key is kept exactly as given and only counts as missing
    /// when unset or empty. Blank Supabase values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> ConfigLoad
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |setting: MissingSetting, value: Option<String>| {
            value.unwrap_or_else(|| {
                missing.push(setting);
                String::new()
            })
        };

        let api_key = required(
            MissingSetting::PolygonApiKey,
            lookup(ENV_POLYGON_API_KEY).filter(|v| !v.is_empty()),
        );
        let url = required(
            MissingSetting::SupabaseUrl,
            non_blank(lookup(ENV_SUPABASE_URL)),
        );
        let anon_key = required(
            MissingSetting::SupabaseAnonKey,
            non_blank(lookup(ENV_SUPABASE_ANON_KEY)),
        );

        let base_url = non_blank(lookup(ENV_POLYGON_BASE_URL))
            .unwrap_or_else(|| POLYGON_BASE_URL.to_string());

        ConfigLoad {
            config: Config {
                polygon: PolygonConfig { base_url, api_key },
                supabase: SupabaseConfig { url, anon_key },
            },
            missing,
        }
    }
}

impl PolygonConfig {
    /// Creates settings for the given API key against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: POLYGON_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Points the client at a different base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SupabaseConfig {
    /// Creates Supabase settings from a project URL and anonymous key
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Returns true when either value is empty
    pub fn is_incomplete(&self) -> bool {
        self.url.is_empty() || self.anon_key.is_empty()
    }
}
