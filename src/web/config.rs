/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_PWA_DEST, ENV_NODE_ENV};
use crate::utils::config::get_env_or_none;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Mode the web app is being built in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Local development server
    Development,
    /// Production build; also used when the mode is unknown
    #[default]
    Production,
    /// Test runner
    Test,
}

impl BuildMode {
    /// Reads the mode from `NODE_ENV`
    pub fn from_env() -> Self {
        get_env_or_none(ENV_NODE_ENV).unwrap_or_default()
    }

    /// Returns true for local development builds
    pub fn is_development(&self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

impl FromStr for BuildMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "development" => BuildMode::Development,
            "test" => BuildMode::Test,
            _ => BuildMode::Production,
        })
    }
}

/// Base framework settings
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Enables the framework's strict behavioural checks
    pub react_strict_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            react_strict_mode: true,
        }
    }
}

/// Options of the installable web app (PWA) wrapper
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PwaOptions {
    /// Directory the service worker and manifest are generated into
    pub dest: String,
    /// Registers the service worker automatically
    pub register: bool,
    /// Activates a new service worker as soon as it is installed
    pub skip_waiting: bool,
    /// Turns the whole installable app behaviour off
    pub disable: bool,
}

impl PwaOptions {
    /// Standard options for the given build mode; disabled in development
    pub fn for_mode(mode: BuildMode) -> Self {
        Self {
            dest: DEFAULT_PWA_DEST.to_string(),
            register: true,
            skip_waiting: true,
            disable: mode.is_development(),
        }
    }

    /// Standard options for the mode found in `NODE_ENV`
    pub fn from_env() -> Self {
        Self::for_mode(BuildMode::from_env())
    }
}

impl Default for PwaOptions {
    fn default() -> Self {
        Self::for_mode(BuildMode::default())
    }
}

/// Framework settings wrapped with the installable web app options
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PwaAppConfig {
    /// Wrapped base settings
    #[serde(flatten)]
    pub base: AppConfig,
    /// Installable web app options
    pub pwa: PwaOptions,
}

impl PwaAppConfig {
    /// Returns true when the service worker and manifest will be generated
    pub fn is_pwa_enabled(&self) -> bool {
        !self.pwa.disable
    }
}

/// Returns a wrapper that applies `options` to a base configuration
///
/// ```
/// use market_desk::web::{AppConfig, BuildMode, PwaOptions, with_pwa};
///
/// let config = with_pwa(PwaOptions::for_mode(BuildMode::Development))(AppConfig::default());
/// assert!(!config.is_pwa_enabled());
/// ```
pub fn with_pwa(options: PwaOptions) -> impl FnOnce(AppConfig) -> PwaAppConfig {
    move |base| PwaAppConfig { base, pwa: options }
}

/// The app's configuration for the current build mode
pub fn app_config(mode: BuildMode) -> PwaAppConfig {
    with_pwa(PwaOptions::for_mode(mode))(AppConfig::default())
}
