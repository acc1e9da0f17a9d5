/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use market_desk::prelude::*;
//!
//! let load = Config::from_lookup(|_| None);
//! assert_eq!(load.missing.len(), 3);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration loaded from the environment
pub use crate::application::config::{
    Config, ConfigLoad, MissingSetting, PolygonConfig, SupabaseConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SERVICES
// ============================================================================

/// Market data service trait and implementation
pub use crate::application::services::{MarketService, MarketServiceImpl};

/// HTTP client
pub use crate::application::client::HttpClient;

/// Database handle
pub use crate::storage::SupabaseClient;

// ============================================================================
// REQUEST MODELS
// ============================================================================

/// Market data request parameters
pub use crate::model::requests::{AggregatesRequest, OptionsChainRequest, Timespan};

// ============================================================================
// WEB APP CONFIGURATION
// ============================================================================

/// Build settings and placeholder icon
pub use crate::web::{
    AppConfig, BuildMode, PwaAppConfig, PwaOptions, app_config, render_icon, with_pwa,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use tracing::{debug, error, info, warn};
