/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # market-desk
//!
//! Thin async client layer used by the market dashboard web app:
//!
//! * [`application::services::MarketServiceImpl`] wraps the Polygon REST API
//!   (aggregates, options chains, ticker details, previous close) and returns
//!   response bodies untouched.
//! * [`storage::SupabaseClient`] is the shared database handle, built from the
//!   project URL and anonymous key.
//! * [`web`] describes the framework build settings, including the
//!   installable web app wrapper and the placeholder icon.
//!
//! Configuration is read once from the environment (and `.env`) through
//! [`application::config::Config`]. Missing secrets are warnings, not errors.
//!
//! ```no_run
//! use market_desk::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let config = Config::new();
//! let market = MarketServiceImpl::new(&config.polygon)?;
//! let bars = market
//!     .get_aggregates(&AggregatesRequest::new("AAPL", 1, Timespan::Day, "2023-01-01", "2023-01-31"))
//!     .await?;
//! println!("{bars}");
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, HTTP transport and services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request parameters and endpoint paths
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Database access
pub mod storage;
/// Environment and logging helpers
pub mod utils;
/// Web app build configuration
pub mod web;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
