/// Framework build settings and installable web app wrapper
pub mod config;
/// Placeholder application icon
pub mod icon;

pub use config::*;
pub use icon::*;
