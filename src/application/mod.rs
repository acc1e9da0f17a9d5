/// HTTP transport shared by the remote clients
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations
pub mod services;
