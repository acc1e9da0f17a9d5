/// Module containing market service for retrieving market information
pub mod market_service;

pub use crate::application::interfaces::market::*;
pub use market_service::*;
