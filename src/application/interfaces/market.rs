use crate::error::AppError;
use crate::model::requests::{AggregatesRequest, OptionsChainRequest};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the market data service
///
/// Every method issues exactly one request and returns the decoded body as
/// received. Failures are propagated unchanged.
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets aggregate bars for a ticker over a date range
    ///
    /// `GET /v2/aggs/ticker/{ticker}/range/{multiplier}/{timespan}/{from}/{to}`
    async fn get_aggregates(&self, request: &AggregatesRequest) -> Result<Value, AppError>;

    /// Lists option contracts on an underlying, 1000 per page, ascending by
    /// expiration date
    ///
    /// `GET /v3/reference/options/contracts`
    async fn get_options_chain(&self, request: &OptionsChainRequest) -> Result<Value, AppError>;

    /// Gets descriptive reference data for a ticker
    ///
    /// `GET /v3/reference/tickers/{ticker}`
    async fn get_ticker_details(&self, ticker: &str) -> Result<Value, AppError>;

    /// Gets the previous trading session's bar for a ticker
    ///
    /// `GET /v2/aggs/ticker/{ticker}/prev`
    async fn get_previous_close(&self, ticker: &str) -> Result<Value, AppError>;
}
