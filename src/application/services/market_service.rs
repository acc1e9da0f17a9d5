use crate::application::client::HttpClient;
use crate::application::config::PolygonConfig;
use crate::application::interfaces::market::MarketService;
use crate::constants::POLYGON_API_KEY_PARAM;
use crate::error::AppError;
use crate::model::requests::{
    AggregatesRequest, OptionsChainRequest, Timespan, previous_close_path, ticker_details_path,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info, warn};

/// Implementation of the market service on top of the Polygon REST API
///
/// Built from a [`PolygonConfig`] handed in by the caller; the API key is
/// attached as the `apiKey` query parameter of every request.
#[derive(Debug, Clone)]
pub struct MarketServiceImpl {
    client: HttpClient,
}

impl MarketServiceImpl {
    /// Creates a new instance of the market service
    ///
    /// An empty API key only produces a warning; requests are still sent
    /// with an empty `apiKey` and fail at the remote end.
    pub fn new(config: &PolygonConfig) -> Result<Self, AppError> {
        if config.api_key.is_empty() {
            warn!("Polygon API key is empty; requests will be sent without credentials");
        }
        let client = HttpClient::new(config.base_url.clone())?
            .with_default_query(POLYGON_API_KEY_PARAM, config.api_key.clone());
        Ok(Self { client })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Shorthand for [`MarketService::get_aggregates`]
    pub async fn fetch_aggregates(
        &self,
        ticker: &str,
        multiplier: u32,
        timespan: Timespan,
        from: &str,
        to: &str,
    ) -> Result<Value, AppError> {
        let request = AggregatesRequest::new(ticker, multiplier, timespan, from, to);
        self.get_aggregates(&request).await
    }

    /// Shorthand for [`MarketService::get_options_chain`]
    pub async fn fetch_options_chain(
        &self,
        underlying: &str,
        expiration_date: Option<&str>,
    ) -> Result<Value, AppError> {
        let request = OptionsChainRequest::new(underlying).with_optional_expiration(expiration_date);
        self.get_options_chain(&request).await
    }

    async fn fetch(&self, path: &str) -> Result<Value, AppError> {
        self.client.get(path).await.inspect_err(|e| {
            error!("Request to {} failed: {}", path, e);
        })
    }
}

#[async_trait]
impl MarketService for MarketServiceImpl {
    async fn get_aggregates(&self, request: &AggregatesRequest) -> Result<Value, AppError> {
        info!(
            "Getting {} x {} aggregates for {} from {} to {}",
            request.multiplier, request.timespan, request.ticker, request.from, request.to
        );
        let data = self.fetch(&request.path()).await?;
        debug!("Aggregates obtained for: {}", request.ticker);
        Ok(data)
    }

    async fn get_options_chain(&self, request: &OptionsChainRequest) -> Result<Value, AppError> {
        info!(
            "Getting options chain for {} (expiration: {})",
            request.underlying_ticker(),
            request.expiration_date().unwrap_or("any")
        );
        let data: Value = self
            .client
            .get_with_query(OptionsChainRequest::PATH, request)
            .await
            .inspect_err(|e| {
                error!(
                    "Options chain request for {} failed: {}",
                    request.underlying_ticker(),
                    e
                );
            })?;
        debug!("Options chain obtained for: {}", request.underlying_ticker());
        Ok(data)
    }

    async fn get_ticker_details(&self, ticker: &str) -> Result<Value, AppError> {
        info!("Getting ticker details: {}", ticker);
        let data = self.fetch(&ticker_details_path(ticker)).await?;
        debug!("Ticker details obtained for: {}", ticker);
        Ok(data)
    }

    async fn get_previous_close(&self, ticker: &str) -> Result<Value, AppError> {
        info!("Getting previous close: {}", ticker);
        let data = self.fetch(&previous_close_path(ticker)).await?;
        debug!("Previous close obtained for: {}", ticker);
        Ok(data)
    }
}
