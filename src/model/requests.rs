/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{OPTIONS_CHAIN_ORDER, OPTIONS_CHAIN_PAGE_SIZE, OPTIONS_CHAIN_SORT};
use crate::error::AppError;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size of the time window each aggregate bar covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timespan {
    /// One minute buckets
    Minute,
    /// One hour buckets
    Hour,
    /// One day buckets
    Day,
}

impl Timespan {
    /// Path segment used by the aggregates endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Timespan::Minute => "minute",
            Timespan::Hour => "hour",
            Timespan::Day => "day",
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timespan {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(Timespan::Minute),
            "hour" => Ok(Timespan::Hour),
            "day" => Ok(Timespan::Day),
            other => Err(AppError::InvalidInput(format!(
                "unknown timespan '{other}', expected minute, hour or day"
            ))),
        }
    }
}

/// Parameters of a range aggregation query
///
/// Dates are passed through as given; the remote service accepts either
/// `YYYY-MM-DD` or millisecond timestamps.
#[derive(Debug, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatesRequest {
    /// Ticker symbol, inserted into the path verbatim
    pub ticker: String,
    /// Number of timespans per bar
    pub multiplier: u32,
    /// Size of each timespan
    pub timespan: Timespan,
    /// Start of the range (inclusive)
    pub from: String,
    /// End of the range (inclusive)
    pub to: String,
}

impl AggregatesRequest {
    /// Creates a request for `ticker` over `[from, to]`
    pub fn new(
        ticker: impl Into<String>,
        multiplier: u32,
        timespan: Timespan,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            multiplier,
            timespan,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates a request from calendar dates, formatted as `YYYY-MM-DD`
    pub fn from_dates(
        ticker: impl Into<String>,
        multiplier: u32,
        timespan: Timespan,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Self {
        Self::new(
            ticker,
            multiplier,
            timespan,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        )
    }

    /// Endpoint path for this request
    pub fn path(&self) -> String {
        format!(
            "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            self.ticker, self.multiplier, self.timespan, self.from, self.to
        )
    }
}

/// Query parameters of an options contracts listing
///
/// Only the underlying and the expiration filter can be chosen; paging and
/// ordering are fixed, which is why the fields are private.
#[derive(Debug, DisplaySimple, Clone, PartialEq, Eq, Serialize)]
pub struct OptionsChainRequest {
    underlying_ticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_date: Option<String>,
    limit: u32,
    order: String,
    sort: String,
}

impl OptionsChainRequest {
    /// Endpoint path of the options contracts listing
    pub const PATH: &'static str = "/v3/reference/options/contracts";

    /// Lists every contract on `underlying`
    pub fn new(underlying: impl Into<String>) -> Self {
        Self {
            underlying_ticker: underlying.into(),
            expiration_date: None,
            limit: OPTIONS_CHAIN_PAGE_SIZE,
            order: OPTIONS_CHAIN_ORDER.to_string(),
            sort: OPTIONS_CHAIN_SORT.to_string(),
        }
    }

    /// Restricts the listing to one expiration date
    pub fn with_expiration(mut self, expiration_date: impl Into<String>) -> Self {
        self.expiration_date = Some(expiration_date.into());
        self
    }

    /// Sets or clears the expiration filter
    pub fn with_optional_expiration(mut self, expiration_date: Option<&str>) -> Self {
        self.expiration_date = expiration_date.map(str::to_string);
        self
    }

    /// Underlying ticker
    pub fn underlying_ticker(&self) -> &str {
        &self.underlying_ticker
    }

    /// Expiration filter, if any
    pub fn expiration_date(&self) -> Option<&str> {
        self.expiration_date.as_deref()
    }

    /// Page size
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Sort direction
    pub fn order(&self) -> &str {
        &self.order
    }

    /// Sort field
    pub fn sort(&self) -> &str {
        &self.sort
    }
}

/// Endpoint path of a ticker's reference details
pub fn ticker_details_path(ticker: &str) -> String {
    format!("/v3/reference/tickers/{ticker}")
}

/// Endpoint path of a ticker's previous session close
pub fn previous_close_path(ticker: &str) -> String {
    format!("/v2/aggs/ticker/{ticker}/prev")
}
