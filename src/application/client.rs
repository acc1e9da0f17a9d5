/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Builds the underlying `reqwest` client shared by every request of a handle
pub fn build_http_client() -> Result<Client, AppError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Minimal JSON-over-HTTP client bound to one base URL
///
/// Every request carries the same default query parameters and headers
/// (API keys). The client holds no mutable state, so one instance can be
/// shared freely between concurrent callers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: String,
    default_query: Vec<(String, String)>,
    default_headers: Vec<(String, String)>,
}

impl HttpClient {
    /// Creates a client for `base_url` with no default parameters
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        Ok(Self {
            http_client: build_http_client()?,
            base_url: base_url.into(),
            default_query: Vec::new(),
            default_headers: Vec::new(),
        })
    }

    /// Adds a query parameter sent with every request
    pub fn with_default_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_query.push((name.into(), value.into()));
        self
    }

    /// Adds a header sent with every request
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a path against the base URL
    ///
    /// Absolute URLs are returned untouched.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Makes a GET request and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.send_get(path, None::<&()>).await
    }

    /// Makes a GET request with extra query parameters and decodes the JSON body
    ///
    /// `query` is serialized with `serde`, so `None` fields are left out of
    /// the query string entirely.
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_get(path, Some(query)).await
    }

    async fn send_get<Q, T>(&self, path: &str, query: Option<&Q>) -> Result<T, AppError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let headers: Vec<(&str, &str)> = self
            .default_headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &url,
            headers,
            &self.default_query,
            query,
        )
        .await?;
        parse_response(response).await
    }
}

/// Decodes a successful response body as JSON
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    Ok(response.json().await?)
}

/// Sends a single HTTP request and checks its status
///
/// There is no retry: the first failure, whether at the transport level or a
/// non-success status, is returned to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `default_query` - Parameters sent ahead of the request specific ones
/// * `query` - Optional request specific parameters
///
/// # Returns
///
/// * `Ok(Response)` - Response with a 2xx status
/// * `Err(AppError)` - Transport failure or classified non-success status
pub async fn make_http_request<Q: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    default_query: &[(String, String)],
    query: Option<&Q>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method.clone(), url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }
    if !default_query.is_empty() {
        request = request.query(default_query);
    }
    if let Some(query) = query {
        request = request.query(query);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!("Failed to read error body: {}", e);
            String::new()
        }
    };
    error!("{} {} failed with status {}: {}", method, url, status, body);
    Err(AppError::from_status(status, body))
}
