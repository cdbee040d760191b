//! HTTP client for the NHL web API

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;

use crate::nhl::endpoints::{Endpoint, NHL_API_BASE_URL};
use crate::Result;


/// Query string sent with every request.
///
/// `Content_Type` is a query parameter here, not a header. The API ignores it.
pub const CONTENT_TYPE_QUERY: [(&str, &str); 1] = [("Content_Type", "application.json")];

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything needed to issue one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub base_url: String,
    pub endpoint: Endpoint,
    /// Print request URL and headers to stderr before sending.
    pub debug: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            base_url: NHL_API_BASE_URL.to_string(),
            endpoint: Endpoint::default(),
            debug: false,
        }
    }
}

impl RequestConfig {
    pub fn url(&self) -> String {
        self.endpoint.url(&self.base_url)
    }
}

/// Build the HTTP client used for the run.
///
/// Only the connect phase is bounded; a slow response is waited on.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("nhl-stats/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?;
    Ok(client)
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Issue a single GET for `config.endpoint` and decode the body as JSON.
///
/// Non-2xx statuses are errors, as is a body that is not valid JSON.
pub async fn fetch_json(client: &Client, config: &RequestConfig) -> Result<Value> {
    let request = client
        .get(config.url())
        .headers(json_headers())
        .query(&CONTENT_TYPE_QUERY)
        .build()?;

    if config.debug {
        eprintln!("URL => {}", request.url());
        eprintln!("HEADERS:");
        for (k, v) in request.headers().iter() {
            eprintln!("  {}: {:?}", k, v);
        }
    }

    let body = client
        .execute(request)
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    Ok(serde_json::from_slice(&body)?)
}
