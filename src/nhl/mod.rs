//! NHL web API access: endpoint catalogue and the HTTP fetch.

pub mod endpoints;
pub mod http;

pub use endpoints::Endpoint;
pub use http::{build_client, fetch_json, RequestConfig};
