use reqwest::header::{HeaderMap, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

pub const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    Document(Value),
    Empty,
}

impl ProviderResponse {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        matches!(self, ProviderResponse::Empty)
    }

    pub fn into_typed<T: DeserializeOwned>(self) -> Option<T> {
        match self {
            ProviderResponse::Document(value) => match serde_json::from_value(value) {
                Ok(typed) => Some(typed),
                Err(e) => {
                    warn!("Provider response has an unexpected shape: {}", e);
                    None
                }
            },
            ProviderResponse::Empty => None,
        }
    }
}

#[derive(Clone)]
pub struct JsonFetcher {
    client: reqwest::Client,
}

impl JsonFetcher {
    pub fn new() -> Self {
        JsonFetcher {
            client: reqwest::Client::new(),
        }
    }

    // Never fails: transport errors, non-2xx statuses and bad bodies become Empty.
    pub async fn fetch(&self, url: &str, extra_headers: Option<HeaderMap>) -> ProviderResponse {
        let mut request = self.client.get(url).header(USER_AGENT, CLIENT_USER_AGENT);

        if let Some(headers) = extra_headers {
            request = request.headers(headers);
        }

        let response = match request.send().await.and_then(|r| r.error_for_status()) {
            Ok(response) => response,
            Err(e) => {
                match e.status() {
                    Some(status) => warn!("HTTP error {} from {}", status, redact(url)),
                    None => warn!(
                        "Failed to send request to {}: {}",
                        redact(url),
                        e.without_url()
                    ),
                }
                return ProviderResponse::Empty;
            }
        };

        match response.json::<Value>().await {
            Ok(body) => ProviderResponse::Document(body),
            Err(e) => {
                warn!(
                    "Failed to parse response body from {}: {}",
                    redact(url),
                    e.without_url()
                );
                ProviderResponse::Empty
            }
        }
    }
}

// Query strings may carry an access token.
fn redact(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
