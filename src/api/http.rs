use crate::error::FetchError;
use crate::rate_limit::RequestThrottle;
use serde_json::Value;
use tracing::debug;

const USER_AGENT: &str = concat!("riftpedia/", env!("CARGO_PKG_VERSION"));

/// One GET, one JSON document.
pub trait JsonFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

/// Blocking fetcher backed by a shared ureq agent and the request throttle.
pub struct UreqFetcher {
    agent: ureq::Agent,
    throttle: RequestThrottle,
}

impl UreqFetcher {
    pub fn new(throttle: RequestThrottle) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        UreqFetcher { agent, throttle }
    }

    pub fn throttle(&self) -> &RequestThrottle {
        &self.throttle
    }
}

impl JsonFetcher for UreqFetcher {
    fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        self.throttle.acquire();
        debug!(url = redact(url), "GET");

        let body = match self.agent.get(url).call() {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| FetchError::Network(e.to_string()))?,
            Err(ureq::Error::Status(429, _)) => return Err(FetchError::RateLimited),
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(e) => return Err(FetchError::Network(e.to_string())),
        };

        parse_body(&body)
    }
}

pub fn parse_body(body: &str) -> Result<Value, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(serde_json::from_str(body)?)
}

/// Drops the query string so the API key never reaches the logs.
fn redact(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}
