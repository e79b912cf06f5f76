use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FreeGamesError, Result};

/// HTTP capability injected into every provider
///
/// The contract is deliberately small: GET a URL, hand back the parsed JSON
/// body. Transport policy (timeouts, proxies, TLS) belongs to the
/// implementation, not to the adapters.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and parse the response body as JSON
    ///
    /// Connectivity problems surface as transport errors. A non-2xx status
    /// becomes an upstream error and an unparseable body a JSON error.
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// Default `HttpClient` backed by `reqwest`
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with a 10 second timeout and a versioned user agent
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("free-games/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FreeGamesError::Upstream {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use super::HttpClient;
    use crate::error::{FreeGamesError, Result};

    /// In-memory `HttpClient` serving canned responses keyed by URL prefix
    ///
    /// Every request is recorded so tests can assert call counts and the
    /// exact URLs the adapters build.
    pub(crate) struct MockHttp {
        routes: Mutex<Vec<(String, std::result::Result<Value, String>)>>,
        requests: Mutex<Vec<String>>,
    }

    impl MockHttp {
        pub(crate) fn new() -> Self {
            Self {
                routes: Mutex::new(Vec::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Serve `body` for any URL starting with `prefix`
        pub(crate) fn route(self, prefix: &str, body: Value) -> Self {
            self.routes
                .lock()
                .unwrap()
                .push((prefix.to_string(), Ok(body)));
            self
        }

        /// Fail any URL starting with `prefix`
        pub(crate) fn route_error(self, prefix: &str, message: &str) -> Self {
            self.routes
                .lock()
                .unwrap()
                .push((prefix.to_string(), Err(message.to_string())));
            self
        }

        pub(crate) fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        pub(crate) fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HttpClient for MockHttp {
        async fn get_json(&self, url: &str) -> Result<Value> {
            self.requests.lock().unwrap().push(url.to_string());

            let routes = self.routes.lock().unwrap();
            for (prefix, response) in routes.iter() {
                if url.starts_with(prefix.as_str()) {
                    return match response {
                        Ok(body) => Ok(body.clone()),
                        Err(message) => Err(FreeGamesError::from(message.clone())),
                    };
                }
            }

            Err(FreeGamesError::from(format!("no mock route for {url}")))
        }
    }
}
