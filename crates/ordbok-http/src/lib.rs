use std::time::Duration;

use async_trait::async_trait;
use ordbok_config::network::NetworkConfig;
use ordbok_core::{FetchError, HostApi};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

const MAX_REDIRECTS: usize = 5;

/// Host capabilities backed by a plain HTTP client
#[derive(Clone)]
pub struct HttpHost {
    client: reqwest::Client,
    locale: String,
}

impl HttpHost {
    pub fn new(config: &NetworkConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("sv-SE,sv;q=0.9,en-US;q=0.8,en;q=0.7"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            locale: config.locale.clone(),
        })
    }
}

#[async_trait]
impl HostApi for HttpHost {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        tracing::debug!("GET {}", parsed);
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn locale(&self) -> String {
        self.locale.clone()
    }
}
