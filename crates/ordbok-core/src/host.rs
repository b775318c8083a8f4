use crate::error::FetchError;

/// Capabilities the host application lends to dictionaries
#[async_trait::async_trait]
pub trait HostApi: Send + Sync {
    /// Download a page and return its body as text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// UI locale, e.g. "en-US" or "zh-CN"
    async fn locale(&self) -> String;
}

#[cfg(any(test, feature = "test-util"))]
pub use self::stub::StaticHost;

#[cfg(any(test, feature = "test-util"))]
mod stub {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::HostApi;
    use crate::error::FetchError;

    /// In-memory host serving canned pages
    pub struct StaticHost {
        locale: String,
        pages: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl StaticHost {
        pub fn new(locale: &str) -> Self {
            Self {
                locale: locale.to_string(),
                pages: HashMap::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        /// URLs fetched so far, in order
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().map(|r| r.clone()).unwrap_or_default()
        }
    }

    #[async_trait::async_trait]
    impl HostApi for StaticHost {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(url.to_string());
            }
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::NotFound(url.to_string()))
        }

        async fn locale(&self) -> String {
            self.locale.clone()
        }
    }
}
