use crate::error::AirframeError;
use crate::source::DocumentSource;
use reqwest::blocking::Client;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Connection settings for the live article source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Prefix the document identifier is appended to.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Minimum gap between the start of two requests.
    pub min_interval: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org/wiki/".into(),
            user_agent: concat!(
                "airframe/",
                env!("CARGO_PKG_VERSION"),
                " (aircraft dataset builder)"
            )
            .into(),
            timeout: Duration::from_secs(20),
            min_interval: Duration::from_millis(500),
        }
    }
}

impl FetchConfig {
    pub fn url_for(&self, document: &str) -> String {
        format!("{}{}", self.base_url, document)
    }
}

/// Blocking HTTP source with a politeness delay between requests.
pub struct HttpSource {
    client: Client,
    config: FetchConfig,
    last_request: Mutex<Option<Instant>>,
}

impl HttpSource {
    pub fn new(config: FetchConfig) -> Result<Self, AirframeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AirframeError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            config,
            last_request: Mutex::new(None),
        })
    }

    /// Hold the lock across the request so fetches never overlap.
    fn get(&self, url: &str) -> Result<String, String> {
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.config.min_interval {
                std::thread::sleep(self.config.min_interval - elapsed);
            }
        }
        *last = Some(Instant::now());

        let response = self.client.get(url).send().map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }
        response.text().map_err(|e| e.to_string())
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, document: &str) -> Result<String, AirframeError> {
        let url = self.config.url_for(document);
        log::debug!("GET {}", url);
        self.get(&url).map_err(|reason| AirframeError::DocumentUnavailable {
            document: document.to_string(),
            reason,
        })
    }
}
