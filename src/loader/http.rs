use std::time::Duration;

use tracing::{debug, warn};

use crate::api::LoadConfig;
use crate::core::RawRecord;
use crate::error::{ScatterError, ScatterResult};

use super::{DatasetSource, parse_dataset};

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Fetches the dataset with a blocking GET, bounded by a timeout, retrying a
/// fixed number of times on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpDatasetSource {
    url: String,
    timeout: Duration,
    retries: u32,
}

impl HttpDatasetSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::default().with_url(url)
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_load_config(mut self, load: LoadConfig) -> Self {
        self.timeout = Duration::from_millis(load.timeout_ms);
        self.retries = load.retries;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn retries(&self) -> u32 {
        self.retries
    }

    fn fetch_once(&self, client: &reqwest::blocking::Client) -> ScatterResult<String> {
        let response = client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|err| ScatterError::Load(format!("GET {} failed: {err}", self.url)))?;
        response
            .text()
            .map_err(|err| ScatterError::Load(format!("reading {} failed: {err}", self.url)))
    }
}

impl Default for HttpDatasetSource {
    fn default() -> Self {
        let load = LoadConfig::default();
        Self {
            url: DEFAULT_DATASET_URL.to_owned(),
            timeout: Duration::from_millis(load.timeout_ms),
            retries: load.retries,
        }
    }
}

impl DatasetSource for HttpDatasetSource {
    fn load(&self) -> ScatterResult<Vec<RawRecord>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| ScatterError::Load(format!("failed to build http client: {err}")))?;

        let attempts = self.retries.saturating_add(1);
        let mut last_error = String::new();
        for attempt in 1..=attempts {
            debug!(url = %self.url, attempt, attempts, "fetching dataset");
            match self.fetch_once(&client) {
                Ok(body) => return parse_dataset(&body),
                Err(err) => {
                    warn!(url = %self.url, attempt, error = %err, "dataset fetch failed");
                    last_error = err.to_string();
                }
            }
        }

        Err(ScatterError::Load(format!(
            "giving up on {} after {attempts} attempts: {last_error}",
            self.url
        )))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
