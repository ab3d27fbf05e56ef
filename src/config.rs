use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::jobs::PollSettings;

pub const API_KEY_ENV: &str = "FIRECRAWL_API_KEY";
pub const BASE_URL_ENV: &str = "FIRECRAWL_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirecrawlConfig {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_max_poll_wait_secs")]
    pub max_poll_wait_secs: u64,
}

impl FirecrawlConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            request_timeout_secs: default_request_timeout_secs(),
            poll_interval_secs: default_poll_interval_secs(),
            max_poll_wait_secs: default_max_poll_wait_secs(),
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV} is not set")))?;
        let mut config = Self::new(api_key);
        config.base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config("Firecrawl API key is empty".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            interval: Duration::from_secs(self.poll_interval_secs),
            max_wait: Duration::from_secs(self.max_poll_wait_secs),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_poll_interval_secs() -> u64 {
    2
}

fn default_max_poll_wait_secs() -> u64 {
    300
}
