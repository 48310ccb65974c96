use std::env;
use std::time::Duration;

use keyring::Entry;

use crate::client::core::Deepgram;
use crate::transport::{HttpTransport, DEFAULT_BASE_URL};
use crate::{Error, Result};

const KEYRING_SERVICE: &str = "deepgram";
const KEYRING_USER: &str = "api-key";
const API_KEY_ENV: &str = "DEEPGRAM_API_KEY";

/// Builder for [`Deepgram`] handles.
pub struct DeepgramBuilder {
    api_key: Option<String>,
    /// Override base URL (primarily for testing with mock servers)
    base_url: Option<String>,
    timeout: Duration,
}

impl DeepgramBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the API key explicitly instead of resolving it from the
    /// keyring or environment.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different endpoint root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Deepgram> {
        let api_key = match self.api_key {
            Some(key) => key,
            None => resolve_api_key()
                .ok_or_else(|| Error::configuration("API key required (DEEPGRAM_API_KEY)"))?,
        };
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let transport = HttpTransport::new(api_key, &base_url, self.timeout)?;
        Ok(Deepgram::from_transport(transport))
    }
}

impl Default for DeepgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_api_key() -> Option<String> {
    // 1. Try the OS keyring
    if let Ok(entry) = Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        if let Ok(key) = entry.get_password() {
            return Some(key);
        }
    }

    // 2. Try the environment
    env::var(API_KEY_ENV).ok()
}
