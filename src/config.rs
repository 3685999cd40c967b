use crate::attributes::HostAttributes;
use anyhow::{Context, Result};
use reqwest::Url;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Host element attributes
    pub languages: String,
    pub current_language: Option<String>,
    pub endpoint: String,

    // Page context
    pub base_url: Option<Url>,
    pub cookies: String,

    // HTTP
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Host element attributes
            languages: std::env::var("SELECTOR_LANGUAGES")
                .context("SELECTOR_LANGUAGES not set")?,
            current_language: std::env::var("SELECTOR_CURRENT_LANGUAGE").ok(),
            endpoint: std::env::var("SELECTOR_ENDPOINT")
                .context("SELECTOR_ENDPOINT not set")?,

            // Page context - relative endpoints resolve against the page URL
            base_url: std::env::var("SELECTOR_PAGE_URL")
                .ok()
                .map(|v| Url::parse(&v))
                .transpose()
                .context("SELECTOR_PAGE_URL is not a valid URL")?,
            cookies: std::env::var("SELECTOR_COOKIES").unwrap_or_default(),

            // HTTP
            request_timeout: Duration::from_secs(
                std::env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
        })
    }

    pub fn host_attributes(&self) -> HostAttributes {
        HostAttributes::new(
            self.languages.clone(),
            self.current_language.clone(),
            self.endpoint.clone(),
        )
    }
}
