//! Language selector host.
//!
//! Usage:
//!   language-selector                # Print the rendered element
//!   language-selector render         # Same as above
//!   language-selector select <code>  # Click <code>, post it and wait for the reload
//!
//! Required environment variables:
//! - SELECTOR_LANGUAGES (JSON list of {code, name_local})
//! - SELECTOR_ENDPOINT
//!
//! Optional:
//! - SELECTOR_CURRENT_LANGUAGE
//! - SELECTOR_PAGE_URL (base for a relative endpoint)
//! - SELECTOR_COOKIES (document.cookie format, for csrftoken)
//! - REQUEST_TIMEOUT_SECS (defaults to 10)

use anyhow::{bail, Context, Result};
use language_selector::config::Config;
use language_selector::{
    CookieTokenProvider, HttpPreferenceClient, LanguageSelector, ReloadSignal,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_selector=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let token_provider = CookieTokenProvider::from_cookie_string(&config.cookies);
    let client = HttpPreferenceClient::new(config.request_timeout, config.base_url.clone())
        .context("Failed to create HTTP client")?;
    let reload = ReloadSignal::new();

    let mut selector = LanguageSelector::new(
        config.host_attributes(),
        &token_provider,
        Arc::new(client),
        Arc::new(reload.clone()),
    )
    .context("Failed to build language selector")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["render"] => {
            println!("{}", selector.to_html());
        }
        ["select", code] => {
            let index = selector
                .position_of(code)
                .with_context(|| format!("No language link for '{}'", code))?;

            let pending = selector.click(index)?;
            info!(endpoint = pending.endpoint(), "Posting language preference");
            pending.run().await;

            reload.reloaded().await;
            info!("Reload requested, selection complete");
        }
        other => bail!("Unrecognised arguments: {:?}", other),
    }

    Ok(())
}
