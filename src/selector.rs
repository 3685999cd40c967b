//! The language selector element.
//!
//! Construction parses the host attributes, reads the CSRF token once and
//! builds the shadow tree. A click marks the link as loading straight away and
//! hands back a [`PendingSelection`] that performs the notification and the
//! reload when run.

use crate::attributes::HostAttributes;
use crate::client::{PreferenceClient, PreferenceRequest};
use crate::cookies::TokenProvider;
use crate::error::SelectorError;
use crate::language::{parse_languages, Language};
use crate::reload::PageReloader;
use crate::view::{render_host_element, LinkClass, ShadowRoot};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct LanguageSelector {
    attributes: HostAttributes,
    languages: Vec<Language>,
    shadow: ShadowRoot,
    csrf_token: Option<String>,
    client: Arc<dyn PreferenceClient>,
    reloader: Arc<dyn PageReloader>,
}

impl LanguageSelector {
    /// Build the selector from its host attributes.
    ///
    /// Fails when the `languages` attribute is not a JSON list of languages.
    /// A missing CSRF token is not an error.
    pub fn new(
        attributes: HostAttributes,
        token_provider: &dyn TokenProvider,
        client: Arc<dyn PreferenceClient>,
        reloader: Arc<dyn PageReloader>,
    ) -> Result<Self, SelectorError> {
        let languages = parse_languages(&attributes.languages)?;
        let csrf_token = token_provider.csrf_token();
        let shadow = ShadowRoot::build(&languages, attributes.current_language.as_deref());

        if csrf_token.is_none() {
            debug!("No csrftoken cookie, preference requests will carry no token");
        }
        debug!(
            languages = languages.len(),
            current = ?attributes.current_language,
            "Language selector rendered"
        );

        Ok(Self {
            attributes,
            languages,
            shadow,
            csrf_token,
            client,
            reloader,
        })
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn current_language(&self) -> Option<&str> {
        self.attributes.current_language.as_deref()
    }

    pub fn endpoint(&self) -> &str {
        &self.attributes.endpoint
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn shadow_root(&self) -> &ShadowRoot {
        &self.shadow
    }

    /// Position of the first link for `code`.
    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.shadow.links().position(|link| link.code == code)
    }

    /// Full host element markup, shadow tree included.
    pub fn to_html(&self) -> String {
        render_host_element(&self.attributes, &self.shadow)
    }

    /// Click the link at `index`.
    ///
    /// The link is marked loading before this returns. Clicks are not guarded:
    /// each one yields its own independent selection.
    pub fn click(&mut self, index: usize) -> Result<PendingSelection, SelectorError> {
        let len = self.shadow.link_count();
        let link = self
            .shadow
            .link_mut(index)
            .ok_or(SelectorError::NoSuchLink { index, len })?;

        link.add_class(LinkClass::Loading);
        info!(language = %link.code, "Language selected");

        Ok(PendingSelection {
            endpoint: self.attributes.endpoint.clone(),
            request: PreferenceRequest::new(link.code.clone(), self.csrf_token.clone()),
            client: Arc::clone(&self.client),
            reloader: Arc::clone(&self.reloader),
        })
    }
}

impl std::fmt::Debug for LanguageSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageSelector")
            .field("attributes", &self.attributes)
            .field("languages", &self.languages)
            .field("has_csrf_token", &self.csrf_token.is_some())
            .finish_non_exhaustive()
    }
}

/// The notification and reload started by one click.
pub struct PendingSelection {
    endpoint: String,
    request: PreferenceRequest,
    client: Arc<dyn PreferenceClient>,
    reloader: Arc<dyn PageReloader>,
}

impl PendingSelection {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn request(&self) -> &PreferenceRequest {
        &self.request
    }

    /// Post the preference, then reload the page.
    ///
    /// The reload happens whatever the outcome of the request.
    // TODO: decide whether a failed request should surface an error instead of
    // reloading into the unchanged language.
    pub async fn run(self) {
        if let Err(e) = self.client.submit(&self.endpoint, &self.request).await {
            warn!(
                language = %self.request.language,
                error = %e,
                "Preference request failed, reloading anyway"
            );
        }

        self.reloader.reload();
    }
}
