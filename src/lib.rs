//! Language selector element.
//!
//! Renders a list of language links inside an isolated shadow tree, marks the
//! current language, and on click posts the chosen code to a locale endpoint
//! before reloading the page.
//!
//! # Architecture
//!
//! - `language`: the `{code, name_local}` entries supplied by the host page
//! - `attributes`: host element attributes (`languages`, `current-language`, `endpoint`)
//! - `cookies`: cookie store parsing and the CSRF token provider
//! - `view`: shadow tree model and HTML rendering
//! - `client`: the preference notification request
//! - `reload`: page reload capability
//! - `selector`: the element itself, wiring everything together

pub mod attributes;
pub mod client;
pub mod config;
pub mod cookies;
pub mod error;
pub mod language;
pub mod reload;
pub mod selector;
pub mod view;

pub use attributes::HostAttributes;
pub use client::{HttpPreferenceClient, PreferenceClient, PreferenceRequest};
pub use cookies::{CookieJar, CookieTokenProvider, TokenProvider};
pub use error::{ClientError, SelectorError};
pub use language::Language;
pub use reload::{PageReloader, ReloadSignal};
pub use selector::{LanguageSelector, PendingSelection};
pub use view::{LanguageLink, LinkClass, ListNode, ShadowRoot};
