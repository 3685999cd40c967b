//! Attributes read from the `<language-selector>` host element.

use crate::error::SelectorError;

pub const LANGUAGES_ATTR: &str = "languages";
pub const CURRENT_LANGUAGE_ATTR: &str = "current-language";
pub const ENDPOINT_ATTR: &str = "endpoint";

/// Raw attribute values as supplied by the host markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAttributes {
    /// JSON-encoded list of `{code, name_local}`
    pub languages: String,
    /// Active language code; `None` means no link is marked current
    pub current_language: Option<String>,
    /// URL the preference is posted to
    pub endpoint: String,
}

impl HostAttributes {
    pub fn new(
        languages: impl Into<String>,
        current_language: Option<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            languages: languages.into(),
            current_language,
            endpoint: endpoint.into(),
        }
    }

    /// Collect attributes from `(name, value)` pairs, ignoring unknown names.
    ///
    /// When a name repeats, the first occurrence wins, as with HTML parsing.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut languages = None;
        let mut current_language = None;
        let mut endpoint = None;

        for (name, value) in pairs {
            let slot = match name.as_ref() {
                LANGUAGES_ATTR => &mut languages,
                CURRENT_LANGUAGE_ATTR => &mut current_language,
                ENDPOINT_ATTR => &mut endpoint,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        Ok(Self {
            languages: languages.ok_or(SelectorError::MissingAttribute(LANGUAGES_ATTR))?,
            current_language,
            endpoint: endpoint.ok_or(SelectorError::MissingAttribute(ENDPOINT_ATTR))?,
        })
    }

    /// Attribute pairs in markup order, skipping an absent current language.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![(LANGUAGES_ATTR, self.languages.as_str())];
        if let Some(current) = &self.current_language {
            pairs.push((CURRENT_LANGUAGE_ATTR, current.as_str()));
        }
        pairs.push((ENDPOINT_ATTR, self.endpoint.as_str()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_all_present() {
        let attrs = HostAttributes::from_pairs([
            ("languages", "[]"),
            ("current-language", "en"),
            ("endpoint", "/i18n/setlang/"),
        ])
        .expect("all attributes present");

        assert_eq!(attrs.languages, "[]");
        assert_eq!(attrs.current_language.as_deref(), Some("en"));
        assert_eq!(attrs.endpoint, "/i18n/setlang/");
    }

    #[test]
    fn test_from_pairs_ignores_unknown() {
        let attrs = HostAttributes::from_pairs([
            ("class", "nav"),
            ("languages", "[]"),
            ("endpoint", "/lang"),
        ])
        .expect("required attributes present");

        assert_eq!(attrs.current_language, None);
    }

    #[test]
    fn test_from_pairs_first_wins() {
        let attrs = HostAttributes::from_pairs([
            ("languages", "[]"),
            ("endpoint", "/first"),
            ("endpoint", "/second"),
        ])
        .expect("required attributes present");

        assert_eq!(attrs.endpoint, "/first");
    }

    #[test]
    fn test_from_pairs_missing_languages() {
        let result = HostAttributes::from_pairs([("endpoint", "/lang")]);
        assert!(matches!(
            result,
            Err(SelectorError::MissingAttribute("languages"))
        ));
    }

    #[test]
    fn test_from_pairs_missing_endpoint() {
        let result = HostAttributes::from_pairs([("languages", "[]")]);
        assert!(matches!(
            result,
            Err(SelectorError::MissingAttribute("endpoint"))
        ));
    }

    #[test]
    fn test_pairs_skips_absent_current_language() {
        let attrs = HostAttributes::new("[]", None, "/lang");
        assert_eq!(attrs.pairs(), vec![("languages", "[]"), ("endpoint", "/lang")]);
    }
}
