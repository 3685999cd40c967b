//! Language entries supplied by the host page.

use crate::error::SelectorError;
use serde::Deserialize;

/// A selectable language.
///
/// Unknown fields in the host JSON (`name`, `bidi`, `name_translated`, ...)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    /// Short identifier posted to the endpoint (e.g. "en")
    pub code: String,
    /// Label in the language itself, shown as the link tooltip
    pub name_local: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name_local: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name_local: name_local.into(),
        }
    }
}

/// Parse the `languages` attribute.
///
/// Order is preserved and duplicate codes are kept as-is.
pub fn parse_languages(json: &str) -> Result<Vec<Language>, SelectorError> {
    let parsed: Option<Vec<Language>> = serde_json::from_str(json)?;
    parsed.ok_or(SelectorError::NullLanguages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_languages() {
        let json = r#"[{"code":"en","name_local":"English"},{"code":"fr","name_local":"Français"}]"#;
        let languages = parse_languages(json).expect("valid list");

        assert_eq!(
            languages,
            vec![Language::new("en", "English"), Language::new("fr", "Français")]
        );
    }

    #[test]
    fn test_parse_empty_list() {
        let languages = parse_languages("[]").expect("valid list");
        assert!(languages.is_empty());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let json = r#"[{"code":"ga","name":"Irish","name_local":"Gaeilge","bidi":false,"name_translated":"Irish"}]"#;
        let languages = parse_languages(json).expect("valid list");

        assert_eq!(languages, vec![Language::new("ga", "Gaeilge")]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let json = r#"[{"code":"en","name_local":"English"},{"code":"en","name_local":"English (again)"}]"#;
        let languages = parse_languages(json).expect("valid list");
        assert_eq!(languages.len(), 2);
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_languages("[{\"code\":\"en\"");
        assert!(matches!(result, Err(SelectorError::InvalidLanguages(_))));
    }

    #[test]
    fn test_parse_missing_field() {
        let result = parse_languages(r#"[{"code":"en"}]"#);
        assert!(matches!(result, Err(SelectorError::InvalidLanguages(_))));
    }

    #[test]
    fn test_parse_null() {
        let result = parse_languages("null");
        assert!(matches!(result, Err(SelectorError::NullLanguages)));
    }
}
