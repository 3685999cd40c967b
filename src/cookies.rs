//! Cookie store access and the CSRF token provider.

/// Name of the cookie holding the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Cookies in `document.cookie` form: `name=value` rows joined by `"; "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    rows: Vec<String>,
}

impl CookieJar {
    pub fn parse(cookies: &str) -> Self {
        let rows = cookies
            .split("; ")
            .filter(|row| !row.is_empty())
            .map(str::to_string)
            .collect();
        Self { rows }
    }

    /// Value of the first cookie named `name`.
    ///
    /// The value runs up to the next `=`, so a value containing `=` is
    /// truncated there.
    pub fn get(&self, name: &str) -> Option<&str> {
        let prefix = format!("{}=", name);
        self.rows
            .iter()
            .find(|row| row.starts_with(&prefix))
            .and_then(|row| row.split('=').nth(1))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Source of the token sent in the `X-CSRFToken` header.
pub trait TokenProvider: Send + Sync {
    fn csrf_token(&self) -> Option<String>;
}

/// Reads the token from the `csrftoken` cookie.
#[derive(Debug, Clone, Default)]
pub struct CookieTokenProvider {
    jar: CookieJar,
}

impl CookieTokenProvider {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    pub fn from_cookie_string(cookies: &str) -> Self {
        Self::new(CookieJar::parse(cookies))
    }
}

impl TokenProvider for CookieTokenProvider {
    fn csrf_token(&self) -> Option<String> {
        self.jar.get(CSRF_COOKIE).map(str::to_string)
    }
}

/// A fixed token, or none.
impl TokenProvider for Option<String> {
    fn csrf_token(&self) -> Option<String> {
        self.clone()
    }
}
