use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Failed to prepare request: {0}")]
    Preparation(String),
    #[error("Invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("Request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Header list that keeps insertion order and compares names case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any header with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .0
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Everything the HTTP client needs to send one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestConfig {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Checks the parts of the request that would make the client refuse to build it.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.url.trim().is_empty() {
            return Err(RequestError::Preparation("the url is empty".to_string()));
        }
        self.check_headers()
    }

    /// Checks every header against what the browser accepts in `Headers.set`.
    pub fn check_headers(&self) -> Result<(), RequestError> {
        self.headers
            .iter()
            .try_for_each(|(name, value)| check_header(name, value))
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

// values are byte strings: no NUL, CR or LF, nothing above U+00FF
fn is_header_value_char(c: char) -> bool {
    !matches!(c, '\0' | '\r' | '\n') && u32::from(c) <= 0xff
}

fn check_header(name: &str, value: &str) -> Result<(), RequestError> {
    let reason = if name.is_empty() {
        "the name must not be empty"
    } else if !name.chars().all(is_token_char) {
        "the name contains characters not allowed in a header name"
    } else if !value.chars().all(is_header_value_char) {
        "the value contains NUL, CR, LF or characters outside Latin-1"
    } else {
        return Ok(());
    };
    Err(RequestError::InvalidHeader {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

fn is_scheme(scheme: &str) -> bool {
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("//")
        || url
            .split_once("://")
            .is_some_and(|(scheme, _)| is_scheme(scheme))
}

/// Resolves `url` against an optional `base_url`.
///
/// Absolute urls are returned untouched, an empty one yields the base as is, and relative
/// ones are joined to the base with exactly one `/`.
pub fn resolve_url(base_url: Option<&str>, url: &str) -> String {
    match base_url {
        Some(base) if url.is_empty() => base.to_string(),
        Some(base) if !base.is_empty() && !is_absolute(url) => {
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                url.trim_start_matches('/')
            )
        }
        _ => url.to_string(),
    }
}
