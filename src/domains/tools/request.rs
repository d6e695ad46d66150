//! Outbound API requests.
//!
//! Tool arguments are never trusted as URL text: every user-supplied path
//! segment and query value goes through [`encode_component`] before it is
//! placed in a request path.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Everything outside the unreserved URI-component characters is escaped,
/// including `/`, `?`, `#`, `&` and spaces.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value so it can be used as a single path segment or
/// query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// HTTP method of an [`ApiRequest`]. The docs API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
        }
    }
}

/// A single request against the docs API, relative to its base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    path: String,
}

impl ApiRequest {
    /// A GET for an already-encoded path (with optional query string).
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
        }
    }

    /// `GET /docs`
    pub fn docs() -> Self {
        Self::get("/docs")
    }

    /// `GET /docs/{doc_name}/pages/{page}` with both segments encoded.
    pub fn page(doc_name: &str, page: &str) -> Self {
        Self::get(format!(
            "/docs/{}/pages/{}",
            encode_component(doc_name),
            encode_component(page)
        ))
    }

    /// `GET /docs/{doc_name}/search?q={query}` with both values encoded.
    pub fn search(doc_name: &str, query: &str) -> Self {
        Self::get(format!(
            "/docs/{}/search?q={}",
            encode_component(doc_name),
            encode_component(query)
        ))
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Path and query, already percent-encoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL of this request under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Reserved page holding the condensed, LLM-oriented index of a doc set.
pub const INDEX_PAGE: &str = "llms.txt";

/// Reserved page holding the whole doc set as a single text.
pub const FULL_PAGE: &str = "llms-full.txt";

/// How page identifiers are addressed on the API.
///
/// Older API deployments name pages bare (`llms.txt`, `guides/hooks`); newer
/// ones use root-relative paths (`/llms.txt`, `/guides/hooks`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageNaming {
    #[default]
    Rooted,
    Bare,
}

impl PageNaming {
    /// Identifier of a reserved page such as [`INDEX_PAGE`].
    pub fn reserved(self, page: &str) -> String {
        match self {
            Self::Rooted => format!("/{}", page),
            Self::Bare => page.to_string(),
        }
    }

    /// Identifier of a caller-supplied page path.
    pub fn page_path(self, page_path: &str) -> String {
        match self {
            Self::Rooted if !page_path.starts_with('/') => format!("/{}", page_path),
            _ => page_path.to_string(),
        }
    }
}

impl FromStr for PageNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rooted" => Ok(Self::Rooted),
            "bare" => Ok(Self::Bare),
            other => Err(format!(
                "unknown page naming '{}', expected 'rooted' or 'bare'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_escapes_reserved_characters() {
        assert_eq!(encode_component("/guides/hooks"), "%2Fguides%2Fhooks");
        assert_eq!(encode_component("use state"), "use%20state");
        assert_eq!(encode_component("a?b#c&d=e+f"), "a%3Fb%23c%26d%3De%2Bf");
        assert_eq!(encode_component("llms-full.txt"), "llms-full.txt");
        assert_eq!(encode_component("it's_(ok)!~*"), "it's_(ok)!~*");
    }

    #[test]
    fn test_encode_component_utf8() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_page_request_encodes_each_segment() {
        let request = ApiRequest::page("react", "/guides/hooks");
        assert_eq!(request.path(), "/docs/react/pages/%2Fguides%2Fhooks");
        assert_eq!(request.method(), Method::Get);

        let request = ApiRequest::page("my/docs", "intro");
        assert_eq!(request.path(), "/docs/my%2Fdocs/pages/intro");
    }

    #[test]
    fn test_search_request_encodes_query() {
        let request = ApiRequest::search("react", "use state");
        assert_eq!(request.path(), "/docs/react/search?q=use%20state");

        let request = ApiRequest::search("react", "a&q=b");
        assert_eq!(request.path(), "/docs/react/search?q=a%26q%3Db");
    }

    #[test]
    fn test_url_joins_base() {
        let request = ApiRequest::docs();
        assert_eq!(
            request.url("https://atlas.cartograph.app/api"),
            "https://atlas.cartograph.app/api/docs"
        );
        assert_eq!(
            request.url("http://localhost:8080/"),
            "http://localhost:8080/docs"
        );
        assert_eq!(request.to_string(), "GET /docs");
    }

    #[test]
    fn test_reserved_pages_by_naming() {
        assert_eq!(PageNaming::Rooted.reserved(INDEX_PAGE), "/llms.txt");
        assert_eq!(PageNaming::Bare.reserved(FULL_PAGE), "llms-full.txt");
    }

    #[test]
    fn test_page_path_by_naming() {
        assert_eq!(PageNaming::Rooted.page_path("guides/hooks"), "/guides/hooks");
        assert_eq!(PageNaming::Rooted.page_path("/guides/hooks"), "/guides/hooks");
        assert_eq!(PageNaming::Bare.page_path("guides/hooks"), "guides/hooks");
        assert_eq!(PageNaming::Bare.page_path("/guides/hooks"), "/guides/hooks");
    }

    #[test]
    fn test_page_naming_from_str() {
        assert_eq!("Rooted".parse::<PageNaming>(), Ok(PageNaming::Rooted));
        assert_eq!(" bare ".parse::<PageNaming>(), Ok(PageNaming::Bare));
        assert!("legacy".parse::<PageNaming>().is_err());
    }
}
