use miette::Diagnostic;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("Request to {url} failed with status: {status}")]
    #[diagnostic(
        code(domwalk_fetch::unexpected_status),
        help("Only 200 OK is treated as success. The request is not retried.")
    )]
    UnexpectedStatus { url: Url, status: u16 },

    #[error("Failed to fetch URL {url}")]
    #[diagnostic(
        code(domwalk_fetch::request),
        help("The request could not be sent or no response was received.")
    )]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {url}")]
    #[diagnostic(code(domwalk_fetch::body))]
    Body {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL '{input}'")]
    #[diagnostic(
        code(domwalk_fetch::invalid_url),
        help("Pass an absolute URL such as https://example.com/page.")
    )]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid header '{name}': {message}")]
    #[diagnostic(code(domwalk_fetch::invalid_header))]
    InvalidHeader { name: String, message: String },

    #[error("Failed to build HTTP client")]
    #[diagnostic(code(domwalk_fetch::client))]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} was aborted before it settled")]
    #[diagnostic(
        code(domwalk_fetch::aborted),
        help("The Tokio runtime shut down while the request was in flight.")
    )]
    Aborted { url: Url },

    #[error("No Tokio runtime is running")]
    #[diagnostic(
        code(domwalk_fetch::no_runtime),
        help("get_async spawns onto the current Tokio runtime; call it from within one.")
    )]
    NoRuntime,
}

impl FetchError {
    /// The HTTP status of an `UnexpectedStatus` failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type FetchResult = Result<String, FetchError>;
