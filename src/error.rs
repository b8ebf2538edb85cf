//! Defines error types used by this library.

use crate::Fault;

use thiserror::Error;
use xml::reader::Error as XmlError;

/// Boxed error returned by [`Transport`](crate::Transport) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Any error that can occur while calling the API.
///
/// The variants are ordered from most to least specific. `Connection` and `Api` errors are
/// returned unchanged from every operation; `Validation` errors are raised before anything is
/// sent.
#[derive(Debug, Error)]
pub enum Error {
    /// No response could be obtained from the server.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// The server responded, but rejected the call or sent something unusable.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The arguments of a call violate a precondition checked before sending it.
    #[error("validation error: {0}")]
    Validation(String),

    /// Anything else that went wrong while performing `method`.
    #[error("error calling {method}: {source}")]
    Call {
        method: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Returns the `Fault` if the server rejected the call with one.
    pub fn fault(&self) -> Option<&Fault> {
        match *self {
            Error::Api(ApiError::Fault(ref fault)) => Some(fault),
            _ => None,
        }
    }

    pub(crate) fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }
}

/// The connection could not be configured or established.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The endpoint URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The endpoint URL has no host.
    #[error("URL has no host")]
    MissingHost,

    /// The HTTP client failed before a response was received (DNS, TLS, connection reset, ...).
    #[cfg(feature = "reqwest")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The server responded, but not with a successful result.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a `<fault>`.
    #[error("fault: {0}")]
    Fault(Fault),

    /// The HTTP status code was not 200.
    ///
    /// `body` holds at most the first 200 characters of the response body.
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not a valid XML-RPC response.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Describes possible errors that can occur when parsing a response.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not a well-formed XML document.
    #[error("failed to parse response: {0}")]
    XmlError(#[from] XmlError),

    /// Could not parse the given text as XML-RPC value.
    ///
    /// For example, `<value><int>AAA</int></value>` describes an invalid value.
    #[error("invalid value for type '{for_type}': {found}")]
    InvalidValue {
        /// The type for which an invalid value was supplied (eg. `integer` or `double`).
        for_type: &'static str,
        /// The value we encountered, as a string.
        found: String,
    },

    /// A required element is missing.
    #[error("unexpected XML (expected {expected}{})", .found.as_ref().map(|f| format!(", found {}", f)).unwrap_or_default())]
    UnexpectedXml {
        /// A short description of the kind of data that was expected.
        expected: String,
        found: Option<String>,
    },

    /// The response contains neither `params` nor a `fault`.
    #[error("no params or fault found")]
    MissingResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn fault_accessor() {
        let err = Error::from(ApiError::Fault(Fault::new(403, "Access denied".into())));
        assert_eq!(err.fault().and_then(Fault::code_as_i64), Some(403));
        assert!(Error::validation("nothing to update").fault().is_none());
    }

    #[test]
    fn messages() {
        let err = Error::from(ApiError::HttpStatus { status: 404, body: "Not Found".into() });
        assert_eq!(err.to_string(), "API error: HTTP status 404: Not Found");

        let err = Error::from(ApiError::from(ParseError::MissingResult));
        assert_eq!(err.to_string(), "API error: no params or fault found");

        let err = Error::from(ApiError::Fault(Fault::from_value(&Value::Nil)));
        assert_eq!(err.to_string(), "API error: fault: Unknown error (Unknown)");

        let err = ParseError::UnexpectedXml { expected: "<name>".into(), found: None };
        assert_eq!(err.to_string(), "unexpected XML (expected <name>)");
    }
}
