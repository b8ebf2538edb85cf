use crate::error::{ApiError, BoxError, ConnectionError, Error};
use crate::parser::parse_response;
use crate::{Request, Transport, Value};

#[cfg(feature = "http")]
use crate::transport::http::DigestTransport;

use tracing::{debug, warn};

use std::env;

/// Environment variable holding the endpoint URL for [`ClientConfig::from_env`].
pub const URL_ENV: &str = "XMLAPI_URL";
/// Environment variable that disables TLS verification when set to `0` or `false`.
pub const VERIFY_SSL_ENV: &str = "XMLAPI_VERIFY_SSL";

/// Connection settings for a [`Client`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// `https://{user}:{pass}@{host}/xmlapi/xmlapi`
    pub url: String,
    /// Whether to verify the server's TLS certificate and hostname.
    pub verify_ssl: bool,
}

impl ClientConfig {
    pub fn new<S: Into<String>>(url: S) -> Self {
        ClientConfig {
            url: url.into(),
            verify_ssl: true,
        }
    }

    /// Reads the configuration from `XMLAPI_URL` and `XMLAPI_VERIFY_SSL`.
    pub fn from_env() -> Result<Self, Error> {
        let url = env::var(URL_ENV)
            .map_err(|_| ConnectionError::InvalidUrl(format!("environment variable {} is not set", URL_ENV)))?;
        let verify_ssl = match env::var(VERIFY_SSL_ENV) {
            Ok(value) => parse_flag(&value),
            Err(_) => true,
        };

        Ok(ClientConfig { url, verify_ssl })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
}

/// A client for the billing API.
///
/// Every call is a blocking round trip. The client holds no mutable state, so it can be shared
/// between threads (given a `Sync` transport) and any number of independent clients can coexist.
#[derive(Debug, Clone)]
pub struct Client<T = DefaultTransport> {
    transport: T,
}

/// The transport used by [`Client::new`].
#[cfg(feature = "http")]
pub type DefaultTransport = DigestTransport;
/// Placeholder when the `http` feature is disabled; use [`Client::with_transport`].
#[cfg(not(feature = "http"))]
pub type DefaultTransport = ();

#[cfg(feature = "http")]
impl Client<DigestTransport> {
    /// Creates a client for the endpoint `url`, which carries the Digest credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectionError`] if the URL is malformed or has no host, or if the HTTP
    /// client cannot be set up.
    pub fn new(url: &str, verify_ssl: bool) -> Result<Self, Error> {
        Ok(Client::with_transport(DigestTransport::new(url, verify_ssl)?))
    }

    /// Creates a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Client::new(&config.url, config.verify_ssl)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Client { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Calls `method` with a single struct of named parameters.
    ///
    /// # Errors
    ///
    /// A [`ConnectionError`] or [`ApiError`] (including a server [`Fault`](crate::Fault)) is
    /// returned as is. Any other failure is returned as [`Error::Call`], carrying the method
    /// name.
    pub fn call<P: Into<Value>>(&self, method: &str, params: P) -> Result<Value, Error> {
        let request = Request::new(method).param(params);
        debug!(method, "calling API method");

        let body = self
            .transport
            .transmit(&request)
            .map_err(|err| classify(method, err))?;

        let response = parse_response(&body[..]).map_err(ApiError::from)?;
        match response {
            Ok(value) => Ok(value),
            Err(fault) => {
                warn!(method, code = %fault.code(), message = fault.string(), "API call returned a fault");
                Err(ApiError::Fault(fault).into())
            }
        }
    }
}

/// Sorts a transport error into the error taxonomy.
fn classify(method: &str, err: BoxError) -> Error {
    let err = match err.downcast::<ApiError>() {
        Ok(api) => return Error::Api(*api),
        Err(err) => err,
    };
    let err = match err.downcast::<ConnectionError>() {
        Ok(connection) => return Error::Connection(*connection),
        Err(err) => err,
    };
    match err.downcast::<Error>() {
        Ok(error) => *error,
        Err(source) => Error::Call {
            method: method.to_string(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fault, ParseError};

    use std::cell::RefCell;
    use std::io;

    struct Canned {
        response: RefCell<Option<Result<Vec<u8>, BoxError>>>,
        sent: RefCell<Vec<Vec<u8>>>,
    }

    impl Canned {
        fn new(response: Result<&str, BoxError>) -> Self {
            Canned {
                response: RefCell::new(Some(response.map(|s| s.as_bytes().to_vec()))),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Canned {
        fn transmit(&self, request: &Request) -> Result<Vec<u8>, BoxError> {
            self.sent.borrow_mut().push(request.to_xml());
            self.response.borrow_mut().take().expect("transmit called twice")
        }
    }

    #[test]
    fn returns_decoded_value() {
        let transport = Canned::new(Ok("<methodResponse><params><param><value><struct>\
            <member><name>result</name><value><string>OK</string></value></member>\
            </struct></value></param></params></methodResponse>"));
        let client = Client::with_transport(&transport);

        let value = client.call("getAccountInfo", Value::Nil).unwrap();
        assert_eq!(value.get("result"), Some(&Value::from("OK")));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn reports_faults() {
        let transport = Canned::new(Ok("<methodResponse><fault><value><struct>\
            <member><name>faultCode</name><value><int>404</int></value></member>\
            <member><name>faultString</name><value><string>Account not found</string></value></member>\
            </struct></value></fault></methodResponse>"));
        let err = Client::with_transport(transport).call("getAccountInfo", Value::Nil).unwrap_err();

        assert_eq!(err.fault(), Some(&Fault::new(404, "Account not found".into())));
    }

    #[test]
    fn reports_unparseable_body() {
        let transport = Canned::new(Ok("<html><body>oops"));
        let err = Client::with_transport(transport).call("listAccounts", Value::Nil).unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Parse(ParseError::XmlError(_)))));
        assert!(err.to_string().contains("failed to parse response"));
    }

    #[test]
    fn reports_missing_result() {
        let transport = Canned::new(Ok("<methodResponse/>"));
        let err = Client::with_transport(transport).call("listAccounts", Value::Nil).unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Parse(ParseError::MissingResult))));
    }

    #[test]
    fn passes_api_and_connection_errors_through() {
        let status = ApiError::HttpStatus { status: 500, body: "boom".into() };
        let transport = Canned::new(Err(Box::new(status)));
        let err = Client::with_transport(transport).call("listAccounts", Value::Nil).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::HttpStatus { status: 500, .. })));

        let transport = Canned::new(Err(Box::new(ConnectionError::MissingHost)));
        let err = Client::with_transport(transport).call("listAccounts", Value::Nil).unwrap_err();
        assert!(matches!(err, Error::Connection(ConnectionError::MissingHost)));
    }

    #[test]
    fn wraps_other_errors_with_method_name() {
        let transport = Canned::new(Err(Box::new(io::Error::new(io::ErrorKind::Other, "digest"))));
        let err = Client::with_transport(transport).call("accountDebit", Value::Nil).unwrap_err();

        match err {
            Error::Call { ref method, .. } => assert_eq!(method, "accountDebit"),
            ref other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "error calling accountDebit: digest");
    }

    #[test]
    fn parses_verify_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(" False "));
    }
}
