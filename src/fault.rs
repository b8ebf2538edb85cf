use crate::Value;

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Code reported when a `<fault>` struct has no `faultCode` member.
pub const UNKNOWN_FAULT_CODE: &str = "Unknown";
/// Message reported when a `<fault>` struct has no `faultString` member.
pub const UNKNOWN_FAULT_STRING: &str = "Unknown error";

/// A `<fault>` response, indicating that the server rejected a request.
///
/// The server is supposed to send a struct with an integer `faultCode` and a `faultString`, but
/// some deployments omit members. Missing members are replaced by `"Unknown"` and
/// `"Unknown error"` rather than failing the whole response.
#[derive(Clone, Debug, PartialEq)]
pub struct Fault {
    code: Value,
    string: String,
}

impl Fault {
    /// Creates a new `Fault` from an error code and a message.
    pub fn new(code: i64, string: String) -> Fault {
        Fault {
            code: Value::Int(code),
            string,
        }
    }

    /// Returns the fault code as received.
    ///
    /// This is normally a `Value::Int`, or `Value::String("Unknown")` if the server didn't send
    /// one.
    pub fn code(&self) -> &Value {
        &self.code
    }

    /// Returns the fault code if it is an integer.
    pub fn code_as_i64(&self) -> Option<i64> {
        self.code.as_i64()
    }

    /// Returns the error message.
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Creates a `Fault` from the decoded `<fault>` value.
    ///
    /// Never fails: anything that isn't a struct, or a struct missing members, yields the
    /// `"Unknown"` defaults for the missing parts. A non-string `faultString` is rendered as text.
    pub fn from_value(value: &Value) -> Self {
        let code = value
            .get("faultCode")
            .cloned()
            .unwrap_or_else(|| Value::from(UNKNOWN_FAULT_CODE));
        let string = match value.get("faultString") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => UNKNOWN_FAULT_STRING.to_string(),
        };

        Fault { code, string }
    }

    /// Turns this `Fault` into an equivalent `Value`.
    ///
    /// The returned value can be parsed back into a `Fault` using `Fault::from_value`.
    pub fn to_value(&self) -> Value {
        let mut map = BTreeMap::new();
        map.insert("faultCode".to_string(), self.code.clone());
        map.insert("faultString".to_string(), Value::from(self.string.as_str()));

        Value::Struct(map)
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.string, self.code)
    }
}

impl Error for Fault {}
