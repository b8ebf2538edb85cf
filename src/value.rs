//! Contains the different types of values understood by the billing API.

use crate::utils::escape_xml;

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

/// The possible XML-RPC values.
///
/// The same type is used for request parameters and for decoded responses.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `<nil/>`, the absence of a value.
    ///
    /// The API uses this to "unset" a field in update calls.
    Nil,
    /// `<boolean>`, 0 == `false`, 1 == `true`.
    Bool(bool),
    /// `<int>`, `<i4>` or `<i8>` when decoding. Always written as `<int>`.
    Int(i64),
    /// `<double>`
    ///
    /// Infinity and NaN have no XML-RPC representation; the typed API rejects them before
    /// sending, `write_as_xml` writes them as Rust formats them.
    Double(f64),
    /// `<string>`
    ///
    /// Characters XML 1.0 does not allow (most C0 controls, U+FFFE and U+FFFF) are written as
    /// U+FFFD, so such a string does not survive a round trip unchanged.
    String(String),
    /// `<array>`, a list of arbitrary (heterogeneous) values.
    ///
    /// An empty array is written as an empty `<struct>`, which is what the server expects for
    /// empty parameter sets. It will therefore come back as an empty `Value::Struct`.
    Array(Vec<Value>),
    /// `<struct>`, a mapping of named values.
    Struct(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` if this is `Value::Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(*self, Value::Nil)
    }

    /// If `self` is a `Value::Bool`, returns the contained value.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// If `self` is a `Value::Int`, returns the contained value.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }

    /// If `self` is a `Value::Double` (or a `Value::Int`), returns it as an `f64`.
    ///
    /// Balances and amounts come back as either, depending on the server.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Double(d) => Some(d),
            Value::Int(i) => Some(i as f64),
            _ => None,
        }
    }

    /// If `self` is a `Value::String`, returns it as a `&str`.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::String(ref s) => Some(s),
            _ => None,
        }
    }

    /// If `self` is a `Value::Array`, returns the elements.
    pub fn as_array(&self) -> Option<&[Value]> {
        match *self {
            Value::Array(ref array) => Some(array),
            _ => None,
        }
    }

    /// If `self` is a `Value::Struct`, returns the members.
    pub fn as_struct(&self) -> Option<&BTreeMap<String, Value>> {
        match *self {
            Value::Struct(ref map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a struct member by name.
    ///
    /// Returns `None` if `self` is not a struct or has no member called `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_struct().and_then(|map| map.get(key))
    }

    /// Formats this `Value` as an XML `<value>` element.
    pub fn write_as_xml<W: Write>(&self, fmt: &mut W) -> io::Result<()> {
        write!(fmt, "<value>")?;

        match *self {
            Value::Nil => {
                write!(fmt, "<nil/>")?;
            }
            Value::Bool(b) => {
                write!(fmt, "<boolean>{}</boolean>", if b { "1" } else { "0" })?;
            }
            Value::Int(i) => {
                write!(fmt, "<int>{}</int>", i)?;
            }
            Value::Double(d) => {
                write!(fmt, "<double>{}</double>", d)?;
            }
            Value::String(ref s) => {
                write!(fmt, "<string>{}</string>", escape_xml(s))?;
            }
            Value::Array(ref array) if array.is_empty() => {
                write!(fmt, "<struct></struct>")?;
            }
            Value::Array(ref array) => {
                write!(fmt, "<array><data>")?;
                for value in array {
                    value.write_as_xml(fmt)?;
                }
                write!(fmt, "</data></array>")?;
            }
            Value::Struct(ref map) => {
                write!(fmt, "<struct>")?;
                for (name, value) in map {
                    write!(fmt, "<member><name>{}</name>", escape_xml(name))?;
                    value.write_as_xml(fmt)?;
                    write!(fmt, "</member>")?;
                }
                write!(fmt, "</struct>")?;
            }
        }

        write!(fmt, "</value>")?;
        Ok(())
    }
}

/// Renders scalars as their plain text, the way they appear on the wire.
///
/// Containers use a compact debug-like notation.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{}", d),
            Value::String(ref s) => write!(f, "{}", s),
            Value::Array(ref array) => {
                write!(f, "[")?;
                for (i, value) in array.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Value::Struct(ref map) => {
                write!(f, "{{")?;
                for (i, (name, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<i32> for Value {
    fn from(other: i32) -> Self {
        Value::Int(other.into())
    }
}

impl From<i64> for Value {
    fn from(other: i64) -> Self {
        Value::Int(other)
    }
}

impl From<u32> for Value {
    fn from(other: u32) -> Self {
        Value::Int(other.into())
    }
}

impl From<bool> for Value {
    fn from(other: bool) -> Self {
        Value::Bool(other)
    }
}

impl From<String> for Value {
    fn from(other: String) -> Self {
        Value::String(other)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(other: &'a str) -> Self {
        Value::String(other.to_string())
    }
}

impl<'a> From<&'a String> for Value {
    fn from(other: &'a String) -> Self {
        Value::String(other.clone())
    }
}

impl From<f64> for Value {
    fn from(other: f64) -> Self {
        Value::Double(other)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(other: Option<T>) -> Self {
        match other {
            Some(value) => value.into(),
            None => Value::Nil,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(other: Vec<T>) -> Self {
        Value::Array(other.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(other: BTreeMap<String, T>) -> Self {
        Value::Struct(other.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
