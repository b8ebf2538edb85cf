use crate::utils::escape_xml;
use crate::Value;

use std::collections::BTreeMap;
use std::io::{self, Write};

/// A request to call a remote procedure.
///
/// The billing API takes exactly one argument per call: a struct of named parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Request<'a> {
    name: &'a str,
    param: Value,
}

impl<'a> Request<'a> {
    /// Creates a new request to call a function named `name` with an empty parameter struct.
    pub fn new(name: &'a str) -> Self {
        Request {
            name,
            param: Value::Struct(BTreeMap::new()),
        }
    }

    /// Replaces the parameter passed with this request.
    pub fn param<T: Into<Value>>(mut self, value: T) -> Self {
        self.param = value.into();
        self
    }

    /// The name of the called method.
    pub fn name(&self) -> &str {
        self.name
    }

    /// The single parameter sent with this request.
    pub fn params(&self) -> &Value {
        &self.param
    }

    /// Formats this `Request` as a UTF-8 encoded XML document.
    ///
    /// # Errors
    ///
    /// Any errors reported by the writer will be propagated to the caller. If the writer never
    /// returns an error, neither will this method.
    pub fn write_as_xml<W: Write>(&self, fmt: &mut W) -> io::Result<()> {
        write!(fmt, r#"<?xml version="1.0"?>"#)?;
        write!(fmt, r#"<methodCall>"#)?;
        write!(fmt, r#"<methodName>{}</methodName>"#, escape_xml(self.name))?;
        write!(fmt, r#"<params><param>"#)?;
        self.param.write_as_xml(fmt)?;
        write!(fmt, r#"</param></params>"#)?;
        write!(fmt, r#"</methodCall>"#)?;
        Ok(())
    }

    /// Serializes this `Request` into a buffer.
    pub fn to_xml(&self) -> Vec<u8> {
        let mut body = Vec::new();
        self.write_as_xml(&mut body)
            .expect("writing to a Vec<u8> cannot fail");
        body
    }
}
