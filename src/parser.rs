//! XML-RPC response parser.
//!
//! The response body is first read into a small element tree, so that a malformed document is
//! rejected as a whole before any value is looked at. Values are then decoded from the tree.

use crate::error::ParseError;
use crate::{Fault, Value};

use xml::reader::{EventReader, XmlEvent};
use xml::ParserConfig;

use std::collections::BTreeMap;
use std::io::Read;

pub type ParseResult<T> = Result<T, ParseError>;

/// The outcome of a well-formed response: the returned value, or the server's fault.
pub type Response = Result<Value, Fault>;

/// An XML element with its child elements and text.
///
/// Attributes, comments and processing instructions are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    fn new(name: String) -> Self {
        Element {
            name,
            children: Vec::new(),
        }
    }

    /// The local name of this element (without namespace prefix).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over the child elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match *node {
            Node::Element(ref element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Returns the first child element called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    /// Follows a path of child element names, taking the first match at every step.
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |element, name| element.child(name))
    }

    /// Concatenates the text directly inside this element (not inside its children).
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            if let Node::Text(ref s) = *node {
                text.push_str(s);
            }
        }
        text
    }
}

/// Reads a complete XML document into an `Element` tree.
///
/// Fails if the document is not well-formed.
pub fn parse_document<R: Read>(reader: R) -> ParseResult<Element> {
    let config = ParserConfig::new()
        .cdata_to_characters(true)
        .whitespace_to_characters(true)
        .coalesce_characters(true);
    let mut reader = EventReader::new_with_config(reader, config);

    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        match reader.next()? {
            XmlEvent::StartElement { name, .. } => {
                stack.push(Element::new(name.local_name));
            }
            XmlEvent::EndElement { .. } => {
                // The reader guarantees balanced tags, so there is always an open element here.
                if let Some(element) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Element(element)),
                        None => root = Some(element),
                    }
                }
            }
            XmlEvent::Characters(text) => {
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Text(text));
                }
            }
            XmlEvent::EndDocument => break,
            _ => {}
        }
    }

    root.ok_or(ParseError::UnexpectedXml {
        expected: "root element".to_string(),
        found: None,
    })
}

/// Decodes a `<value>` element.
///
/// The first recognized type tag wins, in this order: `nil`, `struct`, `array`, `string`,
/// `int`/`i4`/`i8`, `double`, `boolean`. Without any of them, the text of the `<value>` itself is
/// returned as a string.
///
/// Numbers and booleans are read with surrounding whitespace trimmed; a boolean is `true` only if
/// its text is `1`.
pub fn parse_value(value: &Element) -> ParseResult<Value> {
    fn invalid_value(for_type: &'static str, found: String) -> ParseError {
        ParseError::InvalidValue { for_type, found }
    }

    if value.child("nil").is_some() {
        return Ok(Value::Nil);
    }

    if let Some(members) = value.child("struct") {
        let mut map = BTreeMap::new();
        for member in members.elements().filter(|e| e.name() == "member") {
            let name = member.child("name").ok_or_else(|| ParseError::UnexpectedXml {
                expected: "<name> in <member>".to_string(),
                found: None,
            })?;
            let inner = member.child("value").ok_or_else(|| ParseError::UnexpectedXml {
                expected: "<value> in <member>".to_string(),
                found: Some(name.text()),
            })?;
            map.insert(name.text(), parse_value(inner)?);
        }
        return Ok(Value::Struct(map));
    }

    if let Some(array) = value.child("array") {
        let elements = match array.child("data") {
            Some(data) => data
                .elements()
                .filter(|e| e.name() == "value")
                .map(parse_value)
                .collect::<ParseResult<Vec<_>>>()?,
            None => Vec::new(),
        };
        return Ok(Value::Array(elements));
    }

    if let Some(string) = value.child("string") {
        return Ok(Value::String(string.text()));
    }

    if let Some(int) = value.child("int").or_else(|| value.child("i4")).or_else(|| value.child("i8")) {
        let data = int.text();
        return data
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| invalid_value("integer", data));
    }

    if let Some(double) = value.child("double") {
        let data = double.text();
        return data
            .trim()
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| invalid_value("double", data));
    }

    if let Some(boolean) = value.child("boolean") {
        return Ok(Value::Bool(boolean.text().trim() == "1"));
    }

    Ok(Value::String(value.text()))
}

/// Decodes a `<methodResponse>` document.
///
/// A `fault/value` takes precedence over `params`, even if both are present. Only the first
/// parameter is read.
pub fn parse_response_document(root: &Element) -> ParseResult<Response> {
    if let Some(fault) = root.find(&["fault", "value"]) {
        let value = parse_value(fault)?;
        return Ok(Err(Fault::from_value(&value)));
    }

    match root.find(&["params", "param", "value"]) {
        Some(value) => Ok(Ok(parse_value(value)?)),
        None => Err(ParseError::MissingResult),
    }
}

/// Parses a response from an XML reader.
pub fn parse_response<R: Read>(reader: R) -> ParseResult<Response> {
    let root = parse_document(reader)?;
    parse_response_document(&root)
}
