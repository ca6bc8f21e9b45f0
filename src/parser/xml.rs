//! Owned XML element tree.
//!
//! Sysmac project files are small, so they are read whole into a tree and
//! queried with the few lookups the loaders need (attribute, direct
//! children, descendants in document order).

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::ParseError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One XML element with its attributes, child elements and text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<XmlElement>,
    /// Concatenated, trimmed text content.
    pub text: String,
}

impl XmlElement {
    /// Parse a document and return its root element.
    pub fn parse(input: &[u8]) -> Result<Self, ParseError> {
        let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = Self::from_start(e)?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| ParseError::xml("unbalanced closing tag"))?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| ParseError::xml(format!("Text error: {e}")))?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ParseError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(ParseError::xml(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| ParseError::missing_element("document root"))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self, ParseError> {
        let name = std::str::from_utf8(e.name().as_ref())
            .map_err(|e| ParseError::xml(format!("Invalid tag name: {e}")))?
            .to_string();

        let mut attributes = IndexMap::new();
        for attr_result in e.attributes() {
            let attr =
                attr_result.map_err(|e| ParseError::xml(format!("Attribute error: {e}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| ParseError::xml(format!("Attribute key error: {e}")))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| ParseError::xml(format!("Attribute value error: {e}")))?
                .into_owned();
            attributes.insert(key, value);
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => {
                // Only the first top-level element counts as the root.
                if root.is_none() {
                    *root = Some(element);
                }
            }
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// True when attribute `key` is present and equals `value`.
    pub fn has_attr(&self, key: &str, value: &str) -> bool {
        self.attr(key) == Some(value)
    }

    /// Direct children with tag `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// This element and all elements below it, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First element below this one with tag `name`.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.descendants().skip(1).find(|e| e.name == name)
    }
}

/// Pre-order walk over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
