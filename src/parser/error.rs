use thiserror::Error;

/// Errors raised while reading project files.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML syntax or encoding error.
    #[error("XML error: {0}")]
    Xml(String),

    /// A dump line lacks a required field.
    #[error("line {line}: missing `{key}` field")]
    MissingField { line: usize, key: &'static str },

    /// Missing required element or attribute.
    #[error("missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }

    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "attribute",
            name: name.into(),
        }
    }
}
