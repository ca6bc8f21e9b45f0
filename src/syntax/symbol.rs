use std::fmt;

use super::array::{ArrayDimension, render_ranges};
use super::primitive::Primitive;

/// Export type of a leaf: a primitive, optionally with packed array ranges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolType {
    pub primitive: Primitive,
    /// Non-empty when a primitive array was kept whole.
    pub dimensions: Vec<ArrayDimension>,
}

impl SymbolType {
    pub fn scalar(primitive: Primitive) -> Self {
        Self {
            primitive,
            dimensions: Vec::new(),
        }
    }

    pub fn array(primitive: Primitive, dimensions: Vec<ArrayDimension>) -> Self {
        Self {
            primitive,
            dimensions,
        }
    }

    pub fn is_array(&self) -> bool {
        !self.dimensions.is_empty()
    }
}

impl From<Primitive> for SymbolType {
    fn from(primitive: Primitive) -> Self {
        Self::scalar(primitive)
    }
}

/// Renders `USINT` or `USINT[0..19,1..2]`.
impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimensions.is_empty() {
            write!(f, "{}", self.primitive)
        } else {
            write!(f, "{}[{}]", self.primitive, render_ranges(&self.dimensions))
        }
    }
}

/// A flattened leaf variable ready for export.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedSymbol {
    /// Full dotted/indexed path, e.g. `motor.status.Ready` or `aBuf[0,1]`.
    pub name: String,
    pub base_type: SymbolType,
    /// Comment of the declaration the leaf came from.
    pub comment: String,
}

impl ResolvedSymbol {
    pub fn new(
        name: impl Into<String>,
        base_type: impl Into<SymbolType>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_type: base_type.into(),
            comment: comment.into(),
        }
    }
}
