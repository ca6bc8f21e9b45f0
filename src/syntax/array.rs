//! Array type descriptors: `ARRAY[<lo>..<hi>(, <lo>..<hi>)*] OF <type>`.

use std::fmt;

use thiserror::Error;

use crate::base::constants::ARRAY_PREFIX;

use super::declaration::{TypeDeclaration, TypeKind};
use super::symbol::{ResolvedSymbol, SymbolType};

const ELEMENT_SEPARATOR: &str = "] OF ";
const RANGE_SEPARATOR: &str = "..";

/// Malformed array descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArrayTypeError {
    #[error("expected `ARRAY[a..b(, c..d)] OF TYPE`, got `{0}`")]
    MissingPrefix(String),

    #[error("missing `] OF <type>` in `{0}`")]
    MissingElementType(String),

    #[error("invalid range `{0}`")]
    InvalidRange(String),

    #[error("invalid bound `{bound}` in range `{range}`")]
    InvalidBound { range: String, bound: String },

    #[error("range `{lower}..{upper}` has its lower bound above its upper bound")]
    InvertedRange { lower: i64, upper: i64 },
}

/// Inclusive index range of one array dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayDimension {
    pub lower: i64,
    pub upper: i64,
}

impl ArrayDimension {
    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    pub fn size(&self) -> u64 {
        if self.upper < self.lower {
            0
        } else {
            self.upper.abs_diff(self.lower) + 1
        }
    }

    fn parse(range: &str) -> Result<Self, ArrayTypeError> {
        let (lower, upper) = range
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| ArrayTypeError::InvalidRange(range.to_string()))?;
        let bound = |text: &str| {
            text.trim()
                .parse::<i64>()
                .map_err(|_| ArrayTypeError::InvalidBound {
                    range: range.to_string(),
                    bound: text.to_string(),
                })
        };
        let (lower, upper) = (bound(lower)?, bound(upper)?);
        if lower > upper {
            return Err(ArrayTypeError::InvertedRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }
}

impl fmt::Display for ArrayDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{RANGE_SEPARATOR}{}", self.lower, self.upper)
    }
}

/// Render dimensions as `0..19,1..2`.
pub(crate) fn render_ranges(dimensions: &[ArrayDimension]) -> String {
    dimensions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// A parsed array descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayType {
    dimensions: Vec<ArrayDimension>,
    element_type: String,
    element_kind: TypeKind,
}

/// Result of expanding an array-typed declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayExpansion {
    /// Primitive elements: a single leaf carrying the ranges in its type.
    Packed(ResolvedSymbol),
    /// Non-primitive elements: one declaration per index tuple, still to expand.
    Elements(Vec<TypeDeclaration>),
}

impl ArrayType {
    pub fn parse(raw: &str) -> Result<Self, ArrayTypeError> {
        let rest = raw
            .get(..ARRAY_PREFIX.len())
            .filter(|head| head.eq_ignore_ascii_case(ARRAY_PREFIX))
            .map(|_| &raw[ARRAY_PREFIX.len()..])
            .ok_or_else(|| ArrayTypeError::MissingPrefix(raw.to_string()))?;

        // ASCII upper-casing keeps byte offsets, so `split` indexes `rest` too.
        let split = rest
            .to_ascii_uppercase()
            .rfind(ELEMENT_SEPARATOR)
            .filter(|&at| at > 0)
            .ok_or_else(|| ArrayTypeError::MissingElementType(raw.to_string()))?;

        let element_type = rest[split + ELEMENT_SEPARATOR.len()..]
            .split_whitespace()
            .next()
            .ok_or_else(|| ArrayTypeError::MissingElementType(raw.to_string()))?;

        let dimensions = rest[..split]
            .split(',')
            .map(|range| ArrayDimension::parse(range.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            dimensions,
            element_kind: TypeKind::classify(element_type),
            element_type: element_type.to_string(),
        })
    }

    pub fn dimensions(&self) -> &[ArrayDimension] {
        &self.dimensions
    }

    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    pub fn element_kind(&self) -> TypeKind {
        self.element_kind
    }

    /// Total number of cells.
    pub fn len(&self) -> u64 {
        self.dimensions.iter().map(ArrayDimension::size).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index tuples in row-major order, first dimension slowest.
    pub fn indices(&self) -> IndexTuples {
        IndexTuples::new(&self.dimensions)
    }

    /// Expand `declaration`, whose type is this array.
    ///
    /// Primitive elements are never enumerated: the declaration becomes a
    /// single leaf typed `ELEM[ranges]`. Other elements yield one
    /// declaration per index tuple, named `name[i,j,..]` and typed with the
    /// element type.
    pub fn expand(&self, declaration: &TypeDeclaration) -> ArrayExpansion {
        if let Some(primitive) = self.element_kind.primitive() {
            return ArrayExpansion::Packed(ResolvedSymbol::new(
                declaration.name(),
                SymbolType::array(primitive, self.dimensions.clone()),
                declaration.comment(),
            ));
        }

        let elements = self
            .indices()
            .map(|index| {
                let index = index
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                declaration.with_name_and_type(
                    format!("{}[{index}]", declaration.name()),
                    &self.element_type,
                )
            })
            .collect();
        ArrayExpansion::Elements(elements)
    }
}

/// Cartesian product of dimension ranges, last dimension varying fastest.
#[derive(Clone, Debug)]
pub struct IndexTuples {
    dimensions: Vec<ArrayDimension>,
    next: Option<Vec<i64>>,
}

impl IndexTuples {
    fn new(dimensions: &[ArrayDimension]) -> Self {
        let first = dimensions
            .iter()
            .all(|d| d.lower <= d.upper)
            .then(|| dimensions.iter().map(|d| d.lower).collect::<Vec<_>>())
            .filter(|start| !start.is_empty());
        Self {
            dimensions: dimensions.to_vec(),
            next: first,
        }
    }
}

impl Iterator for IndexTuples {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut successor = current.clone();
        let mut advanced = false;
        for (slot, dim) in successor.iter_mut().zip(&self.dimensions).rev() {
            if *slot < dim.upper {
                *slot += 1;
                advanced = true;
                break;
            }
            *slot = dim.lower;
        }
        // No slot advanced: `current` was the last tuple.
        if advanced {
            self.next = Some(successor);
        }
        Some(current)
    }
}
