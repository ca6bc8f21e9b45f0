//! Declaration model for Sysmac projects.
//!
//! ## Key Types
//!
//! - [`Primitive`] - The closed set of storage types a tag can carry
//! - [`TypeKind`] - Classification of a raw `BaseType` string, computed once
//! - [`TypeDeclaration`] - A named, typed declaration with its owned members
//! - [`GlobalVariable`] - One row of the global-variable dump
//! - [`ArrayType`] - A parsed `ARRAY[..] OF ..` descriptor
//! - [`ResolvedSymbol`] - A flattened, primitive-typed leaf ready for export

mod array;
mod declaration;
mod primitive;
mod symbol;

pub use array::{ArrayDimension, ArrayExpansion, ArrayType, ArrayTypeError, IndexTuples};
pub use declaration::{GlobalVariable, TypeDeclaration, TypeKind};
pub use primitive::Primitive;
pub use symbol::{ResolvedSymbol, SymbolType};
