//! Resolution engine: worklist expansion of published globals.
//!
//! # Algorithm
//!
//! 1. **Seeding** - Every global whose publication scope is
//!    `PublicationOnly` is classified: primitives are done, arrays are
//!    expanded, dictionary types are queued, anything else is skipped.
//! 2. **Draining** - Queued items are popped one at a time. Enumerations
//!    become `DINT` leaves; structures queue one item per member, named
//!    `parent.member`. A member typed with an internal type is replaced by
//!    the catalog members re-rooted under the member path.
//! 3. **Sorting** - Leaves are sorted by name (byte order).
//!
//! The worklist is a stack, so expansion is depth-first. Pop order is not
//! observable once the leaves are sorted.
//!
//! Expansion does not detect cycles: a self-referencing structure never
//! terminates.

use thiserror::Error;

use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::dictionary::TypeDictionary;
use super::internal_types;
use crate::syntax::{
    ArrayExpansion, ArrayType, ArrayTypeError, GlobalVariable, Primitive, ResolvedSymbol,
    TypeDeclaration, TypeKind,
};

/// Fatal resolution failures. Any of these aborts the whole project.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Array descriptor that does not follow the `ARRAY[..] OF ..` grammar.
    #[error("symbol `{symbol}`: {source}")]
    ArrayFormat {
        symbol: String,
        #[source]
        source: ArrayTypeError,
    },

    /// Internal type used directly by a global or as an array element.
    #[error("symbol `{symbol}`: internal type `{type_name}` is not supported here")]
    InternalTypeUnsupported { symbol: String, type_name: String },
}

impl ResolveError {
    /// Path of the symbol that failed.
    pub fn symbol(&self) -> &str {
        match self {
            ResolveError::ArrayFormat { symbol, .. }
            | ResolveError::InternalTypeUnsupported { symbol, .. } => symbol,
        }
    }
}

/// Outcome of a resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Leaves sorted by name.
    pub symbols: Vec<ResolvedSymbol>,
    /// Symbols dropped because their type could not be resolved.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve the published globals of one project.
pub fn resolve_published_symbols(
    dictionary: &TypeDictionary,
    globals: &[GlobalVariable],
) -> Result<Resolution, ResolveError> {
    Resolver::new(dictionary).resolve(globals)
}

/// Worklist state for one resolution.
pub struct Resolver<'a> {
    dictionary: &'a TypeDictionary,
    done: Vec<ResolvedSymbol>,
    pending: Vec<TypeDeclaration>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Resolver<'a> {
    pub fn new(dictionary: &'a TypeDictionary) -> Self {
        Self {
            dictionary,
            done: Vec::new(),
            pending: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    pub fn resolve(mut self, globals: &[GlobalVariable]) -> Result<Resolution, ResolveError> {
        for global in globals.iter().filter(|g| g.is_published()) {
            let Some(declaration) = self.settle(global.to_declaration())? else {
                continue;
            };
            if self.dictionary.contains(declaration.data_type()) {
                self.pending.push(declaration);
            } else {
                self.skip(&declaration);
            }
        }

        while let Some(item) = self.pending.pop() {
            tracing::trace!("Expanding {} <{}>", item.name(), item.data_type());
            let Some(item) = self.settle(item)? else {
                continue;
            };
            self.expand_user_type(item)?;
        }

        let Self {
            mut done,
            diagnostics,
            ..
        } = self;
        done.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(
            "Resolved {} symbols, skipped {}",
            done.len(),
            diagnostics.len()
        );
        Ok(Resolution {
            symbols: done,
            diagnostics: diagnostics.into_vec(),
        })
    }

    /// Handle everything that does not need the dictionary.
    ///
    /// Returns the declaration back when it must be looked up.
    fn settle(
        &mut self,
        declaration: TypeDeclaration,
    ) -> Result<Option<TypeDeclaration>, ResolveError> {
        match declaration.kind() {
            TypeKind::Primitive(primitive) => {
                self.emit(&declaration, primitive);
                Ok(None)
            }
            TypeKind::InternalStruct => Err(ResolveError::InternalTypeUnsupported {
                symbol: declaration.name().to_string(),
                type_name: declaration.data_type().to_string(),
            }),
            TypeKind::Array => {
                self.expand_array(&declaration)?;
                Ok(None)
            }
            TypeKind::Struct | TypeKind::Enum | TypeKind::Reference => Ok(Some(declaration)),
        }
    }

    fn expand_array(&mut self, declaration: &TypeDeclaration) -> Result<(), ResolveError> {
        let array =
            ArrayType::parse(declaration.data_type()).map_err(|source| {
                ResolveError::ArrayFormat {
                    symbol: declaration.name().to_string(),
                    source,
                }
            })?;

        if array.element_kind() == TypeKind::InternalStruct {
            return Err(ResolveError::InternalTypeUnsupported {
                symbol: declaration.name().to_string(),
                type_name: array.element_type().to_string(),
            });
        }

        match array.expand(declaration) {
            ArrayExpansion::Packed(symbol) => self.done.push(symbol),
            ArrayExpansion::Elements(elements) => self.pending.extend(elements),
        }
        Ok(())
    }

    fn expand_user_type(&mut self, item: TypeDeclaration) -> Result<(), ResolveError> {
        let dictionary = self.dictionary;
        let Some(definition) = dictionary.get(item.data_type()) else {
            self.skip(&item);
            return Ok(());
        };

        match definition.kind() {
            TypeKind::Enum => {
                self.emit(&item, Primitive::ENUM_STORAGE);
                Ok(())
            }
            TypeKind::Struct => self.expand_members(&item, definition.members()),
            _ => {
                self.skip(&item);
                Ok(())
            }
        }
    }

    fn expand_members(
        &mut self,
        parent: &TypeDeclaration,
        members: &[TypeDeclaration],
    ) -> Result<(), ResolveError> {
        for member in members {
            let nested = member.nested_under(parent.name());
            match nested.kind() {
                TypeKind::Primitive(primitive) => self.emit(&nested, primitive),
                TypeKind::InternalStruct => {
                    let internal = internal_types::lookup(nested.data_type()).ok_or_else(|| {
                        ResolveError::InternalTypeUnsupported {
                            symbol: nested.name().to_string(),
                            type_name: nested.data_type().to_string(),
                        }
                    })?;
                    self.pending.extend(
                        internal
                            .members()
                            .iter()
                            .map(|field| field.nested_under(nested.name())),
                    );
                }
                _ => self.pending.push(nested),
            }
        }
        Ok(())
    }

    fn emit(&mut self, declaration: &TypeDeclaration, primitive: Primitive) {
        self.done.push(ResolvedSymbol::new(
            declaration.name(),
            primitive,
            declaration.comment(),
        ));
    }

    fn skip(&mut self, declaration: &TypeDeclaration) {
        self.diagnostics
            .unresolved_type(declaration.name(), declaration.data_type());
    }
}
