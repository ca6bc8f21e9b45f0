//! # sysmac-export
//!
//! Reads OMRON Sysmac Studio projects and flattens their network-published
//! global variables into primitive leaves for HMI tag files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → Tag-file export (Windows-1252, tab-delimited)
//!   ↓
//! project     → Solution discovery, metadata, declaration files
//!   ↓
//! hir         → Type dictionary, internal catalog, resolution engine
//!   ↓
//! syntax      → Declarations, primitives, array descriptors, resolved symbols
//!   ↓
//! parser      → XML element tree, data-type files, variable dump
//!   ↓
//! base        → Format constants
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → project → interchange)
// ============================================================================

/// Foundation: fixed values of the project format
pub mod base;

/// Parser: quick-xml element tree, data-type files, variable dump
pub mod parser;

/// Syntax: declarations, type classification, array descriptors
pub mod syntax;

/// Resolution: type dictionary and worklist expansion
pub mod hir;

/// Project management: discovery, metadata, on-demand loading
pub mod project;

/// Tag-file export
pub mod interchange;

// Re-export the types a host application needs
pub use hir::{Diagnostic, Resolution, ResolveError, TypeDictionary, resolve_published_symbols};
pub use interchange::{InterchangeError, TagFile, TagFileOptions, TagLink};
pub use project::{Project, ProjectError, ProjectInfo, SolutionRoot, discover_projects};
pub use syntax::{GlobalVariable, Primitive, ResolvedSymbol, SymbolType, TypeDeclaration};
