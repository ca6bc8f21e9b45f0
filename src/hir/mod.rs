//! Symbol resolution: flattening published variables into primitive leaves.
//!
//! ## Key Types
//!
//! - [`TypeDictionary`] - Per-project map from qualified type name to declaration
//! - [`internal_types`] - Built-in vendor structures absent from project files
//! - [`Resolver`] - Worklist expansion of published globals
//! - [`Resolution`] - Sorted leaves plus recoverable diagnostics
//!
//! ## Pipeline
//!
//! ```text
//! DataType files ──► TypeDictionary ─┐
//!                                    ├──► Resolver ──► Resolution
//! variable dump  ──► GlobalVariable ─┘        ▲
//!                                             │
//!                               internal_types (struct members only)
//! ```

mod diagnostics;
mod dictionary;
pub mod internal_types;
mod resolve;

pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use dictionary::TypeDictionary;
pub use resolve::{Resolution, ResolveError, Resolver, resolve_published_symbols};

#[cfg(test)]
mod tests;
