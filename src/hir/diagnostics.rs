//! Diagnostics for recoverable resolution problems.
//!
//! A diagnostic never stops a resolution: the offending symbol is dropped
//! and the rest of the project is still exported.

use std::fmt;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A skipped symbol and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Diagnostic code (e.g., "W0001").
    pub code: &'static str,
    /// Full path of the symbol that was dropped.
    pub symbol: String,
    /// Raw type text that could not be resolved.
    pub type_name: String,
    pub message: String,
}

impl Diagnostic {
    /// A symbol whose type is neither primitive, internal, nor declared.
    pub fn unresolved_type(symbol: impl Into<String>, type_name: impl Into<String>) -> Self {
        let symbol = symbol.into();
        let type_name = type_name.into();
        Self {
            severity: Severity::Warning,
            code: codes::UNRESOLVED_TYPE,
            message: format!("\"{symbol}\" symbol of type <{type_name}> has been skipped"),
            symbol,
            type_name,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Standard diagnostic codes.
pub mod codes {
    /// Type name not found in primitives, internal catalog, or dictionary.
    pub const UNRESOLVED_TYPE: &str = "W0001";
}

/// Collects diagnostics during a resolution.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record and log a skipped symbol.
    pub fn unresolved_type(&mut self, symbol: &str, type_name: &str) {
        let diagnostic = Diagnostic::unresolved_type(symbol, type_name);
        tracing::info!("{}", diagnostic.message);
        self.add(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
