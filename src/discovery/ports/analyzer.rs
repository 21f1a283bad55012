//! Port for static source analysis.

use crate::discovery::domain::SourceAnalysis;
use thiserror::Error;

/// Extracts declared symbols from source text without executing it.
pub trait SourceAnalyzer: Send + Sync {
    /// Analyses `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the text is not syntactically valid or the
    /// parser cannot run.
    fn analyze(&self, source: &str) -> Result<SourceAnalysis, ParseError>;
}

/// Marker for a file that cannot be analysed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The source contains a syntax error.
    #[error("syntax error at line {line}, column {column}")]
    Syntax {
        /// One-based line of the first error.
        line: usize,
        /// One-based column of the first error.
        column: usize,
    },

    /// The grammar could not be loaded into the parser.
    #[error("parser grammar unavailable: {0}")]
    Grammar(String),

    /// The parser gave up without producing a tree.
    #[error("parser produced no syntax tree")]
    Aborted,
}
