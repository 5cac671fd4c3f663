use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    /// A document could not be parsed as N-Triples
    #[error("Syntax error on line {line}: {message}")]
    Syntax {
        /// The 1-based line the error was found on
        line: usize,
        /// Description of what was expected
        message: String,
    },
}
