/// Errors raised while building, changing or translating a tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element or attribute name does not match the identifier grammar.
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    /// A structural rule was violated, for instance renaming the document.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// A child, a type name or a conversion could not be found.
    #[error("lookup failure: {0}")]
    LookupFailure(String),
    /// A converter or adapter failed for the named field or record.
    #[error("conversion failure for {name}: {message}")]
    ConversionFailure { name: String, message: String },
}

/// The error type converters and adapters report.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
