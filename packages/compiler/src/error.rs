//! Compilation Errors

use thiserror::Error;

/// Errors raised while parsing template directives.
///
/// Each variant carries the offending source fragment for diagnostics. All
/// are fatal to the current compilation step; no partial results escape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// A comma inside an attribute spec segment. Commas are reserved; the
    /// list separator is the semicolon.
    #[error("attribute must not contain comma; use semicolon to list multiple attributes: {0:?}")]
    AmbiguousSeparator(String),

    /// An attribute spec segment with zero or more than two tokens.
    #[error("illegal i18n:attributes specification: {0:?}")]
    MalformedAttributeSpec(String),

    /// The same attribute named twice in one i18n:attributes declaration.
    #[error("attribute may only be specified once in i18n:attributes: {0:?}")]
    DuplicateAttribute(String),
}

pub type Result<T> = std::result::Result<T, CompilationError>;
