#![deny(clippy::all)]

//! TAL Template Compiler Core
//!
//! Intermediate representation and text-resolution layer of a compiler for
//! an attribute-language templating dialect with inline translation
//! directives. The parser produces [`nodes::Node`] trees; the code
//! generator walks them through [`nodes::Visitor`]; translation directives
//! resolve to display text through the [`i18n`] subsystem.

pub mod error;
pub mod i18n;
pub mod nodes;
pub mod parse_util;

pub use error::{CompilationError, Result};
