//! Parse Utilities
//!
//! Source-position metadata the parser attaches to value-bearing IR nodes.
//! Positions are used only for diagnostics, never for semantics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Line and column indexes are 1 based; `0:0` marks an unknown position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseLocation {
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(line: usize, col: usize) -> Self {
        ParseLocation { line, col }
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
