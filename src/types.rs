//! The Macchiato type universe

use serde::Serialize;
use std::fmt;

/// Types a Macchiato expression can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ty {
    Int,
    Bool,
    Str,
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ty::Int => "Int",
            Ty::Bool => "Bool",
            Ty::Str => "Str",
        };
        f.write_str(name)
    }
}
