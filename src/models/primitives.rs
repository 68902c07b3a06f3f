//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A token ticker symbol (e.g., "SOL", "WIF").
///
/// Symbols are uppercased on construction so that `$wif` and `$WIF` name the
/// same token.
///
/// # Example
///
/// ```
/// use alpha_research::Symbol;
///
/// let symbol = Symbol::new("sol");
/// assert_eq!(symbol.as_str(), "SOL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol, uppercasing the input.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_uppercase())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The symbol in cashtag form (`$SOL`), as used in sentiment queries.
    pub fn cashtag(&self) -> String {
        format!("${}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
