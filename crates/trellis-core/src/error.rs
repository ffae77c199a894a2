//! Error types.
//!
//! The class compilers are total functions: malformed style input
//! degrades to an empty or reduced class string instead of failing.
//! The only fallible operation in the core is parsing a breakpoint
//! token through [`FromStr`](std::str::FromStr).

use thiserror::Error;

/// A breakpoint token outside the fixed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown breakpoint token: {token}")]
pub struct ParseBreakpointError {
    /// The rejected token.
    pub token: String,
}
