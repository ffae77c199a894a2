//! The breakpoint registry: the fixed set of responsive-width tokens
//! and the suffix rule used when building utility class names.

use crate::error::ParseBreakpointError;
use std::fmt;
use std::str::FromStr;

/// A named responsive-width threshold.
///
/// Breakpoints have a fixed total order (`default < xs < sm < md < lg
/// < xl < xxl`) which is also the order compiled class strings are
/// emitted in. `default` and `xs` are the "general" breakpoints: they
/// receive no suffix in generated class names (`m-2`, not `m-xs-2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    Default,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// Every recognized breakpoint, in registry order.
    pub const ALL: [Breakpoint; 7] = [
        Breakpoint::Default,
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// The token as it appears in input maps.
    pub fn token(&self) -> &'static str {
        match self {
            Breakpoint::Default => "default",
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }

    /// The suffix spliced into generated class names: empty for the
    /// general breakpoints, `"-{token}"` otherwise.
    pub fn suffix(&self) -> &'static str {
        match self {
            Breakpoint::Default | Breakpoint::Xs => "",
            Breakpoint::Sm => "-sm",
            Breakpoint::Md => "-md",
            Breakpoint::Lg => "-lg",
            Breakpoint::Xl => "-xl",
            Breakpoint::Xxl => "-xxl",
        }
    }

    /// Whether this breakpoint collapses to no suffix in class names.
    pub fn is_general(&self) -> bool {
        matches!(self, Breakpoint::Default | Breakpoint::Xs)
    }

    /// Look up a breakpoint token, returning `None` for anything
    /// outside the registry.
    ///
    /// This is the permissive entry point used when consuming input
    /// maps: unknown tokens are dropped, never an error.
    pub fn parse(token: &str) -> Option<Breakpoint> {
        match token {
            "default" => Some(Breakpoint::Default),
            "xs" => Some(Breakpoint::Xs),
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            "xxl" => Some(Breakpoint::Xxl),
            _ => None,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::parse(s).ok_or_else(|| ParseBreakpointError {
            token: s.to_string(),
        })
    }
}
