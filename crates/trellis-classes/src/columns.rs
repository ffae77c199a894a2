//! The column and span compilers.
//!
//! A container declares per-breakpoint column counts; a child declares
//! per-breakpoint spans. The child's effective width classes are the
//! delta between the two: `remaining = parent - span`, clamped to a
//! minimum of one column so a non-positive count is never emitted.

use crate::expand::expand;
use indexmap::IndexMap;
use smallvec::SmallVec;
use trellis_core::{Breakpoint, Responsive};

/// Class prefix shared by column-count and width classes.
pub const COLUMN_CLASS_PREFIX: &str = "split-col";

/// Per-breakpoint column-count declarations for a container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSpec {
    counts: IndexMap<Breakpoint, i64>,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no column count has been declared.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Declare column counts; a bare integer sets the `default` entry.
    ///
    /// Non-positive counts are dropped silently: a container cannot be
    /// split into zero columns, and malformed input must never prevent
    /// rendering.
    pub fn set(&mut self, value: impl Into<Responsive<i64>>) {
        for (bp, count) in expand(value.into()) {
            if count > 0 {
                self.counts.insert(bp, count);
            }
        }
    }

    /// The declared count for one breakpoint, if any.
    pub fn get(&self, bp: Breakpoint) -> Option<i64> {
        self.counts.get(&bp).copied()
    }

    /// The container's own column classes, in registry order.
    ///
    /// `columns({default: 6, sm: 3})` compiles to
    /// `"split-col-6 split-col-sm-3"`.
    pub fn classes(&self) -> String {
        let mut classes: SmallVec<[String; 8]> = SmallVec::new();
        for bp in Breakpoint::ALL {
            if let Some(count) = self.get(bp) {
                classes.push(format!("{}{}-{}", COLUMN_CLASS_PREFIX, bp.suffix(), count));
            }
        }
        classes.join(" ")
    }
}

/// Per-breakpoint span declarations for a child element.
///
/// The `default` entry doubles as the fallback whenever a requested
/// breakpoint has no specific span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanSpec {
    spans: IndexMap<Breakpoint, i64>,
}

impl SpanSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no span has been declared.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Declare spans; a bare integer sets only the `default` entry.
    ///
    /// Non-positive spans are kept in the accumulator but resolve to
    /// "no span" at compile time.
    pub fn set(&mut self, value: impl Into<Responsive<i64>>) {
        for (bp, span) in expand(value.into()) {
            self.spans.insert(bp, span);
        }
    }

    /// Compute the child's effective width classes against its
    /// parent's column declaration.
    ///
    /// For every breakpoint the parent declares: resolve this
    /// element's span (breakpoint entry, else the `default` fallback);
    /// a span greater than zero emits
    /// `split-col{suffix}-{parent - span}` with the remainder clamped
    /// to a minimum of 1. If nothing is emitted at all, the parent's
    /// own column classes pass through unchanged and the element fills
    /// the parent's declared width.
    pub fn width_classes(&self, parent: &ColumnSpec) -> String {
        let mut classes: SmallVec<[String; 8]> = SmallVec::new();
        for bp in Breakpoint::ALL {
            let Some(count) = parent.get(bp) else {
                continue;
            };
            let span = self
                .spans
                .get(&bp)
                .or_else(|| self.spans.get(&Breakpoint::Default));
            let Some(&span) = span else {
                continue;
            };
            if span <= 0 {
                continue;
            }
            let remaining = (count - span).max(1);
            classes.push(format!(
                "{}{}-{}",
                COLUMN_CLASS_PREFIX,
                bp.suffix(),
                remaining
            ));
        }
        if classes.is_empty() {
            parent.classes()
        } else {
            classes.join(" ")
        }
    }
}
