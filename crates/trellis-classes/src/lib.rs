//! Responsive utility-class compilers.
//!
//! This crate turns sparse, breakpoint-keyed style specifications into
//! minimal, canonical, deterministic CSS utility-class strings:
//!
//! - [`SpacingSpec`] collapses per-side margin/padding values with the
//!   axis merge (`t == b` → `y`, `s == e` → `x`) and uniform merge
//!   (`x == y` → all-sides shorthand), independently per breakpoint
//! - [`ColumnSpec`] / [`SpanSpec`] derive a child's effective width
//!   from the delta between its span and its parent's column count
//! - [`OrderSpec`] and [`FlexSpec`] apply the same expansion pattern
//!   to display order and flex container classes
//!
//! Compilation is total: malformed input (unknown breakpoints, unset
//! values, non-positive spans) degrades to a reduced or empty string,
//! never an error, so a style argument can never prevent a page from
//! rendering.

pub mod columns;
pub mod expand;
pub mod flex;
pub mod order;
pub mod spacing;

pub use columns::{ColumnSpec, SpanSpec, COLUMN_CLASS_PREFIX};
pub use expand::{class_map, expand, expand_classes, expand_values, join_classes};
pub use flex::FlexSpec;
pub use order::OrderSpec;
pub use spacing::{SpacingProperty, SpacingSpec};
