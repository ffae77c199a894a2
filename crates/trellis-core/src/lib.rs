//! Core types for the trellis markup builder.
//!
//! This crate provides the foundational types used across the other
//! trellis crates:
//! - The breakpoint registry (the fixed, ordered set of responsive
//!   tokens and their class-name suffix rule)
//! - The scalar-or-map responsive value model
//! - Error types

pub mod breakpoint;
pub mod error;
pub mod value;

pub use breakpoint::Breakpoint;
pub use error::ParseBreakpointError;
pub use value::{ClassValue, Responsive};
