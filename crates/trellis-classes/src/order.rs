//! The display-order compiler.
//!
//! The same expansion pattern as the other compilers applied to
//! `order-*` classes. Values may be numeric levels or the `first` /
//! `last` keywords.

use crate::expand::{class_map, expand_values, join_classes};
use indexmap::IndexMap;
use trellis_core::{Breakpoint, ClassValue, Responsive};

const ORDER_CLASS_PREFIX: &str = "order";

/// Per-breakpoint display-order declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSpec {
    orders: IndexMap<Breakpoint, ClassValue>,
}

impl OrderSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no order has been declared.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Declare order values; a bare value sets the `default` entry.
    pub fn set(&mut self, value: impl Into<Responsive<ClassValue>>) {
        for (bp, v) in expand_values(value.into()) {
            self.orders.insert(bp, v);
        }
    }

    /// The compiled `order-*` classes, in registry order with the
    /// general breakpoints unsuffixed.
    pub fn classes(&self) -> String {
        join_classes(&class_map(&self.orders, ORDER_CLASS_PREFIX, ""))
    }
}
