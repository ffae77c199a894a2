//! Flex container class compilation.
//!
//! Direction, justification, and alignment follow the responsive
//! expansion pattern; gaps get the same kind of merge as the spacing
//! axes (equal row and column gaps collapse into one `gap-*` class).

use crate::expand::{class_map, expand_values};
use indexmap::IndexMap;
use smallvec::SmallVec;
use trellis_core::{Breakpoint, ClassValue, Responsive};

type Slots = IndexMap<Breakpoint, ClassValue>;

/// Responsive flex-container declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexSpec {
    direction: Slots,
    justify_content: Slots,
    align_items: Slots,
    align_content: Slots,
    align_self: Slots,
    gap_row: Option<i64>,
    gap_column: Option<i64>,
    nowrap: bool,
}

impl FlexSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.direction.is_empty()
            && self.justify_content.is_empty()
            && self.align_items.is_empty()
            && self.align_content.is_empty()
            && self.align_self.is_empty()
            && self.gap_row.is_none()
            && self.gap_column.is_none()
            && !self.nowrap
    }

    /// Flex direction (`row`, `column`, `row-reverse`, …).
    pub fn set_direction(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.direction, value);
    }

    /// Main-axis distribution (`start`, `center`, `between`, …).
    pub fn set_justify_content(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.justify_content, value);
    }

    /// Cross-axis item alignment (`start`, `center`, `stretch`, …).
    pub fn set_align_items(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.align_items, value);
    }

    /// Multi-line content alignment.
    pub fn set_align_content(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.align_content, value);
    }

    /// Per-element self alignment.
    pub fn set_align_self(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.align_self, value);
    }

    /// Set both row and column gap.
    pub fn set_gap(&mut self, gap: i64) {
        self.gap_row = Some(gap);
        self.gap_column = Some(gap);
    }

    /// Set only the row gap.
    pub fn set_gap_row(&mut self, gap: i64) {
        self.gap_row = Some(gap);
    }

    /// Set only the column gap.
    pub fn set_gap_column(&mut self, gap: i64) {
        self.gap_column = Some(gap);
    }

    /// Disable wrapping (`flex-nowrap`).
    pub fn set_nowrap(&mut self) {
        self.nowrap = true;
    }

    /// The compiled container classes, category by category:
    /// direction, justify-content, align-items, align-content,
    /// align-self, gap, nowrap.
    pub fn classes(&self) -> String {
        let mut classes: SmallVec<[String; 8]> = SmallVec::new();

        push_all(&mut classes, &self.direction, "flex");
        push_all(&mut classes, &self.justify_content, "justify-content");
        push_all(&mut classes, &self.align_items, "align-items");
        push_all(&mut classes, &self.align_content, "align-content");
        push_all(&mut classes, &self.align_self, "align-self");

        match (self.gap_row, self.gap_column) {
            (Some(row), Some(column)) if row == column => {
                classes.push(format!("gap-{}", row));
            }
            (row, column) => {
                if let Some(row) = row {
                    classes.push(format!("row-gap-{}", row));
                }
                if let Some(column) = column {
                    classes.push(format!("column-gap-{}", column));
                }
            }
        }

        if self.nowrap {
            classes.push("flex-nowrap".to_string());
        }

        classes.join(" ")
    }
}

fn merge(slots: &mut Slots, value: impl Into<Responsive<ClassValue>>) {
    for (bp, v) in expand_values(value.into()) {
        slots.insert(bp, v);
    }
}

fn push_all(classes: &mut SmallVec<[String; 8]>, slots: &Slots, prefix: &str) {
    for (key, value) in class_map(slots, prefix, "") {
        classes.push(format!("{}-{}", key, value));
    }
}
