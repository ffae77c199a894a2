//! The spacing compiler.
//!
//! Accumulates per-side, per-breakpoint margin or padding values and
//! collapses them into the smallest equivalent set of utility classes:
//! equal top/bottom values merge into a `y` shorthand, equal start/end
//! values into an `x` shorthand, and matching `x`/`y` shorthands merge
//! into the bare all-sides class. Each breakpoint is collapsed
//! independently.

use crate::expand::expand_values;
use indexmap::IndexMap;
use smallvec::SmallVec;
use trellis_core::{Breakpoint, ClassValue, Responsive};

/// Which spacing property a spec compiles as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingProperty {
    /// Margin, class prefix `m`.
    Margin,
    /// Padding, class prefix `p`.
    Padding,
}

impl SpacingProperty {
    /// The single-letter class prefix.
    pub fn prefix(&self) -> &'static str {
        match self {
            SpacingProperty::Margin => "m",
            SpacingProperty::Padding => "p",
        }
    }
}

type SideSlots = IndexMap<Breakpoint, ClassValue>;

/// Per-side, per-breakpoint spacing accumulator.
///
/// Sides absent from the accumulator contribute no class (absent is
/// not zero). Later writes to the same side/breakpoint overwrite
/// earlier ones; writes to different slots merge. The compiled output
/// depends only on the final accumulator state, so it is independent
/// of the order setters were called in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacingSpec {
    top: SideSlots,
    bottom: SideSlots,
    start: SideSlots,
    end: SideSlots,
}

impl SpacingSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no side holds any value.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty() && self.start.is_empty() && self.end.is_empty()
    }

    /// Set all four sides.
    pub fn set_all(&mut self, value: impl Into<Responsive<ClassValue>>) {
        let values = expand_values(value.into());
        merge(&mut self.top, &values);
        merge(&mut self.bottom, &values);
        merge(&mut self.start, &values);
        merge(&mut self.end, &values);
    }

    /// Set the horizontal axis (start and end).
    pub fn set_x(&mut self, value: impl Into<Responsive<ClassValue>>) {
        let values = expand_values(value.into());
        merge(&mut self.start, &values);
        merge(&mut self.end, &values);
    }

    /// Set the vertical axis (top and bottom).
    pub fn set_y(&mut self, value: impl Into<Responsive<ClassValue>>) {
        let values = expand_values(value.into());
        merge(&mut self.top, &values);
        merge(&mut self.bottom, &values);
    }

    pub fn set_top(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.top, &expand_values(value.into()));
    }

    pub fn set_bottom(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.bottom, &expand_values(value.into()));
    }

    pub fn set_start(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.start, &expand_values(value.into()));
    }

    pub fn set_end(&mut self, value: impl Into<Responsive<ClassValue>>) {
        merge(&mut self.end, &expand_values(value.into()));
    }

    /// Collapse the accumulator into its utility-class string.
    ///
    /// Runs the axis merge and uniform merge independently for every
    /// breakpoint, then concatenates the surviving classes in registry
    /// order. Always returns a string, possibly empty.
    pub fn compile(&self, property: SpacingProperty) -> String {
        let prefix = property.prefix();
        let mut classes: SmallVec<[String; 8]> = SmallVec::new();

        for bp in Breakpoint::ALL {
            let sfx = bp.suffix();
            let top = self.top.get(&bp);
            let bottom = self.bottom.get(&bp);
            let start = self.start.get(&bp);
            let end = self.end.get(&bp);

            let merged_y = match (top, bottom) {
                (Some(t), Some(b)) if t == b => Some(t),
                _ => None,
            };
            let merged_x = match (start, end) {
                (Some(s), Some(e)) if s == e => Some(s),
                _ => None,
            };

            match (merged_y, merged_x) {
                // Uniform merge: all four sides agree.
                (Some(y), Some(x)) if y == x => {
                    classes.push(format!("{}{}-{}", prefix, sfx, y));
                }
                _ => {
                    if let Some(y) = merged_y {
                        classes.push(format!("{}y{}-{}", prefix, sfx, y));
                    } else {
                        if let Some(t) = top {
                            classes.push(format!("{}t{}-{}", prefix, sfx, t));
                        }
                        if let Some(b) = bottom {
                            classes.push(format!("{}b{}-{}", prefix, sfx, b));
                        }
                    }
                    if let Some(x) = merged_x {
                        classes.push(format!("{}x{}-{}", prefix, sfx, x));
                    } else {
                        if let Some(s) = start {
                            classes.push(format!("{}s{}-{}", prefix, sfx, s));
                        }
                        if let Some(e) = end {
                            classes.push(format!("{}e{}-{}", prefix, sfx, e));
                        }
                    }
                }
            }
        }

        classes.join(" ")
    }
}

fn merge(side: &mut SideSlots, values: &SideSlots) {
    for (bp, value) in values {
        side.insert(*bp, value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn margin(spec: &SpacingSpec) -> String {
        spec.compile(SpacingProperty::Margin)
    }

    #[test]
    fn test_equal_vertical_sides_merge() {
        let mut spec = SpacingSpec::new();
        spec.set_top(2);
        spec.set_bottom(2);
        assert_eq!(margin(&spec), "my-2");
    }

    #[test]
    fn test_unequal_vertical_sides_stay_separate() {
        let mut spec = SpacingSpec::new();
        spec.set_top(2);
        spec.set_bottom(3);
        assert_eq!(margin(&spec), "mt-2 mb-3");
    }

    #[test]
    fn test_uniform_merge() {
        let mut spec = SpacingSpec::new();
        spec.set_top(2);
        spec.set_bottom(2);
        spec.set_start(2);
        spec.set_end(2);
        assert_eq!(margin(&spec), "m-2");
    }

    #[test]
    fn test_all_setter_is_uniform() {
        let mut spec = SpacingSpec::new();
        spec.set_all(4);
        assert_eq!(margin(&spec), "m-4");
        assert_eq!(spec.compile(SpacingProperty::Padding), "p-4");
    }

    #[test]
    fn test_axis_merges_with_different_values() {
        let mut spec = SpacingSpec::new();
        spec.set_y(2);
        spec.set_x(3);
        assert_eq!(margin(&spec), "my-2 mx-3");
    }

    #[test]
    fn test_single_side() {
        let mut spec = SpacingSpec::new();
        spec.set_start("auto");
        assert_eq!(margin(&spec), "ms-auto");
    }

    #[test]
    fn test_breakpoints_collapse_independently() {
        let mut spec = SpacingSpec::new();
        spec.set_all(2);
        spec.set_top([("md", 1)]);
        assert_eq!(margin(&spec), "m-2 mt-md-1");
    }

    #[test]
    fn test_suffixed_uniform_merge() {
        let mut spec = SpacingSpec::new();
        spec.set_all([("lg", 5)]);
        assert_eq!(margin(&spec), "m-lg-5");
    }

    #[test]
    fn test_last_write_wins() {
        let mut spec = SpacingSpec::new();
        spec.set_top(1);
        spec.set_top(4);
        assert_eq!(margin(&spec), "mt-4");
    }

    #[test]
    fn test_unknown_breakpoint_is_dropped() {
        let mut spec = SpacingSpec::new();
        spec.set_top([("tablet", 3)]);
        assert_eq!(margin(&spec), "");
        assert!(spec.is_empty());
    }

    #[test]
    fn test_empty_value_is_dropped() {
        let mut spec = SpacingSpec::new();
        spec.set_all("");
        assert_eq!(margin(&spec), "");
    }

    #[test]
    fn test_missing_side_is_absent_not_zero() {
        let mut spec = SpacingSpec::new();
        spec.set_top(0);
        assert_eq!(margin(&spec), "mt-0");
    }

    /// Rebuild a spec from compiled tokens, for the idempotence check.
    fn reparse(compiled: &str) -> SpacingSpec {
        let mut spec = SpacingSpec::new();
        for token in compiled.split_whitespace() {
            let rest = &token[1..]; // strip the m/p prefix
            let (sides, rest) = match rest.as_bytes().first() {
                Some(b't') => ("t", &rest[1..]),
                Some(b'b') => ("b", &rest[1..]),
                Some(b's') if !rest.starts_with("sm-") => ("s", &rest[1..]),
                Some(b'e') => ("e", &rest[1..]),
                Some(b'x') if !rest.starts_with("xs-") && !rest.starts_with("xl-") && !rest.starts_with("xxl-") => {
                    ("se", &rest[1..])
                }
                Some(b'y') => ("tb", &rest[1..]),
                _ => ("tbse", rest),
            };
            let rest = rest.strip_prefix('-').unwrap_or(rest);
            let (bp, value) = match rest.split_once('-') {
                Some((head, tail)) if Breakpoint::parse(head).is_some() => {
                    (Breakpoint::parse(head).unwrap(), tail)
                }
                _ => (Breakpoint::Default, rest),
            };
            let value: ClassValue = value
                .parse::<i64>()
                .map(ClassValue::Level)
                .unwrap_or_else(|_| ClassValue::Keyword(value.to_string()));
            let keyed = Responsive::from_keyed([(bp.token(), value)]);
            for side in sides.chars() {
                match side {
                    't' => spec.set_top(keyed.clone()),
                    'b' => spec.set_bottom(keyed.clone()),
                    's' => spec.set_start(keyed.clone()),
                    'e' => spec.set_end(keyed.clone()),
                    _ => unreachable!(),
                }
            }
        }
        spec
    }

    /// A single setter call on one side slot.
    fn apply(spec: &mut SpacingSpec, side: u8, bp: Breakpoint, value: i64) {
        let value = Responsive::from_keyed([(bp.token(), ClassValue::Level(value))]);
        match side {
            0 => spec.set_top(value),
            1 => spec.set_bottom(value),
            2 => spec.set_start(value),
            _ => spec.set_end(value),
        }
    }

    fn slot_ops() -> impl Strategy<Value = Vec<(u8, Breakpoint, i64)>> {
        proptest::collection::vec(
            (
                0u8..4,
                proptest::sample::select(Breakpoint::ALL.to_vec()),
                0i64..6,
            ),
            0..16,
        )
    }

    proptest! {
        /// Compiling is a pure function of the accumulator state:
        /// applying collision-free setter calls in reverse order
        /// changes nothing.
        #[test]
        fn prop_setter_order_does_not_matter(ops in slot_ops()) {
            // Dedup per (side, breakpoint) slot, keeping the last
            // write, so both orders end in the same state.
            let mut slots = IndexMap::new();
            for (side, bp, value) in ops {
                slots.insert((side, bp), value);
            }
            let mut forward = SpacingSpec::new();
            for (&(side, bp), &value) in &slots {
                apply(&mut forward, side, bp, value);
            }
            let mut reverse = SpacingSpec::new();
            for (&(side, bp), &value) in slots.iter().rev() {
                apply(&mut reverse, side, bp, value);
            }
            prop_assert_eq!(
                forward.compile(SpacingProperty::Margin),
                reverse.compile(SpacingProperty::Margin)
            );
        }

        /// Compiling, re-parsing the tokens, and recompiling yields the
        /// identical string.
        #[test]
        fn prop_compile_is_idempotent(ops in slot_ops()) {
            let mut spec = SpacingSpec::new();
            for (side, bp, value) in ops {
                apply(&mut spec, side, bp, value);
            }
            let compiled = spec.compile(SpacingProperty::Margin);
            let recompiled = reparse(&compiled).compile(SpacingProperty::Margin);
            prop_assert_eq!(compiled, recompiled);
        }
    }
}
