//! Responsive value expansion.
//!
//! Expands a scalar-or-map value into breakpoint-keyed entries:
//! 1. A bare scalar becomes `{default: value}`
//! 2. Unset values (the empty-string sentinel) are dropped
//! 3. Class-name keys are built as `prefix + breakpoint suffix + suffix`,
//!    with the general breakpoints (`default`, `xs`) left unsuffixed
//!
//! Unknown breakpoint tokens never reach this module; they are dropped
//! when the map form is constructed (`Responsive::from_keyed`).

use indexmap::IndexMap;
use trellis_core::{Breakpoint, ClassValue, Responsive};

/// Normalize a responsive value into a breakpoint-keyed map.
///
/// The scalar form lands on the `default` breakpoint; the map form
/// passes through unchanged.
pub fn expand<T>(value: Responsive<T>) -> IndexMap<Breakpoint, T> {
    match value {
        Responsive::Scalar(v) => {
            let mut map = IndexMap::with_capacity(1);
            map.insert(Breakpoint::Default, v);
            map
        }
        Responsive::PerBreakpoint(map) => map,
    }
}

/// Normalize a responsive class value, dropping unset entries.
pub fn expand_values(value: Responsive<ClassValue>) -> IndexMap<Breakpoint, ClassValue> {
    let mut map = expand(value);
    map.retain(|_, v| !v.is_unset());
    map
}

/// Build fully-qualified class-name keys for a breakpoint-keyed map.
///
/// Keys follow `prefix + suffix(breakpoint) + suffix` and are emitted
/// in registry order regardless of the map's insertion order.
pub fn class_map(
    values: &IndexMap<Breakpoint, ClassValue>,
    prefix: &str,
    suffix: &str,
) -> IndexMap<String, ClassValue> {
    let mut classes = IndexMap::with_capacity(values.len());
    for bp in Breakpoint::ALL {
        if let Some(value) = values.get(&bp) {
            if value.is_unset() {
                continue;
            }
            let key = format!("{}{}{}", prefix, bp.suffix(), suffix);
            classes.insert(key, value.clone());
        }
    }
    classes
}

/// Expand a scalar-or-map value straight to class-name keys.
pub fn expand_classes(
    value: Responsive<ClassValue>,
    prefix: &str,
    suffix: &str,
) -> IndexMap<String, ClassValue> {
    class_map(&expand_values(value), prefix, suffix)
}

/// Join a class map into the final `"{key}-{value}"` token string.
pub fn join_classes(classes: &IndexMap<String, ClassValue>) -> String {
    let tokens: Vec<String> = classes
        .iter()
        .map(|(key, value)| format!("{}-{}", key, value))
        .collect();
    tokens.join(" ")
}
