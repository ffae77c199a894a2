//! Scalar-or-map responsive values.
//!
//! Builder setters accept either a single value (applied at the
//! `default` breakpoint) or a per-breakpoint map. Both shapes are
//! modeled by [`Responsive`]; the scalar utility value itself is
//! [`ClassValue`].

use crate::breakpoint::Breakpoint;
use indexmap::IndexMap;
use std::fmt;

/// A single utility value: a numeric spacing/order level or a keyword
/// such as `auto`, `first`, `last`.
///
/// The empty keyword is the "not set" sentinel inherited from the
/// input contract; expansion drops it so a class name is never
/// emitted with a blank value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ClassValue {
    /// A numeric utility level (`2` in `mt-2`).
    Level(i64),
    /// A keyword value (`auto` in `m-auto`).
    Keyword(String),
}

impl ClassValue {
    /// Whether this value is the empty "not set" sentinel.
    pub fn is_unset(&self) -> bool {
        matches!(self, ClassValue::Keyword(k) if k.is_empty())
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassValue::Level(n) => write!(f, "{}", n),
            ClassValue::Keyword(k) => f.write_str(k),
        }
    }
}

impl From<i64> for ClassValue {
    fn from(n: i64) -> Self {
        ClassValue::Level(n)
    }
}

impl From<i32> for ClassValue {
    fn from(n: i32) -> Self {
        ClassValue::Level(n.into())
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Keyword(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Keyword(s)
    }
}

/// A value that is either a bare scalar or a breakpoint-keyed map.
///
/// The scalar form means `{default: value}`; the map form carries
/// independent values per breakpoint. Maps preserve insertion order,
/// but compilation always walks [`Breakpoint::ALL`], so the compiled
/// output does not depend on the order entries were supplied in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Responsive<T> {
    /// One value, applied at the `default` breakpoint.
    Scalar(T),
    /// Independent values per breakpoint.
    PerBreakpoint(IndexMap<Breakpoint, T>),
}

impl<T> Responsive<T> {
    /// Build the map form from string breakpoint tokens.
    ///
    /// Entries with tokens outside the registry are silently dropped,
    /// mirroring the permissive stance of the whole pipeline.
    pub fn from_keyed<K, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let map = pairs
            .into_iter()
            .filter_map(|(token, value)| {
                Breakpoint::parse(token.as_ref()).map(|bp| (bp, value))
            })
            .collect();
        Responsive::PerBreakpoint(map)
    }
}

impl From<ClassValue> for Responsive<ClassValue> {
    fn from(value: ClassValue) -> Self {
        Responsive::Scalar(value)
    }
}

impl From<i64> for Responsive<ClassValue> {
    fn from(n: i64) -> Self {
        Responsive::Scalar(n.into())
    }
}

impl From<i32> for Responsive<ClassValue> {
    fn from(n: i32) -> Self {
        Responsive::Scalar(n.into())
    }
}

impl From<&str> for Responsive<ClassValue> {
    fn from(s: &str) -> Self {
        Responsive::Scalar(s.into())
    }
}

impl From<String> for Responsive<ClassValue> {
    fn from(s: String) -> Self {
        Responsive::Scalar(s.into())
    }
}

impl<K: AsRef<str>, V: Into<ClassValue>, const N: usize> From<[(K, V); N]>
    for Responsive<ClassValue>
{
    fn from(pairs: [(K, V); N]) -> Self {
        Responsive::from_keyed(pairs.into_iter().map(|(k, v)| (k, v.into())))
    }
}

impl From<i64> for Responsive<i64> {
    fn from(n: i64) -> Self {
        Responsive::Scalar(n)
    }
}

impl<K: AsRef<str>, const N: usize> From<[(K, i64); N]> for Responsive<i64> {
    fn from(pairs: [(K, i64); N]) -> Self {
        Responsive::from_keyed(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(ClassValue::from(2), ClassValue::Level(2));
        assert_eq!(ClassValue::from("auto"), ClassValue::Keyword("auto".into()));
        assert_eq!(ClassValue::Level(3).to_string(), "3");
        assert_eq!(ClassValue::Keyword("auto".into()).to_string(), "auto");
    }

    #[test]
    fn test_empty_keyword_is_unset() {
        assert!(ClassValue::from("").is_unset());
        assert!(!ClassValue::from("auto").is_unset());
        assert!(!ClassValue::from(0).is_unset());
    }

    #[test]
    fn test_from_keyed_drops_unknown_tokens() {
        let value: Responsive<i64> =
            Responsive::from_keyed([("default", 12), ("tablet", 6), ("md", 4)]);
        match value {
            Responsive::PerBreakpoint(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map[&Breakpoint::Default], 12);
                assert_eq!(map[&Breakpoint::Md], 4);
                assert!(!map.contains_key(&Breakpoint::Sm));
            }
            Responsive::Scalar(_) => panic!("expected map form"),
        }
    }

    #[test]
    fn test_array_form_converts_values() {
        let value = Responsive::<ClassValue>::from([("default", 2), ("md", 4)]);
        match value {
            Responsive::PerBreakpoint(map) => {
                assert_eq!(map[&Breakpoint::Md], ClassValue::Level(4));
            }
            Responsive::Scalar(_) => panic!("expected map form"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_responsive_serde_round_trip() {
        let value = Responsive::<ClassValue>::from([("default", 2), ("md", 4)]);
        let json = serde_json::to_string(&value).unwrap();
        let back: Responsive<ClassValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }
}
