//! Class-name lists and rules that mix styles with existing classes.

use serde::{Deserialize, Serialize};

use crate::style::{StyleLayer, StyleRule};

/// One class string or an arbitrarily nested list of them.
///
/// # Example
///
/// ```rust
/// use cssforge::ClassNames;
///
/// let classes = ClassNames::from(vec![
///     ClassNames::from("button"),
///     ClassNames::from(vec!["primary  large", ""]),
/// ]);
/// assert_eq!(classes.to_class_list(), "button primary large");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassNames {
    Single(String),
    List(Vec<ClassNames>),
}

impl ClassNames {
    /// Returns every class in order, splitting strings on whitespace.
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassNames::Single(classes) => out.extend(classes.split_whitespace()),
            ClassNames::List(items) => {
                for item in items {
                    item.collect(out);
                }
            }
        }
    }

    /// Returns the classes as one space-separated string.
    pub fn to_class_list(&self) -> String {
        self.flatten().join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.flatten().is_empty()
    }
}

impl From<&str> for ClassNames {
    fn from(value: &str) -> Self {
        ClassNames::Single(value.to_string())
    }
}

impl From<String> for ClassNames {
    fn from(value: String) -> Self {
        ClassNames::Single(value)
    }
}

impl<T: Into<ClassNames>> From<Vec<T>> for ClassNames {
    fn from(items: Vec<T>) -> Self {
        ClassNames::List(items.into_iter().map(Into::into).collect())
    }
}

/// One item of a [`ComplexStyleRule`] list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComplexStyleItem {
    Style(StyleRule),
    Classes(ClassNames),
}

impl From<StyleRule> for ComplexStyleItem {
    fn from(rule: StyleRule) -> Self {
        ComplexStyleItem::Style(rule)
    }
}

impl From<ClassNames> for ComplexStyleItem {
    fn from(classes: ClassNames) -> Self {
        ComplexStyleItem::Classes(classes)
    }
}

impl From<&str> for ComplexStyleItem {
    fn from(classes: &str) -> Self {
        ComplexStyleItem::Classes(classes.into())
    }
}

/// A style rule, or a list of style rules and existing classes to compose.
///
/// In the JSON shape a list mixes objects (rules) with strings or nested
/// string lists (classes): `[{"color": "red"}, "base", ["a", "b"]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComplexStyleRule {
    Single(StyleRule),
    List(Vec<ComplexStyleItem>),
}

impl ComplexStyleRule {
    /// Merges the rules in list order and collects the composed classes.
    ///
    /// Later rules win for declarations they share with earlier ones; nested
    /// maps merge entry by entry.
    pub fn resolve(self) -> (StyleRule, Vec<String>) {
        match self {
            ComplexStyleRule::Single(rule) => (rule, Vec::new()),
            ComplexStyleRule::List(items) => {
                let mut merged = StyleRule::new();
                let mut classes = Vec::new();
                for item in items {
                    match item {
                        ComplexStyleItem::Style(rule) => merged.merge(rule),
                        ComplexStyleItem::Classes(names) => {
                            classes.extend(names.flatten().into_iter().map(str::to_string))
                        }
                    }
                }
                (merged, classes)
            }
        }
    }
}

impl From<StyleRule> for ComplexStyleRule {
    fn from(rule: StyleRule) -> Self {
        ComplexStyleRule::Single(rule)
    }
}

impl<T: Into<ComplexStyleItem>> From<Vec<T>> for ComplexStyleRule {
    fn from(items: Vec<T>) -> Self {
        ComplexStyleRule::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Property, PropertyValue, SimplePseudo, StyleProperties};

    #[test]
    fn test_flatten_nested_lists() {
        let json = r#"["a", ["b c", ["d"]], ""]"#;
        let classes: ClassNames = serde_json::from_str(json).unwrap();
        assert_eq!(classes.flatten(), vec!["a", "b", "c", "d"]);
        assert!(ClassNames::from("  ").is_empty());
    }

    #[test]
    fn test_resolve_merges_rules_in_order() {
        let rule = ComplexStyleRule::from(vec![
            ComplexStyleItem::from(StyleRule::new().property(Property::Color, "red")),
            ComplexStyleItem::from("base"),
            ComplexStyleItem::from(
                StyleRule::new()
                    .property(Property::Color, "blue")
                    .pseudo(
                        SimplePseudo::Hover,
                        StyleProperties::new().property(Property::Opacity, 0.5),
                    ),
            ),
        ]);

        let (merged, classes) = rule.resolve();
        assert_eq!(classes, vec!["base".to_string()]);
        assert_eq!(
            merged.declarations().properties().get(Property::Color),
            Some(&PropertyValue::from("blue"))
        );
        assert_eq!(merged.style().pseudos().len(), 1);
    }

    #[test]
    fn test_json_list_shape() {
        let json = r#"[{"color": "red"}, "base", ["x", "y"]]"#;
        let rule: ComplexStyleRule = serde_json::from_str(json).unwrap();
        let (merged, classes) = rule.resolve();
        assert_eq!(merged.declarations().properties().len(), 1);
        assert_eq!(classes, vec!["base", "x", "y"]);

        let single: ComplexStyleRule = serde_json::from_str(r#"{"color": "red"}"#).unwrap();
        assert!(matches!(single, ComplexStyleRule::Single(_)));
    }
}
