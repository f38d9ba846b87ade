//! Flat property sets.

use indexmap::IndexMap;
use serde::de::{Error as _, MapAccess};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

use super::layer::{declaration_builders, layer_serde, sealed, StyleLayer};
use crate::error::SchemaError;
use crate::property::Property;
use crate::pseudo::SimplePseudo;
use crate::value::{CssVar, PropertyValue};

/// A set of CSS property declarations, in authoring order.
///
/// Setting a property that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: IndexMap<Property, PropertyValue>,
}

impl Properties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated set for chaining.
    pub fn with(mut self, property: Property, value: impl Into<PropertyValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Sets a property.
    pub fn set(&mut self, property: Property, value: impl Into<PropertyValue>) {
        self.values.insert(property, value.into());
    }

    /// Removes a property, returning its value.
    pub fn remove(&mut self, property: Property) -> Option<PropertyValue> {
        self.values.shift_remove(&property)
    }

    /// Returns the value of a property.
    pub fn get(&self, property: Property) -> Option<&PropertyValue> {
        self.values.get(&property)
    }

    /// Iterates over declarations in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &PropertyValue)> + '_ {
        self.values.iter().map(|(property, value)| (*property, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn extend(&mut self, other: Properties) {
        self.values.extend(other.values);
    }
}

impl FromIterator<(Property, PropertyValue)> for Properties {
    fn from_iter<I: IntoIterator<Item = (Property, PropertyValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Property declarations plus custom-property assignments (`vars`).
///
/// # Example
///
/// ```rust
/// use cssforge::{CssVar, Property, StyleProperties};
///
/// let brand = CssVar::new("brand");
/// let style = StyleProperties::new()
///     .property(Property::Color, brand.clone())
///     .var(brand.name(), "tomato");
///
/// assert_eq!(style.vars().get("--brand").map(String::as_str), Some("tomato"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProperties {
    properties: Properties,
    vars: IndexMap<String, String>,
}

impl StyleProperties {
    /// Creates an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the property declarations.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the custom-property assignments, keyed by `--name`.
    pub fn vars(&self) -> &IndexMap<String, String> {
        &self.vars
    }

    /// Sets a CSS property.
    pub fn set(&mut self, property: Property, value: impl Into<PropertyValue>) {
        self.properties.set(property, value);
    }

    /// Assigns a custom property.
    ///
    /// `name` may be a bare name, a `--name`, or a `var(--name)` reference.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let key = var_key(&name).unwrap_or_else(|_| CssVar::new(name).name().to_string());
        self.vars.insert(key, value.into());
    }

    /// Assigns every entry of `vars`, e.g. the output of
    /// [`assign_vars`](crate::theme::assign_vars).
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in vars {
            self.set_var(name, value);
        }
        self
    }
}

declaration_builders!([] StyleProperties);

impl From<Properties> for StyleProperties {
    fn from(properties: Properties) -> Self {
        Self {
            properties,
            vars: IndexMap::new(),
        }
    }
}

/// Normalizes a `vars` key to the `--name` form.
fn var_key(key: &str) -> Result<String, SchemaError> {
    if CssVar::looks_like_var(key) {
        CssVar::parse(key).map(|var| var.name().to_string())
    } else {
        Ok(CssVar::new(key).name().to_string())
    }
}

impl sealed::Sealed for StyleProperties {}

impl StyleLayer for StyleProperties {
    fn declarations(&self) -> &StyleProperties {
        self
    }

    fn declarations_mut(&mut self) -> &mut StyleProperties {
        self
    }

    fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.vars.is_empty()
    }

    fn split(self) -> Vec<Self> {
        if StyleLayer::is_empty(&self) {
            Vec::new()
        } else {
            vec![self]
        }
    }

    fn merge(&mut self, other: Self) {
        self.properties.extend(other.properties);
        self.vars.extend(other.vars);
    }

    fn read_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: String,
        map: &mut A,
        context: &'static str,
    ) -> Result<(), A::Error> {
        if key == "vars" {
            let vars: IndexMap<String, String> = map.next_value()?;
            for (name, value) in vars {
                let name = var_key(&name).map_err(A::Error::custom)?;
                self.vars.insert(name, value);
            }
            return Ok(());
        }
        if key == "selectors" || key.starts_with('@') || SimplePseudo::is_pseudo_key(&key) {
            return Err(A::Error::custom(SchemaError::InvalidNesting { key, context }));
        }
        let property: Property = key.parse().map_err(A::Error::custom)?;
        let value: PropertyValue = map.next_value()?;
        self.properties.set(property, value);
        Ok(())
    }

    fn write_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        for (property, value) in self.properties.iter() {
            map.serialize_entry(property.as_str(), value)?;
        }
        if !self.vars.is_empty() {
            map.serialize_entry("vars", &self.vars)?;
        }
        Ok(())
    }
}

layer_serde!([] StyleProperties, "a property set");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    #[test]
    fn test_set_replaces_in_place() {
        let props = Properties::new()
            .with(Property::Color, "red")
            .with(Property::Margin, 0)
            .with(Property::Color, "blue");

        let order: Vec<Property> = props.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Property::Color, Property::Margin]);
        assert_eq!(
            props.get(Property::Color),
            Some(&PropertyValue::Single(Scalar::String("blue".to_string())))
        );
    }

    #[test]
    fn test_var_keys_are_normalized() {
        let style = StyleProperties::new()
            .var("plain", "1")
            .var("--dashed", "2")
            .var("var(--referenced)", "3");

        let keys: Vec<&str> = style.vars().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["--plain", "--dashed", "--referenced"]);
    }

    #[test]
    fn test_deserialize_properties_and_vars() {
        let style: StyleProperties = serde_json::from_str(
            r#"{"color": "red", "margin-top": 4, "vars": {"var(--gap)": "8px"}}"#,
        )
        .unwrap();

        assert_eq!(style.properties().len(), 2);
        assert!(style.properties().get(Property::MarginTop).is_some());
        assert_eq!(style.vars().get("--gap").map(String::as_str), Some("8px"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_property() {
        let result: Result<StyleProperties, _> = serde_json::from_str(r#"{"colour": "red"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown CSS property 'colour'"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_nested_keys() {
        for key in ["@media", "selectors", ":hover"] {
            let json = format!(r#"{{"{}": {{}}}}"#, key);
            let result: Result<StyleProperties, _> = serde_json::from_str(&json);
            let err = result.unwrap_err().to_string();
            assert!(err.contains("not allowed inside a property set"), "{}", err);
        }
    }

    #[test]
    fn test_serialize_uses_authoring_names() {
        let style = StyleProperties::new()
            .property(Property::BackgroundColor, "white")
            .var("x", "1");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"backgroundColor":"white","vars":{"--x":"1"}}"#);
    }

    #[test]
    fn test_merge_keeps_existing_positions() {
        let mut base = StyleProperties::new()
            .property(Property::Color, "red")
            .property(Property::Margin, 0);
        base.merge(StyleProperties::new().property(Property::Color, "blue").var("a", "b"));

        let order: Vec<Property> = base.properties().iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Property::Color, Property::Margin]);
        assert_eq!(base.vars().len(), 1);
    }
}
