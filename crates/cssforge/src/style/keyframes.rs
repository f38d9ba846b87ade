//! `@keyframes` steps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::properties::Properties;

/// The steps of one `@keyframes` group, keyed by `from`, `to` or a percentage.
///
/// Steps keep their authoring order.
///
/// # Example
///
/// ```rust
/// use cssforge::{Keyframes, Properties, Property};
///
/// let fade = Keyframes::new()
///     .step("from", Properties::new().with(Property::Opacity, 0))
///     .step("to", Properties::new().with(Property::Opacity, 1));
///
/// assert_eq!(fade.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyframes {
    steps: IndexMap<String, Properties>,
}

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a step, replacing an existing step with the same selector.
    pub fn step(mut self, time: impl Into<String>, properties: Properties) -> Self {
        self.steps.insert(time.into(), properties);
        self
    }

    /// Returns the properties for a step.
    pub fn get(&self, time: &str) -> Option<&Properties> {
        self.steps.get(time)
    }

    /// Iterates over steps in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Properties)> + '_ {
        self.steps.iter().map(|(time, props)| (time.as_str(), props))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Property;

    #[test]
    fn test_keyframes_json_shape() {
        let json = r#"{"0%": {"opacity": 0}, "50%": {"opacity": 0.5}, "100%": {"opacity": 1}}"#;
        let frames: Keyframes = serde_json::from_str(json).unwrap();

        let times: Vec<&str> = frames.iter().map(|(time, _)| time).collect();
        assert_eq!(times, vec!["0%", "50%", "100%"]);
        assert!(frames.get("50%").unwrap().get(Property::Opacity).is_some());
    }

    #[test]
    fn test_keyframes_reject_vars_and_nesting() {
        assert!(serde_json::from_str::<Keyframes>(r#"{"from": {"vars": {}}}"#).is_err());
        assert!(serde_json::from_str::<Keyframes>(r#"{"from": {":hover": {}}}"#).is_err());
    }
}
