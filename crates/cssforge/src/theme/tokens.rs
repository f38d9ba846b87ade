//! Recursive token trees.

use std::convert::Infallible;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ThemeError;

/// A recursive, ordered map from token names to leaves or nested groups.
///
/// The leaf type decides what the tree describes:
///
/// | Alias | Leaf | Meaning |
/// |-------|------|---------|
/// | [`Tokens`] | `String` | a concrete theme |
/// | [`NullableTokens`] | `Option<String>` | a contract; `null` leaves only fix the shape |
/// | [`ThemeVars`](super::ThemeVars) | [`CssVar`](crate::CssVar) | `var()` references |
///
/// # Example
///
/// ```rust
/// use cssforge::theme::{NullableTokens, TokenNode};
///
/// let contract: NullableTokens = serde_json::from_str(
///     r#"{"color": {"brand": null, "text": null}, "font": {"body": null}}"#,
/// ).unwrap();
///
/// assert!(matches!(contract.get_path(&["color", "brand"]), Some(TokenNode::Leaf(None))));
/// assert_eq!(contract.leaves().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTree<L> {
    entries: IndexMap<String, TokenNode<L>>,
}

/// One entry of a [`TokenTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenNode<L> {
    Leaf(L),
    Group(TokenTree<L>),
}

/// A concrete theme: every leaf has a value.
pub type Tokens = TokenTree<String>;

/// A theme contract: leaves may be `null`.
pub type NullableTokens = TokenTree<Option<String>>;

impl<L> Default for TokenTree<L> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<L> TokenTree<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a leaf, returning the updated tree for chaining.
    pub fn leaf(mut self, key: impl Into<String>, value: L) -> Self {
        self.entries.insert(key.into(), TokenNode::Leaf(value));
        self
    }

    /// Adds a nested group, returning the updated tree for chaining.
    pub fn group(mut self, key: impl Into<String>, tree: TokenTree<L>) -> Self {
        self.entries.insert(key.into(), TokenNode::Group(tree));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, node: TokenNode<L>) {
        self.entries.insert(key.into(), node);
    }

    pub fn get(&self, key: &str) -> Option<&TokenNode<L>> {
        self.entries.get(key)
    }

    /// Follows `path` from the root.
    pub fn get_path(&self, path: &[&str]) -> Option<&TokenNode<L>> {
        let (first, rest) = path.split_first()?;
        let node = self.entries.get(*first)?;
        if rest.is_empty() {
            return Some(node);
        }
        match node {
            TokenNode::Group(tree) => tree.get_path(rest),
            TokenNode::Leaf(_) => None,
        }
    }

    /// Returns the leaf at `path`, if `path` ends at a leaf.
    pub fn leaf_at(&self, path: &[&str]) -> Option<&L> {
        match self.get_path(path)? {
            TokenNode::Leaf(value) => Some(value),
            TokenNode::Group(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenNode<L>)> + '_ {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lists every leaf with its key path, depth first in authoring order.
    pub fn leaves(&self) -> Vec<(Vec<&str>, &L)> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        self.collect_leaves(&mut path, &mut out);
        out
    }

    fn collect_leaves<'a>(
        &'a self,
        path: &mut Vec<&'a str>,
        out: &mut Vec<(Vec<&'a str>, &'a L)>,
    ) {
        for (key, node) in &self.entries {
            path.push(key.as_str());
            match node {
                TokenNode::Leaf(value) => out.push((path.clone(), value)),
                TokenNode::Group(tree) => tree.collect_leaves(path, out),
            }
            path.pop();
        }
    }

    /// Builds a tree of the same shape with every leaf replaced by `f(path, leaf)`.
    pub fn map_leaves<M, F>(&self, mut f: F) -> TokenTree<M>
    where
        F: FnMut(&[&str], &L) -> M,
    {
        match self.try_map_leaves(|path, leaf| Ok::<M, Infallible>(f(path, leaf))) {
            Ok(tree) => tree,
            Err(never) => match never {},
        }
    }

    /// Like [`map_leaves`](Self::map_leaves), stopping at the first error.
    pub fn try_map_leaves<M, E, F>(&self, mut f: F) -> Result<TokenTree<M>, E>
    where
        F: FnMut(&[&str], &L) -> Result<M, E>,
    {
        let mut path = Vec::new();
        self.try_map_with_path(&mut path, &mut f)
    }

    fn try_map_with_path<'a, M, E, F>(
        &'a self,
        path: &mut Vec<&'a str>,
        f: &mut F,
    ) -> Result<TokenTree<M>, E>
    where
        F: FnMut(&[&str], &L) -> Result<M, E>,
    {
        let mut entries = IndexMap::with_capacity(self.entries.len());
        for (key, node) in &self.entries {
            path.push(key.as_str());
            let mapped = match node {
                TokenNode::Leaf(value) => TokenNode::Leaf(f(path, value)?),
                TokenNode::Group(tree) => TokenNode::Group(tree.try_map_with_path(path, f)?),
            };
            path.pop();
            entries.insert(key.clone(), mapped);
        }
        Ok(TokenTree { entries })
    }

    /// Walks `self` (the expected shape) alongside `other`, calling `f` for
    /// each pair of leaves at the same path.
    ///
    /// Fails on the first key present in only one tree, or on a leaf facing a
    /// group.
    pub(crate) fn zip_leaves<M, F>(
        &self,
        other: &TokenTree<M>,
        mut f: F,
    ) -> Result<(), ThemeError>
    where
        F: FnMut(&[&str], &L, &M),
    {
        let mut path = Vec::new();
        self.zip_with_path(other, &mut path, &mut f)
    }

    fn zip_with_path<'a, M, F>(
        &'a self,
        other: &'a TokenTree<M>,
        path: &mut Vec<&'a str>,
        f: &mut F,
    ) -> Result<(), ThemeError>
    where
        F: FnMut(&[&str], &L, &M),
    {
        for (key, node) in &self.entries {
            path.push(key.as_str());
            let Some(other_node) = other.entries.get(key) else {
                return Err(ThemeError::missing(path));
            };
            match (node, other_node) {
                (TokenNode::Leaf(expected), TokenNode::Leaf(actual)) => {
                    f(path, expected, actual)
                }
                (TokenNode::Group(expected), TokenNode::Group(actual)) => {
                    expected.zip_with_path(actual, path, f)?
                }
                (TokenNode::Leaf(_), TokenNode::Group(_)) => {
                    return Err(ThemeError::mismatch(path, "a single token"));
                }
                (TokenNode::Group(_), TokenNode::Leaf(_)) => {
                    return Err(ThemeError::mismatch(path, "a group of tokens"));
                }
            }
            path.pop();
        }
        for key in other.entries.keys() {
            if !self.entries.contains_key(key) {
                path.push(key.as_str());
                return Err(ThemeError::unexpected(path));
            }
        }
        Ok(())
    }
}

impl<L: DeserializeOwned> TokenTree<L> {
    /// Parses a token tree from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(source).map_err(|e| ThemeError::Parse(e.to_string()))
    }

    /// Parses a token tree from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(source).map_err(|e| ThemeError::Parse(e.to_string()))
    }
}

impl Tokens {
    /// Checks that this theme fills exactly the shape of `contract`.
    ///
    /// A contract leaf with a value is a default; it still only fixes the
    /// shape here.
    pub fn conforms_to(&self, contract: &NullableTokens) -> Result<(), ThemeError> {
        contract.zip_leaves(self, |_, _, _| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> NullableTokens {
        NullableTokens::new()
            .group(
                "color",
                NullableTokens::new().leaf("brand", None).leaf("text", None),
            )
            .leaf("radius", Some("4px".to_string()))
    }

    #[test]
    fn test_map_leaves_preserves_shape() {
        let lengths = contract().map_leaves(|path, _| path.len());
        assert_eq!(lengths.leaf_at(&["color", "brand"]), Some(&2));
        assert_eq!(lengths.leaf_at(&["radius"]), Some(&1));
        assert_eq!(lengths.len(), 2);
    }

    #[test]
    fn test_leaves_are_depth_first() {
        let tree = contract();
        let paths: Vec<String> = tree.leaves().iter().map(|(p, _)| p.join(".")).collect();
        assert_eq!(paths, vec!["color.brand", "color.text", "radius"]);
    }

    #[test]
    fn test_get_path_stops_at_leaves() {
        let tree = contract();
        assert!(tree.get_path(&["radius", "deeper"]).is_none());
        assert!(tree.get_path(&[]).is_none());
        assert!(matches!(tree.get_path(&["color"]), Some(TokenNode::Group(_))));
    }

    #[test]
    fn test_conforms_to() {
        let theme = Tokens::new()
            .group(
                "color",
                Tokens::new()
                    .leaf("brand", "tomato".to_string())
                    .leaf("text", "black".to_string()),
            )
            .leaf("radius", "2px".to_string());
        assert_eq!(theme.conforms_to(&contract()), Ok(()));
    }

    #[test]
    fn test_conforms_to_reports_problems() {
        let missing = Tokens::new()
            .group("color", Tokens::new().leaf("brand", "tomato".to_string()))
            .leaf("radius", "2px".to_string());
        assert_eq!(
            missing.conforms_to(&contract()),
            Err(ThemeError::MissingToken {
                path: "color.text".to_string()
            })
        );

        let flat = Tokens::new()
            .leaf("color", "red".to_string())
            .leaf("radius", "2px".to_string());
        assert!(matches!(
            flat.conforms_to(&contract()),
            Err(ThemeError::ShapeMismatch { .. })
        ));

        let extra = Tokens::new()
            .group(
                "color",
                Tokens::new()
                    .leaf("brand", "a".to_string())
                    .leaf("text", "b".to_string()),
            )
            .leaf("radius", "2px".to_string())
            .leaf("shadow", "none".to_string());
        assert_eq!(
            extra.conforms_to(&contract()),
            Err(ThemeError::UnexpectedToken {
                path: "shadow".to_string()
            })
        );
    }

    #[test]
    fn test_load_yaml_and_json() {
        let yaml = "color:\n  brand: null\n  text: null\nradius: 4px\n";
        let from_yaml = NullableTokens::from_yaml_str(yaml).unwrap();
        assert_eq!(from_yaml, contract());

        let json = r#"{"color": {"brand": null, "text": null}, "radius": "4px"}"#;
        assert_eq!(NullableTokens::from_json_str(json).unwrap(), contract());

        assert!(matches!(
            Tokens::from_json_str(r#"{"color": null}"#),
            Err(ThemeError::Parse(_))
        ));
    }
}
