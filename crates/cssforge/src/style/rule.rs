//! Style rules: pseudo selectors, selector overrides and query nesting.
//!
//! Query nesting is bounded by the types themselves. A [`Conditional`] layer
//! carries `@media` blocks of [`InMedia`] and `@supports` blocks of
//! [`InSupports`]; an `InMedia` block may only nest `@supports`, and an
//! `InSupports` block may only nest `@media`, each one level deep. An
//! `@media` directly inside `@media` therefore has no Rust representation, and
//! is rejected when deserializing.

use indexmap::IndexMap;
use serde::de::{Error as _, MapAccess};
use serde::ser::SerializeMap;

use super::layer::{
    declaration_builders, layer_serde, merge_map, sealed, LayerSeed, QueryMapSeed, StyleLayer,
};
use super::properties::StyleProperties;
use crate::pseudo::SimplePseudo;

/// A map from query text (`"(min-width: 768px)"`) to the styles it guards.
pub type QueryMap<T> = IndexMap<String, T>;

/// Styles for an arbitrary selector override: declarations plus one level of
/// `@media`/`@supports`.
pub type SelectorStyle = Conditional<StyleProperties>;

/// A scoped style rule attached to a generated class.
pub type StyleRule = Conditional<StyleWithSelectors>;

/// An unscoped rule for a raw selector. It has no pseudo selectors and no
/// `selectors` map.
pub type GlobalStyleRule = Conditional<StyleProperties>;

/// Declarations plus simple pseudo selectors and arbitrary selector overrides.
///
/// Pseudo entries are siblings of the base declarations and cannot nest under
/// each other. Keys of `selectors` are opaque; they are not validated here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleWithSelectors {
    base: StyleProperties,
    pseudos: IndexMap<SimplePseudo, StyleProperties>,
    selectors: IndexMap<String, SelectorStyle>,
}

impl StyleWithSelectors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the styles applied under a pseudo selector.
    pub fn pseudos(&self) -> &IndexMap<SimplePseudo, StyleProperties> {
        &self.pseudos
    }

    /// Returns the selector overrides, keyed by raw selector text.
    pub fn selectors(&self) -> &IndexMap<String, SelectorStyle> {
        &self.selectors
    }

    /// Attaches styles to a simple pseudo selector, replacing earlier ones.
    pub fn pseudo(mut self, pseudo: SimplePseudo, style: impl Into<StyleProperties>) -> Self {
        self.pseudos.insert(pseudo, style.into());
        self
    }

    /// Adds a selector override such as `"&:nth-child(2)"` or `"nav > &"`.
    pub fn selector(
        mut self,
        selector: impl Into<String>,
        style: impl Into<SelectorStyle>,
    ) -> Self {
        self.selectors.insert(selector.into(), style.into());
        self
    }
}

declaration_builders!([] StyleWithSelectors);

impl From<StyleProperties> for StyleWithSelectors {
    fn from(base: StyleProperties) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

impl sealed::Sealed for StyleWithSelectors {}

impl StyleLayer for StyleWithSelectors {
    fn declarations(&self) -> &StyleProperties {
        &self.base
    }

    fn declarations_mut(&mut self) -> &mut StyleProperties {
        &mut self.base
    }

    fn is_empty(&self) -> bool {
        self.base.is_empty() && self.pseudos.is_empty() && self.selectors.is_empty()
    }

    fn split(self) -> Vec<Self> {
        let mut fragments: Vec<Self> = self.base.split().into_iter().map(Self::from).collect();
        for (pseudo, style) in self.pseudos {
            fragments.push(Self::new().pseudo(pseudo, style));
        }
        for (selector, style) in self.selectors {
            fragments.push(Self::new().selector(selector, style));
        }
        fragments
    }

    fn merge(&mut self, other: Self) {
        self.base.merge(other.base);
        merge_map(&mut self.pseudos, other.pseudos);
        merge_map(&mut self.selectors, other.selectors);
    }

    fn read_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: String,
        map: &mut A,
        context: &'static str,
    ) -> Result<(), A::Error> {
        if SimplePseudo::is_pseudo_key(&key) {
            let pseudo: SimplePseudo = key.parse().map_err(A::Error::custom)?;
            let style = map.next_value_seed(LayerSeed::<StyleProperties>::new(
                "a pseudo selector block",
            ))?;
            self.pseudos.insert(pseudo, style);
            return Ok(());
        }
        if key == "selectors" {
            let selectors =
                map.next_value_seed(QueryMapSeed::<SelectorStyle>::new("a selectors entry"))?;
            self.selectors.extend(selectors);
            return Ok(());
        }
        self.base.read_entry(key, map, context)
    }

    fn write_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        self.base.write_entries(map)?;
        for (pseudo, style) in &self.pseudos {
            map.serialize_entry(pseudo.as_str(), style)?;
        }
        if !self.selectors.is_empty() {
            map.serialize_entry("selectors", &self.selectors)?;
        }
        Ok(())
    }
}

layer_serde!([] StyleWithSelectors, "a style rule");

/// A layer wrapped with optional `@media` and `@supports` maps.
///
/// # Example
///
/// ```rust
/// use cssforge::{
///     InMedia, Property, SimplePseudo, StyleProperties, StyleRule, StyleWithSelectors,
/// };
///
/// let rule = StyleRule::new()
///     .property(Property::Color, "red")
///     .pseudo(
///         SimplePseudo::Hover,
///         StyleProperties::new().property(Property::Color, "blue"),
///     )
///     .media(
///         "(min-width: 768px)",
///         InMedia::<StyleWithSelectors>::new()
///             .property(Property::Color, "green")
///             .supports(
///                 "(display: grid)",
///                 StyleProperties::new().property(Property::Display, "grid"),
///             ),
///     );
///
/// assert_eq!(rule.media_blocks().len(), 1);
/// assert_eq!(rule.style().pseudos().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditional<T> {
    style: T,
    media: QueryMap<InMedia<T>>,
    supports: QueryMap<InSupports<T>>,
}

impl<T: StyleLayer> Conditional<T> {
    /// Creates an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the unconditional part of the rule.
    pub fn style(&self) -> &T {
        &self.style
    }

    /// Returns the `@media` blocks.
    pub fn media_blocks(&self) -> &QueryMap<InMedia<T>> {
        &self.media
    }

    /// Returns the `@supports` blocks.
    pub fn supports_blocks(&self) -> &QueryMap<InSupports<T>> {
        &self.supports
    }

    /// Adds an `@media` block, replacing any block with the same query.
    pub fn media(mut self, query: impl Into<String>, style: impl Into<InMedia<T>>) -> Self {
        self.media.insert(query.into(), style.into());
        self
    }

    /// Adds an `@supports` block, replacing any block with the same query.
    pub fn supports(mut self, query: impl Into<String>, style: impl Into<InSupports<T>>) -> Self {
        self.supports.insert(query.into(), style.into());
        self
    }
}

declaration_builders!([T: StyleLayer] Conditional<T>);

impl Conditional<StyleWithSelectors> {
    /// Attaches styles to a simple pseudo selector.
    pub fn pseudo(mut self, pseudo: SimplePseudo, style: impl Into<StyleProperties>) -> Self {
        self.style = self.style.pseudo(pseudo, style);
        self
    }

    /// Adds a selector override.
    pub fn selector(
        mut self,
        selector: impl Into<String>,
        style: impl Into<SelectorStyle>,
    ) -> Self {
        self.style = self.style.selector(selector, style);
        self
    }
}

impl<T> From<T> for Conditional<T> {
    fn from(style: T) -> Self {
        Self {
            style,
            media: IndexMap::new(),
            supports: IndexMap::new(),
        }
    }
}

impl From<StyleProperties> for StyleRule {
    fn from(style: StyleProperties) -> Self {
        Self::from(StyleWithSelectors::from(style))
    }
}

impl<T: StyleLayer> sealed::Sealed for Conditional<T> {}

impl<T: StyleLayer> StyleLayer for Conditional<T> {
    fn declarations(&self) -> &StyleProperties {
        self.style.declarations()
    }

    fn declarations_mut(&mut self) -> &mut StyleProperties {
        self.style.declarations_mut()
    }

    fn is_empty(&self) -> bool {
        self.style.is_empty() && self.media.is_empty() && self.supports.is_empty()
    }

    fn split(self) -> Vec<Self> {
        let mut fragments: Vec<Self> = self.style.split().into_iter().map(Self::from).collect();
        for (query, style) in self.media {
            fragments.push(Self::new().media(query, style));
        }
        for (query, style) in self.supports {
            fragments.push(Self::new().supports(query, style));
        }
        fragments
    }

    fn merge(&mut self, other: Self) {
        self.style.merge(other.style);
        merge_map(&mut self.media, other.media);
        merge_map(&mut self.supports, other.supports);
    }

    fn read_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: String,
        map: &mut A,
        context: &'static str,
    ) -> Result<(), A::Error> {
        match key.as_str() {
            "@media" => {
                let media =
                    map.next_value_seed(QueryMapSeed::<InMedia<T>>::new("an @media block"))?;
                self.media.extend(media);
                Ok(())
            }
            "@supports" => {
                let supports =
                    map.next_value_seed(QueryMapSeed::<InSupports<T>>::new("an @supports block"))?;
                self.supports.extend(supports);
                Ok(())
            }
            _ => self.style.read_entry(key, map, context),
        }
    }

    fn write_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        self.style.write_entries(map)?;
        if !self.media.is_empty() {
            map.serialize_entry("@media", &self.media)?;
        }
        if !self.supports.is_empty() {
            map.serialize_entry("@supports", &self.supports)?;
        }
        Ok(())
    }
}

layer_serde!([T: StyleLayer] Conditional<T>, "a style rule");

/// The body of an `@media` block: styles plus one level of `@supports`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMedia<T> {
    style: T,
    supports: QueryMap<T>,
}

impl<T: StyleLayer> InMedia<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> &T {
        &self.style
    }

    pub fn supports_blocks(&self) -> &QueryMap<T> {
        &self.supports
    }

    /// Nests an `@supports` block inside this media block.
    pub fn supports(mut self, query: impl Into<String>, style: impl Into<T>) -> Self {
        self.supports.insert(query.into(), style.into());
        self
    }
}

declaration_builders!([T: StyleLayer] InMedia<T>);

impl<T> From<T> for InMedia<T> {
    fn from(style: T) -> Self {
        Self {
            style,
            supports: IndexMap::new(),
        }
    }
}

impl From<StyleProperties> for InMedia<StyleWithSelectors> {
    fn from(style: StyleProperties) -> Self {
        Self::from(StyleWithSelectors::from(style))
    }
}

impl<T: StyleLayer> sealed::Sealed for InMedia<T> {}

impl<T: StyleLayer> StyleLayer for InMedia<T> {
    fn declarations(&self) -> &StyleProperties {
        self.style.declarations()
    }

    fn declarations_mut(&mut self) -> &mut StyleProperties {
        self.style.declarations_mut()
    }

    fn is_empty(&self) -> bool {
        self.style.is_empty() && self.supports.is_empty()
    }

    fn split(self) -> Vec<Self> {
        vec![self]
    }

    fn merge(&mut self, other: Self) {
        self.style.merge(other.style);
        merge_map(&mut self.supports, other.supports);
    }

    fn read_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: String,
        map: &mut A,
        _context: &'static str,
    ) -> Result<(), A::Error> {
        if key == "@supports" {
            let supports = map.next_value_seed(QueryMapSeed::<T>::new(
                "an @supports block nested in @media",
            ))?;
            self.supports.extend(supports);
            return Ok(());
        }
        self.style.read_entry(key, map, "an @media block")
    }

    fn write_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        self.style.write_entries(map)?;
        if !self.supports.is_empty() {
            map.serialize_entry("@supports", &self.supports)?;
        }
        Ok(())
    }
}

layer_serde!([T: StyleLayer] InMedia<T>, "an @media block");

/// The body of an `@supports` block: styles plus one level of `@media`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InSupports<T> {
    style: T,
    media: QueryMap<T>,
}

impl<T: StyleLayer> InSupports<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> &T {
        &self.style
    }

    pub fn media_blocks(&self) -> &QueryMap<T> {
        &self.media
    }

    /// Nests an `@media` block inside this supports block.
    pub fn media(mut self, query: impl Into<String>, style: impl Into<T>) -> Self {
        self.media.insert(query.into(), style.into());
        self
    }
}

declaration_builders!([T: StyleLayer] InSupports<T>);

impl<T> From<T> for InSupports<T> {
    fn from(style: T) -> Self {
        Self {
            style,
            media: IndexMap::new(),
        }
    }
}

impl From<StyleProperties> for InSupports<StyleWithSelectors> {
    fn from(style: StyleProperties) -> Self {
        Self::from(StyleWithSelectors::from(style))
    }
}

impl<T: StyleLayer> sealed::Sealed for InSupports<T> {}

impl<T: StyleLayer> StyleLayer for InSupports<T> {
    fn declarations(&self) -> &StyleProperties {
        self.style.declarations()
    }

    fn declarations_mut(&mut self) -> &mut StyleProperties {
        self.style.declarations_mut()
    }

    fn is_empty(&self) -> bool {
        self.style.is_empty() && self.media.is_empty()
    }

    fn split(self) -> Vec<Self> {
        vec![self]
    }

    fn merge(&mut self, other: Self) {
        self.style.merge(other.style);
        merge_map(&mut self.media, other.media);
    }

    fn read_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: String,
        map: &mut A,
        _context: &'static str,
    ) -> Result<(), A::Error> {
        if key == "@media" {
            let media = map.next_value_seed(QueryMapSeed::<T>::new(
                "an @media block nested in @supports",
            ))?;
            self.media.extend(media);
            return Ok(());
        }
        self.style.read_entry(key, map, "an @supports block")
    }

    fn write_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        self.style.write_entries(map)?;
        if !self.media.is_empty() {
            map.serialize_entry("@media", &self.media)?;
        }
        Ok(())
    }
}

layer_serde!([T: StyleLayer] InSupports<T>, "an @supports block");
