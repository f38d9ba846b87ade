//! Key-by-key (de)serialization shared by every style layer.
//!
//! Style objects are flat maps whose keys select the layer that owns them:
//! `@media`/`@supports` belong to query layers, `selectors` and pseudo keys to
//! [`StyleWithSelectors`](super::StyleWithSelectors), everything else to
//! [`StyleProperties`](super::StyleProperties). Each layer reads the keys it
//! owns and hands the rest to the layer it wraps.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{DeserializeSeed, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serialize, Serializer};

use super::StyleProperties;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// One layer of a style rule.
///
/// Implemented by the property set and by every wrapper that adds pseudo
/// selectors, `selectors` or query maps around it. The trait is sealed: the
/// set of layers, and therefore the allowed nesting, is fixed by this crate.
pub trait StyleLayer:
    Default + Clone + PartialEq + fmt::Debug + Serialize + sealed::Sealed
{
    /// Returns the base declarations of this layer.
    fn declarations(&self) -> &StyleProperties;

    /// Returns the base declarations of this layer, mutably.
    fn declarations_mut(&mut self) -> &mut StyleProperties;

    /// Returns `true` if the layer declares nothing at all.
    fn is_empty(&self) -> bool;

    /// Splits the layer into fragments that each carry one facet.
    ///
    /// Merging the fragments back in order yields a value equal to `self`.
    fn split(self) -> Vec<Self>;

    /// Folds `other` into this layer. Nested maps merge entry by entry.
    fn merge(&mut self, other: Self);

    #[doc(hidden)]
    fn read_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: String,
        map: &mut A,
        context: &'static str,
    ) -> Result<(), A::Error>;

    #[doc(hidden)]
    fn write_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error>;
}

/// Deserializes one layer, reporting misplaced keys against `context`.
pub(crate) struct LayerSeed<L> {
    context: &'static str,
    marker: PhantomData<L>,
}

impl<L> LayerSeed<L> {
    pub(crate) fn new(context: &'static str) -> Self {
        Self {
            context,
            marker: PhantomData,
        }
    }
}

impl<'de, L: StyleLayer> DeserializeSeed<'de> for LayerSeed<L> {
    type Value = L;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<L, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, L: StyleLayer> Visitor<'de> for LayerSeed<L> {
    type Value = L;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a style object for {}", self.context)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<L, A::Error> {
        let mut layer = L::default();
        while let Some(key) = map.next_key::<String>()? {
            layer.read_entry(key, &mut map, self.context)?;
        }
        Ok(layer)
    }
}

/// Deserializes a `query -> layer` map such as the value of `@media`.
pub(crate) struct QueryMapSeed<L> {
    context: &'static str,
    marker: PhantomData<L>,
}

impl<L> QueryMapSeed<L> {
    pub(crate) fn new(context: &'static str) -> Self {
        Self {
            context,
            marker: PhantomData,
        }
    }
}

impl<'de, L: StyleLayer> DeserializeSeed<'de> for QueryMapSeed<L> {
    type Value = IndexMap<String, L>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, L: StyleLayer> Visitor<'de> for QueryMapSeed<L> {
    type Value = IndexMap<String, L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of queries for {}", self.context)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut queries = IndexMap::new();
        while let Some(query) = map.next_key::<String>()? {
            let layer = map.next_value_seed(LayerSeed::<L>::new(self.context))?;
            queries.insert(query, layer);
        }
        Ok(queries)
    }
}

pub(crate) fn serialize_layer<L: StyleLayer, S: Serializer>(
    layer: &L,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(None)?;
    layer.write_entries(&mut map)?;
    map.end()
}

/// Merges `incoming` into `target`, combining values that share a key.
pub(crate) fn merge_map<K, L>(target: &mut IndexMap<K, L>, incoming: IndexMap<K, L>)
where
    K: std::hash::Hash + Eq,
    L: StyleLayer,
{
    for (key, value) in incoming {
        target.entry(key).or_default().merge(value);
    }
}

/// Wires `Serialize`/`Deserialize` for a layer type through [`StyleLayer`].
macro_rules! layer_serde {
    ([$($generics:tt)*] $ty:ty, $context:literal) => {
        impl<$($generics)*> serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::style::layer::serialize_layer(self, serializer)
            }
        }

        impl<'de, $($generics)*> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                serde::de::DeserializeSeed::deserialize(
                    $crate::style::layer::LayerSeed::<Self>::new($context),
                    deserializer,
                )
            }
        }
    };
}

/// Adds the chaining `property`/`var` builders to a layer type.
macro_rules! declaration_builders {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> $ty {
            /// Sets a CSS property, returning the updated value for chaining.
            pub fn property(
                mut self,
                property: $crate::Property,
                value: impl Into<$crate::PropertyValue>,
            ) -> Self {
                $crate::style::StyleLayer::declarations_mut(&mut self).set(property, value);
                self
            }

            /// Assigns a custom property, returning the updated value for chaining.
            pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                $crate::style::StyleLayer::declarations_mut(&mut self).set_var(name, value);
                self
            }
        }
    };
}

pub(crate) use declaration_builders;
pub(crate) use layer_serde;
