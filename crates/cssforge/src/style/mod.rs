//! The style rule model.
//!
//! This module provides the authored shapes that normalize into CSS blocks:
//!
//! - [`Properties`] and [`StyleProperties`]: flat declarations, the latter with `vars`
//! - [`StyleWithSelectors`]: declarations plus pseudo selectors and `selectors`
//! - [`Conditional`], [`InMedia`], [`InSupports`]: bounded `@media`/`@supports` nesting
//! - [`StyleRule`], [`GlobalStyleRule`], [`SelectorStyle`]: the layer stacks used by blocks
//! - [`GlobalFontFaceRule`], [`FontFaceRule`]: `@font-face` with a required `src`
//! - [`Keyframes`]: `@keyframes` steps
//!
//! Every type serializes to and from the authoring object shape (`":hover"`,
//! `"selectors"`, `"@media"`, `"@supports"`, `"vars"` keys), and deserializing
//! reports misplaced keys as [`SchemaError`](crate::SchemaError)s.

mod font_face;
mod keyframes;
pub(crate) mod layer;
mod properties;
mod rule;

pub use font_face::{FontDescriptors, FontFaceBuilder, FontFaceRule, GlobalFontFaceRule};
pub use keyframes::Keyframes;
pub use layer::StyleLayer;
pub use properties::{Properties, StyleProperties};
pub use rule::{
    Conditional, GlobalStyleRule, InMedia, InSupports, QueryMap, SelectorStyle, StyleRule,
    StyleWithSelectors,
};
