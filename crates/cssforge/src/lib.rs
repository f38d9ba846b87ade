//! # cssforge - build-time style authoring for zero-runtime CSS
//!
//! `cssforge` is the data model and collection protocol behind a zero-runtime
//! CSS toolchain. Styles are authored as typed values, normalized into
//! [`Css`] blocks and handed to an [`Adapter`] per source file. A printer
//! turns the collected blocks into stylesheets; nothing here runs in the
//! browser.
//!
//! ## Authoring
//!
//! ```rust
//! use cssforge::{
//!     Collector, FileScope, FileStyles, Property, SimplePseudo, StyleProperties, StyleRule,
//! };
//!
//! let collector = Collector::new();
//! let scope = FileScope::new("src/a.ts");
//! let styles = FileStyles::open(&collector, scope.clone());
//!
//! styles
//!     .style(
//!         "foo",
//!         StyleRule::new()
//!             .property(Property::Color, "red")
//!             .pseudo(
//!                 SimplePseudo::Hover,
//!                 StyleProperties::new().property(Property::Color, "blue"),
//!             )
//!             .media(
//!                 "(min-width: 100px)",
//!                 StyleProperties::new().property(Property::Color, "green"),
//!             ),
//!     )
//!     .unwrap();
//! styles.end().unwrap();
//!
//! let blocks = collector.css_for(&scope);
//! assert_eq!(blocks.len(), 3);
//! assert!(blocks.iter().all(|block| block.selector_text() == Some(".foo")));
//! ```
//!
//! ## Layout
//!
//! - [`style`]: rules, `@media`/`@supports` nesting, font faces, keyframes
//! - [`Css`]: the emittable block union
//! - [`normalize`]: splitting rules into single-facet blocks and back
//! - [`Adapter`], [`Collector`]: the per-file-scope protocol
//! - [`FileStyles`]: an authoring session bound to one scope
//! - [`theme`]: token contracts and custom-property references
//!
//! Every authored value serializes to the plain object shape used by the
//! JavaScript authoring API, with `serde`.

mod adapter;
mod block;
mod class_names;
mod config;
mod error;
pub mod normalize;
mod property;
mod pseudo;
mod session;
pub mod style;
pub mod theme;
mod value;

pub use adapter::{
    Adapter, Collector, Composition, CompositionEntry, FileScope, IdentOption, ProtocolError,
};
pub use block::{BlockKind, Css, ImportRule};
pub use class_names::{ClassNames, ComplexStyleItem, ComplexStyleRule};
pub use config::{CollectorConfig, ConfigError};
pub use error::SchemaError;
pub use property::Property;
pub use pseudo::SimplePseudo;
pub use session::{FileStyles, StyleError};
pub use style::{
    Conditional, FontDescriptors, FontFaceBuilder, FontFaceRule, GlobalFontFaceRule,
    GlobalStyleRule, InMedia, InSupports, Keyframes, Properties, QueryMap, SelectorStyle,
    StyleLayer, StyleProperties, StyleRule, StyleWithSelectors,
};
pub use theme::{NullableTokens, ThemeVars, Tokens};
pub use value::{CssVar, PropertyValue, Scalar};
