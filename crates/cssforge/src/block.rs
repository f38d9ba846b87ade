//! Emittable CSS blocks.
//!
//! A [`Css`] block is the unit handed to an [`Adapter`](crate::Adapter). Its
//! serialized form is tagged by `type`:
//!
//! | type | payload |
//! |------|---------|
//! | `local` | `selector` + [`StyleRule`] |
//! | `global`, `selector` | `selector` + [`GlobalStyleRule`] |
//! | `fontFace` | [`GlobalFontFaceRule`] |
//! | `keyframes` | `name` + [`Keyframes`] |
//! | `import` | [`ImportRule`] |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::style::{GlobalFontFaceRule, GlobalStyleRule, Keyframes, StyleRule};

/// An `@import` statement, optionally guarded by media and feature queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRule {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_query: Option<String>,
}

impl ImportRule {
    /// Creates an unguarded import.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            media_query: None,
            supports_query: None,
        }
    }

    /// Guards the import with a media query.
    pub fn media(mut self, query: impl Into<String>) -> Self {
        self.media_query = Some(query.into());
        self
    }

    /// Guards the import with a feature query.
    pub fn supports(mut self, query: impl Into<String>) -> Self {
        self.supports_query = Some(query.into());
        self
    }
}

/// One normalized, emittable unit of CSS.
///
/// # Example
///
/// ```rust
/// use cssforge::{Css, BlockKind, Property, StyleRule};
///
/// let block = Css::local(".button", StyleRule::new().property(Property::Color, "red"));
/// assert_eq!(block.kind(), BlockKind::Local);
///
/// let json = serde_json::to_value(&block).unwrap();
/// assert_eq!(json["type"], "local");
/// assert_eq!(json["selector"], ".button");
/// assert_eq!(json["rule"]["color"], "red");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Css {
    /// A rule scoped to one generated class.
    Local { selector: String, rule: StyleRule },
    /// A rule for a raw, unscoped selector.
    Global {
        selector: String,
        rule: GlobalStyleRule,
    },
    /// A raw-selector rule emitted on behalf of a scoped class.
    Selector {
        selector: String,
        rule: GlobalStyleRule,
    },
    /// An `@font-face` rule.
    FontFace { rule: GlobalFontFaceRule },
    /// An `@keyframes` group.
    Keyframes { name: String, rule: Keyframes },
    /// An `@import` statement.
    Import { rule: ImportRule },
}

impl Css {
    pub fn local(selector: impl Into<String>, rule: StyleRule) -> Self {
        Css::Local {
            selector: selector.into(),
            rule,
        }
    }

    pub fn global(selector: impl Into<String>, rule: GlobalStyleRule) -> Self {
        Css::Global {
            selector: selector.into(),
            rule,
        }
    }

    pub fn selector(selector: impl Into<String>, rule: GlobalStyleRule) -> Self {
        Css::Selector {
            selector: selector.into(),
            rule,
        }
    }

    pub fn font_face(rule: GlobalFontFaceRule) -> Self {
        Css::FontFace { rule }
    }

    pub fn keyframes(name: impl Into<String>, rule: Keyframes) -> Self {
        Css::Keyframes {
            name: name.into(),
            rule,
        }
    }

    pub fn import(rule: ImportRule) -> Self {
        Css::Import { rule }
    }

    /// Returns the discriminant of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Css::Local { .. } => BlockKind::Local,
            Css::Global { .. } => BlockKind::Global,
            Css::Selector { .. } => BlockKind::Selector,
            Css::FontFace { .. } => BlockKind::FontFace,
            Css::Keyframes { .. } => BlockKind::Keyframes,
            Css::Import { .. } => BlockKind::Import,
        }
    }

    /// Returns the selector for rule blocks.
    pub fn selector_text(&self) -> Option<&str> {
        match self {
            Css::Local { selector, .. }
            | Css::Global { selector, .. }
            | Css::Selector { selector, .. } => Some(selector),
            _ => None,
        }
    }
}

/// The `type` discriminant of a [`Css`] block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Local,
    Global,
    Selector,
    FontFace,
    Keyframes,
    Import,
}

impl BlockKind {
    /// Returns the serialized `type` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Local => "local",
            BlockKind::Global => "global",
            BlockKind::Selector => "selector",
            BlockKind::FontFace => "fontFace",
            BlockKind::Keyframes => "keyframes",
            BlockKind::Import => "import",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
