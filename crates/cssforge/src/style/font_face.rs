//! `@font-face` rules.
//!
//! [`GlobalFontFaceRule`] names its own family; [`FontFaceRule`] is the scoped
//! variant whose family is the registered face name, so it cannot declare
//! `fontFamily`. Both require `src`.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::value::PropertyValue;

macro_rules! font_descriptors {
    ($($field:ident => $doc:literal,)*) => {
        /// Optional `@font-face` descriptors shared by both rule kinds.
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct FontDescriptors {
            $(
                #[doc = $doc]
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<PropertyValue>,
            )*
        }

        /// Everything a font face may carry, as read from an authored object.
        #[derive(Debug, Default, Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct RawFontFace {
            src: Option<PropertyValue>,
            font_family: Option<PropertyValue>,
            $($field: Option<PropertyValue>,)*
        }

        impl RawFontFace {
            fn into_parts(
                self,
            ) -> (Option<PropertyValue>, Option<PropertyValue>, FontDescriptors) {
                let descriptors = FontDescriptors {
                    $($field: self.$field,)*
                };
                (self.src, self.font_family, descriptors)
            }
        }

        impl FontFaceBuilder {
            $(
                #[doc = $doc]
                pub fn $field(mut self, value: impl Into<PropertyValue>) -> Self {
                    self.descriptors.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

font_descriptors! {
    font_display => "`font-display`",
    font_style => "`font-style`",
    font_weight => "`font-weight`",
    font_stretch => "`font-stretch`",
    font_variant => "`font-variant`",
    font_feature_settings => "`font-feature-settings`",
    font_variation_settings => "`font-variation-settings`",
    unicode_range => "`unicode-range`",
    ascent_override => "`ascent-override`",
    descent_override => "`descent-override`",
    line_gap_override => "`line-gap-override`",
    size_adjust => "`size-adjust`",
}

/// An unscoped `@font-face` rule.
///
/// # Example
///
/// ```rust
/// use cssforge::{FontFaceBuilder, SchemaError};
///
/// let face = FontFaceBuilder::new()
///     .font_family("Inter")
///     .src("url(/inter.woff2) format('woff2')")
///     .font_display("swap")
///     .build_global()
///     .unwrap();
/// assert!(face.font_family().is_some());
///
/// let missing = FontFaceBuilder::new().font_family("Inter").build_global();
/// assert_eq!(missing.unwrap_err(), SchemaError::MissingFontSource);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFontFace", rename_all = "camelCase")]
pub struct GlobalFontFaceRule {
    src: PropertyValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<PropertyValue>,
    #[serde(flatten)]
    descriptors: FontDescriptors,
}

impl GlobalFontFaceRule {
    /// Creates a font face from its mandatory `src`.
    pub fn new(src: impl Into<PropertyValue>) -> Self {
        Self {
            src: src.into(),
            font_family: None,
            descriptors: FontDescriptors::default(),
        }
    }

    pub fn src(&self) -> &PropertyValue {
        &self.src
    }

    pub fn font_family(&self) -> Option<&PropertyValue> {
        self.font_family.as_ref()
    }

    pub fn descriptors(&self) -> &FontDescriptors {
        &self.descriptors
    }
}

impl TryFrom<RawFontFace> for GlobalFontFaceRule {
    type Error = SchemaError;

    fn try_from(raw: RawFontFace) -> Result<Self, Self::Error> {
        let (src, font_family, descriptors) = raw.into_parts();
        Ok(Self {
            src: src.ok_or(SchemaError::MissingFontSource)?,
            font_family,
            descriptors,
        })
    }
}

/// A scoped `@font-face` rule; its family name is supplied when it is emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFontFace")]
pub struct FontFaceRule {
    src: PropertyValue,
    #[serde(flatten)]
    descriptors: FontDescriptors,
}

impl FontFaceRule {
    /// Creates a font face from its mandatory `src`.
    pub fn new(src: impl Into<PropertyValue>) -> Self {
        Self {
            src: src.into(),
            descriptors: FontDescriptors::default(),
        }
    }

    pub fn src(&self) -> &PropertyValue {
        &self.src
    }

    pub fn descriptors(&self) -> &FontDescriptors {
        &self.descriptors
    }

    /// Binds the rule to its registered family name.
    pub fn into_global(self, family: impl Into<String>) -> GlobalFontFaceRule {
        GlobalFontFaceRule {
            src: self.src,
            font_family: Some(PropertyValue::from(family.into())),
            descriptors: self.descriptors,
        }
    }
}

impl TryFrom<RawFontFace> for FontFaceRule {
    type Error = SchemaError;

    fn try_from(raw: RawFontFace) -> Result<Self, Self::Error> {
        let (src, font_family, descriptors) = raw.into_parts();
        if font_family.is_some() {
            return Err(SchemaError::FontFamilyNotAllowed);
        }
        Ok(Self {
            src: src.ok_or(SchemaError::MissingFontSource)?,
            descriptors,
        })
    }
}

/// Builder for both font face kinds.
///
/// The mandatory `src` is checked when the rule is built.
#[derive(Debug, Clone, Default)]
pub struct FontFaceBuilder {
    src: Option<PropertyValue>,
    font_family: Option<PropertyValue>,
    descriptors: FontDescriptors,
}

impl FontFaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `src`, required.
    pub fn src(mut self, value: impl Into<PropertyValue>) -> Self {
        self.src = Some(value.into());
        self
    }

    /// `font-family`; only valid for [`GlobalFontFaceRule`].
    pub fn font_family(mut self, value: impl Into<PropertyValue>) -> Self {
        self.font_family = Some(value.into());
        self
    }

    /// Builds an unscoped font face.
    pub fn build_global(self) -> Result<GlobalFontFaceRule, SchemaError> {
        Ok(GlobalFontFaceRule {
            src: self.src.ok_or(SchemaError::MissingFontSource)?,
            font_family: self.font_family,
            descriptors: self.descriptors,
        })
    }

    /// Builds a scoped font face, rejecting any `fontFamily`.
    pub fn build(self) -> Result<FontFaceRule, SchemaError> {
        if self.font_family.is_some() {
            return Err(SchemaError::FontFamilyNotAllowed);
        }
        Ok(FontFaceRule {
            src: self.src.ok_or(SchemaError::MissingFontSource)?,
            descriptors: self.descriptors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_builder_rejects_family() {
        let result = FontFaceBuilder::new()
            .src("url(a.woff2)")
            .font_family("A")
            .build();
        assert_eq!(result, Err(SchemaError::FontFamilyNotAllowed));
    }

    #[test]
    fn test_scoped_builder_requires_src() {
        assert_eq!(
            FontFaceBuilder::new().font_weight(700).build(),
            Err(SchemaError::MissingFontSource)
        );
    }

    #[test]
    fn test_deserialize_global_requires_src() {
        let err = serde_json::from_str::<GlobalFontFaceRule>(r#"{"fontFamily": "A"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("'src'"), "{}", err);
    }

    #[test]
    fn test_deserialize_scoped_rejects_family() {
        let err = serde_json::from_str::<FontFaceRule>(
            r#"{"src": "url(a.woff2)", "fontFamily": "A"}"#,
        )
        .unwrap_err()
        .to_string();
        assert!(err.contains("fontFamily"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_unknown_descriptor() {
        let result = serde_json::from_str::<GlobalFontFaceRule>(
            r#"{"src": "url(a.woff2)", "color": "red"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_missing_descriptors() {
        let face = FontFaceBuilder::new()
            .src("url(a.woff2)")
            .font_family("A")
            .font_weight(400)
            .build_global()
            .unwrap();
        let json = serde_json::to_string(&face).unwrap();
        assert_eq!(json, r#"{"src":"url(a.woff2)","fontFamily":"A","fontWeight":400.0}"#);

        let back: GlobalFontFaceRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, face);
    }

    #[test]
    fn test_into_global_sets_family() {
        let face = FontFaceRule::new("url(a.woff2)").into_global("brand-font");
        assert_eq!(
            face.font_family(),
            Some(&PropertyValue::from("brand-font"))
        );
    }
}
