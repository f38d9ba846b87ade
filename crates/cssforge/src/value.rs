//! Property values and CSS custom-property references.
//!
//! A property value is either a single [`Scalar`] (string, number or
//! [`CssVar`] reference) or an ordered list of fallbacks. Fallback order is
//! significant: the first value the browser supports wins.

use std::fmt;

use cssparser::{ParseError, Parser, ParserInput};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SchemaError;

/// A reference to a CSS custom property, written as `var(--name[, fallback])`.
///
/// # Example
///
/// ```rust
/// use cssforge::CssVar;
///
/// let brand = CssVar::new("brand");
/// assert_eq!(brand.to_string(), "var(--brand)");
///
/// let with_default = CssVar::new("--accent").with_fallback("blue");
/// assert_eq!(with_default.to_string(), "var(--accent, blue)");
///
/// let parsed = CssVar::parse("var(--accent, blue)").unwrap();
/// assert_eq!(parsed, with_default);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssVar {
    name: String,
    fallback: Option<String>,
}

impl CssVar {
    /// Creates a reference to the custom property `name`.
    ///
    /// The leading `--` is added when missing.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.starts_with("--") {
            name
        } else {
            format!("--{}", name)
        };
        Self {
            name,
            fallback: None,
        }
    }

    /// Adds (or replaces) the fallback used when the property is unset.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Chains `next` as this reference's fallback: `var(--a, var(--b))`.
    pub fn or(self, next: CssVar) -> Self {
        self.with_fallback(next.to_string())
    }

    /// Returns the custom-property name, including the leading `--`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw fallback text, if any.
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Parses a `var()` function.
    ///
    /// The fallback is kept as raw CSS text and may itself contain `var()`.
    pub fn parse(input: &str) -> Result<Self, SchemaError> {
        let mut parser_input = ParserInput::new(input);
        let mut parser = Parser::new(&mut parser_input);
        let parsed: Result<CssVar, ParseError<'_, ()>> = parser.parse_entirely(|p| {
            p.expect_function_matching("var")?;
            p.parse_nested_block(|p| {
                let start = p.position();
                let ident = p.expect_ident()?.clone();
                if !ident.starts_with("--") || ident.len() == 2 {
                    return Err(p.new_custom_error(()));
                }
                // Escapes stay as written so the name prints back unchanged.
                let name = p.slice_from(start).trim().to_string();
                let fallback = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    let start = p.position();
                    while p.next().is_ok() {}
                    let text = p.slice_from(start).trim();
                    (!text.is_empty()).then(|| text.to_string())
                } else {
                    None
                };
                Ok(CssVar { name, fallback })
            })
        });
        parsed.map_err(|_| SchemaError::InvalidVar(input.to_string()))
    }

    /// Returns `true` if `text` is spelled as a `var()` function.
    pub(crate) fn looks_like_var(text: &str) -> bool {
        text.trim_start().starts_with("var(")
    }
}

impl fmt::Display for CssVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fallback {
            Some(fallback) => write!(f, "var({}, {})", self.name, fallback),
            None => write!(f, "var({})", self.name),
        }
    }
}

impl Serialize for CssVar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CssVar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        CssVar::parse(&text).map_err(D::Error::custom)
    }
}

/// A single property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Literal text, emitted as-is.
    String(String),
    /// A number; unit handling belongs to the printer.
    Number(f64),
    /// A custom-property reference.
    Var(CssVar),
}

impl Scalar {
    /// Classifies literal text, recognizing well-formed `var()` references.
    ///
    /// Anything else, including a malformed `var(...)`, stays literal text.
    /// Deserialized values are classified the same way.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if CssVar::looks_like_var(&text) {
            if let Ok(var) = CssVar::parse(&text) {
                return Scalar::Var(var);
            }
        }
        Scalar::String(text)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(text) => f.write_str(text),
            Scalar::Number(number) => write!(f, "{}", number),
            Scalar::Var(var) => write!(f, "{}", var),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::from_text(text)
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::from_text(text)
    }
}

impl From<f64> for Scalar {
    fn from(number: f64) -> Self {
        Scalar::Number(number)
    }
}

impl From<i32> for Scalar {
    fn from(number: i32) -> Self {
        Scalar::Number(f64::from(number))
    }
}

impl From<CssVar> for Scalar {
    fn from(var: CssVar) -> Self {
        Scalar::Var(var)
    }
}

/// The value assigned to one CSS property.
///
/// # Example
///
/// ```rust
/// use cssforge::{CssVar, PropertyValue, Scalar};
///
/// let single = PropertyValue::from("red");
/// assert_eq!(single, PropertyValue::Single(Scalar::String("red".into())));
///
/// // First supported value wins when printed.
/// let fallbacks = PropertyValue::fallbacks([
///     Scalar::from(CssVar::new("brand")),
///     Scalar::from("red"),
/// ]);
/// assert_eq!(fallbacks.scalars().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A single value.
    Single(Scalar),
    /// Ordered fallbacks mixing variable references and literals.
    Fallbacks(Vec<Scalar>),
}

impl PropertyValue {
    /// Builds an ordered fallback list.
    pub fn fallbacks<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        PropertyValue::Fallbacks(values.into_iter().map(Into::into).collect())
    }

    /// Iterates over the scalars in declaration order.
    pub fn scalars(&self) -> impl Iterator<Item = &Scalar> + '_ {
        let items: &[Scalar] = match self {
            PropertyValue::Single(scalar) => std::slice::from_ref(scalar),
            PropertyValue::Fallbacks(values) => values,
        };
        items.iter()
    }
}

impl From<Scalar> for PropertyValue {
    fn from(value: Scalar) -> Self {
        PropertyValue::Single(value)
    }
}

macro_rules! single_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::Single(Scalar::from(value))
                }
            }
        )*
    };
}

single_value_from!(&str, String, f64, i32, CssVar);

impl From<Vec<Scalar>> for PropertyValue {
    fn from(values: Vec<Scalar>) -> Self {
        PropertyValue::Fallbacks(values)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::String(text) => serializer.serialize_str(text),
            Scalar::Number(number) => serializer.serialize_f64(*number),
            Scalar::Var(var) => var.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
}

impl RawScalar {
    fn into_scalar(self) -> Scalar {
        match self {
            RawScalar::Number(number) => Scalar::Number(number),
            RawScalar::Text(text) => Scalar::from_text(text),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawScalar::deserialize(deserializer).map(RawScalar::into_scalar)
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Single(scalar) => scalar.serialize(serializer),
            PropertyValue::Fallbacks(values) => values.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Single(RawScalar),
    Fallbacks(Vec<RawScalar>),
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Single(raw) => PropertyValue::Single(raw.into_scalar()),
            RawValue::Fallbacks(raw) => {
                PropertyValue::Fallbacks(raw.into_iter().map(RawScalar::into_scalar).collect())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_adds_prefix() {
        assert_eq!(CssVar::new("space").name(), "--space");
        assert_eq!(CssVar::new("--space").name(), "--space");
    }

    #[test]
    fn test_var_parse_plain() {
        let var = CssVar::parse("var(--color-brand)").unwrap();
        assert_eq!(var.name(), "--color-brand");
        assert_eq!(var.fallback(), None);
    }

    #[test]
    fn test_var_parse_nested_fallback() {
        let var = CssVar::parse("var(--a, var(--b, 10px))").unwrap();
        assert_eq!(var.name(), "--a");
        assert_eq!(var.fallback(), Some("var(--b, 10px)"));
        assert_eq!(var.to_string(), "var(--a, var(--b, 10px))");
    }

    #[test]
    fn test_var_or_chains_fallbacks() {
        let var = CssVar::new("a").or(CssVar::new("b").with_fallback("red"));
        assert_eq!(var.to_string(), "var(--a, var(--b, red))");
    }

    #[test]
    fn test_var_parse_rejects_malformed() {
        assert!(CssVar::parse("var(color)").is_err());
        assert!(CssVar::parse("var(--)").is_err());
        assert!(CssVar::parse("calc(--a)").is_err());
        assert!(CssVar::parse("var(--a) trailing").is_err());
        assert!(CssVar::parse("var(--a b)").is_err());
    }

    #[test]
    fn test_scalar_from_text_detects_vars() {
        assert_eq!(
            Scalar::from("var(--x)"),
            Scalar::Var(CssVar::new("x"))
        );
        assert_eq!(Scalar::from("red"), Scalar::String("red".to_string()));
        // Malformed references stay literal.
        assert_eq!(
            Scalar::from("var(nope)"),
            Scalar::String("var(nope)".to_string())
        );
    }

    #[test]
    fn test_property_value_json_shapes() {
        let value: PropertyValue = serde_json::from_str(r#"["var(--brand)", "red"]"#).unwrap();
        assert_eq!(
            value,
            PropertyValue::Fallbacks(vec![
                Scalar::Var(CssVar::new("brand")),
                Scalar::String("red".to_string()),
            ])
        );

        let number: PropertyValue = serde_json::from_str("1.5").unwrap();
        assert_eq!(number, PropertyValue::Single(Scalar::Number(1.5)));

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"["var(--brand)","red"]"#);
    }

    #[test]
    fn test_malformed_var_reads_back_as_built() {
        let built = PropertyValue::fallbacks(["var(oops)", "var(--ok)"]);
        assert_eq!(
            built,
            PropertyValue::Fallbacks(vec![
                Scalar::String("var(oops)".to_string()),
                Scalar::Var(CssVar::new("ok")),
            ])
        );

        let json = serde_json::to_string(&built).unwrap();
        let back: PropertyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, built);

        // A reference on its own is still strict.
        assert!(serde_json::from_str::<CssVar>(r#""var(oops)""#).is_err());
    }
}
