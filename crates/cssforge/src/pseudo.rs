//! Simple pseudo-classes and pseudo-elements usable as style rule keys.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SchemaError;

macro_rules! define_pseudos {
    ($($variant:ident => $selector:literal,)*) => {
        /// A simple pseudo selector that can key a nested property set.
        ///
        /// Only argument-free pseudos are listed; functional ones such as
        /// `:nth-child(2)` go through a rule's `selectors` map instead.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SimplePseudo {
            $(
                #[doc = concat!("`", $selector, "`")]
                $variant,
            )*
        }

        impl SimplePseudo {
            /// Every known simple pseudo, in declaration order.
            pub const ALL: &'static [SimplePseudo] = &[$(SimplePseudo::$variant),*];

            /// Returns the selector text, including leading colons.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(SimplePseudo::$variant => $selector,)*
                }
            }
        }
    };
}

define_pseudos! {
    Active => ":active",
    AnyLink => ":any-link",
    Blank => ":blank",
    Checked => ":checked",
    Default => ":default",
    Defined => ":defined",
    Disabled => ":disabled",
    Empty => ":empty",
    Enabled => ":enabled",
    First => ":first",
    FirstChild => ":first-child",
    FirstOfType => ":first-of-type",
    Focus => ":focus",
    FocusVisible => ":focus-visible",
    FocusWithin => ":focus-within",
    Fullscreen => ":fullscreen",
    Hover => ":hover",
    InRange => ":in-range",
    Indeterminate => ":indeterminate",
    Invalid => ":invalid",
    LastChild => ":last-child",
    LastOfType => ":last-of-type",
    Left => ":left",
    Link => ":link",
    OnlyChild => ":only-child",
    OnlyOfType => ":only-of-type",
    Optional => ":optional",
    OutOfRange => ":out-of-range",
    PlaceholderShown => ":placeholder-shown",
    ReadOnly => ":read-only",
    ReadWrite => ":read-write",
    Required => ":required",
    Right => ":right",
    Root => ":root",
    Scope => ":scope",
    Target => ":target",
    Valid => ":valid",
    Visited => ":visited",
    After => "::after",
    Backdrop => "::backdrop",
    Before => "::before",
    Cue => "::cue",
    FirstLetter => "::first-letter",
    FirstLine => "::first-line",
    GrammarError => "::grammar-error",
    Marker => "::marker",
    Placeholder => "::placeholder",
    Selection => "::selection",
    SpellingError => "::spelling-error",
    MozPlaceholder => "::-moz-placeholder",
    MozSelection => "::-moz-selection",
    WebkitBackdrop => "::-webkit-backdrop",
    WebkitInputPlaceholder => "::-webkit-input-placeholder",
}

static BY_SELECTOR: Lazy<HashMap<&'static str, SimplePseudo>> = Lazy::new(|| {
    SimplePseudo::ALL
        .iter()
        .map(|&pseudo| (pseudo.as_str(), pseudo))
        .collect()
});

impl SimplePseudo {
    /// Looks up a pseudo by its selector text (`":hover"`).
    pub fn from_selector(selector: &str) -> Option<SimplePseudo> {
        BY_SELECTOR.get(selector).copied()
    }

    /// Returns `true` if `key` is spelled like a pseudo selector key.
    pub(crate) fn is_pseudo_key(key: &str) -> bool {
        key.starts_with(':')
    }

    /// Returns `true` for pseudo-elements (`::before`), `false` for pseudo-classes.
    pub fn is_element(self) -> bool {
        self.as_str().starts_with("::")
    }
}

impl fmt::Display for SimplePseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimplePseudo {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SimplePseudo::from_selector(s).ok_or_else(|| SchemaError::UnknownPseudo(s.to_string()))
    }
}

impl Serialize for SimplePseudo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SimplePseudo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let selector = String::deserialize(deserializer)?;
        selector.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(SimplePseudo::from_selector(":hover"), Some(SimplePseudo::Hover));
        assert_eq!(SimplePseudo::from_selector("hover"), None);
        assert_eq!(
            "::nth-child".parse::<SimplePseudo>(),
            Err(SchemaError::UnknownPseudo("::nth-child".to_string()))
        );
    }

    #[test]
    fn test_element_vs_class() {
        assert!(SimplePseudo::Before.is_element());
        assert!(!SimplePseudo::FocusVisible.is_element());
    }

    #[test]
    fn test_selectors_are_unique() {
        assert_eq!(BY_SELECTOR.len(), SimplePseudo::ALL.len());
    }
}
