//! The adapter protocol between style authoring and a build integration.
//!
//! Style definitions run at build time inside a **file scope**. Everything a
//! file produces is handed to an [`Adapter`]:
//!
//! - [`append_css`](Adapter::append_css) for every normalized [`Css`] block,
//!   in authoring order;
//! - [`register_class_name`](Adapter::register_class_name) for every class
//!   the file generates;
//! - [`register_composition`](Adapter::register_composition) and
//!   [`mark_composition_used`](Adapter::mark_composition_used) for composed
//!   class lists;
//! - [`on_end_file_scope`](Adapter::on_end_file_scope) once the file is done.
//!
//! Each scope moves from OPEN to CLOSED exactly once. Appending to a closed
//! scope or closing it again fails with a [`ProtocolError`].
//!
//! The adapter is passed explicitly, never looked up from global state. See
//! [`FileStyles`](crate::FileStyles) for the authoring side and [`Collector`]
//! for an in-memory implementation.

mod collector;
mod error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::block::Css;

pub use collector::{Collector, CompositionEntry};
pub use error::ProtocolError;

/// Identifies the source file a set of styles belongs to.
///
/// Two scopes are the same scope when both package name and file path match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    pub file_path: String,
}

impl FileScope {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            package_name: None,
            file_path: file_path.into(),
        }
    }

    pub fn with_package(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }
}

impl fmt::Display for FileScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package_name {
            Some(package) => write!(f, "{}/{}", package, self.file_path),
            None => f.write_str(&self.file_path),
        }
    }
}

/// A named, space-separated list of classes that stands in for several
/// generated classes at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub identifier: String,
    pub class_list: String,
}

impl Composition {
    pub fn new(identifier: impl Into<String>, class_list: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            class_list: class_list.into(),
        }
    }
}

/// How generated identifiers should be spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentOption {
    /// Short hashed identifiers, for production builds.
    Short,
    /// Identifiers that keep the authored name, for development.
    #[default]
    Debug,
}

impl IdentOption {
    pub fn as_str(self) -> &'static str {
        match self {
            IdentOption::Short => "short",
            IdentOption::Debug => "debug",
        }
    }
}

impl fmt::Display for IdentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(IdentOption::Short),
            "debug" => Ok(IdentOption::Debug),
            other => Err(format!(
                "unknown ident option '{}', expected 'short' or 'debug'",
                other
            )),
        }
    }
}

/// Receives everything a file scope produces.
///
/// Implementations are shared between files and may be called from several
/// threads, so every method takes `&self`.
///
/// # Example
///
/// ```rust
/// use cssforge::{Adapter, Collector, Css, FileScope, GlobalStyleRule, Property};
///
/// let adapter = Collector::new();
/// let scope = FileScope::new("src/app.css.ts");
///
/// let body = GlobalStyleRule::new().property(Property::Margin, 0);
/// adapter.append_css(Css::global("body", body), &scope).unwrap();
/// adapter.on_end_file_scope(&scope).unwrap();
///
/// let html = GlobalStyleRule::new();
/// assert!(adapter.append_css(Css::global("html", html), &scope).is_err());
/// ```
pub trait Adapter: Send + Sync {
    /// Appends one block to `scope`, opening the scope on first use.
    fn append_css(&self, css: Css, scope: &FileScope) -> Result<(), ProtocolError>;

    /// Records a generated class name. Registering a name twice is a no-op.
    fn register_class_name(&self, class_name: &str);

    /// Records a composition. Re-registering the same class list is a no-op.
    fn register_composition(&self, composition: Composition) -> Result<(), ProtocolError>;

    /// Marks a composition as referenced. Unknown identifiers are ignored.
    fn mark_composition_used(&self, identifier: &str);

    /// Ends `scope`. No further CSS may be appended to it.
    fn on_end_file_scope(&self, scope: &FileScope) -> Result<(), ProtocolError>;

    /// Returns how generated identifiers should be spelled.
    fn ident_option(&self) -> IdentOption;
}
