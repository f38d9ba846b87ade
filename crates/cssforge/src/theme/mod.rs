//! Theme tokens, contracts and custom-property references.
//!
//! A theme is described in three steps:
//!
//! 1. A **contract** ([`NullableTokens`]) fixes the token names and nesting.
//!    Leaves are usually `null`.
//! 2. [`create_theme_contract`] turns the contract into [`ThemeVars`]: the
//!    same tree with a [`CssVar`](crate::CssVar) at every leaf. Styles refer
//!    to these.
//! 3. Each concrete theme ([`Tokens`]) is checked against the contract and
//!    turned into custom-property assignments with [`assign_vars`], usually
//!    attached to a root or theme class with a global style.
//!
//! Token trees load from JSON or YAML:
//!
//! ```yaml
//! color:
//!   brand: null
//!   text: null
//! space:
//!   sm: null
//! ```

mod error;
mod tokens;
mod vars;

pub use error::ThemeError;
pub use tokens::{NullableTokens, TokenNode, TokenTree, Tokens};
pub use vars::{assign_vars, create_theme_contract, default_var_name, theme_vars, ThemeVars};
