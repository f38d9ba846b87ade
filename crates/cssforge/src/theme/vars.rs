//! Contracts to custom-property references, and themes to assignments.

use cssparser::serialize_identifier;
use indexmap::IndexMap;
use log::debug;

use super::error::ThemeError;
use super::tokens::{NullableTokens, TokenTree, Tokens};
use crate::value::CssVar;

/// A tree of custom-property references, one per contract token.
pub type ThemeVars = TokenTree<CssVar>;

/// Names a token after its key path: `["color", "brand"]` becomes
/// `color-brand`.
///
/// Characters that are not valid in a CSS identifier are escaped.
pub fn default_var_name(path: &[&str]) -> String {
    let joined = path.join("-");
    let mut escaped = String::with_capacity(joined.len());
    serialize_identifier(&joined, &mut escaped)
        .map(|()| escaped)
        .unwrap_or(joined)
}

/// Turns a contract into the [`ThemeVars`] consumers style with.
///
/// `namer` receives each leaf's key path and returns the custom-property
/// name; the leading `--` is optional. Leaf values of the contract are
/// ignored, only its shape matters.
///
/// Every leaf must get its own valid name: an empty name fails with
/// [`ThemeError::InvalidVarName`], and two leaves with the same name fail
/// with [`ThemeError::DuplicateVarName`].
///
/// # Example
///
/// ```rust
/// use cssforge::theme::{create_theme_contract, default_var_name, NullableTokens};
///
/// let contract = NullableTokens::from_json_str(r#"{"color": {"brand": null}}"#).unwrap();
/// let vars = create_theme_contract(&contract, default_var_name).unwrap();
///
/// let brand = vars.leaf_at(&["color", "brand"]).unwrap();
/// assert_eq!(brand.to_string(), "var(--color-brand)");
/// ```
pub fn create_theme_contract<F>(
    contract: &NullableTokens,
    namer: F,
) -> Result<ThemeVars, ThemeError>
where
    F: FnMut(&[&str]) -> String,
{
    theme_vars(contract, namer)
}

/// Derives [`ThemeVars`] from any token tree, e.g. a concrete theme that
/// doubles as its own contract.
pub fn theme_vars<L, F>(tree: &TokenTree<L>, mut namer: F) -> Result<ThemeVars, ThemeError>
where
    F: FnMut(&[&str]) -> String,
{
    let mut owners: IndexMap<String, String> = IndexMap::new();
    let vars = tree.try_map_leaves(|path, _| {
        let name = namer(path);
        let var = CssVar::new(name.as_str());
        // The reference must read back as itself.
        if CssVar::parse(&var.to_string()).as_ref() != Ok(&var) {
            return Err(ThemeError::InvalidVarName {
                path: path.join("."),
                name,
            });
        }
        if let Some(first) = owners.get(var.name()) {
            return Err(ThemeError::DuplicateVarName {
                name: var.name().to_string(),
                first: first.clone(),
                second: path.join("."),
            });
        }
        owners.insert(var.name().to_string(), path.join("."));
        Ok(var)
    })?;
    debug!("created {} theme vars", owners.len());
    Ok(vars)
}

/// Pairs every reference in `vars` with the token at the same path in
/// `tokens`, producing a `vars` map for
/// [`StyleProperties::with_vars`](crate::StyleProperties::with_vars).
///
/// `tokens` must have exactly the shape of `vars`.
///
/// # Example
///
/// ```rust
/// use cssforge::theme::{
///     assign_vars, create_theme_contract, default_var_name, NullableTokens, Tokens,
/// };
///
/// let contract = NullableTokens::new().leaf("accent", None);
/// let vars = create_theme_contract(&contract, default_var_name).unwrap();
/// let theme = Tokens::new().leaf("accent", "tomato".to_string());
///
/// let assigned = assign_vars(&vars, &theme).unwrap();
/// assert_eq!(assigned.get("--accent").map(String::as_str), Some("tomato"));
/// ```
pub fn assign_vars(
    vars: &ThemeVars,
    tokens: &Tokens,
) -> Result<IndexMap<String, String>, ThemeError> {
    let mut assigned = IndexMap::new();
    vars.zip_leaves(tokens, |_, var, value| {
        assigned.insert(var.name().to_string(), value.clone());
    })?;
    Ok(assigned)
}
