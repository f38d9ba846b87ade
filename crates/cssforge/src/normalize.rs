//! Splitting authored rules into single-facet blocks.
//!
//! [`split_style_rule`] turns one authored [`StyleRule`] into `local` blocks
//! that all target the same selector: one for the base declarations, then one
//! per pseudo selector, `selectors` entry, `@media` query and `@supports`
//! query, in that order. Printers that support nesting emit each fragment
//! under the selector; the others qualify it. [`merge_fragments`] is the
//! inverse and never loses a declaration.

use log::trace;

use crate::block::Css;
use crate::style::{GlobalStyleRule, StyleLayer, StyleRule};

/// Splits a scoped rule into `local` blocks for `selector`.
///
/// Empty facets produce no block; an empty rule produces none at all.
pub fn split_style_rule(selector: &str, rule: StyleRule) -> Vec<Css> {
    let blocks: Vec<Css> = rule
        .split()
        .into_iter()
        .map(|fragment| Css::local(selector, fragment))
        .collect();
    trace!("split '{}' into {} local blocks", selector, blocks.len());
    blocks
}

/// Splits an unscoped rule into `global` blocks for `selector`.
pub fn split_global_rule(selector: &str, rule: GlobalStyleRule) -> Vec<Css> {
    let blocks: Vec<Css> = rule
        .split()
        .into_iter()
        .map(|fragment| Css::global(selector, fragment))
        .collect();
    trace!("split '{}' into {} global blocks", selector, blocks.len());
    blocks
}

/// Folds the `local` fragments that target `selector` back into one rule.
///
/// Returns `None` if no block targets `selector`. Blocks of other kinds or
/// for other selectors are ignored.
pub fn merge_fragments<'a, I>(selector: &str, blocks: I) -> Option<StyleRule>
where
    I: IntoIterator<Item = &'a Css>,
{
    let mut merged: Option<StyleRule> = None;
    for block in blocks {
        if let Css::Local {
            selector: target,
            rule,
        } = block
        {
            if target == selector {
                merged.get_or_insert_with(StyleRule::new).merge(rule.clone());
            }
        }
    }
    merged
}

/// Folds the `global` fragments that target `selector` back into one rule.
pub fn merge_global_fragments<'a, I>(selector: &str, blocks: I) -> Option<GlobalStyleRule>
where
    I: IntoIterator<Item = &'a Css>,
{
    let mut merged: Option<GlobalStyleRule> = None;
    for block in blocks {
        if let Css::Global {
            selector: target,
            rule,
        } = block
        {
            if target == selector {
                merged
                    .get_or_insert_with(GlobalStyleRule::new)
                    .merge(rule.clone());
            }
        }
    }
    merged
}
