//! Authoring styles for one file scope.

use log::debug;
use thiserror::Error;

use crate::adapter::{Adapter, Composition, FileScope, IdentOption, ProtocolError};
use crate::block::{Css, ImportRule};
use crate::class_names::{ClassNames, ComplexStyleRule};
use crate::normalize::{split_global_rule, split_style_rule};
use crate::style::{FontFaceRule, GlobalFontFaceRule, GlobalStyleRule, Keyframes, StyleRule};
use crate::theme::{assign_vars, ThemeError, ThemeVars, Tokens};
use crate::StyleProperties;

/// Error returned by [`FileStyles::global_theme`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// The styles of one source file, forwarded to an adapter as they are
/// authored.
///
/// Opening a session does not call the adapter; the scope opens with its
/// first block. [`end`](FileStyles::end) consumes the session, so a session
/// cannot end its scope twice.
///
/// # Example
///
/// ```rust
/// use cssforge::{
///     Collector, FileScope, FileStyles, Property, SimplePseudo, StyleProperties, StyleRule,
/// };
///
/// let collector = Collector::new();
/// let scope = FileScope::new("src/button.css.ts");
///
/// let styles = FileStyles::open(&collector, scope.clone());
/// let button = styles
///     .style(
///         "button",
///         StyleRule::new()
///             .property(Property::Color, "white")
///             .pseudo(
///                 SimplePseudo::Hover,
///                 StyleProperties::new().property(Property::Opacity, 0.8),
///             ),
///     )
///     .unwrap();
/// styles.end().unwrap();
///
/// assert_eq!(button, "button");
/// assert_eq!(collector.css_for(&scope).len(), 2);
/// assert!(collector.is_closed(&scope));
/// ```
pub struct FileStyles<'a> {
    adapter: &'a dyn Adapter,
    scope: FileScope,
}

impl<'a> FileStyles<'a> {
    pub fn open(adapter: &'a dyn Adapter, scope: FileScope) -> Self {
        debug!("authoring styles for {}", scope);
        Self { adapter, scope }
    }

    pub fn scope(&self) -> &FileScope {
        &self.scope
    }

    /// Returns how the adapter wants generated identifiers spelled.
    pub fn ident_option(&self) -> IdentOption {
        self.adapter.ident_option()
    }

    fn append(&self, blocks: impl IntoIterator<Item = Css>) -> Result<(), ProtocolError> {
        for block in blocks {
            self.adapter.append_css(block, &self.scope)?;
        }
        Ok(())
    }

    /// Appends `rule` for `.class_name`, then registers `class_name`.
    ///
    /// The class is only registered once its CSS was accepted. Returns the
    /// class name to apply.
    pub fn style(
        &self,
        class_name: &str,
        rule: impl Into<StyleRule>,
    ) -> Result<String, ProtocolError> {
        self.append(split_style_rule(&format!(".{}", class_name), rule.into()))?;
        self.adapter.register_class_name(class_name);
        Ok(class_name.to_string())
    }

    /// Like [`style`](Self::style), but `rule` may also list existing classes.
    ///
    /// Listed classes are composed with `class_name` into a registered
    /// composition, and any of them that is itself a composition is marked
    /// as used. Returns the full class list.
    pub fn style_complex(
        &self,
        class_name: &str,
        rule: impl Into<ComplexStyleRule>,
    ) -> Result<String, ProtocolError> {
        let (rule, classes) = rule.into().resolve();
        self.style(class_name, rule)?;
        if classes.is_empty() {
            return Ok(class_name.to_string());
        }
        for class in &classes {
            self.adapter.mark_composition_used(class);
        }
        let mut class_list = vec![class_name.to_string()];
        class_list.extend(classes);
        let class_list = class_list.join(" ");
        self.adapter
            .register_composition(Composition::new(class_name, class_list.clone()))?;
        Ok(class_list)
    }

    /// Registers `classes` under `identifier`. Returns the class list.
    pub fn compose(
        &self,
        identifier: &str,
        classes: impl Into<ClassNames>,
    ) -> Result<String, ProtocolError> {
        let class_list = classes.into().to_class_list();
        self.adapter
            .register_composition(Composition::new(identifier, class_list.clone()))?;
        Ok(class_list)
    }

    /// Marks a composition as referenced from this file.
    pub fn use_composition(&self, identifier: &str) {
        self.adapter.mark_composition_used(identifier);
    }

    /// Appends an unscoped rule for `selector`.
    pub fn global_style(
        &self,
        selector: &str,
        rule: impl Into<GlobalStyleRule>,
    ) -> Result<(), ProtocolError> {
        self.append(split_global_rule(selector, rule.into()))
    }

    /// Appends a raw-selector rule that targets generated classes, e.g.
    /// `.card:hover .title`.
    pub fn selector_style(
        &self,
        selector: &str,
        rule: impl Into<GlobalStyleRule>,
    ) -> Result<(), ProtocolError> {
        self.append(
            split_global_rule(selector, rule.into())
                .into_iter()
                .filter_map(|block| match block {
                    Css::Global { selector, rule } => Some(Css::Selector { selector, rule }),
                    _ => None,
                }),
        )
    }

    /// Appends an `@font-face` for the generated family `family`.
    ///
    /// Returns the family name to use in `font-family`.
    pub fn font_face(&self, family: &str, rule: FontFaceRule) -> Result<String, ProtocolError> {
        self.append([Css::font_face(rule.into_global(family))])?;
        Ok(family.to_string())
    }

    /// Appends an `@font-face` that names its own family.
    pub fn global_font_face(&self, rule: GlobalFontFaceRule) -> Result<(), ProtocolError> {
        self.append([Css::font_face(rule)])
    }

    /// Appends an `@keyframes` group. Returns the animation name.
    pub fn keyframes(&self, name: &str, frames: Keyframes) -> Result<String, ProtocolError> {
        self.append([Css::keyframes(name, frames)])?;
        Ok(name.to_string())
    }

    pub fn global_import(&self, rule: ImportRule) -> Result<(), ProtocolError> {
        self.append([Css::import(rule)])
    }

    /// Assigns a concrete theme to `vars` on `selector`.
    pub fn global_theme(
        &self,
        selector: &str,
        vars: &ThemeVars,
        tokens: &Tokens,
    ) -> Result<(), StyleError> {
        let assigned = assign_vars(vars, tokens)?;
        self.global_style(selector, StyleProperties::new().with_vars(assigned))?;
        Ok(())
    }

    /// Ends the file scope.
    pub fn end(self) -> Result<(), ProtocolError> {
        self.adapter.on_end_file_scope(&self.scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{create_theme_contract, default_var_name, NullableTokens};
    use crate::{BlockKind, Collector, Properties, Property};

    fn scope() -> FileScope {
        FileScope::new("src/styles.css.ts")
    }

    #[test]
    fn test_style_registers_class() {
        let collector = Collector::new();
        let styles = FileStyles::open(&collector, scope());
        styles
            .style("card", StyleRule::new().property(Property::Padding, 8))
            .unwrap();
        assert_eq!(collector.class_names(), vec!["card".to_string()]);
        assert_eq!(collector.css_for(&scope())[0].selector_text(), Some(".card"));
    }

    #[test]
    fn test_style_complex_composes() {
        let collector = Collector::new();
        let styles = FileStyles::open(&collector, scope());
        styles.compose("base", vec!["reset", "box"]).unwrap();

        let classes = styles
            .style_complex(
                "button",
                vec![
                    crate::ComplexStyleItem::from(
                        StyleRule::new().property(Property::Color, "red"),
                    ),
                    crate::ComplexStyleItem::from("base"),
                ],
            )
            .unwrap();

        assert_eq!(classes, "button base");
        let compositions = collector.compositions();
        assert_eq!(compositions.len(), 2);
        assert!(compositions[0].used);
        assert_eq!(compositions[1].composition.class_list, "button base");
        assert_eq!(collector.unused_compositions().len(), 1);
    }

    #[test]
    fn test_style_complex_without_classes() {
        let collector = Collector::new();
        let styles = FileStyles::open(&collector, scope());
        let classes = styles
            .style_complex("plain", StyleRule::new().property(Property::Margin, 0))
            .unwrap();
        assert_eq!(classes, "plain");
        assert!(collector.compositions().is_empty());
    }

    #[test]
    fn test_other_block_kinds() {
        let collector = Collector::new();
        let styles = FileStyles::open(&collector, scope());
        styles.global_import(ImportRule::new("reset.css")).unwrap();
        styles
            .global_style("body", GlobalStyleRule::new().property(Property::Margin, 0))
            .unwrap();
        styles
            .selector_style(
                ".card:hover .title",
                GlobalStyleRule::new().property(Property::Color, "red"),
            )
            .unwrap();
        styles
            .font_face("brand", FontFaceRule::new("url(brand.woff2)"))
            .unwrap();
        styles
            .keyframes(
                "fade",
                Keyframes::new().step("from", Properties::new().with(Property::Opacity, 0)),
            )
            .unwrap();
        styles.end().unwrap();

        let kinds: Vec<BlockKind> = collector.css_for(&scope()).iter().map(Css::kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Import,
                BlockKind::Global,
                BlockKind::Selector,
                BlockKind::FontFace,
                BlockKind::Keyframes,
            ]
        );
    }

    #[test]
    fn test_global_theme() {
        let collector = Collector::new();
        let styles = FileStyles::open(&collector, scope());
        let contract = NullableTokens::new().leaf("brand", None);
        let vars = create_theme_contract(&contract, default_var_name).unwrap();

        styles
            .global_theme(":root", &vars, &Tokens::new().leaf("brand", "tomato".to_string()))
            .unwrap();
        let err = styles
            .global_theme(":root", &vars, &Tokens::new())
            .unwrap_err();
        assert!(matches!(err, StyleError::Theme(ThemeError::MissingToken { .. })));

        let Css::Global { rule, .. } = &collector.css_for(&scope())[0] else {
            panic!("expected a global block");
        };
        assert_eq!(
            rule.style().vars().get("--brand").map(String::as_str),
            Some("tomato")
        );
    }

    #[test]
    fn test_rejected_style_leaves_no_class_or_composition() {
        let collector = Collector::new();
        let styles = FileStyles::open(&collector, scope());
        let red = StyleRule::new().property(Property::Color, "red");
        styles.style("early", red.clone()).unwrap();
        collector.on_end_file_scope(&scope()).unwrap();

        assert!(styles.style("late", red.clone()).is_err());
        let complex = vec![
            crate::ComplexStyleItem::from(red),
            crate::ComplexStyleItem::from("early"),
        ];
        assert!(styles.style_complex("later", complex).is_err());

        assert_eq!(collector.class_names(), vec!["early".to_string()]);
        assert!(collector.compositions().is_empty());
        assert_eq!(collector.css_for(&scope()).len(), 1);
    }

    #[test]
    fn test_append_after_end_is_rejected_by_adapter() {
        let collector = Collector::new();
        FileStyles::open(&collector, scope()).end().unwrap();

        let reopened = FileStyles::open(&collector, scope());
        let err = reopened
            .style("late", StyleRule::new().property(Property::Color, "red"))
            .unwrap_err();
        assert_eq!(err, ProtocolError::ScopeClosed(scope()));
        assert!(collector.class_names().is_empty());
        assert!(collector.css_for(&scope()).is_empty());
        assert_eq!(
            reopened.end(),
            Err(ProtocolError::ScopeAlreadyClosed(scope()))
        );
    }
}
