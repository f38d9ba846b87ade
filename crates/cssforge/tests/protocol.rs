//! End-to-end checks of the authoring session against the collecting adapter.

use cssforge::normalize::merge_fragments;
use cssforge::theme::{assign_vars, create_theme_contract, default_var_name};
use cssforge::{
    Adapter, BlockKind, Collector, CollectorConfig, Composition, Css, FileScope, FileStyles,
    FontFaceBuilder, IdentOption, NullableTokens, Property, ProtocolError, SchemaError,
    SimplePseudo, StyleProperties, StyleRule, Tokens,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn foo_rule() -> StyleRule {
    StyleRule::new()
        .property(Property::Color, "red")
        .pseudo(
            SimplePseudo::Hover,
            StyleProperties::new().property(Property::Color, "blue"),
        )
        .media(
            "(min-width: 100px)",
            StyleProperties::new().property(Property::Color, "green"),
        )
}

#[test]
fn foo_in_a_ts_appends_every_facet_before_close() {
    init_logging();
    let collector = Collector::new();
    let scope = FileScope::new("a.ts");

    let styles = FileStyles::open(&collector, scope.clone());
    styles.style("foo", foo_rule()).unwrap();
    assert!(!collector.is_closed(&scope));
    assert_eq!(collector.css_for(&scope).len(), 3);
    styles.end().unwrap();

    let blocks = collector.css_for(&scope);
    assert!(blocks.len() >= 3);
    assert!(blocks.iter().all(|b| b.kind() == BlockKind::Local));
    assert!(blocks.iter().all(|b| b.selector_text() == Some(".foo")));
    assert_eq!(collector.scopes(), vec![scope.clone()]);
    assert_eq!(merge_fragments(".foo", &blocks), Some(foo_rule()));
}

#[test]
fn appends_after_close_fail_and_leave_blocks_untouched() {
    init_logging();
    let collector = Collector::new();
    let scope = FileScope::new("src/theme.css.ts").with_package("@acme/ui");

    collector
        .append_css(Css::local(".a", StyleRule::new()), &scope)
        .unwrap();
    collector.on_end_file_scope(&scope).unwrap();

    assert_eq!(
        collector.append_css(Css::local(".b", StyleRule::new()), &scope),
        Err(ProtocolError::ScopeClosed(scope.clone()))
    );
    assert_eq!(
        collector.on_end_file_scope(&scope),
        Err(ProtocolError::ScopeAlreadyClosed(scope.clone()))
    );
    assert_eq!(collector.css_for(&scope).len(), 1);

    // Same path, different package: a separate scope.
    let sibling = FileScope::new("src/theme.css.ts");
    collector
        .append_css(Css::local(".b", StyleRule::new()), &sibling)
        .unwrap();
}

#[test]
fn empty_files_can_close() {
    let collector = Collector::new();
    let scope = FileScope::new("empty.css.ts");
    FileStyles::open(&collector, scope.clone()).end().unwrap();
    assert!(collector.is_closed(&scope));
    assert!(collector.css_for(&scope).is_empty());
}

#[test]
fn composition_registration_rules() {
    let collector = Collector::new();
    let composition = Composition::new("stack", "flex column");

    collector.register_composition(composition.clone()).unwrap();
    collector.register_composition(composition).unwrap();
    assert!(matches!(
        collector.register_composition(Composition::new("stack", "flex row")),
        Err(ProtocolError::CompositionConflict { .. })
    ));

    collector.mark_composition_used("never-registered");
    assert_eq!(collector.compositions().len(), 1);
    assert_eq!(collector.unused_compositions().len(), 1);
}

#[test]
fn font_face_schema_errors_happen_before_the_adapter() {
    let collector = Collector::new();
    let scope = FileScope::new("fonts.css.ts");
    let styles = FileStyles::open(&collector, scope.clone());

    assert_eq!(
        FontFaceBuilder::new().font_weight(400).build().unwrap_err(),
        SchemaError::MissingFontSource
    );
    assert_eq!(
        FontFaceBuilder::new()
            .src("url(a.woff2)")
            .font_family("A")
            .build()
            .unwrap_err(),
        SchemaError::FontFamilyNotAllowed
    );
    assert!(collector.css_for(&scope).is_empty());

    let face = FontFaceBuilder::new().src("url(a.woff2)").build().unwrap();
    assert_eq!(styles.font_face("brand", face).unwrap(), "brand");
    styles.end().unwrap();

    let json = serde_json::to_value(&collector.css_for(&scope)[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "fontFace",
            "rule": {"src": "url(a.woff2)", "fontFamily": "brand"}
        })
    );
}

#[test]
fn theme_contract_to_assignments() {
    let contract: NullableTokens = serde_json::from_str(r#"{"color": {"brand": null}}"#).unwrap();
    let vars = create_theme_contract(&contract, default_var_name).unwrap();
    assert_eq!(
        serde_json::to_value(&vars).unwrap(),
        serde_json::json!({"color": {"brand": "var(--color-brand)"}})
    );

    let theme = Tokens::from_yaml_str("color:\n  brand: tomato\n").unwrap();
    theme.conforms_to(&contract).unwrap();
    let assigned = assign_vars(&vars, &theme).unwrap();

    let collector = Collector::new();
    let scope = FileScope::new("theme.css.ts");
    let styles = FileStyles::open(&collector, scope.clone());
    styles.global_theme(":root", &vars, &theme).unwrap();
    styles.end().unwrap();

    let json = serde_json::to_value(&collector.css_for(&scope)[0]).unwrap();
    assert_eq!(json["type"], "global");
    assert_eq!(json["rule"]["vars"]["--color-brand"], "tomato");
    assert_eq!(assigned.len(), 1);
}

#[test]
fn adapters_are_usable_as_trait_objects() {
    let short = Collector::with_config(
        CollectorConfig::from_yaml_str("identOption: short").unwrap(),
    );
    let adapters: Vec<Box<dyn Adapter>> = vec![Box::new(Collector::new()), Box::new(short)];
    let options: Vec<IdentOption> = adapters.iter().map(|a| a.ident_option()).collect();
    assert_eq!(options, vec![IdentOption::Debug, IdentOption::Short]);

    let styles = FileStyles::open(adapters[1].as_ref(), FileScope::new("x.ts"));
    assert_eq!(styles.ident_option(), IdentOption::Short);
}

#[test]
fn authored_json_normalizes_like_builders() {
    let authored = r#"{
        "color": "red",
        ":hover": {"color": "blue"},
        "@media": {"(min-width: 100px)": {"color": "green"}}
    }"#;
    let rule: StyleRule = serde_json::from_str(authored).unwrap();
    assert_eq!(rule, foo_rule());

    let nested = r#"{"@media": {"print": {"@media": {"screen": {}}}}}"#;
    let err = serde_json::from_str::<StyleRule>(nested).unwrap_err().to_string();
    assert!(err.contains("@media"), "{}", err);
}
