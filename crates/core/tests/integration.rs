use cva_core::{load_selection_from_json, Cva, Selection, Value};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

const BUTTON_JSON: &str = r#"{
    "base": ["button", "font-semibold"],
    "variants": {
        "type": { "primary": "bg-blue-500 text-white" },
        "size": { "sm": "text-sm px-2 py-1" }
    },
    "defaultVariants": { "type": "primary", "size": "sm" },
    "compoundVariants": [
        { "size": "sm", "type": "primary", "class": "uppercase font-bold" }
    ]
}"#;

fn tokens(class: &str) -> Vec<&str> {
    class.split(' ').collect()
}

#[test]
fn test_end_to_end_defaults() {
    let cva = Cva::from_json(
        r#"{
            "base": ["button", "font-semibold"],
            "variants": {
                "type": { "primary": "bg-blue-500 text-white" },
                "size": { "sm": "text-sm px-2 py-1" }
            },
            "defaultVariants": { "type": "primary", "size": "sm" }
        }"#,
    )
    .expect("Failed to load config");

    assert_eq!(
        cva.resolve(&Selection::new()),
        "button font-semibold bg-blue-500 text-white text-sm px-2 py-1"
    );

    // 未声明的变体值只是不贡献类名
    assert_eq!(
        cva.resolve(&Selection::new().with("type", "secondary")),
        "button font-semibold text-sm px-2 py-1"
    );
}

#[test]
fn test_end_to_end_compound_rule() {
    let cva = Cva::from_json(BUTTON_JSON).expect("Failed to load config");

    let matched = cva.resolve(&Selection::new().with("size", "sm").with("type", "primary"));
    assert!(tokens(&matched).contains(&"uppercase"));
    assert!(tokens(&matched).contains(&"font-bold"));

    let unmatched = cva.resolve(&Selection::new().with("size", "lg").with("type", "primary"));
    assert!(!tokens(&unmatched).contains(&"uppercase"));
    assert!(!tokens(&unmatched).contains(&"font-bold"));
}

#[test]
fn test_default_fallback_equals_explicit() {
    let cva = Cva::from_json(BUTTON_JSON).expect("Failed to load config");
    let explicit = cva.resolve(&Selection::new().with("type", "primary").with("size", "sm"));

    for omitted in [
        Selection::new(),
        Selection::new().with("type", Value::Null),
        Selection::new().with("size", ""),
        Selection::new().with("type", "").with("size", Value::Null),
    ] {
        assert_eq!(cva.resolve(&omitted), explicit);
    }
}

#[test]
fn test_selection_from_json() {
    let cva = Cva::from_json(BUTTON_JSON).expect("Failed to load config");
    let selection =
        load_selection_from_json(r#"{"size": null, "class": "mt-4"}"#).expect("Failed to load selection");

    assert_eq!(
        cva.resolve(&selection),
        "button font-semibold bg-blue-500 text-white text-sm px-2 py-1 uppercase font-bold mt-4"
    );
}

#[test]
fn test_no_schema_only_base_and_class() {
    let cva = Cva::from_json(r#"{"base": ["  card", "", "rounded  "]}"#).expect("Failed to load config");

    assert_eq!(cva.resolve(&Selection::new()), "card rounded");
    assert_eq!(
        cva.resolve(&Selection::new().with("size", "lg").with_class(" shadow ")),
        "card rounded shadow"
    );
    assert_eq!(cva.combinations(), vec![Selection::new()]);
}

#[test]
fn test_normalized_output_for_all_combinations() {
    let cva = Cva::from_json(
        r#"{
            "base": ["", " base "],
            "variants": {
                "intent": { "info": "", "warn": " text-amber-600 ", "error": "text-red-600" },
                "outlined": { "true": "border", "false": "" },
                "size": { "sm": "   ", "lg": "text-lg" }
            },
            "compoundVariants": [
                { "intent": ["warn", "error"], "outlined": true, "class": " ring-2 " },
                { "class": "" }
            ]
        }"#,
    )
    .expect("Failed to load config");

    let resolved = cva.resolve_combinations();
    assert_eq!(resolved.len(), 3 * 2 * 2);

    for (selection, class) in &resolved {
        assert_eq!(class.trim(), class.as_str(), "untrimmed output for {:?}", selection);
        assert!(!class.contains("  "), "double space for {:?}", selection);
    }

    let distinct: HashSet<String> = resolved
        .iter()
        .map(|(selection, _)| format!("{:?}", selection.values))
        .collect();
    assert_eq!(distinct.len(), 12);
}

#[test]
fn test_shared_across_threads() {
    let cva = Cva::from_json(BUTTON_JSON).expect("Failed to load config");
    let expected = cva.resolve(&Selection::new());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(cva.resolve(&Selection::new()), expected);
                assert_eq!(cva.combinations().len(), 1);
            });
        }
    });
}
