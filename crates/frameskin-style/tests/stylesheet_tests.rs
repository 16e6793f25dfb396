//! End-to-end tests: parse, match, print and compute through the public API.

use frameskin_style::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn query_paths(tree: &str, selector: &str) -> Vec<String> {
    let tree = AdhocTree::parse(tree).unwrap();
    let list = parse_selector_list(selector).unwrap();
    query(&tree, tree.root(), &list)
        .into_iter()
        .map(|node| tree.format_path(node))
        .collect()
}

#[test]
fn parse_error_table() {
    init_tracing();
    let cases = [
        ("{ border-width: 2px; }", "need at least one selector"),
        (", { border-width: 2px; }", "selector must not be empty"),
        ("p { border-width: 2px;", "Expected }"),
        ("p } border-width: 2px;", "Expected { but got \"}"),
        ("/* unmatched", "Expected */ but got EOF"),
        ("/* unmatched\n", "Expected */ but got EOF"),
        ("/*\n", "Expected */ but got EOF"),
        ("* // { }", "but got EOF"),
        ("* { // }", "Expected } but got EOF"),
        ("* { border-width: 1sdfpx; }", "unparsable suffix"),
        ("* { border-width: 1px 2px 3px 4px 5px; }", "\"border-width\" does not accept 5"),
    ];
    for (source, expected) in cases {
        let err = parse_stylesheet(source).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "{source:?}: {err} does not contain {expected:?}"
        );
        assert!(err.position().is_some());
    }
}

#[test]
fn selector_query_table() {
    init_tracing();
    let tree = "(window (focus (e f)) (nonfocus))";
    let cases: [(&str, &[&str]); 10] = [
        (".window", &[""]),
        (".window>.focus", &["0"]),
        (".window > .focus", &["0"]),
        (".window >.focus", &["0"]),
        (".window * > .focus", &[]),
        (".window > .focus + *", &["1"]),
        (":first-child", &["0", "0 0"]),
        (":last-child", &["0 0", "1"]),
        ("*", &["", "0", "0 0", "1"]),
        ("* *", &["0", "0 0", "1"]),
    ];
    for (selector, expected) in cases {
        assert_eq!(query_paths(tree, selector), expected, "{selector}");
    }
}

#[test]
fn element_names_and_classes() {
    let tree = "(window (tabbar (tab) (tab focused) (tab urgent)))";
    assert_eq!(query_paths(tree, "tab"), ["0 0", "0 1", "0 2"]);
    assert_eq!(query_paths(tree, "tab.focused"), ["0 1"]);
    assert_eq!(query_paths(tree, "window tab:last-child"), ["0 2"]);
    assert_eq!(query_paths(tree, ".focused + tab"), ["0 2"]);
    assert_eq!(query_paths(tree, "tabbar > .tab:first-child , .urgent"), ["0 0", "0 2"]);
    assert!(query_paths(tree, "frame").is_empty());
}

#[test]
fn non_ascii_labels_match() {
    let tree = "(fenêtre (onglet café) (onglet))";
    assert_eq!(query_paths(tree, ".café"), ["0"]);
    assert_eq!(query_paths(tree, "fenêtre > onglet:last-child"), ["1"]);

    let sheet = parse_stylesheet(".café { color: red; }").unwrap();
    assert_eq!(render(&sheet), ".café {\n    color: red;\n}\n");
}

#[test]
fn stylesheet_rules_match_nodes() {
    let sheet = Stylesheet::from_css(
        ".tab { border-width: 1px; }
         .tabbar > .tab:first-child { border-left-width: 0; }
         .tab.focused { border-color: #9fbc00; background-color: #1234ab; }",
    )
    .unwrap();
    let tree = AdhocTree::parse("(tabbar (tab focused) (tab))").unwrap();

    let first = tree.node_at_path("0").unwrap();
    let style = sheet.compute_style(&tree, first);
    assert_eq!(
        style.to_string(),
        "background-color: #1234ab;
border-bottom-color: #9fbc00;
border-bottom-width: 1px;
border-left-color: #9fbc00;
border-left-width: 0;
border-right-color: #9fbc00;
border-right-width: 1px;
border-top-color: #9fbc00;
border-top-width: 1px;
"
    );

    let second = tree.node_at_path("1").unwrap();
    let style = sheet.compute_style(&tree, second);
    assert_eq!(style.len(), 4);
    assert_eq!(style.get("border-left-width"), Some("1px"));

    let root_style = sheet.compute_style(&tree, tree.root());
    assert!(root_style.is_empty());
}

#[test]
fn typed_values_are_available() {
    let sheet = parse_stylesheet(".tab { padding: 2px 4px; border-color: red; }").unwrap();
    let declarations = &sheet.rules[0].declarations;

    let PropertyValue::Lengths(padding) = &declarations[0].value else {
        panic!("padding should be lengths: {:?}", declarations[0].value);
    };
    assert_eq!(
        *padding,
        EdgeValues::symmetric(LengthValue::Px(2.0), LengthValue::Px(4.0))
    );

    assert_eq!(
        declarations[1].value,
        PropertyValue::Colors(EdgeValues::uniform(Color::rgb(255, 0, 0)))
    );
}

#[test]
fn registry_lists_box_model() {
    let registry = PropertyRegistry::global();
    let shorthands: Vec<_> = registry
        .iter()
        .filter(|spec| spec.is_shorthand())
        .map(|spec| spec.name)
        .collect();
    assert_eq!(shorthands, ["border-width", "border-color", "padding", "margin"]);
    assert_eq!(registry.get("font").map(|spec| spec.max_values), Some(16));
}
