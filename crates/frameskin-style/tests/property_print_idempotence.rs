//! Printing is idempotent and keeps declarations in order.
//!
//! For any generated stylesheet `s`, `render(parse(render(parse(s))))`
//! equals `render(parse(s))`, and every declaration (duplicates included)
//! survives parsing in source order.

use frameskin_style::prelude::*;
use proptest::prelude::*;

fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,6}"
}

/// A compound selector in source form; never empty.
fn arb_compound() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(None), Just(Some("*".to_string())), arb_ident().prop_map(Some)],
        proptest::collection::vec(arb_ident(), 0..3),
        prop_oneof![Just(""), Just(":first-child"), Just(":last-child")],
    )
        .prop_filter("compound must not be empty", |(ty, classes, pseudo)| {
            ty.is_some() || !classes.is_empty() || !pseudo.is_empty()
        })
        .prop_map(|(ty, classes, pseudo)| {
            let mut out = ty.unwrap_or_default();
            for class in classes {
                out.push('.');
                out.push_str(&class);
            }
            out.push_str(pseudo);
            out
        })
}

fn arb_combinator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("\n  "), Just(">"), Just(" > "), Just("+"), Just(" +\t")]
}

fn arb_selector() -> impl Strategy<Value = String> {
    (
        arb_compound(),
        proptest::collection::vec((arb_combinator(), arb_compound()), 0..3),
    )
        .prop_map(|(first, rest)| {
            let mut out = first;
            for (combinator, compound) in rest {
                out.push_str(combinator);
                out.push_str(&compound);
            }
            out
        })
}

fn arb_length() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u16..500).prop_map(|n| format!("{n}px")),
        (1u8..10).prop_map(|n| format!("{n}.5em")),
        Just("0".to_string()),
        (0u8..100).prop_map(|n| format!("{n}%")),
    ]
}

fn arb_color() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("red".to_string()),
        Just("black".to_string()),
        "#[0-9a-f]{3}",
        "#[0-9a-f]{6}",
    ]
}

/// `(property, values)` pairs the registry accepts.
fn arb_declaration() -> impl Strategy<Value = (String, Vec<String>)> {
    prop_oneof![
        proptest::collection::vec(arb_length(), 1..=4).prop_map(|v| ("border-width".to_string(), v)),
        proptest::collection::vec(arb_length(), 1..=4).prop_map(|v| ("padding".to_string(), v)),
        proptest::collection::vec(arb_color(), 1..=4).prop_map(|v| ("border-color".to_string(), v)),
        arb_color().prop_map(|c| ("background-color".to_string(), vec![c])),
        arb_length().prop_map(|l| ("border-left-width".to_string(), vec![l])),
        prop_oneof![Just("left"), Just("center"), Just("right")]
            .prop_map(|k| ("text-align".to_string(), vec![k.to_string()])),
        proptest::collection::vec(arb_ident(), 1..4).prop_map(|v| ("font".to_string(), v)),
    ]
}

#[derive(Debug, Clone)]
struct GenRule {
    selectors: Vec<String>,
    declarations: Vec<(String, Vec<String>)>,
    trailing_semicolon: bool,
}

fn arb_rule() -> impl Strategy<Value = GenRule> {
    (
        proptest::collection::vec(arb_selector(), 1..3),
        proptest::collection::vec(arb_declaration(), 0..5),
        any::<bool>(),
    )
        .prop_map(|(selectors, declarations, trailing_semicolon)| GenRule {
            selectors,
            declarations,
            trailing_semicolon,
        })
}

fn arb_trivia() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just(" "), Just("\n"), Just(" /* c */ "), Just("// c\n")]
}

fn source_of(rules: &[GenRule], trivia: &[&str]) -> String {
    let mut out = String::new();
    for (i, rule) in rules.iter().enumerate() {
        let gap = trivia[i % trivia.len()];
        out.push_str(&rule.selectors.join(" ,"));
        out.push_str(gap);
        out.push('{');
        for (j, (property, values)) in rule.declarations.iter().enumerate() {
            out.push_str(gap);
            out.push_str(property);
            out.push(':');
            out.push(' ');
            out.push_str(&values.join(" "));
            if j + 1 < rule.declarations.len() || rule.trailing_semicolon {
                out.push(';');
            }
        }
        out.push_str(gap);
        out.push_str("}\n");
    }
    out
}

fn arb_source() -> impl Strategy<Value = (Vec<GenRule>, String)> {
    (
        proptest::collection::vec(arb_rule(), 0..4),
        proptest::collection::vec(arb_trivia(), 1..4),
    )
        .prop_map(|(rules, trivia)| {
            let source = source_of(&rules, &trivia);
            (rules, source)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Printing a parsed stylesheet is a fixed point of parse-then-print.
    #[test]
    fn render_is_idempotent((_, source) in arb_source()) {
        let once = render(&parse_stylesheet(&source).unwrap());
        let twice = render(&parse_stylesheet(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    /// Every declaration survives parsing, in source order.
    #[test]
    fn declaration_order_is_kept((rules, source) in arb_source()) {
        let sheet = parse_stylesheet(&source).unwrap();
        prop_assert_eq!(sheet.len(), rules.len());
        for (parsed, generated) in sheet.iter().zip(&rules) {
            prop_assert_eq!(parsed.selectors.len(), generated.selectors.len());
            let got: Vec<_> = parsed
                .declarations
                .iter()
                .map(|d| (d.property.clone(), d.values.clone()))
                .collect();
            prop_assert_eq!(&got, &generated.declarations);
        }
    }

    /// Parsing the canonical form yields the same AST.
    #[test]
    fn canonical_form_parses_to_same_rules((_, source) in arb_source()) {
        let sheet = parse_stylesheet(&source).unwrap();
        let reparsed = parse_stylesheet(&render(&sheet)).unwrap();
        prop_assert_eq!(sheet.rules, reparsed.rules);
    }
}
