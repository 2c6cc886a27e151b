use std::collections::BTreeSet;

use serde_json::Value;

/// Every locale bundle must define exactly the paths of the reference (`en`)
/// bundle, with the same list lengths, and nothing else.
///
/// If you add a locale:
/// 1. Copy `messages/en.json` to `messages/<code>.json`
/// 2. Register it below and in `LocaleCode`
/// 3. Run `cargo test -p folio-ui` to confirm parity.
#[test]
fn all_locales_match_reference_paths() {
    const EN: &str = include_str!("../messages/en.json");
    const FR: &str = include_str!("../messages/fr.json");
    const AR: &str = include_str!("../messages/ar.json");
    const DE: &str = include_str!("../messages/de.json");

    let reference = leaf_paths(EN, "en");
    assert!(!reference.is_empty(), "Reference (en) bundle has no messages.");

    let locales: &[(&str, &str)] = &[("fr", FR), ("ar", AR), ("de", DE)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        let paths = leaf_paths(src, locale);
        let missing: Vec<_> = reference.difference(&paths).cloned().collect();
        let extra: Vec<_> = paths.difference(&reference).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} message(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} has {} message(s) not in en:\n  {}",
                extra.len(),
                extra.join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Bundle parity check failed:\n\n{}\n\nHint: copy the missing entries from en, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn no_message_is_blank() {
    for (locale, src) in [
        ("en", include_str!("../messages/en.json")),
        ("fr", include_str!("../messages/fr.json")),
        ("ar", include_str!("../messages/ar.json")),
        ("de", include_str!("../messages/de.json")),
    ] {
        let root: Value = serde_json::from_str(src).unwrap();
        let mut empty = Vec::new();
        visit(&root, String::new(), &mut |path, leaf| {
            if leaf.trim().is_empty() {
                empty.push(path.to_string());
            }
        });
        assert!(empty.is_empty(), "{locale} has empty messages: {empty:?}");
    }
}

/// Dotted paths of every string leaf; list items contribute their index.
fn leaf_paths(src: &str, locale: &str) -> BTreeSet<String> {
    let root: Value = serde_json::from_str(src)
        .unwrap_or_else(|err| panic!("messages/{locale}.json is not valid JSON: {err}"));
    assert!(root.is_object(), "messages/{locale}.json must be an object");

    let mut paths = BTreeSet::new();
    visit(&root, String::new(), &mut |path, _| {
        paths.insert(path.to_string());
    });
    paths
}

fn visit(node: &Value, path: String, on_leaf: &mut dyn FnMut(&str, &str)) {
    let join = |segment: &str| {
        if path.is_empty() {
            segment.to_string()
        } else {
            format!("{path}.{segment}")
        }
    };
    match node {
        Value::String(text) => on_leaf(&path, text),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                visit(item, join(&index.to_string()), on_leaf);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                visit(child, join(key), on_leaf);
            }
        }
        other => panic!("unsupported value at {path}: {other}"),
    }
}
