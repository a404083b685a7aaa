//! Library Loader Tests
//!
//! Tests loading the fixture libraries through both APIs:
//! - Keyword information from dynamic introspection and hybrid members
//! - Skipping and strict failure on invalid keywords
//! - Running keywords and mapping results to statuses

use robolib_api::{ArgumentSpec, LibraryKind, TypeRef, ValueType};
use robolib_core::{LibraryLoader, LoadError, LoaderConfig, Status};
use robolib_testing::{Broken, Calculator, Strings};
use serde_json::{json, Map, Value};

fn named(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_load_dynamic_library() {
    let lib = LibraryLoader::default()
        .load(LibraryKind::dynamic(Calculator::new()))
        .unwrap();

    assert_eq!(lib.name(), "Calculator");
    assert_eq!(lib.metadata().version, Some(semver_1_2_0()));
    assert!(lib.doc().starts_with("Calculator library for tests."));
    assert_eq!(lib.init_doc(), "The library takes no arguments.");
    assert_eq!(
        lib.keyword_names(),
        vec![
            "Add",
            "Divide",
            "Sum All",
            "Should Be Equal",
            "Skip If",
            "Random Integer"
        ]
    );
    assert!(lib.skipped().is_empty());

    let add = lib.keyword("Add").unwrap();
    assert_eq!(add.short_doc, "Adds two numbers and returns the sum.");
    assert_eq!(add.tags, vec!["arithmetic"]);
    assert_eq!(add.arguments.to_string(), "a, b");
    assert_eq!(add.types.get("a"), Some(&TypeRef::ByClass(ValueType::Float)));
    assert_eq!(
        add.types.return_type,
        Some(TypeRef::ByClass(ValueType::Float))
    );
    let source = add.source.as_ref().unwrap();
    assert!(source.path.as_ref().unwrap().ends_with("calculator.rs"));
    assert!(source.line.is_some());

    let random = lib.keyword("Random Integer").unwrap();
    assert_eq!(random.arguments.named_only.len(), 1);
    assert!(random.types.get("seed").is_some());
}

fn semver_1_2_0() -> semver::Version {
    semver::Version::new(1, 2, 0)
}

#[test]
fn test_load_hybrid_library() {
    let lib = LibraryLoader::default()
        .load(LibraryKind::hybrid(Strings::new()))
        .unwrap();

    assert_eq!(lib.kind().api_name(), "hybrid");
    assert_eq!(lib.doc(), "String keywords for tests.");

    let concat = lib.keyword("Concatenate").unwrap();
    assert_eq!(concat.arguments.var_positional.as_deref(), Some("parts"));
    assert_eq!(concat.arguments.named_only[0].name, "separator");
    assert!(concat.source.as_ref().unwrap().line.is_some());

    let log = lib.keyword("Log Values").unwrap();
    assert_eq!(log.arguments, ArgumentSpec::any());
    assert_eq!(log.source.as_ref().unwrap().line, None);

    let upper = lib.keyword("Convert To Upper Case").unwrap();
    assert_eq!(upper.tags, vec!["conversion"]);
}

#[test]
fn test_run_statuses() {
    let calc = LibraryLoader::default()
        .load(LibraryKind::dynamic(Calculator::new()))
        .unwrap();

    let outcome = calc.run("Add", &[json!(40), json!(2)], &Map::new());
    assert_eq!(outcome.status, Status::Pass);
    assert_eq!(outcome.return_value, json!(42));

    let outcome = calc.run("Divide", &[json!(1), json!(0)], &Map::new());
    assert_eq!(outcome.status, Status::Fail);
    assert_eq!(outcome.message.as_deref(), Some("Cannot divide by zero."));

    let outcome = calc.run("Skip If", &[json!(true)], &Map::new());
    assert_eq!(outcome.status, Status::Skip);
    assert_eq!(outcome.message.as_deref(), Some("Skipped"));

    let outcome = calc.run("Random Integer", &[], &named(&[("seed", json!(1)), ("bogus", json!(1))]));
    assert_eq!(outcome.status, Status::Fail);
    assert_eq!(
        outcome.message.as_deref(),
        Some("Got unexpected named argument 'bogus'.")
    );

    let strings = LibraryLoader::default()
        .load(LibraryKind::hybrid(Strings::new()))
        .unwrap();

    let outcome = strings.run("Length Should Be", &[json!("abc"), json!(1)], &Map::new());
    assert_eq!(outcome.status, Status::Fail);
    assert!(outcome.continuable);

    let outcome = strings.run("Fail Fatally", &[], &Map::new());
    assert!(outcome.fatal);

    let outcome = strings.run("Read Text File", &[json!("/no/such/file")], &Map::new());
    assert!(outcome.unexpected);

    let outcome = strings.run(
        "Concatenate",
        &[json!("a"), json!("b")],
        &named(&[("separator", json!("+"))]),
    );
    assert_eq!(outcome.return_value, json!("a+b"));
}

#[test]
fn test_load_broken_library_lenient() {
    let lib = LibraryLoader::default()
        .load(LibraryKind::dynamic(Broken))
        .unwrap();

    assert_eq!(lib.keyword_names(), vec!["Works", "Zero Line"]);
    assert_eq!(
        lib.skipped(),
        [
            "".to_string(),
            "Kwargs First".to_string(),
            "Default Before Required".to_string(),
            "Typed Ghost".to_string()
        ]
    );
    assert_eq!(lib.metadata().version, None);
    assert!(lib.keyword("Zero Line").unwrap().source.is_none());
    assert_eq!(lib.doc(), "Deliberately broken library.");
}

#[test]
fn test_load_broken_library_strict() {
    let err = LibraryLoader::new(LoaderConfig::new().strict(true))
        .load(LibraryKind::dynamic(Broken))
        .unwrap_err();

    match err {
        LoadError::InvalidKeyword { library, name, .. } => {
            assert_eq!(library, "Broken");
            assert_eq!(name, "");
        }
        other => panic!("Expected InvalidKeyword, got {:?}", other),
    }
}
