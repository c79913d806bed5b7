//! Tests for loading bubble files and evaluating their formulas

use pretty_assertions::assert_eq;
use shine::prelude::*;
use shine::{evaluate_all, universe_from_json, EvaluationStats};
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Test that every record becomes a bubble
#[test]
fn test_parse_bubbles() {
    let universe = Universe::open(fixture("example.json")).unwrap();
    assert_eq!(universe.len(), 2);

    let greeting = universe.get("this-is-a-uuid").unwrap();
    assert_eq!(greeting.name(), "greeting");
    assert_eq!(greeting.position(), Position::new(120.0, 80.0));
    assert_eq!(greeting.formula(), Some(&Formula::string("Hello, world!")));
}

/// Test evaluation through a host-supplied builtin bubble
#[test]
fn test_eval_bubbles() {
    let universe = Universe::open(fixture("example.json"))
        .unwrap()
        .with_builtins();

    let bubble = universe.get("this-is-another-uuid").unwrap();
    let result = bubble.evaluate(&universe).unwrap();
    assert_eq!(result, Value::Int("Hello, world!".len() as i64));
}

/// Test a custom native bubble, the way a host adds its own functions
#[test]
fn test_custom_native_bubble() {
    let mut universe = Universe::open(fixture("example.json")).unwrap();
    universe.insert(Bubble::new(
        "immaterial-uuid",
        "strlen",
        Position::default(),
        Some(Formula::Native(Value::function("strlen", |args| {
            Ok(Value::Int(args[0].as_str().map_or(0, str::len) as i64))
        }))),
    ));

    assert_eq!(
        universe.evaluate_reference("greeting length").unwrap(),
        Value::Int(13)
    );
}

/// Test the reference precedence rules on a loaded file
#[test]
fn test_reference_precedence_from_json() {
    let universe = universe_from_json(
        r#"[
            {"identifier": "A", "position": {"x": 0, "y": 0}, "name": "foo",
             "formula": {"type": "literal_string", "value": "1"}},
            {"identifier": "B", "position": {"x": 0, "y": 0}, "name": "foo",
             "formula": {"type": "literal_string", "value": "2"}}
        ]"#,
    )
    .unwrap();

    assert_eq!(universe.evaluate_reference("foo").unwrap(), Value::string("2"));
    assert_eq!(universe.evaluate_reference("A").unwrap(), Value::string("1"));
    assert!(matches!(
        universe.evaluate_reference("missing"),
        Err(FormulaError::UnresolvedReference(_))
    ));
}

/// Test universe-wide evaluation of a loaded file
#[test]
fn test_evaluate_all_from_file() {
    let universe = Universe::open(fixture("example.json"))
        .unwrap()
        .with_builtins();
    let evaluation = evaluate_all(&universe, &EvaluationOptions::default()).unwrap();

    assert_eq!(
        evaluation.get("this-is-another-uuid").map(|r| r.as_ref().ok()),
        Some(Some(&Value::Int(13)))
    );
    assert_eq!(
        evaluation.stats,
        EvaluationStats {
            // Both file bubbles plus the builtins
            formula_count: universe.len(),
            evaluated: universe.len(),
            errors: 0,
            circular_references: 0,
        }
    );
}

/// Test loading from a file on disk
#[test]
fn test_open_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"identifier": "only", "position": {{"x": 1, "y": 1}}, "name": "solo"}}]"#
    )
    .unwrap();

    let universe = Universe::open(file.path()).unwrap();
    let bubble = universe.get("only").unwrap();
    assert_eq!(bubble.formula(), None);
    assert!(matches!(
        universe.evaluate_reference("solo"),
        Err(FormulaError::EmptyFormula(_))
    ));
}

/// Test that a missing file surfaces as an I/O error
#[test]
fn test_open_missing_file() {
    assert!(matches!(
        Universe::open(fixture("does-not-exist.json")),
        Err(Error::Io(_))
    ));
}
