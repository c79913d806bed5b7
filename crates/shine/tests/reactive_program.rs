//! Tests for running programs whose variables are live cells

use pretty_assertions::assert_eq;
use shine::prelude::*;
use shine::{load_program, program_from_json};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Builtin environment whose `print` records its arguments instead
fn recording_environment() -> (Environment, Rc<RefCell<Vec<Value>>>) {
    let printed = Rc::new(RefCell::new(Vec::new()));
    let mut env = shine::builtins::environment();
    let sink = Rc::clone(&printed);
    let print = Value::function("print", move |args| {
        sink.borrow_mut().extend(args.iter().cloned());
        Ok(Value::Nil)
    });
    env.lookup("print").unwrap().set(print).unwrap();
    (env, printed)
}

/// Test that a printed call result re-prints on every upstream reassignment
#[test]
fn test_print_cascade_from_file() {
    let program = load_program(fixture("program.json")).unwrap();
    let (mut env, printed) = recording_environment();

    let results = program.evaluate(&mut env).unwrap();
    assert_eq!(results.len(), 6);

    assert_eq!(
        *printed.borrow(),
        vec![Value::Int(8), Value::Int(13), Value::Int(16), Value::Int(18)]
    );
    assert_eq!(env.get("y").unwrap().get(), Value::Int(18));
}

/// Test that only call and literal statements produce cells
#[test]
fn test_statement_results() {
    let program = program_from_json(
        r#"[
            {"type": "assignment", "name": "x", "value": {"type": "literal", "value": 2}},
            {"type": "literal", "value": "loose"},
            {"type": "function_call", "name": "mul",
             "args": [{"type": "variable", "name": "x"}, {"type": "literal", "value": 4}]}
        ]"#,
    )
    .unwrap();
    let mut env = shine::builtins::environment();

    let results = program.evaluate(&mut env).unwrap();
    assert!(results[0].is_none());
    assert_eq!(results[1].as_ref().map(Cell::get), Some(Value::string("loose")));

    let product = results[2].as_ref().unwrap();
    assert_eq!(product.get(), Value::Int(8));

    env.get("x").unwrap().set(5).unwrap();
    assert_eq!(product.get(), Value::Int(20));
}

/// Test that an unbound variable stops the program
#[test]
fn test_unbound_variable() {
    let program = program_from_json(
        r#"[{"type": "function_call", "name": "add",
             "args": [{"type": "variable", "name": "ghost"}]}]"#,
    )
    .unwrap();
    let mut env = shine::builtins::environment();

    assert!(matches!(
        program.evaluate(&mut env),
        Err(EvalError::UnboundName(name)) if name == "ghost"
    ));
}

/// Test that calling a non-function binding fails before any cell is built
#[test]
fn test_call_non_function() {
    let program = program_from_json(
        r#"[
            {"type": "assignment", "name": "n", "value": {"type": "literal", "value": 1}},
            {"type": "function_call", "name": "n", "args": []}
        ]"#,
    )
    .unwrap();
    let mut env = Environment::new();

    assert!(matches!(
        program.evaluate(&mut env),
        Err(EvalError::NotCallable { name, .. }) if name == "n"
    ));
}

/// Test that a program built in code matches its JSON form
#[test]
fn test_program_built_in_code() {
    let built = Program::new(vec![
        Expr::assign("x", Expr::literal(5)),
        Expr::assign("y", Expr::call("add", vec![Expr::literal(3), Expr::variable("x")])),
    ]);
    let parsed = program_from_json(
        r#"[
            {"type": "assignment", "name": "x", "value": {"type": "literal", "value": 5}},
            {"type": "assignment", "name": "y", "value": {"type": "function_call", "name": "add",
             "args": [{"type": "literal", "value": 3}, {"type": "variable", "name": "x"}]}}
        ]"#,
    )
    .unwrap();
    assert_eq!(built, parsed);

    let mut env = shine::builtins::environment();
    built.evaluate(&mut env).unwrap();
    assert_eq!(env.get("y").unwrap().get(), Value::Int(8));
}
