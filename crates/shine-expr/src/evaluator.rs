//! Expression evaluator
//!
//! Evaluates expressions to cells. Calls are wired as derived cells, so a
//! call result recomputes whenever its function binding or any argument
//! changes value.

use crate::ast::{Expr, Program};
use crate::environment::Environment;
use crate::error::{EvalError, EvalResult};
use shine_core::{combine_list, map, Cell, Error, Value};

/// Evaluate an expression against `env`.
///
/// Assignments yield `None`; every other expression yields a cell.
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult<Option<Cell>> {
    match expr {
        Expr::Literal(value) => Ok(Some(Cell::new(value.clone())?)),
        Expr::Variable(name) => Ok(Some(env.lookup(name)?.clone())),
        Expr::FunctionCall { name, args } => evaluate_call(name, args, env).map(Some),
        Expr::Assignment { name, value } => {
            evaluate_assignment(name, value, env)?;
            Ok(None)
        }
    }
}

/// Evaluate an expression that must produce a cell
fn evaluate_cell(expr: &Expr, env: &mut Environment) -> EvalResult<Cell> {
    match evaluate(expr, env)? {
        Some(cell) => Ok(cell),
        None => Err(EvalError::NoValue(match expr {
            Expr::Assignment { name, .. } => name.clone(),
            _ => String::new(),
        })),
    }
}

fn evaluate_call(name: &str, args: &[Expr], env: &mut Environment) -> EvalResult<Cell> {
    let function = env.lookup(name)?.clone();
    let current = function.get();
    if !current.is_function() {
        return Err(EvalError::NotCallable {
            name: name.to_string(),
            type_name: current.type_name(),
        });
    }

    let mut inputs = Vec::with_capacity(args.len() + 1);
    inputs.push(function);
    for arg in args {
        inputs.push(evaluate_cell(arg, env)?);
    }
    tracing::debug!(function = %name, args = args.len(), "wiring call");

    let combined = combine_list(inputs)?;
    Ok(map(&combined, apply)?)
}

/// Apply the first element of a combined call list to the rest
fn apply(call: &Value) -> shine_core::Result<Value> {
    match call {
        Value::List(items) => match items.split_first() {
            Some((function, args)) => function.to_function()?.call(args),
            None => Err(Error::NotCallable("nil")),
        },
        other => Err(Error::NotCallable(other.type_name())),
    }
}

fn evaluate_assignment(name: &str, value: &Expr, env: &mut Environment) -> EvalResult<()> {
    let cell = evaluate_cell(value, env)?;
    match env.get(name) {
        // Existing binding keeps its identity; dependents see the new value
        Some(existing) => {
            tracing::debug!(variable = %name, "updating binding");
            existing.set(cell.get())?;
        }
        None => {
            tracing::debug!(variable = %name, "binding");
            env.bind(name, cell);
        }
    }
    Ok(())
}

impl Program {
    /// Evaluate every statement in order against a shared environment
    pub fn evaluate(&self, env: &mut Environment) -> EvalResult<Vec<Option<Cell>>> {
        self.statements
            .iter()
            .map(|statement| evaluate(statement, env))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn add_env() -> Environment {
        let add = Cell::new(Value::function("add", shine_core::functions::fn_add)).unwrap();
        [("add", add)].into_iter().collect()
    }

    #[test]
    fn test_literal_makes_fresh_cell() {
        let mut env = Environment::new();
        let a = evaluate(&Expr::literal(1), &mut env).unwrap().unwrap();
        let b = evaluate(&Expr::literal(1), &mut env).unwrap().unwrap();
        assert_eq!(a.get(), Value::Int(1));
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_variable() {
        let mut env = add_env();
        let cell = evaluate(&Expr::variable("add"), &mut env).unwrap().unwrap();
        assert!(cell.ptr_eq(env.get("add").unwrap()));

        assert!(matches!(
            evaluate(&Expr::variable("nope"), &mut env),
            Err(EvalError::UnboundName(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_reactive_program() {
        let mut env = add_env();
        let program = Program::new(vec![
            Expr::assign("x", Expr::literal(5)),
            Expr::assign(
                "y",
                Expr::call("add", vec![Expr::literal(3), Expr::variable("x")]),
            ),
            Expr::assign("x", Expr::literal(10)),
        ]);

        let results = program.evaluate(&mut env).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(Option::is_none));
        assert_eq!(env.get("x").unwrap().get(), Value::Int(10));
        assert_eq!(env.get("y").unwrap().get(), Value::Int(13));
    }

    #[test]
    fn test_reassignment_keeps_identity() {
        let mut env = Environment::new();
        evaluate(&Expr::assign("x", Expr::literal(1)), &mut env).unwrap();
        let first = env.get("x").unwrap().clone();

        evaluate(&Expr::assign("x", Expr::literal(2)), &mut env).unwrap();
        assert!(env.get("x").unwrap().ptr_eq(&first));
        assert_eq!(first.get(), Value::Int(2));
    }

    #[test]
    fn test_rebinding_function_recomputes_call() {
        let mut env = add_env();
        let sum = evaluate(
            &Expr::call("add", vec![Expr::literal(2), Expr::literal(3)]),
            &mut env,
        )
        .unwrap()
        .unwrap();
        assert_eq!(sum.get(), Value::Int(5));

        env.get("add")
            .unwrap()
            .set(Value::function("mul", shine_core::functions::fn_mul))
            .unwrap();
        assert_eq!(sum.get(), Value::Int(6));
    }

    #[test]
    fn test_call_does_not_recompute_without_change() {
        let calls = Rc::new(std::cell::Cell::new(0));
        let counted = {
            let calls = Rc::clone(&calls);
            Value::function("id", move |args| {
                calls.set(calls.get() + 1);
                Ok(args.first().cloned().unwrap_or_default())
            })
        };
        let mut env: Environment = [("id", Cell::new(counted).unwrap())].into_iter().collect();
        env.bind("x", Cell::new(4).unwrap());

        let result = evaluate(&Expr::call("id", vec![Expr::variable("x")]), &mut env)
            .unwrap()
            .unwrap();
        let same = result.clone();

        assert_eq!(result.get(), Value::Int(4));
        assert_eq!(result.get(), Value::Int(4));
        assert!(same.ptr_eq(&result));
        assert_eq!(calls.get(), 1);

        env.get("x").unwrap().set(5).unwrap();
        assert_eq!(result.get(), Value::Int(5));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_print_fires_on_change() {
        let printed = Rc::new(RefCell::new(Vec::new()));
        let print = {
            let printed = Rc::clone(&printed);
            Value::function("print", move |args| {
                printed.borrow_mut().push(args.to_vec());
                Ok(Value::Nil)
            })
        };
        let mut env = add_env();
        env.bind("print", Cell::new(print).unwrap());

        let program = Program::new(vec![
            Expr::assign("x", Expr::literal(5)),
            Expr::assign(
                "y",
                Expr::call("add", vec![Expr::literal(3), Expr::variable("x")]),
            ),
            Expr::call("print", vec![Expr::variable("y")]),
            Expr::assign("x", Expr::literal(10)),
            Expr::assign("x", Expr::literal(13)),
        ]);
        let results = program.evaluate(&mut env).unwrap();

        assert!(results[2].is_some());
        assert_eq!(
            *printed.borrow(),
            vec![
                vec![Value::Int(8)],
                vec![Value::Int(13)],
                vec![Value::Int(16)],
            ]
        );
    }

    fn recording_print(env: &mut Environment) -> Rc<RefCell<Vec<Value>>> {
        let printed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&printed);
        let print = Value::function("print", move |args| {
            sink.borrow_mut().extend(args.iter().cloned());
            Ok(Value::Nil)
        });
        env.bind("print", Cell::new(print).unwrap());
        printed
    }

    #[test]
    fn test_dropped_call_result_keeps_printing() {
        let mut env = Environment::new();
        let printed = recording_print(&mut env);
        env.bind("x", Cell::new(5).unwrap());

        let call = evaluate(&Expr::call("print", vec![Expr::variable("x")]), &mut env).unwrap();
        drop(call);

        env.get("x").unwrap().set(7).unwrap();
        assert_eq!(*printed.borrow(), vec![Value::Int(5), Value::Int(7)]);
    }

    #[test]
    fn test_call_assigned_to_bound_name_keeps_printing() {
        let mut env = Environment::new();
        let printed = recording_print(&mut env);
        let program = Program::new(vec![
            Expr::assign("x", Expr::literal(5)),
            Expr::assign("z", Expr::literal(0)),
            Expr::assign("z", Expr::call("print", vec![Expr::variable("x")])),
            Expr::assign("x", Expr::literal(7)),
        ]);
        program.evaluate(&mut env).unwrap();

        assert_eq!(*printed.borrow(), vec![Value::Int(5), Value::Int(7)]);
        assert_eq!(env.get("z").unwrap().get(), Value::Nil);
    }

    #[test]
    fn test_unbound_call_target() {
        let mut env = Environment::new();
        assert!(matches!(
            evaluate(&Expr::call("missing", vec![]), &mut env),
            Err(EvalError::UnboundName(_))
        ));
    }

    #[test]
    fn test_not_callable() {
        let mut env = Environment::new();
        env.bind("five", Cell::new(5).unwrap());
        assert!(matches!(
            evaluate(&Expr::call("five", vec![]), &mut env),
            Err(EvalError::NotCallable { type_name: "int", .. })
        ));
    }

    #[test]
    fn test_rebinding_to_non_function_fails_on_set() {
        let mut env = add_env();
        let _sum = evaluate(
            &Expr::call("add", vec![Expr::literal(1), Expr::literal(1)]),
            &mut env,
        )
        .unwrap();

        let result = evaluate(&Expr::assign("add", Expr::literal(0)), &mut env);
        assert!(matches!(
            result,
            Err(EvalError::Core(Error::NotCallable("int")))
        ));
    }

    #[test]
    fn test_assignment_as_argument() {
        let mut env = add_env();
        let call = Expr::call(
            "add",
            vec![Expr::assign("z", Expr::literal(1)), Expr::literal(2)],
        );
        assert!(matches!(
            evaluate(&call, &mut env),
            Err(EvalError::NoValue(name)) if name == "z"
        ));
    }
}
