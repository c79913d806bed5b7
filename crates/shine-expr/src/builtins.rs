//! Builtin environment

use crate::environment::Environment;
use shine_core::{functions, Cell, Function, Result, Value};

/// Builtins bound by [`environment`], besides `print`
pub const BUILTINS: &[&str] = &[
    "add", "sub", "mul", "div", "concat", "strlen", "upper", "lower", "list",
];

fn fn_print(args: &[Value]) -> Result<Value> {
    let line = args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    tracing::info!(output = %line, "print");
    println!("{}", line);
    Ok(Value::Nil)
}

/// Environment holding every builtin function, each in its own cell
pub fn environment() -> Environment {
    let mut env = Environment::new();
    let all = BUILTINS
        .iter()
        .filter_map(|name| functions::builtin(name))
        .chain(std::iter::once(Function::new("print", fn_print)));

    for function in all {
        let name = function.name().to_string();
        // Function values never contain cells
        if let Ok(cell) = Cell::new(function) {
            env.bind(name, cell);
        }
    }
    env
}
