//! Builtin bubbles
//!
//! Formulas call functions by referencing a bubble whose formula yields a
//! function. These helpers add such bubbles for the shared native functions.

use crate::bubble::{Bubble, Position};
use crate::formula::Formula;
use crate::universe::Universe;
use shine_core::{functions, Function, Value};

/// Single-argument builtins available as bubbles
pub const UNARY_BUILTINS: &[&str] = &["strlen", "upper", "lower"];

/// Identifier given to the builtin bubble for `name`
pub fn builtin_identifier(name: &str) -> String {
    format!("builtin:{name}")
}

fn builtin_bubble(name: &str, function: Function) -> Bubble {
    Bubble::new(
        builtin_identifier(name),
        name,
        Position::default(),
        Some(Formula::Native(Value::Function(function))),
    )
}

/// Curried two-argument concatenation: `concat(a)(b)`
fn curried_concat() -> Function {
    Function::new("concat", |args| {
        let head = args.to_vec();
        Ok(Value::function("concat", move |rest| {
            let joined: Vec<Value> = head.iter().chain(rest).cloned().collect();
            functions::fn_concat(&joined)
        }))
    })
}

/// Add every builtin bubble to `universe`
pub fn install(universe: &mut Universe) {
    for name in UNARY_BUILTINS {
        if let Some(function) = functions::builtin(name) {
            universe.insert(builtin_bubble(name, function));
        }
    }
    universe.insert(builtin_bubble("concat", curried_concat()));
}
