//! Built-in native functions
//!
//! Plain `fn(&[Value]) -> Result<Value>` implementations that hosts wrap
//! into [`Function`] values for either evaluator.

use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// Function implementation signature
pub type FunctionImpl = fn(&[Value]) -> Result<Value>;

/// Look up a built-in by name
pub fn lookup(name: &str) -> Option<FunctionImpl> {
    let implementation: FunctionImpl = match name {
        "add" => fn_add,
        "sub" => fn_sub,
        "mul" => fn_mul,
        "div" => fn_div,
        "concat" => fn_concat,
        "strlen" => fn_strlen,
        "upper" => fn_upper,
        "lower" => fn_lower,
        "list" => fn_list,
        _ => return None,
    };
    Some(implementation)
}

/// Wrap a built-in as a function value
pub fn builtin(name: &str) -> Option<Function> {
    lookup(name).map(|implementation| Function::new(name, implementation))
}

fn expect_args<'a, const N: usize>(function: &str, args: &'a [Value]) -> Result<&'a [Value; N]> {
    args.try_into().map_err(|_| Error::ArgumentCount {
        function: function.to_string(),
        expected: N,
        actual: args.len(),
    })
}

fn arithmetic(
    function: &str,
    args: &[Value],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value> {
    let [left, right] = expect_args::<2>(function, args)?;
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => int_op(*a, *b)
            .map(Value::Int)
            .ok_or_else(|| Error::argument(format!("{function}: integer overflow"))),
        _ => match (left.as_float(), right.as_float()) {
            (Some(a), Some(b)) => Ok(Value::Float(float_op(a, b))),
            _ => Err(Error::argument(format!(
                "{function}: cannot combine {} and {}",
                left.type_name(),
                right.type_name()
            ))),
        },
    }
}

/// add(a, b): numeric sum, string or list concatenation
pub fn fn_add(args: &[Value]) -> Result<Value> {
    if let [Value::Str(a), Value::Str(b)] = args {
        return Ok(Value::Str(format!("{a}{b}")));
    }
    if let [Value::List(a), Value::List(b)] = args {
        return Ok(Value::List(a.iter().chain(b).cloned().collect()));
    }
    arithmetic("add", args, i64::checked_add, |a, b| a + b)
}

/// sub(a, b)
pub fn fn_sub(args: &[Value]) -> Result<Value> {
    arithmetic("sub", args, i64::checked_sub, |a, b| a - b)
}

/// mul(a, b)
pub fn fn_mul(args: &[Value]) -> Result<Value> {
    arithmetic("mul", args, i64::checked_mul, |a, b| a * b)
}

/// div(a, b): always a float quotient
pub fn fn_div(args: &[Value]) -> Result<Value> {
    let [left, right] = expect_args::<2>("div", args)?;
    match (left.as_float(), right.as_float()) {
        (Some(_), Some(b)) if b == 0.0 => Err(Error::argument("div: division by zero")),
        (Some(a), Some(b)) => Ok(Value::Float(a / b)),
        _ => Err(Error::argument(format!(
            "div: cannot divide {} by {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}

/// concat(values...): display forms joined together
pub fn fn_concat(args: &[Value]) -> Result<Value> {
    Ok(Value::Str(args.iter().map(Value::to_string).collect()))
}

/// strlen(text): number of characters
pub fn fn_strlen(args: &[Value]) -> Result<Value> {
    let [text] = expect_args::<1>("strlen", args)?;
    let text = text
        .as_str()
        .ok_or_else(|| Error::argument(format!("strlen: expected string, got {}", text.type_name())))?;
    Ok(Value::Int(text.chars().count() as i64))
}

/// upper(text)
pub fn fn_upper(args: &[Value]) -> Result<Value> {
    let [text] = expect_args::<1>("upper", args)?;
    match text {
        Value::Str(s) => Ok(Value::Str(s.to_uppercase())),
        other => Err(Error::argument(format!("upper: expected string, got {}", other.type_name()))),
    }
}

/// lower(text)
pub fn fn_lower(args: &[Value]) -> Result<Value> {
    let [text] = expect_args::<1>("lower", args)?;
    match text {
        Value::Str(s) => Ok(Value::Str(s.to_lowercase())),
        other => Err(Error::argument(format!("lower: expected string, got {}", other.type_name()))),
    }
}

/// list(values...)
pub fn fn_list(args: &[Value]) -> Result<Value> {
    Ok(Value::List(args.to_vec()))
}
