use std::io::Write;

use log::{error, warn};

use crate::ast::{BinaryOp, Block, Expr, Literal, LogicalOp, Stmt, Value};
use crate::environment::Environment;
use crate::error::Result;

// Tolerance for numeric equality; comparisons never use raw float
// equality.
const EPSILON: f64 = 1e-18;

/// Outcome of executing a statement. `Halt` is produced by `End` and
/// unwinds the rest of the walk; the process-level caller maps it to a
/// successful exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Halt,
}

fn runtime_error(line: usize, message: &str) {
    error!("[line {}] {}", line, message);
}

// Numeric reading shared by promotion and the ordering operators.
// Booleans read as 1.0/0.0 when they slip through the looser type guard.
fn numeric_value(literal: &Literal) -> f64 {
    match &literal.value {
        Value::Int(i) => *i as f64,
        Value::Float(d) => *d,
        Value::Bool(b) => *b as i64 as f64,
        _ => 0.0,
    }
}

// Raw truth bit. Non-booleans only reach this after a type error has
// already been reported; strings and null read as false.
fn truth(literal: &Literal) -> bool {
    match &literal.value {
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(d) => *d != 0.0,
        _ => false,
    }
}

/// Reduces an expression to exactly one literal. Type errors are reported
/// and yield null; evaluation itself never aborts.
pub fn evaluate(expr: &Expr, env: &Environment) -> Literal {
    match expr {
        Expr::Literal(literal) => literal.clone(),
        Expr::Binary {
            left,
            operator,
            right,
        } => evaluate_binary(left, *operator, right, env),
        Expr::Logical {
            left,
            operator,
            right,
        } => evaluate_logical(left, *operator, right, env),
        Expr::Variable { name, line } => match env.get(name) {
            Some(value) => value,
            None => {
                runtime_error(*line, &format!("Undefined variable '{}'!", name));
                Literal::null(*line)
            }
        },
        Expr::Empty => Literal::null(0),
    }
}

fn evaluate_binary(left: &Expr, operator: BinaryOp, right: &Expr, env: &Environment) -> Literal {
    let left = evaluate(left, env);
    let right = evaluate(right, env);
    if !left.is_numeric() || !right.is_numeric() {
        runtime_error(
            left.line,
            "Binary operation can only be done on numerical values!",
        );
        return Literal::null(left.line);
    }
    let line = left.line;

    // Two integers stay in integer arithmetic; any float promotes both
    // sides to doubles.
    if let (Value::Int(a), Value::Int(b)) = (&left.value, &right.value) {
        let value = match operator {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => a / b,
            BinaryOp::Modulo => a % b,
            BinaryOp::Power => (*a as f64).powf(*b as f64) as i64,
        };
        return Literal::new(Value::Int(value), line);
    }

    let a = numeric_value(&left);
    let b = numeric_value(&right);
    let value = match operator {
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide => a / b,
        BinaryOp::Power => a.powf(b),
        BinaryOp::Modulo => {
            runtime_error(line, "'%' can only be applied between two integers!");
            return Literal::null(line);
        }
    };
    Literal::new(Value::Float(value), line)
}

fn evaluate_logical(left: &Expr, operator: LogicalOp, right: &Expr, env: &Environment) -> Literal {
    let left = evaluate(left, env);
    let right = evaluate(right, env);
    if (!left.is_numeric() && !left.is_bool()) || (!right.is_numeric() && !right.is_bool()) {
        runtime_error(
            left.line,
            "Logical expression must be performed on numeric values!",
        );
        return Literal::null(left.line);
    }
    let line = left.line;
    let a = numeric_value(&left);
    let b = numeric_value(&right);

    let value = match operator {
        LogicalOp::Greater => a > b,
        LogicalOp::GreaterEqual => a >= b,
        LogicalOp::Less => a < b,
        LogicalOp::LessEqual => a <= b,
        LogicalOp::Equal => (a - b).abs() <= EPSILON,
        LogicalOp::NotEqual => (a - b).abs() > EPSILON,
        LogicalOp::And => {
            if !left.is_bool() || !right.is_bool() {
                runtime_error(line, "'And' can only be applied over logical expressions!");
            }
            truth(&left) & truth(&right)
        }
        LogicalOp::Or => {
            if !left.is_bool() || !right.is_bool() {
                runtime_error(line, "'Or' can only be applied over logical expressions!");
            }
            truth(&left) | truth(&right)
        }
    };
    Literal::new(Value::Bool(value), line)
}

// Text rendering recognizes exactly one escape, `\n`; any other
// backslash is literal, including one that ends the string.
fn write_text<W: Write>(out: &mut W, text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() && bytes[i + 1] == b'n' {
            out.write_all(b"\n")?;
            i += 2;
        } else {
            out.write_all(&bytes[i..=i])?;
            i += 1;
        }
    }
    Ok(())
}

fn write_literal<W: Write>(out: &mut W, literal: &Literal) -> Result<()> {
    match &literal.value {
        Value::Null => write!(out, "null")?,
        Value::Bool(b) => write!(out, "{}", b)?,
        Value::Float(d) => write!(out, "{}", d)?,
        Value::Int(i) => write!(out, "{}", i)?,
        Value::Str(s) => write_text(out, s)?,
    }
    Ok(())
}

/// Executes a program, which is its outermost block, against `env`,
/// appending all print output to `out`. Returns `Halt` when an `End`
/// statement fired; falling off the end is the other normal termination.
pub fn interpret<W: Write>(program: &Block, env: &mut Environment, out: &mut W) -> Result<Control> {
    execute_block(program, env, out)
}

fn execute_block<W: Write>(block: &Block, env: &mut Environment, out: &mut W) -> Result<Control> {
    for statement in block {
        if execute(statement, env, out)? == Control::Halt {
            return Ok(Control::Halt);
        }
    }
    Ok(Control::Continue)
}

fn execute<W: Write>(statement: &Stmt, env: &mut Environment, out: &mut W) -> Result<Control> {
    match statement {
        Stmt::Print { args } => {
            // Arguments render in order with no implicit separators.
            for arg in args {
                let result = evaluate(arg, env);
                write_literal(out, &result)?;
            }
            Ok(Control::Continue)
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
            line,
        } => {
            let cond = evaluate(condition, env);
            if !cond.is_bool() {
                runtime_error(*line, "Not a logical expression as condition!");
            }
            if truth(&cond) {
                execute_block(then_branch, env, out)
            } else {
                execute_block(else_branch, env, out)
            }
        }
        Stmt::While {
            condition,
            body,
            line,
        } => {
            // The condition's type is checked once, before the first
            // iteration. No iteration cap: an ever-true condition runs
            // until the process dies.
            let mut cond = evaluate(condition, env);
            if !cond.is_bool() {
                runtime_error(*line, "Not a logical expression as condition!");
            }
            while truth(&cond) {
                if execute_block(body, env, out)? == Control::Halt {
                    return Ok(Control::Halt);
                }
                cond = evaluate(condition, env);
            }
            Ok(Control::Continue)
        }
        Stmt::Set { bindings } => {
            // Strictly in declared order; later pairs observe the
            // bindings earlier pairs just made.
            for (name, initializer) in bindings {
                let value = evaluate(initializer, env);
                env.put(name, value);
            }
            Ok(Control::Continue)
        }
        Stmt::Break => {
            warn!("Break is a no-op!");
            Ok(Control::Continue)
        }
        Stmt::Begin => {
            warn!("Begin is a no-op!");
            Ok(Control::Continue)
        }
        Stmt::End => {
            writeln!(out)?;
            out.flush()?;
            Ok(Control::Halt)
        }
        Stmt::Block(block) => execute_block(block, env, out),
    }
}
