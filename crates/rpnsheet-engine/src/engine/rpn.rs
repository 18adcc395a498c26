//! Postfix token classification and the numeric operand stack.
//!
//! Supported operators:
//!
//! - **Binary**: `+`, `-`, `*`, `/` (`left right op`)
//! - **Unary**: `++`, `--` (add or subtract one)
//!
//! Anything else is either a numeric literal or a word that the evaluator
//! tries to decode as a cell label.

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnaryOp {
    Increment,
    Decrement,
}

/// One whitespace-separated token of a cell expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token<'a> {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Number(f64),
    Word(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(token: &'a str) -> Token<'a> {
        match token {
            "+" => Token::Binary(BinaryOp::Add),
            "-" => Token::Binary(BinaryOp::Subtract),
            "*" => Token::Binary(BinaryOp::Multiply),
            "/" => Token::Binary(BinaryOp::Divide),
            "++" => Token::Unary(UnaryOp::Increment),
            "--" => Token::Unary(UnaryOp::Decrement),
            _ => match parse_literal(token) {
                Some(n) => Token::Number(n),
                None => Token::Word(token),
            },
        }
    }
}

/// Numeric literals must look like numbers: an optional sign, then a digit
/// or `.`. Spelled-out `inf` and `NaN`, signed or not, are words.
fn parse_literal(token: &str) -> Option<f64> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let first = unsigned.chars().next()?;
    if !(first.is_ascii_digit() || first == '.') {
        return None;
    }
    token.parse::<f64>().ok()
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        })
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        })
    }
}

/// Stack machine failures, without cell context.
#[derive(Clone, Debug, PartialEq)]
pub enum StackFault {
    Underflow { operator: String },
    Overflow,
    DivideByZero,
}

/// Numeric stack for a single scan of one cell's tokens.
#[derive(Debug, Default)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn apply_binary(&mut self, op: BinaryOp) -> Result<(), StackFault> {
        if self.values.len() < 2 {
            return Err(StackFault::Underflow {
                operator: op.to_string(),
            });
        }
        let right = self.values.pop().unwrap_or_default();
        let left = self.values.pop().unwrap_or_default();
        let result = match op {
            BinaryOp::Add => left + right,
            BinaryOp::Subtract => left - right,
            BinaryOp::Multiply => left * right,
            BinaryOp::Divide => {
                if right == 0.0 {
                    return Err(StackFault::DivideByZero);
                }
                left / right
            }
        };
        self.values.push(result);
        Ok(())
    }

    pub fn apply_unary(&mut self, op: UnaryOp) -> Result<(), StackFault> {
        let Some(value) = self.values.pop() else {
            return Err(StackFault::Underflow {
                operator: op.to_string(),
            });
        };
        self.values.push(match op {
            UnaryOp::Increment => value + 1.0,
            UnaryOp::Decrement => value - 1.0,
        });
        Ok(())
    }

    /// The single result of a fully scanned expression.
    ///
    /// An expression with no tokens never reaches here: empty text is zero
    /// and whitespace-only text is rejected before scanning.
    pub fn finish(mut self) -> Result<f64, StackFault> {
        if self.values.len() > 1 {
            return Err(StackFault::Overflow);
        }
        Ok(self.values.pop().unwrap_or_default())
    }
}
