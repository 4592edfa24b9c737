// ABOUTME: Arithmetic-only expression engine used by the calculator tool.
// ABOUTME: Lexes, parses to postfix, then evaluates on an explicit stack.

mod lexer;
mod number;
mod parser;

pub use lexer::{Token, TokenKind, tokenize};
pub use number::Number;
pub use parser::{BinOp, MAX_DEPTH, Op, Program, parse};

use crate::error::CalcError;

/// Parse and evaluate an arithmetic expression.
///
/// Supports `+ - * / // **`, unary signs, parentheses, integer and decimal
/// literals. The whole expression is parsed before any arithmetic happens, so
/// syntax errors take priority over evaluation errors.
pub fn evaluate(expression: &str) -> Result<Number, CalcError> {
    parse(expression)?.eval()
}

#[cfg(test)]
mod calc_test;
