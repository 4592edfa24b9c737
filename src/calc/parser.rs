// ABOUTME: Recursive-descent parser that compiles tokens into a postfix program.
// ABOUTME: Program::eval runs the postfix ops on an explicit value stack.

use super::lexer::{Token, TokenKind, tokenize};
use super::number::Number;
use crate::error::CalcError;

/// Maximum nesting of parentheses, signs and exponents.
pub const MAX_DEPTH: usize = 64;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Pow,
}

impl BinOp {
    fn apply(self, lhs: Number, rhs: Number) -> Result<Number, CalcError> {
        match self {
            BinOp::Add => lhs.try_add(rhs),
            BinOp::Sub => lhs.try_sub(rhs),
            BinOp::Mul => lhs.try_mul(rhs),
            BinOp::Div => lhs.try_div(rhs),
            BinOp::FloorDiv => lhs.floor_div(rhs),
            BinOp::Pow => lhs.pow(rhs),
        }
    }
}

/// One postfix instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Push(Number),
    Neg,
    Binary(BinOp),
}

/// A parsed expression in postfix order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    ops: Vec<Op>,
}

impl Program {
    /// The postfix instructions.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Evaluate the program.
    pub fn eval(&self) -> Result<Number, CalcError> {
        let mut stack: Vec<Number> = Vec::with_capacity(self.ops.len());
        for op in &self.ops {
            match *op {
                Op::Push(n) => stack.push(n),
                Op::Neg => {
                    let n = stack.pop().ok_or(CalcError::UnexpectedEnd)?;
                    stack.push(n.try_neg()?);
                }
                Op::Binary(bin) => {
                    let rhs = stack.pop().ok_or(CalcError::UnexpectedEnd)?;
                    let lhs = stack.pop().ok_or(CalcError::UnexpectedEnd)?;
                    stack.push(bin.apply(lhs, rhs)?);
                }
            }
        }
        match (stack.pop(), stack.is_empty()) {
            (Some(n), true) => Ok(n),
            _ => Err(CalcError::UnexpectedEnd),
        }
    }
}

/// Parse an expression into a postfix program without evaluating it.
pub fn parse(input: &str) -> Result<Program, CalcError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        cursor: 0,
        depth: 0,
        ops: Vec::new(),
    };
    parser.expr()?;

    if let Some(token) = parser.peek() {
        return Err(unexpected(token));
    }

    Ok(Program { ops: parser.ops })
}

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    depth: usize,
    ops: Vec<Op>,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.cursor);
        self.cursor += 1;
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<(), CalcError> {
        self.term()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => return Ok(()),
            };
            self.cursor += 1;
            self.term()?;
            self.ops.push(Op::Binary(op));
        }
    }

    // term := unary (('*' | '/' | '//') unary)*
    fn term(&mut self) -> Result<(), CalcError> {
        self.unary()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => BinOp::Mul,
                Some(TokenKind::Slash) => BinOp::Div,
                Some(TokenKind::SlashSlash) => BinOp::FloorDiv,
                _ => return Ok(()),
            };
            self.cursor += 1;
            self.unary()?;
            self.ops.push(Op::Binary(op));
        }
    }

    // unary := ('+' | '-') unary | power
    fn unary(&mut self) -> Result<(), CalcError> {
        // The outermost unary is the expression itself, not a nesting level.
        self.depth += 1;
        if self.depth > MAX_DEPTH + 1 {
            return Err(CalcError::TooDeep(MAX_DEPTH));
        }

        let result = if self.eat(&TokenKind::Plus) {
            self.unary()
        } else if self.eat(&TokenKind::Minus) {
            self.unary().map(|()| self.ops.push(Op::Neg))
        } else {
            self.power()
        };

        self.depth -= 1;
        result
    }

    // power := atom ('**' unary)?
    fn power(&mut self) -> Result<(), CalcError> {
        self.atom()?;
        if self.eat(&TokenKind::StarStar) {
            self.unary()?;
            self.ops.push(Op::Binary(BinOp::Pow));
        }
        Ok(())
    }

    // atom := NUMBER | '(' expr ')'
    fn atom(&mut self) -> Result<(), CalcError> {
        let token = self.next().ok_or(CalcError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Int(n) => self.ops.push(Op::Push(Number::Int(n))),
            TokenKind::Float(x) => self.ops.push(Op::Push(Number::Float(x))),
            TokenKind::LParen => {
                self.expr()?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => {}
                    Some(token) => return Err(unexpected(token)),
                    None => return Err(CalcError::UnexpectedEnd),
                }
            }
            _ => return Err(unexpected(token)),
        }
        Ok(())
    }
}

fn unexpected(token: &Token) -> CalcError {
    CalcError::UnexpectedToken {
        token: token.kind.to_string(),
        pos: token.pos,
    }
}
