// src/expression.rs
use std::fmt;

use crate::errors::{FormulaError, Result};
use crate::parser::{ParseError, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ENode {
    Num(f64),
    Neg(Box<ENode>),
    Binary { op: BinOp, lhs: Box<ENode>, rhs: Box<ENode> },
}

/// Fully parenthesized rendering, used in trace output.
impl fmt::Display for ENode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ENode::Num(n) => write!(f, "{n}"),
            ENode::Neg(inner) => write!(f, "(-{inner})"),
            ENode::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
        }
    }
}

pub type EParseErr = ParseError;

/// Parse an arithmetic string. Grammar, loosest first:
///
/// ```text
/// sum     := product (('+' | '-') product)*
/// product := unary (('*' | '/') unary)*
/// unary   := ('-' | '+') unary | primary
/// primary := number | '(' sum ')'
/// ```
pub fn parse_expr(input: &str) -> std::result::Result<ENode, EParseErr> {
    let mut p = EParser::new(input);
    let node = p.parse_sum()?;
    p.skip_ws();
    if !p.eof() {
        return Err(p.unexpected());
    }
    Ok(node)
}

struct EParser<'a> {
    parser: Parser<'a>,
}

impl<'a> EParser<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            parser: Parser::new(s),
        }
    }

    fn parse_sum(&mut self) -> std::result::Result<ENode, EParseErr> {
        let mut lhs = self.parse_product()?;
        loop {
            self.skip_ws();
            let op = if self.parser.consume_char('+') {
                BinOp::Add
            } else if self.parser.consume_char('-') {
                BinOp::Sub
            } else {
                break;
            };
            let rhs = self.parse_product()?;
            lhs = ENode::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    fn parse_product(&mut self) -> std::result::Result<ENode, EParseErr> {
        let mut lhs = self.parse_unary()?;
        loop {
            self.skip_ws();
            let op = if self.parser.consume_char('*') {
                BinOp::Mul
            } else if self.parser.consume_char('/') {
                BinOp::Div
            } else {
                break;
            };
            let rhs = self.parse_unary()?;
            lhs = ENode::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> std::result::Result<ENode, EParseErr> {
        self.skip_ws();
        if self.parser.consume_char('-') {
            return Ok(ENode::Neg(Box::new(self.parse_unary()?)));
        }
        if self.parser.consume_char('+') {
            return self.parse_unary();
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> std::result::Result<ENode, EParseErr> {
        self.skip_ws();
        match self.parser.peek_char() {
            Some('(') => {
                self.parser.bump();
                let inner = self.parse_sum()?;
                self.skip_ws();
                self.parser
                    .expect(')')
                    .map_err(|_| self.unexpected())?;
                Ok(inner)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => Ok(ENode::Num(self.parser.parse_number_literal()?)),
            _ => Err(self.unexpected()),
        }
    }

    fn unexpected(&self) -> EParseErr {
        match self.parser.peek_char() {
            Some(c) => EParseErr::InvalidSyntax(format!("unexpected '{c}' at position {}", self.parser.pos())),
            None => EParseErr::InvalidSyntax("unexpected end of formula".into()),
        }
    }

    fn skip_ws(&mut self) {
        self.parser.skip_ws();
    }

    fn eof(&self) -> bool {
        self.parser.eof()
    }
}

/// Evaluate AST node → number. Division by zero and any non-finite
/// intermediate fail with `NotANumber`.
pub fn eval_ast(node: &ENode) -> Result<f64> {
    let value = match node {
        ENode::Num(n) => *n,
        ENode::Neg(inner) => -eval_ast(inner)?,
        ENode::Binary { op, lhs, rhs } => {
            let a = eval_ast(lhs)?;
            let b = eval_ast(rhs)?;
            match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div if b == 0.0 => return Err(FormulaError::NotANumber),
                BinOp::Div => a / b,
            }
        }
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::NotANumber)
    }
}
