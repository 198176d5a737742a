use crate::expression::errors::ExpressionError;
use crate::expression::eval::evaluate;

/// The four binary operators an expression may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    /// The operator that replaces this one when a subtraction or division is
    /// distributed over its right operand (`a - (b + c)` = `a - b - c`).
    pub fn inverse(self) -> Op {
        match self {
            Op::Add => Op::Sub,
            Op::Sub => Op::Add,
            Op::Mul => Op::Div,
            Op::Div => Op::Mul,
        }
    }

    pub fn is_additive(self) -> bool {
        matches!(self, Op::Add | Op::Sub)
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, Op::Mul | Op::Div)
    }
}

/// An immutable postfix expression paired with its evaluated integer value.
///
/// Instances are only constructible through [`PostfixExpression::literal`],
/// [`PostfixExpression::combine`] and [`PostfixExpression::parse`], so a held
/// value is always consistent with the token sequence and every division
/// inside the sequence is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostfixExpression {
    tokens: String,
    value: i64,
}

impl PostfixExpression {
    /// A single-digit expression, `digit` in 1-9.
    pub fn literal(digit: u8) -> PostfixExpression {
        debug_assert!((1..=9).contains(&digit));
        PostfixExpression {
            tokens: char::from(b'0' + digit).to_string(),
            value: i64::from(digit),
        }
    }

    /// Combine two expressions into `<left-tokens><right-tokens><op>`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionNotExact`] when `op` is division
    /// and the right value is zero or does not divide the left value
    /// exactly. Callers that pre-filter candidates never observe this, but
    /// the check is made here so an inexact division can never produce a
    /// wrong value.
    pub fn combine(
        left: &PostfixExpression,
        right: &PostfixExpression,
        op: Op,
    ) -> Result<PostfixExpression, ExpressionError> {
        let value = match op {
            Op::Add => left.value + right.value,
            Op::Sub => left.value - right.value,
            Op::Mul => left.value * right.value,
            Op::Div => {
                if right.value == 0 || left.value % right.value != 0 {
                    return Err(ExpressionError::DivisionNotExact(left.value, right.value));
                }
                left.value / right.value
            }
        };

        let mut tokens = String::with_capacity(left.tokens.len() + right.tokens.len() + 1);
        tokens.push_str(&left.tokens);
        tokens.push_str(&right.tokens);
        tokens.push(op.symbol());

        Ok(PostfixExpression { tokens, value })
    }

    /// Build an expression from an externally supplied token sequence,
    /// re-evaluating it from scratch.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`evaluate`].
    pub fn parse(tokens: &str) -> Result<PostfixExpression, ExpressionError> {
        let value = evaluate(tokens)?;
        Ok(PostfixExpression {
            tokens: tokens.to_string(),
            value,
        })
    }

    /// The postfix token sequence.
    pub fn tokens(&self) -> &str {
        &self.tokens
    }

    /// The memoized value, computed once at construction.
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_even(&self) -> bool {
        self.value % 2 == 0
    }
}
