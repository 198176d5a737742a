//! Postfix expression value objects, evaluation and infix rendering.

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Op, PostfixExpression};
pub use display::postfix_to_infix;
pub use errors::ExpressionError;
pub use eval::evaluate;
