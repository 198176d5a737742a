//! Canonical infix rendering of postfix token sequences.
//!
//! The token sequence is parsed into a binary tree by recursive descent over
//! an index cursor running right to left (the last token is the root; an
//! operator's right subtree is parsed first). Rendering then walks the tree
//! in order, parenthesizing a child only where multiplicative and additive
//! precedence actually mix. The right operand of a subtraction or division
//! is never parenthesized when it is an operator of the same class; it is
//! flattened instead, inverting operators on the way down, since
//! `a - (b + c)` = `a - b - c` and `a / (b * c)` = `a / b / c`.

use std::fmt;

use crate::expression::ast::{Op, PostfixExpression};
use crate::expression::errors::ExpressionError;

struct TreeNode {
    token: char,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn op(&self) -> Option<Op> {
        Op::from_symbol(self.token)
    }
}

fn parse_node(tokens: &[u8], cursor: &mut usize) -> Result<TreeNode, ExpressionError> {
    if *cursor == 0 {
        return Err(ExpressionError::MalformedExpression(
            String::from_utf8_lossy(tokens).into_owned(),
        ));
    }
    *cursor -= 1;
    let token = tokens[*cursor] as char;

    if Op::from_symbol(token).is_some() {
        let right = parse_node(tokens, cursor)?;
        let left = parse_node(tokens, cursor)?;
        Ok(TreeNode {
            token,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        })
    } else if token.is_ascii_digit() {
        Ok(TreeNode {
            token,
            left: None,
            right: None,
        })
    } else {
        Err(ExpressionError::UnknownToken(token))
    }
}

/// Render a child, parenthesized or flattened as the parent demands.
///
/// `invert` marks a subtree being distributed under a subtraction or
/// division: every same-class operator met on an unparenthesized path flips
/// to its inverse, and the flip stops where the precedence class changes.
/// Parentheses isolate their contents, so a parenthesized child always
/// restarts with `invert` off.
fn render(node: &TreeNode, invert: bool, out: &mut String) {
    let op = match node.op() {
        Some(op) => op,
        None => {
            out.push(node.token);
            return;
        }
    };
    let effective = if invert { op.inverse() } else { op };

    if let Some(left) = &node.left {
        let left_op = left.op();
        let parens = effective.is_multiplicative()
            && left_op.map(Op::is_additive).unwrap_or(false);
        if parens {
            out.push('(');
            render(left, false, out);
            out.push(')');
        } else {
            // Inversion continues down the left spine only while the child
            // stays in the same precedence class; a class boundary ends the
            // flattened run, so `9 - (2*3 + 1)` keeps its `2 * 3` intact.
            let same_class = left_op
                .map(|l| l.is_additive() == effective.is_additive())
                .unwrap_or(false);
            render(left, invert && same_class, out);
        }
    }

    out.push(' ');
    out.push(effective.symbol());
    out.push(' ');

    if let Some(right) = &node.right {
        let right_op = right.op();
        let parens = effective.is_multiplicative()
            && right_op.map(Op::is_additive).unwrap_or(false);
        let invert_child = match right_op {
            Some(r) => {
                (effective == Op::Sub && r.is_additive())
                    || (effective == Op::Div && r.is_multiplicative())
            }
            None => false,
        };
        if parens {
            out.push('(');
            render(right, false, out);
            out.push(')');
        } else {
            render(right, invert_child, out);
        }
    }
}

/// Convert a postfix token sequence to minimally parenthesized infix text.
///
/// # Errors
///
/// Returns [`ExpressionError::MalformedExpression`] when the sequence is not
/// a single complete expression, or [`ExpressionError::UnknownToken`] for a
/// character outside the grammar.
pub fn postfix_to_infix(tokens: &str) -> Result<String, ExpressionError> {
    let bytes = tokens.as_bytes();
    let mut cursor = bytes.len();
    let root = parse_node(bytes, &mut cursor)?;
    if cursor != 0 {
        return Err(ExpressionError::MalformedExpression(tokens.to_string()));
    }

    let mut out = String::with_capacity(tokens.len() * 2);
    render(&root, false, &mut out);
    Ok(out)
}

impl fmt::Display for PostfixExpression {
    /// Displays the canonical infix form. The constructors guarantee a
    /// well-formed token sequence, so rendering cannot fail; the raw tokens
    /// are written as a last resort.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match postfix_to_infix(self.tokens()) {
            Ok(infix) => write!(f, "{}", infix),
            Err(_) => write!(f, "{}", self.tokens()),
        }
    }
}
