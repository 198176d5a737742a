use crate::expression::errors::ExpressionError;

/// Evaluate a postfix token sequence with an explicit operand stack.
///
/// Digits push their numeric value; an operator pops its right operand, then
/// its left, and pushes the result. Unlike [`combine`], this recomputes from
/// the raw tokens, which is what validating a persisted or user-supplied
/// expression requires.
///
/// [`combine`]: crate::expression::PostfixExpression::combine
///
/// # Errors
///
/// * [`ExpressionError::UnknownToken`] for a character outside `0-9+-*/`.
/// * [`ExpressionError::MalformedExpression`] when an operator lacks two
///   operands or the stack does not hold exactly one value after the scan.
/// * [`ExpressionError::DivisionNotExact`] for a division by zero or with a
///   remainder.
pub fn evaluate(tokens: &str) -> Result<i64, ExpressionError> {
    let mut stack: Vec<i64> = Vec::with_capacity(tokens.len() / 2 + 1);

    for c in tokens.chars() {
        if let Some(digit) = c.to_digit(10) {
            stack.push(i64::from(digit));
            continue;
        }

        match c {
            '+' | '-' | '*' | '/' => {
                let right = stack
                    .pop()
                    .ok_or_else(|| ExpressionError::MalformedExpression(tokens.to_string()))?;
                let left = stack
                    .pop()
                    .ok_or_else(|| ExpressionError::MalformedExpression(tokens.to_string()))?;
                let result = match c {
                    '+' => left + right,
                    '-' => left - right,
                    '*' => left * right,
                    _ => {
                        if right == 0 || left % right != 0 {
                            return Err(ExpressionError::DivisionNotExact(left, right));
                        }
                        left / right
                    }
                };
                stack.push(result);
            }
            _ => return Err(ExpressionError::UnknownToken(c)),
        }
    }

    if stack.len() != 1 {
        return Err(ExpressionError::MalformedExpression(tokens.to_string()));
    }
    Ok(stack[0])
}
