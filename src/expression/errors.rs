use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("{0} divided by {1} does not result in an integer")]
    DivisionNotExact(i64, i64),
    #[error("'{0}' is not a complete postfix expression")]
    MalformedExpression(String),
    #[error("'{0}' is not a valid digit or operator")]
    UnknownToken(char),
}
