use crate::calculator::CalculatorError;
use crate::postfix::ConvertError;
use crate::tokenizer::TokenizeError;
use thiserror::Error;

/// Any failure of the tokenize → postfix → evaluate pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    InvalidNumber,
    MismatchedParentheses,
    InvalidExpression,
    DivisionByZero,
    InvalidResult,
}

impl ExprError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExprError::Tokenize(TokenizeError::InvalidCharacter(_)) => ErrorKind::InvalidCharacter,
            ExprError::Tokenize(TokenizeError::InvalidNumber(_)) => ErrorKind::InvalidNumber,
            ExprError::Convert(ConvertError::MismatchedParentheses) => {
                ErrorKind::MismatchedParentheses
            }
            ExprError::Calculator(CalculatorError::InvalidExpression) => {
                ErrorKind::InvalidExpression
            }
            ExprError::Calculator(CalculatorError::DivisionByZero) => ErrorKind::DivisionByZero,
            ExprError::Calculator(CalculatorError::InvalidResult) => ErrorKind::InvalidResult,
        }
    }
}
