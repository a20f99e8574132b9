use crate::error::ExprError;
use crate::postfix::to_postfix;
use crate::tokenizer::{tokenize, Operation, Token, Value};
use thiserror::Error;

/// Stack machine over postfix tokens.
#[derive(Debug, Default)]
pub struct Calculator {
    stack: Vec<Value>,
}

impl Calculator {
    pub fn handle_token(&mut self, token: Token) -> Result<(), CalculatorError> {
        let result = self.apply(token);
        if result.is_err() {
            self.stack.clear();
        }
        result
    }

    fn apply(&mut self, token: Token) -> Result<(), CalculatorError> {
        match token {
            Token::Val(v) => self.stack.push(v),
            Token::Op(op) => {
                let (Some(r), Some(l)) = (self.stack.pop(), self.stack.pop()) else {
                    return Err(CalculatorError::InvalidExpression);
                };
                self.stack.push(Action { l, op }.execute(r)?);
            }
            Token::Paren(_) => return Err(CalculatorError::InvalidExpression),
        }

        Ok(())
    }

    pub fn finalize(&mut self) -> Result<Value, CalculatorError> {
        let result = match self.stack.as_slice() {
            [v] if !v.is_finite() => Err(CalculatorError::InvalidResult),
            // Normalizes -0 to 0
            [v] if *v == 0.0 => Ok(0.0),
            [v] => Ok(*v),
            _ => Err(CalculatorError::InvalidExpression),
        };
        self.stack.clear();
        result
    }
}

#[derive(Debug)]
struct Action {
    l: Value,
    op: Operation,
}

impl Action {
    fn execute(self, r: Value) -> Result<Value, CalculatorError> {
        Ok(match self.op {
            Operation::Add => self.l + r,
            Operation::Sub => self.l - r,
            Operation::Mul => self.l * r,
            Operation::Div if r == 0.0 => return Err(CalculatorError::DivisionByZero),
            Operation::Div => self.l / r,
            // Sign follows the dividend
            Operation::Rem => self.l % r,
        })
    }
}

pub fn evaluate(postfix: &[Token]) -> Result<Value, CalculatorError> {
    let mut calculator = Calculator::default();
    for &token in postfix {
        calculator.handle_token(token)?;
    }
    calculator.finalize()
}

/// Runs the whole pipeline: tokenize, convert to postfix, evaluate.
pub fn compute(text: &str) -> Result<Value, ExprError> {
    let tokens = tokenize(text)?;
    let postfix = to_postfix(&tokens)?;
    Ok(evaluate(&postfix)?)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Invalid expression")]
    InvalidExpression,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid result")]
    InvalidResult,
}
