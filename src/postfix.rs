use crate::tokenizer::{Operation, Paren, Token};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Op(Operation),
    Open,
}

/// Shunting-yard conversion from infix to postfix order.
#[derive(Debug, Default)]
pub struct PostfixConverter {
    pending: Vec<Pending>,
    output: Vec<Token>,
}

impl PostfixConverter {
    pub fn handle_token(&mut self, token: Token) -> Result<(), ConvertError> {
        match token {
            Token::Val(_) => self.output.push(token),
            Token::Op(op) => {
                while let Some(&Pending::Op(top)) = self.pending.last() {
                    let pops = if op.is_left_associative() {
                        top.priority() >= op.priority()
                    } else {
                        top.priority() > op.priority()
                    };
                    if !pops {
                        break;
                    }
                    self.pending.pop();
                    self.output.push(Token::Op(top));
                }
                self.pending.push(Pending::Op(op));
            }
            Token::Paren(Paren::Open) => self.pending.push(Pending::Open),
            Token::Paren(Paren::Close) => loop {
                match self.pending.pop() {
                    Some(Pending::Open) => break,
                    Some(Pending::Op(op)) => self.output.push(Token::Op(op)),
                    None => return Err(ConvertError::MismatchedParentheses),
                }
            },
        }

        Ok(())
    }

    pub fn finalize(&mut self) -> Result<Vec<Token>, ConvertError> {
        let result = loop {
            match self.pending.pop() {
                Some(Pending::Op(op)) => self.output.push(Token::Op(op)),
                Some(Pending::Open) => break Err(ConvertError::MismatchedParentheses),
                None => break Ok(std::mem::take(&mut self.output)),
            }
        };
        self.pending.clear();
        self.output.clear();
        result
    }
}

pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ConvertError> {
    let mut converter = PostfixConverter::default();
    for &token in tokens {
        converter.handle_token(token)?;
    }
    let postfix = converter.finalize()?;
    log::trace!("postfix {:?}", postfix);
    Ok(postfix)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use Operation::*;

    fn postfix(expr: &str) -> Result<Vec<Token>, ConvertError> {
        to_postfix(&tokenize(expr).unwrap())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            postfix("1+2*3"),
            Ok(vec![
                Token::Val(1.0),
                Token::Val(2.0),
                Token::Val(3.0),
                Token::Op(Mul),
                Token::Op(Add)
            ])
        );
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(
            postfix("8/4%3*2"),
            Ok(vec![
                Token::Val(8.0),
                Token::Val(4.0),
                Token::Op(Div),
                Token::Val(3.0),
                Token::Op(Rem),
                Token::Val(2.0),
                Token::Op(Mul)
            ])
        );
        assert_eq!(
            postfix("5-3+1"),
            Ok(vec![
                Token::Val(5.0),
                Token::Val(3.0),
                Token::Op(Sub),
                Token::Val(1.0),
                Token::Op(Add)
            ])
        );
    }

    #[test]
    fn test_parens_group() {
        assert_eq!(
            postfix("(1+2)*3"),
            Ok(vec![
                Token::Val(1.0),
                Token::Val(2.0),
                Token::Op(Add),
                Token::Val(3.0),
                Token::Op(Mul)
            ])
        );
    }

    #[test]
    fn test_mismatched() {
        assert_eq!(postfix("(1+2"), Err(ConvertError::MismatchedParentheses));
        assert_eq!(postfix("1+2)"), Err(ConvertError::MismatchedParentheses));
        assert_eq!(postfix(")("), Err(ConvertError::MismatchedParentheses));
    }

    #[test]
    fn test_converter_is_reusable_after_error() {
        let mut converter = PostfixConverter::default();
        converter.handle_token(Token::Paren(Paren::Open)).unwrap();
        converter.handle_token(Token::Val(1.0)).unwrap();
        assert_eq!(
            converter.finalize(),
            Err(ConvertError::MismatchedParentheses)
        );
        converter.handle_token(Token::Val(2.0)).unwrap();
        assert_eq!(converter.finalize(), Ok(vec![Token::Val(2.0)]));
    }
}
