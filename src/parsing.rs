use crate::error_handling::*;
use crate::scanning::*;

pub enum UnaryOperator {
    negative,
    positive,
}

impl UnaryOperator {
    pub fn call(&self, value: f64) -> f64 {
        use UnaryOperator::*;
        match self {
            positive => value,
            negative => -value,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl TryFrom<char> for UnaryOperator {
    type Error = InvalidOperator;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        use UnaryOperator::*;
        match c {
            '+' => Ok(positive),
            '-' => Ok(negative),
            _ => Err(InvalidOperator),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    pub const LOWEST: i32 = 1;
    pub const HIGHEST: i32 = 2;

    pub fn call(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator::*;
        match self {
            addition => left + right,
            subtraction => left - right,
            multiplication => left * right,
            division => left / right,
        }
    }

    pub fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            addition | subtraction => 1,
            multiplication | division => 2,
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = InvalidOperator;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        use BinaryOperator::*;
        match c {
            '+' => Ok(addition),
            '-' => Ok(subtraction),
            '*' => Ok(multiplication),
            '/' => Ok(division),
            _ => Err(InvalidOperator),
        }
    }
}

/// Recursive-descent parser that folds values as it goes; nothing of the
/// expression outlives the call.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := ('+' | '-') factor | '(' expression ')' | number
/// ```
pub struct Parser<S: Scanner> {
    source: S,
}

impl<S: Scanner> Parser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Parses a whole expression and requires the input to be exhausted.
    pub fn parse(mut self) -> Result<f64> {
        let value = self.parse_expression()?;
        match self.source.get_current() {
            Some(c) => Err(CalcError::unexpected_character(Some(c))),
            None => Ok(value),
        }
    }

    fn parse_expression(&mut self) -> Result<f64> {
        self.parse_level(BinaryOperator::LOWEST)
    }

    /// Left-associative chain of operators binding at `precedence`, with
    /// operands from the next level up.
    fn parse_level(&mut self, precedence: i32) -> Result<f64> {
        let mut value = self.parse_operand(precedence)?;
        while let Some(operator) = self.eat_operator(precedence) {
            let right = self.parse_operand(precedence)?;
            value = operator.call(value, right);
        }
        Ok(value)
    }

    fn parse_operand(&mut self, precedence: i32) -> Result<f64> {
        if precedence < BinaryOperator::HIGHEST {
            self.parse_level(precedence + 1)
        } else {
            self.parse_factor()
        }
    }

    fn eat_operator(&mut self, precedence: i32) -> Option<BinaryOperator> {
        self.source.skip_spaces();
        let operator = self
            .source
            .get_current()
            .and_then(|c| BinaryOperator::try_from(c).ok())
            .filter(|operator| operator.precedence() == precedence)?;
        self.source.advance();
        Some(operator)
    }

    fn parse_factor(&mut self) -> Result<f64> {
        if let Some(operator) = self.eat_unary() {
            let value = self.parse_factor()?;
            return Ok(operator.call(value));
        }

        if self.source.eat('(') {
            let value = self.parse_expression()?;
            if !self.source.eat(')') {
                return Err(CalcError::mismatched_parentheses);
            }
            return Ok(value);
        }

        match self.source.get_current() {
            Some(c) if is_digit_or_dot(c) => self.parse_number(),
            current => Err(CalcError::unexpected_character(current)),
        }
    }

    fn eat_unary(&mut self) -> Option<UnaryOperator> {
        self.source.skip_spaces();
        let operator = self
            .source
            .get_current()
            .and_then(|c| UnaryOperator::try_from(c).ok())?;
        self.source.advance();
        Some(operator)
    }

    fn parse_number(&mut self) -> Result<f64> {
        let content = self.source.take_while(is_digit_or_dot);
        content
            .parse()
            .map_err(|_| CalcError::invalid_number(content.into()))
    }
}
