use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::*;

/// Evaluates an arithmetic expression of `+ - * /`, unary signs and
/// parentheses. Whitespace anywhere in `text` is ignored.
///
/// Division by zero follows IEEE-754 and is not an error.
pub fn evaluate(text: &str) -> Result<f64> {
    Parser::new(StringScanner::new(text)).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
        assert_eq!(evaluate("-1/0"), Ok(f64::NEG_INFINITY));
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert_eq!(evaluate("2+)"), Err(CalcError::unexpected_character(Some(')'))));
        assert_eq!(evaluate("(1))"), Err(CalcError::unexpected_character(Some(')'))));
        assert_eq!(evaluate("4x"), Err(CalcError::unexpected_character(Some('x'))));
    }
}
