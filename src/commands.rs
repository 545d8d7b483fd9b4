use crate::error_handling::*;
use crate::evaluating::*;

/// One line of shell input, classified.
#[derive(Debug, PartialEq)]
pub enum Command<'a> {
    exit,
    square_root(&'a str),
    square(&'a str),
    cube(&'a str),
    expression(&'a str),
}

impl<'a> From<&'a str> for Command<'a> {
    fn from(line: &'a str) -> Self {
        use Command::*;

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            return exit;
        }

        let keyword = trimmed.get(..5).map(str::to_ascii_lowercase);
        let argument = trimmed.get(5..).unwrap_or_default();
        match keyword.as_deref() {
            Some("sqrt ") => square_root(argument),
            Some("pow2 ") => square(argument),
            Some("cube ") => cube(argument),
            _ => expression(line),
        }
    }
}

impl Command<'_> {
    /// `None` when the shell should stop.
    pub fn run(&self) -> Option<std::result::Result<f64, Failure>> {
        use Command::*;
        let result = match self {
            exit => return None,
            square_root(argument) => calculate_square_root(argument).map_err(Failure::from),
            square(argument) => calculate_square(argument).map_err(Failure::from),
            cube(argument) => calculate_cube(argument).map_err(Failure::from),
            expression(text) => evaluate(text).map_err(Failure::from),
        };
        Some(result)
    }
}

fn parse_argument(text: &str) -> std::result::Result<f64, CommandError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| CommandError::not_a_number(text.into()))
}

pub fn calculate_square_root(text: &str) -> std::result::Result<f64, CommandError> {
    let value = parse_argument(text)?;
    if value < 0.0 {
        return Err(CommandError::negative_root(value));
    }
    Ok(value.sqrt())
}

pub fn calculate_square(text: &str) -> std::result::Result<f64, CommandError> {
    let value = parse_argument(text)?;
    Ok(value * value)
}

pub fn calculate_cube(text: &str) -> std::result::Result<f64, CommandError> {
    let value = parse_argument(text)?;
    Ok(value * value * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::from("  EXIT "), Command::exit);
        assert_eq!(Command::from("Sqrt 16"), Command::square_root("16"));
        assert_eq!(Command::from("pow2 -3"), Command::square("-3"));
        assert_eq!(Command::from(" cube 2.5 "), Command::cube("2.5"));
    }

    #[test]
    fn keyword_needs_a_trailing_space() {
        assert_eq!(Command::from("sqrt"), Command::expression("sqrt"));
        assert_eq!(Command::from("exit now"), Command::expression("exit now"));
    }

    #[test]
    fn everything_else_is_an_expression() {
        assert_eq!(Command::from(" 1 + 2"), Command::expression(" 1 + 2"));
        assert_eq!(Command::from(""), Command::expression(""));
        assert_eq!(Command::from("é+1"), Command::expression("é+1"));
    }

    #[test]
    fn run_dispatches() {
        assert_eq!(Command::exit.run(), None);
        assert_eq!(Command::from("sqrt 25").run(), Some(Ok(5.0)));
        assert_eq!(Command::from("(1+2)*3").run(), Some(Ok(9.0)));
        assert_eq!(
            Command::from("2+)").run(),
            Some(Err(Failure::calc(CalcError::unexpected_character(Some(')')))))
        );
    }

    #[test]
    fn negative_root_is_refused() {
        assert_eq!(calculate_square_root("-4"), Err(CommandError::negative_root(-4.0)));
        assert_eq!(calculate_square_root("0"), Ok(0.0));
    }
}
