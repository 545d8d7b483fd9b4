use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("mismatched parentheses")]
    mismatched_parentheses,

    #[error("unexpected {}", describe(.0))]
    unexpected_character(Option<char>),

    #[error("'{0}' is not a valid number")]
    invalid_number(String),
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(character) => format!("character, '{}'", character),
        None => "end of expression".into(),
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("'{0}' is not a number")]
    not_a_number(String),

    #[error("cannot take the square root of {0}")]
    negative_root(f64),
}

#[derive(Error, Debug, PartialEq)]
pub enum Failure {
    #[error(transparent)]
    calc(#[from] CalcError),

    #[error(transparent)]
    command(#[from] CommandError),
}

pub type Result<T> = std::result::Result<T, CalcError>;
