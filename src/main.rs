#![allow(nonstandard_style)]

use madcalc::*;

use std::io::Write;

const PROMPT: &str = "> ";

fn explain(failure: &Failure) -> String {
    match failure {
        Failure::calc(CalcError::mismatched_parentheses) => {
            "Oops! Your parentheses don't match. Please check and try again.".into()
        }
        Failure::calc(CalcError::unexpected_character(_)) => {
            "Hmm, I see something I don't understand. Please use only numbers, +, -, *, /, \
             parentheses, sqrt, pow2 and cube."
                .into()
        }
        Failure::calc(CalcError::invalid_number(_)) => {
            "Oops! That doesn't look like a valid expression. Please try again.".into()
        }
        Failure::command(CommandError::not_a_number(_)) => {
            format!("Oops! That needs a number ({}).", failure)
        }
        Failure::command(CommandError::negative_root(_)) => {
            "I can only calculate the square root of positive numbers!".into()
        }
    }
}

fn prompt() -> std::io::Result<()> {
    print!("{PROMPT}");
    std::io::stdout().flush()
}

fn main() -> std::io::Result<()> {
    println!("Welcome to Mad Calc!");
    println!("Enter an expression, 'sqrt <number>', 'pow2 <number>', 'cube <number>', or 'exit' to quit:");
    prompt()?;

    for line in std::io::stdin().lines() {
        let line = line?;
        match Command::from(line.as_str()).run() {
            None => break,
            Some(Ok(result)) => println!("The answer is: {}", result),
            Some(Err(e)) => println!("{}", explain(&e)),
        }
        prompt()?;
    }

    println!("Goodbye!");
    Ok(())
}
