//! End-to-end sessions through the public API

use std::io::Cursor;

use calculator::{run, CalcError, Parity};
use console::Config;

fn session(config: &Config, text: &str) -> (calculator::Result<calculator::Report>, String) {
    let mut input = Cursor::new(text.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = run(config, &mut input, &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_four_and_two() {
    let (result, output) = session(&Config::default(), "4\n2\n");

    let expected = "Enter the first number: Enter the second number: \n\
                    Results:\n\
                    Addition: 6\n\
                    Subtraction: 2\n\
                    Multiplication: 8\n\
                    Division: 2\n\
                    The sum is even.\n";
    assert_eq!(output, expected);
    assert_eq!(result.unwrap().parity, Parity::Even);
}

#[test]
fn test_invalid_then_valid() {
    let (result, output) = session(&Config::default(), "abc\n4\n2\n");

    assert!(result.is_ok());
    assert_eq!(output.matches("Invalid input").count(), 1);
    assert!(output.starts_with(
        "Enter the first number: Invalid input. Please enter numeric values only.\n\n"
    ));
    assert!(output.contains("Addition: 6\n"));
    assert!(output.ends_with("The sum is even.\n"));
}

#[test]
fn test_divide_by_zero() {
    let (result, output) = session(&Config::default(), "5\n0\n");

    let report = result.unwrap();
    assert_eq!(report.quotient, None);
    assert!(output.contains("Addition: 5\n"));
    assert!(output.contains("Multiplication: 0\n"));
    assert!(output.contains("Division: Cannot divide by zero.\n"));
    assert!(output.ends_with("The sum is odd.\n"));
}

#[test]
fn test_fractional_sum_is_odd() {
    let (result, output) = session(&Config::default(), "1.5\n1\n");

    assert_eq!(result.unwrap().sum, 2.5);
    assert!(output.contains("Division: 1.5\n"));
    assert!(output.ends_with("The sum is odd.\n"));
}

#[test]
fn test_whitespace_around_numbers() {
    let (result, _) = session(&Config::default(), "  10 \r\n\t-4\n");

    let report = result.unwrap();
    assert_eq!(report.sum, 6.0);
    assert_eq!(report.difference, 14.0);
    assert_eq!(report.quotient, Some(-2.5));
}

#[test]
fn test_undecodable_bytes_are_invalid_input() {
    let mut input = Cursor::new(b"4\xff\n4\n2\n".to_vec());
    let mut output = Vec::new();
    let result = run(&Config::default(), &mut input, &mut output);
    let output = String::from_utf8(output).unwrap();

    assert_eq!(result.unwrap().sum, 6.0);
    assert!(output.starts_with(
        "Enter the first number: Invalid input. Please enter numeric values only.\n\n"
    ));
    assert!(!output.contains("Unexpected error"));
}

#[test]
fn test_eof_before_valid_input() {
    let (result, output) = session(&Config::default(), "nope\n");

    assert!(matches!(result, Err(CalcError::InputClosed)));
    assert!(!output.contains("Results:"));
}

#[test]
fn test_configured_attempt_cap() {
    let config = capped(1);
    let (result, output) = session(&config, "x\n4\n2\n");

    assert!(matches!(result, Err(CalcError::TooManyAttempts(1))));
    assert_eq!(output.matches("Invalid input").count(), 1);
    assert!(!output.contains("Results:"));
}

#[test]
fn test_cap_not_hit_when_input_recovers() {
    let config = capped(3);
    let (result, _) = session(&config, "x\ny\n4\n2\n");

    assert_eq!(result.unwrap().product, 8.0);
}

fn capped(max_attempts: u32) -> Config {
    let mut config = Config::default();
    config.input.max_attempts = Some(max_attempts);
    config
}
