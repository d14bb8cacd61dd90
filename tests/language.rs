use std::fs;

use reckon::{
    ast::BinaryOperator,
    error::{EvaluationError, LexicalError, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        environment::Environment, evaluator::core::reduce, lexer::tokenize, token::Token,
    },
    session::Session,
};
use walkdir::WalkDir;

const EPSILON: f64 = 1e-8;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_reckon_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut out = Vec::new();
            let mut err = Vec::new();
            let failures = Session::new().run(code.as_bytes(), &mut out, &mut err).unwrap();
            assert_eq!(failures,
                       0,
                       "Example {} in {:?} failed:\n{}\nErrors:\n{}",
                       i + 1,
                       path,
                       code,
                       String::from_utf8_lossy(&err));
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_reckon_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> Result<f64, EvaluationError> {
    evaluate(src, &mut Environment::new())
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(v) => assert!((v - expected).abs() < EPSILON,
                         "'{src}' evaluated to {v}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_lexical_error(src: &str) -> LexicalError {
    match eval(src) {
        Err(EvaluationError::Lexical(e)) => e,
        other => panic!("'{src}' should fail lexically, got {other:?}"),
    }
}

fn assert_parse_error(src: &str) -> ParseError {
    match eval(src) {
        Err(EvaluationError::Parse(e)) => e,
        other => panic!("'{src}' should fail to parse, got {other:?}"),
    }
}

#[test]
fn number_literals() {
    assert_value("2", 2.0);
    assert_value("2.0", 2.0);
    assert_value("0", 0.0);
    assert_value("0.25", 0.25);
    assert_value(".5", 0.5);
    assert_value("1234567", 1_234_567.0);
    assert_value("10.125", 10.125);
}

#[test]
fn literal_result_is_recorded_as_last_result() {
    let mut env = Environment::new();
    assert_eq!(evaluate("3.75", &mut env), Ok(3.75));
    assert_eq!(env.get("_"), Some(3.75));
}

#[test]
fn basic_operators() {
    assert_value("1+1", 2.0);
    assert_value("4-0", 4.0);
    assert_value("0.5*4", 2.0);
    assert_value("9/4", 2.25);
}

#[test]
fn operator_precedence_and_associativity() {
    assert_value("1+2*3-4/2-1", 4.0);
    assert_value("8-3-1", 4.0);
    assert_value("16/4/2", 2.0);
    assert_value("2*3+4*5", 26.0);
}

#[test]
fn parentheses() {
    assert_value("9/((2+1)*6)", 0.5);
    assert_value("(1+2)*3", 9.0);
    assert_value("8-(3-1)", 6.0);
    assert_value("((((7))))", 7.0);
}

#[test]
fn functions() {
    assert_value("sqrt(4)", 2.0);
    assert_value("cos(1)*cos(1)+sin(1)*sin(1)", 1.0);
    assert_value("log(4)/log(2)", 2.0);
    assert_value("sqrt(sqrt(16))", 2.0);
    assert_value("2*sin(0)+cos(0)", 1.0);
    assert_value("sqrt((3*3)+(4*4))", 5.0);
}

#[test]
fn ieee_results_are_not_errors() {
    assert!(eval("sqrt(0-1)").unwrap().is_nan());
    assert_eq!(eval("log(0)").unwrap(), f64::NEG_INFINITY);
    assert_eq!(eval("1/0").unwrap(), f64::INFINITY);
    assert!(eval("0/0").unwrap().is_nan());
}

#[test]
fn bindings_persist_between_evaluations() {
    let mut env = Environment::new();
    assert_eq!(evaluate("test=9/((2+1)*6)", &mut env), Ok(0.5));
    assert_eq!(env.get("_"), Some(0.5));
    assert_eq!(evaluate("test", &mut env), Ok(0.5));
    assert_eq!(env.get("_"), Some(0.5));
    assert_eq!(evaluate("x2=test*4", &mut env), Ok(2.0));
    assert_eq!(evaluate("x2+test", &mut env), Ok(2.5));
}

#[test]
fn last_result_tracks_every_success() {
    let mut env = Environment::new();
    evaluate("a=3", &mut env).unwrap();
    assert_eq!(env.get("_"), Some(3.0));
    evaluate("a*a", &mut env).unwrap();
    assert_eq!(env.get("_"), Some(9.0));
    assert!(evaluate("missing", &mut env).is_err());
    assert_eq!(env.get("_"), Some(9.0));
}

#[test]
fn binding_is_case_sensitive() {
    let mut env = Environment::new();
    evaluate("Rate=2", &mut env).unwrap();
    assert!(matches!(evaluate("rate", &mut env),
                     Err(EvaluationError::Runtime(RuntimeError::UnboundVariable { .. }))));
}

#[test]
fn rebinding_replaces_value() {
    let mut env = Environment::new();
    evaluate("x=1", &mut env).unwrap();
    evaluate("x=x+1", &mut env).unwrap();
    assert_eq!(env.get("x"), Some(2.0));
}

#[test]
fn underscore_is_not_an_identifier() {
    // `_` can only be observed through the environment, never named in an
    // expression, so neither `_=5` nor `_+1` gets past the lexer.
    assert_eq!(assert_lexical_error("_=5").position(), 0);
    assert_eq!(assert_lexical_error("_+1").position(), 0);
}

#[test]
fn failed_evaluation_leaves_environment_untouched() {
    let mut env = Environment::new();
    evaluate("x=1", &mut env).unwrap();
    let before = env.clone();

    assert!(evaluate("x=missing+1", &mut env).is_err());
    assert!(evaluate("y=1+", &mut env).is_err());
    assert!(evaluate("z=1$", &mut env).is_err());

    assert_eq!(env, before);
}

#[test]
fn unbound_identifier() {
    assert_eq!(eval("neverbound"),
               Err(EvaluationError::Runtime(RuntimeError::UnboundVariable { name:
                                                                                "neverbound".to_string(), })));
}

#[test]
fn empty_input() {
    assert_eq!(eval(""), Err(EvaluationError::EmptyInput));
}

#[test]
fn lexical_errors() {
    assert_eq!(assert_lexical_error("erü+1"),
               LexicalError::UnexpectedCharacter { character: 'ü',
                                                   position:  2, });
    assert_eq!(assert_lexical_error("01"), LexicalError::LeadingZero { position: 1 });
    assert_eq!(assert_lexical_error("0."),
               LexicalError::NoDigitAfterPoint { position: 1 });
    assert_eq!(assert_lexical_error("3."),
               LexicalError::NoDigitAfterPoint { position: 1 });
    assert_eq!(assert_lexical_error("."), LexicalError::NoDigitAfterPoint { position: 0 });
    assert_eq!(assert_lexical_error("2a"),
               LexicalError::UnexpectedCharacter { character: 'a',
                                                   position:  1, });
}

#[test]
fn whitespace_is_rejected() {
    assert_eq!(assert_lexical_error("1 + 1"),
               LexicalError::UnexpectedCharacter { character: ' ',
                                                   position:  1, });
    assert_eq!(assert_lexical_error(" 1").position(), 0);
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(assert_parse_error("((1)"), ParseError::MismatchedParenthesis);
    assert_eq!(assert_parse_error("((1)))"), ParseError::MismatchedParenthesis);
    assert_eq!(assert_parse_error("sqrt(4"), ParseError::MismatchedParenthesis);
}

#[test]
fn missing_operand_or_operator() {
    assert_eq!(assert_parse_error("1+"), ParseError::UnexpectedEndOfInput);
    assert_eq!(assert_parse_error("(1)2"),
               ParseError::ExpectedOperator { found: "2".to_string() });
    assert_eq!(assert_parse_error("()"), ParseError::ExpectedOperand { found: ")".to_string() });
    assert_eq!(assert_parse_error("sqrt"), ParseError::UnexpectedEndOfInput);
    assert_eq!(assert_parse_error("x(1)"), ParseError::ExpectedOperator { found: "(".to_string() });
    assert_eq!(assert_parse_error("1.5.2"),
               ParseError::ExpectedOperator { found: ".2".to_string() });
}

#[test]
fn leading_minus_is_rejected() {
    // Unary negation is not supported: `-` is always the binary operator.
    assert_eq!(assert_parse_error("-1"), ParseError::ExpectedOperand { found: "-".to_string() });
    assert_eq!(assert_parse_error("2*-1"),
               ParseError::ExpectedOperand { found: "-".to_string() });
    assert_eq!(assert_parse_error("1--1"),
               ParseError::ExpectedOperand { found: "-".to_string() });
    assert_value("0-1", -1.0);
}

#[test]
fn function_applies_to_a_bare_operand() {
    // A function name directly followed by an operand applies to that operand.
    assert_value("sin.5", 0.5_f64.sin());
    assert_value("sqrt.25", 0.5);
}

#[test]
fn binding_errors() {
    assert_eq!(assert_parse_error("1=2"), ParseError::AssignmentTarget);
    assert_eq!(assert_parse_error("sin=2"), ParseError::AssignmentTarget);
    assert_eq!(assert_parse_error("x=y=1"), ParseError::MisplacedBinding);
    assert_eq!(assert_parse_error("1+x=2"), ParseError::MisplacedBinding);
    assert_eq!(assert_parse_error("x="), ParseError::MisplacedBinding);
}

#[test]
fn lexer_stops_after_first_error() {
    let mut tokens = tokenize("1$2");
    assert_eq!(tokens.next(), Some(Ok(Token::number("1", 1.0))));
    assert_eq!(tokens.next(),
               Some(Err(LexicalError::UnexpectedCharacter { character: '$',
                                                            position:  1, })));
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn malformed_postfix_is_rejected() {
    let environment = Environment::new();
    let one = Token::number("1", 1.0);
    let two = Token::number("2", 2.0);

    assert_eq!(reduce(&[one.clone(), Token::Operator(BinaryOperator::Add)], &environment),
               Err(RuntimeError::StackUnderflow { token: "+".to_string() }));
    assert_eq!(reduce(&[Token::LeftParen], &environment),
               Err(RuntimeError::UnexpectedToken { token: "(".to_string() }));
    assert_eq!(reduce(&[one, two], &environment),
               Err(RuntimeError::LeftoverOperands { count: 2 }));
    assert_eq!(reduce(&[], &environment), Err(RuntimeError::LeftoverOperands { count: 0 }));
}
