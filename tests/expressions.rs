use std::{
    fs,
    time::{Duration, Instant},
};

use exptree::{
    Evaluation,
    ast::{BinaryOperator, Expr},
    build,
    error::{EvalError, ParseError},
    evaluate, get_evaluation, get_result,
    interpreter::{
        lexer::{Token, tokenize},
        parser::stack::MAX_TREE_DEPTH,
    },
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "case"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let result = get_result(&expression);
            match expected {
                Some(value) => match result {
                    Ok(actual) => assert_eq!(actual,
                                             value,
                                             "Case {} in {:?} gave the wrong value: {}",
                                             i + 1,
                                             path,
                                             expression),
                    Err(e) => panic!("Case {} in {:?} failed:\n{}\nError: {}", i + 1, path, expression, e),
                },
                None => assert!(result.is_err(),
                                "Case {} in {:?} succeeded but was expected to fail: {}",
                                i + 1,
                                path,
                                expression),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits `expression => expected` lines. `expected` is `None` for `error`.
fn extract_cases(content: &str) -> Vec<(String, Option<i64>)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .filter_map(|line| line.rsplit_once("=>"))
           .map(|(expression, expected)| {
               let expected = match expected.trim() {
                   "error" => None,
                   value => Some(value.parse().unwrap_or_else(|e| {
                                                    panic!("Bad expected value '{value}': {e}")
                                                })),
               };
               (expression.to_string(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong value for '{src}'"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match build(src) {
        Ok(tree) => panic!("'{src}' built {tree} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("2 * 3 + 4", 10);
    assert_value("20 - 6 / 3", 18);
}

#[test]
fn left_associativity() {
    assert_value("8 - 3 - 2", 3);
    assert_value("64 / 4 / 2", 8);
    assert_value("8 - 3 + 2", 7);
    assert_value("12 / 3 * 2", 8);

    let tree = build("8 - 3 - 2").unwrap();
    assert_eq!(tree,
               Expr::operator(BinaryOperator::Sub,
                              Expr::operator(BinaryOperator::Sub, Expr::Operand(8), Expr::Operand(3)),
                              Expr::Operand(2)));
}

#[test]
fn parentheses_reduce_first() {
    assert_value("8 - (3 - 2)", 7);
    assert_value("2 * (3 + (4 - 1)) / 3", 4);
    assert_eq!(build("(1 + 2) * 3").unwrap().to_string(), "((1 + 2) * 3)");
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("(0 - 7) / 2", -3);
    assert_value("(0 - 1) / 2", 0);
}

#[test]
fn division_by_zero_is_error() {
    let tree = build("5 / 0").unwrap();
    assert_eq!(evaluate(&tree), Err(EvalError::DivisionByZero));
    assert!(get_result("5 / (1 - 1)").is_err());
}

#[test]
fn overflow_is_error() {
    let tree = build("9223372036854775807 * 2").unwrap();
    assert_eq!(evaluate(&tree), Err(EvalError::Overflow { op: BinaryOperator::Mul }));
    assert_eq!(parse_error("99999999999999999999"),
               ParseError::LiteralTooLarge { position: 0 });
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  ( 1+2 )  *3 ", 9);
    assert_value("(1+2)*3", 9);
    assert_value("\t1\n+\r2 ", 3);
    assert_eq!(build("  ( 1+2 )  *3 ").unwrap(), build("(1+2)*3").unwrap());
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse_error("(1 + 2"), ParseError::UnbalancedParentheses { position: 0 });
    assert_eq!(parse_error("1 + 2)"), ParseError::UnbalancedParentheses { position: 5 });
    assert!(matches!(parse_error("(()"), ParseError::UnbalancedParentheses { .. }));
}

#[test]
fn malformed_expressions() {
    for src in ["", "   ", "+", "1 +", "+3", "1 2", "()", "(+)", "1 * * 2"] {
        assert!(matches!(parse_error(src), ParseError::MalformedExpression { .. }),
                "'{src}' should be malformed");
    }
}

#[test]
fn invalid_characters() {
    assert_eq!(parse_error("1 + a"),
               ParseError::InvalidCharacter { character: 'a',
                                              position:  4, });
    assert_eq!(parse_error("3 % 2"),
               ParseError::InvalidCharacter { character: '%',
                                              position:  2, });
    assert_eq!(parse_error("1.5"),
               ParseError::InvalidCharacter { character: '.',
                                              position:  1, });
    assert_eq!(parse_error("é + 1"),
               ParseError::InvalidCharacter { character: 'é',
                                              position:  0, });
}

#[test]
fn evaluation_is_repeatable() {
    let tree = build("(17 - 5) * 3 / 4 + 2").unwrap();
    let first = evaluate(&tree).unwrap();
    let second = evaluate(&tree).unwrap();
    assert_eq!(first, 11);
    assert_eq!(first, second);
}

#[test]
fn tree_shape() {
    let tree = build("1 + 2 * 3").unwrap();
    assert_eq!(tree.node_count(), 5);
    match tree {
        Expr::Operator { op: BinaryOperator::Add, left, right } => {
            assert_eq!(*left, Expr::Operand(1));
            assert_eq!(right.to_string(), "(2 * 3)");
        },
        other => panic!("Unexpected root: {other}"),
    }
}

#[test]
fn error_messages() {
    assert_eq!(get_result("1 + a").unwrap_err().to_string(),
               "Invalid character 'a' at position 4.");
    assert_eq!(get_result("5 / 0").unwrap_err().to_string(), "Division by zero.");
}

#[test]
fn long_input_is_tokenized_in_linear_time() {
    let terms = 400_000;
    let source = vec!["1"; terms].join("*");

    let start = Instant::now();
    let tokens = tokenize(&source).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(tokens.len(), 2 * terms - 1);
    assert_eq!(tokens.last(), Some(&(Token::Integer(1), 2 * terms - 2)));
    assert!(elapsed < Duration::from_secs(5), "Tokenizing {terms} terms took {elapsed:?}");

    let start = Instant::now();
    let result = build(&source);
    let elapsed = start.elapsed();

    assert_eq!(result, Err(ParseError::NestingTooDeep { limit: MAX_TREE_DEPTH }));
    assert!(elapsed < Duration::from_secs(5), "Building {terms} terms took {elapsed:?}");
}

#[test]
fn positions_are_character_indices() {
    assert_eq!(parse_error("(1 +\t2) * x"),
               ParseError::InvalidCharacter { character: 'x',
                                              position:  10, });
    assert_eq!(parse_error("1 + 2 ü"),
               ParseError::InvalidCharacter { character: 'ü',
                                              position:  6, });
}

#[test]
fn tree_depth_is_capped() {
    let at_limit = vec!["1"; MAX_TREE_DEPTH].join("+");
    let terms = i64::try_from(MAX_TREE_DEPTH).unwrap();
    assert_value(&at_limit, terms);

    let over_limit = vec!["1"; MAX_TREE_DEPTH + 1].join("+");
    assert_eq!(parse_error(&over_limit),
               ParseError::NestingTooDeep { limit: MAX_TREE_DEPTH });

    let nested = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_value(&nested, 1);
}

#[test]
fn evaluation_keeps_the_tree() {
    let Evaluation { tree, value } = get_evaluation("2 * (3 + 4)").unwrap();
    assert_eq!(tree.to_string(), "(2 * (3 + 4))");
    assert_eq!(value, 14);
    assert!(get_evaluation("5 / 0").is_err());
}
