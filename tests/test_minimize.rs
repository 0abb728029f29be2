//! End-to-end tests for the minimization pipeline

use quine_logic::{
    minimize_str, ExpressionParseError, Minimizable, MinimizationError, SopExpr, Term,
    TermParseError,
};

fn position_of(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line == needle)
        .unwrap_or_else(|| panic!("{:?} not found in {:#?}", needle, lines))
}

#[test]
fn test_reference_example() {
    let result = minimize_str("xyz + x~yz + x~y + x~y~z").unwrap();

    assert_eq!(result.final_expression(), "x~y + xz");
    assert_eq!(
        result.trace_lines(),
        vec![
            "x~y + x~y~z + x~yz + xyz",
            "x~yz + x~y~z = x~y",
            "xyz + x~yz = xz",
            "Minterm Expansion: x~y + xz",
            "",
            "x~y + xz",
            "No further reductions found.",
            "Final Expression: x~y + xz",
        ]
    );

    let input = SopExpr::parse("xyz + x~yz + x~y + x~y~z").unwrap();
    assert!(result.expression().equivalent_to(&input));
}

#[test]
fn test_single_variable_merge() {
    let result = minimize_str("xy + x~y").unwrap();
    let lines = result.trace_lines();

    assert_eq!(result.final_expression(), "x");
    let merge = position_of(&lines, "xy + x~y = x");
    let done = position_of(&lines, "No further reductions found.");
    assert!(merge < done);
    assert_eq!(lines.last().unwrap(), "Final Expression: x");
}

#[test]
fn test_duplicate_terms_collapse() {
    let result = minimize_str("xy + xy").unwrap();

    assert_eq!(result.final_expression(), "xy");
    assert_eq!(result.iterations(), 1);
    assert_eq!(result.trace().combinations().count(), 0);
}

#[test]
fn test_two_merges_sorted_for_display() {
    let result = minimize_str("ab~c + abc + ~abc").unwrap();

    assert_eq!(result.final_expression(), "ab + bc");
    let lines = result.trace_lines();
    position_of(&lines, "abc + ab~c = ab");
    position_of(&lines, "abc + ~abc = bc");
}

#[test]
fn test_full_cube_collapses_to_single_literal() {
    let result = minimize_str("xyz + xy~z + x~yz + x~y~z").unwrap();

    assert_eq!(result.final_expression(), "x");
    assert_eq!(result.iterations(), 3);
}

#[test]
fn test_tautology_yields_true_term() {
    let result = minimize_str("x + ~x").unwrap();

    assert_eq!(result.expression().len(), 1);
    assert!(result.expression().terms()[0].is_empty());
    assert_eq!(result.final_expression(), "");
}

#[test]
fn test_true_term_keeps_freshly_merged_term() {
    let result = minimize_str("xy + x~y + x + ~x").unwrap();

    assert_eq!(result.expression().terms(), &[Term::new(), Term::parse("x").unwrap()]);
    assert_eq!(result.final_expression(), " + x");
    assert!(result
        .trace_lines()
        .contains(&"Minterm Expansion:  + x".to_string()));
}

#[test]
fn test_self_contradictory_term() {
    let result = minimize_str("x~x").unwrap();
    assert_eq!(result.expression().terms(), &[Term::new()]);
}

#[test]
fn test_absent_variable_is_not_a_wildcard() {
    // x~y does not merge with x~yz even though it covers it
    let result = minimize_str("x~y + x~yz").unwrap();
    assert_eq!(result.expression().len(), 2);
    assert_eq!(result.trace().combinations().count(), 0);
}

#[test]
fn test_idempotent_on_own_output() {
    let first = minimize_str("xyz + x~yz + x~y + x~y~z").unwrap();
    let second = first.expression().minimize().unwrap();

    assert_eq!(second.final_expression(), first.final_expression());
    assert_eq!(second.iterations(), 1);
    assert_eq!(
        second.trace_lines(),
        vec![
            "x~y + xz",
            "No further reductions found.",
            "Final Expression: x~y + xz",
        ]
    );
}

#[test]
fn test_case_sensitive_variables() {
    let result = minimize_str("aB + a~B + Ab").unwrap();
    // a and A are different variables
    assert_eq!(result.expression().len(), 2);
}

#[test]
fn test_malformed_term_error() {
    let err = minimize_str("xy + x~").unwrap_err();

    assert!(err.is_malformed_term());
    match err {
        MinimizationError::Parse(ExpressionParseError::MalformedTerm { index, source, .. }) => {
            assert_eq!(index, 1);
            assert!(matches!(
                source,
                TermParseError::DanglingComplement { position: 1, .. }
            ));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_empty_expression_error() {
    for input in ["", "  "] {
        let err = minimize_str(input).unwrap_err();
        assert!(err.is_empty_expression(), "input {:?}: {}", input, err);
    }
}

#[test]
fn test_empty_term_error() {
    let err = minimize_str("xy + ").unwrap_err();
    assert!(matches!(
        err,
        MinimizationError::Parse(ExpressionParseError::EmptyTerm { index: 1, .. })
    ));
}

#[test]
fn test_errors_convert_to_io() {
    fn run(input: &str) -> std::io::Result<String> {
        Ok(minimize_str(input)?.final_expression())
    }

    assert_eq!(run("ab + a~b").unwrap(), "a");
    assert_eq!(
        run("~").unwrap_err().kind(),
        std::io::ErrorKind::InvalidData
    );
}
