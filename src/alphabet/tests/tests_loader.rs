use rstest::rstest;

use super::predicate;
use crate::alphabet::{Category, DefinitionLine, classify_line, load_definition, load_str};

const DEFINITION: &str = "\
variables: w x y z
constants: C D
predicates: P[2] Q[1]
equality: =
connectives: \\land \\lor \\implies \\iff \\neg
quantifiers: \\exists \\forall
formula: \\forall x ( \\exists y ( P(x,y) \\implies \\neg Q(x) )
\\lor \\exists z ( ( (C = z) \\land Q(z) ) \\land \\neg ( x = z ) ) )
";

#[rstest]
#[case("variables: x y", Category::Variables, " x y")]
#[case("   constants:a", Category::Constants, "a")]
#[case("predicates:", Category::Predicates, "")]
#[case("equality: =", Category::Equality, " =")]
#[case("connectives: & | > = !", Category::Connectives, " & | > = !")]
#[case("quantifiers: A E", Category::Quantifiers, " A E")]
#[case("formula: P(x)", Category::Formula, " P(x)")]
fn test_classify_header(#[case] line: &str, #[case] category: Category, #[case] rest: &str) {
    let expected = DefinitionLine::Header { category, rest };
    assert_eq!(classify_line(line), expected);
}

#[rstest]
#[case("x y z")]
#[case("Variables: x")]
#[case("variable: x")]
#[case("")]
fn test_classify_continuation(#[case] line: &str) {
    assert_eq!(classify_line(line), DefinitionLine::Continuation(line));
}

#[test]
fn test_load_collects_every_class() {
    let definition = load_str(DEFINITION);
    let raw = &definition.alphabet;

    assert_eq!(raw.variables, ["w", "x", "y", "z"]);
    assert_eq!(raw.constants, ["C", "D"]);
    assert_eq!(raw.predicates, [predicate("P", "2"), predicate("Q", "1")]);
    assert_eq!(raw.equality, ["="]);
    assert_eq!(
        raw.connectives,
        [r"\\land", r"\\lor", r"\\implies", r"\\iff", r"\\neg"]
    );
    assert_eq!(raw.quantifiers, [r"\\exists", r"\\forall"]);
}

#[test]
fn test_formula_continues_across_lines() {
    let definition = load_str(DEFINITION);
    let formula = &definition.formula;

    assert_eq!(formula.first().map(|s| s.as_str()), Some(r"\\forall"));
    assert_eq!(formula.last().map(|s| s.as_str()), Some(")"));
    // `P(x,y)` splits into six tokens
    let p = formula.iter().position(|t| t == "P").unwrap();
    assert_eq!(formula[p..p + 6], ["P", "(", "x", ",", "y", ")"]);
}

#[test]
fn test_continuation_appends_to_latest_header() {
    let definition = load_definition(["variables: x", "  y", "constants:", "a b"]);
    assert_eq!(definition.alphabet.variables, ["x", "y"]);
    assert_eq!(definition.alphabet.constants, ["a", "b"]);
}

#[test]
fn test_repeated_header_extends_class() {
    let definition = load_definition(["variables: x", "constants: a", "variables: y"]);
    assert_eq!(definition.alphabet.variables, ["x", "y"]);
}

#[test]
fn test_content_before_first_header_is_ignored() {
    let definition = load_definition(["stray words", "variables: x"]);
    assert_eq!(definition.alphabet.variables, ["x"]);
    assert!(definition.alphabet.constants.is_empty());
}

#[test]
fn test_malformed_arity_is_kept_for_validation() {
    let definition = load_definition(["predicates: P[two] Q R[1]x"]);
    assert_eq!(
        definition.alphabet.predicates,
        vec![
            predicate("P", "two"),
            predicate("Q", ""),
            predicate("Rx", "1"),
        ]
    );
}

#[test]
fn test_empty_input() {
    let definition = load_str("");
    assert!(definition.formula.is_empty());
    assert!(definition.alphabet.variables.is_empty());
}
