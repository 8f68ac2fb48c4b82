use rstest::rstest;

use super::{alphabet, tokens};
use crate::errors::ParseError;
use crate::parser::{NodeLabel, NonTerminal, ParseTree, parse, parse_with_limit};

fn nt(nt: NonTerminal) -> NodeLabel {
    NodeLabel::NonTerminal(nt)
}

fn t(text: &str) -> NodeLabel {
    NodeLabel::Terminal(text.into())
}

fn parse_ok(formula: &str) -> ParseTree {
    parse(&alphabet(), &tokens(formula)).unwrap()
}

#[test]
fn test_quantified_atom_shape() {
    let tree = parse_ok("forall x P(x)");
    let root = tree.root();
    assert_eq!(tree.label(root), &nt(NonTerminal::Formula));
    assert_eq!(
        tree.child_labels(root),
        [
            &nt(NonTerminal::Quantifier),
            &nt(NonTerminal::Variable),
            &nt(NonTerminal::Formula),
        ]
    );

    let body = tree.children(root)[2];
    assert_eq!(tree.child_labels(body), [&nt(NonTerminal::Predicate)]);

    let predicate = tree.children(body)[0];
    assert_eq!(
        tree.child_labels(predicate),
        [
            &nt(NonTerminal::PredicateSymbol),
            &t("("),
            &nt(NonTerminal::VariableList),
            &t(")"),
        ]
    );

    let terminals: Vec<_> = tree.terminals().into_iter().map(|s| s.as_str()).collect();
    assert_eq!(terminals, ["forall", "x", "P", "(", "x", ")"]);
}

#[test]
fn test_binary_shape() {
    let tree = parse_ok("( P(x) implies not P(y) )");
    assert_eq!(
        tree.child_labels(tree.root()),
        [
            &t("("),
            &nt(NonTerminal::Formula),
            &nt(NonTerminal::Connective),
            &nt(NonTerminal::Formula),
            &t(")"),
        ]
    );
    let connective = tree.children(tree.root())[2];
    assert_eq!(tree.child_labels(connective), [&t("implies")]);
}

#[test]
fn test_equation_shape() {
    let tree = parse_ok("( x = a )");
    let root = tree.root();
    assert_eq!(
        tree.child_labels(root),
        [
            &t("("),
            &nt(NonTerminal::Term),
            &t("="),
            &nt(NonTerminal::Term),
            &t(")"),
        ]
    );
    let left = tree.children(root)[1];
    let right = tree.children(root)[3];
    assert_eq!(tree.child_labels(left), [&nt(NonTerminal::Variable)]);
    assert_eq!(tree.child_labels(right), [&nt(NonTerminal::Constant)]);
}

#[test]
fn test_variable_list_nests_to_the_right() {
    let tree = parse_ok("R(x,y)");
    let predicate = tree.children(tree.root())[0];
    let list = tree.children(predicate)[2];
    assert_eq!(
        tree.child_labels(list),
        [
            &nt(NonTerminal::Variable),
            &t(","),
            &nt(NonTerminal::VariableList),
        ]
    );
    let inner = tree.children(list)[2];
    assert_eq!(tree.child_labels(inner), [&nt(NonTerminal::Variable)]);
}

#[rstest]
#[case("forall x exists y ( R(x,y) iff not ( x = y ) )")]
#[case("( ( P(x) and P(y) ) or ( a = b ) )")]
#[case("not not not P(x)")]
#[case("exists x ( ( x = a ) and forall y ( R(x,y) implies P(y) ) )")]
fn test_accepts(#[case] formula: &str) {
    let tokens = tokens(formula);
    let tree = parse(&alphabet(), &tokens).unwrap();
    let leaves: Vec<_> = tree.terminals().into_iter().cloned().collect();
    assert_eq!(leaves, tokens);
}

#[rstest]
#[case("forall a P(x)", NonTerminal::Variable, 1)]
#[case("( P(x) not P(y) )", NonTerminal::Connective, 5)]
#[case("( x = P )", NonTerminal::Term, 3)]
#[case("R(a,y)", NonTerminal::Variable, 2)]
#[case("x", NonTerminal::Formula, 0)]
#[case("( P(x) and P(y) and", NonTerminal::Formula, 10)]
fn test_rejects_unexpected_token(
    #[case] formula: &str,
    #[case] nonterminal: NonTerminal,
    #[case] position: usize,
) {
    let err = parse(&alphabet(), &tokens(formula)).unwrap_err();
    match err {
        ParseError::Expected {
            nonterminal: n,
            position: p,
            ..
        } => {
            assert_eq!(n, nonterminal);
            assert_eq!(p, position);
        }
        other => panic!("expected ParseError::Expected, got {other:?}"),
    }
}

#[test]
fn test_rejects_premature_end() {
    let err = parse(&alphabet(), &tokens("forall x")).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedEnd {
            nonterminal: NonTerminal::Formula,
            ..
        }
    ));
}

#[test]
fn test_rejects_trailing_input() {
    let err = parse(&alphabet(), &tokens("P(x) P(y)")).unwrap_err();
    assert_eq!(
        err,
        ParseError::TrailingInput {
            found: "P".into(),
            position: 4,
        }
    );
}

#[test]
fn test_rejects_empty_formula() {
    assert_eq!(parse(&alphabet(), &[]), Err(ParseError::Empty));
}

#[test]
fn test_nesting_limit() {
    let formula = "not ".repeat(10) + "P(x)";
    let tokens = tokens(&formula);
    assert!(parse_with_limit(&alphabet(), &tokens, 11).is_ok());
    assert_eq!(
        parse_with_limit(&alphabet(), &tokens, 10),
        Err(ParseError::TooDeep {
            limit: 10,
            position: 10,
        })
    );
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let formula = "not ".repeat(100_000) + "P(x)";
    let err = parse(&alphabet(), &tokens(&formula)).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: 256, .. }));
}

#[test]
fn test_height_counts_nested_variable_lists() {
    let tree = parse_ok("R(x,y)");
    // F > P > J > J > V > y
    assert_eq!(tree.height(), 5);
}
