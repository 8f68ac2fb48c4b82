//! Definition-file fixtures

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Build a definition file with the given sections.
pub fn definition(
    variables: &str,
    constants: &str,
    predicates: &str,
    equality: &str,
    connectives: &str,
    quantifiers: &str,
    formula: &str,
) -> String {
    format!(
        "variables: {variables}\n\
         constants: {constants}\n\
         predicates: {predicates}\n\
         equality: {equality}\n\
         connectives: {connectives}\n\
         quantifiers: {quantifiers}\n\
         formula: {formula}\n"
    )
}

/// The alphabet `x y / a / P[1] / = / and or implies iff not / forall exists`
/// around `formula`.
pub fn with_formula(formula: &str) -> String {
    definition(
        "x y",
        "a",
        "P[1]",
        "=",
        "and or implies iff not",
        "forall exists",
        formula,
    )
}

/// The `with_formula("P(x)")` definition with one section's value replaced.
pub fn with_section(label: &str, value: &str) -> String {
    with_formula("P(x)")
        .lines()
        .map(|line| match line.split_once(':') {
            Some((name, _)) if name == label => format!("{label}: {value}\n"),
            _ => format!("{line}\n"),
        })
        .collect()
}

/// A larger definition using backslash-spelled connectives and a formula
/// that spans several lines.
pub const LATEX_STYLE: &str = "\
variables: w x y z
constants: C D
predicates: P[2] Q[1]
equality: =
connectives: \\land \\lor \\implies \\iff \\neg
quantifiers: \\forall \\exists
formula: \\forall x ( \\exists y ( P(x,y) \\implies \\neg Q(x) )
\\lor \\exists z ( ( (C = z) \\land Q(z) ) \\land \\neg ( x = z ) ) )
";

/// Write `content` to `name` inside a fresh temporary directory.
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}
