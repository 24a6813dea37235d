//! Shared fixture tooling for completion tests.
//!
//! Expected-output cases live in TOML files with `[[case]]` tables so new
//! cases can be added without touching test code. With the `completion`
//! feature the crate also provides the checker that runs a case against the
//! driver and its output guarantees.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct CompletionCase {
    pub name: String,
    pub input: String,
    pub expected: String,
    #[serde(default)]
    pub covers: String,
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    case: Vec<CompletionCase>,
}

/// Parse a TOML fixture document containing `[[case]]` tables.
pub fn parse_cases(toml_text: &str) -> Result<Vec<CompletionCase>, toml::de::Error> {
    toml::from_str::<CaseFile>(toml_text).map(|file| file.case)
}

/// The fixture corpus bundled with this crate.
pub fn bundled_cases() -> Vec<CompletionCase> {
    parse_cases(include_str!("../fixtures/completion_cases.toml"))
        .expect("bundled fixture file parses")
}

/// Run one case against the driver: exact output plus the prefix property.
/// Invariants that do not hold for every case (balance of the result,
/// fixpoint behavior) are covered by the golden corpus instead.
#[cfg(feature = "completion")]
pub fn verify_case(case: &CompletionCase) -> Result<(), String> {
    let output = markup::complete(&case.input);
    if output != case.expected {
        return Err(format!(
            "case {}: expected {:?}, got {:?} (covers: {})",
            case.name, case.expected, output, case.covers
        ));
    }
    if !output.starts_with(&case.input) {
        return Err(format!(
            "case {}: input {:?} is not a prefix of output {:?}",
            case.name, case.input, output
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_cases;

    #[test]
    fn parses_case_tables() {
        let cases = parse_cases(
            r#"
[[case]]
name = "one"
input = "<a>"
expected = "<a></a>"
covers = "smoke"

[[case]]
name = "two"
input = ""
expected = ""
"#,
        )
        .expect("fixture text parses");
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "one");
        assert_eq!(cases[1].covers, "");
    }

    #[test]
    fn bundled_file_is_well_formed() {
        let cases = super::bundled_cases();
        assert!(!cases.is_empty());
        for case in &cases {
            assert!(!case.name.is_empty(), "every case needs a name");
        }
    }
}
