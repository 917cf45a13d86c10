//! Plain-text scenario file parser
//!
//! Format (UTF-8): one `key = value` per line, whitespace around `=`
//! trimmed; a line equal to `---` separates records; blank lines and lines
//! starting with `#` are ignored. A record is whatever accumulated since the
//! previous separator (or start of file); the last record does not need a
//! trailing separator.

use std::fs;
use std::path::Path;

use crate::common::{Error, Result};

use super::record::Scenario;

/// Load scenarios from a file, preserving file order.
///
/// An unreadable path is fatal, pre-run; the caller aborts before any
/// scenario executes.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let content = fs::read_to_string(path).map_err(|source| Error::ScenarioFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_scenarios(&content))
}

/// Parse scenario text into ordered records.
pub fn parse_scenarios(input: &str) -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    let mut current = Scenario::new();

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line == "---" {
            // A bare separator with nothing accumulated is a no-op.
            if !current.is_empty() {
                scenarios.push(std::mem::take(&mut current));
            }
            continue;
        }

        // Split at the first '=' only; values may contain '='.
        if let Some((key, value)) = line.split_once('=') {
            current.insert(key.trim(), value.trim());
        } else {
            tracing::debug!(line, "ignoring line without key=value form");
        }
    }

    // Handles a file not terminated by a trailing separator.
    if !current.is_empty() {
        scenarios.push(current);
    }

    scenarios
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_two_records() {
        let input = "\
# comment
nome=Ana Silva
email=ana@example.com
---
nome=Bruno Costa
email=bruno@example.com
";
        let scenarios = parse_scenarios(input);
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].get("nome"), Some("Ana Silva"));
        assert_eq!(scenarios[0].get("email"), Some("ana@example.com"));
        assert_eq!(scenarios[1].get("nome"), Some("Bruno Costa"));
        assert_eq!(scenarios[1].get("email"), Some("bruno@example.com"));
    }

    #[test]
    fn record_count_matches_non_empty_groupings() {
        let input = "---\n---\na=1\n---\n---\nb=2\n";
        let scenarios = parse_scenarios(input);
        assert_eq!(scenarios.len(), 2);
    }

    #[test]
    fn trailing_record_without_separator_is_kept() {
        let scenarios = parse_scenarios("a=1\n---\nb=2");
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[1].get("b"), Some("2"));
    }

    #[test]
    fn whitespace_around_key_and_value_is_trimmed() {
        let scenarios = parse_scenarios("  nome  =  Ana Silva  \n");
        assert_eq!(scenarios[0].get("nome"), Some("Ana Silva"));
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let scenarios = parse_scenarios("senha = a=b=c\n");
        assert_eq!(scenarios[0].get("senha"), Some("a=b=c"));
    }

    #[test]
    fn junk_lines_do_not_alter_the_record() {
        let input = "nome=Ana\nthis line has no assignment\nemail=a@b.c\n";
        let scenarios = parse_scenarios(input);
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].len(), 2);
    }

    #[test]
    fn duplicate_key_within_record_keeps_last_value() {
        let scenarios = parse_scenarios("nome=Ana\nnome=Beatriz\n");
        assert_eq!(scenarios[0].get("nome"), Some("Beatriz"));
        assert_eq!(scenarios[0].len(), 1);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_scenarios("").is_empty());
        assert!(parse_scenarios("# only comments\n\n---\n").is_empty());
    }

    #[test]
    fn reserializing_and_reparsing_yields_same_records() {
        let input = "\
# test data
nome=Ana Silva
email = ana@example.com
telefone=11999990000
---
nome=Bruno Costa
email=bruno@example.com
";
        let first = parse_scenarios(input);

        let mut rendered = String::new();
        for scenario in &first {
            rendered.push_str(&scenario.to_string());
            rendered.push_str("---\n");
        }

        let second = parse_scenarios(&rendered);
        assert_eq!(first, second);
    }

    #[test]
    fn load_scenarios_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "nome=Ana\n---\nnome=Bruno\n").unwrap();

        let scenarios = load_scenarios(file.path()).unwrap();
        assert_eq!(scenarios.len(), 2);
    }

    #[test]
    fn load_scenarios_fails_for_missing_file() {
        let err = load_scenarios(Path::new("/nonexistent/dados_teste.txt")).unwrap_err();
        assert!(matches!(err, Error::ScenarioFile { .. }));
    }
}
