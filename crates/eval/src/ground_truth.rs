//! Reference ground-state energies.
//!
//! The first line is a header. Every following line describes one instance,
//! in ascending index order, and carries its exact ground energy in the
//! second whitespace-separated field.

use std::io::BufRead;
use std::path::Path;

use crate::error::EvalError;
use crate::input;

/// Loads exact ground energies, indexed by instance id.
pub fn load_ground_truth(path: impl AsRef<Path>) -> Result<Vec<i64>, EvalError> {
    let path = path.as_ref();
    let reader = input::open(path)?;
    let energies = parse_ground_truth(reader, path)?;
    tracing::debug!(path = %path.display(), instances = energies.len(), "loaded ground truth");
    Ok(energies)
}

/// `path` is only used to label errors.
pub fn parse_ground_truth<R: BufRead>(reader: R, path: &Path) -> Result<Vec<i64>, EvalError> {
    let mut energies = Vec::new();
    for line in input::lines(reader, path).skip(1) {
        let (lineno, line) = line?;
        let field = input::fields(&line).nth(1).ok_or_else(|| {
            EvalError::parse(path, lineno, "expected at least two fields")
        })?;
        energies.push(input::parse_i64(field, path, lineno, "ground energy")?);
    }
    Ok(energies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<i64>, EvalError> {
        parse_ground_truth(Cursor::new(text), Path::new("gs.txt"))
    }

    #[test]
    fn skips_header_and_reads_second_field() {
        let energies = parse("instance energy\n0 -10\n1 -20\n2 -198 extra\n").unwrap();
        assert_eq!(energies, vec![-10, -20, -198]);
    }

    #[test]
    fn header_only_is_empty() {
        assert!(parse("header\n").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn header_is_never_parsed() {
        // header has a non-integer second field
        let energies = parse("id E_ground\n0 -4\n").unwrap();
        assert_eq!(energies, vec![-4]);
    }

    #[test]
    fn non_utf8_header_and_trailing_fields_are_ignored() {
        let text = b"instance \xE9nergie\n0 -10 caf\xE9\n1 -20\n";
        let energies = parse_ground_truth(Cursor::new(&text[..]), Path::new("gs.txt")).unwrap();
        assert_eq!(energies, vec![-10, -20]);
    }

    #[test]
    fn short_line_reports_its_line_number() {
        let err = parse("header\n0 -10\n1\n").unwrap_err();
        match err {
            EvalError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_energy_is_rejected() {
        let err = parse("header\n0 -10.5\n").unwrap_err();
        match err {
            EvalError::Parse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("-10.5"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
