//! Per-instance solver output.
//!
//! Lines starting with `#` are comments. Every other line is one repetition,
//! whose first whitespace-separated field is the achieved energy (the spin
//! configuration that follows it is ignored).

use std::io::BufRead;
use std::path::Path;

use spinbench_shared::result::{RunHeader, RunResult};

use crate::error::EvalError;
use crate::input;

const COMMENT_MARKER: u8 = b'#';

pub fn load_run_result(path: impl AsRef<Path>) -> Result<RunResult, EvalError> {
    let path = path.as_ref();
    let reader = input::open(path)?;
    let result = parse_run_result(reader, path)?;

    if let Some(announced) = result.header.as_ref().and_then(|h| h.repetitions) {
        if announced != result.len() as u64 {
            tracing::warn!(
                path = %path.display(),
                announced,
                found = result.len(),
                "result file header disagrees with number of repetitions"
            );
        }
    }
    Ok(result)
}

/// `path` is only used to label errors.
pub fn parse_run_result<R: BufRead>(reader: R, path: &Path) -> Result<RunResult, EvalError> {
    let mut energies = Vec::new();
    let mut header = None;
    let mut seen_comment = false;

    for line in input::lines(reader, path) {
        let (lineno, line) = line?;

        if let Some(comment) = line.strip_prefix(&[COMMENT_MARKER]) {
            if !seen_comment {
                seen_comment = true;
                header = parse_header(&String::from_utf8_lossy(comment));
            }
            continue;
        }

        let field = input::fields(&line)
            .next()
            .ok_or_else(|| EvalError::parse(path, lineno, "missing energy field"))?;
        energies.push(input::parse_i64(field, path, lineno, "energy")?);
    }

    Ok(RunResult { energies, header })
}

/// Reads `key=value` pairs such as `infile=a.lat Ns=10000 beta0=0.1 beta1=3.0 num_rep=100`.
/// Returns `None` when no known key is present.
fn parse_header(comment: &str) -> Option<RunHeader> {
    let mut header = RunHeader::default();
    let mut known = false;

    for token in comment.split_whitespace() {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        match key {
            "infile" => header.infile = Some(value.to_string()),
            "Ns" => header.steps = value.parse().ok(),
            "beta0" => header.beta0 = value.parse().ok(),
            "beta1" => header.beta1 = value.parse().ok(),
            "num_rep" => header.repetitions = value.parse().ok(),
            _ => continue,
        }
        known = true;
    }

    known.then_some(header)
}
