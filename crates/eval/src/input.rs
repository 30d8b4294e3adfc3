//! Byte-level line reading for the text inputs.
//!
//! Only the fields that are actually parsed are decoded as UTF-8, so
//! comment text and trailing spin configurations may hold arbitrary bytes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::EvalError;

/// Opens `path` for buffered reading. The handle is dropped on every exit path of the caller.
pub(crate) fn open(path: &Path) -> Result<BufReader<File>, EvalError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| EvalError::io(path, e))
}

/// Raw lines with the `\n` / `\r\n` terminator removed, paired with their 1-based number.
pub(crate) fn lines<'a, R: BufRead + 'a>(
    reader: R,
    path: &'a Path,
) -> impl Iterator<Item = Result<(usize, Vec<u8>), EvalError>> + 'a {
    reader.split(b'\n').enumerate().map(move |(idx, line)| {
        let mut line = line.map_err(|e| EvalError::io(path, e))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok((idx + 1, line))
    })
}

/// Whitespace-separated fields of a raw line.
pub(crate) fn fields(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|b| b.is_ascii_whitespace())
        .filter(|f| !f.is_empty())
}

/// Parses one field as an integer; `what` names the field in the error.
pub(crate) fn parse_i64(
    field: &[u8],
    path: &Path,
    lineno: usize,
    what: &str,
) -> Result<i64, EvalError> {
    std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            EvalError::parse(
                path,
                lineno,
                format!("invalid {} '{}'", what, String::from_utf8_lossy(field)),
            )
        })
}
