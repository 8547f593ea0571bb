use std::path::Path;

use log::debug;

use super::model::{Sample, Table};
use crate::error::{EvalError, Result};

// ---------------------------------------------------------------------------
// Table file loader
// ---------------------------------------------------------------------------

/// Load a table from a `.dat` file.
///
/// The file is a whitespace-separated token stream, consumed three tokens
/// at a time into `(x, primary, secondary)` samples. Line breaks carry no
/// meaning beyond whitespace. A trailing group of fewer than three tokens
/// is ignored. The decimal separator may be `,` or `.`.
///
/// No validation beyond numeric parsing is performed; in particular the
/// non-decreasing `x` invariant is the caller's responsibility.
pub fn load_table(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).map_err(|_| EvalError::TableUnavailable {
        file: path.display().to_string(),
    })?;

    let mut samples = Vec::new();
    let mut tokens = text.split_whitespace();

    while let Some(xs) = tokens.next() {
        let (Some(ts), Some(us)) = (tokens.next(), tokens.next()) else {
            break; // incomplete trailing row
        };
        samples.push(Sample {
            x: parse_number(xs, path)?,
            primary: parse_number(ts, path)?,
            secondary: parse_number(us, path)?,
        });
    }

    debug!("loaded {} samples from {}", samples.len(), path.display());
    Ok(Table { samples })
}

/// Parse one numeric token, accepting `,` as decimal separator.
fn parse_number(token: &str, path: &Path) -> Result<f64> {
    token
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| EvalError::NumericParse {
            file: path.display().to_string(),
            token: token.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_table(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_whitespace_triples() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "t.dat", "0.0 1.0 2.0\n0.5 1.5 2.5\n");
        let table = load_table(&path).unwrap();
        assert_eq!(table.samples.len(), 2);
        assert_eq!(table.samples[1].x, 0.5);
        assert_eq!(table.samples[1].primary, 1.5);
        assert_eq!(table.samples[1].secondary, 2.5);
    }

    #[test]
    fn normalizes_comma_decimals() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "t.dat", "0,25 1,5 -3,75\n");
        let table = load_table(&path).unwrap();
        assert_eq!(table.samples[0].x, 0.25);
        assert_eq!(table.samples[0].primary, 1.5);
        assert_eq!(table.samples[0].secondary, -3.75);
    }

    #[test]
    fn ignores_trailing_partial_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "t.dat", "0 1 2\n3 4\n");
        let table = load_table(&path).unwrap();
        assert_eq!(table.samples.len(), 1);
    }

    #[test]
    fn missing_file_is_table_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.dat");
        match load_table(&path) {
            Err(EvalError::TableUnavailable { file }) => {
                assert!(file.ends_with("absent.dat"));
            }
            other => panic!("expected TableUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn malformed_token_is_numeric_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(&dir, "t.dat", "0 abc 2\n");
        match load_table(&path) {
            Err(EvalError::NumericParse { token, .. }) => assert_eq!(token, "abc"),
            other => panic!("expected NumericParse, got {other:?}"),
        }
    }
}
