// src/aliases.rs

//! Alias list loading.
//!
//! The alias file is line-oriented text: one hostname alias per line.
//! Surrounding whitespace is trimmed, blank lines are skipped, and lines
//! starting with `#` are treated as comments. Order is preserved and
//! duplicates are kept as written.

use crate::error::HeraldError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads aliases from a line-oriented source.
///
/// # Arguments
/// * `reader` - Buffered source of alias lines.
///
/// # Returns
/// The trimmed, non-blank, non-comment lines in source order.
///
/// # Errors
/// Returns any I/O error raised while reading lines.
pub fn read_aliases<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut aliases = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        aliases.push(trimmed.to_string());
    }
    Ok(aliases)
}

/// Loads the alias list from `path`.
///
/// The file handle is scoped to this call and released on every exit path,
/// including a read error partway through.
///
/// # Errors
/// Returns [`HeraldError::AliasFile`] naming `path` when the file is missing,
/// unreadable, or fails mid-read.
pub fn load_aliases(path: &Path) -> Result<Vec<String>, HeraldError> {
    let wrap = |source: io::Error| HeraldError::AliasFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(wrap)?;
    let aliases = read_aliases(BufReader::new(file)).map_err(wrap)?;
    debug!("Loaded {} aliases from {}", aliases.len(), path.display());
    Ok(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    #[test]
    fn trims_and_skips_blank_and_comment_lines() {
        let input = "host1\n\nhost2 \n#comment\nhost3";
        let aliases = read_aliases(Cursor::new(input)).unwrap();
        assert_eq!(aliases, vec!["host1", "host2", "host3"]);
    }

    #[test]
    fn whitespace_only_lines_are_skipped() {
        let input = "  \n\t\nalpha.local\n   \n";
        let aliases = read_aliases(Cursor::new(input)).unwrap();
        assert_eq!(aliases, vec!["alpha.local"]);
    }

    #[test]
    fn comment_marker_after_trimming_is_skipped() {
        let input = "   # indented comment\nbeta.local";
        let aliases = read_aliases(Cursor::new(input)).unwrap();
        assert_eq!(aliases, vec!["beta.local"]);
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let input = "b.local\na.local\nb.local\n";
        let aliases = read_aliases(Cursor::new(input)).unwrap();
        assert_eq!(aliases, vec!["b.local", "a.local", "b.local"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let aliases = read_aliases(Cursor::new("")).unwrap();
        assert!(aliases.is_empty());
    }

    #[test]
    fn load_aliases_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "one.local\n# skip\ntwo.local\n").expect("write temp file");
        let aliases = load_aliases(file.path()).unwrap();
        assert_eq!(aliases, vec!["one.local", "two.local"]);
    }

    #[test]
    fn load_aliases_missing_file_names_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("does-not-exist");
        let err = load_aliases(&path).unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }
}
