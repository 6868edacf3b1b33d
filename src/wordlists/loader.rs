//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::TargetWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid target words, skipping blank lines and any entry
/// that is not made of ASCII letters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use assembly_endgame::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<TargetWord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<TargetWord> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            TargetWord::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    tracing::info!(
        path = %path.display(),
        loaded = words.len(),
        skipped,
        "loaded word list"
    );

    Ok(words)
}

/// Convert embedded string slice to a target word vector
///
/// # Examples
/// ```
/// use assembly_endgame::wordlists::loader::words_from_slice;
/// use assembly_endgame::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<TargetWord> {
    slice
        .iter()
        .filter_map(|&s| TargetWord::new(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["react", "python", "ruby"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "react");
        assert_eq!(words[1].text(), "python");
        assert_eq!(words[2].text(), "ruby");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["react", "node.js", "", "c++", "Go"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "react");
        assert_eq!(words[1].text(), "go");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kettle\n\n  Rust  \nx86-64\nzig").unwrap();

        let words = load_from_file(file.path()).unwrap();

        let texts: Vec<&str> = words.iter().map(TargetWord::text).collect();
        assert_eq!(texts, ["kettle", "rust", "zig"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
