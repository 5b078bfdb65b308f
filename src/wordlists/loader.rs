//! Dictionary filtering
//!
//! Turns a dictionary file into the ordered list of candidate words for a
//! session. Input order is kept and duplicates are not removed.

use crate::core::LetterPool;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Dictionary used when none is given on the command line
pub const DEFAULT_DICTIONARY_PATH: &str = "/local/courses/csse2310/etc/words";

/// Load and filter a dictionary file
///
/// The file is opened, read to the end and closed before this returns, on
/// success and on error alike.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use unscramble::core::LetterPool;
/// use unscramble::wordlists::filter_dictionary;
///
/// let pool = LetterPool::new("CATDOG").unwrap();
/// let words = filter_dictionary("/usr/share/dict/words", &pool, 3).unwrap();
/// println!("{} playable words", words.len());
/// ```
pub fn filter_dictionary<P: AsRef<Path>>(
    path: P,
    pool: &LetterPool,
    min_length: usize,
) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = filter_lines(BufReader::new(file), pool, min_length)?;
    debug!(
        "Loaded {} candidate words from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Filter dictionary lines from any buffered reader
///
/// Lines are read as raw bytes, so a dictionary that is not valid UTF-8 is
/// still usable; such lines just never match.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn filter_lines<R: BufRead>(
    mut reader: R,
    pool: &LetterPool,
    min_length: usize,
) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if let Some(word) = accept_line(&line, pool, min_length) {
            words.push(word);
        }
    }

    Ok(words)
}

/// Decide whether one raw dictionary line is a candidate, normalising it if so
fn accept_line(raw: &[u8], pool: &LetterPool, min_length: usize) -> Option<String> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    // Length is measured before the terminator is stripped
    let long_enough = raw.len() > min_length;
    let word = raw.strip_suffix(b"\n").unwrap_or(raw);

    if word.contains(&b'\'') || !long_enough || !pool.can_form(word) {
        return None;
    }

    Some(word.iter().map(|&b| char::from(b.to_ascii_uppercase())).collect())
}
