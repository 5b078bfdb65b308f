//! Command-line configuration
//!
//! Parses `[--lett letters] [--min-length len] [--dictionary dictfile]` into an
//! immutable [`Config`]. Syntax problems are usage errors. Semantic checks run
//! in the order the options were given, so the first bad option decides which
//! error is reported.

use crate::core::{LetterError, LetterPool};
use crate::wordlists::DEFAULT_DICTIONARY_PATH;
use clap::{CommandFactory, FromArgMatches, Parser};
use rand::Rng;
use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Shortest allowed `--min-length`
pub const MIN_LENGTH_LOWER: usize = 3;

/// Longest allowed `--min-length`
pub const MIN_LENGTH_UPPER: usize = 6;

/// Minimum guess length when none is given
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Size of the random letter pool when no letters are given
pub const DEFAULT_LETTER_COUNT: usize = 9;

#[derive(Parser, Debug)]
#[command(
    name = "uqunscramble",
    about = "Make as many dictionary words as you can from a set of letters",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Letters to play with (4 to 12, case-insensitive)
    #[arg(long = "lett", value_name = "letters", allow_hyphen_values = true)]
    letters: Option<String>,

    /// Minimum word length, 3 to 6
    #[arg(long = "min-length", value_name = "len", allow_hyphen_values = true)]
    min_length: Option<String>,

    /// Dictionary file, one word per line
    #[arg(long = "dictionary", value_name = "dictfile", allow_hyphen_values = true)]
    dictionary: Option<String>,
}

/// A fatal problem with the command line
///
/// Each variant maps to its own process exit code.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Usage: uqunscramble [--lett letters] [--min-length len] [--dictionary dictfile]")]
    Usage,

    #[error("uqunscramble: dictionary file with name \"{path}\" cannot be opened")]
    DictionaryUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("uqunscramble: too many letters - no more than 12 expected")]
    ExcessiveLetters,

    #[error("uqunscramble: insufficient letters for the given minimum length (4)")]
    InsufficientLetters,

    #[error("uqunscramble: min length value must be between 3 and 6")]
    LengthConstraint,

    #[error("uqunscramble: invalid letters given")]
    InvalidLetters,
}

impl ConfigError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => 2,
            Self::DictionaryUnreadable { .. } => 5,
            Self::ExcessiveLetters => 7,
            Self::InsufficientLetters => 8,
            Self::LengthConstraint => 19,
            Self::InvalidLetters => 20,
        }
    }
}

impl From<LetterError> for ConfigError {
    fn from(err: LetterError) -> Self {
        match err {
            LetterError::NonAlphabetic => Self::InvalidLetters,
            LetterError::TooFew(_) => Self::InsufficientLetters,
            LetterError::TooMany(_) => Self::ExcessiveLetters,
        }
    }
}

/// Validated settings for one game
#[derive(Debug, Clone)]
pub struct Config {
    pub pool: LetterPool,
    pub min_length: usize,
    pub dictionary: PathBuf,
}

/// The value-carrying options, by clap argument id
#[derive(Debug, Clone, Copy)]
enum Flag {
    Letters,
    MinLength,
    Dictionary,
}

impl Flag {
    const ALL: [Self; 3] = [Self::Letters, Self::MinLength, Self::Dictionary];

    /// Spelling on the command line
    const fn long(self) -> &'static str {
        match self {
            Self::Letters => "--lett",
            Self::MinLength => "--min-length",
            Self::Dictionary => "--dictionary",
        }
    }

    const fn id(self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::MinLength => "min_length",
            Self::Dictionary => "dictionary",
        }
    }
}

impl Config {
    /// Resolve a configuration from the process arguments
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found, see [`Config::from_args`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_args(std::env::args_os(), &mut rand::rng())
    }

    /// Resolve a configuration from an argument list (program name first)
    ///
    /// `rng` is only used when no letters are given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Usage` for unknown, repeated, `=`-joined or
    /// value-less options, otherwise the first semantic error in command-line
    /// order. The default dictionary is checked last, only when no
    /// `--dictionary` was given.
    ///
    /// # Examples
    /// ```
    /// use unscramble::config::Config;
    ///
    /// let dict = std::env::temp_dir().join("unscramble-doc-words.txt");
    /// std::fs::write(&dict, "cat\n").unwrap();
    ///
    /// let args = ["uqunscramble", "--lett", "catdog", "--dictionary", dict.to_str().unwrap()];
    /// let config = Config::from_args(args, &mut rand::rng()).unwrap();
    /// assert_eq!(config.pool.letters(), "catdog");
    /// assert_eq!(config.min_length, 4);
    ///
    /// let err = Config::from_args(["uqunscramble", "--lett"], &mut rand::rng()).unwrap_err();
    /// assert_eq!(err.exit_code(), 2);
    /// ```
    pub fn from_args<I, T, R>(args: I, rng: &mut R) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
        R: Rng,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        check_shape(&args)?;

        let matches = Cli::command()
            .try_get_matches_from(args)
            .map_err(|_| ConfigError::Usage)?;
        let mut parsed = Cli::from_arg_matches(&matches).map_err(|_| ConfigError::Usage)?;

        let mut given: Vec<(usize, Flag)> = Flag::ALL
            .into_iter()
            .filter_map(|opt| matches.index_of(opt.id()).map(|index| (index, opt)))
            .collect();
        given.sort_by_key(|&(index, _)| index);

        let mut pool = None;
        let mut min_length = DEFAULT_MIN_LENGTH;
        let mut dictionary = None;

        for (_, opt) in given {
            match opt {
                Flag::Letters => {
                    let letters = parsed.letters.take().unwrap_or_default();
                    pool = Some(LetterPool::new(letters)?);
                }
                Flag::MinLength => {
                    let value = parsed.min_length.take().unwrap_or_default();
                    min_length = parse_min_length(&value)?;
                }
                Flag::Dictionary => {
                    let path = parsed.dictionary.take().unwrap_or_default();
                    dictionary = Some(readable_dictionary(path)?);
                }
            }
        }

        let dictionary = match dictionary {
            Some(path) => path,
            None => readable_dictionary(DEFAULT_DICTIONARY_PATH.to_string())?,
        };

        let pool = pool.unwrap_or_else(|| LetterPool::random(rng, DEFAULT_LETTER_COUNT));

        Ok(Self {
            pool,
            min_length,
            dictionary,
        })
    }
}

/// Parse a `--min-length` value
///
/// Anything but ASCII digits is a usage error. An empty value reads as zero,
/// which is then out of range.
fn parse_min_length(value: &str) -> Result<usize, ConfigError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::Usage);
    }

    let length = if value.is_empty() {
        0
    } else {
        value.parse::<usize>().unwrap_or(usize::MAX)
    };

    if (MIN_LENGTH_LOWER..=MIN_LENGTH_UPPER).contains(&length) {
        Ok(length)
    } else {
        Err(ConfigError::LengthConstraint)
    }
}

/// Check the raw argument list has the form `(option value)*`
///
/// Each option must be spelled exactly as one of the three known names and be
/// followed by a separate value, so `--`, `--lett=abcd` and a trailing option
/// with no value are all rejected here. Repeats are left to clap.
fn check_shape(args: &[OsString]) -> Result<(), ConfigError> {
    let options = args.get(1..).unwrap_or_default();
    if options.len() % 2 == 1 || options.len() > 2 * Flag::ALL.len() {
        return Err(ConfigError::Usage);
    }

    for pair in options.chunks(2) {
        let name = pair[0].to_str();
        if !Flag::ALL.iter().any(|flag| name == Some(flag.long())) {
            return Err(ConfigError::Usage);
        }
    }
    Ok(())
}

/// Turn a dictionary path into a `PathBuf` once it is known to be readable
fn readable_dictionary(path: String) -> Result<PathBuf, ConfigError> {
    match check_readable(Path::new(&path)) {
        Ok(()) => Ok(PathBuf::from(path)),
        Err(source) => Err(ConfigError::DictionaryUnreadable { path, source }),
    }
}

/// Confirm a dictionary can be opened for reading, closing it again straight away
fn check_readable(path: &Path) -> io::Result<()> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "dictionary path is a directory",
        ));
    }
    Ok(())
}
