//! Longest-word results and their `<length>:<w1>,<w2>,...` wire form.

use std::{fmt, num::ParseIntError, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::accumulator::TieSet;

/// The longest words of some slice of the corpus.
///
/// The same shape serves as the per-chunk partial result and as the
/// corpus-wide global result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestWords(TieSet<String>);

pub type PartialResult = LongestWords;
pub type GlobalResult = LongestWords;

impl LongestWords {
    /// Builds a result without checking the words against `max_length`.
    pub(crate) fn new(
        max_length: usize,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self(TieSet::from_parts(max_length, words.into_iter().map(Into::into)))
    }

    /// Builds a result whose words are all lowercase ASCII of exactly
    /// `max_length` letters, so that it survives an encode/decode round trip.
    pub fn try_new(
        max_length: usize,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DecodeError> {
        let words = words
            .into_iter()
            .map(|word| {
                let word = word.into();
                if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                    return Err(DecodeError::InvalidWord(word));
                }
                if word.len() != max_length {
                    let actual = word.len();
                    return Err(DecodeError::LengthMismatch {
                        word,
                        actual,
                        declared: max_length,
                    });
                }
                Ok(word)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() && max_length > 0 {
            return Err(DecodeError::MissingWords(max_length));
        }
        Ok(Self::new(max_length, words))
    }

    pub fn max_length(&self) -> usize {
        self.0.max()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.items().iter().map(String::as_str)
    }

    pub fn absorb(&mut self, other: LongestWords) {
        self.0.absorb(other.0);
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Left half of the report line.
    pub fn report_key(&self) -> String {
        format!("Longest Word(s) with length {}", self.max_length())
    }

    /// Right half of the report line, e.g. `cat, dog`.
    pub fn report_value(&self) -> String {
        self.words().join(", ")
    }
}

impl fmt::Display for LongestWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.max_length(), self.words().join(","))
    }
}

/// A partial record that does not have the `<length>:<words>` shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("record {0:?} has no ':' separator")]
    MissingSeparator(String),

    #[error("invalid length {value:?}")]
    InvalidLength {
        value: String,
        #[source]
        source: Option<ParseIntError>,
    },

    #[error("record declares length {0} but carries no words")]
    MissingWords(usize),

    #[error("word {0:?} is not lowercase alphabetic")]
    InvalidWord(String),

    #[error("word {word:?} has length {actual}, record declares {declared}")]
    LengthMismatch {
        word: String,
        actual: usize,
        declared: usize,
    },
}

impl FromStr for LongestWords {
    type Err = DecodeError;

    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let (length, list) = record
            .split_once(':')
            .ok_or_else(|| DecodeError::MissingSeparator(record.to_string()))?;

        if length.is_empty() || !length.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::InvalidLength {
                value: length.to_string(),
                source: None,
            });
        }
        let declared: usize = length.parse().map_err(|e| DecodeError::InvalidLength {
            value: length.to_string(),
            source: Some(e),
        })?;

        if list.is_empty() {
            return Self::try_new(declared, std::iter::empty::<String>());
        }
        Self::try_new(declared, list.split(','))
    }
}
