use std::borrow::Cow;

use crate::{accumulator::TieSet, record::PartialResult};

/// Lowercases ASCII letters and turns every other non-whitespace character
/// into a space.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else if c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Finds the longest words of a single chunk.
///
/// Returns `None` when the chunk has no alphabetic word at all.
pub fn analyze(chunk: &str) -> Option<PartialResult> {
    let normalized = normalize(chunk);
    let mut longest = TieSet::new();
    for word in normalized.split_whitespace() {
        longest.offer(word);
    }

    let (max, words) = longest.into_parts();
    (max > 0).then(|| PartialResult::new(max, words))
}

/// Like [`analyze`], for chunks that may not be valid UTF-8.
pub fn analyze_bytes(chunk: &[u8]) -> Option<PartialResult> {
    match String::from_utf8_lossy(chunk) {
        Cow::Borrowed(text) => analyze(text),
        Cow::Owned(text) => {
            tracing::debug!("chunk is not valid UTF-8, decoding lossily");
            analyze(&text)
        }
    }
}
