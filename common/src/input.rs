//! Chunk source: turns input files into independently mappable chunks.

use std::{borrow::Cow, path::Path};

use anyhow::Context;
use itertools::Itertools;
use tracing::{debug, warn};

/// One contiguous slice of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub source: String,
    pub contents: String,
}

impl Chunk {
    pub fn new(source: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            contents: contents.into(),
        }
    }
}

/// Splits raw file contents into chunks of `lines_per_chunk` lines.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected. Chunks only
/// break at line ends, so no word is ever cut in two.
pub fn split_chunks(source: &str, bytes: &[u8], lines_per_chunk: usize) -> Vec<Chunk> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!(source, "input is not valid UTF-8, undecodable bytes replaced");
    }

    let lines = text.lines().chunks(lines_per_chunk.max(1));
    let chunks = (&lines)
        .into_iter()
        .map(|mut group| Chunk::new(source, group.join("\n")))
        .collect_vec();
    debug!(source, chunks = chunks.len(), "split input");
    chunks
}

pub async fn read_chunks(path: &Path, lines_per_chunk: usize) -> anyhow::Result<Vec<Chunk>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(split_chunks(
        &path.to_string_lossy(),
        &bytes,
        lines_per_chunk,
    ))
}
