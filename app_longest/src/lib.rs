//! Longest word(s) of a corpus as a MapReduce application.
//!
//! Every chunk is reduced locally to its longest words, encoded as
//! `<length>:<w1>,<w2>,...` and emitted under the single key [`GROUPING_KEY`],
//! so one reduce call sees every partial and merges them into the global
//! answer.

use anyhow::Context;
use common::{App, KeyValue};

pub mod accumulator;
pub mod analyzer;
pub mod merger;
pub mod record;

pub use analyzer::{analyze, analyze_bytes};
pub use merger::{merge, merge_records};
pub use record::{DecodeError, GlobalResult, LongestWords, PartialResult};

/// Routes every partial result to the same reduce call.
pub const GROUPING_KEY: &str = "max";

#[derive(Debug, Default, Clone, Copy)]
pub struct LongestWord;

impl App for LongestWord {
    fn name(&self) -> &str {
        "longest"
    }

    fn map(&self, _source: &str, contents: &str) -> Vec<KeyValue> {
        analyze(contents)
            .map(|partial| KeyValue::new(GROUPING_KEY, partial.encode()))
            .into_iter()
            .collect()
    }

    fn reduce(&self, key: &str, values: Vec<String>) -> anyhow::Result<KeyValue> {
        anyhow::ensure!(key == GROUPING_KEY, "unexpected key {key:?}");
        let global = merge_records(&values).context("corrupt partial result")?;
        tracing::info!(
            max_length = global.max_length(),
            partials = values.len(),
            "merged"
        );
        Ok(KeyValue::new(global.report_key(), global.report_value()))
    }

    fn required_keys(&self) -> Vec<String> {
        vec![GROUPING_KEY.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_emits_one_record_per_chunk() {
        let kvs = LongestWord.map("f", "The quick brown fox");
        assert_eq!(kvs, vec![KeyValue::new("max", "5:brown,quick")]);
    }

    #[test]
    fn map_emits_nothing_for_wordless_chunk() {
        assert!(LongestWord.map("f", "1, 2, 3!").is_empty());
    }

    #[test]
    fn reduce_renders_report() -> anyhow::Result<()> {
        let values = vec!["3:cat,dog".to_string(), "2:ox".to_string()];
        let kv = LongestWord.reduce(GROUPING_KEY, values)?;
        assert_eq!(kv, KeyValue::new("Longest Word(s) with length 3", "cat, dog"));
        Ok(())
    }

    #[test]
    fn reduce_of_nothing_is_length_zero() -> anyhow::Result<()> {
        let kv = LongestWord.reduce(GROUPING_KEY, vec![])?;
        assert_eq!(kv, KeyValue::new("Longest Word(s) with length 0", ""));
        Ok(())
    }

    #[test]
    fn reduce_surfaces_corrupt_records() {
        let err = LongestWord
            .reduce(GROUPING_KEY, vec!["3cat".to_string()])
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<DecodeError>(),
            Some(&DecodeError::MissingSeparator("3cat".into()))
        );
    }

    #[test]
    fn reduce_rejects_foreign_keys() {
        assert!(LongestWord.reduce("other", vec![]).is_err());
    }
}
