use tracing::debug;

use crate::record::{DecodeError, GlobalResult, PartialResult};

/// Folds partial results into the corpus-wide longest words.
///
/// Arrival order does not matter. No partials at all gives an empty result
/// of length 0.
pub fn merge(partials: impl IntoIterator<Item = PartialResult>) -> GlobalResult {
    partials
        .into_iter()
        .fold(GlobalResult::default(), |mut global, partial| {
            global.absorb(partial);
            global
        })
}

/// Decodes and merges wire records.
///
/// The first record that fails to decode aborts the merge; skipping it would
/// silently lose its words from the answer.
pub fn merge_records<I>(records: I) -> Result<GlobalResult, DecodeError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut global = GlobalResult::default();
    for record in records {
        let partial: PartialResult = record.as_ref().parse()?;
        if partial.max_length() > global.max_length() {
            debug!(
                from = global.max_length(),
                to = partial.max_length(),
                "new longest length"
            );
        }
        global.absorb(partial);
    }
    Ok(global)
}
