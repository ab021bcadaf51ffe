use std::sync::Arc;

use app_longest::LongestWord;
use common::{engine, input::split_chunks, Chunk, KeyValue};
use itertools::Itertools;

async fn run(texts: &[&str]) -> anyhow::Result<KeyValue> {
    let chunks = texts.iter().map(|t| Chunk::new("corpus", *t)).collect();
    let mut output = engine::run(Arc::new(LongestWord), chunks, 4).await?;
    assert_eq!(output.len(), 1, "expected a single report: {output:?}");
    Ok(output.remove(0))
}

fn report(length: usize, words: &str) -> KeyValue {
    KeyValue::new(format!("Longest Word(s) with length {length}"), words)
}

#[tokio::test]
async fn tie_in_one_chunk() -> anyhow::Result<()> {
    assert_eq!(run(&["the quick brown fox"]).await?, report(5, "brown, quick"));
    Ok(())
}

#[tokio::test]
async fn longest_chunk_wins() -> anyhow::Result<()> {
    assert_eq!(run(&["cat dog", "elephant ant"]).await?, report(8, "elephant"));
    Ok(())
}

#[tokio::test]
async fn punctuation_only_separators() -> anyhow::Result<()> {
    assert_eq!(run(&["a! b? c."]).await?, report(1, "a, b, c"));
    Ok(())
}

#[tokio::test]
async fn empty_corpus() -> anyhow::Result<()> {
    assert_eq!(run(&[]).await?, report(0, ""));
    assert_eq!(run(&["", "42", "..."]).await?, report(0, ""));
    Ok(())
}

#[tokio::test]
async fn ties_across_chunks_are_unioned() -> anyhow::Result<()> {
    let texts = ["Zebra, camel", "ZEBRA tiger", "ox", "mouse lemur"];
    assert_eq!(
        run(&texts).await?,
        report(5, "camel, lemur, mouse, tiger, zebra")
    );
    Ok(())
}

#[tokio::test]
async fn chunk_order_does_not_matter() -> anyhow::Result<()> {
    let texts = ["cat dog", "elephant ant", "aardvark", "bee", "Elephant!"];
    let expected = run(&texts).await?;
    for order in texts.iter().copied().permutations(texts.len()) {
        assert_eq!(run(&order).await?, expected, "{order:?}");
    }
    assert_eq!(expected, report(8, "aardvark, elephant"));
    Ok(())
}

#[tokio::test]
async fn file_chunking_does_not_change_the_answer() -> anyhow::Result<()> {
    let corpus = b"It was the best of times,\nit was the worst of times,\n\
                   it was the age of wisdom,\nit was the age of foolishness,\n\
                   it was the epoch of belief,\nit was the epoch of incredulity";
    let mut answers = vec![];
    for lines_per_chunk in [1, 2, 3, 100] {
        let chunks = split_chunks("dickens.txt", corpus, lines_per_chunk);
        answers.push(engine::run(Arc::new(LongestWord), chunks, 2).await?);
    }
    assert!(answers.iter().all_equal());
    assert_eq!(answers[0], vec![report(11, "foolishness, incredulity")]);
    Ok(())
}
