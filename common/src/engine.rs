//! Single-machine MapReduce: parallel map, keyed shuffle, per-key reduce.

use std::{collections::BTreeMap, sync::Arc};

use anyhow::Context;
use itertools::Itertools;
use tokio::{sync::Semaphore, task::JoinSet};
use tracing::{debug, info};

use crate::{App, Chunk, KeyValue};

/// Runs `app` over `chunks` and returns the reduce output in key order.
///
/// At most `parallelism` map calls run at once. Reduce starts only after
/// every map call has finished.
pub async fn run<A>(
    app: Arc<A>,
    chunks: Vec<Chunk>,
    parallelism: usize,
) -> anyhow::Result<Vec<KeyValue>>
where
    A: App + 'static,
{
    info!(app = app.name(), chunks = chunks.len(), parallelism, "map phase");
    let intermediate = map_phase(&app, chunks, parallelism).await?;

    let groups = shuffle(intermediate, app.required_keys());
    info!(app = app.name(), keys = groups.len(), "reduce phase");

    let mut output = Vec::with_capacity(groups.len());
    for (key, values) in groups {
        debug!(%key, values = values.len(), "reduce");
        let kv = app
            .reduce(&key, values)
            .with_context(|| format!("reduce failed for key {key:?}"))?;
        output.push(kv);
    }
    Ok(output)
}

async fn map_phase<A>(
    app: &Arc<A>,
    chunks: Vec<Chunk>,
    parallelism: usize,
) -> anyhow::Result<Vec<KeyValue>>
where
    A: App + 'static,
{
    let permits = Arc::new(Semaphore::new(parallelism.max(1)));
    let mut tasks = JoinSet::new();

    for (index, chunk) in chunks.into_iter().enumerate() {
        // blocks dispatch until a running map frees its slot
        let permit = Arc::clone(&permits).acquire_owned().await?;
        let app = Arc::clone(app);
        tasks.spawn_blocking(move || {
            let _permit = permit;
            let kvs = app.map(&chunk.source, &chunk.contents);
            debug!(index, source = %chunk.source, emitted = kvs.len(), "map done");
            kvs
        });
    }

    let mut intermediate = vec![];
    while let Some(kvs) = tasks.join_next().await {
        intermediate.extend(kvs.context("map task panicked")?);
    }
    Ok(intermediate)
}

fn shuffle(
    mut intermediate: Vec<KeyValue>,
    required_keys: Vec<String>,
) -> BTreeMap<String, Vec<String>> {
    intermediate.sort_by(|a, b| a.key.cmp(&b.key));

    let mut groups: BTreeMap<String, Vec<String>> = intermediate
        .into_iter()
        .group_by(|kv| kv.key.clone())
        .into_iter()
        .map(|(key, kvs)| (key, kvs.map(|kv| kv.value).collect_vec()))
        .collect();

    for key in required_keys {
        groups.entry(key).or_default();
    }
    groups
}
