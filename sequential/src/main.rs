use anyhow::Context;
use app_longest::LongestWord;
use clap::Parser;
use common::{engine, init_logger, input::read_chunks, App};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    sync::Arc,
    thread,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sequential", about = "Longest Word Finder")]
struct Cli {
    /// Report file, `mr-<app>-seq` by default.
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long, default_value_t = 1)]
    lines_per_chunk: usize,
    /// Concurrent map tasks, all cores by default.
    #[arg(short = 'j', long)]
    parallelism: Option<usize>,
    #[arg(long)]
    log_dir: Option<PathBuf>,
    #[arg(required = true)]
    input_files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logger(cli.log_dir.as_deref())?;

    let app = Arc::new(LongestWord);
    let parallelism = cli
        .parallelism
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()));

    let mut chunks = vec![];
    for path in &cli.input_files {
        chunks.extend(read_chunks(path, cli.lines_per_chunk).await?);
    }
    info!(
        files = cli.input_files.len(),
        chunks = chunks.len(),
        "input loaded"
    );

    let output = engine::run(Arc::clone(&app), chunks, parallelism).await?;

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("mr-{}-seq", app.name())));
    let file = File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for kv in &output {
        writeln!(writer, "{}\t{}", kv.key, kv.value)?;
    }
    writer.flush()?;

    info!(output = %path.display(), "job done");
    Ok(())
}
