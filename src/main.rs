use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use shakesearch::{Config, Searcher};

#[derive(Parser)]
#[command(name = "shakesearch", about = "Full-text search over a single text corpus")]
struct Cli {
    /// Config file (defaults to ./shakesearch.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Corpus file to load and index.
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Port to listen on. Overrides config and $PORT.
    #[arg(long)]
    port: Option<u16>,

    /// Directory of static front-end assets.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Log at debug level regardless of RUST_LOG.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(corpus) = cli.corpus {
        config.corpus.path = corpus;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(static_dir) = cli.static_dir {
        config.server.static_dir = static_dir;
    }

    tracing::info!(
        corpus = %config.corpus.path.display(),
        host = %config.server.host,
        port = config.server.port,
        static_dir = %config.server.static_dir.display(),
        "starting shakesearch"
    );

    // No corpus, no service.
    let searcher = Searcher::load(&config.corpus.path, config.search.clone())
        .context("loading corpus")?;

    shakesearch::serve(&config.server, Arc::new(searcher)).await
}
