//! review-sentiment: a binary sentiment classifier for IMDB movie reviews.
//!
//! `train` fits an embedding + mean-pooling model on aclImdb and writes the
//! tokenizer, checkpoints and metrics to the output directory. `predict`
//! reloads them to score new text.
//!
//! Log verbosity follows RUST_LOG; this crate logs at info unless told otherwise.
#![recursion_limit = "256"]

mod application;
mod cli;
mod data;
mod domain;
mod infra;
mod ml;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "review_sentiment=info";

fn main() -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cli::Cli::parse().run()
}
