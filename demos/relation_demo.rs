//! Inner-product relation demo
//!
//! Builds fresh random statements and runs them through the folding and
//! batch verifiers. Set `RUST_LOG=debug` to see individual fold rounds.

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use ipa_verifier::{
    AlgebraProvider, BatchStatement, BatchVerifier, Bls12G1, FoldStatement, FoldingVerifier,
    RandomChallenges, VerifierConfig,
};
use rand::thread_rng;
use std::time::Instant;
use tracing::{info, info_span};
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Fold,
    Batch,
    Both,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vector size n; must be a power of two for folding
    #[arg(short = 'n', long, default_value = "1024")]
    size: usize,

    /// Fold iterations, and the number of statements in the batch
    #[arg(short = 'm', long, default_value = "10")]
    iterations: usize,

    /// Public index whose bits form the encoding vector; defaults to n
    #[arg(short = 'i', long)]
    index: Option<u64>,

    #[arg(long, value_enum, default_value = "both")]
    mode: Mode,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();
    ensure!(args.size > 0, "vector size must be positive");
    let index = args.index.unwrap_or(args.size as u64);
    let config = VerifierConfig::default();

    if matches!(args.mode, Mode::Fold | Mode::Both) {
        run_fold(&args, index, &config)?;
    }
    if matches!(args.mode, Mode::Batch | Mode::Both) {
        run_batch(&args, index, &config)?;
    }
    Ok(())
}

fn run_fold(args: &Args, index: u64, config: &VerifierConfig) -> Result<()> {
    let _span = info_span!("fold", n = args.size, iterations = args.iterations).entered();
    let mut rng = thread_rng();
    let mut verifier =
        FoldingVerifier::with_config(config.fold.clone(), RandomChallenges::new(thread_rng()));

    let start = Instant::now();
    let mut accepted = 0;
    for _ in 0..args.iterations {
        let w = Bls12G1::random_element(&mut rng);
        let statement = FoldStatement::<Bls12G1>::random(&mut rng, args.size, index, &w)?;
        if verifier.verify(&statement, &w)? {
            accepted += 1;
        }
    }

    info!(
        accepted,
        total = args.iterations,
        elapsed_us = start.elapsed().as_micros() as u64,
        "fold verification finished"
    );
    Ok(())
}

fn run_batch(args: &Args, index: u64, config: &VerifierConfig) -> Result<()> {
    let _span = info_span!("batch", n = args.size, statements = args.iterations).entered();
    let mut rng = thread_rng();
    let w = Bls12G1::random_element(&mut rng);
    let statements = (0..args.iterations)
        .map(|_| BatchStatement::<Bls12G1>::random(&mut rng, args.size, index, &w))
        .collect::<ipa_verifier::Result<Vec<_>>>()?;

    let mut verifier =
        BatchVerifier::with_config(config.batch.clone(), RandomChallenges::new(thread_rng()));

    let start = Instant::now();
    let accepted = verifier.verify(&statements, &w)?;

    info!(
        accepted,
        elapsed_us = start.elapsed().as_micros() as u64,
        "batch verification finished"
    );
    Ok(())
}
