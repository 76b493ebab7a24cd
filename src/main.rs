use std::error::Error;
use std::sync::mpsc;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use backprop_nn::{data, train::argmax, train_loop, EpochStats, Network, RunSpec};

/// Trains a sigmoid network on one-hot XOR with mini-batch SGD.
#[derive(Parser, Debug)]
#[command(name = "backprop-nn", version, about)]
struct Args {
    /// JSON run configuration; flags below override its fields
    #[arg(short, long)]
    config: Option<String>,

    #[arg(long)]
    epochs: Option<usize>,

    #[arg(long)]
    mini_batch_size: Option<usize>,

    #[arg(long)]
    learning_rate: Option<f64>,

    /// Width of a single hidden layer (replaces the configured architecture)
    #[arg(long)]
    hidden: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Write the per-epoch statistics to this JSON file
    #[arg(long)]
    report: Option<String>,

    /// Write the effective run configuration to this JSON file and exit
    #[arg(long)]
    write_config: Option<String>,

    /// Log per-epoch timing and training details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut spec = match &args.config {
        Some(path) => RunSpec::load_json(path)?,
        None => RunSpec::default(),
    };
    if let Some(epochs) = args.epochs {
        spec.epochs = epochs;
    }
    if let Some(size) = args.mini_batch_size {
        spec.mini_batch_size = size;
    }
    if let Some(rate) = args.learning_rate {
        spec.learning_rate = rate;
    }
    if let Some(hidden) = args.hidden {
        spec.layer_sizes = vec![2, hidden, 2];
    }
    if args.seed.is_some() {
        spec.seed = args.seed;
    }
    spec.validate()?;
    let (input, output) = (spec.layer_sizes[0], spec.layer_sizes[spec.layer_sizes.len() - 1]);
    if (input, output) != (2, 2) {
        return Err(format!("XOR needs 2 inputs and 2 outputs, got {input} and {output}").into());
    }

    if let Some(path) = &args.write_config {
        spec.save_json(path)?;
        info!("wrote run configuration to {path}");
        return Ok(());
    }

    let mut rng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let examples = data::xor();
    let mut network = Network::new(&spec.layer_sizes, &mut rng)?;

    let (tx, rx) = mpsc::channel();
    let config = spec.train_config().with_progress(tx);
    let completed = train_loop(
        &mut network,
        &examples,
        Some(&examples),
        &spec.optimizer()?,
        &config,
        &mut rng,
    )?;
    drop(config);

    let stats: Vec<EpochStats> = rx.iter().collect();
    if let Some(last) = stats.last() {
        info!(
            completed,
            accuracy = last.accuracy().unwrap_or(0.0),
            "training complete"
        );
    }

    if let Some(path) = &args.report {
        let writer = std::io::BufWriter::new(std::fs::File::create(path)?);
        serde_json::to_writer_pretty(writer, &stats)?;
        info!("wrote {} epoch records to {path}", stats.len());
    }

    for example in &examples {
        let output = network.predict(&example.input);
        println!(
            "Input: {:?} -> Output: {:.4?} (class {})",
            example.input,
            output,
            argmax(&output)
        );
    }

    Ok(())
}
