use clap::Parser;
use ltp_cli::{Config, ImageListDataset, ListDataset, LtpExtractor, ThresholdMode};
use ltp_core::init_thread_pool;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Extract local ternary pattern codes from grayscale images
#[derive(Parser, Debug)]
#[command(name = "ltp", version, about)]
struct Args {
    /// Image files or directories to process
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Configuration file (.json or .toml)
    #[arg(short, long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Named preset: compact, extended or wide
    #[arg(short, long)]
    preset: Option<String>,

    /// Sampling circle radius
    #[arg(short, long)]
    radius: Option<f32>,

    /// Number of samples on the circle (2-31)
    #[arg(short, long)]
    samples: Option<usize>,

    /// Decision threshold
    #[arg(short, long, allow_negative_numbers = true)]
    threshold: Option<f32>,

    /// Treat a difference equal to the threshold as brighter only
    #[arg(long)]
    exclusive: bool,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Compute on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Gaussian pre-blur sigma
    #[arg(long)]
    blur: Option<f32>,

    /// Scale intensities to [0, 1] before extraction
    #[arg(long)]
    normalize: bool,

    /// Descend into subdirectories
    #[arg(long)]
    recursive: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn resolve_config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = match (&self.config, &self.preset) {
            (Some(path), _) => Config::load(path)?,
            (None, Some(name)) => {
                Config::named_preset(name).ok_or_else(|| format!("unknown preset: {}", name))?
            }
            (None, None) => Config::new(),
        };

        if let Some(radius) = self.radius {
            config.core.radius = radius;
        }
        if let Some(samples) = self.samples {
            config.core.samples = samples;
        }
        if let Some(threshold) = self.threshold {
            config.core.threshold = threshold;
        }
        if let Some(threads) = self.threads {
            config.core.n_threads = threads;
        }
        if self.exclusive {
            config.threshold_mode = ThresholdMode::Exclusive;
        }
        if self.sequential {
            config.parallel = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.resolve_config()?;
    tracing::info!("{}", config.summary());

    if config.parallel {
        init_thread_pool(config.core.n_threads)?;
    }

    let dataset = ImageListDataset::from_inputs(&args.inputs, args.recursive)?;
    if dataset.is_empty() {
        tracing::warn!("no images found");
        return Ok(());
    }
    tracing::info!(images = dataset.num_instances(), "dataset ready");

    let extractor = LtpExtractor::new(&config)?
        .with_normalization(args.normalize)
        .with_blur(args.blur)?;

    let mut failures = 0usize;
    for index in 0..dataset.num_instances() {
        let id = dataset.id(index);
        let img = match dataset.instance(index) {
            Ok(img) => img,
            Err(e) => {
                tracing::warn!(%id, error = %e, "skipping image");
                failures += 1;
                continue;
            }
        };

        let t0 = Instant::now();
        let maps = extractor.extract_luma(&img)?;
        let elapsed = t0.elapsed();

        let (w, h) = maps.dimensions();
        println!(
            "{}: {}x{} in {:.2?}, distinct codes: positive={}, negative={}, ternary={}",
            id,
            w,
            h,
            elapsed,
            maps.positive.distinct_count(),
            maps.negative.distinct_count(),
            maps.ternary.distinct_count(),
        );
    }

    if failures > 0 {
        tracing::warn!(failures, "some images could not be read");
    }
    Ok(())
}
