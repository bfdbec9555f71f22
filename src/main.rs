use anyhow::{Context, Result};
use clap::Parser;
use rolling_stats::Stats;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use smavg::output::{AverageOutput, Formatter, OutputFormat, create_formatter};
use smavg::source::{SampleSource, TextSource, WavFileSource};
use smavg::{SimpleMovingAverage, SmaConfig, save_wav};

#[derive(Parser, Debug)]
#[command(name = "smavg")]
#[command(about = "Smooth a stream of samples with a simple moving average", long_about = None)]
struct Args {
    /// Input files: text samples or .wav (reads stdin when omitted or "-")
    files: Vec<PathBuf>,

    /// Averaging window in samples (overrides config file)
    #[arg(short = 'w', long)]
    window: Option<usize>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: text, csv, json (overrides config file)
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Zero-based channel to read from WAV inputs
    #[arg(long, default_value_t = 0)]
    channel: u16,

    /// Print only every Nth average
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// Print a summary of each smoothed stream to stderr
    #[arg(long)]
    stats: bool,

    /// Write the smoothed stream to a mono float WAV file
    #[arg(long)]
    output_wav: Option<PathBuf>,

    /// Sample rate for --output-wav when the input has none
    #[arg(long, default_value_t = 48000)]
    sample_rate: u32,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Serialize)]
struct StatsSummary {
    count: usize,
    mean: f32,
    std_dev: f32,
    min: f32,
    max: f32,
}

impl StatsSummary {
    fn from_stats(stats: &Stats<f32>) -> Option<Self> {
        if stats.count == 0 {
            return None;
        }
        Some(Self {
            count: stats.count,
            mean: stats.mean,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
        })
    }
}

#[derive(Debug, Serialize)]
struct StreamSummary {
    input: String,
    window: usize,
    samples: u64,
    filled: bool,
    final_average: f32,
    input_stats: Option<StatsSummary>,
    average_stats: Option<StatsSummary>,
    #[serde(skip)]
    sample_rate: Option<u32>,
    #[serde(skip)]
    smoothed: Vec<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = build_config(&args)?;
    log::debug!("Using {:?}", config);

    if args.output_wav.is_some() && args.files.len() > 1 {
        anyhow::bail!("--output-wav takes a single input");
    }

    let inputs: Vec<Option<PathBuf>> = if args.files.is_empty() {
        vec![None]
    } else {
        args.files
            .iter()
            .map(|p| if p.as_os_str() == "-" { None } else { Some(p.clone()) })
            .collect()
    };

    let formatter = create_formatter(config.format, args.verbose > 0);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(header) = formatter.header() {
        writeln!(out, "{}", header)?;
    }

    let mut summaries = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let name = input
            .as_ref()
            .map_or("<stdin>".to_string(), |p| p.display().to_string());
        log::info!("Reading {}", name);

        let mut source = open_source(input.as_deref(), &config, args.channel)
            .with_context(|| format!("Failed to open {}", name))?;
        let summary = smooth_stream(
            source.as_mut(),
            &name,
            &config,
            &args,
            formatter.as_ref(),
            &mut out,
        )
        .with_context(|| format!("Failed to process {}", name))?;

        if summary.samples == 0 {
            log::warn!("{} contained no samples", name);
        }
        summaries.push(summary);
    }
    out.flush()?;

    if let (Some(path), Some(summary)) = (&args.output_wav, summaries.first()) {
        let rate = summary.sample_rate.unwrap_or(args.sample_rate);
        save_wav(path, &summary.smoothed, rate)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!(
            "Wrote {} smoothed samples to {} at {} Hz",
            summary.smoothed.len(),
            path.display(),
            rate
        );
    }

    if args.stats {
        print_stats(&summaries, config.format)?;
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<SmaConfig> {
    let mut config = match args.config {
        Some(ref path) => load_toml_config(path)?,
        None => SmaConfig::default(),
    };

    if let Some(window) = args.window {
        config.window = window;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

fn load_toml_config(path: &Path) -> Result<SmaConfig> {
    let content = fs::read_to_string(path).context("Failed to read config file")?;
    SmaConfig::from_toml_str(&content).context("Failed to parse config file")
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"))
}

fn open_source(
    path: Option<&Path>,
    config: &SmaConfig,
    channel: u16,
) -> Result<Box<dyn SampleSource>> {
    let source: Box<dyn SampleSource> = match path {
        Some(path) if is_wav(path) => {
            Box::new(WavFileSource::new(path, config.chunk_size, channel)?)
        }
        Some(path) => Box::new(TextSource::open(path, config.chunk_size)?),
        None => Box::new(TextSource::new(io::stdin().lock(), config.chunk_size)),
    };
    Ok(source)
}

fn smooth_stream(
    source: &mut dyn SampleSource,
    name: &str,
    config: &SmaConfig,
    args: &Args,
    formatter: &dyn Formatter,
    out: &mut impl Write,
) -> Result<StreamSummary> {
    let mut sma = SimpleMovingAverage::new(config.window)?;
    let mut input_stats: Stats<f32> = Stats::new();
    let mut average_stats: Stats<f32> = Stats::new();
    let mut smoothed = Vec::new();
    let keep_smoothed = args.output_wav.is_some();
    let mut index: u64 = 0;

    while let Some(buffer) = source.next_buffer()? {
        for sample in buffer {
            let average = sma.update(sample);

            if (index + 1) % args.every == 0 {
                let line = formatter.format(&AverageOutput {
                    input: name,
                    index,
                    sample,
                    average,
                });
                writeln!(out, "{}", line)?;
            }

            if args.stats {
                input_stats.update(sample);
                average_stats.update(average);
            }
            if keep_smoothed {
                smoothed.push(average);
            }
            index += 1;
        }
    }

    Ok(StreamSummary {
        input: name.to_string(),
        window: sma.window(),
        samples: sma.samples_seen(),
        filled: sma.is_filled(),
        final_average: sma.average(),
        input_stats: StatsSummary::from_stats(&input_stats),
        average_stats: StatsSummary::from_stats(&average_stats),
        sample_rate: source.sample_rate(),
        smoothed,
    })
}

fn print_stats(summaries: &[StreamSummary], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(summaries)?;
        eprintln!("{}", json);
        return Ok(());
    }

    for summary in summaries {
        eprintln!("=== {} ===", summary.input);
        eprintln!(
            "Window: {}  Samples: {}  Filled: {}  Final average: {}",
            summary.window, summary.samples, summary.filled, summary.final_average
        );
        for (label, stats) in [
            ("Input", &summary.input_stats),
            ("Average", &summary.average_stats),
        ] {
            match stats {
                Some(s) => eprintln!(
                    "{:<8} mean: {:.6}  std: {:.6}  min: {:.6}  max: {:.6}",
                    label, s.mean, s.std_dev, s.min, s.max
                ),
                None => eprintln!("{:<8} no samples", label),
            }
        }
    }
    Ok(())
}
