use anyhow::{Context, Result};
use clap::Parser;
use smavg::save_wav;
use smavg::simulation::{add_gaussian_noise, constant, ramp, sine, step};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Shape {
    Constant,
    Step,
    Ramp,
    Sine,
}

#[derive(Parser, Debug)]
#[command(name = "generate_samples")]
#[command(about = "Generate synthetic sample streams for moving average testing")]
struct Args {
    /// Stream shape
    #[arg(short = 'k', long, value_enum, default_value = "sine")]
    shape: Shape,

    /// Number of samples
    #[arg(short = 'n', long, default_value_t = 1000)]
    samples: usize,

    /// Level for constant streams, starting level for step and ramp
    #[arg(long, default_value_t = 0.0)]
    level: f32,

    /// Level after the step, or per-sample slope for ramps
    #[arg(long, default_value_t = 1.0)]
    delta: f32,

    /// Sample index where a step occurs (default: halfway)
    #[arg(long)]
    step_at: Option<usize>,

    /// Sine frequency in Hz
    #[arg(long, default_value_t = 1000.0)]
    freq: f32,

    /// Sine amplitude
    #[arg(long, default_value_t = 1.0)]
    amplitude: f32,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48000)]
    sample_rate: u32,

    /// Gaussian noise standard deviation added to the stream
    #[arg(long)]
    noise: Option<f32>,

    /// Seed for reproducible noise
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file: .wav writes a mono float WAV, anything else writes text (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut samples = match args.shape {
        Shape::Constant => constant(args.samples, args.level),
        Shape::Step => step(
            args.samples,
            args.step_at.unwrap_or(args.samples / 2),
            args.level,
            args.delta,
        ),
        Shape::Ramp => ramp(args.samples, args.level, args.delta),
        Shape::Sine => sine(args.samples, args.sample_rate, args.freq, args.amplitude),
    };

    if let Some(std_dev) = args.noise {
        add_gaussian_noise(&mut samples, std_dev, args.seed)?;
    }

    log::info!("Generated {} {:?} samples", samples.len(), args.shape);

    match args.output {
        Some(ref path) if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("wav")) => {
            save_wav(path, &samples, args.sample_rate)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_text(BufWriter::new(file), &samples)?;
        }
        None => write_text(BufWriter::new(io::stdout().lock()), &samples)?,
    }

    Ok(())
}

fn write_text(mut out: impl Write, samples: &[f32]) -> Result<()> {
    for sample in samples {
        writeln!(out, "{}", sample)?;
    }
    out.flush()?;
    Ok(())
}
