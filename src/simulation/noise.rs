use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Result, SmaError};

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Add zero-mean Gaussian noise with the given standard deviation in place
pub fn add_gaussian_noise(signal: &mut [f32], std_dev: f32, seed: Option<u64>) -> Result<()> {
    let normal = Normal::new(0.0, std_dev as f64)
        .map_err(|e| SmaError::InvalidArgument(format!("noise std_dev {}: {}", std_dev, e)))?;
    let mut rng = create_rng(seed);

    for sample in signal.iter_mut() {
        *sample += normal.sample(&mut rng) as f32;
    }
    Ok(())
}

/// Uniformly distributed samples between `low` and `high`
///
/// f32 rounding can land a sample exactly on `high`.
pub fn uniform_samples(num_samples: usize, low: f32, high: f32, seed: Option<u64>) -> Vec<f32> {
    let mut rng = create_rng(seed);
    (0..num_samples)
        .map(|_| low + rng.random::<f32>() * (high - low))
        .collect()
}
