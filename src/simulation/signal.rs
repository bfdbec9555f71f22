use std::f32::consts::PI;

/// `num_samples` copies of `value`
pub fn constant(num_samples: usize, value: f32) -> Vec<f32> {
    vec![value; num_samples]
}

/// Holds `before` until sample `at`, then `after` for the rest of the stream
pub fn step(num_samples: usize, at: usize, before: f32, after: f32) -> Vec<f32> {
    (0..num_samples)
        .map(|i| if i < at { before } else { after })
        .collect()
}

/// Linear ramp starting at `start` and rising by `slope` per sample
pub fn ramp(num_samples: usize, start: f32, slope: f32) -> Vec<f32> {
    (0..num_samples).map(|i| start + slope * i as f32).collect()
}

/// Sine tone at `freq_hz` sampled at `sample_rate`
pub fn sine(num_samples: usize, sample_rate: u32, freq_hz: f32, amplitude: f32) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            amplitude * (2.0 * PI * freq_hz * t).sin()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        assert_eq!(step(5, 2, 0.0, 1.0), vec![0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(step(3, 10, 2.0, 5.0), vec![2.0; 3]);
    }

    #[test]
    fn test_ramp() {
        assert_eq!(ramp(4, 1.0, 0.5), vec![1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_sine_peak() {
        // 1 kHz at 8 kHz: the third sample sits on the positive peak
        let tone = sine(8, 8000, 1000.0, 2.0);
        assert_eq!(tone[0], 0.0);
        assert!((tone[2] - 2.0).abs() < 1e-5);
    }
}
