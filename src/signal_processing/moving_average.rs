use crate::error::{Result, SmaError};

/// Simple moving average over a fixed window of samples
///
/// Maintains a circular buffer of the last N samples and a running average
/// that is adjusted incrementally on every update, so each sample costs O(1)
/// regardless of the window size.
///
/// Slots that have not been written yet hold zero and count toward the
/// average. During warm-up the output is therefore biased toward zero: after
/// `k < N` updates the average is `sum(samples) / N`, not `sum(samples) / k`.
///
/// The incremental update accumulates floating-point rounding error over very
/// long streams. Use [`reset`](Self::reset) to start from a clean state.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    buffer: Vec<f32>,
    index: usize,
    average: f32,
    samples_seen: u64,
}

impl SimpleMovingAverage {
    /// Create a new moving average with every slot set to zero
    ///
    /// # Arguments
    /// * `window_size` - Number of most recent samples to average
    ///
    /// # Errors
    /// Returns [`SmaError::InvalidArgument`] if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(SmaError::InvalidArgument(
                "window size must be at least 1".to_string(),
            ));
        }

        log::debug!("Created moving average with window of {} samples", window_size);

        Ok(Self {
            buffer: vec![0.0; window_size],
            index: 0,
            average: 0.0,
            samples_seen: 0,
        })
    }

    /// Add a new sample and return the updated average
    ///
    /// The sample replaces the oldest slot in the window. The average moves by
    /// the difference between the entering and leaving samples divided by the
    /// window size.
    pub fn update(&mut self, sample: f32) -> f32 {
        let oldest = self.buffer[self.index];
        self.average += (sample - oldest) / self.buffer.len() as f32;
        self.buffer[self.index] = sample;
        self.index = (self.index + 1) % self.buffer.len();
        self.samples_seen += 1;

        self.average
    }

    /// Run every sample through [`update`](Self::update) in order, replacing
    /// each one with the average returned for it.
    pub fn process_buffer(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.update(*sample);
        }
    }

    /// Current average without adding a sample
    pub fn average(&self) -> f32 {
        self.average
    }

    /// Number of samples in the averaging window
    pub fn window(&self) -> usize {
        self.buffer.len()
    }

    /// Number of updates applied since construction or the last reset
    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }

    /// Whether every slot in the window has been written at least once
    pub fn is_filled(&self) -> bool {
        self.samples_seen >= self.buffer.len() as u64
    }

    /// Clear the window back to zeros, keeping its size
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.index = 0;
        self.average = 0.0;
        self.samples_seen = 0;
        log::debug!("Reset moving average (window {})", self.buffer.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_moving_average() {
        let mut ma = SimpleMovingAverage::new(3).unwrap();

        assert_abs_diff_eq!(ma.update(1.0), 1.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ma.update(2.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ma.update(3.0), 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ma.update(4.0), 3.0, epsilon = 1e-6); // (2+3+4)/3
        assert_abs_diff_eq!(ma.update(5.0), 4.0, epsilon = 1e-6); // (3+4+5)/3
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = SimpleMovingAverage::new(0).unwrap_err();
        assert!(matches!(err, SmaError::InvalidArgument(_)));
    }

    #[test]
    fn test_window_of_one_tracks_input() {
        let mut ma = SimpleMovingAverage::new(1).unwrap();
        for sample in [3.5, -1.25, 0.0, 1e6, -7.0] {
            assert_eq!(ma.update(sample), sample);
        }
    }

    #[test]
    fn test_new_starts_at_zero() {
        let ma = SimpleMovingAverage::new(8).unwrap();
        assert_eq!(ma.average(), 0.0);
        assert_eq!(ma.window(), 8);
        assert_eq!(ma.samples_seen(), 0);
        assert!(!ma.is_filled());
    }

    #[test]
    fn test_is_filled_after_window_updates() {
        let mut ma = SimpleMovingAverage::new(4).unwrap();
        for _ in 0..3 {
            ma.update(1.0);
        }
        assert!(!ma.is_filled());
        ma.update(1.0);
        assert!(ma.is_filled());
        assert_eq!(ma.samples_seen(), 4);
    }

    #[test]
    fn test_reset_clears_window() {
        let mut ma = SimpleMovingAverage::new(2).unwrap();
        ma.update(10.0);
        ma.update(20.0);
        ma.reset();

        assert_eq!(ma.average(), 0.0);
        assert_eq!(ma.window(), 2);
        assert!(!ma.is_filled());
        assert_abs_diff_eq!(ma.update(4.0), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_process_buffer_matches_update() {
        let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let mut by_update = SimpleMovingAverage::new(3).unwrap();
        let expected: Vec<f32> = input.iter().map(|&s| by_update.update(s)).collect();

        let mut by_buffer = SimpleMovingAverage::new(3).unwrap();
        let mut samples = input;
        by_buffer.process_buffer(&mut samples);

        assert_eq!(samples.to_vec(), expected);
        assert_eq!(by_buffer.average(), by_update.average());
    }

    #[test]
    fn test_process_buffer_empty() {
        let mut ma = SimpleMovingAverage::new(3).unwrap();
        let mut samples: Vec<f32> = vec![];
        ma.process_buffer(&mut samples);
        assert!(samples.is_empty());
        assert_eq!(ma.samples_seen(), 0);
    }

    #[test]
    fn test_nan_passes_through() {
        let mut ma = SimpleMovingAverage::new(2).unwrap();
        assert!(ma.update(f32::NAN).is_nan());
    }
}
