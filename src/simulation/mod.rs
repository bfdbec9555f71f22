mod noise;
mod signal;

pub use noise::{add_gaussian_noise, uniform_samples};
pub use signal::{constant, ramp, sine, step};
