//! Incremental fixed-window simple moving average.
//!
//! [`SimpleMovingAverage`] keeps the last N samples in a ring buffer and
//! adjusts its running average by the entering and leaving samples on every
//! update.
//!
//! ```
//! use smavg::SimpleMovingAverage;
//!
//! let mut sma = SimpleMovingAverage::new(3).unwrap();
//! sma.update(1.0);
//! sma.update(2.0);
//! assert_eq!(sma.update(3.0), 2.0);
//! assert_eq!(sma.update(4.0), 3.0);
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod signal_processing;
pub mod source;
pub mod wav;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::SmaConfig;
pub use error::{Result, SmaError};
pub use signal_processing::SimpleMovingAverage;
pub use wav::save_wav;
