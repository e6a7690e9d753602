//! Tempo estimation from raw audio samples.
//!
//! The pipeline reduces a mono sample buffer to an energy envelope, enhances
//! beat onsets, autocorrelates them into a tempogram over the configured
//! tempo range, and selects the dominant periodicity with half/double-tempo
//! correction. Data flows strictly forward; every invocation is pure and
//! deterministic.

pub mod config;
pub mod detector;
pub mod diagnostics;

mod envelope;
mod onset;
mod peak;
mod tempogram;

pub use config::DetectorConfig;
pub use detector::{detect_bpm, BpmDetector};
pub use diagnostics::{NullSink, ProgressSink};
