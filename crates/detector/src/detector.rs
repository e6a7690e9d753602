use cadence_domain::{BpmEstimate, DetectError};
use tracing::{debug, instrument};

use crate::config::DetectorConfig;
use crate::diagnostics::{NullSink, ProgressSink};
use crate::envelope::energy_envelope;
use crate::onset::enhance_onsets;
use crate::peak::select_bpm;
use crate::tempogram::Tempogram;

/// The tempo estimator.
///
/// Stateless apart from its configuration: every call builds its envelope,
/// onset signal and tempogram from scratch, so independent calls may run
/// concurrently without coordination.
#[derive(Debug, Clone, Default)]
pub struct BpmDetector {
    config: DetectorConfig,
}

impl BpmDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Estimate the tempo of a mono sample buffer.
    ///
    /// Progress text goes to `sink`; it never influences the result.
    #[instrument(skip(self, samples, sink), fields(sample_count = samples.len()))]
    pub fn detect(
        &self,
        samples: &[f32],
        sample_rate: u32,
        sink: &mut dyn ProgressSink,
    ) -> Result<BpmEstimate, DetectError> {
        if samples.is_empty() || sample_rate == 0 {
            return Err(DetectError::EmptyOrInvalidInput);
        }
        sink.emit(&format!(
            "analyzing {} samples at {} Hz ({:.2} s)",
            samples.len(),
            sample_rate,
            samples.len() as f64 / f64::from(sample_rate)
        ));

        sink.emit("computing energy envelope...");
        let envelope = energy_envelope(samples, self.config.window_size, self.config.hop_size);
        if envelope.is_empty() {
            return Err(DetectError::InsufficientSamples);
        }
        sink.emit(&format!("envelope: {} frames", envelope.len()));

        sink.emit("enhancing beat onsets...");
        let onsets = enhance_onsets(&envelope);

        sink.emit("computing autocorrelation tempogram...");
        let frame_rate = self.config.frame_rate(sample_rate);
        let tempogram = Tempogram::build(&onsets, frame_rate, self.config.tempo_range)
            .ok_or(DetectError::InsufficientSamples)?;
        sink.emit(&format!(
            "tempogram: {} lags ({}..={})",
            tempogram.len(),
            tempogram.min_lag(),
            tempogram.max_lag()
        ));

        let bpm = select_bpm(&tempogram, frame_rate, self.config.tempo_range, sink);
        debug!(bpm, "raw tempo estimate");
        let estimate = BpmEstimate::new(bpm, self.config.tempo_range)?;
        sink.emit(&format!("detected tempo: {:.2} BPM", estimate.bpm()));
        Ok(estimate)
    }
}

/// Run the estimator with the default configuration and no progress output.
pub fn detect_bpm(samples: &[f32], sample_rate: u32) -> Result<BpmEstimate, DetectError> {
    BpmDetector::default().detect(samples, sample_rate, &mut NullSink)
}
