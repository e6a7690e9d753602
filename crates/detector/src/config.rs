use cadence_domain::TempoRange;
use serde::{Deserialize, Serialize};

/// Analysis parameters.
///
/// The defaults are the values the estimator is calibrated for: a 2048-sample
/// window (~46 ms at 44.1 kHz) hopped by 512 samples (~11 ms), searching
/// 40–220 BPM.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DetectorConfig {
    pub window_size: usize,
    pub hop_size: usize,
    pub tempo_range: TempoRange,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_size: 2048,
            hop_size: 512,
            tempo_range: TempoRange::default(),
        }
    }
}

impl DetectorConfig {
    /// Envelope frames per second for the given input rate.
    pub fn frame_rate(&self, sample_rate: u32) -> f64 {
        f64::from(sample_rate) / self.hop_size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_calibration() {
        let config = DetectorConfig::default();
        assert_eq!(config.window_size, 2048);
        assert_eq!(config.hop_size, 512);
        assert_eq!(config.tempo_range.min_bpm(), 40.0);
        assert_eq!(config.tempo_range.max_bpm(), 220.0);
    }

    #[test]
    fn frame_rate_from_hop() {
        let config = DetectorConfig::default();
        assert_eq!(config.frame_rate(51_200), 100.0);
    }
}
