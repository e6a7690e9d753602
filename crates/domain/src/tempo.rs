use serde::{Deserialize, Serialize};

use crate::DetectError;

/// Inclusive BPM bounds the analyzer searches.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TempoRange {
    min_bpm: f64,
    max_bpm: f64,
}

impl TempoRange {
    pub fn new(min_bpm: f64, max_bpm: f64) -> Result<Self, DetectError> {
        if !min_bpm.is_finite() || !max_bpm.is_finite() || min_bpm <= 0.0 || min_bpm >= max_bpm {
            return Err(DetectError::unexpected(format!(
                "invalid tempo range {min_bpm}..{max_bpm}"
            )));
        }
        Ok(Self { min_bpm, max_bpm })
    }

    pub fn min_bpm(&self) -> f64 {
        self.min_bpm
    }

    pub fn max_bpm(&self) -> f64 {
        self.max_bpm
    }

    pub fn contains(&self, bpm: f64) -> bool {
        (self.min_bpm..=self.max_bpm).contains(&bpm)
    }
}

impl Default for TempoRange {
    fn default() -> Self {
        Self {
            min_bpm: 40.0,
            max_bpm: 220.0,
        }
    }
}

/// A validated tempo estimate, rounded to two decimal places.
///
/// Construction is the only way to obtain one, so a value of this type
/// always lies inside the range it was validated against.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BpmEstimate {
    bpm: f64,
}

impl BpmEstimate {
    pub fn new(bpm: f64, range: TempoRange) -> Result<Self, DetectError> {
        if !bpm.is_finite() {
            return Err(DetectError::unexpected(format!(
                "non-finite tempo estimate: {bpm}"
            )));
        }
        if !range.contains(bpm) {
            return Err(DetectError::NoBeatDetected);
        }
        Ok(Self {
            bpm: (bpm * 100.0).round() / 100.0,
        })
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }
}
