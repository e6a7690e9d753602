use cadence_domain::TempoRange;

/// Autocorrelation strength per candidate beat period, in envelope frames.
///
/// The lag domain is derived from the tempo bounds: `min_lag` is the period
/// of the fastest tempo, `max_lag` the period of the slowest, clipped to what
/// the onset signal can support.
#[derive(Debug, Clone)]
pub(crate) struct Tempogram {
    min_lag: usize,
    scores: Vec<f64>,
}

impl Tempogram {
    /// Returns `None` when the onset signal is too short to cover any lag in
    /// range.
    pub(crate) fn build(onsets: &[f64], frame_rate: f64, range: TempoRange) -> Option<Self> {
        let min_lag = ((60.0 / range.max_bpm() * frame_rate) as usize).max(1);
        let max_lag = (60.0 / range.min_bpm() * frame_rate) as usize;
        let max_lag = max_lag.min(onsets.len().saturating_sub(1));
        if max_lag < min_lag {
            return None;
        }

        let mut scores = Vec::with_capacity(max_lag - min_lag + 1);
        for lag in min_lag..=max_lag {
            let count = onsets.len() - lag;
            // Mean of lagged products, not a correlation coefficient. The
            // estimate is deliberately left unnormalized by signal energy.
            let sum: f64 = (0..count).map(|i| onsets[i] * onsets[i + lag]).sum();
            scores.push(sum / count as f64);
        }
        Some(Self { min_lag, scores })
    }

    pub(crate) fn min_lag(&self) -> usize {
        self.min_lag
    }

    pub(crate) fn max_lag(&self) -> usize {
        self.min_lag + self.scores.len() - 1
    }

    pub(crate) fn len(&self) -> usize {
        self.scores.len()
    }

    pub(crate) fn score_at(&self, lag: usize) -> Option<f64> {
        lag.checked_sub(self.min_lag)
            .and_then(|index| self.scores.get(index))
            .copied()
    }

    /// Strongest lag and its score; the lowest lag wins ties.
    pub(crate) fn peak(&self) -> (usize, f64) {
        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (index, &score) in self.scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        (self.min_lag + best_index, best_score)
    }
}
