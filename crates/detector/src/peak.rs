use cadence_domain::TempoRange;
use tracing::debug;

use crate::diagnostics::ProgressSink;
use crate::tempogram::Tempogram;

/// Candidates below this are checked for half-tempo ambiguity.
const OCTAVE_CHECK_BELOW_BPM: f64 = 90.0;
/// A half-period score above this fraction of the peak promotes the doubled
/// tempo.
const OCTAVE_SCORE_RATIO: f64 = 0.7;

/// Convert the strongest tempogram lag to BPM, correcting the common
/// half-tempo error where a subdivision outscores the true beat period.
pub(crate) fn select_bpm(
    tempogram: &Tempogram,
    frame_rate: f64,
    range: TempoRange,
    sink: &mut dyn ProgressSink,
) -> f64 {
    let (peak_lag, peak_score) = tempogram.peak();
    let mut bpm = 60.0 * frame_rate / peak_lag as f64;
    sink.emit(&format!(
        "peak at lag {peak_lag} -> {bpm:.2} BPM (score {peak_score:.6})"
    ));

    if bpm < OCTAVE_CHECK_BELOW_BPM {
        let doubled = bpm * 2.0;
        if range.contains(doubled) {
            if let Some(half_score) = tempogram.score_at(peak_lag / 2) {
                if half_score > peak_score * OCTAVE_SCORE_RATIO {
                    sink.emit(&format!(
                        "half-tempo corrected: {bpm:.2} -> {doubled:.2} BPM \
                         (score {half_score:.6} vs {peak_score:.6})"
                    ));
                    debug!(peak_lag, half_score, peak_score, "octave correction applied");
                    bpm = doubled;
                }
            }
        }
    }
    bpm
}
