/// Normalized beat-strength signal from an energy envelope.
///
/// Half-wave-rectified first difference: only energy increases count as
/// onset evidence. The result is scaled so its maximum is 1.0, except for a
/// flat or decreasing envelope, which stays all zero.
pub(crate) fn enhance_onsets(envelope: &[f64]) -> Vec<f64> {
    let mut onsets = vec![0.0; envelope.len()];
    for i in 1..envelope.len() {
        onsets[i] = (envelope[i] - envelope[i - 1]).max(0.0);
    }
    let max = onsets.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        for value in &mut onsets {
            *value /= max;
        }
    }
    onsets
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn first_frame_is_always_zero() {
        let onsets = enhance_onsets(&[5.0, 6.0, 7.0]);
        assert_eq!(onsets[0], 0.0);
    }

    #[test]
    fn peak_normalizes_to_one() {
        let onsets = enhance_onsets(&[0.0, 0.2, 0.1, 0.6, 0.6]);
        let max = onsets.iter().copied().fold(0.0, f64::max);
        assert_relative_eq!(max, 1.0);
        // Rises keep their relative size: 0.2 up, then 0.5 up.
        assert_relative_eq!(onsets[1], 0.4);
        assert_relative_eq!(onsets[3], 1.0);
    }

    #[test]
    fn decreases_are_rectified_away() {
        let onsets = enhance_onsets(&[1.0, 0.5, 0.25]);
        assert!(onsets.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn flat_envelope_stays_zero() {
        let onsets = enhance_onsets(&[0.3; 8]);
        assert!(onsets.iter().all(|&v| v == 0.0));
    }
}
