/// Short-term loudness curve: one RMS value per analysis frame.
///
/// Frame `i` starts at `i * hop` and spans `window` samples, giving
/// `(len - window) / hop + 1` frames. Returns an empty vector when the input
/// is shorter than one window.
pub(crate) fn energy_envelope(samples: &[f32], window: usize, hop: usize) -> Vec<f64> {
    if window == 0 || hop == 0 || samples.len() < window {
        return Vec::new();
    }
    let frames = (samples.len() - window) / hop + 1;
    let mut envelope = Vec::with_capacity(frames);
    for i in 0..frames {
        let start = i * hop;
        let end = (start + window).min(samples.len());
        let energy: f64 = samples[start..end]
            .iter()
            .map(|&s| f64::from(s) * f64::from(s))
            .sum();
        // The divisor stays the full window size even if the frame runs past
        // the end of the buffer, so a short tail frame under-estimates energy.
        envelope.push((energy / window as f64).sqrt());
    }
    envelope
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn frame_count_follows_hop_formula() {
        let samples = vec![0.0f32; 2048];
        assert_eq!(energy_envelope(&samples, 2048, 512).len(), 1);

        let samples = vec![0.0f32; 2048 + 512 * 5];
        assert_eq!(energy_envelope(&samples, 2048, 512).len(), 6);

        // A partial hop does not add a frame.
        let samples = vec![0.0f32; 2048 + 512 * 5 + 511];
        assert_eq!(energy_envelope(&samples, 2048, 512).len(), 6);
    }

    #[test]
    fn too_short_input_yields_no_frames() {
        let samples = vec![0.1f32; 2047];
        assert!(energy_envelope(&samples, 2048, 512).is_empty());
    }

    #[test]
    fn constant_signal_has_constant_rms() {
        let samples = vec![0.5f32; 2048 + 512 * 3];
        let envelope = energy_envelope(&samples, 2048, 512);
        for value in envelope {
            assert_relative_eq!(value, 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn louder_frames_score_higher() {
        let mut samples = vec![0.0f32; 2048 * 3];
        for s in samples.iter_mut().skip(2048).take(2048) {
            *s = 1.0;
        }
        let envelope = energy_envelope(&samples, 2048, 2048);
        assert!(envelope[1] > envelope[0]);
        assert!(envelope[1] > envelope[2]);
    }
}
