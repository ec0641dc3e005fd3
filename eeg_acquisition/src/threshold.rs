//! Adaptive activation thresholds over a band's history of means

/// Margin a new mean must clear over the baseline
pub const THRESHOLD_FACTOR: f64 = 1.04;

/// Mean of the whole history, scaled. An empty history gives 0.
pub fn overall_threshold(means: &[f64]) -> f64 {
    if means.is_empty() {
        return 0.0;
    }
    means.iter().sum::<f64>() / means.len() as f64 * THRESHOLD_FACTOR
}

/// Mean of the last `window` samples, scaled; falls back to the overall
/// threshold until the history holds `window` samples
pub fn moving_window_threshold(means: &[f64], window: usize) -> f64 {
    if window == 0 || means.len() < window {
        return overall_threshold(means);
    }
    let recent = &means[means.len() - window..];
    recent.iter().sum::<f64>() / window as f64 * THRESHOLD_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall() {
        assert!((overall_threshold(&[1.0, 2.0, 3.0]) - 2.08).abs() < 1e-12);
        assert_eq!(overall_threshold(&[]), 0.0);
    }

    #[test]
    fn test_window_uses_recent_samples() {
        let means = [10.0, 10.0, 1.0, 2.0, 3.0];
        assert!((moving_window_threshold(&means, 3) - 2.08).abs() < 1e-12);
    }

    #[test]
    fn test_short_history_falls_back() {
        let means = [1.0, 3.0];
        assert_eq!(moving_window_threshold(&means, 5), overall_threshold(&means));
        assert_eq!(moving_window_threshold(&means, 0), overall_threshold(&means));
    }
}
