/// Rolling minimum over the trailing `window` values.
/// Index `i` is `None` until `window` values have been seen.
pub fn rolling_min(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_fold(values, window, f64::INFINITY, f64::min)
}

/// Rolling maximum over the trailing `window` values.
pub fn rolling_max(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_fold(values, window, f64::NEG_INFINITY, f64::max)
}

fn rolling_fold(values: &[f64], window: usize, init: f64, f: fn(f64, f64) -> f64) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                Some(values[i + 1 - window..=i].iter().copied().fold(init, f))
            }
        })
        .collect()
}

/// Rolling arithmetic mean over the trailing `window` values.
/// A window holding any undefined value is itself undefined.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            values[i + 1 - window..=i]
                .iter()
                .copied()
                .sum::<Option<f64>>()
                .map(|total| total / window as f64)
        })
        .collect()
}

/// `a < b`, false when either side is undefined
pub fn opt_lt(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a < b)
}

/// `a > b`, false when either side is undefined
pub fn opt_gt(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a > b)
}
