//! Descriptive statistics over sorted samples.

/// Arithmetic mean, `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() { return None }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample (unbiased, n − 1) standard deviation, `None` with fewer than
/// two values.
pub fn deviation(values: &[f64]) -> Option<f64> {
    if values.len() < 2 { return None }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Drop the values lying more than two sample standard deviations away
/// from the mean.  Order is preserved.
///
/// With fewer than two values the deviation is undefined and no value
/// is kept.
pub fn without_outliers(values: &[f64]) -> Vec<f64> {
    match (mean(values), deviation(values)) {
        (Some(m), Some(sd)) =>
            values.iter().copied()
                .filter(|v| (v - m).abs() <= 2. * sd)
                .collect(),
        _ => vec![],
    }
}

/// Quantile `p` ∈ \[0, 1\] of a sorted sample, linearly interpolating
/// between closest ranks (R-7, as spreadsheets do).
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 { return None }
    let h = (n - 1) as f64 * p.clamp(0., 1.);
    let i = h.floor() as usize;
    if i + 1 >= n { return Some(sorted[n - 1]) }
    let (lo, hi) = (sorted[i], sorted[i + 1]);
    Some(lo + (hi - lo) * (h - i as f64))
}

/// Round `x` to `digits` significant figures, halves going up (towards
/// +∞).  Zero, infinities and NaN are returned unchanged.
///
/// ```
/// use color_scale::stats::round_sig_fig;
/// assert_eq!(round_sig_fig(-17.3, 1), -20.);
/// assert_eq!(round_sig_fig(1234., 2), 1200.);
/// ```
pub fn round_sig_fig(x: f64, digits: u32) -> f64 {
    if x == 0. || !x.is_finite() { return x }
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = digits as i32 - 1 - magnitude;
    // Divide by a power of ten rather than multiply by its inverse: the
    // latter is not exact for negative exponents.
    if decimals >= 0 {
        let p = 10f64.powi(decimals);
        (x * p + 0.5).floor() / p
    } else {
        let p = 10f64.powi(-decimals);
        (x / p + 0.5).floor() * p
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_deviation() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1., 2., 3., 4.]), Some(2.5));
        assert_eq!(deviation(&[5.]), None);
        let sd = deviation(&[2., 4., 4., 4., 5., 5., 7., 9.]).unwrap();
        assert!((sd - 2.138089935).abs() < 1e-8, "{sd}");
    }

    #[test]
    fn outliers_beyond_two_deviations() {
        let v = [1., 2., 3., 4., 5., 6., 7., 8., 9., 100.];
        assert_eq!(without_outliers(&v), &v[.. 9]);
    }

    #[test]
    fn outliers_small_samples() {
        assert!(without_outliers(&[]).is_empty());
        assert!(without_outliers(&[42.]).is_empty());
        // Constant samples have a zero deviation and keep every value.
        assert_eq!(without_outliers(&[3., 3., 3.]), vec![3., 3., 3.]);
    }

    #[test]
    fn quantiles() {
        let v = [1., 2., 3., 4., 5.];
        assert_eq!(quantile(&v, 0.), Some(1.));
        assert_eq!(quantile(&v, 1.), Some(5.));
        assert_eq!(quantile(&v, 0.5), Some(3.));
        assert_eq!(quantile(&v, 0.25), Some(2.));
        assert_eq!(quantile(&[1., 2.], 0.5), Some(1.5));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn significant_figures() {
        assert_eq!(round_sig_fig(0., 1), 0.);
        assert_eq!(round_sig_fig(-17.3, 1), -20.);
        assert_eq!(round_sig_fig(-12., 1), -10.);
        assert_eq!(round_sig_fig(-0.0347, 1), -0.03);
        assert_eq!(round_sig_fig(-250., 1), -200.);
        assert_eq!(round_sig_fig(0.0347, 2), 0.035);
        assert_eq!(round_sig_fig(987., 1), 1000.);
        assert!(round_sig_fig(f64::NAN, 1).is_nan());
    }
}
