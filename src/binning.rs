//! Automatic choice of numeric bin boundaries.
//!
//! Every algorithm receives values sorted in increasing order and
//! returns the upper bound of each bin:
//! * [`BinningStrategy::EqualInterval`] - bins of equal width
//! * [`BinningStrategy::Quantiles`], [`BinningStrategy::Quartiles`] -
//!   bins holding approximately the same number of values
//! * [`BinningStrategy::Ckmeans`] - optimal 1-D k-means clusters
//!
//! When there is at least one value the result has exactly `bin_count`
//! non-decreasing entries and the last one is the largest value.

use crate::config::BinningStrategy;
use crate::stats::quantile;

impl BinningStrategy {
    /// Upper bounds of `bin_count` bins covering `sorted_values`, the
    /// first bin starting at `min_bin_value`.
    ///
    /// Returns an empty list when there are no values or no bins.
    /// [`BinningStrategy::Manual`] bins come from the configuration, not
    /// from data; asked here, it behaves like `EqualInterval`.
    ///
    /// ```
    /// use color_scale::BinningStrategy;
    /// let b = BinningStrategy::EqualInterval
    ///     .bin_maximums(&[10., 20., 30., 40., 50.], 5, 0.);
    /// assert_eq!(b, [10., 20., 30., 40., 50.]);
    /// ```
    pub fn bin_maximums(self, sorted_values: &[f64], bin_count: usize,
                        min_bin_value: f64) -> Vec<f64> {
        if sorted_values.is_empty() || bin_count == 0 { return vec![] }
        match self {
            BinningStrategy::Quantiles | BinningStrategy::Quartiles =>
                quantile_maximums(sorted_values, bin_count),
            BinningStrategy::Ckmeans =>
                ckmeans_maximums(sorted_values, bin_count),
            BinningStrategy::EqualInterval | BinningStrategy::Manual =>
                equal_interval_maximums(sorted_values, bin_count,
                                        min_bin_value),
        }
    }
}

fn equal_interval_maximums(sorted: &[f64], n: usize, min: f64) -> Vec<f64> {
    let max = sorted[sorted.len() - 1];
    let step = (max - min) / n as f64;
    // The last bound is `max` itself so rounding never leaves it out.
    (1 ..= n).map(|i| if i == n { max } else { min + step * i as f64 })
        .collect()
}

fn quantile_maximums(sorted: &[f64], n: usize) -> Vec<f64> {
    (1 ..= n).filter_map(|i| quantile(sorted, i as f64 / n as f64))
        .collect()
}

/// Maxima of the clusters minimizing the sum of squared distances to the
/// cluster means (Wang & Song's dynamic program).  With fewer distinct
/// values than bins, the top value is repeated.
fn ckmeans_maximums(sorted: &[f64], n: usize) -> Vec<f64> {
    let len = sorted.len();
    let distinct = 1 + sorted.windows(2).filter(|w| w[0] != w[1]).count();
    let k = n.min(distinct);

    // Prefix sums give the within-cluster sum of squares in O(1).
    let mut s1 = vec![0.; len + 1];
    let mut s2 = vec![0.; len + 1];
    for (i, &x) in sorted.iter().enumerate() {
        s1[i + 1] = s1[i] + x;
        s2[i + 1] = s2[i] + x * x;
    }
    let ssq = |j: usize, i: usize| { // cluster sorted[j ..= i]
        let sum = s1[i + 1] - s1[j];
        let d = s2[i + 1] - s2[j] - sum * sum / (i - j + 1) as f64;
        d.max(0.)
    };

    // cost[c][i]: best cost of `c + 1` clusters over `sorted[..= i]`;
    // first[c][i]: where the last of those clusters starts.
    let mut cost = vec![vec![f64::INFINITY; len]; k];
    let mut first = vec![vec![0; len]; k];
    for i in 0 .. len { cost[0][i] = ssq(0, i); }
    for c in 1 .. k {
        for i in c .. len {
            for j in c ..= i {
                let d = cost[c - 1][j - 1] + ssq(j, i);
                if d < cost[c][i] {
                    cost[c][i] = d;
                    first[c][i] = j;
                }
            }
        }
    }

    let mut maxima = Vec::with_capacity(n);
    let mut right = len - 1;
    for c in (0 .. k).rev() {
        maxima.push(sorted[right]);
        if c > 0 { right = first[c][right] - 1; }
    }
    maxima.reverse();
    maxima.resize(n, sorted[len - 1]);
    maxima
}


#[cfg(test)]
mod tests {
    use super::*;
    use BinningStrategy::*;

    #[test]
    fn equal_interval() {
        let v = [10., 20., 30., 40., 50.];
        assert_eq!(EqualInterval.bin_maximums(&v, 5, 0.),
                   [10., 20., 30., 40., 50.]);
        assert_eq!(EqualInterval.bin_maximums(&v, 2, 10.), [30., 50.]);
        let b = EqualInterval.bin_maximums(&[0.1, 0.7], 3, 0.);
        assert_eq!(b.len(), 3);
        assert_eq!(b[2], 0.7);
    }

    #[test]
    fn empty() {
        for s in [EqualInterval, Quantiles, Quartiles, Ckmeans, Manual] {
            assert!(s.bin_maximums(&[], 5, 0.).is_empty());
            assert!(s.bin_maximums(&[1., 2.], 0, 0.).is_empty());
        }
    }

    #[test]
    fn quantiles() {
        let v = [1., 2., 3., 4., 5., 6., 7., 8.];
        assert_eq!(Quantiles.bin_maximums(&v, 4, 0.), [2.75, 4.5, 6.25, 8.]);
        assert_eq!(Quartiles.bin_maximums(&v, 4, 0.),
                   Quantiles.bin_maximums(&v, 4, 0.));
    }

    #[test]
    fn ckmeans_clusters() {
        let v = [1., 2., 3., 10., 11., 12., 20., 21., 22.];
        assert_eq!(Ckmeans.bin_maximums(&v, 3, 0.), [3., 12., 22.]);
        assert_eq!(Ckmeans.bin_maximums(&v, 1, 0.), [22.]);
    }

    #[test]
    fn ckmeans_few_distinct_values() {
        assert_eq!(Ckmeans.bin_maximums(&[1., 1., 2.], 3, 0.), [1., 2., 2.]);
        assert_eq!(Ckmeans.bin_maximums(&[4.], 2, 0.), [4., 4.]);
    }

    #[test]
    fn count_and_cover() {
        let v = [0.5, 1., 1., 2., 3., 5., 8., 13., 21.];
        for s in [EqualInterval, Quantiles, Quartiles, Ckmeans] {
            for n in 1 .. 12 {
                let b = s.bin_maximums(&v, n, 0.);
                assert_eq!(b.len(), n, "{s:?} {n}");
                assert_eq!(b[n - 1], 21., "{s:?} {n}");
                assert!(b.windows(2).all(|w| w[0] <= w[1]), "{s:?} {b:?}");
                assert!(b.iter().all(|&x| x >= 0.), "{s:?} {b:?}");
            }
        }
    }
}
