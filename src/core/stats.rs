//! Small numeric helpers behind the chart builder.

use crate::domain::chart::{BoxStats, CategoryCount, HistogramBin};
use std::collections::HashMap;
use std::hash::Hash;

/// Frequencies keyed by first appearance.
pub fn count_in_order<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for value in values {
        match positions.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts
}

pub fn to_category_counts<K: ToString>(counts: Vec<(K, usize)>) -> Vec<CategoryCount> {
    counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Equal-width bins over the observed range. Each value lands in the bin whose
/// published `[lower, upper)` edges contain it; the last bin is closed so the
/// maximum is counted. A constant column gets a unit-wide range around it.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let (mut min, mut max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if max <= min {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bin_count {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &value in values {
        let slot = bins
            .partition_point(|bin| bin.upper <= value)
            .min(bin_count - 1);
        bins[slot].count += 1;
    }

    bins
}

/// Linear interpolation between closest ranks; `sorted` must be ascending
/// and non-empty.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Tukey box-plot summary. Whiskers reach the most extreme points within
/// 1.5 IQR of the box; everything beyond is an outlier.
pub fn box_stats(group: &str, values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let fence = 1.5 * (q3 - q1);
    let (low_fence, high_fence) = (q1 - fence, q3 + fence);

    let lower_whisker = sorted.iter().copied().find(|&v| v >= low_fence).unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    Some(BoxStats {
        group: group.to_string(),
        count: sorted.len(),
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

/// Pearson's r, or `None` when fewer than two pairs or either side is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }

    let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
    let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (&x, &y) in xs[..n].iter().zip(&ys[..n]) {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_in_order_keeps_first_appearance() {
        let counts = count_in_order(["ECE", "CSE", "ECE", "MECH", "CSE", "ECE"]);
        assert_eq!(counts, vec![("ECE", 3), ("CSE", 2), ("MECH", 1)]);
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values = [3.0, 10.0, 25.5, 49.0, 50.0, 50.0, 12.25];
        let bins = histogram(&values, 15);
        assert_eq!(bins.len(), 15);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].lower, 3.0);
        assert_eq!(bins[14].upper, 50.0);
        assert_eq!(bins[14].count, 3);
        assert_eq!(bins[0].count, 1);
    }

    #[test]
    fn test_histogram_counts_match_bin_edges() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let len = rng.gen_range(1..40);
            let values: Vec<f64> = (0..len)
                .map(|_| (rng.gen_range(3.0..=50.0_f64) * 100.0).round() / 100.0)
                .collect();
            let bins = histogram(&values, 15);

            for (i, bin) in bins.iter().enumerate() {
                let last = i + 1 == bins.len();
                let expected = values
                    .iter()
                    .filter(|&&v| v >= bin.lower && (v < bin.upper || (last && v <= bin.upper)))
                    .count();
                assert_eq!(bin.count, expected, "bin {} of {:?} for {:?}", i, bin, values);
            }
            for pair in bins.windows(2) {
                assert_eq!(pair[0].upper, pair[1].lower);
            }
        }
    }

    #[test]
    fn test_histogram_boundary_value_within_its_bin_edges() {
        // 32.6 is the boundary between bins 9 and 10 for this range
        let values = [3.0, 32.6, 47.4];
        let bins = histogram(&values, 15);
        let slot = bins.iter().position(|b| b.count == 1 && b.lower <= 32.6 && 32.6 < b.upper);
        assert!(slot.is_some());
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn test_histogram_constant_values() {
        let bins = histogram(&[7.5, 7.5, 7.5], 15);
        assert_eq!(bins.len(), 15);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert!(bins[0].lower < 7.5 && bins[14].upper > 7.5);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(histogram(&[], 15).is_empty());
    }

    #[test]
    fn test_quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 0.25), 1.75);
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn test_box_stats_with_outlier() {
        let stats = box_stats("CSE", &[10.0, 12.0, 11.0, 13.0, 12.0, 48.0]).unwrap();
        assert_eq!(stats.count, 6);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 48.0);
        assert_eq!(stats.median, 12.0);
        assert_eq!(stats.q1, 11.25);
        assert_eq!(stats.q3, 12.75);
        assert_eq!(stats.lower_whisker, 10.0);
        assert_eq!(stats.upper_whisker, 13.0);
        assert_eq!(stats.outliers, vec![48.0]);
    }

    #[test]
    fn test_box_stats_single_value() {
        let stats = box_stats("IT", &[21.5]).unwrap();
        assert_eq!(stats.q1, 21.5);
        assert_eq!(stats.q3, 21.5);
        assert_eq!(stats.lower_whisker, 21.5);
        assert!(stats.outliers.is_empty());
        assert!(box_stats("IT", &[]).is_none());
    }

    #[test]
    fn test_pearson() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let r = pearson(&xs, &[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        let r = pearson(&xs, &[8.0, 6.0, 4.0, 2.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
        assert!(pearson(&xs, &[5.0, 5.0, 5.0, 5.0]).is_none());
        assert!(pearson(&[1.0], &[2.0]).is_none());
    }
}
