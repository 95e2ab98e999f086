use crate::models::{Distribution, RankedEntry};

/// Fraction `part / whole`.
///
/// Zero-denominator sentinel: returns `0.0` when `whole == 0`. This is the
/// crate-wide convention for empty data ("no events yet"), applied
/// uniformly; no division helper ever returns NaN or infinity, and none
/// panics.
pub fn percentage_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}

/// Ratio `a / b` with the same `0.0` zero-denominator sentinel as
/// [`percentage_of`].
pub fn ratio(a: u64, b: u64) -> f64 {
    percentage_of(a, b)
}

/// Mean of `total` over `count`, with the `0.0` zero-denominator sentinel.
pub fn average(total: u64, count: u64) -> f64 {
    percentage_of(total, count)
}

/// Top `top_n` entries of a distribution, sorted descending by count.
///
/// The sort is stable, so ties keep the distribution's insertion order.
pub fn rank(dist: &Distribution, top_n: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = dist
        .iter()
        .map(|(key, count)| RankedEntry {
            key: key.to_string(),
            count,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(74, 250), 0.296);
        assert_eq!(percentage_of(0, 100), 0.0);
        assert_eq!(percentage_of(100, 100), 1.0);
    }

    #[test]
    fn test_percentage_of_zero_denominator_sentinel() {
        let result = percentage_of(5, 0);
        assert_eq!(result, 0.0);
        assert!(!result.is_nan());
        assert!(result.is_finite());
    }

    #[test]
    fn test_ratio_and_average_share_the_guard() {
        assert_eq!(ratio(1279, 0), 0.0);
        assert_eq!(average(250, 0), 0.0);
        assert_eq!(average(250, 10), 25.0);
    }

    #[test]
    fn test_rank_orders_descending() {
        let dist: Distribution = [("gpt-4", 74), ("gpt-3.5", 49), ("lamma", 61), ("mixtral", 66)]
            .into_iter()
            .collect();

        let top = rank(&dist, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].key, "gpt-4");
        assert_eq!(top[0].count, 74);
        assert_eq!(top[1].key, "mixtral");
        assert_eq!(top[1].count, 66);
    }

    #[test]
    fn test_rank_breaks_ties_by_insertion_order() {
        let dist: Distribution = [("a", 10), ("b", 10), ("c", 5)].into_iter().collect();

        let top = rank(&dist, 2);
        assert_eq!(top[0].key, "a");
        assert_eq!(top[1].key, "b");
    }

    #[test]
    fn test_rank_top_n_beyond_len() {
        let dist: Distribution = [("only", 1)].into_iter().collect();
        assert_eq!(rank(&dist, 5).len(), 1);
        assert!(rank(&Distribution::new(), 5).is_empty());
    }
}
