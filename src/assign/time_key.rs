/// A total-order key for `f64` time values using IEEE-754 total order
/// (`total_cmp`). This lets show times act as sort and `BTreeSet` keys.
///
/// Negative zero is normalized to positive zero on construction: under
/// `total_cmp`, `-0.0 < +0.0`, which would make a show starting at `-0.0`
/// miss a stage freed at `+0.0` even though the times are numerically equal.
///
/// Non-finite times are rejected during show validation, so no NaN ever
/// reaches a key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimeKey(f64);

impl TimeKey {
    pub(crate) fn new(value: f64) -> Self {
        // `-0.0 + 0.0` is `+0.0`; every other value is unchanged.
        Self(value + 0.0)
    }
}

impl Eq for TimeKey {}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(TimeKey::new(1.0) < TimeKey::new(2.0));
        assert!(TimeKey::new(-1.0) < TimeKey::new(0.0));
        assert_eq!(TimeKey::new(3.5), TimeKey::new(3.5));
    }

    #[test]
    fn test_signed_zeros_compare_equal() {
        assert_eq!(TimeKey::new(-0.0), TimeKey::new(0.0));
        assert!(TimeKey::new(-0.0) >= TimeKey::new(0.0));
    }

    #[test]
    fn test_tuple_ordering_breaks_ties_by_index() {
        let a = (TimeKey::new(5.0), 0usize);
        let b = (TimeKey::new(5.0), 1usize);
        assert!(a < b);
    }
}
