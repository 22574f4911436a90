/// Collapses a salary fork into one representative monthly figure.
///
/// Bounds that are absent, zero or negative carry no information and are
/// treated alike. With both bounds the estimate is the midpoint; with only
/// a lower bound it is inflated by 20%, with only an upper bound deflated
/// by 20%. All results are floored to whole currency units.
pub fn estimate_salary(lower: Option<i64>, upper: Option<i64>) -> Option<u64> {
    let lower = lower.filter(|v| *v > 0).map(|v| v as u64);
    let upper = upper.filter(|v| *v > 0).map(|v| v as u64);

    match (lower, upper) {
        (Some(lo), Some(hi)) => Some((lo + hi) / 2),
        (Some(lo), None) => Some(lo + lo / 5),
        (None, Some(hi)) => Some(hi * 4 / 5),
        (None, None) => None,
    }
}
