//! Zero-safe averaging shared by every assembler. Rounding policy lives here
//! and nowhere else.

/// Rounds half toward positive infinity, so `72.5` becomes `73` and `-0.5`
/// becomes `0`.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Arithmetic mean rounded half-up; `0` for an empty sequence.
pub fn average<I>(values: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0i64), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        return 0;
    }

    round_half_up(sum as f64 / count as f64)
}

/// `numerator / denominator` as a rounded percentage; `0` when the
/// denominator is zero.
pub fn ratio_percent(numerator: i64, denominator: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }

    round_half_up(numerator as f64 * 100.0 / denominator as f64)
}
