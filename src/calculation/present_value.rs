//! Present value discounting
//!
//! Index in the slice is the number of elapsed periods; index 0 is time zero
//! and is never discounted.

/// Present value of a stream of amounts: sum of `v[t] / (1 + rate)^t`
///
/// No guard on the rate: `rate = -1` divides by zero for `t >= 1` and the
/// resulting infinities/NaNs propagate to the caller.
pub fn present_value(values: &[f64], rate: f64) -> f64 {
    values
        .iter()
        .enumerate()
        .map(|(t, &v)| v / (1.0 + rate).powf(t as f64))
        .sum()
}
