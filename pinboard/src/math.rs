//! Float helpers that only need `core`.
//!
//! `f64::floor`/`ceil`/`abs` live in `std`, so the handful the engine needs are spelled out
//! here to keep the crate usable without it.

pub(crate) fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

/// Clamps `v` into `[-max, max]`.
pub(crate) fn clamp_symmetric(v: f64, max: f64) -> f64 {
    if v > max {
        max
    } else if v < -max {
        -max
    } else {
        v
    }
}

/// `floor(v)` as an integer. Non-finite input maps to `0`.
pub(crate) fn floor_i64(v: f64) -> i64 {
    if !v.is_finite() {
        return 0;
    }
    let t = v as i64;
    if (t as f64) > v { t - 1 } else { t }
}

/// `ceil(v)` as an integer. Non-finite input maps to `0`.
pub(crate) fn ceil_i64(v: f64) -> i64 {
    if !v.is_finite() {
        return 0;
    }
    let t = v as i64;
    if (t as f64) < v { t + 1 } else { t }
}

pub(crate) fn floor(v: f64) -> f64 {
    floor_i64(v) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_and_ceil_handle_negatives() {
        assert_eq!(floor_i64(2.5), 2);
        assert_eq!(floor_i64(-2.5), -3);
        assert_eq!(floor_i64(-3.0), -3);
        assert_eq!(ceil_i64(2.1), 3);
        assert_eq!(ceil_i64(-2.1), -2);
        assert_eq!(ceil_i64(4.0), 4);
        assert_eq!(floor_i64(f64::NAN), 0);
    }

    #[test]
    fn clamp_symmetric_caps_both_directions() {
        assert_eq!(clamp_symmetric(3000.0, 90.0), 90.0);
        assert_eq!(clamp_symmetric(-3000.0, 90.0), -90.0);
        assert_eq!(clamp_symmetric(12.0, 90.0), 12.0);
    }
}
