//! Angle normalization and bisection shared by the searches.

use crate::anga_types::SearchConfig;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to [-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Bisect to find the zero crossing of a scalar function between t_a and t_b.
///
/// `f_a` is the function value at `t_a`; the caller guarantees a sign change
/// somewhere in the bracket.
pub(crate) fn bisect_zero<F, E>(
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    config: &SearchConfig,
    f_at: F,
) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    for _ in 0..config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid)?;

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < config.convergence_days {
            break;
        }
    }

    Ok(0.5 * (t_a + t_b))
}
