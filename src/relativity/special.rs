/// Speed of light in km/s.
pub const C: f64 = 299_792.458;

/// Largest Lorentz factor the explorer exposes. γ = 320 is the top of the
/// widest chart window and corresponds to v ≈ 0.9999951 c.
pub const GAMMA_MAX: f64 = 320.0;

/// Lorentz factor γ = 1 / sqrt(1 - v^2/c^2).
///
/// Returns `f64::INFINITY` at `v == C` and NaN beyond it. The control
/// boundary clamps every input to `[0, max_velocity()]`, so in-app callers
/// never reach either case.
pub fn lorentz_factor(v: f64) -> f64 {
    1.0 / (1.0 - (v * v) / (C * C)).sqrt()
}

/// Inverse of [`lorentz_factor`]: v = c * sqrt(1 - 1/γ^2), defined for γ >= 1.
pub fn velocity_for_gamma(gamma: f64) -> f64 {
    C * (1.0 - 1.0 / (gamma * gamma)).sqrt()
}

/// Observer-frame duration for `proper` seconds on the moving clock: t = γ·t0
pub fn dilated_time(proper: f64, gamma: f64) -> f64 {
    proper * gamma
}

/// Velocity matching [`GAMMA_MAX`], the upper end of the explorable range.
pub fn max_velocity() -> f64 {
    velocity_for_gamma(GAMMA_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_at_rest_is_one() {
        assert_eq!(lorentz_factor(0.0), 1.0);
    }

    #[test]
    fn velocity_at_gamma_one_is_zero() {
        assert_eq!(velocity_for_gamma(1.0), 0.0);
    }

    #[test]
    fn gamma_diverges_at_light_speed() {
        assert!(lorentz_factor(C).is_infinite());
    }

    #[test]
    fn velocity_round_trip() {
        for frac in [0.0, 0.1, 0.25, 0.5, 0.9, 0.99, 0.999] {
            let v = frac * C;
            let back = velocity_for_gamma(lorentz_factor(v));
            assert!((back - v).abs() < 1e-6, "v = {v} km/s came back as {back}");
        }
    }

    #[test]
    fn gamma_round_trip() {
        for gamma in [1.0, 1.0001, 1.05, 2.0, 10.0, 50.0, GAMMA_MAX] {
            let back = lorentz_factor(velocity_for_gamma(gamma));
            assert!((back - gamma).abs() < 1e-6, "γ = {gamma} came back as {back}");
        }
    }

    #[test]
    fn lorentz_factor_strictly_increasing() {
        let mut prev = lorentz_factor(0.0);
        for i in 1..100 {
            let gamma = lorentz_factor(C * 0.9999 * i as f64 / 100.0);
            assert!(gamma > prev, "not increasing at step {i}");
            prev = gamma;
        }
    }

    #[test]
    fn velocity_for_gamma_strictly_increasing() {
        let mut prev = velocity_for_gamma(1.0);
        for i in 1..100 {
            let v = velocity_for_gamma(1.0 + (GAMMA_MAX - 1.0) * i as f64 / 100.0);
            assert!(v > prev, "not increasing at step {i}");
            prev = v;
        }
    }

    #[test]
    fn dilation_scales_with_gamma() {
        assert_eq!(dilated_time(60.0, 1.0), 60.0);
        assert_eq!(dilated_time(60.0, 8.0), 480.0);
    }

    #[test]
    fn explorable_range_is_consistent() {
        let v = max_velocity();
        assert!(v < C);
        assert!((lorentz_factor(v) - GAMMA_MAX).abs() < 1e-6);
    }
}
