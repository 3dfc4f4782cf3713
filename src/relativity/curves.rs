//! Static sample tables drawn as the curve backdrop of each chart.
//!
//! Both generators are pure: every call yields the same ordered table, so a
//! renderer can regenerate them at will. Each curve is sampled in two
//! segments, a uniform body plus a refined stretch where one axis compresses
//! the other, keeping the drawn line smooth at every zoom window.

use super::special::{C, GAMMA_MAX, lorentz_factor, velocity_for_gamma};

/// Samples in the uniform body of each curve.
const BODY_SAMPLES: usize = 400;
/// Extra samples packed into the asymptotic tail of the velocity → γ curve.
const TAIL_SAMPLES: usize = 160;
/// The γ → velocity curve is sampled finely up to here, covering the two
/// near-rest zoom windows.
const GAMMA_FINE_END: f64 = 2.5;
const FINE_SAMPLES: usize = 300;
const COARSE_SAMPLES: usize = 320;

/// Velocity (km/s) on x against the Lorentz factor on y.
///
/// Uniform in velocity up to 0.99 c, then uniform in γ up to [`GAMMA_MAX`]
/// so the near-c blowup keeps its shape at the widest zoom.
pub fn velocity_to_gamma_curve() -> Vec<(f64, f64)> {
    let knee = 0.99 * C;
    let mut points = Vec::with_capacity(BODY_SAMPLES + TAIL_SAMPLES + 1);
    for i in 0..=BODY_SAMPLES {
        let v = knee * i as f64 / BODY_SAMPLES as f64;
        points.push((v, lorentz_factor(v)));
    }
    let gamma_knee = lorentz_factor(knee);
    for i in 1..=TAIL_SAMPLES {
        let gamma = gamma_knee + (GAMMA_MAX - gamma_knee) * i as f64 / TAIL_SAMPLES as f64;
        points.push((velocity_for_gamma(gamma), gamma));
    }
    points
}

/// Lorentz factor on x against velocity (km/s) on y.
pub fn gamma_to_velocity_curve() -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(FINE_SAMPLES + COARSE_SAMPLES + 1);
    for i in 0..=FINE_SAMPLES {
        let gamma = 1.0 + (GAMMA_FINE_END - 1.0) * i as f64 / FINE_SAMPLES as f64;
        points.push((gamma, velocity_for_gamma(gamma)));
    }
    for i in 1..=COARSE_SAMPLES {
        let gamma = GAMMA_FINE_END + (GAMMA_MAX - GAMMA_FINE_END) * i as f64 / COARSE_SAMPLES as f64;
        points.push((gamma, velocity_for_gamma(gamma)));
    }
    points
}

/// Both backdrops, generated once per process and borrowed by the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub velocity_to_gamma: Vec<(f64, f64)>,
    pub gamma_to_velocity: Vec<(f64, f64)>,
}

impl CurveSet {
    pub fn generate() -> Self {
        Self {
            velocity_to_gamma: velocity_to_gamma_curve(),
            gamma_to_velocity: gamma_to_velocity_curve(),
        }
    }
}
