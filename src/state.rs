//! Synchronized control state for the two linked quantities.
//!
//! One quantity drives and the other is derived, tagged by `last_changed`.
//! Every input goes through a single transition function,
//! `(state, event) -> state`; there is no reactive re-entry. Velocity-driven
//! updates pass the recomputed γ through a ±0.01 dead band before committing
//! (tiny float jitter must not wiggle the marker), while gamma-driven updates
//! always commit the recomputed velocity. The asymmetry is deliberate.

use crate::relativity::special::{
    GAMMA_MAX, dilated_time, lorentz_factor, max_velocity, velocity_for_gamma,
};

/// Half-width of the dead band on the velocity → γ direction.
pub const GAMMA_DEAD_BAND: f64 = 0.01;

/// Traveler-clock reference duration at startup, in seconds.
pub const DEFAULT_TIME_INPUT: f64 = 60.0;

/// Which control the user touched last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Velocity,
    Gamma,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::Velocity => "velocity",
            Control::Gamma => "gamma",
        }
    }
}

/// One message from the control boundary. Raw values are clamped here, so
/// the physics functions never see out-of-domain input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// New velocity in km/s; clamped to `[0, max_velocity()]`.
    VelocityChanged(f64),
    /// New Lorentz factor; clamped to `[1, GAMMA_MAX]`.
    GammaChanged(f64),
    /// New traveler-clock reference duration in seconds; clamped to `>= 0`.
    TimeInputChanged(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    /// Current velocity in km/s.
    pub velocity: f64,
    /// Current Lorentz factor, `>= 1`.
    pub gamma: f64,
    /// Traveler-clock reference duration in seconds.
    pub time_input: f64,
    pub last_changed: Control,
}

impl AppState {
    /// Fresh session state: at rest, γ = 1, 60 s reference duration.
    pub fn new() -> Self {
        Self {
            velocity: 0.0,
            gamma: 1.0,
            time_input: DEFAULT_TIME_INPUT,
            last_changed: Control::Velocity,
        }
    }

    /// The single transition function.
    #[must_use]
    pub fn apply(self, event: InputEvent) -> Self {
        match event {
            InputEvent::VelocityChanged(v) => {
                let velocity = v.clamp(0.0, max_velocity());
                let next_gamma = lorentz_factor(velocity);
                let gamma = if (next_gamma - self.gamma).abs() > GAMMA_DEAD_BAND {
                    next_gamma
                } else {
                    self.gamma
                };
                Self {
                    velocity,
                    gamma,
                    last_changed: Control::Velocity,
                    ..self
                }
            }
            InputEvent::GammaChanged(g) => {
                let gamma = g.clamp(1.0, GAMMA_MAX);
                Self {
                    velocity: velocity_for_gamma(gamma),
                    gamma,
                    last_changed: Control::Gamma,
                    ..self
                }
            }
            InputEvent::TimeInputChanged(t) => Self {
                time_input: t.max(0.0),
                ..self
            },
        }
    }

    /// Observer-frame seconds matching the current reference duration.
    pub fn observer_time(&self) -> f64 {
        dilated_time(self.time_input, self.gamma)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
