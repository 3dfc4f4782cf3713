//! Chart windows, guide lines, and the view models handed to renderers.
//!
//! The zoom table and the guide candidates are fixed, ordered threshold
//! tables keyed by the current Lorentz factor, so boundary behavior can be
//! checked row by row. Renderers (the live TUI and the PNG export) consume
//! only [`ChartModel`] and stay free of selection logic.

use crate::relativity::curves::CurveSet;
use crate::relativity::special::{C, GAMMA_MAX};
use crate::state::AppState;

/// One zoom row, active while `gamma <= max_gamma`. Velocity spans are
/// fractions of c; both charts share the row, mirrored.
struct ZoomBracket {
    max_gamma: f64,
    velocity_top: f64,
    gamma_top: f64,
}

/// Ascending by `max_gamma`; the last row catches everything else.
const ZOOM_BRACKETS: [ZoomBracket; 4] = [
    ZoomBracket { max_gamma: 1.1, velocity_top: 0.15, gamma_top: 1.1 },
    ZoomBracket { max_gamma: 2.0, velocity_top: 0.9, gamma_top: 2.5 },
    ZoomBracket { max_gamma: 10.0, velocity_top: 0.995, gamma_top: 12.0 },
    ZoomBracket { max_gamma: f64::INFINITY, velocity_top: 1.0, gamma_top: GAMMA_MAX },
];

/// A `[min, max]` pair per axis, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartWindow {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// The selected windows for both charts. Chart B mirrors chart A's axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomDomains {
    pub velocity_to_gamma: ChartWindow,
    pub gamma_to_velocity: ChartWindow,
}

/// Pure zoom selection: the first row whose `max_gamma` is not exceeded
/// wins. Total over all inputs; NaN falls through to the widest row.
pub fn select_domains(gamma: f64) -> ZoomDomains {
    let row = ZOOM_BRACKETS
        .iter()
        .find(|row| gamma <= row.max_gamma)
        .unwrap_or(&ZOOM_BRACKETS[ZOOM_BRACKETS.len() - 1]);
    let velocity = [0.0, C * row.velocity_top];
    let gamma_axis = [1.0, row.gamma_top];
    ZoomDomains {
        velocity_to_gamma: ChartWindow { x: velocity, y: gamma_axis },
        gamma_to_velocity: ChartWindow { x: gamma_axis, y: velocity },
    }
}

/// How a guide line crosses its chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideAxis {
    Horizontal,
    Vertical,
}

/// A labeled constant-γ guide line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub gamma: f64,
    pub label: &'static str,
}

/// Candidates for the velocity → γ chart, drawn horizontally.
const VELOCITY_CHART_GUIDES: [GuideLine; 3] = [
    GuideLine { gamma: 2.0, label: "γ = 2" },
    GuideLine { gamma: 5.0, label: "γ = 5" },
    GuideLine { gamma: 10.0, label: "γ = 10" },
];

/// Candidates for the γ → velocity chart, drawn vertically.
const GAMMA_CHART_GUIDES: [GuideLine; 7] = [
    GuideLine { gamma: 2.0, label: "γ = 2" },
    GuideLine { gamma: 5.0, label: "γ = 5" },
    GuideLine { gamma: 10.0, label: "γ = 10" },
    GuideLine { gamma: 50.0, label: "γ = 50" },
    GuideLine { gamma: 100.0, label: "γ = 100" },
    GuideLine { gamma: 200.0, label: "γ = 200" },
    GuideLine { gamma: 320.0, label: "γ = 320" },
];

fn visible_guides(candidates: &'static [GuideLine], top: f64) -> Vec<GuideLine> {
    candidates.iter().copied().filter(|g| g.gamma <= top).collect()
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel<'a> {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Static backdrop, ordered by x.
    pub curve: &'a [(f64, f64)],
    /// The user's current pair. May fall outside `window` at small γ;
    /// renderers clip it.
    pub marker: (f64, f64),
    pub window: ChartWindow,
    pub guide_axis: GuideAxis,
    pub guides: Vec<GuideLine>,
}

/// Compose both chart views for the current state.
pub fn chart_pair<'a>(state: &AppState, curves: &'a CurveSet) -> [ChartModel<'a>; 2] {
    let domains = select_domains(state.gamma);
    [
        ChartModel {
            title: "Velocity → Lorentz factor",
            x_label: "Velocity (km/s)",
            y_label: "Lorentz factor γ",
            curve: &curves.velocity_to_gamma,
            marker: (state.velocity, state.gamma),
            window: domains.velocity_to_gamma,
            guide_axis: GuideAxis::Horizontal,
            guides: visible_guides(&VELOCITY_CHART_GUIDES, domains.velocity_to_gamma.y[1]),
        },
        ChartModel {
            title: "Lorentz factor → Velocity",
            x_label: "Lorentz factor γ",
            y_label: "Velocity (km/s)",
            curve: &curves.gamma_to_velocity,
            marker: (state.gamma, state.velocity),
            window: domains.gamma_to_velocity,
            guide_axis: GuideAxis::Vertical,
            guides: visible_guides(&GAMMA_CHART_GUIDES, domains.gamma_to_velocity.x[1]),
        },
    ]
}
