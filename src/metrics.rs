//! Batch export: a time-dilation sweep as CSV and the chart pair as a PNG.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::{ChartModel, GuideAxis, chart_pair};
use crate::relativity::curves::CurveSet;
use crate::relativity::special::{C, dilated_time, lorentz_factor, max_velocity};
use crate::state::{AppState, InputEvent};

const SWEEP_STEPS: usize = 400;

/// One row of the exported sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub velocity_kms: f64,
    pub velocity_c: f64,
    pub gamma: f64,
    pub observer_s: f64,
}

/// Samples the dilation curve uniformly from rest to the explorable maximum,
/// dilating `proper_seconds` of traveler time at each step.
pub fn dilation_sweep(proper_seconds: f64) -> Vec<SweepRow> {
    let top = max_velocity();
    (0..=SWEEP_STEPS)
        .map(|i| {
            let velocity = top * i as f64 / SWEEP_STEPS as f64;
            let gamma = lorentz_factor(velocity);
            SweepRow {
                velocity_kms: velocity,
                velocity_c: velocity / C,
                gamma,
                observer_s: dilated_time(proper_seconds, gamma),
            }
        })
        .collect()
}

pub fn export_csv(rows: &[SweepRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["velocity_kms", "velocity_c", "gamma", "observer_s"])?;
    for row in rows {
        writer.write_record([
            format!("{:.3}", row.velocity_kms),
            format!("{:.6}", row.velocity_c),
            format!("{:.6}", row.gamma),
            format!("{:.3}", row.observer_s),
        ])?;
    }
    writer.flush()?;
    info!("wrote {} sweep rows to {}", rows.len(), path.display());
    Ok(())
}

/// Renders both chart panels side by side, with the marker placed at
/// `marker_gamma` and guide lines filtered the same way the explorer
/// filters them.
pub fn plot_charts(marker_gamma: f64, path: &Path) -> Result<()> {
    let curves = CurveSet::generate();
    let state = AppState::new().apply(InputEvent::GammaChanged(marker_gamma));
    let models = chart_pair(&state, &curves);

    let root = BitMapBackend::new(path, (1400, 620)).into_drawing_area();
    root.fill(&WHITE)?;
    for (panel, model) in root.split_evenly((1, 2)).iter().zip(models.iter()) {
        draw_panel(panel, model)?;
    }
    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    info!("rendered chart pair to {}", path.display());
    Ok(())
}

fn draw_panel(area: &DrawingArea<BitMapBackend, Shift>, model: &ChartModel) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(model.title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(
            model.window.x[0]..model.window.x[1],
            model.window.y[0]..model.window.y[1],
        )?;

    chart
        .configure_mesh()
        .x_desc(model.x_label)
        .y_desc(model.y_label)
        .draw()?;

    let guide_color = RGBColor(160, 160, 160);
    for guide in &model.guides {
        let segment = match model.guide_axis {
            GuideAxis::Horizontal => [
                (model.window.x[0], guide.gamma),
                (model.window.x[1], guide.gamma),
            ],
            GuideAxis::Vertical => [
                (guide.gamma, model.window.y[0]),
                (guide.gamma, model.window.y[1]),
            ],
        };
        chart
            .draw_series(LineSeries::new(segment, &guide_color))?
            .label(guide.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], &guide_color));
    }

    let curve_label = match model.guide_axis {
        GuideAxis::Horizontal => "γ(v)",
        GuideAxis::Vertical => "v(γ)",
    };
    chart
        .draw_series(LineSeries::new(model.curve.iter().copied(), &BLUE))?
        .label(curve_label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], &BLUE));

    chart.draw_series(std::iter::once(Circle::new(model.marker, 5, RED.filled())))?;

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relativity::special::GAMMA_MAX;

    #[test]
    fn sweep_starts_at_rest_and_ends_at_the_velocity_cap() {
        let rows = dilation_sweep(60.0);
        assert_eq!(rows.len(), SWEEP_STEPS + 1);

        let first = rows[0];
        assert_eq!(first.velocity_kms, 0.0);
        assert_eq!(first.gamma, 1.0);
        assert_eq!(first.observer_s, 60.0);

        let last = rows[rows.len() - 1];
        assert!((last.velocity_kms - max_velocity()).abs() < 1e-9);
        assert!((last.gamma - GAMMA_MAX).abs() < 1e-6);
    }

    #[test]
    fn sweep_gamma_is_monotonic() {
        let rows = dilation_sweep(1.0);
        for pair in rows.windows(2) {
            assert!(pair[1].gamma > pair[0].gamma);
            assert!(pair[1].observer_s > pair[0].observer_s);
        }
    }

    #[test]
    fn csv_export_round_trips() {
        let rows = dilation_sweep(60.0);
        let path =
            std::env::temp_dir().join(format!("gammascope-sweep-{}.csv", std::process::id()));
        export_csv(&rows, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            vec!["velocity_kms", "velocity_c", "gamma", "observer_s"]
        );
        assert_eq!(reader.records().count(), rows.len());
        std::fs::remove_file(&path).unwrap();
    }
}
