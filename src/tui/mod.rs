//! Interactive explorer: a control panel over two linked charts.
//!
//! Arrow keys act as sliders with zoom-adaptive steps: one press moves
//! 1/100 of the active window span, so the controls stay usable from
//! γ = 1.001 all the way to γ = 320.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph};
use ratatui::{Frame, Terminal};

use crate::chart::{ChartModel, GuideAxis, chart_pair, select_domains};
use crate::relativity::curves::CurveSet;
use crate::relativity::special::{C, GAMMA_MAX, max_velocity};
use crate::state::{AppState, InputEvent};

/// One arrow press moves 1/100 of the active window span.
const SLIDER_NOTCHES: f64 = 100.0;
/// Step multiplier while Shift is held.
const COARSE_FACTOR: f64 = 10.0;
/// Seconds added or removed from the traveler reference duration per press.
const TIME_STEP: f64 = 10.0;

pub fn start() -> Result<()> {
    info!("entering interactive explorer");
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    crossterm::terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("explorer closed");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let curves = CurveSet::generate();
    let mut state = AppState::new();

    loop {
        terminal.draw(|frame| draw(frame, &state, &curves))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    // Back to rest, γ = 1, 60 s.
                    KeyCode::Char('r') => state = AppState::new(),
                    code => {
                        if let Some(input) = step_event(&state, code, key.modifiers) {
                            state = state.apply(input);
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// Map a key press to a control event, or `None` for unmapped keys.
fn step_event(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Option<InputEvent> {
    let domains = select_domains(state.gamma);
    let factor = if modifiers.contains(KeyModifiers::SHIFT) {
        COARSE_FACTOR
    } else {
        1.0
    };
    let velocity_step = factor * span(domains.velocity_to_gamma.x) / SLIDER_NOTCHES;
    let gamma_step = factor * span(domains.gamma_to_velocity.x) / SLIDER_NOTCHES;

    match code {
        KeyCode::Right => Some(InputEvent::VelocityChanged(state.velocity + velocity_step)),
        KeyCode::Left => Some(InputEvent::VelocityChanged(state.velocity - velocity_step)),
        KeyCode::Up => Some(InputEvent::GammaChanged(state.gamma + gamma_step)),
        KeyCode::Down => Some(InputEvent::GammaChanged(state.gamma - gamma_step)),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(InputEvent::TimeInputChanged(state.time_input + TIME_STEP))
        }
        KeyCode::Char('-') => Some(InputEvent::TimeInputChanged(state.time_input - TIME_STEP)),
        _ => None,
    }
}

fn span(bounds: [f64; 2]) -> f64 {
    bounds[1] - bounds[0]
}

fn draw(frame: &mut Frame, state: &AppState, curves: &CurveSet) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_controls(frame, chunks[0], state);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let models = chart_pair(state, curves);
    for (model, area) in models.iter().zip(halves.iter()) {
        draw_chart(frame, *area, model);
    }

    draw_help(frame, chunks[2]);
}

fn draw_controls(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        " Time dilation ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    let velocity_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio((state.velocity / max_velocity()).clamp(0.0, 1.0))
        .label(format!(
            "v = {:.0} km/s  ({:.4} c)",
            state.velocity,
            state.velocity / C
        ));
    frame.render_widget(velocity_gauge, rows[0]);

    let gamma_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
        .ratio(((state.gamma - 1.0) / (GAMMA_MAX - 1.0)).clamp(0.0, 1.0))
        .label(format!("γ = {:.4}", state.gamma));
    frame.render_widget(gamma_gauge, rows[1]);

    let clocks = Line::from(vec![
        Span::styled("Traveler clock ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.0} s", state.time_input),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  →  observer clock ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.1} s", state.observer_time()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [driving: {}]", state.last_changed.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(clocks), rows[2]);

    let formula = Line::from(Span::styled(
        "γ = 1/√(1 − v²/c²)      t_observer = γ · t_traveler",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(formula), rows[3]);
}

fn draw_chart(frame: &mut Frame, area: Rect, model: &ChartModel) {
    let marker = [model.marker];
    let guide_segments: Vec<[(f64, f64); 2]> = model
        .guides
        .iter()
        .map(|guide| match model.guide_axis {
            GuideAxis::Horizontal => [
                (model.window.x[0], guide.gamma),
                (model.window.x[1], guide.gamma),
            ],
            GuideAxis::Vertical => [
                (guide.gamma, model.window.y[0]),
                (guide.gamma, model.window.y[1]),
            ],
        })
        .collect();

    let mut datasets = Vec::with_capacity(model.guides.len() + 2);
    for (segment, guide) in guide_segments.iter().zip(&model.guides) {
        datasets.push(
            Dataset::default()
                .name(guide.label)
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(segment),
        );
    }
    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(model.curve),
    );
    datasets.push(
        Dataset::default()
            .name("current")
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&marker),
    );

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", model.title)),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .x_axis(
            Axis::default()
                .title(model.x_label)
                .style(Style::default().fg(Color::Gray))
                .bounds(model.window.x)
                .labels(tick_labels(model.window.x)),
        )
        .y_axis(
            Axis::default()
                .title(model.y_label)
                .style(Style::default().fg(Color::Gray))
                .bounds(model.window.y)
                .labels(tick_labels(model.window.y)),
        );
    frame.render_widget(chart, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, action) in [
        ("←/→", "velocity"),
        ("↑/↓", "gamma"),
        ("Shift", "coarse"),
        ("+/-", "traveler time"),
        ("r", "reset"),
        ("q", "quit"),
    ] {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Three tick labels: low, mid, high.
fn tick_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![tick(bounds[0]), tick(mid), tick(bounds[1])]
}

fn tick(value: f64) -> String {
    if value >= 1000.0 {
        format!("{value:.0}")
    } else if value >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn arrow_steps_scale_with_the_active_window() {
        // Tightest zoom: the velocity window spans 0.15 c.
        let state = AppState::new();
        match step_event(&state, KeyCode::Right, KeyModifiers::NONE) {
            Some(InputEvent::VelocityChanged(v)) => {
                assert!((v - C * 0.15 / 100.0).abs() < 1e-9)
            }
            other => panic!("unexpected event {other:?}"),
        }

        // Widest zoom: the window spans the full c.
        let wide = state.apply(InputEvent::GammaChanged(50.0));
        match step_event(&wide, KeyCode::Right, KeyModifiers::NONE) {
            Some(InputEvent::VelocityChanged(v)) => {
                assert!((v - (wide.velocity + C / 100.0)).abs() < 1e-6)
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn shift_steps_are_ten_notches() {
        let state = AppState::new();
        match step_event(&state, KeyCode::Up, KeyModifiers::SHIFT) {
            Some(InputEvent::GammaChanged(g)) => {
                let notch = (1.1 - 1.0) / 100.0;
                assert!((g - (1.0 + 10.0 * notch)).abs() < 1e-9)
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn plus_and_minus_move_the_traveler_clock() {
        let state = AppState::new();
        assert_eq!(
            step_event(&state, KeyCode::Char('+'), KeyModifiers::NONE),
            Some(InputEvent::TimeInputChanged(70.0))
        );
        assert_eq!(
            step_event(&state, KeyCode::Char('-'), KeyModifiers::NONE),
            Some(InputEvent::TimeInputChanged(50.0))
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let state = AppState::new();
        assert_eq!(step_event(&state, KeyCode::Char('x'), KeyModifiers::NONE), None);
        assert_eq!(step_event(&state, KeyCode::Home, KeyModifiers::NONE), None);
    }

    #[test]
    fn tick_labels_shorten_large_values() {
        assert_eq!(tick(0.0), "0.00");
        assert_eq!(tick(1.05), "1.05");
        assert_eq!(tick(12.0), "12.0");
        assert_eq!(tick(299792.458), "299792");
    }

    #[test]
    fn a_full_frame_renders() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let curves = CurveSet::generate();
        let state = AppState::new().apply(InputEvent::GammaChanged(5.0));
        terminal
            .draw(|frame| draw(frame, &state, &curves))
            .unwrap();
    }
}
