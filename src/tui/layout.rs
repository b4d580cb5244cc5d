//! Dashboard layout and widget rendering.
//!
//! Every widget renders from `app.snapshot` alone; the layout never reaches
//! into the engine.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

use super::runtime::App;
use super::style;
use crate::devices::Device;
use crate::home::power::DrawLevel;

/// Renders the full dashboard frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Length(3),  // current power
            Constraint::Length(6),  // device cards
            Constraint::Min(8),     // hourly chart
            Constraint::Length(12), // action log
            Constraint::Length(1),  // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_power(frame, app, chunks[1]);
    render_devices(frame, app, chunks[2]);
    render_chart(frame, app, chunks[3]);
    render_log(frame, app, chunks[4]);
    render_footer(frame, chunks[5]);
}

/// Header bar: title and current hour.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " HOME-SIM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " Smart Home Controller │ hour {:02} ",
            app.current_hour()
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Current power figure with its draw-level label.
fn render_power(frame: &mut Frame, app: &App, area: Rect) {
    let power_w = app.snapshot.power_w;
    let level = match DrawLevel::from_power_w(power_w) {
        DrawLevel::Low => "Low",
        DrawLevel::Medium => "Medium",
        DrawLevel::High => "High",
        DrawLevel::VeryHigh => "Very High",
    };

    let line = Line::from(Span::styled(
        format!("  {power_w:.1} W  ({level})"),
        Style::default()
            .fg(style::draw_color(power_w))
            .add_modifier(Modifier::BOLD),
    ));
    let block = Block::default().title(" Current Power ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// One line per device: name, status, own draw.
fn render_devices(frame: &mut Frame, app: &App, area: Rect) {
    let d = &app.snapshot.devices;

    let card = |device: &dyn Device, active: bool| {
        let accent = if active {
            style::DEVICE_ON
        } else {
            style::DEVICE_OFF
        };
        Line::from(vec![
            Span::raw(format!("  {:<18}", device.id().display_name())),
            Span::styled(format!("{:<16}", device.status()), Style::default().fg(accent)),
            Span::raw(format!("{:>7.1} W", device.power_w())),
        ])
    };

    let lines = vec![
        card(&d.light, d.light.on),
        card(&d.door, d.door.locked),
        card(&d.thermostat, d.thermostat.on),
        card(&d.fan, d.fan.speed > 0),
    ];

    let block = Block::default().title(" Devices ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 24-bar hourly power chart with draw-level colors; the current hour's
/// label is highlighted.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let current_hour = app.current_hour();

    let bars: Vec<Bar> = app
        .snapshot
        .history_w
        .iter()
        .enumerate()
        .map(|(hour, &power_w)| {
            let label = if hour == current_hour {
                Line::from(Span::styled(
                    format!("{hour}"),
                    Style::default()
                        .fg(style::CURRENT_HOUR)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("{hour}"))
            };
            Bar::default()
                .value(power_w.round() as u64)
                .label(label)
                .style(Style::default().fg(style::draw_color(power_w)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Power Consumption (24 hours) ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(3)
        .bar_gap(1)
        .max(app.chart_max_w().round() as u64);

    frame.render_widget(chart, area);
}

/// Action log head, newest first.
fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.snapshot.log_head.is_empty() {
        vec![Line::from("  No recent actions")]
    } else {
        app.snapshot
            .log_head
            .iter()
            .map(|e| Line::from(format!("  {e}")))
            .collect()
    };

    let block = Block::default().title(" Action Log ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  l:Light  d:Door  t:Thermostat  Up/Down:Setpoint  0-3:Fan",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
