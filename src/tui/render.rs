//! Frame layout: header, one line per meter, help line.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::meter::mode;

use super::state::AppState;
use super::style::{Styles, to_line};

/// Renders the whole dashboard.
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(state.rows.len() as u16),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_header(frame, chunks[0], state);
    render_meters(frame, chunks[1], state);
    render_help(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Time
        Constraint::Length(10), // Mode
        Constraint::Min(10),    // Samples
    ])
    .split(area);

    let time_str = state
        .last_update
        .map(|dt: DateTime<Local>| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "----".to_string());
    frame.render_widget(
        Paragraph::new(format!(" {}", time_str)).style(Styles::header()),
        chunks[0],
    );

    let mode_str = if state.paused { " PAUSED " } else { " LIVE " };
    frame.render_widget(Paragraph::new(mode_str).style(Styles::header()), chunks[1]);

    frame.render_widget(
        Paragraph::new(format!("samples: {} ", state.samples))
            .style(Styles::header())
            .right_aligned(),
        chunks[2],
    );
}

fn render_meters(frame: &mut Frame, area: Rect, state: &AppState) {
    let width = area.width as usize;
    let lines: Vec<Line> = state
        .rows
        .iter()
        .map(|row| to_line(&mode::render(row.meter.as_ref(), row.mode, width)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, label) in [("q", "quit"), ("m", "mode"), ("p", "pause"), ("Space", "refresh")] {
        spans.push(Span::styled(format!(" {}", key), Styles::help_key()));
        spans.push(Span::styled(format!(" {} ", label), Styles::dim()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{MockFs, ProcMemory};
    use crate::meter::{MemoryMeter, Meter, MeterMode};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_line(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_text_mode_row() {
        let meters: Vec<Box<dyn Meter>> = vec![Box::new(MemoryMeter::new(ProcMemory::new(
            MockFs::typical_system(),
            "/proc",
        )))];
        let mut state = AppState::new(meters, Some(MeterMode::Text));
        state.refresh();

        let mut terminal = Terminal::new(TestBackend::new(80, 5)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();

        let row = buffer_line(&terminal, 1);
        assert!(row.starts_with("Mem:15.6G used:5.13G"));
        assert!(buffer_line(&terminal, 0).contains("LIVE"));
        assert!(buffer_line(&terminal, 4).contains("quit"));
    }

    #[test]
    fn test_render_bar_mode_row() {
        let meters: Vec<Box<dyn Meter>> = vec![Box::new(MemoryMeter::new(ProcMemory::new(
            MockFs::typical_system(),
            "/proc",
        )))];
        let mut state = AppState::new(meters, None);
        state.refresh();
        state.paused = true;

        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();

        let row = buffer_line(&terminal, 1);
        assert!(row.starts_with("Mem["));
        assert!(row.trim_end().ends_with("5.13G/15.6G]"));
        assert!(buffer_line(&terminal, 0).contains("PAUSED"));
    }
}
