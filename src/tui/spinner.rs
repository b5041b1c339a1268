use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const BRAILLE_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn frame(idx: usize) -> char {
    BRAILLE_FRAMES[idx % BRAILLE_FRAMES.len()]
}

pub fn line(idx: usize, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", frame(idx)), Style::default().fg(Color::Yellow)),
        Span::styled(label.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Spinner and label centred in `area`.
pub fn render(f: &mut Frame, area: Rect, idx: usize, label: &str) {
    let rows = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);
    f.render_widget(Paragraph::new(line(idx, label)).centered(), rows[1]);
}
