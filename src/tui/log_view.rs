use crate::logs::LogTabs;
use crate::tui::{ansi, spinner};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const NO_STEPS: &str = "No steps found in this build.";

pub fn lines(tabs: &LogTabs, height: usize, frame: usize) -> Vec<Line<'static>> {
    let Some(tab) = tabs.active_tab() else {
        return vec![Line::from(Span::styled(
            NO_STEPS,
            Style::default().fg(Color::DarkGray),
        ))];
    };
    match tab.content() {
        None => vec![spinner::line(frame, &format!("Loading {} logs...", tab.name))],
        Some(content) => content
            .lines()
            .skip(tabs.scroll())
            .take(height)
            .map(ansi::parse_line)
            .collect(),
    }
}

pub fn render(f: &mut Frame, area: Rect, tabs: &LogTabs, frame: usize) {
    let lines = lines(tabs, area.height as usize, frame);
    f.render_widget(Paragraph::new(lines), area);
}
