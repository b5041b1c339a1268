use crate::status::StatusLine;
use crate::tui::spinner;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn line(status: &StatusLine, frame: usize) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (i, crumb) in status.breadcrumb.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            crumb.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(message) = &status.message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if !status.tabs.is_empty() {
        spans.push(Span::styled("  │", Style::default().fg(Color::DarkGray)));
        for tab in &status.tabs {
            let marker = if tab.loaded {
                String::new()
            } else {
                format!("{} ", spinner::frame(frame))
            };
            let style = if tab.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {marker}{} ", tab.name), style));
        }
    }

    if let Some(indicator) = status.indicator {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("● {indicator}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

pub fn render(f: &mut Frame, area: Rect, status: &StatusLine, frame: usize) {
    if status.is_empty() {
        return;
    }
    f.render_widget(Paragraph::new(line(status, frame)), area);
}
