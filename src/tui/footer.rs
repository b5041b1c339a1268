use crate::nav::{Navigator, View};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const ESCAPE_HINT: &str = "Press escape again to exit";

/// Key hints for whatever currently owns the keyboard.
pub fn hints(view: View, filtering: bool, loading: bool) -> &'static [(&'static str, &'static str)] {
    if filtering {
        return &[("type", "filter"), ("Enter", "apply"), ("Esc", "cancel"), ("↑↓", "move")];
    }
    if loading {
        return &[("Esc", "back"), ("r", "refresh"), ("q", "quit")];
    }
    match view {
        View::Spinner => &[("q", "quit")],
        View::Repos => &[
            ("↑↓/jk", "navigate"),
            ("Enter", "builds"),
            ("/", "filter"),
            ("a", "inactive"),
            ("o", "open"),
            ("r", "refresh"),
            ("Esc Esc", "quit"),
        ],
        View::Builds => &[
            ("↑↓/jk", "navigate"),
            ("Enter", "logs"),
            ("/", "filter"),
            ("o", "open"),
            ("r", "refresh"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
        View::Logs => &[
            ("Tab/S-Tab", "step"),
            ("jk", "scroll"),
            ("gg/G", "top/bottom"),
            ("o", "open"),
            ("r", "refresh"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
    }
}

pub fn render(f: &mut Frame, area: Rect, nav: &Navigator) {
    let line = if nav.escape_hint() {
        Line::from(Span::styled(ESCAPE_HINT, Style::default().fg(Color::Yellow)))
    } else {
        let loading = nav.screen().is_loading() && nav.view() != View::Spinner;
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in hints(nav.view(), nav.input_context().filtering, loading)
            .iter()
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {desc}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
