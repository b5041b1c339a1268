use crate::list::{FilterState, ListItem, SelectableList, ITEM_HEIGHT};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw + 1 > max_width {
            result.push('…');
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}

/// First item index to draw so the cursor stays within `capacity` rows of items.
pub fn first_visible(cursor: usize, capacity: usize) -> usize {
    let capacity = capacity.max(1);
    if cursor >= capacity {
        cursor + 1 - capacity
    } else {
        0
    }
}

pub fn lines<T: ListItem + Clone>(
    list: &SelectableList<T>,
    height: usize,
    width: usize,
    empty: &str,
) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    if let Some(title) = list.title() {
        out.push(Line::from(Span::styled(
            format!(" {title}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }

    match list.filter_state() {
        FilterState::Unfiltered => {}
        state => {
            let mut spans = vec![
                Span::styled(" Filter: ", Style::default().fg(Color::Cyan)),
                Span::raw(list.filter_text().to_string()),
            ];
            if state == FilterState::Filtering {
                spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
            }
            out.push(Line::from(spans));
        }
    }

    if list.is_empty() {
        let text = if list.total() > 0 { "No matches" } else { empty };
        out.push(Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(Color::DarkGray),
        )));
        return out;
    }

    let capacity = height.saturating_sub(out.len()) / ITEM_HEIGHT;
    let first = first_visible(list.cursor(), capacity);
    let text_width = width.saturating_sub(2);

    for (i, item) in list
        .visible_items()
        .enumerate()
        .skip(first)
        .take(capacity.max(1))
    {
        let selected = i == list.cursor();
        let (bar, title_style, sub_style) = if selected {
            (
                Span::styled("│ ", Style::default().fg(Color::Magenta)),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Magenta),
            )
        } else {
            (
                Span::raw("  "),
                Style::default().fg(Color::White),
                Style::default().fg(Color::DarkGray),
            )
        };
        out.push(Line::from(vec![
            bar.clone(),
            Span::styled(truncate(&item.title(), text_width), title_style),
        ]));
        out.push(Line::from(vec![
            bar,
            Span::styled(truncate(&item.subtitle(), text_width), sub_style),
        ]));
        out.push(Line::default());
    }
    out
}

pub fn render<T: ListItem + Clone>(f: &mut Frame, area: Rect, list: &SelectableList<T>, empty: &str) {
    let lines = lines(list, area.height as usize, area.width as usize, empty);
    f.render_widget(Paragraph::new(lines), area);
}
