use crate::nav::{Navigator, View};
use crate::status;
use crate::tui::{footer, header, list_view, log_view, spinner, status_bar};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const HEADER_ROWS: u16 = 2;
const STATUS_ROWS: u16 = 1;
const FOOTER_ROWS: u16 = 2;

/// Rows left for the body on a terminal `height` rows tall.
pub fn body_rows(height: u16) -> usize {
    height.saturating_sub(HEADER_ROWS + STATUS_ROWS + FOOTER_ROWS) as usize
}

pub fn render(f: &mut Frame, nav: &Navigator) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_ROWS),
        Constraint::Length(STATUS_ROWS),
        Constraint::Min(1),
        Constraint::Length(FOOTER_ROWS),
    ])
    .split(f.area());

    header::render(f, chunks[0], nav);
    status_bar::render(
        f,
        chunks[1],
        &status::compose(&nav.status_input()),
        nav.spinner_frame(),
    );

    let body = chunks[2];
    match nav.view() {
        View::Spinner => spinner::render(f, body, nav.spinner_frame(), "Loading repositories..."),
        View::Repos => {
            if let Some(list) = nav.repo_list() {
                list_view::render(f, body, list, "No repositories");
            }
        }
        View::Builds => {
            if let Some(list) = nav.build_list() {
                list_view::render(f, body, list, "No builds");
            }
        }
        View::Logs => {
            if let Some(tabs) = nav.log_tabs() {
                log_view::render(f, body, tabs, nav.spinner_frame());
            }
        }
    }

    footer::render(f, chunks[3], nav);

    if let Some(err) = nav.error() {
        render_error(f, &err.to_string());
    }
}

fn render_error(f: &mut Frame, message: &str) {
    let area = f.area();
    if area.height <= 6 || area.width < 4 {
        return;
    }
    let err_area = Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(5),
        width: area.width.saturating_sub(2),
        height: 3,
    };
    let err_widget = Paragraph::new(message.to_owned())
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, err_area);
    f.render_widget(err_widget, err_area);
}
