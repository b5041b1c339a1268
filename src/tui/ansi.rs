use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::iter::Peekable;
use std::str::Chars;

const ESC: char = '\x1b';
const BEL: char = '\x07';

const BASIC: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
];

const BRIGHT: [Color; 8] = [
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

/// Turns one line of step output into styled spans. SGR sequences become
/// span styles; every other escape sequence and carriage returns are dropped.
pub fn parse_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut style = Style::default();
    let mut text = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ESC => {
                let Some(params) = skip_escape(&mut chars) else {
                    continue;
                };
                if !text.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut text), style));
                }
                style = apply_sgr(style, &params);
            }
            '\r' => {}
            c => text.push(c),
        }
    }
    if !text.is_empty() {
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

/// Consumes the sequence following ESC. Yields the parameters only when it
/// was SGR (`ESC [ ... m`).
fn skip_escape(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    match chars.next()? {
        '[' => {
            let mut params = String::new();
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    return (c == 'm').then_some(params);
                }
                params.push(c);
            }
            None
        }
        ']' => {
            // OSC ends at BEL or ESC \
            while let Some(c) = chars.next() {
                if c == BEL {
                    break;
                }
                if c == ESC && chars.peek() == Some(&'\\') {
                    chars.next();
                    break;
                }
            }
            None
        }
        _ => None,
    }
}

fn apply_sgr(mut style: Style, params: &str) -> Style {
    let mut codes = params.split(';').map(|p| p.parse::<u16>().unwrap_or(0));
    while let Some(code) = codes.next() {
        style = match code {
            0 => Style::default(),
            1 => style.add_modifier(Modifier::BOLD),
            2 => style.add_modifier(Modifier::DIM),
            3 => style.add_modifier(Modifier::ITALIC),
            4 => style.add_modifier(Modifier::UNDERLINED),
            7 => style.add_modifier(Modifier::REVERSED),
            22 => style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => style.remove_modifier(Modifier::ITALIC),
            24 => style.remove_modifier(Modifier::UNDERLINED),
            27 => style.remove_modifier(Modifier::REVERSED),
            30..=37 => style.fg(BASIC[usize::from(code - 30)]),
            38 => match extended(&mut codes) {
                Some(color) => style.fg(color),
                None => style,
            },
            39 => Style { fg: None, ..style },
            40..=47 => style.bg(BASIC[usize::from(code - 40)]),
            48 => match extended(&mut codes) {
                Some(color) => style.bg(color),
                None => style,
            },
            49 => Style { bg: None, ..style },
            90..=97 => style.fg(BRIGHT[usize::from(code - 90)]),
            100..=107 => style.bg(BRIGHT[usize::from(code - 100)]),
            _ => style,
        };
    }
    style
}

/// `5;n` (256-colour) or `2;r;g;b` (truecolour) after a 38/48.
fn extended(codes: &mut impl Iterator<Item = u16>) -> Option<Color> {
    match codes.next()? {
        5 => Some(Color::Indexed(u8::try_from(codes.next()?).ok()?)),
        2 => {
            let mut channel = || codes.next().and_then(|c| u8::try_from(c).ok());
            Some(Color::Rgb(channel()?, channel()?, channel()?))
        }
        _ => None,
    }
}
