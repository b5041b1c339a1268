use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    Back,
    Select,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// One press of the "top" key; two in a row jump to the top.
    TopPress,
    Bottom,
    NextTab,
    PrevTab,
    ToggleInactive,
    OpenBrowser,
    StartFilter,
    FilterInput(char),
    FilterBackspace,
    FilterAccept,
    FilterCancel,
    /// A key with no binding on this screen. Still breaks a pending "gg".
    Other,
    None,
}

/// Which kind of screen is taking input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputScreen {
    #[default]
    Loading,
    RepoList,
    BuildList,
    LogViewer,
}

/// Captures the UI state needed to interpret a key press.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub screen: InputScreen,
    pub filtering: bool,
}

pub fn map_key(key: KeyEvent, ctx: &InputContext) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && ctrl {
        return Action::Quit;
    }

    // Filter prompt owns the keyboard until it is closed
    if ctx.filtering {
        return match key.code {
            KeyCode::Esc => Action::FilterCancel,
            KeyCode::Enter => Action::FilterAccept,
            KeyCode::Backspace => Action::FilterBackspace,
            KeyCode::Up => Action::MoveUp,
            KeyCode::Down => Action::MoveDown,
            KeyCode::Char(c) if !ctrl => Action::FilterInput(c),
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('r') => return Action::Refresh,
        KeyCode::Esc | KeyCode::Backspace => return Action::Back,
        _ => {}
    }

    match ctx.screen {
        InputScreen::Loading => Action::None,
        InputScreen::RepoList | InputScreen::BuildList => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::Char('u') if ctrl => Action::PageUp,
            KeyCode::Char('d') if ctrl => Action::PageDown,
            KeyCode::Char('g') => Action::TopPress,
            KeyCode::Char('G') => Action::Bottom,
            KeyCode::Enter => Action::Select,
            KeyCode::Char('/') => Action::StartFilter,
            KeyCode::Char('o') => Action::OpenBrowser,
            KeyCode::Char('a') if ctx.screen == InputScreen::RepoList => Action::ToggleInactive,
            _ => Action::Other,
        },
        InputScreen::LogViewer => match key.code {
            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PrevTab,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::Char('u') if ctrl => Action::PageUp,
            KeyCode::Char('d') if ctrl => Action::PageDown,
            KeyCode::Char('g') => Action::TopPress,
            KeyCode::Char('G') => Action::Bottom,
            KeyCode::Char('o') => Action::OpenBrowser,
            _ => Action::Other,
        },
    }
}

/// Two-press detector for "gg". Each navigable component owns its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoublePress {
    count: u8,
}

impl DoublePress {
    /// Registers a press; returns `true` when it completes a pair.
    pub fn press(&mut self) -> bool {
        self.count += 1;
        if self.count >= 2 {
            self.count = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.count > 0
    }
}
