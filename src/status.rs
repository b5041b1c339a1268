use crate::logs::LogTabs;
use crate::model::{Build, Repository};
use crate::nav::{Screen, View};

/// Characters of the commit message kept before it is cut with `...`.
pub const MESSAGE_PREVIEW_CHARS: usize = 12;

/// Borrowed snapshot of everything the status line depends on.
#[derive(Debug, Clone, Copy)]
pub struct StatusInput<'a> {
    pub screen: Screen,
    pub view: View,
    /// A load is outstanding while content is still on screen.
    pub loading: bool,
    pub refreshing: bool,
    pub repo: Option<&'a Repository>,
    pub build: Option<&'a Build>,
    /// Present only when the log viewer is the visible view.
    pub tabs: Option<&'a LogTabs>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChip {
    pub name: String,
    pub loaded: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    /// `namespace/name`, then `#number` once a build is open.
    pub breadcrumb: Vec<String>,
    pub message: Option<String>,
    pub tabs: Vec<TabChip>,
    pub indicator: Option<&'static str>,
}

impl StatusLine {
    pub fn is_empty(&self) -> bool {
        self.breadcrumb.is_empty()
            && self.message.is_none()
            && self.tabs.is_empty()
            && self.indicator.is_none()
    }
}

pub fn compose(input: &StatusInput<'_>) -> StatusLine {
    let mut line = StatusLine {
        indicator: indicator(input),
        ..StatusLine::default()
    };

    if matches!(input.view, View::Builds | View::Logs) || input.screen == Screen::LoadingBuilds {
        if let Some(repo) = input.repo {
            line.breadcrumb.push(repo.slug.clone());
        }
    }

    if input.view == View::Logs {
        if let Some(build) = input.build {
            line.breadcrumb.push(format!("#{}", build.number));
            line.message = Some(preview(&build.message));
        }
        if let Some(tabs) = input.tabs {
            line.tabs = tabs
                .tabs()
                .iter()
                .enumerate()
                .map(|(i, t)| TabChip {
                    name: t.name.clone(),
                    loaded: t.is_loaded(),
                    active: i == tabs.active_index(),
                })
                .collect();
        }
    }

    line
}

fn indicator(input: &StatusInput<'_>) -> Option<&'static str> {
    if input.refreshing {
        Some("Refreshing...")
    } else if input.loading && input.screen.is_loading() {
        Some("Loading...")
    } else {
        None
    }
}

/// Single-line commit message cut to [`MESSAGE_PREVIEW_CHARS`].
pub fn preview(message: &str) -> String {
    let flat = message.trim().replace(['\r', '\n'], " ");
    if flat.chars().count() > MESSAGE_PREVIEW_CHARS {
        let cut: String = flat.chars().take(MESSAGE_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        flat
    }
}
