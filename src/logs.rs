use crate::error::FetchError;
use crate::input::{Action, DoublePress};
use crate::model::{Build, LogLine};

#[derive(Debug, Clone)]
pub struct StepTab {
    pub name: String,
    pub stage: u64,
    pub step: u64,
    content: String,
    line_count: usize,
    loaded: bool,
}

impl StepTab {
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn content(&self) -> Option<&str> {
        self.loaded.then_some(self.content.as_str())
    }
}

/// One tab per build step. Log completions are matched to a tab by
/// `(stage, step)`; anything else is dropped.
#[derive(Debug, Clone)]
pub struct LogTabs {
    build_number: u64,
    /// Load ticket of the build fetch that produced this viewer.
    ticket: u64,
    tabs: Vec<StepTab>,
    active: usize,
    scroll: usize,
    height: usize,
    top: DoublePress,
}

pub const DEFAULT_VIEW_HEIGHT: usize = 20;

impl LogTabs {
    pub fn new(build: &Build, ticket: u64) -> Self {
        let tabs = build
            .stages
            .iter()
            .flat_map(|stage| {
                stage.steps.iter().map(move |step| StepTab {
                    name: step.name.clone(),
                    stage: stage.number,
                    step: step.number,
                    content: String::new(),
                    line_count: 0,
                    loaded: false,
                })
            })
            .collect();

        Self {
            build_number: build.number,
            ticket,
            tabs,
            active: 0,
            scroll: 0,
            height: DEFAULT_VIEW_HEIGHT,
            top: DoublePress::default(),
        }
    }

    pub fn build_number(&self) -> u64 {
        self.build_number
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn tabs(&self) -> &[StepTab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Option<&StepTab> {
        self.tabs.get(self.active)
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn set_height(&mut self, rows: usize) {
        self.height = rows.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// `(stage, step)` of every tab, in display order.
    pub fn step_keys(&self) -> Vec<(u64, u64)> {
        self.tabs.iter().map(|t| (t.stage, t.step)).collect()
    }

    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + 1) % self.tabs.len();
            self.scroll = 0;
        }
    }

    pub fn prev_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
            self.scroll = 0;
        }
    }

    /// Stores a step's log. Returns `false` when no tab has that key.
    pub fn apply_logs(
        &mut self,
        stage: u64,
        step: u64,
        result: Result<Vec<LogLine>, FetchError>,
    ) -> bool {
        let Some(index) = self
            .tabs
            .iter()
            .position(|t| t.stage == stage && t.step == step)
        else {
            return false;
        };

        let content = match result {
            Ok(lines) => join_lines(&lines),
            Err(e) => format!("Error loading logs: {}", e.cause),
        };
        let tab = &mut self.tabs[index];
        tab.line_count = content.lines().count();
        tab.content = content;
        tab.loaded = true;
        if index == self.active {
            self.scroll = 0;
        }
        true
    }

    /// Scroll handling. Returns `false` for actions the viewer doesn't use.
    pub fn handle(&mut self, action: &Action) -> bool {
        if *action == Action::TopPress {
            if self.top.press() {
                self.scroll = 0;
            }
            return true;
        }
        self.top.reset();

        match action {
            Action::NextTab => self.next_tab(),
            Action::PrevTab => self.prev_tab(),
            Action::MoveUp => self.scroll = self.scroll.saturating_sub(1),
            Action::MoveDown => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(self.height),
            Action::PageDown => self.scroll = (self.scroll + self.height).min(self.max_scroll()),
            Action::Bottom => self.scroll = self.max_scroll(),
            _ => return false,
        }
        true
    }

    fn max_scroll(&self) -> usize {
        self.active_tab()
            .map_or(0, |t| t.line_count.saturating_sub(self.height))
    }
}

fn join_lines(lines: &[LogLine]) -> String {
    lines
        .iter()
        .map(|l| l.message.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
