use crate::error::FetchError;
use crate::input::{Action, InputContext, InputScreen};
use crate::list::{ListOutcome, SelectableList, ITEM_HEIGHT};
use crate::logs::LogTabs;
use crate::model::{Build, LogLine, RepoKey, Repository};
use crate::smoothing::{LoadGate, Pending};
use crate::status::StatusInput;
use std::time::{Duration, Instant};

pub const ESCAPE_QUIT_WINDOW: Duration = Duration::from_millis(500);
pub const ESCAPE_HINT_TTL: Duration = Duration::from_secs(2);
pub const ERROR_TTL: Duration = Duration::from_secs(10);
pub const SPINNER_FRAME_COUNT: usize = 10;

/// Rows above the repository list items (title and filter prompt).
const REPO_LIST_CHROME: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    LoadingRepos,
    RepoList,
    LoadingBuilds,
    BuildList,
    LoadingBuild,
    LogViewer,
}

impl Screen {
    pub fn is_loading(self) -> bool {
        matches!(
            self,
            Self::LoadingRepos | Self::LoadingBuilds | Self::LoadingBuild
        )
    }

    /// Navigation depth: repositories are the root.
    pub fn depth(self) -> usize {
        match self {
            Self::LoadingRepos | Self::RepoList => 1,
            Self::LoadingBuilds | Self::BuildList => 2,
            Self::LoadingBuild | Self::LogViewer => 3,
        }
    }
}

/// The component drawn in the body area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Spinner,
    Repos,
    Builds,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    LoadingComplete { ticket: u64 },
    ClearEscapeHint { generation: u64 },
}

#[derive(Debug, Clone)]
pub enum Completion {
    Repositories {
        ticket: u64,
        result: Result<Vec<Repository>, FetchError>,
    },
    Builds {
        ticket: u64,
        result: Result<Vec<Build>, FetchError>,
    },
    Build {
        ticket: u64,
        result: Result<Build, FetchError>,
    },
    Logs {
        ticket: u64,
        build: u64,
        stage: u64,
        step: u64,
        result: Result<Vec<LogLine>, FetchError>,
    },
}

#[derive(Debug, Clone)]
pub enum Msg {
    Action(Action),
    Loaded(Completion),
    Timer(Timer),
    Tick,
    /// Rows available to the body area.
    Resize(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRepositories {
        ticket: u64,
    },
    FetchBuilds {
        ticket: u64,
        repo: RepoKey,
        page: u32,
    },
    FetchBuild {
        ticket: u64,
        repo: RepoKey,
        number: u64,
    },
    FetchLogs {
        ticket: u64,
        repo: RepoKey,
        build: u64,
        stage: u64,
        step: u64,
    },
    Schedule {
        timer: Timer,
        after: Duration,
    },
    OpenUrl(String),
    Quit,
}

/// A fetched result waiting out the minimum loading duration.
#[derive(Debug, Clone)]
enum Payload {
    Repos(Vec<Repository>),
    Builds(Vec<Build>),
    Build(Build),
}

#[derive(Debug, Clone, Default)]
struct EscapeState {
    last_at: Option<Instant>,
    generation: u64,
    hint: bool,
}

/// Owns all screen state. `update` mutates it and returns the effects the
/// event loop has to carry out; it never performs I/O itself. Completions and
/// timers carry the ticket of the load they were issued for and are dropped
/// unless that load is still current.
pub struct Navigator {
    screen: Screen,
    load: Option<LoadGate>,
    pending: Pending<Payload>,
    next_ticket: u64,
    server_url: String,

    all_repos: Vec<Repository>,
    show_inactive: bool,
    repo_list: Option<SelectableList<Repository>>,
    build_list: Option<SelectableList<Build>>,
    log_tabs: Option<LogTabs>,
    selected_repo: Option<Repository>,
    selected_build: Option<Build>,

    error: Option<(FetchError, Instant)>,
    fatal: Option<FetchError>,
    escape: EscapeState,
    spinner_frame: usize,
    body_rows: usize,
    should_quit: bool,
}

impl Navigator {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            screen: Screen::LoadingRepos,
            load: None,
            pending: Pending::default(),
            next_ticket: 0,
            server_url: server_url.into(),
            all_repos: Vec::new(),
            show_inactive: false,
            repo_list: None,
            build_list: None,
            log_tabs: None,
            selected_repo: None,
            selected_build: None,
            error: None,
            fatal: None,
            escape: EscapeState::default(),
            spinner_frame: 0,
            body_rows: 20,
            should_quit: false,
        }
    }

    /// Kicks off the first repository load.
    pub fn start(&mut self, now: Instant) -> Vec<Effect> {
        let ticket = self.begin_load(Screen::LoadingRepos, false, now);
        vec![Effect::FetchRepositories { ticket }]
    }

    pub fn update(&mut self, msg: Msg, now: Instant) -> Vec<Effect> {
        match msg {
            Msg::Action(action) => self.on_action(action, now),
            Msg::Loaded(completion) => self.on_completion(completion, now),
            Msg::Timer(timer) => self.on_timer(timer),
            Msg::Tick => {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAME_COUNT;
                self.prune_error(now);
                Vec::new()
            }
            Msg::Resize(rows) => {
                self.body_rows = rows;
                self.apply_sizes();
                Vec::new()
            }
        }
    }

    // --- accessors ---

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn is_refreshing(&self) -> bool {
        self.load.is_some_and(|l| l.refreshing)
    }

    pub fn has_pending_result(&self) -> bool {
        self.pending.is_parked()
    }

    pub fn repo_list(&self) -> Option<&SelectableList<Repository>> {
        self.repo_list.as_ref()
    }

    pub fn build_list(&self) -> Option<&SelectableList<Build>> {
        self.build_list.as_ref()
    }

    pub fn log_tabs(&self) -> Option<&LogTabs> {
        self.log_tabs.as_ref()
    }

    pub fn selected_repo(&self) -> Option<&Repository> {
        self.selected_repo.as_ref()
    }

    pub fn selected_build(&self) -> Option<&Build> {
        self.selected_build.as_ref()
    }

    pub fn show_inactive(&self) -> bool {
        self.show_inactive
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref().map(|(e, _)| e)
    }

    pub fn fatal(&self) -> Option<&FetchError> {
        self.fatal.as_ref()
    }

    pub fn escape_hint(&self) -> bool {
        self.escape.hint
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Shows a failure that happened outside a fetch (e.g. launching the browser).
    pub fn report_error(&mut self, error: FetchError, now: Instant) {
        self.set_error(error, now);
    }

    /// What the body area shows. Loading screens keep the previous content up.
    pub fn view(&self) -> View {
        match self.screen {
            Screen::LoadingRepos if self.is_refreshing() && self.repo_list.is_some() => View::Repos,
            Screen::LoadingRepos => View::Spinner,
            Screen::RepoList => View::Repos,
            Screen::LoadingBuilds if self.is_refreshing() => View::Builds,
            Screen::LoadingBuilds => View::Repos,
            Screen::BuildList => View::Builds,
            Screen::LoadingBuild if self.is_refreshing() => View::Logs,
            Screen::LoadingBuild => View::Builds,
            Screen::LogViewer => View::Logs,
        }
    }

    pub fn input_context(&self) -> InputContext {
        let (screen, filtering) = match self.screen {
            Screen::RepoList => (
                InputScreen::RepoList,
                self.repo_list.as_ref().is_some_and(SelectableList::is_filtering),
            ),
            Screen::BuildList => (
                InputScreen::BuildList,
                self.build_list.as_ref().is_some_and(SelectableList::is_filtering),
            ),
            Screen::LogViewer => (InputScreen::LogViewer, false),
            Screen::LoadingRepos | Screen::LoadingBuilds | Screen::LoadingBuild => {
                (InputScreen::Loading, false)
            }
        };
        InputContext { screen, filtering }
    }

    pub fn status_input(&self) -> StatusInput<'_> {
        let view = self.view();
        StatusInput {
            screen: self.screen,
            view,
            loading: self.load.is_some() && view != View::Spinner,
            refreshing: self.is_refreshing(),
            repo: self.selected_repo.as_ref(),
            build: self.selected_build.as_ref(),
            tabs: if view == View::Logs {
                self.log_tabs.as_ref()
            } else {
                None
            },
        }
    }

    // --- transitions ---

    fn mint_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    fn begin_load(&mut self, screen: Screen, refreshing: bool, now: Instant) -> u64 {
        let ticket = self.mint_ticket();
        tracing::debug!(?screen, ticket, refreshing, "begin load");
        self.screen = screen;
        self.load = Some(LoadGate::new(ticket, now, refreshing));
        self.pending.clear();
        ticket
    }

    fn settle(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "settle");
        self.screen = screen;
        self.load = None;
        self.pending.clear();
    }

    fn set_error(&mut self, error: FetchError, now: Instant) {
        tracing::warn!("{error}");
        self.error = Some((error, now));
    }

    fn prune_error(&mut self, now: Instant) {
        if self
            .error
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= ERROR_TTL)
        {
            self.error = None;
        }
    }

    fn on_action(&mut self, action: Action, now: Instant) -> Vec<Effect> {
        match action {
            Action::None => Vec::new(),
            Action::Quit => {
                self.should_quit = true;
                vec![Effect::Quit]
            }
            Action::Refresh => self.refresh(now),
            _ => match self.screen {
                Screen::RepoList => self.repo_list_action(&action, now),
                Screen::BuildList => self.build_list_action(&action, now),
                Screen::LogViewer => self.log_viewer_action(&action),
                Screen::LoadingRepos | Screen::LoadingBuilds | Screen::LoadingBuild => {
                    if action == Action::Back {
                        self.abandon_load();
                    }
                    Vec::new()
                }
            },
        }
    }

    fn refresh(&mut self, now: Instant) -> Vec<Effect> {
        let refreshing = match self.screen {
            Screen::RepoList | Screen::BuildList | Screen::LogViewer => true,
            // A refresh during a load supersedes it and keeps its backdrop.
            _ => self.is_refreshing(),
        };
        match self.screen {
            Screen::RepoList | Screen::LoadingRepos => {
                let ticket = self.begin_load(Screen::LoadingRepos, refreshing, now);
                vec![Effect::FetchRepositories { ticket }]
            }
            Screen::BuildList | Screen::LoadingBuilds => {
                let Some(repo) = self.selected_repo.as_ref().map(Repository::key) else {
                    return Vec::new();
                };
                let ticket = self.begin_load(Screen::LoadingBuilds, refreshing, now);
                vec![Effect::FetchBuilds {
                    ticket,
                    repo,
                    page: 1,
                }]
            }
            Screen::LogViewer | Screen::LoadingBuild => {
                let (Some(repo), Some(number)) = (
                    self.selected_repo.as_ref().map(Repository::key),
                    self.selected_build.as_ref().map(|b| b.number),
                ) else {
                    return Vec::new();
                };
                let ticket = self.begin_load(Screen::LoadingBuild, refreshing, now);
                vec![Effect::FetchBuild {
                    ticket,
                    repo,
                    number,
                }]
            }
        }
    }

    /// Back out of a load that hasn't finished. The completion becomes stale.
    fn abandon_load(&mut self) {
        match self.screen {
            Screen::LoadingBuilds => {
                self.build_list = None;
                self.settle(Screen::RepoList);
            }
            Screen::LoadingBuild => {
                self.log_tabs = None;
                self.selected_build = None;
                self.settle(Screen::BuildList);
            }
            // Repositories are the root; nothing to go back to.
            _ => {}
        }
    }

    fn repo_list_action(&mut self, action: &Action, now: Instant) -> Vec<Effect> {
        let Some(list) = self.repo_list.as_mut() else {
            return Vec::new();
        };
        match list.handle(action) {
            ListOutcome::Selected(repo) => {
                let key = repo.key();
                self.selected_repo = Some(repo);
                self.selected_build = None;
                let ticket = self.begin_load(Screen::LoadingBuilds, false, now);
                vec![Effect::FetchBuilds {
                    ticket,
                    repo: key,
                    page: 1,
                }]
            }
            ListOutcome::Consumed => Vec::new(),
            ListOutcome::Ignored => match action {
                Action::Back => self.escape_pressed(now),
                Action::ToggleInactive => {
                    self.show_inactive = !self.show_inactive;
                    self.repo_list = Some(self.make_repo_list());
                    Vec::new()
                }
                Action::OpenBrowser => list
                    .selected()
                    .map(|r| vec![Effect::OpenUrl(format!("{}/{}", self.server_url, r.slug))])
                    .unwrap_or_default(),
                _ => Vec::new(),
            },
        }
    }

    /// Esc on the root screen: first press arms, second within the window quits.
    fn escape_pressed(&mut self, now: Instant) -> Vec<Effect> {
        if self
            .escape
            .last_at
            .is_some_and(|at| now.saturating_duration_since(at) < ESCAPE_QUIT_WINDOW)
        {
            self.escape.hint = false;
            self.should_quit = true;
            return vec![Effect::Quit];
        }
        self.escape.last_at = Some(now);
        self.escape.hint = true;
        self.escape.generation += 1;
        vec![Effect::Schedule {
            timer: Timer::ClearEscapeHint {
                generation: self.escape.generation,
            },
            after: ESCAPE_HINT_TTL,
        }]
    }

    fn build_list_action(&mut self, action: &Action, now: Instant) -> Vec<Effect> {
        let Some(list) = self.build_list.as_mut() else {
            return Vec::new();
        };
        match list.handle(action) {
            ListOutcome::Selected(build) => {
                let Some(repo) = self.selected_repo.as_ref().map(Repository::key) else {
                    return Vec::new();
                };
                let number = build.number;
                self.selected_build = Some(build);
                let ticket = self.begin_load(Screen::LoadingBuild, false, now);
                vec![Effect::FetchBuild {
                    ticket,
                    repo,
                    number,
                }]
            }
            ListOutcome::Consumed => Vec::new(),
            ListOutcome::Ignored => match action {
                Action::Back => {
                    self.build_list = None;
                    self.selected_build = None;
                    self.settle(Screen::RepoList);
                    Vec::new()
                }
                Action::OpenBrowser => {
                    let url = match (self.selected_repo.as_ref(), list.selected()) {
                        (Some(repo), Some(build)) => {
                            format!("{}/{}/{}", self.server_url, repo.slug, build.number)
                        }
                        _ => return Vec::new(),
                    };
                    vec![Effect::OpenUrl(url)]
                }
                _ => Vec::new(),
            },
        }
    }

    fn log_viewer_action(&mut self, action: &Action) -> Vec<Effect> {
        if let Some(tabs) = self.log_tabs.as_mut() {
            if tabs.handle(action) {
                return Vec::new();
            }
        }
        match action {
            Action::Back => {
                self.log_tabs = None;
                self.selected_build = None;
                self.settle(Screen::BuildList);
                Vec::new()
            }
            Action::OpenBrowser => match (self.selected_repo.as_ref(), self.selected_build.as_ref())
            {
                (Some(repo), Some(build)) => vec![Effect::OpenUrl(format!(
                    "{}/{}/{}",
                    self.server_url, repo.slug, build.number
                ))],
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn on_completion(&mut self, completion: Completion, now: Instant) -> Vec<Effect> {
        match completion {
            Completion::Logs {
                ticket,
                build,
                stage,
                step,
                result,
            } => {
                let applied = self.log_tabs.as_mut().is_some_and(|tabs| {
                    tabs.ticket() == ticket
                        && tabs.build_number() == build
                        && tabs.apply_logs(stage, step, result)
                });
                if !applied {
                    tracing::debug!(ticket, build, stage, step, "dropping stale log completion");
                }
                Vec::new()
            }
            Completion::Repositories { ticket, result } => {
                self.accept(Screen::LoadingRepos, ticket, result.map(Payload::Repos), now)
            }
            Completion::Builds { ticket, result } => {
                self.accept(Screen::LoadingBuilds, ticket, result.map(Payload::Builds), now)
            }
            Completion::Build { ticket, result } => {
                self.accept(Screen::LoadingBuild, ticket, result.map(Payload::Build), now)
            }
        }
    }

    fn accept(
        &mut self,
        expected: Screen,
        ticket: u64,
        result: Result<Payload, FetchError>,
        now: Instant,
    ) -> Vec<Effect> {
        let Some(gate) = self.load.filter(|l| l.ticket == ticket && self.screen == expected)
        else {
            tracing::debug!(?expected, ticket, "dropping stale completion");
            return Vec::new();
        };

        match result {
            Err(e) => self.fail(e, gate, now),
            Ok(payload) => match gate.hold_for(now) {
                Some(remaining) => {
                    self.pending.park(ticket, payload);
                    vec![Effect::Schedule {
                        timer: Timer::LoadingComplete { ticket },
                        after: remaining,
                    }]
                }
                None => self.commit(payload, ticket),
            },
        }
    }

    fn fail(&mut self, error: FetchError, gate: LoadGate, now: Instant) -> Vec<Effect> {
        match self.screen {
            Screen::LoadingRepos if gate.refreshing && self.repo_list.is_some() => {
                self.set_error(error, now);
                self.settle(Screen::RepoList);
                Vec::new()
            }
            Screen::LoadingRepos => {
                tracing::error!("{error}");
                self.fatal = Some(error);
                self.load = None;
                self.should_quit = true;
                vec![Effect::Quit]
            }
            Screen::LoadingBuilds => {
                self.set_error(error, now);
                if gate.refreshing && self.build_list.is_some() {
                    self.settle(Screen::BuildList);
                } else {
                    self.build_list = None;
                    self.settle(Screen::RepoList);
                }
                Vec::new()
            }
            Screen::LoadingBuild => {
                self.set_error(error, now);
                if gate.refreshing && self.log_tabs.is_some() {
                    self.settle(Screen::LogViewer);
                } else {
                    self.selected_build = None;
                    self.settle(Screen::BuildList);
                }
                Vec::new()
            }
            Screen::RepoList | Screen::BuildList | Screen::LogViewer => Vec::new(),
        }
    }

    fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::LoadingComplete { ticket } => {
                let current = self.load.is_some_and(|l| l.ticket == ticket);
                match self.pending.take(ticket) {
                    Some(payload) if current => self.commit(payload, ticket),
                    _ => {
                        tracing::debug!(ticket, "ignoring stale loading timer");
                        Vec::new()
                    }
                }
            }
            Timer::ClearEscapeHint { generation } => {
                if generation == self.escape.generation {
                    self.escape.hint = false;
                }
                Vec::new()
            }
        }
    }

    fn commit(&mut self, payload: Payload, ticket: u64) -> Vec<Effect> {
        self.error = None;
        match payload {
            Payload::Repos(repos) => {
                self.all_repos = repos;
                let mut list = self.make_repo_list();
                list.start_filtering();
                self.repo_list = Some(list);
                self.settle(Screen::RepoList);
                Vec::new()
            }
            Payload::Builds(builds) => {
                let mut list = SelectableList::new(builds);
                list.set_page_size(self.body_rows / ITEM_HEIGHT);
                self.build_list = Some(list);
                self.settle(Screen::BuildList);
                Vec::new()
            }
            Payload::Build(build) => {
                let Some(repo) = self.selected_repo.as_ref().map(Repository::key) else {
                    self.settle(Screen::BuildList);
                    return Vec::new();
                };
                let mut tabs = LogTabs::new(&build, ticket);
                tabs.set_height(self.body_rows);
                let effects = tabs
                    .step_keys()
                    .into_iter()
                    .map(|(stage, step)| Effect::FetchLogs {
                        ticket,
                        repo: repo.clone(),
                        build: build.number,
                        stage,
                        step,
                    })
                    .collect();
                self.log_tabs = Some(tabs);
                self.selected_build = Some(build);
                self.settle(Screen::LogViewer);
                effects
            }
        }
    }

    fn make_repo_list(&self) -> SelectableList<Repository> {
        let repos: Vec<Repository> = self
            .all_repos
            .iter()
            .filter(|r| self.show_inactive || r.active)
            .cloned()
            .collect();
        let title = if self.show_inactive {
            "Repositories (showing all)"
        } else {
            "Repositories"
        };
        let mut list = SelectableList::new(repos).with_title(title);
        list.set_page_size(self.body_rows.saturating_sub(REPO_LIST_CHROME) / ITEM_HEIGHT);
        list
    }

    fn apply_sizes(&mut self) {
        let rows = self.body_rows;
        if let Some(list) = self.repo_list.as_mut() {
            list.set_page_size(rows.saturating_sub(REPO_LIST_CHROME) / ITEM_HEIGHT);
        }
        if let Some(list) = self.build_list.as_mut() {
            list.set_page_size(rows / ITEM_HEIGHT);
        }
        if let Some(tabs) = self.log_tabs.as_mut() {
            tabs.set_height(rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;
    use crate::model::{BuildStatus, BuildSummary, Stage, Step};
    use pretty_assertions::assert_eq;

    const SERVER: &str = "https://drone.example.com";

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    fn repo(slug: &str, active: bool) -> Repository {
        let (namespace, name) = slug.split_once('/').unwrap();
        Repository {
            namespace: namespace.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            active,
            build: BuildSummary {
                number: 4,
                status: BuildStatus::Success,
                finished: 0,
            },
        }
    }

    fn sample_repos() -> Vec<Repository> {
        vec![
            repo("octo/api", true),
            repo("octo/legacy", false),
            repo("octo/web", true),
        ]
    }

    fn build(number: u64) -> Build {
        Build {
            number,
            status: BuildStatus::Running,
            message: "fix the thing".to_string(),
            stages: vec![Stage {
                number: 1,
                name: "default".to_string(),
                steps: vec![
                    Step {
                        number: 1,
                        name: "clone".to_string(),
                        ..Default::default()
                    },
                    Step {
                        number: 2,
                        name: "build".to_string(),
                        ..Default::default()
                    },
                ],
            }],
            ..Default::default()
        }
    }

    fn failure(operation: Operation) -> FetchError {
        FetchError::new(operation, "HTTP 500: Internal Server Error")
    }

    fn act(nav: &mut Navigator, action: Action, now: Instant) -> Vec<Effect> {
        nav.update(Msg::Action(action), now)
    }

    fn load(nav: &mut Navigator, completion: Completion, now: Instant) -> Vec<Effect> {
        nav.update(Msg::Loaded(completion), now)
    }

    fn api_key() -> RepoKey {
        repo("octo/api", true).key()
    }

    /// Repository list shown with the filter prompt closed. Ticket 1 used.
    fn on_repo_list(t0: Instant) -> Navigator {
        let mut nav = Navigator::new(SERVER);
        nav.start(t0);
        load(
            &mut nav,
            Completion::Repositories {
                ticket: 1,
                result: Ok(sample_repos()),
            },
            at(t0, 600),
        );
        act(&mut nav, Action::FilterCancel, at(t0, 700));
        assert_eq!(nav.screen(), Screen::RepoList);
        nav
    }

    /// Build list for octo/api. Tickets 1..=2 used.
    fn on_build_list(t0: Instant) -> Navigator {
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Select, at(t0, 1000));
        load(
            &mut nav,
            Completion::Builds {
                ticket: 2,
                result: Ok(vec![build(9), build(8)]),
            },
            at(t0, 2000),
        );
        assert_eq!(nav.screen(), Screen::BuildList);
        nav
    }

    /// Log viewer for build #9. Tickets 1..=3 used.
    fn on_log_viewer(t0: Instant) -> Navigator {
        let mut nav = on_build_list(t0);
        act(&mut nav, Action::Select, at(t0, 3000));
        load(
            &mut nav,
            Completion::Build {
                ticket: 3,
                result: Ok(build(9)),
            },
            at(t0, 4000),
        );
        assert_eq!(nav.screen(), Screen::LogViewer);
        nav
    }

    #[test]
    fn start_fetches_repositories_behind_spinner() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        assert_eq!(nav.start(t0), vec![Effect::FetchRepositories { ticket: 1 }]);
        assert_eq!(nav.screen(), Screen::LoadingRepos);
        assert_eq!(nav.view(), View::Spinner);
    }

    #[test]
    fn fast_result_waits_out_minimum_loading_duration() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        nav.start(t0);

        let effects = load(
            &mut nav,
            Completion::Repositories {
                ticket: 1,
                result: Ok(sample_repos()),
            },
            at(t0, 100),
        );
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::LoadingComplete { ticket: 1 },
                after: Duration::from_millis(400),
            }]
        );
        assert_eq!(nav.screen(), Screen::LoadingRepos);
        assert!(nav.has_pending_result());

        nav.update(Msg::Timer(Timer::LoadingComplete { ticket: 1 }), at(t0, 500));
        assert_eq!(nav.screen(), Screen::RepoList);
        assert!(!nav.has_pending_result());
    }

    #[test]
    fn slow_result_commits_immediately() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        nav.start(t0);
        let effects = load(
            &mut nav,
            Completion::Repositories {
                ticket: 1,
                result: Ok(sample_repos()),
            },
            at(t0, 750),
        );
        assert!(effects.is_empty());
        assert_eq!(nav.screen(), Screen::RepoList);
    }

    #[test]
    fn repo_list_starts_filtering_and_hides_inactive() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        nav.start(t0);
        load(
            &mut nav,
            Completion::Repositories {
                ticket: 1,
                result: Ok(sample_repos()),
            },
            at(t0, 600),
        );
        let list = nav.repo_list().unwrap();
        assert!(list.is_filtering());
        assert!(nav.input_context().filtering);
        let slugs: Vec<&str> = list.visible_items().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["octo/api", "octo/web"]);
        assert_eq!(list.title(), Some("Repositories"));
    }

    #[test]
    fn first_repository_failure_is_fatal() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        nav.start(t0);
        let effects = load(
            &mut nav,
            Completion::Repositories {
                ticket: 1,
                result: Err(failure(Operation::ListRepositories)),
            },
            at(t0, 100),
        );
        assert_eq!(effects, vec![Effect::Quit]);
        assert!(nav.should_quit());
        assert_eq!(
            nav.fatal().map(ToString::to_string).as_deref(),
            Some("Error loading repositories: HTTP 500: Internal Server Error")
        );
    }

    #[test]
    fn selecting_repository_fetches_first_page_of_builds() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        let effects = act(&mut nav, Action::Select, at(t0, 1000));
        assert_eq!(
            effects,
            vec![Effect::FetchBuilds {
                ticket: 2,
                repo: api_key(),
                page: 1,
            }]
        );
        assert_eq!(nav.screen(), Screen::LoadingBuilds);
        assert_eq!(nav.view(), View::Repos);
        assert_eq!(nav.selected_repo().map(|r| r.slug.as_str()), Some("octo/api"));
    }

    #[test]
    fn select_while_filtering_is_not_a_navigation() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        nav.start(t0);
        load(
            &mut nav,
            Completion::Repositories {
                ticket: 1,
                result: Ok(sample_repos()),
            },
            at(t0, 600),
        );
        assert!(act(&mut nav, Action::Select, at(t0, 700)).is_empty());
        assert_eq!(nav.screen(), Screen::RepoList);
    }

    #[test]
    fn builds_completion_after_back_is_dropped() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Select, at(t0, 1000));
        act(&mut nav, Action::Back, at(t0, 1100));
        assert_eq!(nav.screen(), Screen::RepoList);

        let effects = load(
            &mut nav,
            Completion::Builds {
                ticket: 2,
                result: Ok(vec![build(1)]),
            },
            at(t0, 1200),
        );
        assert!(effects.is_empty());
        assert_eq!(nav.screen(), Screen::RepoList);
        assert!(nav.build_list().is_none());
    }

    #[test]
    fn completion_for_superseded_repository_is_dropped() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Select, at(t0, 1000));
        act(&mut nav, Action::Back, at(t0, 1100));
        act(&mut nav, Action::MoveDown, at(t0, 1200));
        act(&mut nav, Action::Select, at(t0, 1300));
        assert_eq!(nav.selected_repo().map(|r| r.slug.as_str()), Some("octo/web"));

        // octo/api's builds arrive late
        load(
            &mut nav,
            Completion::Builds {
                ticket: 2,
                result: Ok(vec![build(1)]),
            },
            at(t0, 2000),
        );
        assert_eq!(nav.screen(), Screen::LoadingBuilds);

        load(
            &mut nav,
            Completion::Builds {
                ticket: 3,
                result: Ok(vec![build(5)]),
            },
            at(t0, 2100),
        );
        assert_eq!(nav.screen(), Screen::BuildList);
        assert_eq!(nav.build_list().unwrap().selected().map(|b| b.number), Some(5));
    }

    #[test]
    fn builds_error_returns_to_intact_repo_list() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::MoveDown, at(t0, 900));
        act(&mut nav, Action::Select, at(t0, 1000));
        load(
            &mut nav,
            Completion::Builds {
                ticket: 2,
                result: Err(failure(Operation::ListBuilds)),
            },
            at(t0, 1100),
        );
        assert_eq!(nav.screen(), Screen::RepoList);
        assert_eq!(nav.error().map(|e| e.operation), Some(Operation::ListBuilds));
        let list = nav.repo_list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.cursor(), 1);
        assert!(!nav.should_quit());
    }

    #[test]
    fn build_error_returns_to_build_list() {
        let t0 = Instant::now();
        let mut nav = on_build_list(t0);
        act(&mut nav, Action::Select, at(t0, 3000));
        load(
            &mut nav,
            Completion::Build {
                ticket: 3,
                result: Err(failure(Operation::GetBuild)),
            },
            at(t0, 3100),
        );
        assert_eq!(nav.screen(), Screen::BuildList);
        assert!(nav.error().is_some());
        assert!(nav.selected_build().is_none());
    }

    #[test]
    fn loaded_build_opens_viewer_and_fetches_every_step() {
        let t0 = Instant::now();
        let mut nav = on_build_list(t0);
        act(&mut nav, Action::Select, at(t0, 3000));
        let effects = load(
            &mut nav,
            Completion::Build {
                ticket: 3,
                result: Ok(build(9)),
            },
            at(t0, 4000),
        );
        let fetch = |step| Effect::FetchLogs {
            ticket: 3,
            repo: api_key(),
            build: 9,
            stage: 1,
            step,
        };
        assert_eq!(effects, vec![fetch(1), fetch(2)]);
        assert_eq!(nav.screen(), Screen::LogViewer);
        assert_eq!(nav.log_tabs().unwrap().tabs().len(), 2);
    }

    #[test]
    fn log_completions_apply_in_any_order() {
        let t0 = Instant::now();
        let mut nav = on_log_viewer(t0);
        let logs = |step, text: &str| Completion::Logs {
            ticket: 3,
            build: 9,
            stage: 1,
            step,
            result: Ok(vec![LogLine {
                number: 0,
                message: text.to_string(),
                timestamp: 0,
            }]),
        };
        load(&mut nav, logs(2, "cargo build\n"), at(t0, 4100));
        load(&mut nav, logs(1, "git clone\n"), at(t0, 4200));
        let tabs = nav.log_tabs().unwrap().tabs();
        assert_eq!(tabs[0].content(), Some("git clone"));
        assert_eq!(tabs[1].content(), Some("cargo build"));
    }

    #[test]
    fn log_completion_from_previous_viewer_is_dropped() {
        let t0 = Instant::now();
        let mut nav = on_log_viewer(t0);
        load(
            &mut nav,
            Completion::Logs {
                ticket: 1,
                build: 9,
                stage: 1,
                step: 1,
                result: Ok(vec![]),
            },
            at(t0, 4100),
        );
        load(
            &mut nav,
            Completion::Logs {
                ticket: 3,
                build: 8,
                stage: 1,
                step: 1,
                result: Ok(vec![]),
            },
            at(t0, 4100),
        );
        assert!(nav.log_tabs().unwrap().tabs().iter().all(|t| !t.is_loaded()));
    }

    #[test]
    fn refresh_keeps_build_list_on_screen() {
        let t0 = Instant::now();
        let mut nav = on_build_list(t0);
        let effects = act(&mut nav, Action::Refresh, at(t0, 5000));
        assert_eq!(
            effects,
            vec![Effect::FetchBuilds {
                ticket: 3,
                repo: api_key(),
                page: 1,
            }]
        );
        assert_eq!(nav.screen(), Screen::LoadingBuilds);
        assert!(nav.is_refreshing());
        assert_eq!(nav.view(), View::Builds);

        load(
            &mut nav,
            Completion::Builds {
                ticket: 3,
                result: Ok(vec![build(10), build(9), build(8)]),
            },
            at(t0, 5600),
        );
        assert_eq!(nav.screen(), Screen::BuildList);
        assert_eq!(nav.build_list().unwrap().len(), 3);
        assert!(!nav.is_refreshing());
    }

    #[test]
    fn refresh_keeps_repo_list_on_screen() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Refresh, at(t0, 1000));
        assert_eq!(nav.screen(), Screen::LoadingRepos);
        assert_eq!(nav.view(), View::Repos);
    }

    #[test]
    fn fast_build_list_refresh_keeps_old_list_until_released() {
        let t0 = Instant::now();
        let mut nav = on_build_list(t0);
        act(&mut nav, Action::Refresh, at(t0, 5000));

        let effects = load(
            &mut nav,
            Completion::Builds {
                ticket: 3,
                result: Ok(vec![build(10), build(9), build(8)]),
            },
            at(t0, 5100),
        );
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::LoadingComplete { ticket: 3 },
                after: Duration::from_millis(400),
            }]
        );
        assert!(nav.has_pending_result());
        assert_eq!(nav.screen(), Screen::LoadingBuilds);
        assert_eq!(nav.view(), View::Builds);
        assert_eq!(nav.build_list().unwrap().len(), 2);

        nav.update(Msg::Timer(Timer::LoadingComplete { ticket: 3 }), at(t0, 5500));
        assert_eq!(nav.screen(), Screen::BuildList);
        assert_eq!(nav.view(), View::Builds);
        assert_eq!(nav.build_list().unwrap().len(), 3);
        assert!(!nav.has_pending_result());
    }

    #[test]
    fn fast_repo_list_refresh_keeps_old_list_until_released() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Refresh, at(t0, 1000));

        let effects = load(
            &mut nav,
            Completion::Repositories {
                ticket: 2,
                result: Ok(vec![repo("octo/api", true)]),
            },
            at(t0, 1100),
        );
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::LoadingComplete { ticket: 2 },
                after: Duration::from_millis(400),
            }]
        );
        assert!(nav.has_pending_result());
        assert_eq!(nav.screen(), Screen::LoadingRepos);
        assert_eq!(nav.view(), View::Repos);
        assert_eq!(nav.repo_list().unwrap().len(), 2);

        nav.update(Msg::Timer(Timer::LoadingComplete { ticket: 2 }), at(t0, 1500));
        assert_eq!(nav.screen(), Screen::RepoList);
        assert_eq!(nav.repo_list().unwrap().len(), 1);
    }

    #[test]
    fn failed_repo_refresh_is_not_fatal() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Refresh, at(t0, 1000));
        let effects = load(
            &mut nav,
            Completion::Repositories {
                ticket: 2,
                result: Err(failure(Operation::ListRepositories)),
            },
            at(t0, 1100),
        );
        assert!(effects.is_empty());
        assert_eq!(nav.screen(), Screen::RepoList);
        assert!(nav.fatal().is_none());
        assert!(nav.error().is_some());
    }

    #[test]
    fn failed_log_viewer_refresh_keeps_viewer() {
        let t0 = Instant::now();
        let mut nav = on_log_viewer(t0);
        act(&mut nav, Action::Refresh, at(t0, 5000));
        assert_eq!(nav.view(), View::Logs);
        load(
            &mut nav,
            Completion::Build {
                ticket: 4,
                result: Err(failure(Operation::GetBuild)),
            },
            at(t0, 5100),
        );
        assert_eq!(nav.screen(), Screen::LogViewer);
        assert_eq!(nav.selected_build().map(|b| b.number), Some(9));
    }

    #[test]
    fn refresh_during_load_supersedes_parked_result() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Refresh, at(t0, 1000));
        load(
            &mut nav,
            Completion::Repositories {
                ticket: 2,
                result: Ok(vec![repo("octo/api", true)]),
            },
            at(t0, 1100),
        );
        assert!(nav.has_pending_result());

        act(&mut nav, Action::Refresh, at(t0, 1200));
        assert!(!nav.has_pending_result());
        assert!(nav.is_refreshing());

        // the first refresh's smoothing timer fires into the second load
        nav.update(Msg::Timer(Timer::LoadingComplete { ticket: 2 }), at(t0, 1500));
        assert_eq!(nav.screen(), Screen::LoadingRepos);
    }

    #[test]
    fn stale_loading_timer_is_noop_after_back() {
        let t0 = Instant::now();
        let mut nav = on_build_list(t0);
        act(&mut nav, Action::Select, at(t0, 3000));
        load(
            &mut nav,
            Completion::Build {
                ticket: 3,
                result: Ok(build(9)),
            },
            at(t0, 3100),
        );
        act(&mut nav, Action::Back, at(t0, 3200));
        assert_eq!(nav.screen(), Screen::BuildList);

        let effects = nav.update(Msg::Timer(Timer::LoadingComplete { ticket: 3 }), at(t0, 3500));
        assert!(effects.is_empty());
        assert_eq!(nav.screen(), Screen::BuildList);
        assert!(nav.log_tabs().is_none());
    }

    #[test]
    fn back_walks_up_one_level_at_a_time() {
        let t0 = Instant::now();
        let mut nav = on_log_viewer(t0);
        act(&mut nav, Action::Back, at(t0, 5000));
        assert_eq!(nav.screen(), Screen::BuildList);
        assert!(nav.log_tabs().is_none());
        act(&mut nav, Action::Back, at(t0, 5100));
        assert_eq!(nav.screen(), Screen::RepoList);
        assert!(nav.build_list().is_none());
    }

    #[test]
    fn back_at_root_only_arms_escape() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        let effects = act(&mut nav, Action::Back, at(t0, 1000));
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::ClearEscapeHint { generation: 1 },
                after: ESCAPE_HINT_TTL,
            }]
        );
        assert_eq!(nav.screen(), Screen::RepoList);
        assert!(nav.escape_hint());
        assert!(!nav.should_quit());
    }

    #[test]
    fn double_escape_within_window_quits() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Back, at(t0, 1000));
        assert_eq!(act(&mut nav, Action::Back, at(t0, 1300)), vec![Effect::Quit]);
        assert!(nav.should_quit());
    }

    #[test]
    fn slow_second_escape_rearms() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Back, at(t0, 1000));
        let effects = act(&mut nav, Action::Back, at(t0, 1600));
        assert!(!nav.should_quit());
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::ClearEscapeHint { generation: 2 },
                after: ESCAPE_HINT_TTL,
            }]
        );
    }

    #[test]
    fn outdated_escape_hint_timer_is_noop() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Back, at(t0, 1000));
        act(&mut nav, Action::Back, at(t0, 2000));
        nav.update(
            Msg::Timer(Timer::ClearEscapeHint { generation: 1 }),
            at(t0, 3000),
        );
        assert!(nav.escape_hint());
        nav.update(
            Msg::Timer(Timer::ClearEscapeHint { generation: 2 }),
            at(t0, 4000),
        );
        assert!(!nav.escape_hint());
    }

    #[test]
    fn escape_clears_applied_filter_before_arming() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::StartFilter, at(t0, 1000));
        act(&mut nav, Action::FilterInput('w'), at(t0, 1000));
        act(&mut nav, Action::FilterAccept, at(t0, 1000));
        assert_eq!(nav.repo_list().unwrap().len(), 1);

        assert!(act(&mut nav, Action::Back, at(t0, 1100)).is_empty());
        assert_eq!(nav.repo_list().unwrap().len(), 2);
        assert!(!nav.escape_hint());
    }

    #[test]
    fn back_while_loading_builds_returns_to_repos() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Select, at(t0, 1000));
        act(&mut nav, Action::Back, at(t0, 1050));
        assert_eq!(nav.screen(), Screen::RepoList);
        assert!(!nav.should_quit());
    }

    #[test]
    fn back_while_loading_repositories_is_ignored() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        nav.start(t0);
        assert!(act(&mut nav, Action::Back, at(t0, 100)).is_empty());
        assert_eq!(nav.screen(), Screen::LoadingRepos);
    }

    #[test]
    fn loading_ignores_navigation_keys() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Select, at(t0, 1000));
        assert!(act(&mut nav, Action::MoveDown, at(t0, 1010)).is_empty());
        assert!(act(&mut nav, Action::Select, at(t0, 1020)).is_empty());
        assert_eq!(nav.screen(), Screen::LoadingBuilds);
        assert_eq!(nav.repo_list().unwrap().cursor(), 0);
    }

    #[test]
    fn quit_from_anywhere() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        nav.start(t0);
        assert_eq!(act(&mut nav, Action::Quit, at(t0, 10)), vec![Effect::Quit]);
        assert!(nav.should_quit());
    }

    #[test]
    fn toggle_inactive_rebuilds_list() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::MoveDown, at(t0, 900));
        act(&mut nav, Action::ToggleInactive, at(t0, 1000));
        assert!(nav.show_inactive());
        let list = nav.repo_list().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.cursor(), 0);
        assert!(!list.is_filtering());
        assert_eq!(list.title(), Some("Repositories (showing all)"));

        act(&mut nav, Action::ToggleInactive, at(t0, 1100));
        assert_eq!(nav.repo_list().unwrap().len(), 2);
    }

    #[test]
    fn open_browser_links() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        assert_eq!(
            act(&mut nav, Action::OpenBrowser, at(t0, 800)),
            vec![Effect::OpenUrl(format!("{SERVER}/octo/api"))]
        );

        let mut nav = on_log_viewer(t0);
        assert_eq!(
            act(&mut nav, Action::OpenBrowser, at(t0, 5000)),
            vec![Effect::OpenUrl(format!("{SERVER}/octo/api/9"))]
        );
    }

    #[test]
    fn inline_error_expires_on_tick() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        nav.report_error(FetchError::new(Operation::OpenBrowser, "no opener"), at(t0, 1000));
        nav.update(Msg::Tick, at(t0, 5000));
        assert!(nav.error().is_some());
        nav.update(Msg::Tick, at(t0, 11_000));
        assert!(nav.error().is_none());
    }

    #[test]
    fn successful_load_clears_inline_error() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        act(&mut nav, Action::Select, at(t0, 1000));
        load(
            &mut nav,
            Completion::Builds {
                ticket: 2,
                result: Err(failure(Operation::ListBuilds)),
            },
            at(t0, 1100),
        );
        assert!(nav.error().is_some());
        act(&mut nav, Action::Select, at(t0, 1200));
        load(
            &mut nav,
            Completion::Builds {
                ticket: 3,
                result: Ok(vec![build(1)]),
            },
            at(t0, 1800),
        );
        assert!(nav.error().is_none());
    }

    #[test]
    fn resize_sets_page_size() {
        let t0 = Instant::now();
        let mut nav = on_build_list(t0);
        nav.update(Msg::Resize(9), at(t0, 2500));
        act(&mut nav, Action::PageDown, at(t0, 2600));
        // 9 rows hold three items; only two builds exist
        assert_eq!(nav.build_list().unwrap().cursor(), 1);
    }

    #[test]
    fn unbound_key_breaks_top_jump_on_list() {
        let t0 = Instant::now();
        let mut nav = on_build_list(t0);
        act(&mut nav, Action::MoveDown, at(t0, 2100));
        act(&mut nav, Action::TopPress, at(t0, 2200));
        act(&mut nav, Action::Other, at(t0, 2300));
        act(&mut nav, Action::TopPress, at(t0, 2400));
        assert_eq!(nav.build_list().unwrap().cursor(), 1);

        act(&mut nav, Action::TopPress, at(t0, 2500));
        assert_eq!(nav.build_list().unwrap().cursor(), 0);
    }

    #[test]
    fn unbound_key_breaks_top_jump_in_viewer() {
        let t0 = Instant::now();
        let mut nav = on_log_viewer(t0);
        nav.update(Msg::Resize(3), at(t0, 4050));
        let text = (1..=20).map(|n| format!("line {n}")).collect::<Vec<_>>();
        load(
            &mut nav,
            Completion::Logs {
                ticket: 3,
                build: 9,
                stage: 1,
                step: 1,
                result: Ok(vec![LogLine {
                    number: 0,
                    message: text.join("\n"),
                    timestamp: 0,
                }]),
            },
            at(t0, 4100),
        );
        act(&mut nav, Action::Bottom, at(t0, 4200));
        let bottom = nav.log_tabs().unwrap().scroll();
        assert!(bottom > 0);

        act(&mut nav, Action::TopPress, at(t0, 4300));
        act(&mut nav, Action::Other, at(t0, 4400));
        act(&mut nav, Action::TopPress, at(t0, 4500));
        assert_eq!(nav.log_tabs().unwrap().scroll(), bottom);
    }

    #[test]
    fn tick_advances_spinner() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(SERVER);
        for _ in 0..SPINNER_FRAME_COUNT + 2 {
            nav.update(Msg::Tick, t0);
        }
        assert_eq!(nav.spinner_frame(), 2);
    }

    #[test]
    fn input_context_tracks_screen() {
        let t0 = Instant::now();
        let mut nav = on_repo_list(t0);
        assert_eq!(nav.input_context().screen, InputScreen::RepoList);
        act(&mut nav, Action::Select, at(t0, 1000));
        assert_eq!(nav.input_context().screen, InputScreen::Loading);
    }

    #[test]
    fn depth_follows_hierarchy() {
        assert_eq!(Screen::RepoList.depth(), 1);
        assert_eq!(Screen::LoadingBuilds.depth(), 2);
        assert_eq!(Screen::LogViewer.depth(), 3);
        assert!(Screen::LoadingBuild.is_loading());
        assert!(!Screen::BuildList.is_loading());
    }
}
