use crate::error::{FetchError, Operation};
use crate::events::AppEvent;
use crate::gateway::DataGateway;
use crate::nav::{Completion, Effect, Timer};
use color_eyre::eyre::{eyre, Result};
use std::future::Future;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::mpsc::UnboundedSender;

fn cause(e: &color_eyre::eyre::Report) -> String {
    format!("{e:#}")
}

/// Runs one fetch effect to completion. Non-fetch effects yield `None`.
pub async fn perform(gateway: &dyn DataGateway, effect: &Effect) -> Option<Completion> {
    let completion = match effect {
        Effect::FetchRepositories { ticket } => Completion::Repositories {
            ticket: *ticket,
            result: gateway
                .list_repositories()
                .await
                .map_err(|e| FetchError::new(Operation::ListRepositories, cause(&e))),
        },
        Effect::FetchBuilds { ticket, repo, page } => Completion::Builds {
            ticket: *ticket,
            result: gateway
                .list_builds(repo, *page)
                .await
                .map_err(|e| FetchError::new(Operation::ListBuilds, cause(&e))),
        },
        Effect::FetchBuild {
            ticket,
            repo,
            number,
        } => Completion::Build {
            ticket: *ticket,
            result: gateway
                .get_build(repo, *number)
                .await
                .map_err(|e| FetchError::new(Operation::GetBuild, cause(&e))),
        },
        Effect::FetchLogs {
            ticket,
            repo,
            build,
            stage,
            step,
        } => Completion::Logs {
            ticket: *ticket,
            build: *build,
            stage: *stage,
            step: *step,
            result: gateway
                .get_log_lines(repo, *build, *stage, *step)
                .await
                .map_err(|e| FetchError::new(Operation::GetLogLines, cause(&e))),
        },
        Effect::Schedule { .. } | Effect::OpenUrl(_) | Effect::Quit => return None,
    };
    Some(completion)
}

/// The completion a fetch effect would have produced had it failed with `cause`.
pub fn failed(effect: &Effect, cause: &str) -> Option<Completion> {
    let completion = match effect {
        Effect::FetchRepositories { ticket } => Completion::Repositories {
            ticket: *ticket,
            result: Err(FetchError::new(Operation::ListRepositories, cause)),
        },
        Effect::FetchBuilds { ticket, .. } => Completion::Builds {
            ticket: *ticket,
            result: Err(FetchError::new(Operation::ListBuilds, cause)),
        },
        Effect::FetchBuild { ticket, .. } => Completion::Build {
            ticket: *ticket,
            result: Err(FetchError::new(Operation::GetBuild, cause)),
        },
        Effect::FetchLogs {
            ticket,
            build,
            stage,
            step,
            ..
        } => Completion::Logs {
            ticket: *ticket,
            build: *build,
            stage: *stage,
            step: *step,
            result: Err(FetchError::new(Operation::GetLogLines, cause)),
        },
        Effect::Schedule { .. } | Effect::OpenUrl(_) | Effect::Quit => return None,
    };
    Some(completion)
}

/// Spawns `fut` and forwards its event. A panic is turned into the event
/// built by `on_crash` so the loop is never left waiting.
pub fn spawn_monitored(
    tx: UnboundedSender<AppEvent>,
    label: &'static str,
    fut: impl Future<Output = Option<AppEvent>> + Send + 'static,
    on_crash: impl FnOnce(String) -> Option<AppEvent> + Send + 'static,
) {
    tokio::spawn(async move {
        let event = match tokio::spawn(fut).await {
            Ok(event) => event,
            Err(join_err) => {
                let msg = if join_err.is_panic() {
                    match join_err.into_panic().downcast::<String>() {
                        Ok(s) => *s,
                        Err(payload) => match payload.downcast::<&str>() {
                            Ok(s) => s.to_string(),
                            Err(_) => "unknown panic".to_string(),
                        },
                    }
                } else {
                    "task cancelled".to_string()
                };
                tracing::error!("{label} panicked: {msg}");
                on_crash(format!("{label} crashed: {msg}"))
            }
        };
        if let Some(event) = event {
            if tx.send(event).is_err() {
                tracing::warn!("{label}: channel closed, dropping result");
            }
        }
    });
}

/// Executes effects on the tokio runtime on behalf of the event loop.
#[derive(Clone)]
pub struct Dispatcher {
    gateway: Arc<dyn DataGateway>,
    tx: UnboundedSender<AppEvent>,
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn DataGateway>, tx: UnboundedSender<AppEvent>) -> Self {
        Self { gateway, tx }
    }

    pub fn dispatch(&self, effect: Effect) {
        match effect {
            Effect::Schedule { timer, after } => self.schedule(timer, after),
            Effect::OpenUrl(url) => self.open(url),
            Effect::Quit => {}
            fetch => self.fetch(fetch),
        }
    }

    fn fetch(&self, effect: Effect) {
        let gateway = Arc::clone(&self.gateway);
        let fallback = effect.clone();
        spawn_monitored(
            self.tx.clone(),
            "fetch",
            async move {
                perform(gateway.as_ref(), &effect)
                    .await
                    .map(AppEvent::Loaded)
            },
            move |msg| failed(&fallback, &msg).map(AppEvent::Loaded),
        );
    }

    fn schedule(&self, timer: Timer, after: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(AppEvent::Timer(timer)).is_err() {
                tracing::warn!(?timer, "channel closed before timer fired");
            }
        });
    }

    fn open(&self, url: String) {
        spawn_monitored(
            self.tx.clone(),
            "open_browser",
            async move {
                open_in_browser(&url).await.err().map(|e| {
                    AppEvent::Error(FetchError::new(Operation::OpenBrowser, cause(&e)))
                })
            },
            |msg| Some(AppEvent::Error(FetchError::new(Operation::OpenBrowser, msg))),
        );
    }
}

/// Launches the platform's URL opener without waiting for it.
pub async fn open_in_browser(url: &str) -> Result<()> {
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(eyre!("Refusing to open non-HTTP URL: {url}"));
    }

    let (cmd, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/C", "start", "", url])
    } else {
        ("xdg-open", vec![url])
    };
    tracing::debug!("opening {url} with {cmd}");
    Command::new(cmd)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| eyre!("Failed to open browser with {cmd}: {e}"))?;
    Ok(())
}
