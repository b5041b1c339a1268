use crate::events::{AppEvent, EventHandler};
use crate::fetch::Dispatcher;
use crate::input;
use crate::nav::{Effect, Msg, Navigator};
use crate::tui::render;
use color_eyre::eyre::Result;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Translates one event into navigator input.
pub fn handle_event(nav: &mut Navigator, event: AppEvent, now: Instant) -> Vec<Effect> {
    let msg = match event {
        AppEvent::Key(key) => Msg::Action(input::map_key(key, &nav.input_context())),
        AppEvent::Tick => Msg::Tick,
        AppEvent::Resize { height, .. } => Msg::Resize(render::body_rows(height)),
        AppEvent::Loaded(completion) => Msg::Loaded(completion),
        AppEvent::Timer(timer) => Msg::Timer(timer),
        AppEvent::Error(err) => {
            nav.report_error(err, now);
            return Vec::new();
        }
    };
    nav.update(msg, now)
}

pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    nav: &mut Navigator,
    events: &mut EventHandler,
    dispatcher: &Dispatcher,
) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let size = terminal.size()?;
    nav.update(Msg::Resize(render::body_rows(size.height)), Instant::now());
    for effect in nav.start(Instant::now()) {
        dispatcher.dispatch(effect);
    }

    while !nav.should_quit() {
        terminal.draw(|f| render::render(f, nav))?;

        let Some(event) = events.next().await else {
            tracing::warn!("event channel closed");
            break;
        };
        for effect in handle_event(nav, event, Instant::now()) {
            dispatcher.dispatch(effect);
        }
    }
    Ok(())
}
