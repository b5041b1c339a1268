use crate::error::FetchError;
use crate::nav::{Completion, Timer};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;

/// Everything the event loop reacts to, one at a time.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    Loaded(Completion),
    Timer(Timer),
    /// A side effect outside the navigator failed.
    Error(FetchError),
}

/// Reads terminal input on a dedicated thread and merges it with whatever
/// background tasks send through [`EventHandler::sender`].
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = shutdown.clone();

        let thread = std::thread::spawn(move || {
            while !shutdown_flag.load(Ordering::Relaxed) {
                let sent = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => event_tx.send(AppEvent::Key(key)),
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            event_tx.send(AppEvent::Resize { width, height })
                        }
                        _ => Ok(()),
                    }
                } else {
                    event_tx.send(AppEvent::Tick)
                };
                if sent.is_err() {
                    break;
                }
            }
        });

        Self {
            rx,
            tx,
            shutdown,
            thread: Some(thread),
        }
    }

    /// A channel with no input thread, for driving the loop from tests.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            rx,
            tx,
            shutdown: Arc::new(AtomicBool::new(true)),
            thread: None,
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}
