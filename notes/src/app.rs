use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app_core::AppCore;
use crate::background::{auth_requester::AuthRequester, TaskHandler};
use crate::input::KeyEvent;
use crate::toast_queue::ToastQueue;
use notes_auth::{AuthGateway, SessionStore, Settings};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct App<G: AuthGateway> {
    settings: Settings,
    gateway: Arc<G>,
    session: SessionStore,
}

impl<G: AuthGateway> App<G> {
    pub fn new(settings: Settings, gateway: G) -> Self {
        Self {
            settings,
            gateway: Arc::new(gateway),
            session: SessionStore::new(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!("notes starting, server at {}", self.settings.server_url);

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();
        let requester = AuthRequester::new(self.gateway.clone(), data_tx);

        let mut core = AppCore::new(
            TaskHandler::new(requester),
            ToastQueue::new(self.settings.toast_duration()),
            self.session.clone(),
        );

        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, core.state(), core.notifier());
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    core.tick();
                    core.notifier_mut().prune_at(Instant::now());
                }
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        // Key contents are never logged: they may be password characters
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            core.handle_key(KeyEvent::from(key));
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {}", data_event.name());
                    core.handle_data_event(data_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        // Abandon in-flight requests
        core.handler_mut().shutdown();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
