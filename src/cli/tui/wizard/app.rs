use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    DefaultTerminal, Frame,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, warn};

use super::backend::{run_task, Backend};
use super::engine::Wizard;
use super::events::{AppEvent, Task};
use super::state::WizardState;
use super::theme::Theme;
use crate::{InstallerError, Result};

/// Spinner / redraw interval
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Transition function and state
    wizard: Wizard,
    /// Theme for styling
    theme: Theme,
    /// Collaborators for background tasks
    backend: Arc<dyn Backend>,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
}

impl App {
    pub fn new(state: WizardState, theme: Theme, backend: Arc<dyn Backend>) -> Self {
        Self {
            wizard: Wizard::new(state),
            theme,
            backend,
            event_tx: None,
        }
    }

    /// Run the application until the wizard quits. Returns the final state.
    pub async fn run(mut self) -> Result<WizardState> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Input reader. Polls so it notices when the loop has gone away.
        let input_tx = event_tx;
        let reader = tokio::task::spawn_blocking(move || read_input(input_tx));

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        drop(event_rx);
        self.event_tx = None;
        ratatui::restore();
        match reader.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Input reader stopped: {}", e),
            Err(e) => warn!("Input reader task failed: {}", e),
        }

        result?;
        if let Some(reason) = self.wizard.state.input_error.take() {
            return Err(InstallerError::Terminal(reason));
        }
        Ok(self.wizard.state)
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for animations
            let event = match time::timeout(TICK_INTERVAL, event_rx.recv()).await {
                Ok(Some(event)) => event,
                Ok(None) => break, // Channel closed
                Err(_) => AppEvent::Tick,
            };

            if let Some(task) = self.wizard.handle_event(event) {
                self.spawn_task(task);
            }

            if self.wizard.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        super::screens::render(frame, &self.wizard.state, &self.theme);
    }

    /// Run a collaborator call off the event loop and post its completion
    fn spawn_task(&self, task: Task) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            let event = run_task(backend.as_ref(), task).await;
            if tx.send(event).is_err() {
                debug!("Wizard exited before task completed");
            }
        });
    }
}

/// Forward terminal input until the loop goes away. A read failure is posted
/// as [`AppEvent::InputClosed`] so the loop stops instead of waiting forever.
fn read_input(tx: UnboundedSender<AppEvent>) -> Result<()> {
    while !tx.is_closed() {
        match next_input() {
            Ok(Some(app_event)) => {
                if tx.send(app_event).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                let _ = tx.send(AppEvent::InputClosed(e.to_string()));
                return Err(InstallerError::Terminal(e.to_string()));
            }
        }
    }
    Ok(())
}

fn next_input() -> std::io::Result<Option<AppEvent>> {
    if !event::poll(TICK_INTERVAL)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
        _ => None,
    })
}
