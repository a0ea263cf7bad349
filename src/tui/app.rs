//! TUI application main module
//!
//! Owns the terminal and drives the render/poll/handle loop.

use crate::config::AppConfig;
use crate::tui::event::{EventPoll, TuiEvent, disable_bracketed_paste, enable_bracketed_paste};
use crate::tui::state::{AppState, TuiResult};
use crate::tui::ui::render;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};

/// TUI application
#[derive(Debug)]
pub struct TuiApp {
    /// Terminal
    pub terminal: DefaultTerminal,
    /// Event poller
    pub event_poll: EventPoll,
    /// Application state
    pub state: AppState,
}

impl TuiApp {
    /// Create new TUI application
    pub fn new(config: AppConfig) -> std::io::Result<Self> {
        let terminal = ratatui::init();
        if let Err(e) = enable_bracketed_paste() {
            warn!(error = %e, "Bracketed paste unavailable");
        }

        Ok(Self {
            terminal,
            event_poll: EventPoll::default(),
            state: AppState::new(config),
        })
    }

    /// Set log path
    pub fn set_log_path(&mut self, path: PathBuf) {
        self.state.log_path = Some(path);
    }

    /// Run application until the user confirms exit
    pub fn run(mut self) -> std::io::Result<TuiResult> {
        let outcome = self.event_loop();

        if let Err(e) = disable_bracketed_paste() {
            warn!(error = %e, "Failed to disable bracketed paste");
        }
        ratatui::restore();

        outcome?;
        debug!("TUI closed");
        Ok(self.state.into_result())
    }

    fn event_loop(&mut self) -> std::io::Result<()> {
        render(&mut self.terminal, &mut self.state)?;

        loop {
            match self.event_poll.next() {
                TuiEvent::None => continue,
                TuiEvent::Resize(_, _) => {}
                event => {
                    if self.state.handle_event(event) {
                        return Ok(());
                    }
                }
            }
            render(&mut self.terminal, &mut self.state)?;
        }
    }
}
