//! Event handling module
//!
//! Uses crossterm for terminal event handling.

use crossterm::{
    ExecutableCommand,
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
};
use std::time::Duration;

/// Event poll interval (milliseconds)
const TICK_RATE: u64 = 50;

/// Event type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
    Home,
    End,
    /// Character input
    Char(char),
    /// Bracketed paste
    Paste(String),
    /// Ctrl+C / Ctrl+D
    CtrlC,
    /// Window resize
    Resize(u16, u16),
    /// No event (timeout or ignored input)
    None,
}

impl From<Event> for TuiEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => key_event.into(),
            Event::Resize(width, height) => TuiEvent::Resize(width, height),
            Event::Paste(text) => TuiEvent::Paste(text),
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost => TuiEvent::None,
        }
    }
}

impl From<KeyEvent> for TuiEvent {
    fn from(key: KeyEvent) -> Self {
        // Ignore release and repeat
        if key.kind != KeyEventKind::Press {
            return TuiEvent::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            return TuiEvent::CtrlC;
        }

        match key.code {
            KeyCode::Esc => TuiEvent::Escape,
            KeyCode::Enter => TuiEvent::Enter,
            KeyCode::Up => TuiEvent::Up,
            KeyCode::Down => TuiEvent::Down,
            KeyCode::Left => TuiEvent::Left,
            KeyCode::Right => TuiEvent::Right,
            KeyCode::Tab => TuiEvent::Tab,
            KeyCode::BackTab => TuiEvent::BackTab,
            KeyCode::Backspace => TuiEvent::Backspace,
            KeyCode::Delete => TuiEvent::Delete,
            KeyCode::Home => TuiEvent::Home,
            KeyCode::End => TuiEvent::End,
            KeyCode::Char(c) => TuiEvent::Char(c),
            _ => TuiEvent::None,
        }
    }
}

/// Event poller
#[derive(Debug)]
pub struct EventPoll {
    tick_rate: Duration,
}

impl EventPoll {
    /// Create new event poller
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll next event, `TuiEvent::None` on timeout
    pub fn next(&self) -> TuiEvent {
        match event::poll(self.tick_rate) {
            Ok(true) => event::read().map(TuiEvent::from).unwrap_or(TuiEvent::None),
            _ => TuiEvent::None,
        }
    }
}

impl Default for EventPoll {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_RATE))
    }
}

/// Enable bracketed paste mode
pub fn enable_bracketed_paste() -> std::io::Result<()> {
    std::io::stdout().execute(EnableBracketedPaste)?;
    Ok(())
}

/// Disable bracketed paste mode
pub fn disable_bracketed_paste() -> std::io::Result<()> {
    std::io::stdout().execute(DisableBracketedPaste)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(TuiEvent::from(key(KeyCode::Char('7'), KeyModifiers::NONE)), TuiEvent::Char('7'));
        assert_eq!(TuiEvent::from(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), TuiEvent::CtrlC);
        assert_eq!(TuiEvent::from(key(KeyCode::BackTab, KeyModifiers::SHIFT)), TuiEvent::BackTab);
        assert_eq!(TuiEvent::from(key(KeyCode::F(5), KeyModifiers::NONE)), TuiEvent::None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(TuiEvent::from(release), TuiEvent::None);
    }

    #[test]
    fn test_paste() {
        assert_eq!(
            TuiEvent::from(Event::Paste("4111".to_string())),
            TuiEvent::Paste("4111".to_string())
        );
    }
}
