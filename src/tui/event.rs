//! Event Handling
//!
//! Turns terminal key presses and timer ticks into [`AppAction`]s.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{FutureExt, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;

/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Quit immediately (Ctrl+C)
    ForceQuit,
    /// Open the selected job / submit the form
    Submit,
    /// Open the job posting form
    NewJob,
    /// Clear the job posting form
    ResetForm,
    /// Fetch the listing again
    Refresh,
    ToggleHelp,
    /// Close modals, go back
    Escape,
    Up,
    Down,
    PageUp,
    PageDown,
    /// Previous option of a selector
    Left,
    /// Next option of a selector
    Right,
    /// Move to next field (Tab)
    NextField,
    /// Move to previous field (Shift+Tab)
    PrevField,
    /// Delete character
    DeleteKey,
    /// Regular input character
    Input(KeyEvent),
    /// Timer tick for redraws
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    rx: mpsc::Receiver<AppAction>,
    _tx: mpsc::Sender<AppAction>,
}

impl EventHandler {
    /// Create a new event handler with specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let tx_clone = tx.clone();

        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);

            loop {
                let tick = tick_interval.tick();
                let crossterm_event = reader.next().fuse();

                tokio::select! {
                    _ = tick => {
                        if tx_clone.send(AppAction::Tick).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(evt)) = crossterm_event => {
                        if let Some(action) = map_event(evt) {
                            if tx_clone.send(action).await.is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Wait for the next action
    pub async fn next(&mut self) -> Option<AppAction> {
        self.rx.recv().await
    }
}

fn map_event(event: Event) -> Option<AppAction> {
    match event {
        // Windows reports releases too
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key_event(key),
        _ => None,
    }
}

/// Map a key event to an app action
pub(crate) fn map_key_event(key: KeyEvent) -> Option<AppAction> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(AppAction::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('q')) => Some(AppAction::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(AppAction::NewJob),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(AppAction::ResetForm),

        (KeyModifiers::SHIFT, KeyCode::BackTab) => Some(AppAction::PrevField),

        (KeyModifiers::NONE, code) | (KeyModifiers::SHIFT, code) => match code {
            KeyCode::Esc => Some(AppAction::Escape),
            KeyCode::Enter => Some(AppAction::Submit),
            KeyCode::F(1) => Some(AppAction::ToggleHelp),
            KeyCode::F(5) => Some(AppAction::Refresh),

            KeyCode::Up => Some(AppAction::Up),
            KeyCode::Down => Some(AppAction::Down),
            KeyCode::PageUp => Some(AppAction::PageUp),
            KeyCode::PageDown => Some(AppAction::PageDown),
            KeyCode::Left => Some(AppAction::Left),
            KeyCode::Right => Some(AppAction::Right),

            KeyCode::Tab => Some(AppAction::NextField),
            KeyCode::BackTab => Some(AppAction::PrevField),
            KeyCode::Backspace => Some(AppAction::DeleteKey),

            _ => Some(AppAction::Input(key)),
        },

        _ => Some(AppAction::Input(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_shortcuts() {
        assert_eq!(
            map_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppAction::ForceQuit)
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(AppAction::NewJob)
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(AppAction::ResetForm)
        );
    }

    #[test]
    fn plain_characters_are_input() {
        let k = key(KeyCode::Char('P'), KeyModifiers::SHIFT);
        assert_eq!(map_key_event(k), Some(AppAction::Input(k)));
        assert_eq!(map_key_event(key(KeyCode::Enter, KeyModifiers::NONE)), Some(AppAction::Submit));
        assert_eq!(map_key_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(AppAction::PrevField));
    }
}
