//! Application event loop for the terminal frontend.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use super::ui;
use crate::input::InputSignal;
use crate::screen::GameScreen;

/// Terminal application driving a [`GameScreen`].
#[derive(Debug, Default)]
pub struct App {
    screen: GameScreen,
}

impl App {
    /// Creates a new application with a fresh screen.
    pub fn new() -> Self {
        Self {
            screen: GameScreen::new(),
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Each key event is handled to completion before the next is read.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            let snapshot = self.screen.snapshot();
            terminal.draw(|f| ui::render(f, &snapshot))?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        info!("Quitting");
                        return Ok(());
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => self.screen.reset(),
                    code => {
                        if let Some(signal) = signal_for_key(code) {
                            debug!(signal = ?signal, "Dispatching input signal");
                            self.screen.handle(signal);
                        }
                    }
                }
            }
        }
    }
}

/// Maps a key code to the input signal it dispatches, if any.
fn signal_for_key(code: KeyCode) -> Option<InputSignal> {
    match code {
        KeyCode::Left => Some(InputSignal::Left),
        KeyCode::Right => Some(InputSignal::Right),
        KeyCode::Up => Some(InputSignal::Up),
        KeyCode::Down => Some(InputSignal::Down),
        KeyCode::Enter => Some(InputSignal::Activate),
        KeyCode::Esc | KeyCode::Backspace => Some(InputSignal::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directional_signals() {
        assert_eq!(signal_for_key(KeyCode::Left), Some(InputSignal::Left));
        assert_eq!(signal_for_key(KeyCode::Right), Some(InputSignal::Right));
        assert_eq!(signal_for_key(KeyCode::Up), Some(InputSignal::Up));
        assert_eq!(signal_for_key(KeyCode::Down), Some(InputSignal::Down));
    }

    #[test]
    fn test_enter_activates_and_escape_cancels() {
        assert_eq!(signal_for_key(KeyCode::Enter), Some(InputSignal::Activate));
        assert_eq!(signal_for_key(KeyCode::Esc), Some(InputSignal::Cancel));
    }

    #[test]
    fn test_unmapped_keys_send_nothing() {
        assert_eq!(signal_for_key(KeyCode::Char('x')), None);
        assert_eq!(signal_for_key(KeyCode::Tab), None);
    }
}
