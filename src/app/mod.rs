//! Application module
//!
//! Contains the main event loop and key handling. Every transition is
//! synchronous: a key event is translated into one wizard operation, runs to
//! completion, and the next frame is drawn from the resulting state. The
//! wizard is owned exclusively by this app for the session.

use crate::error::Result;
use crate::ui::{UiRenderer, ViewState};
use crate::wizard::{Wizard, WizardStep};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    wizard: Wizard,
    ui_renderer: UiRenderer,
    view_state: ViewState,
}

impl App {
    /// Create a new application instance over a validated dataset's wizard.
    pub fn new(wizard: Wizard) -> Self {
        info!("creating app instance");
        Self {
            wizard,
            ui_renderer: UiRenderer::new(),
            view_state: ViewState::default(),
        }
    }

    /// The wizard driving this app.
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Run the main event loop until the user quits.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        info!("starting main application loop");

        loop {
            terminal.draw(|f| {
                self.ui_renderer.render(f, &self.wizard, &self.view_state);
            })?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(_, _) => {} // Redrawn on the next frame
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Handle one key event. Returns true when the user asked to quit.
    ///
    /// Inputs the current screen does not offer are ignored, so an invalid
    /// transition is simply unavailable rather than an error path.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Global bindings first
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('r') => {
                self.wizard.reset();
                self.clear_transients();
                return false;
            }
            _ => {}
        }

        if self.wizard.is_settled() {
            // Single-result terminal: only back applies besides the globals.
            if matches!(key.code, KeyCode::Char('b') | KeyCode::Backspace) {
                self.wizard.back();
                self.clear_transients();
            }
            return false;
        }

        match self.wizard.step() {
            WizardStep::Welcome => self.handle_welcome_key(key),
            WizardStep::Intro => self.handle_intro_key(key),
            WizardStep::Question(_) => self.handle_question_key(key),
            WizardStep::Browse => self.handle_browse_key(key),
            WizardStep::RandomPeek => self.handle_random_peek_key(key),
        }
        false
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if self.wizard.confirm().is_ok() {
                    self.clear_transients();
                }
            }
            KeyCode::Char('n') => {
                // No state change; the warning goes out on the status line.
                if let Ok(message) = self.wizard.decline() {
                    self.view_state.status_message = Some(message.to_string());
                }
            }
            KeyCode::Char('d') => self.jump_to_random(),
            _ => {}
        }
    }

    fn handle_intro_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => {
                if self.wizard.start().is_ok() {
                    self.clear_transients();
                }
            }
            KeyCode::Char('d') => self.jump_to_random(),
            KeyCode::Char('b') | KeyCode::Backspace => {
                self.wizard.back();
                self.clear_transients();
            }
            _ => {}
        }
    }

    fn handle_question_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.view_state.choice_cursor = 1 - self.view_state.choice_cursor;
            }
            KeyCode::Enter => {
                let Some(attribute) = self.wizard.active_attribute() else {
                    return;
                };
                let value = attribute.presented_answers()[self.view_state.choice_cursor];
                match self.wizard.answer(value) {
                    Ok(()) => self.clear_transients(),
                    // The exhausted message is already on screen; ignore.
                    Err(err) => debug!(%err, "answer unavailable"),
                }
            }
            KeyCode::Char('d') => self.jump_to_random(),
            KeyCode::Char('b') | KeyCode::Backspace => {
                self.wizard.back();
                self.clear_transients();
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right => {
                let _ = self.wizard.cycle_forward();
            }
            KeyCode::Left => {
                let _ = self.wizard.cycle_backward();
            }
            KeyCode::Char('b') | KeyCode::Backspace => {
                self.wizard.back();
                self.clear_transients();
            }
            _ => {}
        }
    }

    fn handle_random_peek_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('d') {
            self.jump_to_random();
        }
    }

    fn jump_to_random(&mut self) {
        if let Err(err) = self.wizard.random_peek() {
            warn!(%err, "random peek rejected");
        } else {
            self.clear_transients();
        }
    }

    fn clear_transients(&mut self) {
        self.view_state.choice_cursor = 0;
        self.view_state.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn app() -> App {
        App::new(Wizard::new(Dataset::embedded().unwrap()))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_key_exits() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_welcome_flow_via_keys() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Char('y')));
        assert_eq!(app.wizard().step(), WizardStep::Intro);
        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.wizard().step(), WizardStep::Question(0));
    }

    #[test]
    fn test_decline_sets_status_message_only() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.wizard().step(), WizardStep::Welcome);
        assert!(app.view_state.status_message.is_some());
    }

    #[test]
    fn test_reset_key_works_everywhere() {
        let mut app = app();
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.wizard().step(), WizardStep::RandomPeek);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.wizard().step(), WizardStep::Welcome);
        assert!(app.wizard().conditions().is_empty());
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Char('z')));
        assert_eq!(app.wizard().step(), WizardStep::Welcome);
    }
}
