//! User interface rendering module
//!
//! The renderer is a pure view over the wizard: it asks the state machine
//! what to present via [`Wizard::view`] and draws the matching screen. All
//! interaction rules (which answers are available, when the single-result
//! short-circuit applies) live in the engine, not here.

mod screens;

use crate::theme::Styles;
use crate::wizard::{Screen, Wizard};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Transient presentation state owned by the app, not the engine.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Which of the two presented answers is highlighted at a question step.
    pub choice_cursor: usize,
    /// One-line side-channel message (decline warning, hints).
    pub status_message: Option<String>,
}

/// UI renderer for the application
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI for the wizard's current view.
    pub fn render(&self, f: &mut Frame<'_>, wizard: &Wizard, view_state: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = chunks[0];
        let status_area = chunks[1];
        let nav_area = chunks[2];

        let screen = wizard.view();
        match &screen {
            Screen::Welcome => screens::render_welcome(f, content_area, view_state),
            Screen::Intro => screens::render_intro(f, content_area, view_state),
            Screen::Question {
                index,
                total,
                attribute,
                remaining,
                answers,
            } => screens::render_question(
                f,
                content_area,
                *index,
                *total,
                *attribute,
                *remaining,
                answers,
                view_state.choice_cursor,
            ),
            Screen::SingleResult(record) => screens::render_single_result(f, content_area, record),
            Screen::Browse {
                record,
                position,
                total,
            } => screens::render_browse(f, content_area, record, *position, *total),
            Screen::RandomPeek(record) => screens::render_random_peek(f, content_area, record),
        }

        if let Some(message) = &view_state.status_message {
            let status = Paragraph::new(Line::from(message.as_str()).centered())
                .style(Styles::status());
            f.render_widget(status, status_area);
        }

        let nav = Paragraph::new(Line::from(nav_hints(&screen)).centered()).style(Styles::nav_bar());
        f.render_widget(nav, nav_area);
    }
}

/// Keybinding hints for the bottom navigation bar, per screen.
fn nav_hints(screen: &Screen<'_>) -> &'static str {
    match screen {
        Screen::Welcome => "y yes · n no · q quit",
        Screen::Intro => "enter start · d random · r reset · q quit",
        Screen::Question { .. } => {
            "↑/↓ select · enter choose · b back · d random · r reset · q quit"
        }
        Screen::SingleResult(_) => "b back · r reset · q quit",
        Screen::Browse { .. } => "←/→ cycle · b back · r reset · q quit",
        Screen::RandomPeek(_) => "d another · r reset · q quit",
    }
}
