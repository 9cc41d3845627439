//! Sign-in overlay.
//!
//! Stands in for the identity provider's login form: the visitor types an
//! email and the runtime publishes it as a sign-in event.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use exploitx_core::auth::Identity;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
};
use crate::effects::UiEffect;

#[derive(Debug, Clone, Default)]
pub struct SignInState {
    pub input: String,
    /// Validation error for the last submit.
    pub error: Option<String>,
}

impl SignInState {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_sign_in_overlay(frame, self, area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.error = None;
        }

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match Identity::new(self.input.as_str()) {
                Ok(identity) => {
                    OverlayUpdate::close().with_ui_effects(vec![UiEffect::SignIn { identity }])
                }
                Err(err) => {
                    self.error = Some(err.to_string());
                    OverlayUpdate::stay()
                }
            },
            KeyCode::Backspace => {
                self.input.pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_sign_in_overlay(frame: &mut Frame, state: &SignInState, area: Rect) {
    let hints = [
        InputHint::new("Enter", "sign in"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Sign In",
            border_color: Color::Cyan,
            width: 56,
            height: 7,
            hints: &hints,
        },
    );

    let input_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: &state.input,
            placeholder: "you@example.com",
            prompt: "> ",
            accent: Color::Cyan,
        },
    );

    render_separator(frame, layout.body, 1);

    let (help_text, help_style) = match &state.error {
        Some(error) => (error.as_str(), Style::default().fg(Color::Red)),
        None => (
            "Enter the email you registered with",
            Style::default().fg(Color::DarkGray),
        ),
    };
    if layout.body.height > 2 {
        let help_area = Rect::new(layout.body.x, layout.body.y + 2, layout.body.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(help_text, help_style))),
            help_area,
        );
    }
}
