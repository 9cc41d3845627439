//! Rules section: participation rules plus guidelines behind a toggle.

mod render;

use crossterm::event::{KeyCode, KeyEvent};
pub use render::{render_rules, rules_lines};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesState {
    /// Whether the guidelines are shown.
    pub expanded: bool,
}

impl RulesState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_label(self) -> &'static str {
        if self.expanded { "Show Less" } else { "Show More" }
    }
}

/// Handles a key while the Rules tab is focused. Returns true if consumed.
pub fn handle_key(state: &mut RulesState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ' | 'm') => {
            state.toggle();
            true
        }
        _ => false,
    }
}
