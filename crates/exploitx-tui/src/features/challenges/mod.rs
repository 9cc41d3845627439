//! Challenges section: list of challenge metadata with a detail pane.
//!
//! Flags are part of the catalog but never rendered here.

mod render;

use crossterm::event::{KeyCode, KeyEvent};
pub use render::render_challenges;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChallengesState {
    pub selected: usize,
}

impl ChallengesState {
    /// Selected index clamped to a catalog of `len` entries.
    pub fn selected_in(self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.selected.min(len - 1))
    }
}

/// Handles a key while the Challenges tab is focused. Returns true if consumed.
pub fn handle_key(state: &mut ChallengesState, len: usize, key: KeyEvent) -> bool {
    if len == 0 {
        return false;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.min(len - 1).saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = (state.selected + 1).min(len - 1);
            true
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.selected = 0;
            true
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.selected = len - 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = ChallengesState::default();
        handle_key(&mut state, 3, key(KeyCode::Up));
        assert_eq!(state.selected, 0);
        for _ in 0..5 {
            handle_key(&mut state, 3, key(KeyCode::Down));
        }
        assert_eq!(state.selected, 2);
        handle_key(&mut state, 3, key(KeyCode::Char('k')));
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_empty_catalog_ignores_keys() {
        let mut state = ChallengesState::default();
        assert!(!handle_key(&mut state, 0, key(KeyCode::Down)));
        assert_eq!(state.selected_in(0), None);
    }
}
