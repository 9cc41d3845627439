//! Static event content: hero, schedule, contacts, social links and footer.

mod render;

use crossterm::event::{KeyCode, KeyEvent};
use exploitx_core::page::SOCIAL_LINKS;
pub use render::{render_contact, render_footer, render_hero};

use crate::effects::UiEffect;

/// Selection on the Contact tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactState {
    /// Index into `SOCIAL_LINKS`.
    pub selected_link: usize,
}

/// Handles a key while the Contact tab is focused.
///
/// Returns `None` if the key was not consumed.
pub fn handle_key(state: &mut ContactState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    let last = SOCIAL_LINKS.len().checked_sub(1)?;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected_link = state.selected_link.saturating_sub(1);
            Some(vec![])
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected_link = (state.selected_link + 1).min(last);
            Some(vec![])
        }
        KeyCode::Enter => {
            let link = SOCIAL_LINKS.get(state.selected_link.min(last))?;
            Some(vec![UiEffect::OpenUrl {
                url: link.url.to_string(),
            }])
        }
        _ => None,
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
    fn test_enter_opens_selected_link() {
        let mut state = ContactState::default();
        handle_key(&mut state, key(KeyCode::Down));
        let effects = handle_key(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(
            effects,
            vec![UiEffect::OpenUrl {
                url: SOCIAL_LINKS[1].url.to_string()
            }]
        );
    }

    #[test]
    fn test_selection_clamps() {
        let mut state = ContactState::default();
        for _ in 0..10 {
            handle_key(&mut state, key(KeyCode::Down));
        }
        assert_eq!(state.selected_link, SOCIAL_LINKS.len() - 1);
        assert!(handle_key(&mut state, key(KeyCode::Char('z'))).is_none());
    }
}
