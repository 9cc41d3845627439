//! Profile widget: maps the session view onto exactly one presentation.
//!
//! ## Module Structure
//!
//! - `mod.rs`: `ProfileCard` and the `project` mapping (pure)
//! - `render.rs`: turns a `ProfileCard` into lines and draws the card

mod render;

use exploitx_core::session::{Phase, ViewState};
pub use render::{profile_lines, render_profile};

/// The three mutually exclusive presentations of the profile widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileCard<'a> {
    /// Placeholder while the session is being resolved.
    Skeleton,
    /// No session: ask the visitor to sign in.
    SignInPrompt,
    Profile {
        email: &'a str,
        display_name: &'a str,
        score: i64,
    },
}

/// Selects the presentation for a view.
pub fn project(view: &ViewState) -> ProfileCard<'_> {
    match view.phase {
        Phase::Loading => ProfileCard::Skeleton,
        Phase::SignedOut => ProfileCard::SignInPrompt,
        Phase::SignedIn => ProfileCard::Profile {
            email: view.email().unwrap_or_default(),
            display_name: &view.display_name,
            score: view.score,
        },
    }
}

#[cfg(test)]
mod tests {
    use exploitx_core::auth::Identity;

    use super::*;

    fn alice() -> Identity {
        Identity::new("alice@ctf.in").unwrap()
    }

    #[test]
    fn test_initial_view_is_skeleton() {
        assert_eq!(project(&ViewState::initial()), ProfileCard::Skeleton);
    }

    #[test]
    fn test_loading_with_identity_is_skeleton() {
        assert_eq!(project(&ViewState::loading(alice())), ProfileCard::Skeleton);
    }

    #[test]
    fn test_signed_out_is_prompt() {
        assert_eq!(project(&ViewState::signed_out()), ProfileCard::SignInPrompt);
    }

    #[test]
    fn test_signed_in_carries_profile_fields() {
        let view = ViewState::signed_in(alice(), "Alice".to_string(), 120);
        assert_eq!(
            project(&view),
            ProfileCard::Profile {
                email: "alice@ctf.in",
                display_name: "Alice",
                score: 120,
            }
        );
    }

    #[test]
    fn test_signed_in_without_name_keeps_empty_name() {
        let view = ViewState::signed_in(alice(), String::new(), 0);
        let ProfileCard::Profile {
            display_name,
            score,
            ..
        } = project(&view)
        else {
            panic!("expected profile card");
        };
        assert_eq!(display_name, "");
        assert_eq!(score, 0);
    }
}
