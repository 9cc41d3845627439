use exploitx_core::session::ViewState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::{ProfileCard, project};
use crate::common::truncate_with_ellipsis;

const SKELETON_SHADES: [Color; 4] = [
    Color::DarkGray,
    Color::Gray,
    Color::DarkGray,
    Color::Black,
];

/// Lines for one card. `width` is the usable inner width.
pub fn profile_lines(card: ProfileCard<'_>, spinner_frame: usize, width: usize) -> Vec<Line<'static>> {
    match card {
        ProfileCard::Skeleton => {
            let shade = SKELETON_SHADES[spinner_frame % SKELETON_SHADES.len()];
            let bar = |len: usize| {
                Line::from(Span::styled(
                    "▒".repeat(len.min(width)),
                    Style::default().fg(shade),
                ))
            };
            vec![
                bar(width * 3 / 4),
                Line::default(),
                bar(width / 2),
                bar(width * 2 / 3),
                Line::default(),
                Line::from(Span::styled(
                    "Loading profile…",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        ProfileCard::SignInPrompt => vec![
            Line::from(Span::styled(
                "Authentication Required",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from("You are not signed in."),
            Line::from(Span::styled(
                "Sign in to view your profile and track your CTF score.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("l", Style::default().fg(Color::Cyan)),
                Span::styled(" sign in", Style::default().fg(Color::DarkGray)),
            ]),
        ],
        ProfileCard::Profile {
            email,
            display_name,
            score,
        } => {
            let label = Style::default().fg(Color::DarkGray);
            let value_width = width.saturating_sub(7);
            let name = if display_name.is_empty() {
                Span::styled("(no name on record)", label)
            } else {
                Span::raw(truncate_with_ellipsis(display_name, value_width))
            };
            vec![
                Line::from(vec![
                    Span::styled("EMAIL  ", label),
                    Span::raw(truncate_with_ellipsis(email, value_width)),
                ]),
                Line::from(vec![Span::styled("NAME   ", label), name]),
                Line::from(vec![
                    Span::styled("SCORE  ", label),
                    Span::styled(
                        score.to_string(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::default(),
                Line::from(vec![
                    Span::styled("r", Style::default().fg(Color::Cyan)),
                    Span::styled(" refresh  ", label),
                    Span::styled("o", Style::default().fg(Color::Cyan)),
                    Span::styled(" sign out", label),
                ]),
            ]
        }
    }
}

/// Draws the profile card for the current view.
pub fn render_profile(frame: &mut Frame, area: Rect, view: &ViewState, spinner_frame: usize) {
    let card = project(view);
    let border_color = match card {
        ProfileCard::Skeleton => Color::DarkGray,
        ProfileCard::SignInPrompt => Color::Yellow,
        ProfileCard::Profile { .. } => Color::Green,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Profile ");
    let inner_width = area.width.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(profile_lines(card, spinner_frame, inner_width))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use exploitx_core::auth::Identity;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn rendered(view: &ViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_profile(frame, area, view, 0);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_prompt_renders_sign_in_text() {
        let text = rendered(&ViewState::signed_out());
        assert!(text.contains("Authentication Required"));
        assert!(text.contains("You are not signed in."));
        assert!(!text.contains("SCORE"));
    }

    #[test]
    fn test_profile_renders_fields() {
        let identity = Identity::new("alice@ctf.in").unwrap();
        let text = rendered(&ViewState::signed_in(identity, "Alice".to_string(), 150));
        assert!(text.contains("alice@ctf.in"));
        assert!(text.contains("Alice"));
        assert!(text.contains("150"));
        assert!(!text.contains("Authentication Required"));
    }

    #[test]
    fn test_skeleton_renders_no_profile_data() {
        let identity = Identity::new("alice@ctf.in").unwrap();
        let text = rendered(&ViewState::loading(identity));
        assert!(text.contains("Loading profile"));
        assert!(!text.contains("alice@ctf.in"));
        assert!(!text.contains("Authentication Required"));
    }

    #[test]
    fn test_skeleton_bars_fit_width() {
        let lines = profile_lines(ProfileCard::Skeleton, 3, 10);
        assert!(lines[0].width() <= 10);
        assert!(lines[3].width() <= 10);
    }
}
