//! Pure render of `AppState`.
//!
//! Layout, top to bottom: tab bar, active section, footer, status line.

use exploitx_core::session::Phase;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use crate::features::{challenges, event, profile, rules};
use crate::state::{AppState, NoticeKind, Tab};

/// Width of the profile card on the Home tab.
const PROFILE_WIDTH: u16 = 44;

pub fn render(app: &AppState, frame: &mut Frame) {
    let [tabs_area, body_area, footer_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_tabs(frame, tabs_area, app.tab);

    match app.tab {
        Tab::Home => render_home(app, frame, body_area),
        Tab::Rules => rules::render_rules(frame, body_area, app.rules),
        Tab::Challenges => {
            challenges::render_challenges(frame, body_area, &app.catalog, app.challenges);
        }
        Tab::Contact => event::render_contact(frame, body_area, app.contact),
    }

    event::render_footer(frame, footer_area);
    render_status_line(app, frame, status_area);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, body_area);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active: Tab) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()));
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_home(app: &AppState, frame: &mut Frame, area: Rect) {
    let profile_width = PROFILE_WIDTH.min(area.width / 2);
    let [hero_area, profile_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(profile_width)])
        .areas(area);

    event::render_hero(frame, hero_area);
    profile::render_profile(frame, profile_area, &app.view, app.spinner_frame);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let phase_color = match app.view.phase {
        Phase::Loading => Color::DarkGray,
        Phase::SignedOut => Color::Yellow,
        Phase::SignedIn => Color::Green,
    };
    let dim = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled("● ", Style::default().fg(phase_color)),
        Span::styled(app.view.phase.label(), Style::default().fg(phase_color)),
        Span::styled(format!("  store: {}", app.store_label), dim),
    ];

    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Error => Color::Red,
        };
        spans.push(Span::styled("  ", dim));
        spans.push(Span::styled(notice.text.clone(), Style::default().fg(color)));
    }

    spans.push(Span::styled("  q quit · Tab switch", dim));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
