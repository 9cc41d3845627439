use exploitx_core::page::{
    CHAPTER, CONTACTS, EVENT_NAME, ORGANIZER, ORGANIZER_FULL, QUERY_EMAIL, SCHEDULE,
    SOCIAL_LINKS, TAGLINE, copyright_line,
};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::ContactState;

/// Event banner followed by the schedule.
pub fn render_hero(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            ORGANIZER,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(CHAPTER, Style::default().fg(Color::DarkGray))),
        Line::default(),
        Line::from(Span::styled(
            EVENT_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(TAGLINE),
        Line::default(),
    ];

    for item in SCHEDULE {
        lines.push(Line::from(Span::styled(
            item.label,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for detail in item.lines {
            lines.push(Line::from(format!("  {detail}")));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Event "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_contact(frame: &mut Frame, area: Rect, state: ContactState) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            "Contact Us",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(ORGANIZER_FULL),
        Line::default(),
    ];
    for contact in CONTACTS {
        lines.push(Line::from(vec![
            Span::raw(contact.name),
            Span::styled(format!(" ({})  ", contact.year), label),
            Span::styled(contact.phone, Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Queries: ", label),
        Span::raw(QUERY_EMAIL),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Follow us",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        let selected = i == state.selected_link;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(link.label, style),
            Span::styled(format!("  {}", link.url), label),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Contact "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        copyright_line(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
