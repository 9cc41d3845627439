use exploitx_core::catalog::{Catalog, Challenge};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::ChallengesState;
use crate::common::truncate_with_ellipsis;

pub fn render_challenges(frame: &mut Frame, area: Rect, catalog: &Catalog, state: ChallengesState) {
    let [list_area, detail_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .areas(area);

    let title_width = list_area.width.saturating_sub(12) as usize;
    let items: Vec<ListItem> = catalog
        .challenges()
        .iter()
        .map(|challenge| {
            ListItem::new(Line::from(vec![
                Span::raw(truncate_with_ellipsis(&challenge.title, title_width)),
                Span::styled(
                    format!("  {} pts", challenge.point),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Challenges ({} pts) ",
            catalog.total_points()
        )))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let selected = state.selected_in(catalog.len());
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let detail = selected
        .and_then(|i| catalog.challenges().get(i))
        .map_or_else(
            || vec![Line::from("No challenges published yet.")],
            detail_lines,
        );
    let paragraph = Paragraph::new(detail)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, detail_area);
}

fn detail_lines(challenge: &Challenge) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            challenge.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} points", challenge.point),
            Style::default().fg(Color::Green),
        )),
        Line::default(),
    ];
    lines.extend(
        challenge
            .description
            .lines()
            .map(|line| Line::from(line.to_string())),
    );
    if let Some(attachment) = challenge.attachment() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Attachment: ", Style::default().fg(Color::DarkGray)),
            Span::raw(attachment.to_string()),
        ]));
    }
    lines
}
