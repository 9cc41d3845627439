use exploitx_core::page::{GUIDELINES, HIGHLIGHTED_RULE, RULES};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::RulesState;

pub fn rules_lines(state: RulesState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, rule) in RULES.iter().enumerate() {
        let style = if i == HIGHLIGHTED_RULE {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(*rule, style),
        ]));
    }

    if state.expanded {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Guidelines",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for guideline in GUIDELINES {
            lines.push(Line::from(format!("  • {guideline}")));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            format!("[{}]", state.toggle_label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" Enter/Space", Style::default().fg(Color::DarkGray)),
    ]));
    lines
}

pub fn render_rules(frame: &mut Frame, area: Rect, state: RulesState) {
    let block = Block::default().borders(Borders::ALL).title(" Rules ");
    let paragraph = Paragraph::new(rules_lines(state))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
