//! Field rendering utilities for the contact form

use crate::state::ContactInput;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const EMAIL_PLACEHOLDER: &str = "Enter your email";

fn border_style(is_active: bool, is_invalid: bool) -> Style {
    if is_invalid {
        Style::default().fg(Color::LightRed)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Draw the identifier field in either mode
pub fn draw_identifier_field(
    frame: &mut Frame,
    area: Rect,
    input: &ContactInput,
    is_active: bool,
    is_invalid: bool,
) {
    let cursor = if is_active { "▌" } else { "" };

    let value = match input {
        ContactInput::Email(value) if value.is_empty() && !is_active => Span::styled(
            EMAIL_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ),
        _ => Span::styled(input.display(), Style::default().fg(Color::White)),
    };

    let mut spans = vec![value];
    if is_active {
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(is_active, is_invalid));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the country selector button shown next to the phone field
pub fn draw_country_button(frame: &mut Frame, area: Rect, badge: &str, is_active: bool, is_open: bool) {
    let arrow = if is_open { "▴" } else { "▾" };
    let text_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(is_active || is_open, false));

    let content = Line::from(vec![
        Span::styled(badge.to_string(), text_style),
        Span::styled(format!(" {arrow}"), Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
