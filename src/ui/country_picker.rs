//! Country dropdown for the phone field

use super::widgets::render_scrollable_list;
use crate::state::{CountryPicker, COUNTRIES};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
    Frame,
};

/// Draw the open dropdown over whatever is below the country button
pub fn draw(frame: &mut Frame, area: Rect, picker: &CountryPicker) {
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = COUNTRIES
        .iter()
        .map(|country| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("+{:<4}", country.dial_code),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(country.name),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    render_scrollable_list(frame, area, list, picker.highlighted);
}
