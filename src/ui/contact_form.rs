//! Contact card rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_country_button, draw_identifier_field};
use super::layout::FormLayout;
use crate::state::{ContactFormState, FormFocus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draw the contact card. `layout` may be offset while the card slides in.
pub fn draw(frame: &mut Frame, layout: &FormLayout, state: &ContactFormState) {
    let mode = state.mode();
    let focus = state.focus;

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta));
    frame.render_widget(card, layout.card);

    let title = Paragraph::new(Line::from(Span::styled(
        "Contact",
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, layout.title);

    let label = Paragraph::new(Line::from(vec![
        Span::styled(mode.label(), Style::default().fg(Color::White)),
        Span::styled(" *", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(label, layout.label);

    if let (Some(button), Some(phone)) = (layout.country_button, state.input().phone()) {
        draw_country_button(
            frame,
            button,
            &phone.country().badge(),
            focus == FormFocus::Country,
            state.country_picker.is_open,
        );
    }

    let hint = state.validity_hint();
    draw_identifier_field(
        frame,
        layout.field,
        state.input(),
        focus == FormFocus::Identifier && !state.country_picker.is_open,
        hint.is_some(),
    );

    if let Some(issue) = hint {
        let hint_line = Paragraph::new(Line::from(Span::styled(
            format!("! {}", issue.message()),
            Style::default().fg(Color::LightRed),
        )));
        frame.render_widget(hint_line, layout.hint);
    }

    draw_toggle_link(
        frame,
        layout.toggle_link,
        mode.toggle_label(),
        focus == FormFocus::ModeToggle,
    );

    let send_label = if state.is_submitting() {
        "Sending…"
    } else {
        "Send →"
    };
    let send_area = Rect {
        height: BUTTON_HEIGHT.min(layout.send_button.height),
        ..layout.send_button
    };
    render_button(
        frame,
        send_area,
        send_label,
        focus == FormFocus::Send,
        !state.is_submitting(),
    );
}

fn draw_toggle_link(frame: &mut Frame, area: Rect, text: &str, is_active: bool) {
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::UNDERLINED)
    };
    frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), area);
}
