//! Submission result dialog

use super::base::render_dialog_frame;
use crate::state::Outcome;
use crate::ui::components::render_button;
use crate::ui::layout::DialogLayout;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Fixed copy shown for an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogCopy {
    pub glyph: &'static str,
    pub color: Color,
    pub title: &'static str,
    pub message: &'static str,
}

pub fn dialog_copy(outcome: Outcome) -> DialogCopy {
    match outcome {
        Outcome::Success => DialogCopy {
            glyph: "✔",
            color: Color::Green,
            title: "Submission Successful!",
            message: "Thank you for contacting us. We'll get back to you soon.",
        },
        Outcome::Failure => DialogCopy {
            glyph: "✘",
            color: Color::Red,
            title: "Submission Failed",
            message: "Oops! Something went wrong. Please try again later.",
        },
    }
}

/// Render the result dialog. `body` is where the frame goes this tick (it
/// differs from `layout.body` while animating); content is only drawn once
/// the frame has settled.
pub fn render_result_dialog(
    frame: &mut Frame,
    layout: &DialogLayout,
    body: Rect,
    outcome: Outcome,
    show_content: bool,
) {
    let copy = dialog_copy(outcome);
    render_dialog_frame(frame, body, copy.color);

    if !show_content {
        return;
    }

    let glyph = Paragraph::new(Line::from(Span::styled(
        copy.glyph,
        Style::default().fg(copy.color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(glyph, layout.glyph);

    let title = Paragraph::new(Line::from(Span::styled(
        copy.title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let message: Vec<Line> = layout
        .message_lines
        .iter()
        .map(|line| Line::from(Span::styled(line.as_str(), Style::default().fg(Color::Gray))))
        .collect();
    frame.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        layout.message,
    );

    render_button(frame, layout.close_button, "Close", true, true);
}
