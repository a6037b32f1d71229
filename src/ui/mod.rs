//! UI module for rendering the TUI

pub mod components;
mod contact_form;
mod country_picker;
pub mod effects;
mod field_renderer;
pub mod layout;
mod widgets;

use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_SHORTCUT};
use components::{render_backdrop, render_result_dialog};
use layout::{content_area, status_bar_area, DialogLayout, FormLayout};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = frame.area();
    let content = content_area(screen);

    // Contact card, sliding up while it enters
    let form_t = app.form_entrance();
    let layout = FormLayout::compute(screen, app.state.mode());
    let slide = effects::slide_in(layout.card, form_t).y - layout.card.y;
    let drawn = layout.translated(slide, content);
    contact_form::draw(frame, &drawn, &app.state);
    if form_t < 0.6 {
        frame
            .buffer_mut()
            .set_style(drawn.card, Style::default().add_modifier(Modifier::DIM));
    }

    if app.state.country_picker.is_open {
        if let Some(dropdown) = layout.country_dropdown(screen) {
            country_picker::draw(frame, dropdown, &app.state.country_picker);
        }
    }

    draw_status_bar(frame, app);

    if let Some(outcome) = app.state.dialog() {
        render_backdrop(frame, content);
        let dialog = DialogLayout::compute(screen, outcome);
        let body = effects::pop(dialog.body, app.dialog_entrance());
        let settled = body == dialog.body;
        render_result_dialog(frame, &dialog, body, outcome, settled);
    } else if let Some((outcome, t)) = app.dialog_exit() {
        let dialog = DialogLayout::compute(screen, outcome);
        let body = effects::pop(dialog.body, 1.0 - t);
        render_result_dialog(frame, &dialog, body, outcome, false);
    }
}

fn key_hint<'a>(key: &'a str, action: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Cyan)),
        Span::styled(action, Style::default().fg(Color::DarkGray)),
    ]
}

/// Draw the status bar with the shortcuts for the current context
fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = status_bar_area(frame.area());

    let hints: Vec<[Span; 2]> = if app.state.is_dialog_visible() {
        vec![key_hint("Enter/Esc", " close  "), key_hint("click outside", " close")]
    } else if app.state.country_picker.is_open {
        vec![
            key_hint("↑↓", " select  "),
            key_hint("Enter", " choose  "),
            key_hint("Esc", " cancel"),
        ]
    } else {
        vec![
            key_hint("Tab", " focus  "),
            key_hint("Enter", " send  "),
            key_hint(SUBMIT_SHORTCUT, " send  "),
            key_hint(TOGGLE_SHORTCUT, " email/phone  "),
            key_hint("Ctrl+C", " quit"),
        ]
    };

    let mut spans: Vec<Span> = hints.into_iter().flatten().collect();
    if app.state.is_submitting() {
        spans.push(Span::styled(
            "  Sending…",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
