//! Application state and core logic

use crate::config::FormConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    ContactFormState, DialogExit, Easing, FormFocus, Outcome, SubmitRejection, Transition,
    COUNTRIES,
};
use crate::submission::{SubmissionTransport, Submitter};
use crate::ui::effects;
use crate::ui::layout::{hit, DialogLayout, FormLayout};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;

/// Terminal size assumed before the first draw (height, width)
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (24, 80);

/// Main application struct
pub struct App {
    /// Contact form view state
    pub state: ContactFormState,
    /// Runs submissions off the UI loop
    submitter: Submitter,
    animations: bool,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    form_enter: Option<Transition>,
    dialog_enter: Option<Transition>,
    dialog_exit: Option<DialogExit>,
}

impl App {
    /// Create a new App with an idle form
    pub fn new(config: FormConfig, transport: Arc<dyn SubmissionTransport>) -> Self {
        let animations = config.animations;
        let form_enter =
            animations.then(|| Transition::new(Transition::FORM_ENTER, Easing::CubicOut));

        Self {
            state: ContactFormState::idle(config.initial_mode(), config.country()),
            submitter: Submitter::new(transport),
            animations,
            quit: false,
            terminal_size: None,
            form_enter,
            dialog_enter: None,
            dialog_exit: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Eased card entrance progress, 1.0 once settled
    pub fn form_entrance(&self) -> f32 {
        self.form_enter.map_or(1.0, |t| t.eased())
    }

    /// Eased dialog pop-in progress, 1.0 once settled
    pub fn dialog_entrance(&self) -> f32 {
        self.dialog_enter.map_or(1.0, |t| t.eased())
    }

    /// Dialog still animating out after dismissal, with its eased progress
    pub fn dialog_exit(&self) -> Option<(Outcome, f32)> {
        self.dialog_exit
            .map(|exit| (exit.outcome, exit.transition.eased()))
    }

    /// True while anything on screen is moving
    pub fn is_animating(&self) -> bool {
        self.form_enter.is_some() || self.dialog_enter.is_some() || self.dialog_exit.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting() || self.submitter.is_pending()
    }

    fn screen(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or(DEFAULT_TERMINAL_SIZE);
        Rect::new(0, 0, width, height)
    }

    fn transition(&self, duration: Duration, easing: Easing) -> Option<Transition> {
        self.animations.then(|| Transition::new(duration, easing))
    }

    /// Apply finished submissions and retire finished animations.
    /// Called once per event loop iteration.
    pub fn tick(&mut self) {
        while let Some(result) = self.submitter.try_next() {
            if self.state.resolve(result.ticket, result.outcome) {
                tracing::info!(
                    "Submission #{} resolved: {:?}",
                    result.ticket.id(),
                    result.outcome
                );
                self.state.country_picker.close();
                self.dialog_exit = None;
                self.dialog_enter = self.transition(Transition::DIALOG, Easing::BackOut);
            }
        }

        if self.form_enter.is_some_and(|t| t.is_complete()) {
            self.form_enter = None;
        }
        if self.dialog_enter.is_some_and(|t| t.is_complete()) {
            self.dialog_enter = None;
        }
        if self
            .dialog_exit
            .is_some_and(|exit| exit.transition.is_complete())
        {
            self.dialog_exit = None;
        }
    }

    /// Submit the form, unless blocked by native validation or an open cycle
    pub fn submit(&mut self) {
        match self.state.begin_submit() {
            Ok(pending) => self.submitter.submit(pending.ticket, pending.identifier),
            Err(SubmitRejection::Invalid(issue)) => {
                self.state.focus = FormFocus::Identifier;
                tracing::debug!("Submit blocked by validation: {}", issue.message());
            }
            Err(rejection) => tracing::debug!("Submit ignored: {rejection:?}"),
        }
    }

    /// Switch between email and phone
    pub fn toggle_mode(&mut self) {
        self.state.toggle_mode();
    }

    /// Close the result dialog
    pub fn dismiss_dialog(&mut self) {
        if let Some(outcome) = self.state.dismiss() {
            tracing::info!("Result dialog dismissed ({outcome:?})");
            self.dialog_enter = None;
            self.dialog_exit = self
                .transition(Transition::DIALOG, Easing::CubicOut)
                .map(|transition| DialogExit {
                    outcome,
                    transition,
                });
        }
    }

    /// Cancel any outstanding submission; used on teardown
    pub fn shutdown(&mut self) {
        if let Some(ticket) = self.submitter.cancel() {
            tracing::info!("Submission #{} cancelled on shutdown", ticket.id());
        }
        self.state.cancel_submission();
    }

    fn open_country_picker(&mut self) {
        if let Some(phone) = self.state.input().phone() {
            let country = phone.country();
            self.state.country_picker.open(country);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Result dialog is modal
        if self.state.is_dialog_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_dialog();
            }
            return;
        }

        if self.state.country_picker.is_open {
            self.handle_picker_key(key);
            return;
        }

        let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SHORTCUT_MODIFIER);
        let mode = self.state.mode();
        let focus = self.state.focus;

        match key.code {
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('t') if shortcut => self.toggle_mode(),
            KeyCode::Tab | KeyCode::Down => self.state.focus = focus.next(mode),
            KeyCode::BackTab | KeyCode::Up => self.state.focus = focus.prev(mode),
            KeyCode::Enter => self.activate(focus),
            KeyCode::Char(' ') if focus != FormFocus::Identifier => self.activate(focus),
            KeyCode::Char(c) if !shortcut => {
                self.state.focus = FormFocus::Identifier;
                self.state.input_char(c);
            }
            KeyCode::Backspace => {
                self.state.focus = FormFocus::Identifier;
                self.state.backspace();
            }
            _ => {}
        }
    }

    /// Enter/Space on the focused element
    fn activate(&mut self, focus: FormFocus) {
        match focus {
            FormFocus::Country => self.open_country_picker(),
            FormFocus::ModeToggle => self.toggle_mode(),
            FormFocus::Identifier | FormFocus::Send => self.submit(),
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.country_picker.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.country_picker.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let country = self.state.country_picker.highlighted_country();
                self.state.select_country(country);
            }
            KeyCode::Esc | KeyCode::Tab => self.state.country_picker.close(),
            _ => {}
        }
    }

    /// Handle a mouse event. Only left clicks do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return;
        };
        let (column, row) = (mouse.column, mouse.row);
        let screen = self.screen();

        if let Some(outcome) = self.state.dialog() {
            let dialog = DialogLayout::compute(screen, outcome);
            // Hit-test the frame as drawn this tick; Close only exists once settled
            let body = effects::pop(dialog.body, self.dialog_entrance());
            let on_close = body == dialog.body && hit(dialog.close_button, column, row);
            // Clicks inside the body are contained; only Close dismisses from there
            if on_close || !hit(body, column, row) {
                self.dismiss_dialog();
            }
            return;
        }

        let layout = FormLayout::compute(screen, self.state.mode());

        if self.state.country_picker.is_open {
            if let Some(dropdown) = layout
                .country_dropdown(screen)
                .filter(|dropdown| hit(*dropdown, column, row))
            {
                let offset = FormLayout::dropdown_scroll_offset(
                    dropdown,
                    self.state.country_picker.highlighted,
                );
                if let Some(index) = FormLayout::dropdown_index_at(dropdown, row, offset) {
                    self.state.select_country(&COUNTRIES[index]);
                }
            } else {
                self.state.country_picker.close();
            }
            return;
        }

        if layout
            .country_button
            .is_some_and(|button| hit(button, column, row))
        {
            self.state.focus = FormFocus::Country;
            self.open_country_picker();
        } else if hit(layout.field, column, row) {
            self.state.focus = FormFocus::Identifier;
        } else if hit(layout.toggle_link, column, row) {
            self.state.focus = FormFocus::ModeToggle;
            self.toggle_mode();
        } else if hit(layout.send_button, column, row) {
            self.state.focus = FormFocus::Send;
            self.submit();
        }
    }
}
