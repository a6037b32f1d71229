//! Keyboard focus and the country dropdown

use super::contact::InputMode;
use super::phone::{Country, COUNTRIES};

/// Focusable parts of the contact form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    /// Country button (phone mode only)
    Country,
    #[default]
    Identifier,
    ModeToggle,
    Send,
}

impl FormFocus {
    fn order(mode: InputMode) -> &'static [FormFocus] {
        match mode {
            InputMode::Email => &[FormFocus::Identifier, FormFocus::ModeToggle, FormFocus::Send],
            InputMode::Phone => &[
                FormFocus::Country,
                FormFocus::Identifier,
                FormFocus::ModeToggle,
                FormFocus::Send,
            ],
        }
    }

    /// Next focus target (wraps around)
    pub fn next(self, mode: InputMode) -> Self {
        let order = Self::order(mode);
        let current = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(current + 1) % order.len()]
    }

    /// Previous focus target (wraps around)
    pub fn prev(self, mode: InputMode) -> Self {
        let order = Self::order(mode);
        let current = order.iter().position(|f| *f == self).unwrap_or(0);
        if current == 0 {
            order[order.len() - 1]
        } else {
            order[current - 1]
        }
    }

    /// Clamp a focus that does not exist in the given mode
    pub fn for_mode(self, mode: InputMode) -> Self {
        if Self::order(mode).contains(&self) {
            self
        } else {
            FormFocus::Identifier
        }
    }
}

/// Dropdown listing [`COUNTRIES`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountryPicker {
    pub is_open: bool,
    pub highlighted: usize,
}

impl CountryPicker {
    /// Open with the current country highlighted
    pub fn open(&mut self, current: &Country) {
        self.is_open = true;
        self.highlighted = current.index();
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn move_up(&mut self) {
        if self.highlighted == 0 {
            self.highlighted = COUNTRIES.len() - 1;
        } else {
            self.highlighted -= 1;
        }
    }

    pub fn move_down(&mut self) {
        self.highlighted = (self.highlighted + 1) % COUNTRIES.len();
    }

    pub fn highlighted_country(&self) -> &'static Country {
        &COUNTRIES[self.highlighted.min(COUNTRIES.len() - 1)]
    }
}
