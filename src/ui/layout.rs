//! Screen geometry shared by drawing and mouse hit-testing
//!
//! Both the renderer and the mouse handler compute positions from the same
//! terminal area, so a click always lands on what was drawn there.
//!
//! ```text
//! +-- Contact card ------------------------+
//! | Contact                                |
//! |                                        |
//! | Email address                          |
//! | +--------+ +-------------------------+ |   <- country button (phone only)
//! | | US +1  | | field                   | |
//! | +--------+ +-------------------------+ |
//! | validity hint                          |
//! | Use a phone number                     |
//! |                                        |
//! | +------------------------------------+ |
//! | |               Send ->              | |
//! | +------------------------------------+ |
//! +----------------------------------------+
//! ```

use crate::state::{InputMode, Outcome, COUNTRIES};
use crate::ui::components::{dialog_copy, wrap_text, BUTTON_HEIGHT};
use ratatui::layout::Rect;

/// Rows taken by the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

const CARD_MAX_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 14;
const FIELD_HEIGHT: u16 = 3;
const COUNTRY_BUTTON_WIDTH: u16 = 10;
const DIALOG_MAX_WIDTH: u16 = 50;
const DROPDOWN_MAX_HEIGHT: u16 = 8;

/// True if the cell at (`column`, `row`) is inside `rect`
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Center a `width` x `height` rect inside `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Main area above the status bar
pub fn content_area(screen: Rect) -> Rect {
    Rect {
        height: screen.height.saturating_sub(STATUS_BAR_HEIGHT),
        ..screen
    }
}

/// Status bar row
pub fn status_bar_area(screen: Rect) -> Rect {
    Rect {
        x: screen.x,
        y: screen.y + screen.height.saturating_sub(STATUS_BAR_HEIGHT),
        width: screen.width,
        height: STATUS_BAR_HEIGHT.min(screen.height),
    }
}

/// Positions of everything on the contact card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub card: Rect,
    pub title: Rect,
    pub label: Rect,
    pub country_button: Option<Rect>,
    pub field: Rect,
    pub hint: Rect,
    pub toggle_link: Rect,
    pub send_button: Rect,
}

impl FormLayout {
    pub fn compute(screen: Rect, mode: InputMode) -> Self {
        let area = content_area(screen);
        let card_width = CARD_MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
        let card = centered(area, card_width, CARD_HEIGHT);

        // Inside the border, 1 column of padding on each side
        let inner_x = card.x + 2;
        let inner_width = card.width.saturating_sub(4);
        let row = |offset: u16, height: u16| Rect {
            x: inner_x,
            y: card.y + offset,
            width: inner_width,
            height,
        };

        let field_row = row(4, FIELD_HEIGHT);
        let (country_button, field) = match mode {
            InputMode::Email => (None, field_row),
            InputMode::Phone => {
                let button_width = COUNTRY_BUTTON_WIDTH.min(field_row.width / 2);
                let button = Rect {
                    width: button_width,
                    ..field_row
                };
                let field = Rect {
                    x: field_row.x + button_width + 1,
                    width: field_row.width.saturating_sub(button_width + 1),
                    ..field_row
                };
                (Some(button), field)
            }
        };

        let toggle_text = mode.toggle_label().chars().count() as u16;

        Self {
            card,
            title: row(1, 1),
            label: row(3, 1),
            country_button,
            field,
            hint: row(7, 1),
            toggle_link: Rect {
                width: toggle_text.min(inner_width),
                ..row(8, 1)
            },
            send_button: row(10, BUTTON_HEIGHT),
        }
    }

    /// Move every rect down by `rows`, clipped to `bounds`
    pub fn translated(&self, rows: u16, bounds: Rect) -> Self {
        let shift = |rect: Rect| {
            Rect {
                y: rect.y.saturating_add(rows),
                ..rect
            }
            .intersection(bounds)
        };
        Self {
            card: shift(self.card),
            title: shift(self.title),
            label: shift(self.label),
            country_button: self.country_button.map(shift),
            field: shift(self.field),
            hint: shift(self.hint),
            toggle_link: shift(self.toggle_link),
            send_button: shift(self.send_button),
        }
    }

    /// Country dropdown, opened below the country button
    pub fn country_dropdown(&self, screen: Rect) -> Option<Rect> {
        let anchor = self.country_button?;
        let width = 24.min(screen.width);
        let wanted = (COUNTRIES.len() as u16 + 2).min(DROPDOWN_MAX_HEIGHT);
        let y = anchor.y + anchor.height;
        let available = content_area(screen).bottom().saturating_sub(y);
        Some(Rect {
            x: anchor.x.min(screen.right().saturating_sub(width)),
            y,
            width,
            height: wanted.min(available).max(3.min(available)),
        })
    }

    /// First visible row of the dropdown list when `highlighted` is kept in view
    pub fn dropdown_scroll_offset(dropdown: Rect, highlighted: usize) -> usize {
        let visible = dropdown.height.saturating_sub(2).max(1) as usize;
        (highlighted + 1).saturating_sub(visible)
    }

    /// Map a click inside the dropdown to a country index
    pub fn dropdown_index_at(dropdown: Rect, row: u16, scroll_offset: usize) -> Option<usize> {
        // First and last rows are borders
        if row <= dropdown.y || row >= dropdown.bottom().saturating_sub(1) {
            return None;
        }
        let index = (row - dropdown.y - 1) as usize + scroll_offset;
        (index < COUNTRIES.len()).then_some(index)
    }
}

/// Positions inside the result dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    /// Dialog body; clicks outside it hit the backdrop
    pub body: Rect,
    pub glyph: Rect,
    pub title: Rect,
    pub message: Rect,
    pub message_lines: Vec<String>,
    pub close_button: Rect,
}

impl DialogLayout {
    pub fn compute(screen: Rect, outcome: Outcome) -> Self {
        let area = content_area(screen);
        let width = DIALOG_MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
        let inner_width = width.saturating_sub(4);
        let message_lines = wrap_text(dialog_copy(outcome).message, inner_width as usize);
        let message_height = message_lines.len() as u16;

        // border, glyph, blank, title, blank, message, blank, button, border
        let height = 1 + 1 + 1 + 1 + 1 + message_height + 1 + BUTTON_HEIGHT + 1;
        let body = centered(area, width, height);

        let row = |offset: u16, height: u16| Rect {
            x: body.x + 2,
            y: body.y + offset,
            width: inner_width,
            height,
        };

        Self {
            body,
            glyph: row(1, 1),
            title: row(3, 1),
            message: row(5, message_height),
            message_lines,
            close_button: row(6 + message_height, BUTTON_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    mod helpers {
        use super::*;

        #[test]
        fn test_hit_edges() {
            let rect = Rect::new(5, 5, 3, 2);
            assert!(hit(rect, 5, 5));
            assert!(hit(rect, 7, 6));
            assert!(!hit(rect, 8, 5));
            assert!(!hit(rect, 5, 7));
            assert!(!hit(rect, 4, 5));
        }

        #[test]
        fn test_hit_empty_rect() {
            assert!(!hit(Rect::new(3, 3, 0, 0), 3, 3));
        }

        #[test]
        fn test_centered() {
            let rect = centered(Rect::new(0, 0, 80, 24), 40, 10);
            assert_eq!(rect, Rect::new(20, 7, 40, 10));
        }

        #[test]
        fn test_centered_clamps_to_area() {
            let rect = centered(Rect::new(0, 0, 10, 5), 40, 10);
            assert_eq!(rect, Rect::new(0, 0, 10, 5));
        }

        #[test]
        fn test_status_bar_is_last_row() {
            assert_eq!(status_bar_area(screen()), Rect::new(0, 23, 80, 1));
            assert_eq!(content_area(screen()), Rect::new(0, 0, 80, 23));
        }
    }

    mod form_layout {
        use super::*;

        #[test]
        fn test_email_has_no_country_button() {
            let layout = FormLayout::compute(screen(), InputMode::Email);
            assert!(layout.country_button.is_none());
            assert_eq!(layout.field.width, layout.card.width - 4);
        }

        #[test]
        fn test_phone_splits_field_row() {
            let layout = FormLayout::compute(screen(), InputMode::Phone);
            let button = layout.country_button.unwrap();
            assert_eq!(button.y, layout.field.y);
            assert_eq!(button.x + button.width + 1, layout.field.x);
            assert!(!hit(layout.field, button.x, button.y));
        }

        #[test]
        fn test_rows_do_not_overlap() {
            let layout = FormLayout::compute(screen(), InputMode::Phone);
            assert!(layout.title.bottom() <= layout.label.y);
            assert!(layout.label.bottom() <= layout.field.y);
            assert!(layout.field.bottom() <= layout.hint.y);
            assert!(layout.hint.bottom() <= layout.toggle_link.y);
            assert!(layout.toggle_link.bottom() <= layout.send_button.y);
            assert!(layout.send_button.bottom() < layout.card.bottom());
        }

        #[test]
        fn test_toggle_link_width_matches_copy() {
            let email = FormLayout::compute(screen(), InputMode::Email);
            let phone = FormLayout::compute(screen(), InputMode::Phone);
            assert_eq!(email.toggle_link.width, "Use a phone number".len() as u16);
            assert_eq!(phone.toggle_link.width, "Use an email instead".len() as u16);
        }

        #[test]
        fn test_card_stays_above_status_bar() {
            let layout = FormLayout::compute(screen(), InputMode::Email);
            assert!(layout.card.bottom() <= status_bar_area(screen()).y);
        }

        #[test]
        fn test_translated_moves_and_clips() {
            let layout = FormLayout::compute(screen(), InputMode::Email);
            let moved = layout.translated(2, content_area(screen()));
            assert_eq!(moved.card.y, layout.card.y + 2);
            assert_eq!(moved.field.y, layout.field.y + 2);
            assert!(moved.card.bottom() <= content_area(screen()).bottom());

            let unchanged = layout.translated(0, screen());
            assert_eq!(unchanged, layout);
        }

        #[test]
        fn test_dropdown_only_in_phone_mode() {
            let email = FormLayout::compute(screen(), InputMode::Email);
            assert!(email.country_dropdown(screen()).is_none());

            let phone = FormLayout::compute(screen(), InputMode::Phone);
            let dropdown = phone.country_dropdown(screen()).unwrap();
            let button = phone.country_button.unwrap();
            assert_eq!(dropdown.y, button.bottom());
            assert!(dropdown.bottom() <= content_area(screen()).bottom());
        }

        #[test]
        fn test_dropdown_scroll_offset() {
            let dropdown = Rect::new(10, 10, 24, 8);
            assert_eq!(FormLayout::dropdown_scroll_offset(dropdown, 0), 0);
            assert_eq!(FormLayout::dropdown_scroll_offset(dropdown, 5), 0);
            assert_eq!(FormLayout::dropdown_scroll_offset(dropdown, 6), 1);
            assert_eq!(FormLayout::dropdown_scroll_offset(dropdown, 9), 4);
        }

        #[test]
        fn test_dropdown_index_at() {
            let dropdown = Rect::new(10, 10, 24, 8);
            assert_eq!(FormLayout::dropdown_index_at(dropdown, 10, 0), None);
            assert_eq!(FormLayout::dropdown_index_at(dropdown, 11, 0), Some(0));
            assert_eq!(FormLayout::dropdown_index_at(dropdown, 12, 3), Some(4));
            assert_eq!(FormLayout::dropdown_index_at(dropdown, 17, 0), None);
        }
    }

    mod dialog_layout {
        use super::*;

        #[test]
        fn test_dialog_is_centered_in_content_area() {
            let layout = DialogLayout::compute(screen(), Outcome::Success);
            let area = content_area(screen());
            assert_eq!(
                layout.body.x,
                area.x + (area.width - layout.body.width) / 2
            );
        }

        #[test]
        fn test_close_button_inside_body() {
            for outcome in [Outcome::Success, Outcome::Failure] {
                let layout = DialogLayout::compute(screen(), outcome);
                assert!(layout.close_button.bottom() < layout.body.bottom());
                assert!(hit(
                    layout.body,
                    layout.close_button.x,
                    layout.close_button.y
                ));
            }
        }

        #[test]
        fn test_message_wraps_on_narrow_screen() {
            let wide = DialogLayout::compute(screen(), Outcome::Success);
            let narrow = DialogLayout::compute(Rect::new(0, 0, 30, 24), Outcome::Success);
            assert!(narrow.message_lines.len() > wide.message_lines.len());
            assert_eq!(narrow.message.height, narrow.message_lines.len() as u16);
        }

        #[test]
        fn test_corner_is_backdrop() {
            let layout = DialogLayout::compute(screen(), Outcome::Failure);
            assert!(!hit(layout.body, 0, 0));
        }
    }
}
