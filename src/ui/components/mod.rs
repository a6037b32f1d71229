//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{dialog_copy, render_backdrop, render_result_dialog, wrap_text};
