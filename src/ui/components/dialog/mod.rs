//! Dialog components for TUI

mod base;
mod result_dialog;

pub use base::{render_backdrop, wrap_text};
pub use result_dialog::{dialog_copy, render_result_dialog};
