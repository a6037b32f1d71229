//! Application state module

mod contact;
mod focus;
mod form_state;
mod phone;
mod transition;
mod validity;

pub use contact::*;
pub use focus::*;
pub use form_state::*;
pub use phone::*;
pub use transition::*;
pub use validity::*;
