//! Dialog rendering

pub mod common;
pub mod form_dialog;
pub mod system_dialogs;

pub use form_dialog::render_form_dialog;
pub use system_dialogs::{render_delete_confirmation_dialog, render_help_dialog, render_logs_dialog};
