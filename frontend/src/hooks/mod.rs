//! Custom Yew hooks for the frontend application.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_breakpoint;
mod use_session;

pub use use_breakpoint::use_breakpoint;
pub use use_session::{use_logged_in_user, use_session_store};
