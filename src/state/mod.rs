//! Client-side view state.
//!
//! DESIGN
//! ======
//! `dashboard` holds the synchronous rules, `controller` sequences them
//! around network calls, and `toast` is the notification queue shared with
//! the toast stack component.

pub mod controller;
pub mod dashboard;
pub mod toast;
