//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and body from the page's
//! `DashboardState` signal and the shared toast queue.

pub mod chart_grid;
pub mod color_picker;
pub mod editor_menu;
pub mod title_header;
pub mod toast_stack;
