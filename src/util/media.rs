//! Responsive breakpoints for dashboard chrome.
//!
//! Mirrors the layout tiers used by the rest of the app: mobile from 0 px,
//! tablet from 768 px, computer from 1024 px. Width detection is
//! browser-only; SSR renders the computer layout.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const COMPUTER_MIN_WIDTH: f64 = 1024.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Computer,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width >= COMPUTER_MIN_WIDTH {
            Self::Computer
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    /// Label for the save action; mobile gets the short form.
    pub fn save_label(self) -> &'static str {
        match self {
            Self::Mobile => "Save",
            Self::Tablet | Self::Computer => "Save changes",
        }
    }
}

/// Current viewport breakpoint.
pub fn current() -> Breakpoint {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or_else(Breakpoint::default, Breakpoint::from_width)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Breakpoint::default()
    }
}
