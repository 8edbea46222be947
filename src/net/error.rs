//! Error types for dashboard API calls and view operations.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` describes what went wrong on the wire. `DashboardError` says
//! which view operation it broke; the controller turns both into toasts and
//! never lets them escape as panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("not authenticated")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx HTTP status (plus response text) to an error kind.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 422 => Self::Validation(body.trim().to_owned()),
            other => Self::Status(other),
        }
    }

    /// Whether the server answered with an explicit access denial.
    ///
    /// The permission probe reads these as "not an editor" rather than
    /// as failures.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden | Self::NotFound)
    }
}

/// Failure of a dashboard view operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("dashboard fetch failed: {0}")]
    Fetch(#[source] ApiError),
    #[error("dashboard save failed: {0}")]
    Save(#[source] ApiError),
    #[error("no dashboard loaded")]
    NotLoaded,
}
