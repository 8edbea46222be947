//! Wire DTOs for the project/dashboard endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON (`team_id`, `dashboardTitle`,
//! `Charts`, ...) so serde round-trips stay lossless. Chart rendering data
//! is opaque to this crate and is carried through untouched in `payload`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A project as returned by the public dashboard and project endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: i64,
    /// Owning team identifier, used to build the back-to-dashboard link.
    pub team_id: i64,
    /// Project name; the title fallback when no dashboard title is set.
    pub name: String,
    /// Custom title shown on the public dashboard.
    #[serde(rename = "dashboardTitle", default, skip_serializing_if = "Option::is_none")]
    pub dashboard_title: Option<String>,
    /// Page background as any CSS color (`#1F77B4`, `rgba(...)`).
    #[serde(rename = "backgroundColor", default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Title and footer text color.
    #[serde(rename = "titleColor", default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    /// Charts in layout order.
    #[serde(rename = "Charts", default)]
    pub charts: Vec<Chart>,
}

/// A single chart embedded in a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub id: i64,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub draft: bool,
    /// Width multiplier; the grid column spans `chart_size * 4` of 16.
    #[serde(rename = "chartSize", default = "default_chart_size")]
    pub chart_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Remaining chart fields, handed to the renderer as-is.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

fn default_chart_size() -> u32 {
    2
}

/// Partial project fields sent by `PUT /project/{id}` when saving edits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "titleColor")]
    pub title_color: String,
    #[serde(rename = "dashboardTitle")]
    pub dashboard_title: String,
}
