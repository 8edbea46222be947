//! Public dashboard view state: the loaded project, the viewer's pending
//! cosmetic edits, and the flags derived from both.
//!
//! DESIGN
//! ======
//! Every transition is a plain synchronous method so the rules can be tested
//! without a browser. The async controller and the page only sequence these
//! calls around network requests.
//!
//! INVARIANTS
//! ==========
//! - `is_saved` is true iff `edits` equals the edits derived from `project`
//!   (or no project is loaded). Every mutator recomputes it.
//! - `edits` is reset from `project` once per successful load and
//!   otherwise only changes through viewer actions.
//! - Draft or non-public charts keep their slot in the grid as invisible
//!   placeholders so layout order is preserved.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::DashboardError;
use crate::net::types::{Chart, Project, ProjectUpdate};
use crate::util::color::{DEFAULT_BACKGROUND, Rgba};

pub const TITLE_BLACK: &str = "black";
pub const TITLE_WHITE: &str = "white";

/// Title color used for editors when the project has none saved.
pub const DEFAULT_TITLE_COLOR: &str = TITLE_WHITE;

/// Width of the chart grid in columns.
pub const GRID_COLUMNS: u32 = 16;
const COLUMNS_PER_CHART_SIZE: u32 = 4;

/// The viewer's unsaved cosmetic settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingEdits {
    pub background_color: String,
    pub title_color: String,
    pub dashboard_title: String,
}

impl Default for PendingEdits {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND.to_owned(),
            title_color: TITLE_BLACK.to_owned(),
            dashboard_title: String::new(),
        }
    }
}

impl PendingEdits {
    /// Derive edits from a saved project, filling display defaults.
    pub fn from_project(project: &Project) -> Self {
        Self {
            background_color: project
                .background_color
                .clone()
                .unwrap_or_else(|| DEFAULT_BACKGROUND.to_owned()),
            title_color: project
                .title_color
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE_COLOR.to_owned()),
            dashboard_title: project
                .dashboard_title
                .clone()
                .unwrap_or_else(|| project.name.clone()),
        }
    }

    pub fn to_update(&self) -> ProjectUpdate {
        ProjectUpdate {
            background_color: self.background_color.clone(),
            title_color: self.title_color.clone(),
            dashboard_title: self.dashboard_title.clone(),
        }
    }
}

/// Colors handed to the render layer instead of mutating global page style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background_color: String,
    pub title_color: String,
}

impl Theme {
    /// Inline style for the page root.
    pub fn root_style(&self) -> String {
        format!("background-color: {};", self.background_color)
    }
}

/// One position in the chart grid.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartSlot {
    /// Rendered chart spanning `width` of `GRID_COLUMNS`.
    Visible { chart: Chart, width: u32 },
    /// Zero-size stand-in for a draft or private chart.
    Placeholder { chart_id: i64 },
}

/// Grid span for a chart size, kept within the grid.
pub fn column_width(chart_size: u32) -> u32 {
    chart_size
        .saturating_mul(COLUMNS_PER_CHART_SIZE)
        .clamp(1, GRID_COLUMNS)
}

#[derive(Clone, Debug)]
pub struct DashboardState {
    /// Last saved snapshot from the backend.
    pub project: Option<Project>,
    pub edits: PendingEdits,
    pub loading: bool,
    pub editing_title: bool,
    pub editor_visible: bool,
    pub is_saved: bool,
    pub save_loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            project: None,
            edits: PendingEdits::default(),
            loading: false,
            editing_title: false,
            editor_visible: false,
            is_saved: true,
            save_loading: false,
        }
    }
}

impl DashboardState {
    // =============================================================
    // Load / save transitions
    // =============================================================

    /// Start a fresh load; nothing from a previously shown dashboard,
    /// including edit rights, carries over.
    pub fn begin_load(&mut self) {
        *self = Self { loading: true, ..Self::default() };
    }

    /// Replace the snapshot wholesale and reset edits from it.
    pub fn apply_loaded(&mut self, project: Project) {
        self.edits = PendingEdits::from_project(&project);
        self.project = Some(project);
        self.loading = false;
        self.refresh_saved();
    }

    /// A failed fetch leaves the current snapshot and the edits untouched.
    pub fn apply_load_failed(&mut self) {
        self.loading = false;
    }

    pub fn set_editor_visible(&mut self, visible: bool) {
        self.editor_visible = visible;
    }

    /// Mark a save in flight and return what to send.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::NotLoaded` when no project is loaded.
    pub fn begin_save(&mut self) -> Result<(i64, ProjectUpdate), DashboardError> {
        let Some(project) = self.project.as_ref() else {
            return Err(DashboardError::NotLoaded);
        };
        let payload = (project.id, self.edits.to_update());
        self.save_loading = true;
        Ok(payload)
    }

    /// Adopt the project returned by the update as the saved snapshot.
    ///
    /// Partial-update responses may omit `Charts`; the current charts are
    /// kept in that case.
    pub fn apply_save_succeeded(&mut self, mut project: Project) {
        if project.charts.is_empty() {
            if let Some(previous) = self.project.take() {
                project.charts = previous.charts;
            }
        }
        self.project = Some(project);
        self.save_loading = false;
        self.refresh_saved();
    }

    /// Keep the viewer's edits so nothing is lost; the save can be retried.
    pub fn apply_save_failed(&mut self) {
        self.save_loading = false;
        self.refresh_saved();
    }

    // =============================================================
    // Viewer edits
    // =============================================================

    /// Flip the title color between black and white.
    pub fn toggle_title_color(&mut self) {
        let next = if self.edits.title_color == TITLE_BLACK { TITLE_WHITE } else { TITLE_BLACK };
        self.edits.title_color = next.to_owned();
        self.refresh_saved();
    }

    pub fn begin_edit_title(&mut self) {
        self.editing_title = true;
    }

    /// Live update while the inline title input is open.
    pub fn set_title_draft(&mut self, text: &str) {
        text.clone_into(&mut self.edits.dashboard_title);
        self.refresh_saved();
    }

    pub fn commit_edit_title(&mut self, text: &str) {
        self.set_title_draft(text);
        self.editing_title = false;
    }

    pub fn set_background_color(&mut self, color: Rgba) {
        self.edits.background_color = color.to_css();
        self.refresh_saved();
    }

    fn refresh_saved(&mut self) {
        self.is_saved = match self.project.as_ref() {
            Some(project) => self.edits == PendingEdits::from_project(project),
            None => true,
        };
    }

    // =============================================================
    // Derived view flags
    // =============================================================

    /// At least one chart is public.
    pub fn is_public(&self) -> bool {
        self.project
            .as_ref()
            .is_some_and(|p| p.charts.iter().any(|c| c.public))
    }

    /// Whether the dashboard body (title + grid) renders at all.
    pub fn show_body(&self) -> bool {
        self.is_public()
    }

    pub fn show_save(&self) -> bool {
        self.editor_visible && !self.is_saved
    }

    /// Grid slots in chart order.
    pub fn chart_slots(&self) -> Vec<ChartSlot> {
        let Some(project) = self.project.as_ref() else {
            return Vec::new();
        };
        project
            .charts
            .iter()
            .map(|chart| {
                if chart.draft || !chart.public {
                    ChartSlot::Placeholder { chart_id: chart.id }
                } else {
                    ChartSlot::Visible { chart: chart.clone(), width: column_width(chart.chart_size) }
                }
            })
            .collect()
    }

    /// Heading text. Viewers without edit rights only ever see saved values.
    pub fn display_title(&self) -> String {
        let Some(project) = self.project.as_ref() else {
            return String::new();
        };
        if self.editor_visible && !self.edits.dashboard_title.is_empty() {
            return self.edits.dashboard_title.clone();
        }
        project
            .dashboard_title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| project.name.clone())
    }

    /// Heading color, following the same saved/pending split as the title.
    pub fn title_color(&self) -> String {
        if self.editor_visible {
            return self.edits.title_color.clone();
        }
        self.project
            .as_ref()
            .and_then(|p| p.title_color.clone())
            .unwrap_or_else(|| TITLE_BLACK.to_owned())
    }

    pub fn theme(&self) -> Theme {
        Theme { background_color: self.edits.background_color.clone(), title_color: self.title_color() }
    }

    /// Route back to the team's internal dashboard for this project.
    pub fn back_link(&self) -> Option<String> {
        self.project
            .as_ref()
            .map(|p| format!("/{}/{}/dashboard", p.team_id, p.id))
    }
}
