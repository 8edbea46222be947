//! Async orchestration for the public dashboard view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardController` sequences `DashboardState` transitions around the
//! injected `DashboardApi` / `AuthorizationProbe` calls. State lives behind
//! the `StateCell` seam: an `RwSignal` in the page, a `RefCell` in tests.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and save failures become error toasts and are returned to the
//! caller; nothing is retried. Probe failures are logged and otherwise
//! read as "not an editor".

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::dashboard::DashboardState;
use super::toast::ToastState;
use crate::net::api::{AuthorizationProbe, DashboardApi};
use crate::net::error::DashboardError;

pub const LOAD_FAILED_MESSAGE: &str = "Could not get the dashboard data. Please try refreshing the page.";
pub const SAVE_SUCCEEDED_MESSAGE: &str = "The dashboard has been updated!";
pub const SAVE_FAILED_MESSAGE: &str = "Oh no! We couldn't update the dashboard. Please try again";

/// Shared mutable home for a piece of view state.
pub trait StateCell<T> {
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Mutate the state. Returns `None` if the backing storage is gone.
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Drives load/save for one dashboard view.
#[derive(Clone, Debug)]
pub struct DashboardController<A, P> {
    api: A,
    probe: P,
}

impl<A: DashboardApi, P: AuthorizationProbe> DashboardController<A, P> {
    pub fn new(api: A, probe: P) -> Self {
        Self { api, probe }
    }

    /// Initial fetch: shows the loading state, then refreshes.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Fetch` if the public dashboard can't be fetched.
    pub async fn load(
        &self,
        dashboard_name: &str,
        state: &impl StateCell<DashboardState>,
        toasts: &impl StateCell<ToastState>,
    ) -> Result<(), DashboardError> {
        state.update_state(DashboardState::begin_load);
        self.refresh(dashboard_name, state, toasts).await
    }

    /// Fetch the dashboard, replace the snapshot, then probe edit rights.
    async fn refresh(
        &self,
        dashboard_name: &str,
        state: &impl StateCell<DashboardState>,
        toasts: &impl StateCell<ToastState>,
    ) -> Result<(), DashboardError> {
        let project = match self.api.fetch_public_dashboard(dashboard_name).await {
            Ok(project) => project,
            Err(e) => {
                leptos::logging::warn!("dashboard fetch failed: name={dashboard_name} error={e}");
                state.update_state(DashboardState::apply_load_failed);
                toasts.update_state(|t| t.error(LOAD_FAILED_MESSAGE));
                return Err(DashboardError::Fetch(e));
            }
        };
        let project_id = project.id;
        state.update_state(|s| s.apply_loaded(project));

        match self.probe.can_edit(project_id).await {
            Ok(can_edit) => {
                state.update_state(|s| s.set_editor_visible(can_edit));
            }
            Err(e) => {
                leptos::logging::warn!("edit permission probe failed: project={project_id} error={e}");
            }
        }
        Ok(())
    }

    /// Persist pending edits, then refresh from the backend.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Save` if the update is rejected (edits are
    /// kept), `DashboardError::NotLoaded` if nothing is loaded yet, or
    /// `DashboardError::Fetch` if the save succeeded but the refresh failed.
    pub async fn save(
        &self,
        dashboard_name: &str,
        state: &impl StateCell<DashboardState>,
        toasts: &impl StateCell<ToastState>,
    ) -> Result<(), DashboardError> {
        let (project_id, update) = state
            .update_state(DashboardState::begin_save)
            .unwrap_or(Err(DashboardError::NotLoaded))?;

        let saved = match self.api.update_project(project_id, &update).await {
            Ok(project) => project,
            Err(e) => {
                leptos::logging::warn!("dashboard save failed: project={project_id} error={e}");
                state.update_state(DashboardState::apply_save_failed);
                toasts.update_state(|t| t.error(SAVE_FAILED_MESSAGE));
                return Err(DashboardError::Save(e));
            }
        };

        state.update_state(|s| s.apply_save_succeeded(saved));
        toasts.update_state(|t| t.success(SAVE_SUCCEEDED_MESSAGE));
        self.refresh(dashboard_name, state, toasts).await
    }
}
