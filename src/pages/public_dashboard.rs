//! Public dashboard page: a shareable, read-only view of a project's charts
//! with cosmetic editing for team members.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/b/:brew_name`. The page owns a `DashboardState` signal, kicks off
//! the controller's `load` once the route param is known, and wires editor
//! actions to state transitions. The background/title colors reach the DOM
//! as a `Theme` applied to the page root, never as a global body style.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::chart_grid::ChartGrid;
use crate::components::editor_menu::EditorMenu;
use crate::components::title_header::TitleHeader;
use crate::components::toast_stack::ToastStack;
use crate::net::api::HttpDashboardApi;
use crate::state::controller::DashboardController;
use crate::state::dashboard::DashboardState;
use crate::state::toast::ToastState;
use crate::util::media;

/// Controller type provided through context by `App`.
pub type PageController = DashboardController<HttpDashboardApi, HttpDashboardApi>;

#[component]
pub fn PublicDashboardPage() -> impl IntoView {
    let params = use_params_map();
    let brew_name = Memo::new(move |_| params.with(|p| p.get("brew_name")).unwrap_or_default());
    let controller = expect_context::<PageController>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(DashboardState::default());
    let breakpoint = RwSignal::new(media::current());

    #[cfg(feature = "hydrate")]
    {
        let resize = window_event_listener(leptos::ev::resize, move |_| breakpoint.set(media::current()));
        on_cleanup(move || resize.remove());
    }

    let load_controller = controller.clone();
    Effect::new(move || {
        let name = brew_name.get();
        if name.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let controller = load_controller.clone();
            leptos::task::spawn_local(async move {
                let _ = controller.load(&name, &state, &toasts).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&load_controller, name);
    });

    let on_save = Callback::new(move |()| {
        if state.get_untracked().save_loading {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let controller = controller.clone();
            let name = brew_name.get_untracked();
            leptos::task::spawn_local(async move {
                let _ = controller.save(&name, &state, &toasts).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &controller;
    });

    let root_style = move || state.get().theme().root_style();
    let page_title = move || {
        let title = state.get().display_title();
        if title.is_empty() { "Dashboard".to_owned() } else { title }
    };

    view! {
        <Title text=page_title/>
        <div class="public-dashboard" style=root_style>
            <Show when=move || state.get().loading>
                <div class="dimmer">
                    <div class="dimmer__loader">"Preparing the dashboard..."</div>
                </div>
            </Show>
            <Show when=move || state.get().editor_visible>
                <EditorMenu state=state breakpoint=breakpoint on_save=on_save/>
            </Show>
            <Show when=move || state.get().show_body()>
                <main class="public-dashboard__body">
                    <TitleHeader state=state/>
                    <ChartGrid state=state/>
                </main>
            </Show>
            <ToastStack/>
        </div>
    }
}
