//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpDashboardApi;
use crate::pages::public_dashboard::{PageController, PublicDashboardPage};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the dashboard controller, and the toast queue, then
/// routes `/b/:brew_name` to the public dashboard page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = HttpDashboardApi::new(config.api_host.clone());
    let controller: PageController = PageController::new(api.clone(), api);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(controller);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/public-dashboard.css"/>
        <Title text="Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("b"), ParamSegment("brew_name")) view=PublicDashboardPage/>
            </Routes>
        </Router>
    }
}
