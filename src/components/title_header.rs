//! Dashboard heading with inline title editing for editors.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

#[component]
pub fn TitleHeader(state: RwSignal<DashboardState>) -> impl IntoView {
    let editing = move || {
        let s = state.get();
        s.editor_visible && s.editing_title
    };
    let title_style = move || format!("color: {};", state.get().theme().title_color);

    view! {
        <Show
            when=editing
            fallback=move || {
                view! {
                    <h1 class="dashboard-title" style=title_style>
                        {move || state.get().display_title()}
                    </h1>
                }
            }
        >
            <TitleEditForm state=state/>
        </Show>
    }
}

#[component]
fn TitleEditForm(state: RwSignal<DashboardState>) -> impl IntoView {
    let commit = move || {
        let text = state.get_untracked().edits.dashboard_title;
        state.update(|s| s.commit_edit_title(&text));
    };

    view! {
        <form
            class="dashboard-title-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                commit();
            }
        >
            <input
                class="dashboard-title-form__input"
                type="text"
                placeholder="Enter a title"
                prop:value=move || state.get().edits.dashboard_title
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_title_draft(&value));
                }
            />
            <button class="btn btn--secondary" type="submit">
                "✓ Save"
            </button>
        </form>
    }
}
