//! Fixed top menu shown only to viewers with edit rights.

use leptos::prelude::*;

use crate::components::color_picker::ColorPicker;
use crate::state::dashboard::DashboardState;
use crate::util::color::Rgba;
use crate::util::media::Breakpoint;

#[component]
pub fn EditorMenu(
    state: RwSignal<DashboardState>,
    breakpoint: RwSignal<Breakpoint>,
    on_save: Callback<()>,
) -> impl IntoView {
    let show_picker = RwSignal::new(false);
    let back_href = move || state.get().back_link().unwrap_or_else(|| "/".to_owned());
    let background = Signal::derive(move || state.get().edits.background_color);
    let on_color = Callback::new(move |color: Rgba| state.update(|s| s.set_background_color(color)));
    let save_class = move || {
        if state.get().save_loading { "btn btn--secondary btn--loading" } else { "btn btn--secondary" }
    };

    view! {
        <nav class="editor-menu">
            <a class="editor-menu__item" href=back_href title="Back to your dashboard">
                "←"
            </a>
            <Show when=move || state.get().show_save()>
                <button
                    class=save_class
                    disabled=move || state.get().save_loading
                    on:click=move |_| on_save.run(())
                >
                    "✓ "
                    {move || breakpoint.get().save_label()}
                </button>
            </Show>
            <span class="editor-menu__spacer"></span>
            <div class="editor-menu__popover-anchor">
                <button
                    class="editor-menu__item"
                    title="Change the background color"
                    on:click=move |_| show_picker.update(|v| *v = !*v)
                >
                    "▣"
                </button>
                <Show when=move || show_picker.get()>
                    <div class="editor-menu__popover">
                        <ColorPicker value=background on_change=on_color/>
                    </div>
                </Show>
            </div>
            <button
                class="editor-menu__item"
                title="Edit your public dashboard title"
                on:click=move |_| state.update(DashboardState::begin_edit_title)
            >
                "✎"
            </button>
            <button
                class="editor-menu__item"
                title="Toggle white/black title"
                on:click=move |_| state.update(DashboardState::toggle_title_color)
            >
                "◐"
            </button>
        </nav>
    }
}
