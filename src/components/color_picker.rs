//! Background color picker: a native color input plus an opacity slider.

#[cfg(test)]
#[path = "color_picker_test.rs"]
mod color_picker_test;

use leptos::prelude::*;

use crate::util::color::{Rgba, parse_css_color, parse_hex_rgb, picker_hex};

/// Combine the color input's `#rrggbb` value with an opacity percentage.
fn compose(hex: &str, alpha_percent: u8) -> Option<Rgba> {
    let (r, g, b) = parse_hex_rgb(hex)?;
    Some(Rgba::new(r, g, b, f64::from(alpha_percent.min(100)) / 100.0))
}

/// Opacity of a CSS color as a whole percentage (100 when unreadable).
fn alpha_percent(value: &str) -> u8 {
    parse_css_color(value).map_or(100, |c| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (c.a * 100.0).round() as u8;
        pct
    })
}

/// New color after the swatch changes; the opacity comes from `current`.
fn swatch_change(current: &str, hex: &str) -> Option<Rgba> {
    compose(hex, alpha_percent(current))
}

/// New color after the opacity slider changes; the hue comes from `current`.
fn opacity_change(current: &str, percent: &str) -> Option<Rgba> {
    let pct = percent.parse::<u8>().unwrap_or(100);
    compose(&picker_hex(current), pct)
}

#[component]
pub fn ColorPicker(#[prop(into)] value: Signal<String>, on_change: Callback<Rgba>) -> impl IntoView {
    let hex = move || picker_hex(&value.get());
    let alpha = move || alpha_percent(&value.get());

    view! {
        <div class="color-picker">
            <input
                class="color-picker__swatch"
                type="color"
                prop:value=hex
                on:change=move |ev| {
                    if let Some(color) = swatch_change(&value.get_untracked(), &event_target_value(&ev)) {
                        on_change.run(color);
                    }
                }
            />
            <label class="color-picker__alpha">
                "Opacity"
                <input
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || alpha().to_string()
                    on:change=move |ev| {
                        if let Some(color) = opacity_change(&value.get_untracked(), &event_target_value(&ev)) {
                            on_change.run(color);
                        }
                    }
                />
            </label>
        </div>
    }
}
