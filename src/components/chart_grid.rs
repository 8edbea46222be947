//! Chart grid for the public dashboard body.
//!
//! Charts render in project order on a 16-column grid. Draft and private
//! charts keep their slot as a hidden placeholder so positions don't shift.

#[cfg(test)]
#[path = "chart_grid_test.rs"]
mod chart_grid_test;

use leptos::prelude::*;

use crate::net::types::Chart;
use crate::state::dashboard::{ChartSlot, DashboardState};

fn column_style(width: u32) -> String {
    format!("grid-column: span {width};")
}

fn chart_caption(chart: &Chart) -> String {
    chart.name.clone().unwrap_or_else(|| format!("Chart {}", chart.id))
}

#[component]
pub fn ChartGrid(state: RwSignal<DashboardState>) -> impl IntoView {
    let footer_style = move || format!("color: {};", state.get().edits.title_color);

    view! {
        <div class="chart-grid">
            {move || {
                state
                    .get()
                    .chart_slots()
                    .into_iter()
                    .map(|slot| match slot {
                        ChartSlot::Visible { chart, width } => {
                            view! {
                                <div class="chart-grid__column" style={column_style(width)}>
                                    <ChartCard chart=chart/>
                                </div>
                            }
                                .into_any()
                        }
                        ChartSlot::Placeholder { chart_id } => {
                            view! {
                                <span class="chart-grid__placeholder" style="display: none" data-chart-id={chart_id.to_string()}></span>
                            }
                                .into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <div class="chart-grid__footer" style=footer_style>
                "Powered by "
                <a href="https://chartbrew.com" target="_blank" rel="noopener noreferrer">"Chartbrew"</a>
            </div>
        </div>
    }
}

/// Frame for one chart. The plotting itself is handled by the chart
/// renderer, which reads the payload from `data-chart`.
#[component]
fn ChartCard(chart: Chart) -> impl IntoView {
    let caption = chart_caption(&chart);
    let kind = chart.kind.clone().unwrap_or_default();
    let payload = serde_json::Value::Object(chart.payload.clone()).to_string();

    view! {
        <figure class="chart-card" data-chart-id={chart.id.to_string()} data-chart-kind=kind>
            <figcaption class="chart-card__title">{caption}</figcaption>
            <div class="chart-card__body" data-chart=payload></div>
        </figure>
    }
}
