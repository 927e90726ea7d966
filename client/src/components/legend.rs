//! Legend and placement-status panel.
//!
//! Lists every rendered box with its color swatch and attributes, then the
//! placement outcome of every requested box. Errors from the form or the
//! packing service are shown at the top until dismissed.

#[cfg(test)]
#[path = "legend_test.rs"]
mod legend_test;

use leptos::prelude::*;
use scene::color::Rgb;
use scene::legend::{DisplayRecord, PlacementRecord};

use crate::state::viewer::ViewerState;

fn swatch_style(color: Option<Rgb>) -> String {
    match color {
        Some(color) => format!("background-color: {}", color.to_hex()),
        None => "background-color: transparent".to_owned(),
    }
}

fn placement_line(record: &PlacementRecord) -> String {
    format!("{}: {}", record.name, record.status_text())
}

fn legend_item(record: DisplayRecord) -> impl IntoView {
    let lines = record
        .summary_lines()
        .into_iter()
        .map(|(label, value)| view! { <div>{format!("{label}: {value}")}</div> })
        .collect_view();
    view! {
        <li class="legend__item">
            <span class="legend__swatch" style=swatch_style(Some(record.color))></span>
            <div class="legend__lines">{lines}</div>
        </li>
    }
}

fn placement_item(record: PlacementRecord) -> impl IntoView {
    let class = if record.placed { "placement placement--placed" } else { "placement placement--missed" };
    view! {
        <li class=class>
            <span class="legend__swatch" style=swatch_style(record.color)></span>
            {placement_line(&record)}
        </li>
    }
}

#[component]
pub fn LegendPanel() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();

    view! {
        <aside class="legend">
            {move || {
                viewer
                    .with(|v| v.error.clone())
                    .map(|message| {
                        view! {
                            <div class="legend__error" role="alert">
                                <span>{message}</span>
                                <button type="button" class="btn" on:click=move |_| viewer.update(ViewerState::dismiss_error)>
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}
            <h2>"Packed boxes"</h2>
            <ul class="legend__list">
                {move || viewer.with(|v| v.legend.clone()).into_iter().map(legend_item).collect_view()}
            </ul>
            <h2>"Placement status"</h2>
            <ul class="legend__list">
                {move || viewer.with(|v| v.placements.clone()).into_iter().map(placement_item).collect_view()}
            </ul>
        </aside>
    }
}
