//! Hover tooltip anchored near the pointer.

use leptos::prelude::*;

use crate::state::viewer::ViewerState;

/// Tooltip for the box under the pointer; absent when nothing is hovered.
#[component]
pub fn TooltipPanel() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();

    move || {
        viewer.with(|v| v.tooltip.clone()).map(|tip| {
            let rows = tip
                .content
                .rows()
                .into_iter()
                .map(|(label, value)| {
                    let value = value.to_owned();
                    view! {
                        <div class="tooltip__row">
                            <span class="tooltip__label">{label}": "</span>
                            <span>{value}</span>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div
                    class="tooltip"
                    role="tooltip"
                    style:left=format!("{}px", tip.left)
                    style:top=format!("{}px", tip.top)
                >
                    {rows}
                </div>
            }
        })
    }
}
