//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::{box_form::BoxForm, canvas_host::CanvasHost, legend::LegendPanel, tooltip::TooltipPanel};
use crate::state::{form::FormState, viewer::ViewerState};
use crate::util::viewer_config::load_viewer_config;

/// Root application component.
///
/// Provides the form, viewer, and configuration contexts, then lays out the
/// editor above the 3D view with the legend beside it.
#[component]
pub fn App() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let viewer = RwSignal::new(ViewerState::default());

    provide_context(form);
    provide_context(viewer);
    provide_context(load_viewer_config());

    view! {
        <main class="app">
            <header class="app__header">
                <h1>"Box Packing"</h1>
            </header>
            <BoxForm/>
            <section class="viewer">
                <div class="viewer__stage">
                    <CanvasHost/>
                    <TooltipPanel/>
                </div>
                <LegendPanel/>
            </section>
        </main>
    }
}
