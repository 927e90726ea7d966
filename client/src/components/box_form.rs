//! Box-form editor and the calculate action.
//!
//! The editor only edits [`FormState`]. The calculate action validates the
//! form, stamps a new request on [`ViewerState`], and posts it to the packing
//! service; the outcome is parked on the viewer state for `CanvasHost`.

use leptos::prelude::*;
use scene::config::ViewerConfig;

use crate::net::api::calculate_packing;
use crate::state::form::{BaseField, FormState, RowField};
use crate::state::viewer::ViewerState;

const ROW_COLUMNS: [(RowField, &str, &str); 5] = [
    (RowField::Length, "number", "Length"),
    (RowField::Width, "number", "Width"),
    (RowField::Height, "number", "Height"),
    (RowField::Weight, "number", "Weight"),
    (RowField::Quantity, "number", "Quantity"),
];

const BASE_FIELDS: [(BaseField, &str); 3] =
    [(BaseField::Length, "Length"), (BaseField::Width, "Width"), (BaseField::Height, "Height")];

#[cfg(feature = "csr")]
fn scroll_to_bottom() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(body) = window.document().and_then(|d| d.body()) else {
        return;
    };
    window.scroll_to_with_x_and_y(0.0, f64::from(body.scroll_height()));
}

/// Form with the base dimensions, the box table, and the calculate button.
#[component]
pub fn BoxForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let service_url = expect_context::<ViewerConfig>().service_url;

    let on_add_row = move |_| {
        if let Some(Err(e)) = form.try_update(FormState::add_row) {
            viewer.update(|v| v.reject_input(&e));
        }
    };

    let on_calculate = move |_| {
        let (container, request) = match form.with_untracked(FormState::to_request) {
            Ok(built) => built,
            Err(e) => {
                viewer.update(|v| v.reject_input(&e));
                return;
            }
        };
        let Some(seq) = viewer.try_update(ViewerState::begin_request) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            scroll_to_bottom();
            log::info!("box form: requesting packing for {} box rows", request.boxes.len());
        }
        let url = service_url.clone();
        leptos::task::spawn_local(async move {
            let result = calculate_packing(&url, &request).await;
            viewer.update(|v| {
                v.finish_request(seq, container, result);
            });
        });
    };

    view! {
        <section class="box-form">
            <fieldset class="box-form__base">
                <legend>"Container"</legend>
                {BASE_FIELDS
                    .into_iter()
                    .map(|(field, label)| {
                        view! {
                            <label class="box-form__field">
                                {label}
                                <input
                                    type="number"
                                    required=true
                                    prop:value=move || form.with(|f| f.base_field(field).to_owned())
                                    on:input=move |ev| form.update(|f| f.set_base(field, event_target_value(&ev)))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>
            <table class="box-form__table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        {ROW_COLUMNS.into_iter().map(|(_, _, label)| view! { <th>{label}</th> }).collect_view()}
                        <th>"Fragile"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || form.with(|f| f.rows.iter().map(|row| row.id).collect::<Vec<_>>())
                        key=|id| *id
                        children=move |id| view! { <BoxRowEditor id=id/> }
                    />
                </tbody>
            </table>
            <div class="box-form__actions">
                <button type="button" class="btn" on:click=on_add_row>
                    "Add box"
                </button>
                <button type="button" class="btn btn--primary" on:click=on_calculate>
                    {move || if viewer.with(|v| v.busy) { "Calculating..." } else { "Calculate packing" }}
                </button>
            </div>
        </section>
    }
}

/// One editable row of the box table.
#[component]
fn BoxRowEditor(id: u64) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    let text = move |field: RowField| form.with(|f| f.row(id).map(|row| row.field(field).to_owned()).unwrap_or_default());
    let fragile = move || form.with(|f| f.row(id).is_some_and(|row| row.fragile));

    view! {
        <tr class="box-form__row">
            <td class="box-form__order">{move || form.with(|f| f.position(id).unwrap_or_default())}</td>
            <td>
                <input
                    type="text"
                    required=true
                    prop:value=move || text(RowField::Name)
                    on:input=move |ev| form.update(|f| f.set_field(id, RowField::Name, event_target_value(&ev)))
                />
            </td>
            {ROW_COLUMNS
                .into_iter()
                .map(|(field, kind, _)| {
                    view! {
                        <td>
                            <input
                                type=kind
                                required=true
                                prop:value=move || text(field)
                                on:input=move |ev| form.update(|f| f.set_field(id, field, event_target_value(&ev)))
                            />
                        </td>
                    }
                })
                .collect_view()}
            <td>
                <select
                    prop:value=move || if fragile() { "true" } else { "false" }
                    on:change=move |ev| form.update(|f| f.set_fragile(id, event_target_value(&ev) == "true"))
                >
                    <option value="false">"Not Fragile"</option>
                    <option value="true">"Fragile"</option>
                </select>
            </td>
            <td>
                <button
                    type="button"
                    class="btn btn--danger"
                    on:click=move |_| {
                        form.update(|f| {
                            f.remove_row(id);
                        });
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
