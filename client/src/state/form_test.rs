#![allow(clippy::float_cmp)]

use super::*;

fn filled() -> FormState {
    let mut form = FormState::default();
    form.set_base(BaseField::Width, "30".into());
    form.set_base(BaseField::Height, "20".into());
    form.set_base(BaseField::Length, "40".into());
    let id = form.rows[0].id;
    for (field, value) in [
        (RowField::Name, "crate"),
        (RowField::Length, "4"),
        (RowField::Width, "5"),
        (RowField::Height, "6"),
        (RowField::Weight, "2.5"),
        (RowField::Quantity, "3"),
    ] {
        form.set_field(id, field, value.into());
    }
    form
}

#[test]
fn default_form_has_one_empty_row() {
    let form = FormState::default();
    assert_eq!(form.rows.len(), 1);
    assert_eq!(form.rows[0].quantity, "1");
    assert!(!form.rows[0].fragile);
}

#[test]
fn add_row_assigns_fresh_ids() {
    let mut form = FormState::default();
    let a = form.add_row().unwrap();
    let b = form.add_row().unwrap();
    assert_ne!(a, b);
    assert_ne!(a, form.rows[0].id);
    assert_eq!(form.rows.len(), 3);
}

#[test]
fn add_row_stops_at_the_row_limit() {
    let mut form = FormState::default();
    while form.rows.len() < MAX_BOX_ROWS {
        form.add_row().unwrap();
    }
    let err = form.add_row().unwrap_err();
    assert_eq!(err.to_string(), "You can only add up to 100 boxes.");
    assert_eq!(form.rows.len(), MAX_BOX_ROWS);
}

#[test]
fn removed_ids_are_not_reused() {
    let mut form = FormState::default();
    let a = form.add_row().unwrap();
    assert!(form.remove_row(a));
    assert!(!form.remove_row(a));
    let b = form.add_row().unwrap();
    assert_ne!(a, b);
}

#[test]
fn quantity_below_one_snaps_to_one() {
    let mut form = FormState::default();
    let id = form.rows[0].id;
    form.set_field(id, RowField::Quantity, "-4".into());
    assert_eq!(form.rows[0].quantity, "1");
    form.set_field(id, RowField::Quantity, String::new());
    assert_eq!(form.rows[0].quantity, "");
}

#[test]
fn unknown_row_edits_are_ignored() {
    let mut form = FormState::default();
    form.set_field(999, RowField::Name, "ghost".into());
    form.set_fragile(999, true);
    assert_eq!(form, FormState::default());
}

#[test]
fn filled_form_builds_request_in_wire_order() {
    let mut form = filled();
    form.set_fragile(form.rows[0].id, true);
    let (container, request) = form.to_request().unwrap();
    assert_eq!((container.width, container.length, container.height), (30.0, 40.0, 20.0));
    assert_eq!(request.base_dimensions, [30.0, 20.0, 40.0]);
    let b = &request.boxes[0];
    assert_eq!((b.length, b.width, b.height, b.weight), (4.0, 5.0, 6.0, 2.5));
    assert_eq!(b.quantity, 3);
    assert!(b.fragile);
}

#[test]
fn missing_base_is_reported_first() {
    let mut form = filled();
    form.set_base(BaseField::Height, "0".into());
    assert_eq!(form.to_request().unwrap_err(), InputError::InvalidBase);
}

#[test]
fn incomplete_row_reports_its_position() {
    let mut form = filled();
    form.add_row().unwrap();
    assert_eq!(form.to_request().unwrap_err(), InputError::InvalidBox { row: 2 });
}

#[test]
fn empty_table_is_rejected() {
    let mut form = filled();
    let id = form.rows[0].id;
    form.remove_row(id);
    assert_eq!(form.to_request().unwrap_err(), InputError::NoBoxes);
}

#[test]
fn positions_follow_table_order_after_removal() {
    let mut form = FormState::default();
    let first = form.rows[0].id;
    let second = form.add_row().unwrap();
    let third = form.add_row().unwrap();
    form.remove_row(second);
    assert_eq!(form.position(first), Some(1));
    assert_eq!(form.position(third), Some(2));
    assert_eq!(form.position(second), None);
    assert!(form.row(second).is_none());
}

#[test]
fn base_fields_read_back_what_was_typed() {
    let form = filled();
    assert_eq!(form.base_field(BaseField::Width), "30");
    assert_eq!(form.base_field(BaseField::Height), "20");
    assert_eq!(form.base_field(BaseField::Length), "40");
}
