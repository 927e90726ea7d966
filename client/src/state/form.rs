//! Box-form editor state.
//!
//! Every field is kept as the raw text the user typed so that partially
//! entered values survive re-renders. Parsing and validation happen once, in
//! [`FormState::to_request`], right before the calculate action.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use scene::consts::MAX_BOX_ROWS;
use scene::request::{BaseDimensions, BoxSpec, InputError, build_request, parse_field, parse_quantity};
use scene::wire::{Container, PackingRequest};

/// Editable numeric/text column of a box row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowField {
    Name,
    Length,
    Width,
    Height,
    Weight,
    Quantity,
}

/// Base container dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseField {
    Width,
    Height,
    Length,
}

/// One row of the box table.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxRow {
    /// Stable key for keyed rendering; never reused within one form.
    pub id: u64,
    pub name: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
    pub fragile: bool,
    pub quantity: String,
}

impl BoxRow {
    fn empty(id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            length: String::new(),
            width: String::new(),
            height: String::new(),
            weight: String::new(),
            fragile: false,
            quantity: "1".to_owned(),
        }
    }

    /// Raw text of one column.
    pub fn field(&self, field: RowField) -> &str {
        match field {
            RowField::Name => &self.name,
            RowField::Length => &self.length,
            RowField::Width => &self.width,
            RowField::Height => &self.height,
            RowField::Weight => &self.weight,
            RowField::Quantity => &self.quantity,
        }
    }

    fn field_mut(&mut self, field: RowField) -> &mut String {
        match field {
            RowField::Name => &mut self.name,
            RowField::Length => &mut self.length,
            RowField::Width => &mut self.width,
            RowField::Height => &mut self.height,
            RowField::Weight => &mut self.weight,
            RowField::Quantity => &mut self.quantity,
        }
    }

    pub fn to_spec(&self) -> BoxSpec {
        BoxSpec {
            name: self.name.clone(),
            length: parse_field(&self.length),
            width: parse_field(&self.width),
            height: parse_field(&self.height),
            weight: parse_field(&self.weight),
            fragile: self.fragile,
            quantity: parse_quantity(&self.quantity),
        }
    }
}

/// Form contents shared by the editor and the calculate action.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub base_width: String,
    pub base_height: String,
    pub base_length: String,
    pub rows: Vec<BoxRow>,
    next_id: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            base_width: String::new(),
            base_height: String::new(),
            base_length: String::new(),
            rows: vec![BoxRow::empty(0)],
            next_id: 1,
        }
    }
}

impl FormState {
    /// Append an empty row and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooManyRows`] once the table holds
    /// [`MAX_BOX_ROWS`] rows; the table is left unchanged.
    pub fn add_row(&mut self) -> Result<u64, InputError> {
        if self.rows.len() >= MAX_BOX_ROWS {
            return Err(InputError::TooManyRows { max: MAX_BOX_ROWS });
        }
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(BoxRow::empty(id));
        Ok(id)
    }

    /// Remove the row with `id`. Returns whether a row was removed.
    pub fn remove_row(&mut self, id: u64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn row(&self, id: u64) -> Option<&BoxRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// 1-based display position of the row with `id`.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id).map(|i| i + 1)
    }

    pub fn base_field(&self, field: BaseField) -> &str {
        match field {
            BaseField::Width => &self.base_width,
            BaseField::Height => &self.base_height,
            BaseField::Length => &self.base_length,
        }
    }

    pub fn set_base(&mut self, field: BaseField, value: String) {
        match field {
            BaseField::Width => self.base_width = value,
            BaseField::Height => self.base_height = value,
            BaseField::Length => self.base_length = value,
        }
    }

    /// Store one edited column. A quantity typed below 1 snaps back to 1.
    pub fn set_field(&mut self, id: u64, field: RowField, value: String) {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return;
        };
        let value = match field {
            RowField::Quantity if parse_quantity(&value).is_some_and(|q| q < 1) => "1".to_owned(),
            _ => value,
        };
        *row.field_mut(field) = value;
    }

    pub fn set_fragile(&mut self, id: u64, fragile: bool) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.fragile = fragile;
        }
    }

    pub fn base(&self) -> BaseDimensions {
        BaseDimensions {
            width: parse_field(&self.base_width),
            length: parse_field(&self.base_length),
            height: parse_field(&self.base_height),
        }
    }

    /// Validate the form and build the request for the packing service.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] in base, row count, row order.
    pub fn to_request(&self) -> Result<(Container, PackingRequest), InputError> {
        let specs: Vec<BoxSpec> = self.rows.iter().map(BoxRow::to_spec).collect();
        build_request(&self.base(), &specs)
    }
}
