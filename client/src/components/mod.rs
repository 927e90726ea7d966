//! UI components.

pub mod box_form;
pub mod canvas_host;
pub mod legend;
pub mod tooltip;
