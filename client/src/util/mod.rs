//! Browser glue shared by the components.

pub mod canvas_input;
pub mod canvas_viewport;
pub mod viewer_config;
