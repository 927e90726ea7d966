//! Reactive application state provided as Leptos contexts.

pub mod form;
pub mod viewer;
