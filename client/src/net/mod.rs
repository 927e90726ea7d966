//! Networking: the packing service and the label typeface.

pub mod api;
