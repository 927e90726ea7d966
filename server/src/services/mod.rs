//! Domain services used by HTTP routes.
//!
//! Service modules own the packing logic so route handlers can stay focused
//! on protocol translation.

pub mod packer;
