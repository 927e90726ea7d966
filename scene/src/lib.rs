//! Visualization and interaction engine for 3D bin-packing results.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the packing view: mapping packer-space placements into
//! render space, building the measurement ruler and its labels, replacing the
//! scene on every new packing result, billboarding labels toward the camera,
//! hit-testing boxes under the pointer, and drawing the scene. The host layer
//! only wires DOM events and network responses to the engine and applies the
//! resulting [`engine::Action`]s to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Ruler/box groups, generations, and label attachment |
//! | [`mapper`] | Packer-space to render-space coordinate mapping |
//! | [`ruler`] | Tick and label geometry for the container |
//! | [`glyph`] | Typeface parsing, text geometry, and the shared font cache |
//! | [`billboard`] | Per-frame label orientation toward the camera |
//! | [`hover`] | Pointer hover inspection and tooltip state |
//! | [`hit`] | Ray hit-testing against rendered boxes |
//! | [`camera`] | Perspective camera and screen/device conversions |
//! | [`controls`] | Pointer input types and orbit camera controls |
//! | [`render`] | Canvas 2D projection renderer |
//! | [`geom`] | Vectors, rays, and axis-aligned boxes |
//! | [`color`] | Box color parsing and formatting |
//! | [`legend`] | Display records for the legend/status panel |
//! | [`wire`] | Packing service request/response types |
//! | [`request`] | Form input validation and request building |
//! | [`config`] | Viewer configuration |
//! | [`consts`] | Shared numeric constants |

pub mod billboard;
pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod controls;
pub mod engine;
pub mod geom;
pub mod glyph;
pub mod hit;
pub mod hover;
pub mod legend;
pub mod mapper;
pub mod render;
pub mod request;
pub mod ruler;
pub mod scene;
pub mod wire;
