//! Canvas input mapping helpers.
//!
//! DOM events carry pointer positions relative to the canvas element in CSS
//! pixels; the engine works in the same units, so mapping is a plain copy.

#[cfg(feature = "csr")]
use scene::controls::{Button, WheelDelta};
#[cfg(feature = "csr")]
use scene::geom::Point;

#[cfg(feature = "csr")]
pub fn map_button(button: i16) -> Button {
    Button::from_dom(button)
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn wheel_delta(ev: &leptos::ev::WheelEvent) -> WheelDelta {
    WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() }
}
