//! Pointer input types and orbit camera controls.
//!
//! `OrbitControls` turns primary-button drags into rotation around the camera
//! target and wheel input into dolly. Input only accumulates pending motion;
//! [`OrbitControls::update`] applies a damped share of it to the camera once
//! per frame, so motion eases out after the pointer stops.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::f64::consts::{PI, TAU};

use crate::camera::PerspectiveCamera;
use crate::config::OrbitConfig;
use crate::geom::{Point, Vec3};

/// Keeps the polar angle away from the poles so the view frame stays defined.
const POLAR_EPSILON: f64 = 1e-6;

/// Pending motion below this is considered settled.
const SETTLE_EPSILON: f64 = 1e-5;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Wheel / trackpad scroll delta in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    pub dx: f64,
    /// Positive scrolls down, which dollies the camera away.
    pub dy: f64,
}

/// Orbit camera controller.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    config: OrbitConfig,
    drag_from: Option<Point>,
    pending_theta: f64,
    pending_phi: f64,
    pending_scale: f64,
}

impl OrbitControls {
    #[must_use]
    pub fn new(config: OrbitConfig) -> Self {
        Self { config, drag_from: None, pending_theta: 0.0, pending_phi: 0.0, pending_scale: 1.0 }
    }

    /// Whether a rotate drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Whether pending motion remains to be applied.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.pending_theta.abs() > SETTLE_EPSILON
            || self.pending_phi.abs() > SETTLE_EPSILON
            || (self.pending_scale - 1.0).abs() > SETTLE_EPSILON
    }

    pub fn pointer_down(&mut self, screen: Point, button: Button) {
        if button == Button::Primary {
            self.drag_from = Some(screen);
        }
    }

    /// Accumulate rotation from a drag. Returns `true` if a drag consumed the move.
    ///
    /// A full viewport height of drag is one full turn at the default speed.
    pub fn pointer_move(&mut self, screen: Point, viewport_height: f64) -> bool {
        let Some(from) = self.drag_from else {
            return false;
        };
        if viewport_height > 0.0 {
            let k = TAU / viewport_height * self.config.rotate_speed;
            self.pending_theta -= (screen.x - from.x) * k;
            self.pending_phi -= (screen.y - from.y) * k;
        }
        self.drag_from = Some(screen);
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag_from = None;
    }

    pub fn wheel(&mut self, delta: WheelDelta) {
        self.pending_scale *= (1.0 + self.config.zoom_speed).powf(delta.dy / 100.0);
    }

    /// Apply a damped share of pending motion to `camera`. Returns `true` if
    /// the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if !self.is_moving() {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
            self.pending_scale = 1.0;
            return false;
        }

        let damping = self.config.damping.clamp(f64::EPSILON, 1.0);
        let offset = camera.position - camera.target;
        let radius = offset.length();
        if radius <= 0.0 {
            return false;
        }
        let theta = offset.x.atan2(offset.z) + self.pending_theta * damping;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + self.pending_phi * damping)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        let radius = (radius * self.pending_scale)
            .clamp(self.config.min_distance, self.config.max_distance.max(self.config.min_distance));

        camera.position = camera.target
            + Vec3::new(radius * phi.sin() * theta.sin(), radius * phi.cos(), radius * phi.sin() * theta.cos());

        self.pending_theta *= 1.0 - damping;
        self.pending_phi *= 1.0 - damping;
        self.pending_scale = 1.0;
        true
    }
}
