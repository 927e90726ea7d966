//! Viewer state shared between the form, the canvas host, and the side panels.
//!
//! ARCHITECTURE
//! ============
//! The calculate action never touches the engine directly. It stamps each
//! request with a sequence number and parks the outcome here; `CanvasHost`
//! picks up the newest outcome and feeds it to the engine. Responses that
//! arrive after a newer request was issued are dropped on arrival.
//! Engine [`Action`]s that concern the page (legend, placements, tooltip,
//! errors) are folded back into this struct for the panels to render.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use scene::engine::Action;
use scene::hover::TooltipContent;
use scene::legend::{DisplayRecord, PlacementRecord};
use scene::request::InputError;
use scene::wire::{Container, PackingResponse, ServiceError};

/// One finished packing request waiting to be visualized.
#[derive(Clone, Debug, PartialEq)]
pub struct PackingOutcome {
    pub seq: u64,
    pub container: Container,
    pub result: Result<PackingResponse, ServiceError>,
}

/// Tooltip placement in canvas CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    pub left: f64,
    pub top: f64,
    pub content: TooltipContent,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    /// Sequence number of the most recently issued request.
    pub latest_seq: u64,
    pub busy: bool,
    pub outcome: Option<PackingOutcome>,
    pub legend: Vec<DisplayRecord>,
    pub placements: Vec<PlacementRecord>,
    pub tooltip: Option<TooltipView>,
    pub error: Option<String>,
}

impl ViewerState {
    /// Start a request and return its sequence number.
    pub fn begin_request(&mut self) -> u64 {
        self.latest_seq += 1;
        self.busy = true;
        self.error = None;
        self.latest_seq
    }

    /// Park a finished request for the canvas host. Returns `false` and
    /// discards the result when a newer request has been issued since.
    pub fn finish_request(
        &mut self,
        seq: u64,
        container: Container,
        result: Result<PackingResponse, ServiceError>,
    ) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.busy = false;
        self.outcome = Some(PackingOutcome { seq, container, result });
        true
    }

    /// Surface a form validation failure; no request is issued.
    pub fn reject_input(&mut self, error: &InputError) {
        self.error = Some(error.to_string());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Fold one page-level engine action into the panels.
    ///
    /// Returns `false` for actions the host must handle itself.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::LoadLabels(_) => return false,
            Action::LegendUpdated(records) => self.legend = records,
            Action::PlacementUpdated(records) => self.placements = records,
            Action::ShowTooltip { left, top, content } => self.tooltip = Some(TooltipView { left, top, content }),
            Action::HideTooltip => self.tooltip = None,
            Action::ShowError(message) => self.error = Some(message),
        }
        true
    }
}
