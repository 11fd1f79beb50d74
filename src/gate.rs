use tracing::trace;

use crate::model::NetworkParameters;
use crate::render::{CurveRenderer, Plot};

/// Skips renders whose parameters equal the last rendered ones.
///
/// The snapshot is only replaced after a render completes. Equality is plain
/// `f32` comparison per field, so a NaN parameter never matches.
#[derive(Debug, Default)]
pub struct RedrawGate {
    last: Option<NetworkParameters>,
}

impl RedrawGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stale(&self, params: &NetworkParameters) -> bool {
        self.last.as_ref() != Some(params)
    }

    /// Renders `params` if they changed since the last render.
    pub fn poll(&mut self, params: NetworkParameters, renderer: &CurveRenderer) -> Option<Plot> {
        if !self.is_stale(&params) {
            trace!("parameters unchanged, skipping redraw");
            return None;
        }
        let plot = renderer.render(params);
        self.last = Some(params);
        Some(plot)
    }

    pub fn last(&self) -> Option<&NetworkParameters> {
        self.last.as_ref()
    }

    /// Forgets the snapshot so the next poll renders.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
