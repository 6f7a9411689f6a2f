use std::collections::BTreeSet;

use crate::{
    core::{Fps, Point},
    error::{PlayheadError, PlayheadResult},
};

/// An independently timed visual element on the shared timeline.
///
/// The node is read-only input data: the clock never owns or mutates it, and
/// `color` is opaque to the core (passed through to whatever presents the
/// evaluated frame).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub id: String,
    /// Placement offset of the node in the host's coordinate space.
    pub position: Point,
    /// Timeline time at which the node first appears, in milliseconds.
    pub start_ms: f64,
    /// Length of the node's enter animation, in milliseconds.
    pub duration_ms: f64,
    pub color: String,
}

impl Node {
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }
}

/// A set of nodes sharing one frame-driven clock.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub fps: Fps,
    pub nodes: Vec<Node>,
}

impl Timeline {
    /// Parses a timeline from JSON. Parsing only; call [`validate`] before
    /// evaluating.
    ///
    /// [`validate`]: Timeline::validate
    pub fn from_json(s: &str) -> PlayheadResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PlayheadError::serde(format!("parse timeline JSON: {e}")))
    }

    pub fn validate(&self) -> PlayheadResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(PlayheadError::validation("fps must have num>0 and den>0"));
        }
        if self.nodes.is_empty() {
            return Err(PlayheadError::validation(
                "timeline must contain at least one node",
            ));
        }

        let mut ids = BTreeSet::new();
        for node in &self.nodes {
            if node.id.trim().is_empty() {
                return Err(PlayheadError::validation("node id must be non-empty"));
            }
            if !ids.insert(node.id.as_str()) {
                return Err(PlayheadError::validation(format!(
                    "duplicate node id '{}'",
                    node.id
                )));
            }
            if !(node.start_ms.is_finite() && node.start_ms >= 0.0) {
                return Err(PlayheadError::validation(format!(
                    "node '{}' start_ms must be finite and >= 0",
                    node.id
                )));
            }
            if !(node.duration_ms.is_finite() && node.duration_ms > 0.0) {
                return Err(PlayheadError::validation(format!(
                    "node '{}' duration_ms must be finite and > 0",
                    node.id
                )));
            }
        }
        Ok(())
    }

    /// Smallest frame count covering every node's end time: the clock bound
    /// for playing this timeline to completion. 0 for an empty node set
    /// (which `validate` rejects anyway).
    pub fn duration_in_frames(&self) -> u64 {
        let max_end_ms = self
            .nodes
            .iter()
            .map(Node::end_ms)
            .fold(f64::NEG_INFINITY, f64::max);
        if !max_end_ms.is_finite() {
            return 0;
        }
        self.fps.ms_to_frames_ceil(max_end_ms).max(0) as u64
    }
}
