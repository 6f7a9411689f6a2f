use crate::{
    core::{FrameIndex, Point},
    ease::Ease,
    error::{PlayheadError, PlayheadResult},
    interp::interpolate,
    model::{Node, Timeline},
};

/// Opacity fade-in window at the start of each node's local time, independent
/// of the node's total duration.
pub const FADE_IN_MS: f64 = 250.0;

/// Vertical travel of the enter animation, in pixels.
pub const ENTER_TRAVEL_PX: f64 = 100.0;

/// Visual parameters for one node at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NodeVisual {
    pub opacity: f64,
    pub translate_y: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedNode {
    pub id: String,
    pub position: Point,
    pub color: String,
    pub visual: NodeVisual,
}

/// Everything a presentation layer needs to draw one frame of the timeline.
/// Nodes that have not appeared yet are absent.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedFrame {
    pub frame: FrameIndex,
    pub current_ms: f64,
    pub nodes: Vec<EvaluatedNode>,
}

/// Computes one node's enter-animation parameters at `current_ms` of timeline
/// time. `None` until the node's start time is reached; past its end the
/// values hold at the settled state.
pub fn eval_node(node: &Node, current_ms: f64) -> PlayheadResult<Option<NodeVisual>> {
    if current_ms < node.start_ms {
        return Ok(None);
    }

    // A degenerate duration would hand interpolate an empty domain; surface
    // it as an evaluation failure naming the node.
    if !(node.duration_ms.is_finite() && node.duration_ms > 0.0) {
        return Err(PlayheadError::evaluation(format!(
            "node '{}' has non-positive duration_ms",
            node.id
        )));
    }

    let elapsed = (current_ms - node.start_ms).clamp(0.0, node.duration_ms);
    let opacity = interpolate(elapsed, [0.0, FADE_IN_MS], [0.0, 1.0], None)?;
    let translate_y = interpolate(
        elapsed,
        [0.0, node.duration_ms],
        [ENTER_TRAVEL_PX, 0.0],
        Some(Ease::OutQuad),
    )?;

    Ok(Some(NodeVisual {
        opacity,
        translate_y,
    }))
}

pub struct Evaluator;

impl Evaluator {
    /// Evaluates every visible node of `timeline` at a clock frame.
    ///
    /// Negative frames (reachable by seeking) evaluate to negative timeline
    /// time, before every node's start.
    #[tracing::instrument(skip(timeline))]
    pub fn eval_frame(timeline: &Timeline, frame: FrameIndex) -> PlayheadResult<EvaluatedFrame> {
        timeline.validate()?;
        let current_ms = timeline.fps.frames_to_ms(frame);

        let mut nodes = Vec::new();
        for node in &timeline.nodes {
            let Some(visual) = eval_node(node, current_ms)? else {
                continue;
            };
            nodes.push(EvaluatedNode {
                id: node.id.clone(),
                position: node.position,
                color: node.color.clone(),
                visual,
            });
        }

        Ok(EvaluatedFrame {
            frame,
            current_ms,
            nodes,
        })
    }
}
