//! Graph for the Kling video ecosystem.
//!
//! Video generation shares the prompt surface with the image family but
//! replaces sampler controls with duration and camera motion, so this graph
//! is built standalone rather than merged from `base_graph`.

use super::{Workflow, standard_context_keys};
use crate::error::GraphConfigError;
use crate::graph::{Context, Graph, NodeConfig};

const VIDEO_ASPECT_RATIOS: &[&str] = &["1:1", "9:16", "16:9"];

const CAMERA_MOTIONS: &[&str] = &[
    "none",
    "pan_left",
    "pan_right",
    "tilt_up",
    "tilt_down",
    "zoom_in",
    "zoom_out",
];

fn current_workflow(context: &Context) -> Option<Workflow> {
    Workflow::parse(context.text("workflow").unwrap_or(""))
}

pub fn kling_graph() -> Result<Graph, GraphConfigError> {
    standard_context_keys(Graph::builder())
        .node("prompt", &[], |_, _| NodeConfig::visible())
        .node("negative_prompt", &[], |_, _| NodeConfig::visible())
        .node("source_image", &["workflow"], |ctx, _| {
            if current_workflow(ctx) == Some(Workflow::Img2Vid) {
                NodeConfig::visible()
            } else {
                NodeConfig::hidden()
            }
        })
        .node("aspect_ratio", &["workflow"], |ctx, _| {
            // img2vid inherits the ratio from the source still
            if current_workflow(ctx) == Some(Workflow::Img2Vid) {
                NodeConfig::hidden()
            } else {
                NodeConfig::visible()
                    .with_default("16:9")
                    .with_options(VIDEO_ASPECT_RATIOS.iter().copied())
            }
        })
        .node("duration", &[], |_, _| {
            NodeConfig::visible()
                .with_default(5.0)
                .with_options([5.0, 10.0])
        })
        .node("camera_motion", &[], |_, _| {
            NodeConfig::visible()
                .with_default("none")
                .with_options(CAMERA_MOTIONS.iter().copied())
        })
        .node("cfg_scale", &[], |_, _| {
            NodeConfig::visible()
                .with_range(0.0, 1.0)
                .with_step(0.05)
                .with_default(0.5)
        })
        .node("seed", &[], |_, _| NodeConfig::visible().with_default(-1.0))
        .build()
}
