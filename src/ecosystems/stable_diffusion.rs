//! Graphs for the Stable-Diffusion family of image ecosystems.
//!
//! `base_graph` carries the nodes shared across the family; the concrete
//! ecosystems merge their overrides on top (last writer wins per node key).

use super::{Workflow, standard_context_keys};
use crate::error::GraphConfigError;
use crate::graph::{Context, Graph, NodeConfig};

/// Aspect-ratio presets for ecosystems trained on varied buckets.
const FULL_ASPECT_RATIOS: &[&str] = &["1:1", "2:3", "3:2", "3:4", "4:3", "9:16", "16:9"];

/// SD1 checkpoints degrade quickly away from square, so the preset set is
/// deliberately small.
const SD1_ASPECT_RATIOS: &[&str] = &["1:1", "2:3", "3:2"];

fn current_workflow(context: &Context) -> Option<Workflow> {
    Workflow::parse(context.text("workflow").unwrap_or(""))
}

fn img2img_like(context: &Context) -> bool {
    current_workflow(context).is_some_and(|w| w.is_img2img_like())
}

/// Scales an aspect ratio to a concrete `WxH` preset with the long side at
/// `long_side`, snapped to the 64-pixel grid the samplers require.
fn resolution_preset(ratio: &str, long_side: f64) -> Vec<String> {
    let Some((w, h)) = ratio.split_once(':') else {
        return Vec::new();
    };
    let (Some(w), Some(h)) = (w.parse::<f64>().ok(), h.parse::<f64>().ok()) else {
        return Vec::new();
    };
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    let scale = long_side / w.max(h);
    let snap = |side: f64| ((side * scale / 64.0).round() * 64.0) as u32;
    vec![format!("{}x{}", snap(w), snap(h))]
}

fn aspect_ratio_node(context: &Context, ratios: &[&str]) -> NodeConfig {
    // Once a source image is attached, the ratio follows it.
    if img2img_like(context) {
        NodeConfig::hidden()
    } else {
        NodeConfig::visible()
            .with_default("1:1")
            .with_options(ratios.iter().copied())
    }
}

fn resolution_node(context: &Context, long_side: f64) -> NodeConfig {
    let ratio = context.text("aspect_ratio").unwrap_or("1:1");
    NodeConfig::visible().with_presets(resolution_preset(ratio, long_side))
}

/// Nodes shared by every image ecosystem in the family.
pub fn base_graph() -> Result<Graph, GraphConfigError> {
    standard_context_keys(Graph::builder())
        .node("prompt", &[], |_, _| NodeConfig::visible())
        .node("negative_prompt", &[], |_, _| NodeConfig::visible())
        .node("aspect_ratio", &["workflow"], |ctx, _| {
            aspect_ratio_node(ctx, FULL_ASPECT_RATIOS)
        })
        .node("resolution", &["aspect_ratio"], |ctx, _| {
            resolution_node(ctx, 1024.0)
        })
        .node("steps", &[], |_, _| {
            NodeConfig::visible()
                .with_range(10.0, 50.0)
                .with_step(1.0)
                .with_default(30.0)
        })
        .node("cfg_scale", &[], |_, _| {
            NodeConfig::visible()
                .with_range(1.0, 20.0)
                .with_step(0.5)
                .with_default(7.0)
        })
        .node("seed", &[], |_, _| {
            // -1 requests a random seed downstream
            NodeConfig::visible().with_default(-1.0)
        })
        .node("batch_size", &[], |_, extras| {
            let cap = extras.number("max_batch").unwrap_or(4.0);
            NodeConfig::visible()
                .with_range(1.0, cap)
                .with_step(1.0)
                .with_default(1.0)
        })
        .node("denoise", &["workflow"], |ctx, _| {
            if img2img_like(ctx) {
                NodeConfig::visible()
                    .with_range(0.0, 1.0)
                    .with_step(0.05)
                    .with_default(0.7)
            } else {
                NodeConfig::hidden()
            }
        })
        .build()
}

/// Base SD1: smaller aspect set, 512-side resolutions, fewer default steps.
pub fn sd1_graph() -> Result<Graph, GraphConfigError> {
    let overrides = standard_context_keys(Graph::builder())
        .node("aspect_ratio", &["workflow"], |ctx, _| {
            aspect_ratio_node(ctx, SD1_ASPECT_RATIOS)
        })
        .node("resolution", &["aspect_ratio"], |ctx, _| {
            resolution_node(ctx, 512.0)
        })
        .node("steps", &[], |_, _| {
            NodeConfig::visible()
                .with_range(10.0, 40.0)
                .with_step(1.0)
                .with_default(25.0)
        })
        .build()?;
    Ok(base_graph()?.merge(&overrides))
}

/// SDXL: wider step range, slightly lower default guidance.
pub fn sdxl_graph() -> Result<Graph, GraphConfigError> {
    let overrides = standard_context_keys(Graph::builder())
        .node("steps", &[], |_, _| {
            NodeConfig::visible()
                .with_range(20.0, 60.0)
                .with_step(1.0)
                .with_default(30.0)
        })
        .node("cfg_scale", &[], |_, _| {
            NodeConfig::visible()
                .with_range(1.0, 15.0)
                .with_step(0.5)
                .with_default(6.5)
        })
        .build()?;
    Ok(base_graph()?.merge(&overrides))
}

/// Flux: guidance-distilled, so classifier-free guidance and the negative
/// prompt are hidden and a distilled-guidance control takes their place.
pub fn flux_graph() -> Result<Graph, GraphConfigError> {
    let overrides = standard_context_keys(Graph::builder())
        .node("negative_prompt", &[], |_, _| NodeConfig::hidden())
        .node("cfg_scale", &[], |_, _| NodeConfig::hidden())
        .node("guidance", &[], |_, _| {
            NodeConfig::visible()
                .with_range(1.0, 10.0)
                .with_step(0.1)
                .with_default(3.5)
        })
        .build()?;
    Ok(base_graph()?.merge(&overrides))
}
