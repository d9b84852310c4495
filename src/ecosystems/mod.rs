//! Per-ecosystem graph definitions.
//!
//! Each ecosystem module is a configuration table plus a handful of small
//! branch rules, composed out of the engine via [`Graph::merge`]. All
//! recomputation semantics live in [`crate::graph`]; nothing here tracks
//! dependencies on its own.

use crate::error::GraphConfigError;
use crate::graph::{Graph, GraphBuilder};

mod kling;
mod stable_diffusion;

pub use kling::kling_graph;
pub use stable_diffusion::{base_graph, flux_graph, sd1_graph, sdxl_graph};

/// The generation ecosystems with a parameter graph definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Sd1,
    Sdxl,
    Flux,
    Kling,
}

impl Ecosystem {
    pub fn parse(name: &str) -> Result<Self, GraphConfigError> {
        match name {
            "sd1" => Ok(Ecosystem::Sd1),
            "sdxl" => Ok(Ecosystem::Sdxl),
            "flux" => Ok(Ecosystem::Flux),
            "kling" => Ok(Ecosystem::Kling),
            other => Err(GraphConfigError::UnknownEcosystem(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Sd1 => "sd1",
            Ecosystem::Sdxl => "sdxl",
            Ecosystem::Flux => "flux",
            Ecosystem::Kling => "kling",
        }
    }
}

/// The workflows a generation request can run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workflow {
    Txt2Img,
    Img2Img,
    FaceFix,
    HiresFix,
    Txt2Vid,
    Img2Vid,
}

impl Workflow {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "txt2img" => Some(Workflow::Txt2Img),
            "img2img" => Some(Workflow::Img2Img),
            "face_fix" => Some(Workflow::FaceFix),
            "hires_fix" => Some(Workflow::HiresFix),
            "txt2vid" => Some(Workflow::Txt2Vid),
            "img2vid" => Some(Workflow::Img2Vid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Workflow::Txt2Img => "txt2img",
            Workflow::Img2Img => "img2img",
            Workflow::FaceFix => "face_fix",
            Workflow::HiresFix => "hires_fix",
            Workflow::Txt2Vid => "txt2vid",
            Workflow::Img2Vid => "img2vid",
        }
    }

    /// Workflows that start from an existing image and therefore expose the
    /// denoise control.
    pub fn is_img2img_like(&self) -> bool {
        matches!(
            self,
            Workflow::Img2Img | Workflow::FaceFix | Workflow::HiresFix
        )
    }
}

/// Builds the parameter graph for an ecosystem.
pub fn graph_for(ecosystem: Ecosystem) -> Result<Graph, GraphConfigError> {
    let graph = match ecosystem {
        Ecosystem::Sd1 => sd1_graph()?,
        Ecosystem::Sdxl => sdxl_graph()?,
        Ecosystem::Flux => flux_graph()?,
        Ecosystem::Kling => kling_graph()?,
    };
    log::debug!(
        "Built parameter graph for '{}' with {} nodes",
        ecosystem.as_str(),
        graph.len()
    );
    Ok(graph)
}

/// External-context keys every ecosystem graph recognizes.
pub(crate) fn standard_context_keys(builder: GraphBuilder) -> GraphBuilder {
    builder.context_keys(["ecosystem", "workflow", "source_images"])
}
