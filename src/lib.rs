//! # Settei - Generation Parameter Graph and Review Core
//!
//! **Settei** is the computational core behind a generation UI: a
//! dependency-driven configuration engine that computes, for a given
//! ecosystem/workflow selection, which input fields exist, their visibility,
//! bounds, and defaults, with correct incremental recomputation as upstream
//! fields change. Alongside it sit the review-template resolution engine
//! (schema-validated role-tagged messages with `{{variable}}` substitution)
//! and the theme-gated weighted scoring function used to rank judged
//! entries.
//!
//! Everything here is a synchronous, pure transform over in-memory data:
//! no I/O, no shared mutable state, safe to call concurrently. Surrounding
//! application layers (rendering, persistence, judging calls) hand in plain
//! data and receive plain data back.
//!
//! ## Core Workflow
//!
//! 1.  **Pick an ecosystem graph**: `graph_for(Ecosystem::Sdxl)`, or compose
//!     your own with `Graph::builder()` and `Graph::merge`.
//! 2.  **Compute the form**: feed the current [`graph::Context`] to
//!     [`graph::Graph::compute`]; feed the returned state back in on the
//!     next change for incremental recomputation.
//! 3.  **Resolve templates**: [`template::parse_template`] then
//!     [`template::resolve_template`] for judging prompts.
//! 4.  **Rank**: [`scoring::calculate_weighted_score`] over the judged
//!     [`scoring::Score`].
//!
//! ## Quick Start
//!
//! ```rust
//! use settei::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = graph_for(Ecosystem::Sdxl)?;
//!
//!     let context = Context::new()
//!         .with("ecosystem", "sdxl")
//!         .with("workflow", "txt2img")
//!         .with("aspect_ratio", "1:1");
//!
//!     // First pass computes every node.
//!     let form = graph.compute(&context, &Extras::default(), None);
//!     assert!(!form.get("denoise").unwrap().when);
//!
//!     // Switching the workflow only recomputes nodes that declared a
//!     // dependency on "workflow"; everything else is carried forward.
//!     let context = context.with("workflow", "img2img");
//!     let form = graph.compute(&context, &Extras::default(), Some(&form));
//!     assert!(form.get("denoise").unwrap().when);
//!
//!     Ok(())
//! }
//! ```

pub mod ecosystems;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod scoring;
pub mod template;
