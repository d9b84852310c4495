//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the settei
//! crate. Import this module to get access to the core functionality
//! without having to import each type individually.

// Graph engine
pub use crate::graph::{Context, Extras, FormState, Graph, GraphBuilder, NodeConfig, Value};

// Ecosystem definitions
pub use crate::ecosystems::{Ecosystem, Workflow, graph_for};

// Template parsing and resolution
pub use crate::template::{
    ContentItem, Message, MessageContent, ResolvedTemplate, ReviewTemplate, Role, parse_template,
    resolve_template,
};

// Scoring
pub use crate::scoring::{RankOutcome, Score, calculate_weighted_score};

// Error types
pub use crate::error::{GraphConfigError, TemplateError};

// Map type used throughout the crate's API
pub use ahash::AHashMap;
