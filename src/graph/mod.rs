//! The dependency-tracked node graph engine.
//!
//! A [`Graph`] is an insertion-ordered collection of named nodes, each with a
//! declared list of dependency keys and a pure resolver from context to
//! [`NodeConfig`]. [`Graph::compute`] produces the merged form configuration,
//! recomputing only nodes whose declared dependencies changed since the
//! previous pass.
//!
//! Resolver purity is a caller contract: a resolver must read only the
//! context values named in its declared dependency list. The engine does not
//! guard against a resolver reaching outside its declaration; such a node
//! silently goes stale when the undeclared input changes.

use crate::error::GraphConfigError;
use ahash::{AHashMap, AHashSet};
use std::sync::Arc;

mod config;
mod value;

pub use config::NodeConfig;
pub use value::{Context, Extras, Value};

/// A node's resolver: a pure function from the full current context (and
/// externally supplied extras) to the node's configuration.
///
/// A panicking resolver propagates out of [`Graph::compute`] unchanged;
/// there is no partial-result semantics.
pub type Resolver = Arc<dyn Fn(&Context, &Extras) -> NodeConfig + Send + Sync>;

/// A named node together with its declared dependency keys.
#[derive(Clone)]
pub struct NodeDefinition {
    pub key: String,
    pub deps: Vec<String>,
    pub resolver: Resolver,
}

/// Builder for [`Graph`]. Dependency wiring is validated in [`build`](Self::build),
/// so an invalid graph never exists.
#[derive(Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeDefinition>,
    index: AHashMap<String, usize>,
    context_keys: AHashSet<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node. Re-registering an existing key replaces the earlier
    /// definition in place (last writer wins, position preserved).
    pub fn node<F>(mut self, key: &str, deps: &[&str], resolver: F) -> Self
    where
        F: Fn(&Context, &Extras) -> NodeConfig + Send + Sync + 'static,
    {
        let definition = NodeDefinition {
            key: key.to_string(),
            deps: deps.iter().map(|d| d.to_string()).collect(),
            resolver: Arc::new(resolver),
        };
        match self.index.get(key) {
            Some(&pos) => self.nodes[pos] = definition,
            None => {
                self.index.insert(key.to_string(), self.nodes.len());
                self.nodes.push(definition);
            }
        }
        self
    }

    /// Registers an external-context key that nodes may declare as a
    /// dependency without a node of that name existing.
    pub fn context_key(mut self, key: &str) -> Self {
        self.context_keys.insert(key.to_string());
        self
    }

    pub fn context_keys<'a, I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.context_keys
            .extend(keys.into_iter().map(str::to_string));
        self
    }

    /// Validates that every declared dependency resolves to another node's
    /// key or a registered context key.
    pub fn build(self) -> Result<Graph, GraphConfigError> {
        for node in &self.nodes {
            for dep in &node.deps {
                if !self.index.contains_key(dep) && !self.context_keys.contains(dep) {
                    return Err(GraphConfigError::UnknownDependency {
                        node_key: node.key.clone(),
                        dep_key: dep.clone(),
                    });
                }
            }
        }
        Ok(Graph {
            nodes: self.nodes,
            index: self.index,
            context_keys: self.context_keys,
        })
    }
}

/// An ordered, validated collection of nodes.
///
/// Insertion order is significant: [`compute`](Self::compute) returns entries
/// in registration order, which downstream rendering treats as layout order.
#[derive(Clone)]
pub struct Graph {
    nodes: Vec<NodeDefinition>,
    index: AHashMap<String, usize>,
    context_keys: AHashSet<String>,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Returns a new graph whose node set is the union of both graphs.
    ///
    /// `other`'s nodes override same-keyed nodes from `self` (the right-hand
    /// operand wins), keeping the winning definition's dependency metadata.
    /// An overridden node keeps the base graph's position so layout order is
    /// stable across overrides; genuinely new nodes append in `other`'s
    /// order. Registered context keys are unioned, so the result is valid by
    /// construction.
    pub fn merge(&self, other: &Graph) -> Graph {
        let mut nodes = self.nodes.clone();
        let mut index = self.index.clone();
        for node in &other.nodes {
            match index.get(&node.key) {
                Some(&pos) => nodes[pos] = node.clone(),
                None => {
                    index.insert(node.key.clone(), nodes.len());
                    nodes.push(node.clone());
                }
            }
        }
        let mut context_keys = self.context_keys.clone();
        context_keys.extend(other.context_keys.iter().cloned());
        Graph {
            nodes,
            index,
            context_keys,
        }
    }

    /// Computes the configuration for every node, in registration order.
    ///
    /// When `previous` is supplied, a node is recomputed only if its declared
    /// dependency set intersects the keys whose context values changed (by
    /// value equality) since the previous pass, or if the node has no entry
    /// in the previous result. Otherwise the previous [`NodeConfig`] is
    /// carried forward unchanged. Resolvers always receive the full current
    /// context, never a delta.
    pub fn compute(
        &self,
        context: &Context,
        extras: &Extras,
        previous: Option<&FormState>,
    ) -> FormState {
        let entries = self
            .nodes
            .iter()
            .map(|node| {
                let carried = previous.and_then(|prev| {
                    let unchanged = node
                        .deps
                        .iter()
                        .all(|dep| context.get(dep) == prev.context.get(dep));
                    if unchanged {
                        prev.get(&node.key).cloned()
                    } else {
                        None
                    }
                });
                let config = match carried {
                    Some(config) => config,
                    None => (node.resolver)(context, extras),
                };
                (node.key.clone(), config)
            })
            .collect();
        FormState {
            context: context.clone(),
            entries,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.key.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The output of one compute pass: the context snapshot it was computed from
/// plus the per-node configurations in graph registration order.
///
/// Feed the previous `FormState` back into [`Graph::compute`] to get
/// incremental recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    context: Context,
    entries: Vec<(String, NodeConfig)>,
}

impl FormState {
    pub fn get(&self, key: &str) -> Option<&NodeConfig> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, config)| config)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeConfig)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    /// The context snapshot this state was computed from.
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
