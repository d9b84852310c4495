//! Common test utilities for building graphs, templates, and variable maps.
use settei::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A two-node graph whose resolvers count their invocations.
///
/// `alpha` depends on context key `x`, `beta` on `y`. Each resolver folds
/// its dependency's value into the config default so staleness is visible.
#[allow(dead_code)]
pub fn counted_graph() -> (Graph, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let alpha_calls = Arc::new(AtomicUsize::new(0));
    let beta_calls = Arc::new(AtomicUsize::new(0));

    let alpha_counter = Arc::clone(&alpha_calls);
    let beta_counter = Arc::clone(&beta_calls);

    let graph = Graph::builder()
        .context_keys(["x", "y"])
        .node("alpha", &["x"], move |ctx, _| {
            alpha_counter.fetch_add(1, Ordering::SeqCst);
            NodeConfig::visible().with_default(ctx.number("x").unwrap_or(0.0))
        })
        .node("beta", &["y"], move |ctx, _| {
            beta_counter.fetch_add(1, Ordering::SeqCst);
            NodeConfig::visible().with_default(ctx.number("y").unwrap_or(0.0))
        })
        .build()
        .expect("counted graph must build");

    (graph, alpha_calls, beta_calls)
}

/// Builds a variable map from string pairs.
#[allow(dead_code)]
pub fn vars(pairs: &[(&str, &str)]) -> AHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[allow(dead_code)]
pub const SIMPLE_TEMPLATE_JSON: &str = r#"{
    "messages": [
        { "role": "system", "content": "You judge {{contest}} entries against the theme." },
        { "role": "user", "content": "Entry title: {{title}}" }
    ]
}"#;

#[allow(dead_code)]
pub const MULTIPART_TEMPLATE_JSON: &str = r#"{
    "messages": [
        { "role": "system", "content": "Judge the image for {{contest}}." },
        { "role": "user", "content": [
            { "type": "text", "text": "Entry: {{title}}" },
            { "type": "image_url", "image_url": { "url": "{{image}}" } },
            { "type": "text", "text": "Theme: {{theme}}" }
        ]}
    ]
}"#;
