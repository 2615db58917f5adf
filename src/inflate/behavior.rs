//! Behavior graph link rewriting.

use crate::decl::GraphJson;
use crate::errors::Result;
use crate::inflate::index::IndexRegistry;
use crate::inflate::link::resolve_graph_value;
use crate::inflate::registry::InflatorRegistry;
use crate::inflate::InflateContext;

/// Replaces every link marker in the configuration and parameter values of
/// `graph` with its resolved entity.
///
/// Must run after the walk: node links are only looked up, never allocated.
pub fn rewrite_behavior_graph(
    ctx: &mut InflateContext<'_>,
    registry: &InflatorRegistry,
    index: &mut IndexRegistry,
    graph: &mut GraphJson,
) -> Result<()> {
    let mut rewritten = 0usize;

    for node in &mut graph.nodes {
        if let Some(configuration) = &mut node.configuration {
            for value in configuration.values_mut() {
                let resolved = resolve_graph_value(ctx, registry, index, value)?;
                rewritten += usize::from(resolved != *value);
                *value = resolved;
            }
        }

        if let Some(parameters) = &mut node.parameters {
            for value in parameters.values_mut().filter_map(|p| p.value.as_mut()) {
                let resolved = resolve_graph_value(ctx, registry, index, value)?;
                rewritten += usize::from(resolved != *value);
                *value = resolved;
            }
        }
    }

    log::debug!(
        "Behavior graph: {} nodes, {rewritten} links resolved",
        graph.nodes.len()
    );
    Ok(())
}
