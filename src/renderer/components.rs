use crate::model::{ParameterLocation, SchemaGraph, SchemaId, SchemaKind};
use crate::renderer::disclosure::LeafDescriptor;
use crate::renderer::traits::RenderPolicy;

/// Helper for mapping parameter locations to group labels.
pub struct LabelRenderer;

impl LabelRenderer {
    /// Canonical labels for path/query/header; anything else passes its raw
    /// location value through verbatim. Policy overrides win in all cases.
    pub fn group_label(&self, location: &ParameterLocation, policy: &RenderPolicy) -> String {
        if let Some(label) = policy.group_labels.get(location.key()) {
            return label.clone();
        }
        match location {
            ParameterLocation::Path => "Path parameters".to_string(),
            ParameterLocation::Query => "Query parameters".to_string(),
            ParameterLocation::Header => "Header parameters".to_string(),
            other => other.key().to_string(),
        }
    }
}

/// Helper producing one-level schema summaries.
///
/// Summaries look at a node and at most one child's kind word, never
/// recursing, so they are safe on cyclic graphs and O(1) per row.
pub struct SummaryRenderer;

impl SummaryRenderer {
    pub fn summarize(
        &self,
        id: SchemaId,
        graph: &SchemaGraph,
        policy: &RenderPolicy,
    ) -> LeafDescriptor {
        let node = graph.node(id);
        match &node.kind {
            SchemaKind::Primitive {
                ty,
                format,
                constraints,
            } => {
                let type_label = match format {
                    Some(format) => format!("{} ({})", ty, format),
                    None => ty.clone(),
                };
                LeafDescriptor {
                    type_label,
                    constraints: constraints.clone(),
                }
            }
            SchemaKind::Object { .. } => LeafDescriptor::plain("object"),
            SchemaKind::Array { items } => {
                LeafDescriptor::plain(format!("array of {}", self.kind_word(*items, graph, policy)))
            }
            SchemaKind::Composite { kind, .. } => LeafDescriptor::plain(kind.label()),
            SchemaKind::Reference { target } => {
                LeafDescriptor::plain(format!("reference to {}", target))
            }
            SchemaKind::Unspecified => LeafDescriptor::plain(policy.unspecified_label.clone()),
        }
    }

    /// Single-word description of a node's kind; one arena lookup, no
    /// descent.
    pub fn kind_word(&self, id: SchemaId, graph: &SchemaGraph, policy: &RenderPolicy) -> String {
        match &graph.node(id).kind {
            SchemaKind::Primitive { ty, .. } => ty.clone(),
            SchemaKind::Object { .. } => "object".to_string(),
            SchemaKind::Array { .. } => "array".to_string(),
            SchemaKind::Composite { kind, .. } => kind.label().to_string(),
            SchemaKind::Reference { .. } => "reference".to_string(),
            SchemaKind::Unspecified => policy.unspecified_label.clone(),
        }
    }

    /// Header for a region that expands the given schema: the node's title
    /// when it has one, its kind word otherwise.
    pub fn branch_header(&self, id: SchemaId, graph: &SchemaGraph, policy: &RenderPolicy) -> String {
        match &graph.node(id).title {
            Some(title) => title.clone(),
            None => self.kind_word(id, graph, policy),
        }
    }
}
