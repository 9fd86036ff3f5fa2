use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::model::{RequestBody, Response, SchemaGraph, SchemaId};
use crate::renderer::disclosure::VisualNode;

/// Presentation policy shared by every region of one render: icon
/// references for the expand/collapse affordances plus label overrides.
#[derive(Debug, Clone)]
pub struct RenderPolicy {
    pub open_icon: String,
    pub closed_icon: String,
    /// Overrides keyed by location key; locations without an entry fall
    /// back to the canonical labels (path/query/header) or the raw value.
    pub group_labels: HashMap<String, String>,
    pub option_label: String,
    pub recursive_label: String,
    pub unspecified_label: String,
    pub combination_label: String,
    pub security_label: String,
    pub body_label: String,
    pub responses_label: String,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            open_icon: "chevron-down".to_string(),
            closed_icon: "chevron-right".to_string(),
            group_labels: HashMap::new(),
            option_label: "Option".to_string(),
            recursive_label: "recursive reference".to_string(),
            unspecified_label: "unspecified".to_string(),
            combination_label: "all of the following".to_string(),
            security_label: "Authorizations".to_string(),
            body_label: "Request body".to_string(),
            responses_label: "Responses".to_string(),
        }
    }
}

/// Configuration context threaded through rendering.
///
/// Carries the shared read-only schema arena, the presentation policy, the
/// cycle guard (ids on the active expansion path) and the dotted key path
/// that gives every disclosure region a stable identifier. Contexts are
/// cheap to clone, and every lazy branch captures its own snapshot so that
/// sibling branches never see each other's guard entries.
#[derive(Debug, Clone)]
pub struct RenderContext {
    graph: Arc<SchemaGraph>,
    policy: Arc<RenderPolicy>,
    guard: Vec<SchemaId>,
    path: String,
}

impl RenderContext {
    pub fn new(graph: Arc<SchemaGraph>, policy: Arc<RenderPolicy>) -> Self {
        Self {
            graph,
            policy,
            guard: Vec::new(),
            path: String::new(),
        }
    }

    pub fn graph(&self) -> &SchemaGraph {
        &self.graph
    }

    pub fn policy(&self) -> &RenderPolicy {
        &self.policy
    }

    /// The region key for the current position in the tree.
    pub fn key(&self) -> &str {
        &self.path
    }

    pub fn on_active_path(&self, id: SchemaId) -> bool {
        self.guard.contains(&id)
    }

    /// Context for descending into `id`: the id joins the active path for
    /// everything rendered beneath it.
    pub fn enter(&self, id: SchemaId) -> Self {
        let mut next = self.clone();
        next.guard.push(id);
        next
    }

    /// Context with the key path extended by one segment.
    pub fn scoped(&self, segment: &str) -> Self {
        let mut next = self.clone();
        if next.path.is_empty() {
            next.path = segment.to_string();
        } else {
            next.path.push('.');
            next.path.push_str(segment);
        }
        next
    }
}

/// Collaborator rendering the request-body section; the composer invokes it
/// only when a body is present.
pub trait BodyRenderer {
    fn render_body(&self, body: &RequestBody, context: &RenderContext) -> VisualNode;
}

/// Collaborator rendering the responses section; the composer invokes it
/// only when at least one response exists.
pub trait ResponsesRenderer {
    fn render_responses(
        &self,
        responses: &IndexMap<String, Response>,
        context: &RenderContext,
    ) -> VisualNode;
}
