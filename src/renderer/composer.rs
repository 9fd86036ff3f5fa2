use indexmap::IndexMap;
use tracing::debug;

use crate::model::{OperationDescription, RequestBody, Response, SchemaId};
use crate::renderer::classify::{classify, default_open_key};
use crate::renderer::disclosure::{Thunk, ToggleRegion, VisualNode};
use crate::renderer::security;
use crate::renderer::traits::{BodyRenderer, RenderContext, ResponsesRenderer};
use crate::renderer::tree::{PropertyEntry, SchemaRenderer};

/// Orchestrates the top-level layout of an operation view.
///
/// Fixed ordering: security requirements, parameter groups in canonical
/// order, request body, responses. Absent sections are omitted; that is the
/// composer's only conditional behavior. Body and response internals are
/// delegated through the collaborator traits.
pub struct OperationComposer {
    body: Box<dyn BodyRenderer>,
    responses: Box<dyn ResponsesRenderer>,
}

impl OperationComposer {
    pub fn new() -> Self {
        Self {
            body: Box::new(MediaTypeBodyRenderer),
            responses: Box::new(StatusResponsesRenderer),
        }
    }

    pub fn with_renderers(
        body: Box<dyn BodyRenderer>,
        responses: Box<dyn ResponsesRenderer>,
    ) -> Self {
        Self { body, responses }
    }

    pub fn compose(
        &self,
        operation: &OperationDescription,
        context: &RenderContext,
    ) -> Vec<VisualNode> {
        let mut nodes = Vec::new();

        if let Some(section) = security::present(&operation.security, context.policy()) {
            nodes.push(section);
        }

        for group in classify(&operation.parameters, context.policy()) {
            let group_context = context.scoped("parameters").scoped(&group.key);
            let entries: Vec<PropertyEntry> = group
                .parameters
                .iter()
                .map(|parameter| PropertyEntry {
                    name: parameter.name.clone(),
                    schema: parameter.schema,
                    required: parameter.required,
                })
                .collect();
            let default_open = group.key == default_open_key();
            let thunk_context = group_context.clone();
            let thunk: Thunk =
                Box::new(move || SchemaRenderer.render_properties(&entries, &thunk_context));
            nodes.push(VisualNode::Region(ToggleRegion::wrap(
                group_context.key(),
                group.label,
                context.policy().open_icon.clone(),
                context.policy().closed_icon.clone(),
                default_open,
                thunk,
            )));
        }

        if let Some(body) = &operation.request_body {
            nodes.push(self.body.render_body(body, &context.scoped("body")));
        }

        if !operation.responses.is_empty() {
            nodes.push(
                self.responses
                    .render_responses(&operation.responses, &context.scoped("responses")),
            );
        }

        debug!(sections = nodes.len(), "composed operation view");
        nodes
    }
}

impl Default for OperationComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Default body collaborator: one region for the body, its content listing
/// each media type's schema tree. The body region opens by default; it is
/// the primary payload documentation.
pub struct MediaTypeBodyRenderer;

impl BodyRenderer for MediaTypeBodyRenderer {
    fn render_body(&self, body: &RequestBody, context: &RenderContext) -> VisualNode {
        let header = if body.required {
            format!("{} (required)", context.policy().body_label)
        } else {
            context.policy().body_label.clone()
        };
        let thunk = media_content_thunk(body.content.clone(), context.clone());
        VisualNode::Region(ToggleRegion::wrap(
            context.key(),
            header,
            context.policy().open_icon.clone(),
            context.policy().closed_icon.clone(),
            true,
            thunk,
        ))
    }
}

/// Default responses collaborator: a section with one closed region per
/// status code, in document order.
pub struct StatusResponsesRenderer;

impl ResponsesRenderer for StatusResponsesRenderer {
    fn render_responses(
        &self,
        responses: &IndexMap<String, Response>,
        context: &RenderContext,
    ) -> VisualNode {
        let children = responses
            .iter()
            .map(|(status, response)| {
                let response_context = context.scoped(status);
                let header = match &response.description {
                    Some(description) => format!("{}: {}", status, description),
                    None => status.clone(),
                };
                let thunk =
                    media_content_thunk(response.content.clone(), response_context.clone());
                VisualNode::Region(ToggleRegion::wrap(
                    response_context.key(),
                    header,
                    context.policy().open_icon.clone(),
                    context.policy().closed_icon.clone(),
                    false,
                    thunk,
                ))
            })
            .collect();
        VisualNode::Section {
            title: context.policy().responses_label.clone(),
            children,
        }
    }
}

/// Content thunk for a media-type map. A single media type renders its
/// schema tree directly; several become one closed region each.
fn media_content_thunk(content: IndexMap<String, SchemaId>, context: RenderContext) -> Thunk {
    Box::new(move || {
        let renderer = SchemaRenderer;
        if content.len() == 1 {
            if let Some((media_type, schema)) = content.first() {
                return renderer.render(*schema, &context.scoped(media_type));
            }
        }
        content
            .iter()
            .map(|(media_type, schema)| {
                let media_context = context.scoped(media_type);
                let schema = *schema;
                let key = media_context.key().to_string();
                let thunk: Thunk =
                    Box::new(move || SchemaRenderer.render(schema, &media_context));
                VisualNode::Region(ToggleRegion::wrap(
                    key,
                    media_type.clone(),
                    context.policy().open_icon.clone(),
                    context.policy().closed_icon.clone(),
                    false,
                    thunk,
                ))
            })
            .collect()
    })
}
