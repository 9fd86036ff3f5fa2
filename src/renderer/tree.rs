use crate::model::{CompositeKind, SchemaId, SchemaKind};
use crate::renderer::components::SummaryRenderer;
use crate::renderer::disclosure::{LeafDescriptor, PropertyRow, Thunk, ToggleRegion, VisualNode};
use crate::renderer::traits::RenderContext;

/// A named member to list: a parameter in a group, or an object property.
#[derive(Debug, Clone)]
pub struct PropertyEntry {
    pub name: String,
    pub schema: SchemaId,
    pub required: bool,
}

/// Renders schema nodes into the lazily-expandable visual tree.
///
/// Recursive descent is suspended at every nesting boundary: a branch's
/// children exist only as a thunk until its disclosure region is opened, so
/// the cost of an initial render is proportional to the direct children at
/// the top level, never to total schema size. The context's active-path set
/// terminates self-referential descent with a marker node.
pub struct SchemaRenderer;

impl SchemaRenderer {
    pub fn render(&self, id: SchemaId, context: &RenderContext) -> Vec<VisualNode> {
        if context.on_active_path(id) {
            return vec![self.recursive_marker(id, context)];
        }
        let summary = SummaryRenderer;
        let node = context.graph().node(id);
        match &node.kind {
            SchemaKind::Primitive { .. }
            | SchemaKind::Reference { .. }
            | SchemaKind::Unspecified => {
                vec![VisualNode::Leaf(summary.summarize(
                    id,
                    context.graph(),
                    context.policy(),
                ))]
            }
            SchemaKind::Object {
                properties,
                required,
            } => {
                let entries: Vec<PropertyEntry> = properties
                    .iter()
                    .map(|(name, schema)| PropertyEntry {
                        name: name.clone(),
                        schema: *schema,
                        required: required.contains(name),
                    })
                    .collect();
                self.render_properties(&entries, &context.enter(id))
            }
            SchemaKind::Array { items } => {
                let items = *items;
                let inner = context.enter(id).scoped("items");
                let header = summary
                    .summarize(id, context.graph(), context.policy())
                    .type_label;
                vec![VisualNode::Region(self.lazy_branch(
                    header, items, inner, false,
                ))]
            }
            SchemaKind::Composite { kind, members } => {
                let members = members.clone();
                match kind {
                    CompositeKind::OneOf | CompositeKind::AnyOf => {
                        self.render_alternatives(&members, &context.enter(id))
                    }
                    CompositeKind::AllOf => self.render_combination(&members, &context.enter(id)),
                }
            }
        }
    }

    /// Renders a listing of named members, one property row each. The
    /// context must already carry the owning node on its active path.
    pub fn render_properties(
        &self,
        entries: &[PropertyEntry],
        context: &RenderContext,
    ) -> Vec<VisualNode> {
        entries
            .iter()
            .map(|entry| self.property_row(entry, context))
            .collect()
    }

    fn property_row(&self, entry: &PropertyEntry, context: &RenderContext) -> VisualNode {
        let summary = SummaryRenderer;
        let descriptor = summary.summarize(entry.schema, context.graph(), context.policy());
        let details = if self.has_details(entry.schema, context) {
            let branch = context.scoped(&entry.name);
            Some(self.lazy_branch(entry.name.clone(), entry.schema, branch, false))
        } else {
            None
        };
        VisualNode::Property(PropertyRow {
            name: entry.name.clone(),
            required: entry.required,
            descriptor,
            details,
        })
    }

    /// One independently toggleable branch per oneOf/anyOf member.
    fn render_alternatives(
        &self,
        members: &[SchemaId],
        context: &RenderContext,
    ) -> Vec<VisualNode> {
        members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let ordinal = index + 1;
                let header = match &context.graph().node(*member).title {
                    Some(title) => {
                        format!("{} {}: {}", context.policy().option_label, ordinal, title)
                    }
                    None => format!("{} {}", context.policy().option_label, ordinal),
                };
                let branch = context.scoped(&format!("option{}", ordinal));
                VisualNode::Alternative(self.lazy_branch(header, *member, branch, false))
            })
            .collect()
    }

    /// allOf: merge object members into one property listing when every
    /// member is an object; otherwise list the members sequentially under a
    /// combination note.
    fn render_combination(&self, members: &[SchemaId], context: &RenderContext) -> Vec<VisualNode> {
        let all_objects = members.iter().all(|member| {
            matches!(
                context.graph().node(*member).kind,
                SchemaKind::Object { .. }
            )
        });

        if all_objects {
            // Later members win on duplicate names; first appearance keeps
            // its position in the listing.
            let mut merged: indexmap::IndexMap<String, (PropertyEntry, SchemaId)> =
                indexmap::IndexMap::new();
            for member in members {
                if let SchemaKind::Object {
                    properties,
                    required,
                } = &context.graph().node(*member).kind
                {
                    for (name, schema) in properties {
                        // Required sets union across members.
                        let already_required = merged
                            .get(name)
                            .map_or(false, |(entry, _): &(PropertyEntry, SchemaId)| {
                                entry.required
                            });
                        let entry = PropertyEntry {
                            name: name.clone(),
                            schema: *schema,
                            required: already_required || required.contains(name),
                        };
                        merged.insert(name.clone(), (entry, *member));
                    }
                }
            }
            return merged
                .into_values()
                .map(|(entry, member)| self.property_row(&entry, &context.enter(member)))
                .collect();
        }

        let summary = SummaryRenderer;
        let mut nodes = vec![VisualNode::Leaf(LeafDescriptor::plain(
            context.policy().combination_label.clone(),
        ))];
        for (index, member) in members.iter().enumerate() {
            let header = summary.branch_header(*member, context.graph(), context.policy());
            let branch = context.scoped(&format!("part{}", index + 1));
            nodes.push(VisualNode::Alternative(self.lazy_branch(
                header, *member, branch, false,
            )));
        }
        nodes
    }

    /// A disclosure region whose content renders `id` when first opened.
    /// The captured context snapshot carries the guard entries of this
    /// branch only, leaving siblings unaffected.
    fn lazy_branch(
        &self,
        header: String,
        id: SchemaId,
        context: RenderContext,
        default_open: bool,
    ) -> ToggleRegion {
        let key = context.key().to_string();
        let open_icon = context.policy().open_icon.clone();
        let closed_icon = context.policy().closed_icon.clone();
        let thunk: Thunk = Box::new(move || SchemaRenderer.render(id, &context));
        ToggleRegion::wrap(key, header, open_icon, closed_icon, default_open, thunk)
    }

    fn has_details(&self, id: SchemaId, context: &RenderContext) -> bool {
        match &context.graph().node(id).kind {
            SchemaKind::Object { properties, .. } => !properties.is_empty(),
            SchemaKind::Array { .. } | SchemaKind::Composite { .. } => true,
            SchemaKind::Primitive { .. }
            | SchemaKind::Reference { .. }
            | SchemaKind::Unspecified => false,
        }
    }

    fn recursive_marker(&self, id: SchemaId, context: &RenderContext) -> VisualNode {
        let label = match &context.graph().node(id).title {
            Some(title) => title.clone(),
            None => context.policy().recursive_label.clone(),
        };
        VisualNode::RecursiveRef { label }
    }
}
