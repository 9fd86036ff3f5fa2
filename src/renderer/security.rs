use crate::model::SecurityRequirement;
use crate::renderer::disclosure::{LeafDescriptor, VisualNode};
use crate::renderer::traits::RenderPolicy;

/// Renders the alternative security-scheme combinations required to call
/// the operation: one row per requirement (alternatives, OR), each joining
/// the scheme names that must hold together (AND).
///
/// Returns `None` when there are no requirements; the composer then omits
/// the section entirely.
pub fn present(
    requirements: &[SecurityRequirement],
    policy: &RenderPolicy,
) -> Option<VisualNode> {
    if requirements.is_empty() {
        return None;
    }

    let children = requirements
        .iter()
        .map(|requirement| {
            let label = if requirement.schemes.is_empty() {
                // An empty requirement set authorizes unauthenticated calls.
                "none".to_string()
            } else {
                requirement.schemes.join(" + ")
            };
            VisualNode::Leaf(LeafDescriptor::plain(label))
        })
        .collect();

    Some(VisualNode::Section {
        title: policy.security_label.clone(),
        children,
    })
}
