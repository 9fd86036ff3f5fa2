use crate::model::{Parameter, ParameterLocation};
use crate::renderer::components::LabelRenderer;
use crate::renderer::traits::RenderPolicy;

/// Parameters sharing one location, in input order. Derived fresh on every
/// render pass; never persisted.
#[derive(Debug)]
pub struct ParameterGroup<'a> {
    pub key: String,
    pub label: String,
    pub parameters: Vec<&'a Parameter>,
}

/// Partitions parameters into location groups.
///
/// Pure and stable: every parameter lands in exactly one group, input order
/// is preserved within a group, and groups are ordered path, query, header,
/// then any other locations in order of first appearance. An unrecognized
/// location gets its own group labeled with the raw value.
pub fn classify<'a>(parameters: &'a [Parameter], policy: &RenderPolicy) -> Vec<ParameterGroup<'a>> {
    let labels = LabelRenderer;
    let mut groups: Vec<ParameterGroup<'a>> = Vec::new();

    for parameter in parameters {
        let key = parameter.location.key();
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.parameters.push(parameter),
            None => groups.push(ParameterGroup {
                key: key.to_string(),
                label: labels.group_label(&parameter.location, policy),
                parameters: vec![parameter],
            }),
        }
    }

    // Stable sort: non-canonical groups share one rank and keep their
    // first-appearance order after the canonical three.
    groups.sort_by_key(|group| canonical_rank(&group.key));
    groups
}

fn canonical_rank(key: &str) -> usize {
    match key {
        "path" => 0,
        "query" => 1,
        "header" => 2,
        _ => 3,
    }
}

/// Location of the group that opens by default when composed.
pub fn default_open_key() -> &'static str {
    ParameterLocation::Path.key()
}
