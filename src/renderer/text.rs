use crate::renderer::disclosure::{ToggleRegion, VisualNode};

/// Plain-text projection of the visual tree, reflecting the current
/// disclosure state: closed regions print their header only, open ones
/// print their cached children beneath it.
pub struct TextRenderer;

impl TextRenderer {
    pub fn render(&self, nodes: &[VisualNode]) -> String {
        let mut output = String::new();
        self.render_nodes(nodes, 0, &mut output);
        output
    }

    /// Force-opens regions down to `depth` levels, evaluating their lazy
    /// content on the way. Recursive-reference markers keep this finite on
    /// cyclic graphs no matter how large `depth` is.
    pub fn expand_to_depth(&self, nodes: &mut [VisualNode], depth: usize) {
        if depth == 0 {
            return;
        }
        for node in nodes {
            match node {
                VisualNode::Section { children, .. } => {
                    // Sections are always visible and do not consume a level.
                    self.expand_to_depth(children, depth);
                }
                VisualNode::Region(region) | VisualNode::Alternative(region) => {
                    region.open();
                    if let Some(children) = region.visible_children_mut() {
                        self.expand_to_depth(children, depth - 1);
                    }
                }
                VisualNode::Property(row) => {
                    if let Some(region) = row.details.as_mut() {
                        region.open();
                        if let Some(children) = region.visible_children_mut() {
                            self.expand_to_depth(children, depth - 1);
                        }
                    }
                }
                VisualNode::Leaf(_) | VisualNode::RecursiveRef { .. } => {}
            }
        }
    }

    fn render_nodes(&self, nodes: &[VisualNode], depth: usize, output: &mut String) {
        let indent = "  ".repeat(depth);
        for node in nodes {
            match node {
                VisualNode::Section { title, children } => {
                    output.push_str(&format!("{}{}\n", indent, title));
                    self.render_nodes(children, depth + 1, output);
                }
                VisualNode::Region(region) | VisualNode::Alternative(region) => {
                    self.render_region(region, depth, output);
                }
                VisualNode::Property(row) => {
                    let mut line = format!("{}{}", indent, row.name);
                    if row.required {
                        line.push('*');
                    }
                    line.push_str(": ");
                    line.push_str(&row.descriptor.type_label);
                    if !row.descriptor.constraints.is_empty() {
                        line.push_str(&format!(" [{}]", row.descriptor.constraints.join("; ")));
                    }
                    output.push_str(&line);
                    output.push('\n');
                    // The details region repeats the row's name as its
                    // header, so only its children are printed.
                    if let Some(children) = row.details.as_ref().and_then(|r| r.visible_children())
                    {
                        self.render_nodes(children, depth + 1, output);
                    }
                }
                VisualNode::Leaf(descriptor) => {
                    let mut line = format!("{}{}", indent, descriptor.type_label);
                    if !descriptor.constraints.is_empty() {
                        line.push_str(&format!(" [{}]", descriptor.constraints.join("; ")));
                    }
                    output.push_str(&line);
                    output.push('\n');
                }
                VisualNode::RecursiveRef { label } => {
                    output.push_str(&format!("{}[recursive: {}]\n", indent, label));
                }
            }
        }
    }

    fn render_region(&self, region: &ToggleRegion, depth: usize, output: &mut String) {
        let indent = "  ".repeat(depth);
        let marker = if region.is_open() { "-" } else { "+" };
        output.push_str(&format!("{}{} {}\n", indent, marker, region.header()));
        if let Some(children) = region.visible_children() {
            self.render_nodes(children, depth + 1, output);
        }
    }
}
