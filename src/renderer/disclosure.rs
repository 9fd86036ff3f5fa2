use std::fmt;

/// Suspended computation of a region's children.
pub type Thunk = Box<dyn FnOnce() -> Vec<VisualNode>>;

/// One node of the visual tree handed to a host rendering layer.
#[derive(Debug)]
pub enum VisualNode {
    /// A non-toggleable group header with its children (security section,
    /// responses listing).
    Section {
        title: String,
        children: Vec<VisualNode>,
    },
    /// A toggleable disclosure region.
    Region(ToggleRegion),
    /// One named property or parameter row.
    Property(PropertyRow),
    /// A terminal value descriptor.
    Leaf(LeafDescriptor),
    /// One member of a composite schema, toggleable on its own.
    Alternative(ToggleRegion),
    /// Marker for a branch that re-enters a node on the active expansion
    /// path; descent stops here.
    RecursiveRef { label: String },
}

#[derive(Debug)]
pub struct PropertyRow {
    pub name: String,
    pub required: bool,
    /// One-level summary of the property's schema; computing it never
    /// recurses, so rows stay cheap while collapsed.
    pub descriptor: LeafDescriptor,
    /// Present when the schema has nested structure worth expanding.
    pub details: Option<ToggleRegion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafDescriptor {
    pub type_label: String,
    pub constraints: Vec<String>,
}

impl LeafDescriptor {
    pub fn plain(type_label: impl Into<String>) -> Self {
        Self {
            type_label: type_label.into(),
            constraints: Vec::new(),
        }
    }
}

/// The interactive disclosure container: a header, a local open/closed
/// state, and lazily-computed content.
///
/// The content thunk runs at most once per mount lifetime. The first open
/// evaluates and caches it; closing only hides the cached children, and
/// re-opening shows them again without re-running anything. Toggle state is
/// fully local: no region ever propagates its state to parents or siblings.
pub struct ToggleRegion {
    key: String,
    header: String,
    open_icon: String,
    closed_icon: String,
    open: bool,
    content: LazyContent,
}

enum LazyContent {
    Pending(Option<Thunk>),
    Ready(Vec<VisualNode>),
}

impl ToggleRegion {
    /// Wraps lazy content in a toggleable region. A default-open region
    /// evaluates its content immediately; a closed one defers until the
    /// first toggle.
    pub fn wrap(
        key: impl Into<String>,
        header: impl Into<String>,
        open_icon: impl Into<String>,
        closed_icon: impl Into<String>,
        default_open: bool,
        content: Thunk,
    ) -> Self {
        let mut region = Self {
            key: key.into(),
            header: header.into(),
            open_icon: open_icon.into(),
            closed_icon: closed_icon.into(),
            open: false,
            content: LazyContent::Pending(Some(content)),
        };
        if default_open {
            region.open();
        }
        region
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The icon affordance for the current state.
    pub fn icon(&self) -> &str {
        if self.open {
            &self.open_icon
        } else {
            &self.closed_icon
        }
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.force();
        self.open = true;
    }

    pub fn close(&mut self) {
        // Cached content is retained; only visibility changes.
        self.open = false;
    }

    /// Children currently visible to the host layer: `Some` only while open.
    pub fn visible_children(&self) -> Option<&[VisualNode]> {
        match (&self.content, self.open) {
            (LazyContent::Ready(children), true) => Some(children),
            _ => None,
        }
    }

    pub fn visible_children_mut(&mut self) -> Option<&mut [VisualNode]> {
        match (&mut self.content, self.open) {
            (LazyContent::Ready(children), true) => Some(children),
            _ => None,
        }
    }

    /// Whether the content thunk has run yet.
    pub fn is_evaluated(&self) -> bool {
        matches!(self.content, LazyContent::Ready(_))
    }

    fn force(&mut self) {
        if let LazyContent::Pending(thunk) = &mut self.content {
            // The thunk is always present while Pending; taking it keeps
            // evaluation single-shot.
            let children = match thunk.take() {
                Some(thunk) => thunk(),
                None => Vec::new(),
            };
            self.content = LazyContent::Ready(children);
        }
    }
}

impl fmt::Debug for ToggleRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = match &self.content {
            LazyContent::Pending(_) => "pending".to_string(),
            LazyContent::Ready(children) => format!("{} children", children.len()),
        };
        f.debug_struct("ToggleRegion")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("open", &self.open)
            .field("content", &content)
            .finish()
    }
}

/// Finds a region by key anywhere in the tree, descending through computed
/// content only. Pending (never-opened) branches cannot contain mounted
/// regions, so they are not searched.
pub fn find_region_mut<'a>(
    nodes: &'a mut [VisualNode],
    key: &str,
) -> Option<&'a mut ToggleRegion> {
    for node in nodes {
        match node {
            VisualNode::Section { children, .. } => {
                if let Some(found) = find_region_mut(children, key) {
                    return Some(found);
                }
            }
            VisualNode::Region(region) | VisualNode::Alternative(region) => {
                if let Some(found) = search_region(region, key) {
                    return Some(found);
                }
            }
            VisualNode::Property(row) => {
                if let Some(region) = row.details.as_mut() {
                    if let Some(found) = search_region(region, key) {
                        return Some(found);
                    }
                }
            }
            VisualNode::Leaf(_) | VisualNode::RecursiveRef { .. } => {}
        }
    }
    None
}

fn search_region<'a>(region: &'a mut ToggleRegion, key: &str) -> Option<&'a mut ToggleRegion> {
    if region.key == key {
        return Some(region);
    }
    match &mut region.content {
        LazyContent::Ready(children) => find_region_mut(children, key),
        LazyContent::Pending(_) => None,
    }
}
