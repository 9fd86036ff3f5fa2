use indexmap::IndexMap;

// Typed data structures - the in-memory form of an operation description
// after upstream parsing/dereferencing has been applied.

/// Identity of a schema node in a [`SchemaGraph`].
///
/// Cycle detection is based on these ids, never on structural equality:
/// two structurally identical nodes are still distinct, and a node is
/// "recursive" only when its own id reappears on the active expansion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaId(u32);

/// Arena holding every schema node of one operation description.
///
/// Schemas may reference ancestors (a dereferenced self-referential type),
/// which a plain ownership tree cannot express; the arena makes such edges
/// ordinary ids and gives every node a stable identity for the cycle guard.
#[derive(Debug, Default)]
pub struct SchemaGraph {
    nodes: Vec<SchemaNode>,
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SchemaNode) -> SchemaId {
        let id = SchemaId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Reserves an id before its node is known, so a back-edge to it can be
    /// recorded while building a cyclic graph. The placeholder is an
    /// unspecified node until [`define`](Self::define) fills it in.
    pub fn reserve(&mut self) -> SchemaId {
        self.push(SchemaNode::default())
    }

    pub fn define(&mut self, id: SchemaId, node: SchemaNode) {
        self.nodes[id.0 as usize] = node;
    }

    pub fn node(&self, id: SchemaId) -> &SchemaNode {
        &self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaNode {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: SchemaKind,
}

impl SchemaNode {
    pub fn of(kind: SchemaKind) -> Self {
        Self {
            title: None,
            description: None,
            kind,
        }
    }
}

/// The closed set of schema shapes the renderer dispatches over.
#[derive(Debug, Clone, Default)]
pub enum SchemaKind {
    Primitive {
        ty: String,
        format: Option<String>,
        constraints: Vec<String>,
    },
    Object {
        properties: IndexMap<String, SchemaId>,
        required: Vec<String>,
    },
    Array {
        items: SchemaId,
    },
    Composite {
        kind: CompositeKind,
        members: Vec<SchemaId>,
    },
    /// An unresolved reference left behind by the upstream dereferencer;
    /// rendered as an opaque leaf.
    Reference {
        target: String,
    },
    /// A node carrying no usable type information.
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    OneOf,
    AnyOf,
    AllOf,
}

impl CompositeKind {
    pub fn label(&self) -> &'static str {
        match self {
            CompositeKind::OneOf => "one of",
            CompositeKind::AnyOf => "any of",
            CompositeKind::AllOf => "all of",
        }
    }
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Other(String),
}

impl ParameterLocation {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "path" => ParameterLocation::Path,
            "query" => ParameterLocation::Query,
            "header" => ParameterLocation::Header,
            "cookie" => ParameterLocation::Cookie,
            other => ParameterLocation::Other(other.to_string()),
        }
    }

    /// Stable key used for grouping and for region identifiers.
    pub fn key(&self) -> &str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub description: Option<String>,
    pub schema: SchemaId,
}

#[derive(Debug, Clone, Default)]
pub struct RequestBody {
    pub description: Option<String>,
    pub required: bool,
    /// Media type -> schema of the payload in that representation.
    pub content: IndexMap<String, SchemaId>,
}

#[derive(Debug, Clone, Default)]
pub struct Response {
    pub description: Option<String>,
    pub content: IndexMap<String, SchemaId>,
}

/// One set of scheme names that must all be satisfied together.
///
/// An operation's list of requirements is an OR across requirements and an
/// AND within one requirement's scheme set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirement {
    pub schemes: Vec<String>,
}

/// The subject being rendered: one endpoint+method description.
///
/// Owned by the caller and borrowed read-only by the rendering engine; the
/// schema ids inside resolve against the [`SchemaGraph`] built alongside it.
#[derive(Debug, Clone, Default)]
pub struct OperationDescription {
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    /// Keyed by status code or "default", in document order.
    pub responses: IndexMap<String, Response>,
    pub security: Vec<SecurityRequirement>,
}
