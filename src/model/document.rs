use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::model::types::*;

// Raw serde shapes for an OpenAPI-style operation document. Schemas stay as
// raw JSON values here; DocumentParser turns them into arena nodes.

#[derive(Debug, Deserialize)]
pub struct RawOperation {
    #[serde(default)]
    pub parameters: Vec<RawParameter>,

    #[serde(rename = "requestBody")]
    pub request_body: Option<RawRequestBody>,

    #[serde(default)]
    pub responses: IndexMap<String, RawResponse>,

    /// OpenAPI shape: a list of maps from scheme name to scopes. Scopes are
    /// scheme detail and out of scope here; only the names are kept.
    #[serde(default)]
    pub security: Vec<IndexMap<String, Vec<String>>>,
}

#[derive(Debug, Deserialize)]
pub struct RawParameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
    pub schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawRequestBody {
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub content: IndexMap<String, RawMediaType>,
}

#[derive(Debug, Deserialize)]
pub struct RawMediaType {
    pub schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawResponse {
    pub description: Option<String>,
    #[serde(default)]
    pub content: IndexMap<String, RawMediaType>,
}

/// Builds the typed model from a raw operation document.
///
/// This is the pre-parse boundary: reference resolution is an upstream
/// concern, so any `$ref` still present becomes an opaque `Reference` leaf.
/// JSON cannot express cycles; cyclic graphs are built directly against the
/// arena by whatever dereferenced the document.
pub struct DocumentParser {
    graph: SchemaGraph,
}

impl DocumentParser {
    pub fn new() -> Self {
        Self {
            graph: SchemaGraph::new(),
        }
    }

    pub fn parse(mut self, raw: RawOperation) -> (OperationDescription, SchemaGraph) {
        let parameters = raw
            .parameters
            .into_iter()
            .map(|p| {
                let schema = self.parse_optional_schema(p.schema.as_ref());
                Parameter {
                    name: p.name,
                    location: ParameterLocation::from_raw(&p.location),
                    required: p.required,
                    description: p.description,
                    schema,
                }
            })
            .collect();

        let request_body = raw.request_body.map(|b| RequestBody {
            description: b.description,
            required: b.required,
            content: self.parse_content(b.content),
        });

        let responses = raw
            .responses
            .into_iter()
            .map(|(status, r)| {
                let response = Response {
                    description: r.description,
                    content: self.parse_content(r.content),
                };
                (status, response)
            })
            .collect();

        let security = raw
            .security
            .into_iter()
            .map(|requirement| SecurityRequirement {
                schemes: requirement.into_keys().collect(),
            })
            .collect();

        let operation = OperationDescription {
            parameters,
            request_body,
            responses,
            security,
        };
        debug!(
            parameters = operation.parameters.len(),
            schemas = self.graph.len(),
            "parsed operation document"
        );
        (operation, self.graph)
    }

    fn parse_content(&mut self, content: IndexMap<String, RawMediaType>) -> IndexMap<String, SchemaId> {
        content
            .into_iter()
            .map(|(media_type, mt)| {
                let schema = self.parse_optional_schema(mt.schema.as_ref());
                (media_type, schema)
            })
            .collect()
    }

    fn parse_optional_schema(&mut self, value: Option<&Value>) -> SchemaId {
        match value {
            Some(value) => self.parse_schema(value),
            None => self.graph.push(SchemaNode::default()),
        }
    }

    fn parse_schema(&mut self, value: &Value) -> SchemaId {
        let Some(map) = value.as_object() else {
            // Non-object schema values carry no usable type information.
            return self.graph.push(SchemaNode::default());
        };

        if let Some(target) = map.get("$ref").and_then(Value::as_str) {
            return self.graph.push(SchemaNode::of(SchemaKind::Reference {
                target: target.to_string(),
            }));
        }

        let title = map.get("title").and_then(Value::as_str).map(String::from);
        let description = map
            .get("description")
            .and_then(Value::as_str)
            .map(String::from);
        let declared_type = map.get("type").and_then(Value::as_str);

        let kind = if let Some((kind, members)) = self.composite_members(map) {
            SchemaKind::Composite { kind, members }
        } else if declared_type == Some("object") || map.contains_key("properties") {
            self.parse_object(map)
        } else if declared_type == Some("array") || map.contains_key("items") {
            let items = self.parse_optional_schema(map.get("items"));
            SchemaKind::Array { items }
        } else if let Some(ty) = declared_type {
            SchemaKind::Primitive {
                ty: ty.to_string(),
                format: map.get("format").and_then(Value::as_str).map(String::from),
                constraints: constraint_notes(map),
            }
        } else {
            SchemaKind::Unspecified
        };

        self.graph.push(SchemaNode {
            title,
            description,
            kind,
        })
    }

    fn parse_object(&mut self, map: &serde_json::Map<String, Value>) -> SchemaKind {
        let mut properties = IndexMap::new();
        if let Some(raw) = map.get("properties").and_then(Value::as_object) {
            for (name, schema) in raw {
                let id = self.parse_schema(schema);
                properties.insert(name.clone(), id);
            }
        }
        let required = map
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        SchemaKind::Object {
            properties,
            required,
        }
    }

    fn composite_members(
        &mut self,
        map: &serde_json::Map<String, Value>,
    ) -> Option<(CompositeKind, Vec<SchemaId>)> {
        for (field, kind) in [
            ("oneOf", CompositeKind::OneOf),
            ("anyOf", CompositeKind::AnyOf),
            ("allOf", CompositeKind::AllOf),
        ] {
            if let Some(members) = map.get(field).and_then(Value::as_array) {
                let members = members.iter().map(|m| self.parse_schema(m)).collect();
                return Some((kind, members));
            }
        }
        None
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the validation keywords worth surfacing next to a primitive.
fn constraint_notes(map: &serde_json::Map<String, Value>) -> Vec<String> {
    let mut notes = Vec::new();
    if let Some(values) = map.get("enum").and_then(Value::as_array) {
        let rendered: Vec<String> = values.iter().map(plain_value).collect();
        notes.push(format!("enum: {}", rendered.join(" | ")));
    }
    for key in [
        "minimum",
        "maximum",
        "minLength",
        "maxLength",
        "minItems",
        "maxItems",
        "pattern",
        "default",
    ] {
        if let Some(value) = map.get(key) {
            notes.push(format!("{}: {}", key, plain_value(value)));
        }
    }
    notes
}

fn plain_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parses an operation document straight from JSON text.
pub fn from_json(text: &str) -> anyhow::Result<(OperationDescription, SchemaGraph)> {
    let raw: RawOperation = serde_json::from_str(text)?;
    Ok(DocumentParser::new().parse(raw))
}
