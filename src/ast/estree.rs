//! ESTree JSON ingestion.
//!
//! The external parser (esprima, acorn, or anything ESTree-compatible) owns
//! source acquisition and parsing; this boundary lowers its serialized JSON
//! output into the [`SourceTree`] arena the engine walks.
//!
//! Lowering is deliberately tolerant. Kinds the engine interprets map onto
//! typed [`NodeKind`] variants with their documented field order; every other
//! kind keeps its node-valued fields, in the order the document listed them,
//! as [`NodeKind::Other`] children. Missing or `null` child fields lower to
//! `None`. The only hard failure is JSON that does not deserialize at all -
//! a document whose root is not a node yields an empty tree, and analyzing
//! an empty tree is a no-op.

use serde_json::{Map, Value};

use crate::error::Result;

use super::tree::SourceTree;
use super::types::{LiteralValue, NodeId, NodeKind, Position, SyntaxNode};

/// Bookkeeping fields that never hold child nodes.
const NON_CHILD_FIELDS: [&str; 3] = ["type", "loc", "range"];

/// Deserialize an ESTree JSON document into a [`SourceTree`].
///
/// # Errors
///
/// Returns [`MetricsError::Serde`](crate::MetricsError::Serde) when the input
/// is not valid JSON. Structurally surprising but well-formed JSON never
/// fails; it lowers to whatever nodes it does contain.
pub fn parse_source_tree(source: &str) -> Result<SourceTree> {
    let document: Value = serde_json::from_str(source)?;
    Ok(lower_document(&document))
}

/// Lower an already-deserialized ESTree document.
#[must_use]
pub fn lower_document(document: &Value) -> SourceTree {
    let mut tree = SourceTree::new();
    let root = lower_node(&mut tree, document);
    tree.set_root(root);
    tree
}

/// Lower one node object. Anything without a `type` discriminant is not a
/// node and lowers to `None`.
fn lower_node(tree: &mut SourceTree, value: &Value) -> Option<NodeId> {
    let object = value.as_object()?;
    let kind_name = object.get("type")?.as_str()?;

    let kind = match kind_name {
        "Program" => NodeKind::Program {
            body: lower_list(tree, object.get("body")),
        },
        "FunctionDeclaration" => NodeKind::FunctionDeclaration {
            id: lower_field(tree, object.get("id")),
            params: lower_list(tree, object.get("params")),
            body: lower_field(tree, object.get("body")),
        },
        "BlockStatement" => NodeKind::BlockStatement {
            body: lower_list(tree, object.get("body")),
        },
        "IfStatement" => NodeKind::IfStatement {
            test: lower_field(tree, object.get("test")),
            consequent: lower_field(tree, object.get("consequent")),
            alternate: lower_field(tree, object.get("alternate")),
        },
        "ForStatement" => NodeKind::ForStatement {
            init: lower_field(tree, object.get("init")),
            test: lower_field(tree, object.get("test")),
            update: lower_field(tree, object.get("update")),
            body: lower_field(tree, object.get("body")),
        },
        "ForInStatement" => NodeKind::ForInStatement {
            left: lower_field(tree, object.get("left")),
            right: lower_field(tree, object.get("right")),
            body: lower_field(tree, object.get("body")),
        },
        "WhileStatement" => NodeKind::WhileStatement {
            test: lower_field(tree, object.get("test")),
            body: lower_field(tree, object.get("body")),
        },
        "DoWhileStatement" => NodeKind::DoWhileStatement {
            body: lower_field(tree, object.get("body")),
            test: lower_field(tree, object.get("test")),
        },
        "ReturnStatement" => NodeKind::ReturnStatement {
            argument: lower_field(tree, object.get("argument")),
        },
        "MemberExpression" => NodeKind::MemberExpression {
            object: lower_field(tree, object.get("object")),
            property: lower_field(tree, object.get("property")),
        },
        "Identifier" => NodeKind::Identifier {
            name: object
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        },
        "Literal" => NodeKind::Literal {
            value: literal_value(object),
        },
        "BinaryExpression" => NodeKind::BinaryExpression {
            operator: operator(object),
            left: lower_field(tree, object.get("left")),
            right: lower_field(tree, object.get("right")),
        },
        "LogicalExpression" => NodeKind::LogicalExpression {
            operator: operator(object),
            left: lower_field(tree, object.get("left")),
            right: lower_field(tree, object.get("right")),
        },
        _ => NodeKind::Other {
            kind: kind_name.to_string(),
            children: lower_unknown(tree, object),
        },
    };

    let start = start_position(object);
    Some(tree.push(SyntaxNode { kind, start }))
}

fn lower_field(tree: &mut SourceTree, value: Option<&Value>) -> Option<NodeId> {
    value.and_then(|v| lower_node(tree, v))
}

fn lower_list(tree: &mut SourceTree, value: Option<&Value>) -> Vec<NodeId> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|v| lower_node(tree, v)).collect())
        .unwrap_or_default()
}

/// Children of an uninterpreted kind: every field value that is a node or a
/// sequence of nodes, in document field order.
fn lower_unknown(tree: &mut SourceTree, object: &Map<String, Value>) -> Vec<NodeId> {
    let mut children = Vec::new();
    for (key, value) in object {
        if NON_CHILD_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Object(_) => children.extend(lower_node(tree, value)),
            Value::Array(items) => {
                children.extend(items.iter().filter_map(|v| lower_node(tree, v)));
            }
            _ => {}
        }
    }
    children
}

fn operator(object: &Map<String, Value>) -> String {
    object
        .get("operator")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn literal_value(object: &Map<String, Value>) -> LiteralValue {
    // Regex literals serialize their value as an empty object; the usable
    // payload sits in the sibling `regex` field.
    if let Some(regex) = object.get("regex").and_then(Value::as_object) {
        return LiteralValue::Regex {
            pattern: regex
                .get("pattern")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            flags: regex
                .get("flags")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        };
    }
    match object.get("value") {
        Some(Value::String(s)) => LiteralValue::String(s.clone()),
        Some(Value::Number(n)) => LiteralValue::Number(n.as_f64().unwrap_or_default()),
        Some(Value::Bool(b)) => LiteralValue::Boolean(*b),
        _ => LiteralValue::Null,
    }
}

fn start_position(object: &Map<String, Value>) -> Option<Position> {
    let start = object.get("loc")?.as_object()?.get("start")?.as_object()?;
    let line = u32::try_from(start.get("line")?.as_u64()?).ok()?;
    let column = start
        .get("column")
        .and_then(Value::as_u64)
        .and_then(|c| u32::try_from(c).ok())
        .unwrap_or(0);
    Some(Position { line, column })
}
