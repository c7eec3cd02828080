//! Converts a Smithy model to the schema IR

use super::types::{Member, Shape as SmithyShape, SmithyModel, PRELUDE_NAMESPACE};
use log::warn;
use shape_model_generator_common::{MemberRef, Result, ServiceSchema, Shape, ShapeKind};
use std::collections::HashMap;

/// Convert a Smithy model to a `ServiceSchema`
///
/// Shapes are keyed by their local name. Prelude targets such as
/// `smithy.api#String` are added as scalar shapes on first use.
pub fn convert_smithy_to_schema(model: &SmithyModel, service_name: &str) -> Result<ServiceSchema> {
    let mut schema = ServiceSchema::new(service_name);
    let mut prelude = Vec::new();

    for (shape_id, shape) in &model.shapes {
        let Some(kind) = convert_kind(shape, &mut prelude) else {
            continue;
        };
        let name = SmithyModel::local_name(shape_id);
        if schema.shape(name).is_some() {
            warn!("Shape {} shadows an earlier shape named {}", shape_id, name);
        }
        schema.insert(Shape {
            name: name.to_string(),
            kind,
            documentation: shape.traits().and_then(extract_documentation),
        });
    }

    for target in prelude {
        let name = SmithyModel::local_name(&target);
        if schema.shape(name).is_none() {
            schema.insert(Shape::new(name, prelude_kind(name)));
        }
    }

    Ok(schema)
}

/// Map a Smithy shape to a shape kind; services and operations yield `None`
fn convert_kind(shape: &SmithyShape, prelude: &mut Vec<String>) -> Option<ShapeKind> {
    let scalar = |type_name: &str| {
        Some(ShapeKind::Scalar {
            type_name: type_name.to_string(),
        })
    };

    match shape {
        SmithyShape::Service { .. } | SmithyShape::Operation { .. } => None,
        SmithyShape::Structure { members, .. } => Some(ShapeKind::Structure {
            members: members
                .iter()
                .map(|(name, member)| (name.clone(), member_ref(member, prelude)))
                .collect(),
        }),
        SmithyShape::Union { .. } => Some(ShapeKind::Other {
            type_name: "union".to_string(),
        }),
        SmithyShape::String { .. } | SmithyShape::Enum { .. } => scalar("string"),
        SmithyShape::Integer { .. }
        | SmithyShape::IntEnum { .. }
        | SmithyShape::Short { .. }
        | SmithyShape::Byte { .. } => scalar("integer"),
        SmithyShape::Long { .. } => scalar("long"),
        SmithyShape::Boolean { .. } => scalar("boolean"),
        SmithyShape::Float { .. } => scalar("float"),
        SmithyShape::Double { .. } => scalar("double"),
        SmithyShape::Timestamp { .. } => scalar("timestamp"),
        SmithyShape::Blob { .. } => scalar("blob"),
        SmithyShape::List { member, .. } | SmithyShape::Set { member, .. } => {
            Some(ShapeKind::List {
                member: member_ref(member, prelude),
            })
        }
        SmithyShape::Map { key, value, .. } => Some(ShapeKind::Map {
            key: member_ref(key, prelude),
            value: member_ref(value, prelude),
        }),
        SmithyShape::Other => Some(ShapeKind::Other {
            type_name: "unknown".to_string(),
        }),
    }
}

/// Kind of a prelude shape, e.g. `PrimitiveLong` -> long
fn prelude_kind(name: &str) -> ShapeKind {
    let base = name.strip_prefix("Primitive").unwrap_or(name);
    let type_name = match base {
        "Short" | "Byte" => "integer".to_string(),
        "BigInteger" => "long".to_string(),
        "BigDecimal" => "double".to_string(),
        other => other.to_lowercase(),
    };

    match type_name.as_str() {
        "document" | "unit" => ShapeKind::Other { type_name },
        _ => ShapeKind::Scalar { type_name },
    }
}

fn member_ref(member: &Member, prelude: &mut Vec<String>) -> MemberRef {
    if member.target.starts_with(PRELUDE_NAMESPACE) && !prelude.contains(&member.target) {
        prelude.push(member.target.clone());
    }
    MemberRef {
        target: SmithyModel::local_name(&member.target).to_string(),
        documentation: extract_documentation(&member.traits),
    }
}

/// Extract documentation from traits
fn extract_documentation(traits: &HashMap<String, serde_json::Value>) -> Option<String> {
    traits
        .get(super::types::traits::DOCUMENTATION)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
