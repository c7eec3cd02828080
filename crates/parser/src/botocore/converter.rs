//! Converts a botocore service model to the schema IR

use super::types::{BotocoreModel, ShapeDefinition, ShapeRef};
use log::debug;
use shape_model_generator_common::{
    GeneratorError, MemberRef, Result, ServiceSchema, Shape, ShapeKind,
};

const SCALAR_TYPES: &[&str] = &[
    "string",
    "integer",
    "long",
    "boolean",
    "double",
    "float",
    "timestamp",
    "blob",
];

/// Convert a botocore model to a `ServiceSchema`
pub fn convert_botocore_to_schema(
    model: &BotocoreModel,
    service_name: &str,
) -> Result<ServiceSchema> {
    let mut schema = ServiceSchema::new(service_name);
    let metadata = &model.metadata;
    debug!(
        "Converting {} ({} API {}, {} protocol)",
        service_name,
        metadata.service_id.as_deref().unwrap_or(service_name),
        metadata.api_version.as_deref().unwrap_or("unversioned"),
        metadata.protocol.as_deref().unwrap_or("unknown")
    );

    for (name, definition) in &model.shapes {
        let kind = convert_kind(name, definition)?;
        schema.insert(Shape {
            name: name.clone(),
            kind,
            documentation: definition.documentation.clone(),
        });
    }

    Ok(schema)
}

fn convert_kind(name: &str, definition: &ShapeDefinition) -> Result<ShapeKind> {
    let kind = match definition.shape_type.as_str() {
        "structure" => ShapeKind::Structure {
            members: definition
                .members
                .iter()
                .flatten()
                .map(|(member, shape_ref)| (member.clone(), member_ref(shape_ref)))
                .collect(),
        },
        "list" => ShapeKind::List {
            member: member_ref(required(name, "member", &definition.member)?),
        },
        "map" => ShapeKind::Map {
            key: member_ref(required(name, "key", &definition.key)?),
            value: member_ref(required(name, "value", &definition.value)?),
        },
        scalar if SCALAR_TYPES.contains(&scalar) => ShapeKind::Scalar {
            type_name: scalar.to_string(),
        },
        other => ShapeKind::Other {
            type_name: other.to_string(),
        },
    };

    Ok(kind)
}

fn required<'d>(shape: &str, part: &str, value: &'d Option<ShapeRef>) -> Result<&'d ShapeRef> {
    value
        .as_ref()
        .ok_or_else(|| GeneratorError::Parse(format!("Shape {} has no {} reference", shape, part)))
}

fn member_ref(shape_ref: &ShapeRef) -> MemberRef {
    MemberRef {
        target: shape_ref.shape.clone(),
        documentation: shape_ref.documentation.clone(),
    }
}
