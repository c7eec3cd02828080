//! Structural classification of schema shapes

use crate::TypeNormalizer;
use indexmap::IndexMap;
use shape_model_generator_common::{
    GeneratorError, MemberRef, Result, ScalarType, ServiceSchema, Shape, ShapeKind,
};

/// Structural kind of a shape as seen by the compiler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeClass<'s> {
    /// Normalizes to a canonical scalar
    Primitive(ScalarType),
    /// Homogeneous list with its element shape
    List(&'s Shape),
    /// Key/value map with resolved key and value shapes
    Map { key: &'s Shape, value: &'s Shape },
    /// Record with ordered members
    Record(&'s IndexMap<String, MemberRef>),
}

/// A single-member record wrapping one scalar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapsed {
    /// Name of the only member
    pub member: String,
    /// Scalar type of that member
    pub scalar: ScalarType,
}

/// Classify a shape, consulting the type normalizer first
pub fn classify<'s>(schema: &'s ServiceSchema, shape: &'s Shape) -> Result<ShapeClass<'s>> {
    if let Some(scalar) = TypeNormalizer::normalize(shape) {
        return Ok(ShapeClass::Primitive(scalar));
    }

    match &shape.kind {
        ShapeKind::List { member } => Ok(ShapeClass::List(schema.resolve(member)?)),
        ShapeKind::Map { key, value } => Ok(ShapeClass::Map {
            key: schema.resolve(key)?,
            value: schema.resolve(value)?,
        }),
        ShapeKind::Structure { members } => Ok(ShapeClass::Record(members)),
        ShapeKind::Scalar { type_name } | ShapeKind::Other { type_name } => {
            Err(GeneratorError::UnsupportedShape {
                shape: shape.name.clone(),
                kind: type_name.clone(),
            })
        }
    }
}

/// Reduce a record with exactly one scalar member to that member
///
/// Multi-member records, single-member records whose member is not a
/// scalar, and non-record shapes yield `None`.
pub fn try_collapse(schema: &ServiceSchema, shape: &Shape) -> Result<Option<Collapsed>> {
    let ShapeKind::Structure { members } = &shape.kind else {
        return Ok(None);
    };
    if members.len() != 1 {
        return Ok(None);
    }

    let Some((member, member_ref)) = members.first() else {
        return Ok(None);
    };
    let member_shape = schema.resolve(member_ref)?;

    Ok(TypeNormalizer::normalize(member_shape).map(|scalar| Collapsed {
        member: member.clone(),
        scalar,
    }))
}
