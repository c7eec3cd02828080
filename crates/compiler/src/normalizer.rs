//! Type normalization from schema primitives to canonical scalars

use shape_model_generator_common::{ScalarType, Shape};
use std::collections::HashMap;
use std::sync::LazyLock;

const SIMPLE_TYPES: &[(&str, ScalarType)] = &[
    ("Long", ScalarType::Integer),
    ("Float", ScalarType::Float),
    ("Double", ScalarType::Float),
    ("Integer", ScalarType::Integer),
    ("Boolean", ScalarType::Boolean),
    ("String", ScalarType::String),
    ("DateTime", ScalarType::Timestamp),
    ("Timestamp", ScalarType::Timestamp),
    ("TagsMap", ScalarType::StringMap),
    ("MillisecondDateTime", ScalarType::Timestamp),
];

// Both the declared spelling and its lower-cased twin.
static SIMPLE_TYPE_MAP: LazyLock<HashMap<String, ScalarType>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (name, scalar) in SIMPLE_TYPES {
        map.insert(name.to_string(), *scalar);
        map.insert(name.to_lowercase(), *scalar);
    }
    map
});

/// Maps schema shapes to canonical scalar types
pub struct TypeNormalizer;

impl TypeNormalizer {
    /// Normalize a shape by its name, then by its structural type name
    ///
    /// Returns `None` for shapes that have to be handled structurally.
    ///
    /// # Examples
    /// ```
    /// use shape_model_generator_common::{ScalarType, Shape, ShapeKind};
    /// use shape_model_generator_compiler::TypeNormalizer;
    ///
    /// let shape = Shape::new("InstanceId", ShapeKind::Scalar { type_name: "string".into() });
    /// assert_eq!(TypeNormalizer::normalize(&shape), Some(ScalarType::String));
    /// ```
    pub fn normalize(shape: &Shape) -> Option<ScalarType> {
        Self::lookup(&shape.name).or_else(|| Self::lookup(shape.type_name()))
    }

    /// Look up a single type name in the scalar table
    pub fn lookup(type_name: &str) -> Option<ScalarType> {
        SIMPLE_TYPE_MAP.get(type_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use shape_model_generator_common::{MemberRef, ShapeKind};

    fn scalar(name: &str, type_name: &str) -> Shape {
        Shape::new(
            name,
            ShapeKind::Scalar {
                type_name: type_name.to_string(),
            },
        )
    }

    #[test]
    fn test_normalize_by_type_name() {
        assert_eq!(
            TypeNormalizer::normalize(&scalar("VolumeSize", "integer")),
            Some(ScalarType::Integer)
        );
        assert_eq!(
            TypeNormalizer::normalize(&scalar("BytesUsed", "long")),
            Some(ScalarType::Integer)
        );
        assert_eq!(
            TypeNormalizer::normalize(&scalar("Ratio", "double")),
            Some(ScalarType::Float)
        );
        assert_eq!(
            TypeNormalizer::normalize(&scalar("Enabled", "boolean")),
            Some(ScalarType::Boolean)
        );
        assert_eq!(
            TypeNormalizer::normalize(&scalar("LaunchTime", "timestamp")),
            Some(ScalarType::Timestamp)
        );
    }

    #[test]
    fn test_normalize_by_shape_name() {
        let tags = Shape::new(
            "TagsMap",
            ShapeKind::Map {
                key: MemberRef::new("String"),
                value: MemberRef::new("String"),
            },
        );
        assert_eq!(TypeNormalizer::normalize(&tags), Some(ScalarType::StringMap));

        let record = Shape::new(
            "DateTime",
            ShapeKind::Structure {
                members: IndexMap::new(),
            },
        );
        assert_eq!(TypeNormalizer::normalize(&record), Some(ScalarType::Timestamp));
    }

    #[test]
    fn test_unknown_types_do_not_normalize() {
        assert_eq!(TypeNormalizer::normalize(&scalar("Payload", "blob")), None);
        let record = Shape::new(
            "Owner",
            ShapeKind::Structure {
                members: IndexMap::new(),
            },
        );
        assert_eq!(TypeNormalizer::normalize(&record), None);
        assert_eq!(TypeNormalizer::lookup("STRING"), None);
    }
}
