//! Mapping-expression synthesis for generated fields

use serde_json::Value;
use shape_model_generator_common::{Mapping, ModelField, ScalarType, ValueType};

/// Build the extraction rule of a field from its source path and type
///
/// Collapsed array fields (two-segment source path) select the list first,
/// then the member of every element.
pub fn synthesize(field: &ModelField) -> Mapping {
    let path = field.source_path.clone();
    let nested_model = match &field.value_type {
        ValueType::Model { name } if field.is_nested_model => Some(name.clone()),
        _ => None,
    };

    match (field.is_array, nested_model) {
        (true, Some(model)) => {
            Mapping::select_list(path).then(Mapping::for_each(Mapping::map_via(model)))
        }
        (true, None) if path.len() > 1 => {
            let (list, member) = path.split_at(1);
            Mapping::select_list(list.iter().cloned())
                .then(Mapping::for_each(Mapping::select(member.iter().cloned())))
        }
        (true, None) => Mapping::select_list(path),
        (false, Some(model)) => Mapping::select(path).then(Mapping::map_via(model)),
        (false, None) => Mapping::select(path),
    }
}

/// Fields every root model inherits from the resource base class
///
/// Order: id, tags, name, ctime, mtime, atime.
pub fn root_fields() -> Vec<ModelField> {
    let tags = || Mapping::select_list(["Tags"]);
    let placeholder = |name: &str| {
        ModelField::new(name, vec![], ValueType::scalar(ScalarType::Timestamp))
            .builtin()
            .with_mapping(Mapping::constant(Value::Null))
    };

    vec![
        ModelField::new(
            "id",
            vec!["id".to_string()],
            ValueType::scalar(ScalarType::String),
        )
        .builtin()
        .with_mapping(Mapping::select(["id"])),
        ModelField::new(
            "tags",
            vec!["Tags".to_string()],
            ValueType::scalar(ScalarType::StringMap),
        )
        .builtin()
        .with_mapping(tags().then(Mapping::TagsToMapping)),
        ModelField::new(
            "name",
            vec!["Tags".to_string()],
            ValueType::scalar(ScalarType::String),
        )
        .builtin()
        .with_mapping(tags().then(Mapping::TagsValue {
            key: "Name".to_string(),
        })),
        placeholder("ctime"),
        placeholder("mtime"),
        placeholder("atime"),
    ]
}
