//! Python source fragments for field types and extraction rules
//!
//! Extraction rules render as json-bender expressions:
//!
//! | Mapping                     | Rendered                         |
//! |-----------------------------|----------------------------------|
//! | `Select`                    | `S("a", "b")`, `S("a", default=[])` |
//! | `Pipe`                      | `x >> y`                         |
//! | `ForEach(MapVia(X))`        | `ForallBend(X.mapping)`          |
//! | `ForEach(inner)`            | `ForallBend(inner)`              |
//! | `MapVia(X)`                 | `Bend(X.mapping)`                |
//! | `Const(null)`               | `K(None)`                        |
//! | `TagsToMapping`             | `TagsToDict()`                   |
//! | `TagsValue("Name")`         | `TagsValue("Name")`              |

use serde_json::Value;
use shape_model_generator_common::{FieldDefault, Mapping, ModelField, ScalarType, ValueType};

/// Python type of a canonical scalar
pub fn scalar_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "str",
        ScalarType::Integer => "int",
        ScalarType::Float => "float",
        ScalarType::Boolean => "bool",
        ScalarType::Timestamp => "datetime",
        ScalarType::StringMap => "Dict[str, str]",
    }
}

/// Python type of a field value, without the optional/list wrapper
pub fn value_type(ty: &ValueType) -> String {
    match ty {
        ValueType::Scalar { scalar } => scalar_type(*scalar).to_string(),
        ValueType::Model { name } => name.clone(),
        ValueType::Map { key, value } => format!("Dict[{}, {}]", scalar_type(*key), value_type(value)),
    }
}

/// Annotation of a declared attribute: `List[T]` or `Optional[T]`
pub fn type_string(field: &ModelField) -> String {
    let inner = value_type(&field.value_type);
    if field.is_array {
        format!("List[{}]", inner)
    } else {
        format!("Optional[{}]", inner)
    }
}

/// Right-hand side of a declared attribute
pub fn assignment(field: &ModelField) -> &'static str {
    match field.default {
        FieldDefault::EmptyList => "field(factory=list)",
        FieldDefault::None => "field(default=None)",
    }
}

/// Render an extraction rule as a bender expression
pub fn bender(mapping: &Mapping) -> String {
    match mapping {
        Mapping::Select { path, default } => {
            let mut args: Vec<String> = path.iter().map(|p| string_literal(p)).collect();
            if let Some(default) = default {
                args.push(format!("default={}", literal(default)));
            }
            format!("S({})", args.join(", "))
        }
        Mapping::Pipe { steps } => steps.iter().map(bender).collect::<Vec<_>>().join(" >> "),
        Mapping::ForEach { inner } => match inner.as_ref() {
            Mapping::MapVia { model } => format!("ForallBend({}.mapping)", model),
            other => format!("ForallBend({})", bender(other)),
        },
        Mapping::MapVia { model } => format!("Bend({}.mapping)", model),
        Mapping::Const { value } => format!("K({})", literal(value)),
        Mapping::TagsToMapping => "TagsToDict()".to_string(),
        Mapping::TagsValue { key } => format!("TagsValue({})", string_literal(key)),
    }
}

/// Double-quoted Python string literal
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Python literal of a JSON value
fn literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => string_literal(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", string_literal(k), literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bender_select() {
        assert_eq!(bender(&Mapping::select(["Owner", "Name"])), r#"S("Owner", "Name")"#);
        assert_eq!(
            bender(&Mapping::select_list(["GroupNames"])),
            r#"S("GroupNames", default=[])"#
        );
    }

    #[test]
    fn test_bender_composition() {
        let mapping = Mapping::select_list(["BlockDeviceMappings"])
            .then(Mapping::for_each(Mapping::map_via("AwsEc2BlockDeviceMapping")));
        assert_eq!(
            bender(&mapping),
            r#"S("BlockDeviceMappings", default=[]) >> ForallBend(AwsEc2BlockDeviceMapping.mapping)"#
        );

        let collapsed = Mapping::select_list(["SecurityGroups"])
            .then(Mapping::for_each(Mapping::select(["GroupId"])));
        assert_eq!(
            bender(&collapsed),
            r#"S("SecurityGroups", default=[]) >> ForallBend(S("GroupId"))"#
        );

        let nested = Mapping::select(["Placement"]).then(Mapping::map_via("AwsEc2Placement"));
        assert_eq!(bender(&nested), r#"S("Placement") >> Bend(AwsEc2Placement.mapping)"#);
    }

    #[test]
    fn test_bender_constants_and_tags() {
        assert_eq!(bender(&Mapping::constant(Value::Null)), "K(None)");
        assert_eq!(
            bender(&Mapping::constant(json!({"enabled": true, "ports": [80]}))),
            r#"K({"enabled": True, "ports": [80]})"#
        );
        assert_eq!(
            bender(&Mapping::select_list(["Tags"]).then(Mapping::TagsToMapping)),
            r#"S("Tags", default=[]) >> TagsToDict()"#
        );
        assert_eq!(
            bender(&Mapping::TagsValue {
                key: "Name".to_string()
            }),
            r#"TagsValue("Name")"#
        );
    }

    #[test]
    fn test_type_strings() {
        let map = ModelField::new(
            "attributes",
            vec!["Attributes".to_string()],
            ValueType::Map {
                key: ScalarType::String,
                value: Box::new(ValueType::model("AwsDynamoAttribute")),
            },
        );
        assert_eq!(type_string(&map), "Optional[Dict[str, AwsDynamoAttribute]]");
        assert_eq!(assignment(&map), "field(default=None)");

        let names = ModelField::new(
            "names",
            vec!["Names".to_string()],
            ValueType::scalar(ScalarType::String),
        )
        .array();
        assert_eq!(type_string(&names), "List[str]");
        assert_eq!(assignment(&names), "field(factory=list)");

        assert_eq!(scalar_type(ScalarType::Timestamp), "datetime");
    }
}
