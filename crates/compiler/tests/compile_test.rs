//! Integration tests for compiling service schemas into models

use shape_model_generator_common::{
    GeneratorConfig, Mapping, MemberRef, Model, RootSpec, ScalarType, ServiceSchema, Shape,
    ShapeKind, ValueType,
};
use shape_model_generator_compiler::{compile_service, CompileOptions, TypeIndex};
use shape_model_generator_parser::parse_schema;

fn scalar(name: &str, type_name: &str) -> Shape {
    Shape::new(
        name,
        ShapeKind::Scalar {
            type_name: type_name.to_string(),
        },
    )
}

fn structure(name: &str, members: &[(&str, &str)]) -> Shape {
    Shape::new(
        name,
        ShapeKind::Structure {
            members: members
                .iter()
                .map(|(member, target)| (member.to_string(), MemberRef::new(*target)))
                .collect(),
        },
    )
}

fn widget_schema() -> ServiceSchema {
    let mut schema = ServiceSchema::new("demo");
    schema.insert(scalar("String", "string"));
    schema.insert(scalar("Integer", "integer"));
    schema.insert(structure("OwnerRef", &[("Name", "String")]));
    schema.insert(structure(
        "Widget",
        &[("Id", "String"), ("Size", "Integer"), ("Owner", "OwnerRef")],
    ));
    schema
}

fn compile(schema: &ServiceSchema, specs: &[RootSpec]) -> Vec<Model> {
    let options = CompileOptions::default();
    let mut index = TypeIndex::new();
    compile_service(schema.name.as_str(), schema, specs, &options, &mut index).unwrap()
}

#[test]
fn test_widget_root_collapses_owner() {
    let spec = RootSpec::new("list-widgets", "Widgets", "Widget").with_prefix("Demo");
    let models = compile(&widget_schema(), &[spec]);

    assert_eq!(models.len(), 1, "Owner should collapse into a scalar field");
    let widget = &models[0];
    assert_eq!(widget.name, "DemoWidget");
    assert_eq!(widget.kind, "aws_demo_widget");
    assert!(widget.is_root);

    let api = widget.api.as_ref().expect("Root should carry its API call");
    assert_eq!(api.service, "demo");
    assert_eq!(api.action, "list-widgets");
    assert_eq!(api.result_field, "Widgets");

    let names: Vec<&str> = widget.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "tags", "name", "ctime", "mtime", "atime", "id", "size", "owner_name"]
    );

    let declared: Vec<_> = widget.declared_fields().collect();
    assert_eq!(declared.len(), 3);
    assert_eq!(declared[0].source_path, vec!["Id"]);
    assert_eq!(declared[1].value_type, ValueType::scalar(ScalarType::Integer));
    assert_eq!(declared[2].source_path, vec!["Owner", "Name"]);
    assert_eq!(declared[2].mapping, Mapping::select(["Owner", "Name"]));
}

#[test]
fn test_compilation_is_deterministic() {
    let schema = widget_schema();
    let specs = vec![RootSpec::new("list-widgets", "Widgets", "Widget").with_prefix("Demo")];

    let first = compile(&schema, &specs);
    let second = compile(&schema, &specs);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

const IAM_MODEL: &str = r#"{
    "version": "2.0",
    "metadata": { "apiVersion": "2010-05-08", "endpointPrefix": "iam", "protocol": "query" },
    "shapes": {
        "AccessKeyMetadata": {
            "type": "structure",
            "members": {
                "UserName": { "shape": "userNameType" },
                "AccessKeyId": { "shape": "accessKeyIdType" },
                "Status": { "shape": "statusType" },
                "CreateDate": { "shape": "dateType" }
            },
            "documentation": "<p>Contains information about an access key.</p>"
        },
        "User": {
            "type": "structure",
            "members": {
                "UserName": { "shape": "userNameType" },
                "Arn": { "shape": "arnType" },
                "PasswordLastUsed": { "shape": "dateType" },
                "PermissionsBoundary": { "shape": "AttachedPermissionsBoundary" },
                "Tags": { "shape": "tagListType" }
            }
        },
        "AttachedPermissionsBoundary": {
            "type": "structure",
            "members": {
                "PermissionsBoundaryType": { "shape": "permissionsBoundaryAttachmentType" },
                "PermissionsBoundaryArn": { "shape": "arnType" }
            }
        },
        "Tag": {
            "type": "structure",
            "members": {
                "Key": { "shape": "tagKeyType" },
                "Value": { "shape": "tagValueType" }
            }
        },
        "tagListType": { "type": "list", "member": { "shape": "Tag" } },
        "userNameType": { "type": "string" },
        "accessKeyIdType": { "type": "string" },
        "statusType": { "type": "string", "enum": ["Active", "Inactive"] },
        "permissionsBoundaryAttachmentType": { "type": "string" },
        "arnType": { "type": "string" },
        "tagKeyType": { "type": "string" },
        "tagValueType": { "type": "string" },
        "dateType": { "type": "timestamp" }
    }
}"#;

const IAM_CONFIG: &str = r#"
class_prefix: Aws
services:
  iam:
    - api_action: list-access-keys
      result_property: AccessKeyMetadata
      result_shape: AccessKeyMetadata
      prefix: Iam
      prop_prefix: access_key_
    - api_action: list-users
      result_property: Users
      result_shape: User
      prefix: Iam
      name: AwsIamUser
"#;

#[test]
fn test_iam_access_keys_and_users() {
    let schema = parse_schema(IAM_MODEL, "iam", None).unwrap();
    let config = GeneratorConfig::from_yaml(IAM_CONFIG).unwrap();
    let options = CompileOptions::from(&config);
    let mut index = TypeIndex::new();

    let models =
        compile_service("iam", &schema, &config.services["iam"], &options, &mut index).unwrap();

    let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "AwsIamAccessKeyMetadata",
            "AwsIamAttachedPermissionsBoundary",
            "AwsIamUser"
        ]
    );

    let keys = &models[0];
    assert_eq!(keys.kind, "aws_iam_access_key_metadata");
    let declared: Vec<&str> = keys.declared_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(
        declared,
        vec![
            "access_key_user_name",
            "access_key_access_key_id",
            "access_key_status",
            "access_key_create_date"
        ]
    );
    assert_eq!(
        keys.field("access_key_create_date").unwrap().value_type,
        ValueType::scalar(ScalarType::Timestamp)
    );

    // Nested models are not roots and carry no field prefix
    let boundary = &models[1];
    assert!(!boundary.is_root);
    assert!(boundary.api.is_none());
    assert!(boundary.field("permissions_boundary_arn").is_some());

    let user = &models[2];
    assert!(user.field("tags").is_some_and(|f| f.builtin));
    assert_eq!(user.declared_fields().count(), 4);
    assert_eq!(
        user.field("permissions_boundary").unwrap().mapping,
        Mapping::select(["PermissionsBoundary"])
            .then(Mapping::map_via("AwsIamAttachedPermissionsBoundary"))
    );
}

#[test]
fn test_shared_index_spans_services() {
    let schema = widget_schema();
    let mut other = widget_schema();
    other.name = "other".to_string();

    let options = CompileOptions::default();
    let mut index = TypeIndex::new();
    let spec = vec![RootSpec::new("list-widgets", "Widgets", "Widget")];

    let first = compile_service("demo", &schema, &spec, &options, &mut index).unwrap();
    let second = compile_service("other", &other, &spec, &options, &mut index).unwrap();
    assert_eq!(first.len(), 1);
    assert!(second.is_empty(), "Widget is already known to the run");
    assert!(index.contains("Widget"));
}
