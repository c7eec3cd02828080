//! Integration test for botocore parser

use shape_model_generator_common::{GeneratorError, ShapeKind};
use shape_model_generator_parser::{parse_schema, BotocoreParser, SchemaFormat};

const IAM_MODEL: &str = r#"{
    "version": "2.0",
    "metadata": {
        "apiVersion": "2010-05-08",
        "endpointPrefix": "iam",
        "protocol": "query",
        "serviceId": "IAM"
    },
    "operations": {
        "ListAccessKeys": {
            "name": "ListAccessKeys",
            "http": { "method": "POST", "requestUri": "/" },
            "output": { "shape": "ListAccessKeysResponse" }
        }
    },
    "shapes": {
        "ListAccessKeysResponse": {
            "type": "structure",
            "required": ["AccessKeyMetadata"],
            "members": {
                "AccessKeyMetadata": { "shape": "accessKeyMetadataListType" },
                "IsTruncated": { "shape": "booleanType" }
            }
        },
        "accessKeyMetadataListType": {
            "type": "list",
            "member": { "shape": "AccessKeyMetadata" }
        },
        "AccessKeyMetadata": {
            "type": "structure",
            "members": {
                "UserName": {
                    "shape": "userNameType",
                    "documentation": "<p>The name of the IAM user.</p>"
                },
                "AccessKeyId": { "shape": "accessKeyIdType" },
                "Status": { "shape": "statusType" },
                "CreateDate": { "shape": "dateType" }
            },
            "documentation": "<p>Contains information about an Amazon Web Services access key.</p>"
        },
        "userNameType": { "type": "string", "max": 64, "min": 1 },
        "accessKeyIdType": { "type": "string", "max": 128, "min": 16 },
        "statusType": { "type": "string", "enum": ["Active", "Inactive"] },
        "dateType": { "type": "timestamp" },
        "booleanType": { "type": "boolean" }
    }
}"#;

#[test]
fn test_parse_iam_model() {
    let parser = BotocoreParser::from_json(IAM_MODEL, "iam").unwrap();
    assert_eq!(
        parser.model().metadata.api_version.as_deref(),
        Some("2010-05-08")
    );
    assert_eq!(parser.model().shapes["statusType"].shape_type, "string");

    let schema = parser.parse().unwrap();
    assert_eq!(schema.name, "iam");
    assert_eq!(schema.shapes.len(), 8);

    let metadata = schema.shape("AccessKeyMetadata").unwrap();
    let ShapeKind::Structure { members } = &metadata.kind else {
        panic!("AccessKeyMetadata should be a structure");
    };
    let names: Vec<&str> = members.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["UserName", "AccessKeyId", "Status", "CreateDate"]);
    assert_eq!(
        members["UserName"].documentation.as_deref(),
        Some("<p>The name of the IAM user.</p>")
    );
    assert_eq!(schema.shape("dateType").unwrap().type_name(), "timestamp");
}

#[test]
fn test_parse_schema_detects_botocore() {
    let schema = parse_schema(IAM_MODEL, "iam", None).unwrap();
    assert!(schema.shape("accessKeyMetadataListType").is_some());

    // Forcing the wrong format fails to parse
    let result = parse_schema(IAM_MODEL, "iam", Some(SchemaFormat::Smithy));
    assert!(matches!(result, Err(GeneratorError::Parse(_))));
}

#[test]
fn test_map_without_value_is_rejected() {
    let json = r#"{"shapes": {"Broken": {"type": "map", "key": {"shape": "String"}}}}"#;
    let result = BotocoreParser::from_json(json, "demo").unwrap().parse();
    assert!(matches!(result, Err(GeneratorError::Parse(msg)) if msg.contains("value")));
}
