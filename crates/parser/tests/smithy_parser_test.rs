//! Integration test for Smithy parser

use shape_model_generator_common::{ShapeKind, SchemaProvider};
use shape_model_generator_parser::smithy::SmithyParser;
use shape_model_generator_parser::{SchemaDirectory, SchemaFormat};

const STORAGE_MODEL: &str = r#"{
    "smithy": "2.0",
    "shapes": {
        "com.example.storage#StorageService": {
            "type": "service",
            "version": "2023-01-01",
            "operations": [
                { "target": "com.example.storage#ListBuckets" }
            ],
            "traits": {
                "smithy.api#documentation": "Simple storage service"
            }
        },
        "com.example.storage#ListBuckets": {
            "type": "operation",
            "output": { "target": "com.example.storage#ListBucketsOutput" }
        },
        "com.example.storage#ListBucketsOutput": {
            "type": "structure",
            "members": {
                "Buckets": { "target": "com.example.storage#BucketList" }
            }
        },
        "com.example.storage#BucketList": {
            "type": "list",
            "member": { "target": "com.example.storage#Bucket" }
        },
        "com.example.storage#Bucket": {
            "type": "structure",
            "members": {
                "Name": {
                    "target": "smithy.api#String",
                    "traits": { "smithy.api#documentation": "Name of the bucket" }
                },
                "CreationDate": { "target": "smithy.api#Timestamp" },
                "StorageClass": { "target": "com.example.storage#StorageClass" },
                "Labels": { "target": "com.example.storage#LabelMap" },
                "Owner": { "target": "com.example.storage#Owner" }
            },
            "traits": { "smithy.api#documentation": "A storage bucket" }
        },
        "com.example.storage#StorageClass": {
            "type": "enum",
            "members": {
                "STANDARD": { "target": "smithy.api#Unit" },
                "GLACIER": { "target": "smithy.api#Unit" }
            }
        },
        "com.example.storage#LabelMap": {
            "type": "map",
            "key": { "target": "smithy.api#String" },
            "value": { "target": "smithy.api#String" }
        },
        "com.example.storage#Owner": {
            "type": "structure",
            "members": {
                "DisplayName": { "target": "smithy.api#String" }
            }
        },
        "com.example.storage#Payload": {
            "type": "union",
            "members": {
                "Text": { "target": "smithy.api#String" }
            }
        }
    }
}"#;

#[test]
fn test_parse_storage_model() {
    let parser = SmithyParser::from_json(STORAGE_MODEL, "storage").unwrap();
    let schema = parser.parse().unwrap();

    assert_eq!(schema.name, "storage");
    // Services and operations are not data shapes
    assert!(schema.shape("StorageService").is_none());
    assert!(schema.shape("ListBuckets").is_none());

    let bucket = schema.shape("Bucket").expect("Should have Bucket shape");
    assert_eq!(bucket.documentation.as_deref(), Some("A storage bucket"));
    let ShapeKind::Structure { members } = &bucket.kind else {
        panic!("Bucket should be a structure");
    };
    let names: Vec<&str> = members.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["Name", "CreationDate", "StorageClass", "Labels", "Owner"]
    );
    assert_eq!(members["Name"].target, "String");
    assert_eq!(
        members["Name"].documentation.as_deref(),
        Some("Name of the bucket")
    );

    assert_eq!(schema.shape("StorageClass").unwrap().type_name(), "string");
    assert_eq!(schema.shape("Timestamp").unwrap().type_name(), "timestamp");
    assert_eq!(schema.shape("Payload").unwrap().type_name(), "union");
    assert!(matches!(
        &schema.shape("BucketList").unwrap().kind,
        ShapeKind::List { member } if member.target == "Bucket"
    ));
}

#[test]
fn test_load_smithy_from_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let version_dir = dir.path().join("storage/service/2023-01-01");
    std::fs::create_dir_all(&version_dir).unwrap();
    std::fs::write(version_dir.join("storage-2023-01-01.json"), STORAGE_MODEL).unwrap();

    let provider = SchemaDirectory::new(dir.path()).with_format(Some(SchemaFormat::Smithy));
    let schema = provider.load_service("storage").unwrap();
    assert!(schema.shape("Owner").is_some());
}
