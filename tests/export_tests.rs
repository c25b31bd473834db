//! Export module tests

use csvw_metadata::export::{MetadataWriter, WriterConfig};
use csvw_metadata::models::{Column, MetadataNode, Schema, Table, TopLevel};
use serde_json::{Value, json};
use tempfile::TempDir;

fn hello_table() -> Table {
    let mut table = Table::new("hello.csv");
    table
        .add_context(Some("http://example.org"), Some("en"))
        .unwrap()
        .add_column(Column::new("example").unwrap())
        .unwrap()
        .add_column(Column::new("region").unwrap())
        .unwrap();
    table.set("dcterms_title", "Hello World!").unwrap();
    table
}

mod writer_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.csv-metadata.json");
        let table = hello_table();
        table.write(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed["@context"],
            json!(["http://www.w3.org/ns/csvw", {"@base": "http://example.org", "@language": "en"}])
        );
        assert_eq!(parsed["tableSchema"]["columns"][0]["name"], json!("example"));
        assert_eq!(parsed["tableSchema"]["columns"][1]["name"], json!("region"));

        let keys: Vec<&str> = parsed
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["url", "@context", "tableSchema", "dcterms:title"]);
    }

    #[test]
    fn test_serialising_twice_is_identical() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        let table = hello_table();
        table.write(&first).unwrap();
        table.write(&second).unwrap();
        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
        assert_eq!(table.to_json_string().unwrap(), table.to_json_string().unwrap());
    }

    #[test]
    fn test_four_space_indentation() {
        let table = Table::new("a.csv");
        assert_eq!(table.to_json_string().unwrap(), "{\n    \"url\": \"a.csv\"\n}");
    }

    #[test]
    fn test_nested_nodes_are_unwrapped() {
        let mut schema = Schema::new();
        schema.add_column(Column::new("id").unwrap()).unwrap();
        schema.set_primary_key("id").unwrap();
        schema.add_context(None, None).unwrap();

        let writer = MetadataWriter::new(WriterConfig::builder().indent(2).build());
        let rendered = writer.to_string(&schema).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"columns\": [\n    {\n      \"name\": \"id\"\n    }\n  ],\n  \"primaryKey\": \"id\",\n  \"@context\": \"http://www.w3.org/ns/csvw\"\n}"
        );
        assert_eq!(serde_json::to_value(&schema).unwrap(), schema.to_json());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(hello_table().write(&path).is_err());
        assert!(!path.exists());
    }
}
