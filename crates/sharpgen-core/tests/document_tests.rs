use sharpgen_core::document::{self, SchemaOrRef};
use sharpgen_core::error::LoadError;

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

#[test]
fn yaml_loads_in_declaration_order() {
    let doc = document::from_yaml(PETSTORE).unwrap();
    assert_eq!(doc.openapi, "3.0.3");
    assert_eq!(doc.info.title.as_deref(), Some("Petstore"));

    let paths: Vec<_> = doc.paths.keys().collect();
    assert_eq!(paths, ["/pets", "/pets/{petId}"]);

    let schemas: Vec<_> = doc.components.as_ref().unwrap().schemas.keys().collect();
    assert_eq!(schemas, ["Pet", "NewPet", "PetStatus"]);
}

#[test]
fn json_loads() {
    let json = r#"{
        "openapi": "3.1.0",
        "info": { "title": "Minimal", "version": "0.0.1" },
        "paths": {}
    }"#;
    let doc = document::from_json(json).unwrap();
    assert_eq!(doc.info.title.as_deref(), Some("Minimal"));
    assert!(doc.paths.is_empty());
}

#[test]
fn unsupported_version_is_rejected() {
    let err = document::from_yaml("openapi: 2.0.0\npaths: {}\n").unwrap_err();
    match err {
        LoadError::UnsupportedVersion(version) => assert_eq!(version, "2.0.0"),
        other => panic!("expected UnsupportedVersion, got {other}"),
    }
}

#[test]
fn malformed_yaml_is_rejected() {
    assert!(document::from_yaml("openapi: [unclosed").is_err());
}

#[test]
fn schema_refs_stay_symbolic() {
    let doc = document::from_yaml(PETSTORE).unwrap();
    let components = doc.components.as_ref().unwrap();
    let pet = components.schemas["Pet"].as_schema().unwrap();
    match &pet.properties["status"] {
        SchemaOrRef::Ref { ref_path } => {
            assert_eq!(ref_path, "#/components/schemas/PetStatus");
        }
        SchemaOrRef::Schema(_) => panic!("status should be a reference"),
    }
}

#[test]
fn component_lookups_resolve_one_level() {
    let yaml = r#"
openapi: 3.0.0
info:
  title: Lookups
  version: 0.1.0
paths: {}
components:
  parameters:
    Limit:
      name: limit
      in: query
      schema:
        type: integer
  responses:
    Empty:
      description: Empty
"#;
    let doc = document::from_yaml(yaml).unwrap();
    let components = doc.components.as_ref().unwrap();

    let limit = components.parameter("#/components/parameters/Limit").unwrap();
    assert_eq!(limit.name, "limit");

    assert!(components.parameter("#/components/parameters/Missing").is_none());
    assert!(components.parameter("#/components/responses/Empty").is_none());
    assert!(components.response("#/components/responses/Empty").is_some());
}

#[test]
fn unknown_security_type_still_loads() {
    let yaml = r#"
openapi: 3.0.0
info:
  title: Odd
  version: 0.1.0
paths: {}
components:
  securitySchemes:
    weird:
      type: somethingElse
"#;
    let doc = document::from_yaml(yaml).unwrap();
    let schemes = &doc.components.as_ref().unwrap().security_schemes;
    assert_eq!(schemes["weird"].scheme_type, "somethingElse");
}
