use sharpgen_core::CodeGenerator;
use sharpgen_core::ir::{
    ApiKeyIn, AuthKind, Enum, EnumValue, HttpMethod, Model, Operation, Parameter,
    ParameterLocation, Property, RequestBody, Scalar, SecurityScheme, Spec, TypeRef,
};
use sharpgen_csharp::{CsharpClientGenerator, CsharpConfig};

fn sample_spec() -> Spec {
    Spec {
        title: "Petstore".to_string(),
        description: None,
        version: Some("1.0.0".to_string()),
        base_url: Some("https://petstore.example.com/v1".to_string()),
        models: vec![Model {
            name: "Pet".to_string(),
            description: Some("A pet available for adoption.".to_string()),
            parent: None,
            properties: vec![
                Property {
                    name: "Id".to_string(),
                    wire_name: "id".to_string(),
                    ty: TypeRef::scalar(Scalar::Int64),
                    required: true,
                    nullable: false,
                    description: None,
                    min_length: None,
                    max_length: None,
                    pattern: None,
                    minimum: None,
                    maximum: None,
                    example: None,
                },
                Property {
                    name: "Name".to_string(),
                    wire_name: "name".to_string(),
                    ty: TypeRef::scalar(Scalar::String),
                    required: true,
                    nullable: false,
                    description: None,
                    min_length: Some(1),
                    max_length: Some(100),
                    pattern: None,
                    minimum: None,
                    maximum: None,
                    example: None,
                },
            ],
            polymorphism: None,
        }],
        enums: vec![Enum {
            name: "PetStatus".to_string(),
            description: None,
            values: vec![
                EnumValue {
                    name: "Available".to_string(),
                    wire_value: "available".to_string(),
                },
                EnumValue {
                    name: "Sold".to_string(),
                    wire_value: "sold".to_string(),
                },
            ],
        }],
        operations: vec![
            Operation {
                id: "ListPets".to_string(),
                tag: "pets".to_string(),
                method: HttpMethod::Get,
                path: "/pets".to_string(),
                summary: Some("List all pets".to_string()),
                description: None,
                return_type: TypeRef::reference("Pet"),
                returns_list: true,
                parameters: vec![Parameter {
                    wire_name: "limit".to_string(),
                    name: "limit".to_string(),
                    ty: TypeRef::scalar(Scalar::Int32).into_nullable(true),
                    location: ParameterLocation::Query,
                    required: false,
                    description: None,
                    example: None,
                }],
                request_body: None,
            },
            Operation {
                id: "CreatePet".to_string(),
                tag: "pets".to_string(),
                method: HttpMethod::Post,
                path: "/pets".to_string(),
                summary: None,
                description: None,
                return_type: TypeRef::reference("Pet"),
                returns_list: false,
                parameters: vec![],
                request_body: Some(RequestBody {
                    ty: TypeRef::reference("Pet"),
                    content_type: "application/json".to_string(),
                    required: true,
                    description: None,
                }),
            },
            Operation {
                id: "DeletePet".to_string(),
                tag: "pets".to_string(),
                method: HttpMethod::Delete,
                path: "/pets/{petId}".to_string(),
                summary: None,
                description: None,
                return_type: TypeRef::void(),
                returns_list: false,
                parameters: vec![Parameter {
                    wire_name: "petId".to_string(),
                    name: "petId".to_string(),
                    ty: TypeRef::scalar(Scalar::Int64),
                    location: ParameterLocation::Path,
                    required: true,
                    description: None,
                    example: None,
                }],
                request_body: None,
            },
        ],
        security_schemes: vec![
            SecurityScheme {
                name: "bearerAuth".to_string(),
                kind: AuthKind::HttpBearer,
                scheme: Some("bearer".to_string()),
                api_key_name: None,
                api_key_in: None,
            },
            SecurityScheme {
                name: "apiKeyAuth".to_string(),
                kind: AuthKind::ApiKey,
                scheme: None,
                api_key_name: Some("X-API-Key".to_string()),
                api_key_in: Some(ApiKeyIn::Header),
            },
        ],
    }
}

fn generate() -> Vec<sharpgen_core::GeneratedFile> {
    CsharpClientGenerator
        .generate(&sample_spec(), &CsharpConfig::default())
        .unwrap()
}

fn content_of<'a>(files: &'a [sharpgen_core::GeneratedFile], path: &str) -> &'a str {
    &files
        .iter()
        .find(|f| f.path == path)
        .unwrap_or_else(|| panic!("missing generated file {path}"))
        .content
}

#[test]
fn generates_expected_file_set() {
    let files = generate();
    let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
    assert!(paths.contains(&"src/Petstore.Client/Models/Pet.cs"));
    assert!(paths.contains(&"src/Petstore.Client/Models/PetStatus.cs"));
    assert!(paths.contains(&"src/Petstore.Client/Api/IPetsApi.cs"));
    assert!(paths.contains(&"src/Petstore.Client/Api/PetsApi.cs"));
    assert!(paths.contains(&"src/Petstore.Client/ClientConfiguration.cs"));
    assert!(paths.contains(&"src/Petstore.Client/BaseApiClient.cs"));
    assert!(paths.contains(&"src/Petstore.Client/ApiException.cs"));
    assert!(paths.contains(&"src/Petstore.Client/Petstore.Client.csproj"));
    assert!(paths.contains(&"Petstore.sln"));
}

#[test]
fn model_file_content() {
    let files = generate();
    let pet = content_of(&files, "src/Petstore.Client/Models/Pet.cs");
    assert!(pet.contains("namespace Petstore.Client;"));
    assert!(pet.contains("public class Pet"));
    assert!(pet.contains("[Required]"));
    assert!(pet.contains("[StringLength(100, MinimumLength = 1)]"));
    assert!(pet.contains("[JsonPropertyName(\"id\")]"));
    assert!(pet.contains("public long Id { get; set; }"));
}

#[test]
fn enum_file_content() {
    let files = generate();
    let status = content_of(&files, "src/Petstore.Client/Models/PetStatus.cs");
    assert!(status.contains("public enum PetStatus"));
    assert!(status.contains("[EnumMember(Value = \"available\")]"));
    assert!(status.contains("Available,"));
}

#[test]
fn client_file_content() {
    let files = generate();
    let client = content_of(&files, "src/Petstore.Client/Api/PetsApi.cs");
    assert!(client.contains("public class PetsApi : BaseApiClient, IPetsApi"));
    assert!(client.contains("public async Task<List<Pet>> ListPetsAsync(int? limit)"));
    assert!(client.contains("query[\"limit\"] = limit?.ToString();"));
    assert!(client.contains("public async Task<Pet> CreatePetAsync(Pet body)"));
    assert!(client.contains("public async Task DeletePetAsync(long petId)"));
    assert!(client.contains("$\"/pets/{Uri.EscapeDataString(petId.ToString())}\""));
    assert!(client.contains("await SendAsync(HttpMethod.Delete, path, null, null, null);"));

    let interface = content_of(&files, "src/Petstore.Client/Api/IPetsApi.cs");
    assert!(interface.contains("Task<List<Pet>> ListPetsAsync(int? limit);"));
}

#[test]
fn support_files_reflect_security_schemes() {
    let files = generate();
    let configuration = content_of(&files, "src/Petstore.Client/ClientConfiguration.cs");
    assert!(configuration.contains("public string? BearerToken { get; set; }"));
    assert!(configuration.contains("public string ApiKeyName { get; set; } = \"X-API-Key\";"));
    assert!(!configuration.contains("BasicUsername"));
    assert!(configuration.contains("BaseUrl { get; set; } = \"https://petstore.example.com/v1\";"));

    let base = content_of(&files, "src/Petstore.Client/BaseApiClient.cs");
    assert!(base.contains("AuthenticationHeaderValue(\"Bearer\""));
    assert!(!base.contains("AuthenticationHeaderValue(\"Basic\""));
}

#[test]
fn namespace_override_is_honored() {
    let config = CsharpConfig {
        namespace: Some("Acme.Pets".to_string()),
    };
    let files = CsharpClientGenerator.generate(&sample_spec(), &config).unwrap();
    assert!(files.iter().any(|f| f.path == "src/Acme.Pets/Models/Pet.cs"));
    let pet = content_of(&files, "src/Acme.Pets/Models/Pet.cs");
    assert!(pet.contains("namespace Acme.Pets;"));
}
