use std::io::Write;
use std::sync::Arc;

use swiftserve_scaffold::generation::to_literal_text;
use swiftserve_scaffold::infrastructure::openapi::{
    DocumentFormat, FileSystem, MemoryFileSystem, SpecDocument, extract_models, load_async,
};
use swiftserve_scaffold::Error;
use tempfile::Builder;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PETSTORE_YAML: &str = r#"swagger: "2.0"
info:
  title: Swagger Petstore
  version: 1.0.0
paths: {}
definitions:
  Pet:
    type: object
    required:
      - name
    properties:
      name:
        type: string
      status:
        type: string
        default: available
      price:
        type: number
        default: "9.99"
      attributes:
        type: object
        default: '{"colour": "brown"}'
"#;

const PERSON_DINO_JSON: &str = r#"{
  "swagger": "2.0",
  "info": {"title": "Dinosaurs", "version": "1.0"},
  "definitions": {
    "Dino": {
      "properties": {
        "extinct": {"type": "boolean", "default": "true"},
        "height": {"type": "integer"}
      }
    }
  }
}"#;

#[tokio::test]
async fn test_yaml_over_http_matches_direct_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/petstore2.yaml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PETSTORE_YAML))
        .mount(&mock_server)
        .await;

    let url = format!("{}/petstore2.yaml", mock_server.uri());
    let loaded = load_async(&url, None).await.unwrap();
    let direct =
        SpecDocument::decode(&url, PETSTORE_YAML.as_bytes(), DocumentFormat::Yaml).unwrap();

    assert_eq!(loaded.root(), direct.root());
}

#[tokio::test]
async fn test_http_404_names_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.yml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing.yml", mock_server.uri());
    let err = load_async(&url, None).await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert!(err.to_string().contains(&url));
}

#[tokio::test]
async fn test_json_file_to_swift_fields() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(PERSON_DINO_JSON.as_bytes()).unwrap();
    file.flush().unwrap();

    let doc = load_async(file.path().to_str().unwrap(), None).await.unwrap();
    let models = extract_models(&doc).unwrap();
    assert_eq!(models.len(), 1);

    let dino = &models[0];
    assert_eq!(dino.name, "Dino");

    let extinct = dino.fields.iter().find(|f| f.name == "extinct").unwrap();
    assert_eq!(extinct.type_name(), "Bool?");
    assert_eq!(extinct.default_literal_text().unwrap().as_deref(), Some("true"));

    let height = dino.fields.iter().find(|f| f.name == "height").unwrap();
    assert_eq!(height.type_name(), "Double?");
    assert_eq!(height.default_literal_text().unwrap(), None);
}

#[tokio::test]
async fn test_staged_yaml_to_swift_fields() {
    let fs: Arc<dyn FileSystem> =
        Arc::new(MemoryFileSystem::new().with_file("/staged/petstore2.yaml", PETSTORE_YAML));

    let doc = load_async("/staged/petstore2.yaml", Some(fs)).await.unwrap();
    let models = extract_models(&doc).unwrap();
    let pet = &models[0];

    let mut rendered: Vec<String> = pet
        .fields
        .iter()
        .map(|field| {
            let literal = field
                .default_literal()
                .unwrap()
                .map(|value| to_literal_text(&value).unwrap());
            match literal {
                Some(literal) => format!("{}: {} = {}", field.name, field.type_name(), literal),
                None => format!("{}: {}", field.name, field.type_name()),
            }
        })
        .collect();
    rendered.sort();

    assert_eq!(
        rendered,
        vec![
            r#"attributes: Any? = ["colour": "brown"]"#.to_string(),
            "name: String".to_string(),
            "price: Double? = 9.99".to_string(),
            r#"status: String? = "available""#.to_string(),
        ]
    );
}

#[tokio::test]
async fn test_malformed_file_rejected() {
    let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(b"swagger: [unterminated").unwrap();
    file.flush().unwrap();

    let source = file.path().to_str().unwrap();
    let err = load_async(source, None).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains(source));
}
