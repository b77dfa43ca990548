use similar_asserts::assert_eq;

use tests_common::paths::get_static_configuration_dir;
use virtual_entity_configuration::environment::FixedEnvironment;
use virtual_entity_configuration::error::{
    MakeRuntimeConfigurationError, ParseConfigurationError,
};
use virtual_entity_configuration::{
    make_runtime_configuration, parse_configuration, write_parsed_configuration, DataSource,
    DataSourceKind, DataSourceSettings, ParsedConfiguration,
};

#[tokio::test]
async fn sample_configurations_parse() {
    let document_store = parse_configuration(get_static_configuration_dir("document-store"))
        .await
        .unwrap();
    assert!(matches!(
        document_store.data_source,
        DataSourceSettings::DocumentStore(_)
    ));
    assert_eq!(document_store.max_url_length, 2048);
    assert!(document_store.metadata.entities.get("new_book").is_some());

    let remote_service = parse_configuration(get_static_configuration_dir("remote-service"))
        .await
        .unwrap();
    assert_eq!(remote_service.max_url_length, 4096);
}

#[tokio::test]
async fn sample_configurations_match_the_schema() {
    let schema = serde_json::to_value(schemars::schema_for!(ParsedConfiguration)).unwrap();
    let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();

    for name in ["document-store", "remote-service"] {
        let file = get_static_configuration_dir(name).join("configuration.json");
        let contents = tokio::fs::read_to_string(&file).await.unwrap();
        let instance: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(compiled.is_valid(&instance), "{name} does not match the schema");
    }
}

#[tokio::test]
async fn initial_configuration_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let initial = ParsedConfiguration::initial(DataSourceKind::RemoteService);

    write_parsed_configuration(initial.clone(), dir.path())
        .await
        .unwrap();

    assert!(dir.path().join("schema.json").exists());
    assert_eq!(parse_configuration(dir.path()).await.unwrap(), initial);

    let written = tokio::fs::read_to_string(dir.path().join("configuration.json"))
        .await
        .unwrap();
    insta::assert_snapshot!(written.trim_end(), @r###"
    {
      "version": 1,
      "dataSource": {
        "remoteService": {
          "resource": "",
          "username": "",
          "password": {
            "variable": "VIRTUAL_ENTITY_REMOTE_SERVICE_PASSWORD"
          }
        }
      },
      "metadata": {
        "entities": {}
      }
    }
    "###);
}

#[tokio::test]
async fn parse_errors_point_at_the_file() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(
        dir.path().join("configuration.json"),
        "{\n  \"version\": 1,\n  \"dataSource\": 42\n}\n",
    )
    .await
    .unwrap();

    match parse_configuration(dir.path()).await {
        Err(ParseConfigurationError::ParseError {
            file_path, line, ..
        }) => {
            assert_eq!(file_path, dir.path().join("configuration.json"));
            assert_eq!(line, 3);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn other_versions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut configuration = ParsedConfiguration::initial(DataSourceKind::DocumentStore);
    configuration.version = 2;
    write_parsed_configuration(configuration, dir.path())
        .await
        .unwrap();

    assert!(matches!(
        parse_configuration(dir.path()).await,
        Err(ParseConfigurationError::UnsupportedVersion { version: 2, .. })
    ));
}

#[test]
fn secrets_are_resolved_from_the_environment() {
    let parsed = ParsedConfiguration::initial(DataSourceKind::RemoteService);
    let environment =
        FixedEnvironment::from_iter([("VIRTUAL_ENTITY_REMOTE_SERVICE_PASSWORD", "hunter2")]);

    let configuration = make_runtime_configuration(parsed, environment).unwrap();

    match configuration.data_source {
        DataSource::RemoteService(connection) => {
            assert_eq!(connection.password, "hunter2");
            assert_eq!(
                connection.token_endpoint,
                "https://login.microsoftonline.com/common/oauth2/token"
            );
            assert_eq!(
                connection.client_id,
                "2ad88395-b77d-4561-9441-d0e40824f9bc"
            );
        }
        DataSource::DocumentStore(_) => panic!("expected a remote service"),
    }
}

#[test]
fn missing_variables_are_reported() {
    let parsed = ParsedConfiguration::initial(DataSourceKind::DocumentStore);

    let result = make_runtime_configuration(parsed, FixedEnvironment::default());

    match result {
        Err(MakeRuntimeConfigurationError::MissingEnvironmentVariable { message, .. }) => {
            assert_eq!(
                message,
                "the environment variable VIRTUAL_ENTITY_DOCUMENT_STORE_KEY is not set"
            );
        }
        other => panic!("expected a missing variable, got {other:?}"),
    }
}
