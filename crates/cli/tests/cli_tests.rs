use similar_asserts::assert_eq;

use query_engine_models::models::{ColumnSet, QueryModel};
use tests_common::fixtures;
use tests_common::mock::{MockBackend, MockResponse};
use virtual_entity_cli::{run, Command, Context};
use virtual_entity_configuration::environment::FixedEnvironment;
use virtual_entity_configuration::{
    parse_configuration, write_parsed_configuration, DataSourceKind, DataSourceSettings,
    DocumentStoreSettings, ParsedConfiguration,
};

fn context(dir: &tempfile::TempDir) -> Context<FixedEnvironment> {
    Context {
        context_path: dir.path().to_owned(),
        environment: FixedEnvironment::default(),
    }
}

#[tokio::test]
async fn initialize_writes_an_empty_configuration() {
    let dir = tempfile::tempdir().unwrap();

    run(
        Command::Initialize {
            data_source: DataSourceKind::DocumentStore,
        },
        context(&dir),
        &mut Vec::new(),
    )
    .await
    .unwrap();

    assert!(dir.path().join("schema.json").exists());
    assert_eq!(
        parse_configuration(dir.path()).await.unwrap(),
        ParsedConfiguration::initial(DataSourceKind::DocumentStore)
    );
}

#[tokio::test]
async fn initialize_keeps_an_existing_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let initialize = || Command::Initialize {
        data_source: DataSourceKind::RemoteService,
    };

    run(initialize(), context(&dir), &mut Vec::new())
        .await
        .unwrap();
    let second = run(initialize(), context(&dir), &mut Vec::new()).await;

    assert!(second.is_err());
}

#[tokio::test]
async fn print_schema_describes_the_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();

    run(Command::PrintSchema, context(&dir), &mut out)
        .await
        .unwrap();

    let schema: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(schema["title"], "ParsedConfiguration");
}

#[tokio::test]
async fn get_entities_prints_the_collection() {
    let backend = MockBackend::start().await.unwrap();
    backend.on(
        "POST",
        "/dbs/library/colls/books/docs",
        MockResponse::json(&fixtures::document_store_response()),
    );

    let dir = tempfile::tempdir().unwrap();
    let mut configuration = ParsedConfiguration::initial(DataSourceKind::DocumentStore);
    configuration.data_source = DataSourceSettings::DocumentStore(DocumentStoreSettings {
        uri: backend.base_url().to_string(),
        key: "dmlydHVhbC1lbnRpdHktdGVzdC1tYXN0ZXIta2V5LTAxMjM0NTY3ODk=".into(),
        database: "library".to_string(),
    });
    configuration.metadata = fixtures::metadata();
    write_parsed_configuration(configuration, dir.path())
        .await
        .unwrap();

    let mut query = QueryModel::new(fixtures::BOOK_ENTITY);
    query.column_set = ColumnSet::columns(["new_name", "new_author"]);
    let query_file = dir.path().join("query.json");
    tokio::fs::write(&query_file, serde_json::to_string(&query).unwrap())
        .await
        .unwrap();

    let mut out = Vec::new();
    run(
        Command::GetEntities { query: query_file },
        context(&dir),
        &mut out,
    )
    .await
    .unwrap();

    let collection: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(collection["entities"].as_array().unwrap().len(), 2);
    assert_eq!(collection["totalRecordCount"], 2);
    assert_eq!(collection["moreRecords"], false);
}

#[tokio::test]
async fn get_entities_needs_a_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let query_file = dir.path().join("query.json");
    tokio::fs::write(
        &query_file,
        serde_json::to_string(&QueryModel::new(fixtures::BOOK_ENTITY)).unwrap(),
    )
    .await
    .unwrap();

    let result = run(
        Command::GetEntities { query: query_file },
        context(&dir),
        &mut Vec::new(),
    )
    .await;

    assert!(result.is_err());
}
