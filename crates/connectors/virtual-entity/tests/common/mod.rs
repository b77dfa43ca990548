//! Common functions used across test cases.

use std::sync::Arc;

use query_engine_execution::{document, odata};
use tests_common::fixtures;
use tests_common::mock::{MockBackend, MockResponse};
use virtual_entity::state;
use virtual_entity::VirtualEntity;
use virtual_entity_configuration::{Configuration, DataSource};

pub const DOCS_PATH: &str = "/dbs/library/colls/books/docs";
pub const TOKEN_PATH: &str = "/common/oauth2/token";
pub const BOOKS_PATH: &str = "/api/data/v9.0/books";

async fn create_service(data_source: DataSource, max_url_length: usize) -> VirtualEntity {
    tests_common::init_logging();
    let state = state::create_state(&mut prometheus::Registry::new())
        .await
        .unwrap();
    let configuration = Configuration {
        data_source,
        metadata: fixtures::metadata(),
        max_url_length,
    };
    VirtualEntity::new(configuration, Arc::new(state))
}

/// A service over a document store served by `backend`.
pub async fn document_store(backend: &MockBackend) -> VirtualEntity {
    let connection = document::Connection {
        uri: backend.base_url().to_string(),
        key: "dmlydHVhbC1lbnRpdHktdGVzdC1tYXN0ZXIta2V5LTAxMjM0NTY3ODk=".to_string(),
        database: "library".to_string(),
    };
    create_service(DataSource::DocumentStore(connection), 2048).await
}

/// A service over a remote service served by `backend`, which also issues tokens.
pub async fn remote_service(backend: &MockBackend, max_url_length: usize) -> VirtualEntity {
    backend.on(
        "POST",
        TOKEN_PATH,
        MockResponse::json(&fixtures::token_response(backend.base_url())),
    );
    let connection = odata::Connection {
        resource: "https://org.example.com".to_string(),
        username: "reader@example.com".to_string(),
        password: "correct horse".to_string(),
        token_endpoint: format!("{}{TOKEN_PATH}", backend.base_url()),
        client_id: odata::DEFAULT_CLIENT_ID.to_string(),
    };
    create_service(DataSource::RemoteService(connection), max_url_length).await
}
