//! Metadata and canned backend payloads shared across test cases.

use query_engine_metadata::metadata::{
    AttributeMetadata, AttributeType, EntitiesInfo, EntityMetadata, Metadata,
};

pub const BOOK_ENTITY: &str = "new_book";

pub const DUNE_ID: &str = "8a5b9e4e-1a0c-4c55-9d7f-3f6c2f0e5a11";
pub const NEUROMANCER_ID: &str = "1f0e2d3c-4b5a-4697-8879-6a5b4c3d2e1f";

/// A virtual entity over a collection of books.
pub fn book_metadata() -> EntityMetadata {
    EntityMetadata {
        logical_name: BOOK_ENTITY.to_string(),
        external_name: "book".to_string(),
        external_collection_name: "books".to_string(),
        primary_id_attribute: "new_bookid".to_string(),
        attributes: vec![
            AttributeMetadata::new("new_bookid", "id", AttributeType::Uniqueidentifier),
            AttributeMetadata::new("new_name", "title", AttributeType::String),
            AttributeMetadata::new("new_author", "author", AttributeType::String),
            AttributeMetadata::new("new_pages", "pages", AttributeType::Integer),
            AttributeMetadata::new("new_price", "price", AttributeType::Money),
            AttributeMetadata::new("new_publishedon", "publishedOn", AttributeType::DateTime),
            AttributeMetadata::new("new_genre", "genre", AttributeType::Picklist),
        ],
    }
}

/// Metadata describing only the book entity.
pub fn metadata() -> Metadata {
    Metadata {
        entities: EntitiesInfo::from_iter([book_metadata()]),
    }
}

/// Two book records as the external stores return them. The second lacks an author.
pub fn book_records() -> serde_json::Value {
    serde_json::json!([
        {
            "id": DUNE_ID,
            "title": "Dune",
            "author": "Frank Herbert",
            "pages": 412,
            "price": 9.99,
            "publishedOn": "1965-08-01T00:00:00Z",
            "genre": 2
        },
        {
            "id": NEUROMANCER_ID,
            "title": "Neuromancer",
            "pages": 271,
            "price": "12.50",
            "publishedOn": "1984-07-01T00:00:00Z",
            "genre": 2
        }
    ])
}

/// A document store query response carrying [`book_records`].
pub fn document_store_response() -> serde_json::Value {
    serde_json::json!({
        "_rid": "Sl8fAI6n7Qc=",
        "_count": 2,
        "Documents": book_records()
    })
}

/// A remote service collection response carrying [`book_records`], optionally
/// with a next link.
pub fn odata_collection_response(next_link: Option<&str>) -> serde_json::Value {
    let mut response = serde_json::json!({
        "@odata.context": "https://org.example.com/api/data/v9.0/$metadata#books",
        "@odata.count": 5,
        "value": book_records()
    });
    if let Some(next_link) = next_link {
        response["@odata.nextLink"] = serde_json::Value::String(next_link.to_string());
    }
    response
}

/// A token endpoint response issuing a token for `resource`.
pub fn token_response(resource: &str) -> serde_json::Value {
    serde_json::json!({
        "token_type": "Bearer",
        "expires_in": "3599",
        "resource": resource,
        "access_token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.test"
    })
}
