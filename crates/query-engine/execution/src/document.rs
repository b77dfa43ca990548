//! Execute queries against the document store.
//!
//! Every request is signed with the account's master key. Queries are POSTed to the
//! collection's `docs` resource with the query text in a JSON body.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{info_span, Instrument};

use query_engine_metadata::metadata::EntityMetadata;
use query_engine_models::models::{GenericEntityCollection, PagingInfo};

use crate::error::Error;
use crate::materialize::{materialize_all, Coercion};
use crate::metrics;
use crate::records::DocumentEnvelope;

pub const API_VERSION: &str = "2017-02-22";
pub const KEY_TYPE: &str = "master";
pub const TOKEN_VERSION: &str = "1.0";
pub const RESOURCE_TYPE: &str = "docs";
pub const QUERY_CONTENT_TYPE: &str = "application/query+json";

pub const DATE_HEADER: &str = "X-MS-Date";
pub const VERSION_HEADER: &str = "X-MS-Version";
pub const IS_QUERY_HEADER: &str = "X-MS-DocumentDB-IsQuery";
pub const MAX_ITEM_COUNT_HEADER: &str = "x-ms-max-item-count";
pub const CONTINUATION_HEADER: &str = "x-ms-continuation";

type HmacSha256 = Hmac<Sha256>;

/// How to reach a database of the document store.
#[derive(Clone)]
pub struct Connection {
    pub uri: String,
    /// Base64-encoded master key.
    pub key: String,
    pub database: String,
}

impl Connection {
    /// `dbs/<database>/colls/<collection>`
    pub fn resource_id(&self, collection: &str) -> String {
        format!("dbs/{}/colls/{collection}", self.database)
    }

    /// The URL queries against a collection are sent to.
    pub fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/{}/{RESOURCE_TYPE}",
            self.uri.trim_end_matches('/'),
            self.resource_id(collection)
        )
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("uri", &self.uri)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

/// Format a timestamp the way the date header and the signature expect it.
pub fn rfc1123_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Compute the value of the `Authorization` header for a request.
///
/// The signature is an HMAC-SHA256 over
/// `verb\nresource type\nresource id\ndate\n\n` (verb, resource type and date lowercased),
/// keyed with the base64-decoded master key.
pub fn authorization_token(
    verb: &str,
    resource_type: &str,
    resource_id: &str,
    date: &str,
    key: &str,
) -> Result<String, Error> {
    let key = STANDARD
        .decode(key)
        .map_err(|err| Error::InvalidKey(err.to_string()))?;

    let payload = format!(
        "{}\n{}\n{resource_id}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.to_lowercase(),
        date.to_lowercase()
    );

    let mut mac =
        HmacSha256::new_from_slice(&key).map_err(|err| Error::InvalidKey(err.to_string()))?;
    mac.update(payload.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    let token = format!("type={KEY_TYPE}&ver={TOKEN_VERSION}&sig={signature}");
    Ok(url::form_urlencoded::byte_serialize(token.as_bytes()).collect())
}

/// Run a query against the entity's collection and materialize the returned documents.
pub async fn execute(
    connection: &Connection,
    metrics: &metrics::Metrics,
    metadata: &EntityMetadata,
    query_text: &str,
    paging: Option<&PagingInfo>,
) -> Result<GenericEntityCollection, Error> {
    let collection = &metadata.external_collection_name;
    let date = rfc1123_date(Utc::now());
    let authorization = authorization_token(
        "POST",
        RESOURCE_TYPE,
        &connection.resource_id(collection),
        &date,
        &connection.key,
    )?;

    let mut request = reqwest::Client::new()
        .post(connection.documents_url(collection))
        .header(reqwest::header::AUTHORIZATION, authorization)
        .header(DATE_HEADER, &date)
        .header(VERSION_HEADER, API_VERSION)
        .header(IS_QUERY_HEADER, "True")
        .header(reqwest::header::CONTENT_TYPE, QUERY_CONTENT_TYPE)
        .body(serde_json::json!({ "query": query_text }).to_string());

    if let Some(paging) = paging {
        if paging.page_size > 0 {
            request = request.header(MAX_ITEM_COUNT_HEADER, paging.page_size.to_string());
        }
        if let Some(cookie) = paging.cookie.as_deref().filter(|cookie| !cookie.is_empty()) {
            request = request.header(CONTINUATION_HEADER, cookie);
        }
    }

    let timer = metrics.request_duration.start_timer();
    let response = request.send().await;
    timer.observe_duration();
    let response = response?;

    let status = response.status();
    let continuation = response
        .headers()
        .get(CONTINUATION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Error::Transport { status, body });
    }

    let envelope: DocumentEnvelope = serde_json::from_str(&body)?;
    tracing::debug!(
        resource_id = ?envelope.resource_id,
        count = ?envelope.count,
        "received documents"
    );

    let entities = async { materialize_all(metadata, &envelope.documents, Coercion::PrimaryIdOnly) }
        .instrument(info_span!("Materialize results"))
        .await?;

    Ok(GenericEntityCollection {
        entities,
        more_records: continuation.is_some(),
        total_record_count: envelope.count.unwrap_or(-1),
        paging_cookie: continuation,
    })
}
