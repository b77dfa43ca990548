//! Execute queries against the remote service's OData endpoint.
//!
//! Each operation first obtains an access token with the resource owner password grant,
//! then issues a GET against the entity's collection.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use query_engine_metadata::metadata::EntityMetadata;
use query_engine_models::models::{GenericEntity, GenericEntityCollection};

use crate::error::Error;
use crate::materialize::{materialize, materialize_all, Coercion};
use crate::metrics;
use crate::records::{ODataCollection, RawRecord, Token};

pub const API_PATH: &str = "/api/data/v9.0";
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://login.microsoftonline.com/common/oauth2/token";
pub const DEFAULT_CLIENT_ID: &str = "2ad88395-b77d-4561-9441-d0e40824f9bc";
pub const ODATA_VERSION: &str = "4.0";

static PAGING_COOKIE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("pagingcookie='(.*?)'").expect("paging cookie pattern is a valid regex")
});

/// Credentials and endpoints of the remote service.
#[derive(Clone)]
pub struct Connection {
    pub resource: String,
    pub username: String,
    pub password: String,
    pub token_endpoint: String,
    pub client_id: String,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("resource", &self.resource)
            .field("username", &self.username)
            .field("token_endpoint", &self.token_endpoint)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// The path of a collection request, relative to the service root.
pub fn collection_path(collection: &str, query_string: &str) -> String {
    if query_string.is_empty() {
        format!("{API_PATH}/{collection}")
    } else {
        format!("{API_PATH}/{collection}?{query_string}")
    }
}

/// The path of a single record, relative to the service root.
pub fn entity_path(collection: &str, id: Uuid) -> String {
    format!("{API_PATH}/{collection}({id})")
}

/// Find the paging cookie in a next link.
///
/// The link is URL-decoded once and the cookie is the content of its
/// `pagingcookie='...'` attribute, returned as it appears there.
pub fn extract_paging_cookie(next_link: &str) -> Option<String> {
    let spaced = next_link.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8_lossy();
    PAGING_COOKIE
        .captures(&decoded)
        .and_then(|captures| captures.get(1))
        .map(|cookie| cookie.as_str().to_string())
}

/// Request an access token with the resource owner password grant.
pub async fn acquire_token(
    client: &reqwest::Client,
    connection: &Connection,
    metrics: &metrics::Metrics,
) -> Result<Token, Error> {
    metrics.token_request_total.inc();

    let response = client
        .post(&connection.token_endpoint)
        .form(&[
            ("grant_type", "password"),
            ("client_id", connection.client_id.as_str()),
            ("resource", connection.resource.as_str()),
            ("username", connection.username.as_str()),
            ("password", connection.password.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Authentication { status, body });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Run a collection query and materialize the returned records.
pub async fn execute(
    connection: &Connection,
    metrics: &metrics::Metrics,
    metadata: &EntityMetadata,
    query_string: &str,
    page_size: Option<u32>,
) -> Result<GenericEntityCollection, Error> {
    let client = reqwest::Client::new();
    let token = acquire_token(&client, connection, metrics)
        .instrument(info_span!("Acquire token"))
        .await?;

    let path = collection_path(&metadata.external_collection_name, query_string);
    let mut request = get(&client, &token, &path);
    if let Some(page_size) = page_size.filter(|size| *size > 0) {
        request = request.header("Prefer", format!("odata.maxpagesize={page_size}"));
    }

    let (status, body) = send(request, metrics).await?;
    if !status.is_success() {
        return Err(Error::Transport { status, body });
    }

    let collection: ODataCollection = serde_json::from_str(&body)?;
    let paging_cookie = collection
        .next_link
        .as_deref()
        .and_then(extract_paging_cookie);
    if collection.next_link.is_some() && paging_cookie.is_none() {
        tracing::warn!("next link present but no paging cookie could be extracted from it");
    }

    let entities = async { materialize_all(metadata, &collection.value, Coercion::AllAttributes) }
        .instrument(info_span!("Materialize results"))
        .await?;

    Ok(GenericEntityCollection {
        entities,
        more_records: collection.next_link.is_some(),
        total_record_count: collection.count.unwrap_or(-1),
        paging_cookie,
    })
}

/// Fetch a single record by its key. A missing record yields `None`.
pub async fn retrieve(
    connection: &Connection,
    metrics: &metrics::Metrics,
    metadata: &EntityMetadata,
    id: Uuid,
) -> Result<Option<GenericEntity>, Error> {
    let client = reqwest::Client::new();
    let token = acquire_token(&client, connection, metrics)
        .instrument(info_span!("Acquire token"))
        .await?;

    let path = entity_path(&metadata.external_collection_name, id);
    let (status, body) = send(get(&client, &token, &path), metrics).await?;
    if status == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(Error::Transport { status, body });
    }

    let record: RawRecord = serde_json::from_str(&body)?;
    let entity = async { materialize(metadata, &record, Coercion::AllAttributes) }
        .instrument(info_span!("Materialize results"))
        .await?;

    Ok(Some(entity))
}

fn get(client: &reqwest::Client, token: &Token, path: &str) -> reqwest::RequestBuilder {
    client
        .get(format!("{}{path}", token.resource.trim_end_matches('/')))
        .bearer_auth(&token.access_token)
        .header(reqwest::header::ACCEPT, "application/json")
        .header("OData-MaxVersion", ODATA_VERSION)
        .header("OData-Version", ODATA_VERSION)
}

async fn send(
    request: reqwest::RequestBuilder,
    metrics: &metrics::Metrics,
) -> Result<(reqwest::StatusCode, String), Error> {
    let timer = metrics.request_duration.start_timer();
    let response = request.send().await;
    timer.observe_duration();
    let response = response?;

    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}
