//! Response envelopes of the external stores.

use serde::Deserialize;

/// A raw record, keyed by external attribute name.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// The body of a document store query response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentEnvelope {
    #[serde(rename = "_rid", default)]
    pub resource_id: Option<String>,
    #[serde(rename = "_count", default)]
    pub count: Option<i64>,
    #[serde(rename = "Documents", default)]
    pub documents: Vec<RawRecord>,
}

/// The body of a remote service collection response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ODataCollection {
    #[serde(rename = "@odata.context", default)]
    pub context: Option<String>,
    #[serde(rename = "@odata.count", default)]
    pub count: Option<i64>,
    #[serde(rename = "@odata.nextLink", default)]
    pub next_link: Option<String>,
    #[serde(default)]
    pub value: Vec<RawRecord>,
}

/// An access token issued by the token endpoint.
#[derive(Clone, PartialEq, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Root URI of the service the token is valid for.
    pub resource: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

// Keep the access token out of logs.
impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("resource", &self.resource)
            .field("token_type", &self.token_type)
            .finish_non_exhaustive()
    }
}
