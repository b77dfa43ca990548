//! Materialized results handed back to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value::Value;

/// A reference to a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    pub logical_name: String,
    pub id: Uuid,
}

impl EntityReference {
    pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
        EntityReference {
            logical_name: logical_name.into(),
            id,
        }
    }
}

/// A record with typed, logically named attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericEntity {
    pub logical_name: String,
    pub id: Uuid,
    pub attributes: BTreeMap<String, Value>,
}

impl GenericEntity {
    /// An entity with no attributes and a nil id.
    pub fn new(logical_name: impl Into<String>) -> Self {
        GenericEntity {
            logical_name: logical_name.into(),
            id: Uuid::nil(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn get(&self, logical_name: &str) -> Option<&Value> {
        self.attributes.get(logical_name)
    }
}

/// A page of records, with the paging metadata reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericEntityCollection {
    pub entities: Vec<GenericEntity>,
    pub more_records: bool,
    /// `-1` when the backend does not report a count.
    pub total_record_count: i64,
    pub paging_cookie: Option<String>,
}

impl GenericEntityCollection {
    pub fn new(entities: Vec<GenericEntity>) -> Self {
        GenericEntityCollection {
            entities,
            more_records: false,
            total_record_count: -1,
            paging_cookie: None,
        }
    }
}

impl Default for GenericEntityCollection {
    fn default() -> Self {
        GenericEntityCollection::new(vec![])
    }
}
