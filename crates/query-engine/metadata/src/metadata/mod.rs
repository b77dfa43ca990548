//! Metadata information regarding the virtual entities and their external stores.

pub mod database;
pub mod mapper;

// re-export without modules
pub use database::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub entities: EntitiesInfo,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            entities: EntitiesInfo::empty(),
        }
    }
}

/// Something that can describe a virtual entity.
///
/// Each call hands out its own snapshot; callers never mutate shared metadata.
pub trait MetadataSource {
    fn entity_metadata(&self, logical_name: &str) -> Option<EntityMetadata>;
}

impl MetadataSource for Metadata {
    fn entity_metadata(&self, logical_name: &str) -> Option<EntityMetadata> {
        self.entities.get(logical_name).cloned()
    }
}
