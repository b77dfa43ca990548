//! Metadata describing how a virtual entity maps onto an external store.

use std::collections::BTreeMap;

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The attribute types of the host platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize, JsonSchema,
)]
pub enum AttributeType {
    Boolean,
    Customer,
    DateTime,
    Decimal,
    Double,
    Integer,
    Lookup,
    Memo,
    Money,
    Owner,
    PartyList,
    Picklist,
    State,
    Status,
    String,
    Uniqueidentifier,
    CalendarRules,
    Virtual,
    BigInt,
    ManagedProperty,
    EntityName,
}

/// How values of an attribute type are written in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// Written as a quoted string.
    Text,
    /// Written as a bare number.
    Number,
    /// Written as a bare `true` or `false`.
    Boolean,
    /// No fixed representation; the value decides.
    Untyped,
}

impl AttributeType {
    /// The literal representation used for values compared against this type.
    pub fn literal_kind(&self) -> LiteralKind {
        match self {
            AttributeType::String
            | AttributeType::Memo
            | AttributeType::EntityName
            | AttributeType::Uniqueidentifier
            | AttributeType::Lookup
            | AttributeType::Customer
            | AttributeType::Owner
            | AttributeType::DateTime => LiteralKind::Text,
            AttributeType::Decimal
            | AttributeType::Double
            | AttributeType::Integer
            | AttributeType::Money
            | AttributeType::Picklist
            | AttributeType::State
            | AttributeType::Status
            | AttributeType::BigInt => LiteralKind::Number,
            AttributeType::Boolean => LiteralKind::Boolean,
            AttributeType::PartyList
            | AttributeType::CalendarRules
            | AttributeType::Virtual
            | AttributeType::ManagedProperty => LiteralKind::Untyped,
        }
    }
}

/// Information about one attribute of a virtual entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttributeMetadata {
    pub logical_name: String,
    pub external_name: String,
    pub r#type: AttributeType,
}

impl AttributeMetadata {
    pub fn new(
        logical_name: impl Into<String>,
        external_name: impl Into<String>,
        r#type: AttributeType,
    ) -> Self {
        AttributeMetadata {
            logical_name: logical_name.into(),
            external_name: external_name.into(),
            r#type,
        }
    }
}

/// Information about a virtual entity and its external counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    pub logical_name: String,
    pub external_name: String,
    pub external_collection_name: String,
    /// Logical name of the attribute that identifies a record.
    pub primary_id_attribute: String,
    pub attributes: Vec<AttributeMetadata>,
}

impl EntityMetadata {
    /// Find an attribute by its logical name.
    pub fn attribute(&self, logical_name: &str) -> Option<&AttributeMetadata> {
        self.attributes
            .iter()
            .find(|attribute| attribute.logical_name == logical_name)
    }

    /// Find an attribute by its external name.
    pub fn attribute_by_external_name(&self, external_name: &str) -> Option<&AttributeMetadata> {
        self.attributes
            .iter()
            .find(|attribute| attribute.external_name == external_name)
    }
}

/// Mapping from an entity logical name to its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct EntitiesInfo(pub BTreeMap<String, EntityMetadata>);

impl EntitiesInfo {
    pub fn empty() -> Self {
        EntitiesInfo(BTreeMap::new())
    }

    pub fn insert(&mut self, entity: EntityMetadata) {
        self.0.insert(entity.logical_name.clone(), entity);
    }

    pub fn get(&self, logical_name: &str) -> Option<&EntityMetadata> {
        self.0.get(logical_name)
    }
}

impl FromIterator<EntityMetadata> for EntitiesInfo {
    fn from_iter<T: IntoIterator<Item = EntityMetadata>>(iter: T) -> Self {
        let mut entities = EntitiesInfo::empty();
        for entity in iter {
            entities.insert(entity);
        }
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_attribute_type_has_a_literal_kind() {
        let kinds = enum_iterator::all::<AttributeType>()
            .map(|attribute_type| attribute_type.literal_kind())
            .collect::<Vec<_>>();
        assert_eq!(kinds.len(), enum_iterator::cardinality::<AttributeType>());
        assert!(kinds.contains(&LiteralKind::Text));
        assert!(kinds.contains(&LiteralKind::Number));
        assert!(kinds.contains(&LiteralKind::Boolean));
        assert!(kinds.contains(&LiteralKind::Untyped));
    }

    #[test]
    fn attributes_are_found_by_either_name() {
        let metadata = EntityMetadata {
            logical_name: "new_contact".to_string(),
            external_name: "contact".to_string(),
            external_collection_name: "contacts".to_string(),
            primary_id_attribute: "new_contactid".to_string(),
            attributes: vec![AttributeMetadata::new(
                "new_contactid",
                "id",
                AttributeType::Uniqueidentifier,
            )],
        };

        assert_eq!(
            metadata.attribute("new_contactid").map(|a| a.external_name.as_str()),
            Some("id")
        );
        assert_eq!(
            metadata
                .attribute_by_external_name("id")
                .map(|a| a.logical_name.as_str()),
            Some("new_contactid")
        );
        assert!(metadata.attribute("id").is_none());
    }
}
