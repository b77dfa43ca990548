//! Turn raw records into generic entities.

use query_engine_metadata::metadata::{mapper, EntityMetadata};
use query_engine_models::models::{GenericEntity, Value};

use crate::error::Error;
use crate::records::RawRecord;

/// Which attribute values go through type coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Only the primary id is coerced; other values are copied as they are.
    PrimaryIdOnly,
    /// Every value is coerced according to its attribute type.
    AllAttributes,
}

/// Build an entity from a raw record by scanning the metadata attributes.
///
/// Attributes missing from the record are skipped. The primary id, when present,
/// becomes the entity id.
pub fn materialize(
    metadata: &EntityMetadata,
    record: &RawRecord,
    coercion: Coercion,
) -> Result<GenericEntity, Error> {
    let mut entity = GenericEntity::new(&metadata.logical_name);

    for attribute in &metadata.attributes {
        let Some(raw) = record.get(&attribute.external_name) else {
            continue;
        };

        let value = if attribute.logical_name == metadata.primary_id_attribute {
            match mapper::coerce_identifier(attribute, raw)? {
                Some(id) => {
                    entity.id = id;
                    Value::Uuid(id)
                }
                None => Value::Null,
            }
        } else {
            match coercion {
                Coercion::PrimaryIdOnly => mapper::from_json(raw),
                Coercion::AllAttributes => mapper::coerce(attribute, raw)?,
            }
        };

        entity
            .attributes
            .insert(attribute.logical_name.clone(), value);
    }

    Ok(entity)
}

/// Materialize every record, failing on the first record that cannot be read.
pub fn materialize_all(
    metadata: &EntityMetadata,
    records: &[RawRecord],
    coercion: Coercion,
) -> Result<Vec<GenericEntity>, Error> {
    records
        .iter()
        .map(|record| materialize(metadata, record, coercion))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine_metadata::metadata::{AttributeMetadata, AttributeType};
    use similar_asserts::assert_eq;

    fn metadata() -> EntityMetadata {
        EntityMetadata {
            logical_name: "new_book".to_string(),
            external_name: "book".to_string(),
            external_collection_name: "books".to_string(),
            primary_id_attribute: "new_bookid".to_string(),
            attributes: vec![
                AttributeMetadata::new("new_bookid", "id", AttributeType::Uniqueidentifier),
                AttributeMetadata::new("new_name", "title", AttributeType::String),
                AttributeMetadata::new("new_genre", "genre", AttributeType::Picklist),
            ],
        }
    }

    fn record(value: serde_json::Value) -> RawRecord {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("records are objects"),
        }
    }

    #[test]
    fn missing_attributes_are_skipped() {
        let records = vec![
            record(serde_json::json!({
                "id": "8a5b9e4e-1a0c-4c55-9d7f-3f6c2f0e5a11",
                "title": "Dune",
                "genre": 2
            })),
            record(serde_json::json!({
                "id": "1f0e2d3c-4b5a-4697-8879-6a5b4c3d2e1f",
                "genre": 3
            })),
        ];

        let entities = materialize_all(&metadata(), &records, Coercion::PrimaryIdOnly).unwrap();

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].get("new_name"), Some(&Value::from("Dune")));
        assert_eq!(entities[1].get("new_name"), None);
        assert_eq!(
            entities[1].id.to_string(),
            "1f0e2d3c-4b5a-4697-8879-6a5b4c3d2e1f"
        );
    }

    #[test]
    fn coercion_follows_the_mode() {
        let raw = record(serde_json::json!({ "genre": 2 }));

        let copied = materialize(&metadata(), &raw, Coercion::PrimaryIdOnly).unwrap();
        assert_eq!(copied.get("new_genre"), Some(&Value::Integer(2)));
        assert!(copied.id.is_nil());

        let coerced = materialize(&metadata(), &raw, Coercion::AllAttributes).unwrap();
        assert_eq!(coerced.get("new_genre"), Some(&Value::OptionSetValue(2)));
    }

    #[test]
    fn unreadable_identifiers_fail() {
        let raw = record(serde_json::json!({ "id": "not-a-guid" }));
        assert!(matches!(
            materialize(&metadata(), &raw, Coercion::PrimaryIdOnly),
            Err(Error::Materialization(
                mapper::Error::InvalidAttributeValue { .. }
            ))
        ));
    }
}
