use std::fs;
use std::path::PathBuf;

use query_engine_metadata::metadata::EntityMetadata;
use query_engine_models::models::QueryModel;
use query_engine_translation::translation;

/// Translate a goldenfile query to the document store's query text.
pub fn test_sql_translation(testname: &str) -> Result<String, translation::error::Error> {
    let (metadata, query) = read_goldenfile(testname);
    translation::query::translate_to_sql(&metadata, &query)
}

/// Translate a goldenfile query to OData query options, one `name=value` per line.
pub fn test_odata_translation(testname: &str) -> Result<String, translation::error::Error> {
    let (metadata, query) = read_goldenfile(testname);
    let options = translation::odata::translate(&metadata, &query)?;

    Ok(options
        .options()
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn read_goldenfile(testname: &str) -> (EntityMetadata, QueryModel) {
    let directory = PathBuf::from("tests/goldenfiles");

    let metadata =
        serde_json::from_str(&fs::read_to_string(directory.join("metadata.json")).unwrap())
            .unwrap();
    let query = serde_json::from_str(
        &fs::read_to_string(directory.join(testname).join("query.json")).unwrap(),
    )
    .unwrap();

    (metadata, query)
}
