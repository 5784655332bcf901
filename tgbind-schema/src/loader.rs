//! JSON schema document loading.

use crate::errors::SchemaError;
use crate::schema::{Group, Schema};

/// Parses a schema document and validates every group in it.
///
/// The document is a JSON object with optional `types` and `methods`
/// arrays of groups. Group and field order is preserved exactly as written,
/// since generated output follows input order.
pub fn parse_schema(src: &str) -> Result<Schema, SchemaError> {
    let schema: Schema = serde_json::from_str(src)?;
    validate_section("types", &schema.types)?;
    validate_section("methods", &schema.methods)?;
    Ok(schema)
}

fn validate_section(section: &'static str, groups: &[Group]) -> Result<(), SchemaError> {
    for (index, group) in groups.iter().enumerate() {
        group.validate().map_err(|e| SchemaError::Section {
            section,
            index,
            source: Box::new(e),
        })?;
    }
    Ok(())
}
