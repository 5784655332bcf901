use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;
use crate::schema::Field;

/// One bindable unit: a Bot API method (or object type) with its fields.
///
/// For example the documentation entry for `sendPhoto` becomes a `Group`
/// with `name = "sendPhoto"`, the method's prose as `description`, and
/// `fields = [chat_id, photo, caption, …]` in documentation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The method or type name as documented (`"sendPhoto"`, `"User"`).
    pub name: String,
    /// Free-text description; the declared return type is read from it.
    #[serde(default)]
    pub description: String,
    /// Ordered list of fields.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Group {
    /// A group with no fields.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), fields: Vec::new() }
    }

    /// Append a field, keeping declaration order.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// `true` when at least one field is declared.
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Checks that the group is complete enough to generate code from.
    ///
    /// Rejects blank or non-identifier group and field names, repeated
    /// field names, and any type descriptor that does not parse.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::MissingGroupName);
        }
        if !is_identifier(&self.name) {
            return Err(SchemaError::InvalidGroupName(self.name.clone()));
        }

        let mut seen = HashSet::with_capacity(self.fields.len());
        for (index, field) in self.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::MissingFieldName { group: self.name.clone(), index });
            }
            if !is_identifier(&field.name) {
                return Err(SchemaError::InvalidFieldName {
                    group: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    group: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            field.descriptor().map_err(|source| SchemaError::InvalidType {
                group: self.name.clone(),
                field: field.name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A complete schema document: object types followed by methods.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Object type groups (`User`, `Message`, …).
    #[serde(default)]
    pub types: Vec<Group>,
    /// Method groups (`getMe`, `sendMessage`, …).
    #[serde(default)]
    pub methods: Vec<Group>,
}

impl Schema {
    /// Looks up a method group by exact name.
    pub fn method(&self, name: &str) -> Option<&Group> {
        self.methods.iter().find(|g| g.name == name)
    }
}
