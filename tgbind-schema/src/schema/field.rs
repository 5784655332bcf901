use serde::{Deserialize, Serialize};

use crate::errors::TypeParseError;
use crate::schema::TypeDescriptor;

/// A single parameter or attribute inside a [`super::Group`].
///
/// The type is kept as the documentation spells it (`"Integer or String"`)
/// and only parsed into a [`TypeDescriptor`] on demand, so a malformed
/// descriptor is reported against the group that contains it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// The wire name, e.g. `"chat_id"`.
    pub name: String,
    /// The type descriptor text, e.g. `"Array of MessageEntity"`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the parameter must always be present.
    #[serde(default)]
    pub required: bool,
    /// Free-text documentation.
    #[serde(default)]
    pub description: String,
}

impl Field {
    /// A required field with no description.
    pub fn required(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: ty.into(), required: true, description: String::new() }
    }

    /// An optional field with no description.
    pub fn optional(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: ty.into(), required: false, description: String::new() }
    }

    /// Attach documentation text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parse the type text into a structured descriptor.
    pub fn descriptor(&self) -> Result<TypeDescriptor, TypeParseError> {
        self.ty.parse()
    }
}
