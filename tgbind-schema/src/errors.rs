/// Errors produced while parsing a single type descriptor such as
/// `Array of PhotoSize`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeParseError {
    /// The descriptor was blank.
    #[error("empty type descriptor")]
    Empty,
    /// `Array of` with nothing after it.
    #[error("`Array of` without an element type")]
    MissingElement,
    /// A type name containing characters other than ASCII letters, digits or `_`.
    #[error("invalid type name `{0}`")]
    InvalidName(String),
}

/// Errors produced while loading or validating schema groups.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A group without a name.
    #[error("group has no name")]
    MissingGroupName,
    /// A group name that is not a valid identifier.
    #[error("invalid group name `{0}`")]
    InvalidGroupName(String),
    /// A field name that is not a valid identifier.
    #[error("group `{group}`: invalid field name `{field}`")]
    InvalidFieldName {
        /// Name of the enclosing group.
        group: String,
        /// The rejected name.
        field: String,
    },
    /// A field without a name.
    #[error("group `{group}`: field #{index} has no name")]
    MissingFieldName {
        /// Name of the enclosing group.
        group: String,
        /// Zero-based position of the field.
        index: usize,
    },
    /// A field whose type descriptor could not be parsed.
    #[error("group `{group}`: field `{field}` has an invalid type: {source}")]
    InvalidType {
        /// Name of the enclosing group.
        group: String,
        /// Name of the offending field.
        field: String,
        /// Why the descriptor was rejected.
        #[source]
        source: TypeParseError,
    },
    /// Two fields of the same group share a name.
    #[error("group `{group}`: duplicate field `{field}`")]
    DuplicateField {
        /// Name of the enclosing group.
        group: String,
        /// The repeated field name.
        field: String,
    },
    /// A defect found while loading a schema document, with its position.
    #[error("{section}[{index}]: {source}")]
    Section {
        /// `"types"` or `"methods"`.
        section: &'static str,
        /// Zero-based position of the group within the section.
        index: usize,
        /// The underlying defect.
        #[source]
        source: Box<SchemaError>,
    },
    /// The document is not valid schema JSON.
    #[error("malformed schema document: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Name of the group the defect belongs to, when known.
    pub fn group(&self) -> Option<&str> {
        match self {
            Self::MissingFieldName { group, .. }
            | Self::InvalidType { group, .. }
            | Self::InvalidFieldName { group, .. }
            | Self::DuplicateField { group, .. } => Some(group),
            Self::InvalidGroupName(name) => Some(name),
            Self::Section { source, .. } => source.group(),
            Self::MissingGroupName | Self::Json(_) => None,
        }
    }
}
