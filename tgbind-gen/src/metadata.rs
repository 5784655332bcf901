//! Per-group facts computed once and shared by every emitter.

use tgbind_schema::{Field, Group, SchemaError};

use crate::namegen as n;
use crate::typemap::TypeMapper;

/// A field with its Rust identifier and mapped type.
pub(crate) struct ResolvedField<'a> {
    pub(crate) field: &'a Field,
    /// Rust identifier (may be `r#type`).
    pub(crate) ident: String,
    /// Whether the identifier differs from the wire name.
    pub(crate) renamed: bool,
    /// The mapped type, before wrapping optional fields in `Option`.
    pub(crate) base_ty: String,
    /// The field's type is the upload type.
    pub(crate) uploadable: bool,
}

impl ResolvedField<'_> {
    /// The declared field type, `Option<…>` when not required.
    pub(crate) fn rust_ty(&self) -> String {
        if self.field.required {
            self.base_ty.clone()
        } else {
            format!("Option<{}>", self.base_ty)
        }
    }
}

pub(crate) struct Metadata<'a> {
    pub(crate) group: &'a Group,
    pub(crate) fields: Vec<ResolvedField<'a>>,
}

impl<'a> Metadata<'a> {
    /// Validates `group` and maps every field type.
    pub(crate) fn build(group: &'a Group, types: &dyn TypeMapper) -> Result<Self, SchemaError> {
        group.validate()?;

        let fields = group
            .fields
            .iter()
            .map(|field| {
                let descriptor = field.descriptor().map_err(|source| SchemaError::InvalidType {
                    group: group.name.clone(),
                    field: field.name.clone(),
                    source,
                })?;
                let base_ty = types.map(Some(&field.name), &descriptor);
                let (ident, renamed) = n::field_ident(&field.name);
                Ok(ResolvedField {
                    field,
                    ident,
                    renamed,
                    uploadable: base_ty == types.upload_type(),
                    base_ty,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        Ok(Self { group, fields })
    }

    pub(crate) fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    pub(crate) fn uploadable_fields(&self) -> impl Iterator<Item = &ResolvedField<'a>> {
        self.fields.iter().filter(|f| f.uploadable)
    }
}
