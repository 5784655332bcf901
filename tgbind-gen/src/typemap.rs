//! Mapping from schema type descriptors to Rust type paths.

use tgbind_schema::TypeDescriptor;

/// Rust path of the file-upload type. A field mapped to exactly this type
/// is uploadable.
pub const INPUT_FILE: &str = "crate::InputFile";

/// Response type used when a method's return type cannot be pinned down.
pub const UNTYPED_RESPONSE: &str = "serde_json::Value";

/// Converts a schema type into the Rust type emitted for it.
///
/// Implementations must be pure: the generator may call them from several
/// threads at once and expects the same answer every time.
pub trait TypeMapper: Sync {
    /// Map `ty` to a Rust type path.
    ///
    /// `field` is the wire name when mapping a field (some names change the
    /// mapping, e.g. `parse_mode`) and `None` when mapping a return type.
    fn map(&self, field: Option<&str>, ty: &TypeDescriptor) -> String;

    /// The Rust type that marks a field as needing out-of-band upload.
    fn upload_type(&self) -> &str {
        INPUT_FILE
    }
}

/// The mapping used for the Telegram Bot API documentation.
///
/// | Descriptor              | Rust                      |
/// |-------------------------|---------------------------|
/// | `Integer`               | `i64`                     |
/// | `Float`                 | `f64`                     |
/// | `Boolean`, `True`       | `bool`                    |
/// | `String`                | `String`                  |
/// | `String` (`parse_mode`) | `crate::ParseMode`        |
/// | `Integer or String`     | `crate::ChatId`           |
/// | `InputFile [or String]` | `crate::InputFile`        |
/// | `Array of T`            | `Vec<T>`                  |
/// | any other union         | `serde_json::Value`       |
/// | `Message`               | `crate::types::Message`   |
#[derive(Clone, Copy, Debug, Default)]
pub struct BotApiTypes;

impl TypeMapper for BotApiTypes {
    fn map(&self, field: Option<&str>, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Named(name) => named(field, name),
            TypeDescriptor::Array(inner) => format!("Vec<{}>", self.map(None, inner)),
            TypeDescriptor::Union(_) if ty.has_member("InputFile") => INPUT_FILE.to_owned(),
            TypeDescriptor::Union(members)
                if members.len() == 2 && ty.has_member("Integer") && ty.has_member("String") =>
            {
                "crate::ChatId".to_owned()
            }
            TypeDescriptor::Union(_) => UNTYPED_RESPONSE.to_owned(),
        }
    }
}

fn named(field: Option<&str>, name: &str) -> String {
    match name {
        "Integer" | "Int" => "i64".into(),
        "Float" => "f64".into(),
        "Boolean" | "True" | "False" => "bool".into(),
        "String" if field == Some("parse_mode") => "crate::ParseMode".into(),
        "String" => "String".into(),
        "InputFile" => INPUT_FILE.into(),
        other => format!("crate::types::{other}"),
    }
}
