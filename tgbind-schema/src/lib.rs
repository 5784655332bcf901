//! Schema model for the Telegram Bot API binding generator.
//!
//! A schema is two ordered lists of [`Group`]s: object types and methods.
//! Each group carries a name, a free-text description and an ordered list of
//! [`Field`]s whose types are written the way the Bot API documentation
//! writes them (`Integer`, `Array of PhotoSize`, `InputFile or String`, …).
//!
//! # Quick start
//!
//! ```rust
//! use tgbind_schema::parse_schema;
//!
//! let src = r#"{
//!     "methods": [{
//!         "name": "getMe",
//!         "description": "Returns basic information about the bot in form of a User object."
//!     }]
//! }"#;
//! let schema = parse_schema(src).unwrap();
//! assert_eq!(schema.methods[0].name, "getMe");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Schema error types.
pub mod errors;
pub mod schema;
mod loader;

pub use errors::{SchemaError, TypeParseError};
pub use loader::parse_schema;
pub use schema::{Field, Group, Schema, TypeDescriptor};
