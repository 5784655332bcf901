//! Rust types describing the generator's input: groups, fields and types.

mod field;
mod group;
mod type_descriptor;

pub use field::Field;
pub use group::{Group, Schema};
pub use type_descriptor::TypeDescriptor;
