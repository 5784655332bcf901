//! Method bindings produced by `build.rs` from `schema/methods.json`.

#![allow(missing_docs)]
#![allow(clippy::all)]

include!(concat!(env!("OUT_DIR"), "/generated_methods.rs"));
