//! Build-time code generator that turns Bot API schema groups into Rust
//! source text.
//!
//! For every method group it emits, in order:
//!
//! 1. a parameter record (`SendPhotoParams`) when the group has fields,
//! 2. a `has_uploadable()` predicate when some field carries an
//!    [`InputFile`](https://core.telegram.org/bots/api#inputfile),
//! 3. exactly one method stub on `Bot<T>`.
//!
//! Intended to be used from a `build.rs` script.
//!
//! # Usage
//!
//! ```no_run
//! // build.rs
//! use std::fs::File;
//! use std::io::BufWriter;
//! use tgbind_gen::{Config, generate, write_module};
//! use tgbind_schema::parse_schema;
//!
//! let src = std::fs::read_to_string("schema/methods.json").unwrap();
//! let schema = parse_schema(&src).unwrap();
//! let artifacts = generate(&schema.methods, &Config::default()).unwrap();
//!
//! let out = std::env::var("OUT_DIR").unwrap();
//! let mut file = BufWriter::new(File::create(format!("{out}/generated_methods.rs")).unwrap());
//! write_module(&mut file, "methods", &artifacts).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod emit;
mod metadata;
mod namegen;
pub mod codegen;
pub mod returns;
pub mod typemap;

pub use codegen::{
    Artifact, ArtifactKind, Config, GenError, generate, generate_group, generate_types, generate_with,
    write_artifacts, write_module,
};
pub use returns::{ReturnExtractor, SentenceScanner};
pub use typemap::{BotApiTypes, TypeMapper, INPUT_FILE, UNTYPED_RESPONSE};
