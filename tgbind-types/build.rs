//! Build script: read the bundled method schema and generate the
//! parameter records and `Bot` method stubs.
//!
//! Adding a method is as simple as appending its group to
//! `schema/methods.json`; nothing else needs touching.

use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tgbind_gen::{Config, generate, write_module};
use tgbind_schema::parse_schema;

const SCHEMA: &str = "schema/methods.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    // Cargo rebuild trigger
    println!("cargo:rerun-if-changed={SCHEMA}");

    let content = fs::read_to_string(SCHEMA)?;
    let schema = parse_schema(&content)?;

    // ── Build config from features ──────────────────────────────────────────
    let config = Config {
        impl_debug:       cfg!(feature = "impl-debug"),
        impl_deserialize: cfg!(feature = "impl-deserialize"),
        ..Config::default()
    };

    // ── Generate code ───────────────────────────────────────────────────────
    let artifacts = generate(&schema.methods, &config)?;
    let mut out = BufWriter::new(File::create(out_dir.join("generated_methods.rs"))?);
    write_module(&mut out, "methods", &artifacts)?;
    out.flush()?;

    Ok(())
}
