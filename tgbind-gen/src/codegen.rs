//! The public code-generation API.

use std::fmt;
use std::io::{self, Write};

use tgbind_schema::{Group, SchemaError, TypeDescriptor};

use crate::emit;
use crate::metadata::Metadata;
use crate::namegen as n;
use crate::returns::{ReturnExtractor, SentenceScanner};
use crate::typemap::{BotApiTypes, TypeMapper, UNTYPED_RESPONSE};

// ─── Config ───────────────────────────────────────────────────────────────────

/// Generation configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Derive `Debug` on generated records.
    pub impl_debug: bool,
    /// Derive `serde::Deserialize` on generated records (server-side use).
    pub impl_deserialize: bool,
    /// Evaluate groups in parallel. Only honoured with the `rayon` feature;
    /// output order is the same either way.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            impl_debug: true,
            impl_deserialize: false,
            parallel: false,
        }
    }
}

// ─── Artifacts ───────────────────────────────────────────────────────────────

/// What an [`Artifact`] declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// A parameter (or object) record `struct`.
    Record,
    /// The `has_uploadable()` predicate of a record.
    Uploadable,
    /// The method stub on `Bot<T>`.
    Method,
}

/// One emitted piece of Rust source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// The schema group this came from.
    pub group: String,
    /// What the text declares.
    pub kind: ArtifactKind,
    /// Rust source, unindented, ending in a newline.
    pub text: String,
}

impl Artifact {
    fn new(group: &Group, kind: ArtifactKind, text: String) -> Self {
        Self { group: group.name.clone(), kind, text }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors that abort a generation pass.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A group is malformed; nothing was emitted for it.
    #[error("cannot generate `{group}`: {source}")]
    Schema {
        /// The group name, or `<unnamed>`.
        group: String,
        /// Position in the input list, when generating a list.
        index: Option<usize>,
        /// The defect.
        #[source]
        source: SchemaError,
    },
    /// Formatting into the output buffer failed.
    #[error("formatting generated code failed")]
    Format(#[from] fmt::Error),
    /// Writing the generated module failed.
    #[error("writing generated code failed: {0}")]
    Io(#[from] io::Error),
}

impl GenError {
    fn schema(group: &Group, source: SchemaError) -> Self {
        let group = if group.name.trim().is_empty() { "<unnamed>".to_owned() } else { group.name.clone() };
        Self::Schema { group, index: None, source }
    }

    fn at(self, position: usize) -> Self {
        match self {
            Self::Schema { group, source, .. } => Self::Schema { group, index: Some(position), source },
            other => other,
        }
    }
}

// ─── Public API ───────────────────────────────────────────────────────────────

/// Generate bindings for a list of method groups with the Bot API type
/// mapping and return-type scanner.
///
/// Artifacts come out in input order: for each group an optional record,
/// an optional uploadable predicate, then the method stub. The first
/// malformed group fails the whole pass.
pub fn generate(groups: &[Group], config: &Config) -> Result<Vec<Artifact>, GenError> {
    generate_with(groups, config, &BotApiTypes, &SentenceScanner)
}

/// Like [`generate`], with caller-supplied type mapping and return-type
/// extraction.
pub fn generate_with(
    groups: &[Group],
    config: &Config,
    types: &dyn TypeMapper,
    returns: &dyn ReturnExtractor,
) -> Result<Vec<Artifact>, GenError> {
    let per_group = |(index, group): (usize, &Group)| {
        method_artifacts(group, config, types, returns).map_err(|e| e.at(index))
    };

    #[cfg(feature = "rayon")]
    {
        if config.parallel {
            use rayon::prelude::*;
            let chunks = groups
                .par_iter()
                .enumerate()
                .map(per_group)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(chunks.into_iter().flatten().collect());
        }
    }

    let chunks = groups
        .iter()
        .enumerate()
        .map(per_group)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(chunks.into_iter().flatten().collect())
}

/// Generate the artifacts of a single method group.
pub fn generate_group(group: &Group, config: &Config) -> Result<Vec<Artifact>, GenError> {
    method_artifacts(group, config, &BotApiTypes, &SentenceScanner)
}

/// Generate plain records for object type groups (`User`, `Chat`, …).
///
/// Each group with fields yields one [`ArtifactKind::Record`] documented
/// with the group's description; groups without fields yield nothing.
pub fn generate_types(groups: &[Group], config: &Config) -> Result<Vec<Artifact>, GenError> {
    let mut artifacts = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        let meta = Metadata::build(group, &BotApiTypes)
            .map_err(|source| GenError::schema(group, source).at(index))?;
        if !meta.has_fields() {
            continue;
        }
        let mut text = String::new();
        emit::record(&mut text, &n::upper_first(&group.name), &group.description, &meta, config)?;
        artifacts.push(Artifact::new(group, ArtifactKind::Record, text));
    }
    Ok(artifacts)
}

fn method_artifacts(
    group: &Group,
    config: &Config,
    types: &dyn TypeMapper,
    returns: &dyn ReturnExtractor,
) -> Result<Vec<Artifact>, GenError> {
    let meta = Metadata::build(group, types).map_err(|source| GenError::schema(group, source))?;
    let mut artifacts = Vec::with_capacity(3);

    let mut record = None;
    let mut predicate = false;
    if meta.has_fields() {
        let name = n::params_type_name(&group.name);

        let mut text = String::new();
        let doc = format!("`{name}` contains the method's parameters.");
        emit::record(&mut text, &name, &doc, &meta, config)?;
        artifacts.push(Artifact::new(group, ArtifactKind::Record, text));

        let mut text = String::new();
        if emit::has_uploadable(&mut text, &name, &meta)? {
            predicate = true;
            artifacts.push(Artifact::new(group, ArtifactKind::Uploadable, text));
        }

        record = Some(name);
    }

    let return_ty = response_type(group, types, returns);
    let mut text = String::new();
    emit::method(&mut text, &meta, record.as_deref(), predicate, &return_ty)?;
    artifacts.push(Artifact::new(group, ArtifactKind::Method, text));

    log::debug!(
        "[tgbind-gen] {}: {} artifact(s), returns {return_ty}",
        group.name,
        artifacts.len()
    );
    Ok(artifacts)
}

/// The mapped return type when the description names exactly one
/// candidate, the untyped response otherwise.
fn response_type(group: &Group, types: &dyn TypeMapper, returns: &dyn ReturnExtractor) -> String {
    let candidates = returns.extract(&group.description);
    match candidates.as_slice() {
        [only] => match only.parse::<TypeDescriptor>() {
            Ok(ty) => types.map(None, &ty),
            Err(e) => {
                log::debug!("[tgbind-gen] {}: unparseable return type `{only}` ({e})", group.name);
                UNTYPED_RESPONSE.to_owned()
            }
        },
        [] => UNTYPED_RESPONSE.to_owned(),
        many => {
            log::debug!(
                "[tgbind-gen] {}: ambiguous return type {many:?}, leaving it untyped",
                group.name
            );
            UNTYPED_RESPONSE.to_owned()
        }
    }
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// Write artifacts one after another, separated by blank lines.
pub fn write_artifacts<W: Write>(out: &mut W, artifacts: &[Artifact]) -> io::Result<()> {
    for artifact in artifacts {
        writeln!(out)?;
        out.write_all(artifact.text.as_bytes())?;
    }
    Ok(())
}

/// Write artifacts wrapped in `pub mod {module} { … }`, for `include!` from
/// a build script's output directory.
pub fn write_module<W: Write>(out: &mut W, module: &str, artifacts: &[Artifact]) -> io::Result<()> {
    writeln!(out, "// @generated by tgbind-gen. Do not edit by hand.")?;
    writeln!(out, "// Re-run the build script to regenerate.")?;
    writeln!(out, "pub mod {module} {{")?;
    for artifact in artifacts {
        writeln!(out)?;
        for line in artifact.text.lines() {
            if line.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "    {line}")?;
            }
        }
    }
    writeln!(out, "}}")
}
