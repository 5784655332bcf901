//! Text emitters for the three artifacts of a group.

use std::fmt::{self, Write};

use crate::codegen::Config;
use crate::metadata::Metadata;
use crate::namegen as n;

/// A `pub struct` carrying every field of the group verbatim.
pub(crate) fn record<W: Write>(
    out: &mut W,
    name: &str,
    doc: &str,
    meta: &Metadata,
    config: &Config,
) -> fmt::Result {
    for line in n::doc_lines(doc) {
        writeln!(out, "/// {line}")?;
    }
    if config.impl_debug {
        writeln!(out, "#[derive(Debug)]")?;
    }
    if config.impl_deserialize {
        writeln!(out, "#[derive(serde::Serialize, serde::Deserialize)]")?;
    } else {
        writeln!(out, "#[derive(serde::Serialize)]")?;
    }
    writeln!(out, "#[derive(Clone, PartialEq)]")?;
    writeln!(out, "pub struct {name} {{")?;

    for f in &meta.fields {
        for line in n::doc_lines(&f.field.description) {
            writeln!(out, "    /// {line}")?;
        }
        if f.renamed {
            writeln!(out, "    #[serde(rename = {:?})]", f.field.name)?;
        }
        if !f.field.required {
            writeln!(out, "    #[serde(skip_serializing_if = \"Option::is_none\")]")?;
        }
        writeln!(out, "    pub {}: {},", f.ident, f.rust_ty())?;
    }

    writeln!(out, "}}")
}

/// `has_uploadable()` for `record`, ORing each uploadable field's own check.
///
/// Writes nothing and returns `false` when no field is uploadable: an
/// always-false predicate is never emitted.
pub(crate) fn has_uploadable<W: Write>(out: &mut W, record: &str, meta: &Metadata) -> Result<bool, fmt::Error> {
    let checks: Vec<String> = meta
        .uploadable_fields()
        .map(|f| {
            if f.field.required {
                format!("self.{}.needs_upload()", f.ident)
            } else {
                format!("self.{}.as_ref().is_some_and(|f| f.needs_upload())", f.ident)
            }
        })
        .collect();

    if checks.is_empty() {
        return Ok(false);
    }

    writeln!(out, "impl {record} {{")?;
    writeln!(out, "    /// Reports whether any field must be sent as a multipart upload.")?;
    writeln!(out, "    pub fn has_uploadable(&self) -> bool {{")?;
    writeln!(out, "        {}", checks.join("\n            || "))?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(true)
}

/// The dispatch stub on `Bot<T>` binding the method name to a transport call.
pub(crate) fn method<W: Write>(
    out: &mut W,
    meta: &Metadata,
    record: Option<&str>,
    predicate: bool,
    return_ty: &str,
) -> fmt::Result {
    let group = meta.group;
    let (fn_name, _) = n::field_ident(&group.name);

    writeln!(out, "impl<T: crate::Transport> crate::Bot<T> {{")?;
    writeln!(out, "    /// [`{0}`](https://core.telegram.org/bots/api#{1})", group.name, group.name.to_ascii_lowercase())?;
    let mut lines = n::doc_lines(&group.description).peekable();
    if lines.peek().is_some() {
        writeln!(out, "    ///")?;
    }
    for line in lines {
        writeln!(out, "    /// {line}")?;
    }

    match record {
        Some(record) => {
            let multipart = if predicate { "params.has_uploadable()" } else { "false" };
            writeln!(
                out,
                "    pub fn {fn_name}(&self, params: &{record}) -> Result<{return_ty}, crate::Error> {{"
            )?;
            writeln!(out, "        self.invoke({:?}, Some(params), {multipart})", group.name)?;
        }
        None => {
            writeln!(out, "    pub fn {fn_name}(&self) -> Result<{return_ty}, crate::Error> {{")?;
            writeln!(out, "        self.invoke::<(), _>({:?}, None, false)", group.name)?;
        }
    }

    writeln!(out, "    }}")?;
    writeln!(out, "}}")
}
