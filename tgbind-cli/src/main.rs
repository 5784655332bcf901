//! tgbind: generate Bot API bindings from a schema file, or check which
//! variant a payload resolves to.
//!
//!   tgbind generate api.json > bindings.rs
//!   tgbind generate --types --module objects api.json -o objects.rs
//!   echo '{"status":"kicked",…}' | tgbind resolve ChatMember
//!
//! Logging goes to stderr: `RUST_LOG=tgbind_gen=debug tgbind generate …`

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use structopt::StructOpt;
use tgbind::codegen::{self, Config};
use tgbind::{ResolveError, resolve, schema};

#[derive(Debug, StructOpt)]
#[structopt(name = "tgbind", about = "Telegram Bot API binding generator.")]
enum Opt {
    /// Generate Rust bindings from a schema file
    Generate(GenerateOpt),
    /// Resolve a payload from a file (or stdin) into its concrete variant
    Resolve {
        /// One of MessageOrigin, ChatMember, ReactionType, MenuButton,
        /// ChatBoostSource, MaybeInaccessibleMessage, InputMessageContent
        family: String,
        /// Payload file, stdin when omitted
        #[structopt(parse(from_os_str))]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, StructOpt)]
struct GenerateOpt {
    /// Schema file with `types` and `methods` groups
    #[structopt(parse(from_os_str))]
    schema: PathBuf,
    /// Output file, stdout when omitted
    #[structopt(short, long, value_name = "path", parse(from_os_str))]
    out: Option<PathBuf>,
    /// Wrap the output in `pub mod <name> { … }`
    #[structopt(long, value_name = "name")]
    module: Option<String>,
    /// Generate object records from `types` instead of method bindings
    #[structopt(long)]
    types: bool,
    /// Also derive `serde::Deserialize` on records
    #[structopt(long)]
    deserialize: bool,
    /// Skip `#[derive(Debug)]` on records
    #[structopt(long)]
    no_debug: bool,
    /// Generate groups on the rayon thread pool
    #[structopt(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Opt::from_args() {
        Opt::Generate(opt) => generate(&opt),
        Opt::Resolve { family, input } => inspect(&family, input),
    }
}

fn generate(opt: &GenerateOpt) -> anyhow::Result<()> {
    let src = fs::read_to_string(&opt.schema)
        .with_context(|| format!("cannot read {}", opt.schema.display()))?;
    let schema = schema::parse_schema(&src)
        .with_context(|| format!("invalid schema {}", opt.schema.display()))?;

    let config = Config {
        impl_debug: !opt.no_debug,
        impl_deserialize: opt.deserialize,
        parallel: opt.parallel,
    };
    let artifacts = if opt.types {
        codegen::generate_types(&schema.types, &config)?
    } else {
        codegen::generate(&schema.methods, &config)?
    };
    log::info!(
        "[tgbind] {} artifact(s) from {} group(s)",
        artifacts.len(),
        if opt.types { schema.types.len() } else { schema.methods.len() }
    );

    let mut out: Box<dyn Write> = match &opt.out {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    match &opt.module {
        Some(module) => codegen::write_module(&mut out, module, &artifacts)?,
        None => codegen::write_artifacts(&mut out, &artifacts)?,
    }
    out.flush()?;
    Ok(())
}

fn inspect(family: &str, input: Option<PathBuf>) -> anyhow::Result<()> {
    let raw = match &input {
        Some(path) => fs::read(path).with_context(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("cannot read stdin")?;
            buf
        }
    };

    let (variant, normalized) = resolve_named(family, &raw)?;
    println!("{variant}");
    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}

/// Resolve `raw` as the family called `family`, returning the variant name
/// and the variant re-encoded as JSON.
fn resolve_named(family: &str, raw: &[u8]) -> anyhow::Result<(&'static str, serde_json::Value)> {
    fn pack<F: serde::Serialize>(
        resolved: Result<F, ResolveError>,
        name: fn(&F) -> &'static str,
    ) -> anyhow::Result<(&'static str, serde_json::Value)> {
        let value = resolved?;
        Ok((name(&value), serde_json::to_value(&value)?))
    }

    use tgbind::types::*;
    match family {
        "MessageOrigin" => pack(resolve::message_origin(raw), MessageOrigin::variant_name),
        "ChatMember" => pack(resolve::chat_member(raw), ChatMember::variant_name),
        "ReactionType" => pack(resolve::reaction_type(raw), ReactionType::variant_name),
        "MenuButton" => pack(resolve::menu_button(raw), MenuButton::variant_name),
        "ChatBoostSource" => pack(resolve::chat_boost_source(raw), ChatBoostSource::variant_name),
        "MaybeInaccessibleMessage" => pack(
            resolve::maybe_inaccessible_message(raw),
            MaybeInaccessibleMessage::variant_name,
        ),
        "InputMessageContent" => {
            pack(resolve::input_message_content(raw), InputMessageContent::variant_name)
        }
        other => bail!("unknown family `{other}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_family_name() {
        let (variant, value) =
            resolve_named("ChatBoostSource", br#"{"source":"giveaway","giveaway_message_id":3}"#).unwrap();
        assert_eq!(variant, "ChatBoostSourceGiveaway");
        assert_eq!(value, serde_json::json!({"source": "giveaway", "giveaway_message_id": 3}));
    }

    #[test]
    fn zero_date_reports_inaccessible() {
        let raw = br#"{"chat":{"id":1,"type":"private"},"message_id":4,"date":0}"#;
        let (variant, _) = resolve_named("MaybeInaccessibleMessage", raw).unwrap();
        assert_eq!(variant, "InaccessibleMessage");
    }

    #[test]
    fn unknown_family_and_tag() {
        assert!(resolve_named("Sticker", b"{}").is_err());
        let err = resolve_named("ReactionType", br#"{"type":"paid"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown ReactionType type `paid`"));
    }

    #[test]
    fn parses_arguments() {
        let opt = Opt::from_iter(["tgbind", "generate", "--types", "--module", "objects", "api.json"]);
        match opt {
            Opt::Generate(g) => {
                assert!(g.types);
                assert_eq!(g.module.as_deref(), Some("objects"));
                assert_eq!(g.schema, PathBuf::from("api.json"));
                assert!(g.out.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
