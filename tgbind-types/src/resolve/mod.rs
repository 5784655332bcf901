//! Peek-then-decode resolution of polymorphic Bot API payloads.
//!
//! Each [`Family`] names a [`Rule`]: which field to peek at and how its
//! value selects a concrete [`Variant`]. [`resolve`] reads only the
//! discriminating fields from the raw bytes, picks the variant, then
//! decodes the whole payload strictly as that variant.
//!
//! Resolution is a pure function of the input bytes. Nothing is cached
//! and no state is shared, so it is safe to call from any thread.

mod probe;

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{
    ChatBoostSource, ChatMember, InputMessageContent, MaybeInaccessibleMessage, MenuButton,
    MessageOrigin, ReactionType,
};

use probe::Probe;

// ─── Variants and rules ──────────────────────────────────────────────────────

/// One concrete shape of a family, with the decoder that produces it.
pub struct Variant<F> {
    name: &'static str,
    decode: fn(&[u8]) -> serde_json::Result<F>,
}

impl<F> Variant<F> {
    /// A variant decoding the payload as `V` and lifting it into the family.
    pub const fn of<V>(name: &'static str) -> Self
    where
        V: DeserializeOwned + Into<F>,
    {
        Self { name, decode: decode_as::<V, F> }
    }

    /// The Bot API type name of this variant (`ChatMemberOwner`, …).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Decode `raw` strictly as this variant.
    pub fn decode(&self, raw: &[u8]) -> serde_json::Result<F> {
        (self.decode)(raw)
    }
}

impl<F> fmt::Debug for Variant<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Variant").field(&self.name).finish()
    }
}

fn decode_as<V, F>(raw: &[u8]) -> serde_json::Result<F>
where
    V: DeserializeOwned + Into<F>,
{
    serde_json::from_slice::<V>(raw).map(Into::into)
}

/// How a family picks its variant from the peeked fields.
#[derive(Debug)]
pub enum Rule<F: 'static> {
    /// The string value of `field` is looked up in `table`.
    ///
    /// An absent or `null` field counts as the empty tag and matches
    /// nothing.
    Tag {
        /// Discriminating field (`type`, `status`, `source`).
        field: &'static str,
        /// `(tag value, variant)` pairs.
        table: &'static [(&'static str, Variant<F>)],
    },
    /// The integer value of `field` selects `zero` when it is zero, absent
    /// or `null`, and `other` for any other value.
    ZeroValue {
        /// Discriminating field.
        field: &'static str,
        /// Variant for a zero value.
        zero: Variant<F>,
        /// Variant for every non-zero value.
        other: Variant<F>,
    },
    /// The first `(field, kind, variant)` entry whose field is present and
    /// not `null` wins. Table order is significant.
    ///
    /// Every present field must hold a value of its `kind`, whether or not
    /// it is the one that decides.
    Presence {
        /// Ordered `(field, kind, variant)` entries.
        table: &'static [(&'static str, Kind, Variant<F>)],
    },
}

/// The JSON type a presence field must have when it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A JSON string.
    String,
    /// A JSON number, integer or float.
    Number,
}

impl Kind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Kind::String => value.is_string(),
            Kind::Number => value.is_number(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Kind::String => "a string",
            Kind::Number => "a number",
        }
    }
}

impl<F: 'static> Rule<F> {
    /// Every variant reachable through this rule.
    pub fn variants(&self) -> Vec<&Variant<F>> {
        match self {
            Rule::Tag { table, .. } => table.iter().map(|(_, v)| v).collect(),
            Rule::Presence { table } => table.iter().map(|(_, _, v)| v).collect(),
            Rule::ZeroValue { zero, other, .. } => vec![zero, other],
        }
    }

    fn probe_keys(&self) -> Vec<&'static str> {
        match self {
            Rule::Tag { field, .. } | Rule::ZeroValue { field, .. } => vec![*field],
            Rule::Presence { table } => table.iter().map(|(k, _, _)| *k).collect(),
        }
    }

    fn select(&self, family: &'static str, mut probe: Probe) -> Result<&Variant<F>, ResolveError> {
        match self {
            Rule::Tag { field, table } => {
                let tag = match probe.take(0) {
                    None | Some(Value::Null) => None,
                    Some(Value::String(tag)) => Some(tag),
                    Some(other) => {
                        return Err(ResolveError::malformed(
                            family,
                            format!("`{field}` must be a string, found {other}"),
                        ));
                    }
                };
                let found = tag.as_deref().unwrap_or("");
                table
                    .iter()
                    .find(|(t, _)| *t == found)
                    .map(|(_, v)| v)
                    .ok_or(ResolveError::UnknownType { family, found: tag })
            }
            Rule::ZeroValue { field, zero, other } => {
                let is_zero = match probe.take(0) {
                    None | Some(Value::Null) => true,
                    Some(Value::Number(n)) => match n.as_i64() {
                        Some(n) => n == 0,
                        None => {
                            return Err(ResolveError::malformed(
                                family,
                                format!("`{field}` must be a 64-bit integer, found {n}"),
                            ));
                        }
                    },
                    Some(other) => {
                        return Err(ResolveError::malformed(
                            family,
                            format!("`{field}` must be an integer, found {other}"),
                        ));
                    }
                };
                Ok(if is_zero { zero } else { other })
            }
            Rule::Presence { table } => {
                let mut selected = None;
                for (i, (field, kind, variant)) in table.iter().enumerate() {
                    let Some(value) = probe.present(i) else { continue };
                    if !kind.matches(value) {
                        return Err(ResolveError::malformed(
                            family,
                            format!("`{field}` must be {}, found {value}", kind.as_str()),
                        ));
                    }
                    if selected.is_none() {
                        selected = Some(variant);
                    }
                }
                selected.ok_or(ResolveError::UnknownType { family, found: None })
            }
        }
    }
}

// ─── Families ────────────────────────────────────────────────────────────────

/// A Bot API type that is one of several concrete shapes, chosen at runtime
/// from a discriminating field.
pub trait Family: Sized + 'static {
    /// The Bot API name of the family (`ChatMember`, …).
    const NAME: &'static str;

    /// How the concrete variant is chosen.
    const RULE: Rule<Self>;
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a payload could not be resolved into its family.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The payload is not a JSON object, or the discriminating field has
    /// the wrong JSON type.
    #[error("malformed {family} payload: {source}")]
    Envelope {
        /// Family being resolved.
        family: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// No variant matches the discriminator.
    #[error("unknown {family} type{}", describe_found(.found))]
    UnknownType {
        /// Family being resolved.
        family: &'static str,
        /// The tag that failed to match, `None` when it was absent (or, for
        /// presence families, when no distinguishing field was found).
        found: Option<String>,
    },

    /// The variant was selected but the payload does not decode as it.
    #[error("cannot decode {family} as {variant}: {source}")]
    Variant {
        /// Family being resolved.
        family: &'static str,
        /// Selected variant.
        variant: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

fn describe_found(found: &Option<String>) -> String {
    match found {
        Some(tag) => format!(" `{tag}`"),
        None => String::new(),
    }
}

impl ResolveError {
    fn malformed(family: &'static str, msg: String) -> Self {
        Self::Envelope { family, source: serde::de::Error::custom(msg) }
    }

    /// The family whose resolution failed.
    pub fn family(&self) -> &'static str {
        match self {
            Self::Envelope { family, .. }
            | Self::UnknownType { family, .. }
            | Self::Variant { family, .. } => family,
        }
    }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Resolve `raw` into a concrete variant of `F`.
pub fn resolve<F: Family>(raw: &[u8]) -> Result<F, ResolveError> {
    let rule = &F::RULE;
    let probe = Probe::read(raw, &rule.probe_keys())
        .map_err(|source| ResolveError::Envelope { family: F::NAME, source })?;
    let variant = rule.select(F::NAME, probe)?;
    log::trace!("[tgbind] {} resolved as {}", F::NAME, variant.name);
    variant
        .decode(raw)
        .map_err(|source| ResolveError::Variant { family: F::NAME, variant: variant.name, source })
}

// ─── Entry points ────────────────────────────────────────────────────────────

/// Resolve a `MessageOrigin` by its `type` field.
pub fn message_origin(raw: &[u8]) -> Result<MessageOrigin, ResolveError> {
    resolve(raw)
}

/// Resolve a `ChatMember` by its `status` field.
pub fn chat_member(raw: &[u8]) -> Result<ChatMember, ResolveError> {
    resolve(raw)
}

/// Resolve a `ReactionType` by its `type` field.
pub fn reaction_type(raw: &[u8]) -> Result<ReactionType, ResolveError> {
    resolve(raw)
}

/// Resolve a `MenuButton` by its `type` field.
pub fn menu_button(raw: &[u8]) -> Result<MenuButton, ResolveError> {
    resolve(raw)
}

/// Resolve a `ChatBoostSource` by its `source` field.
pub fn chat_boost_source(raw: &[u8]) -> Result<ChatBoostSource, ResolveError> {
    resolve(raw)
}

/// Resolve a `MaybeInaccessibleMessage`: a zero (or missing) `date` means
/// the message is inaccessible.
pub fn maybe_inaccessible_message(raw: &[u8]) -> Result<MaybeInaccessibleMessage, ResolveError> {
    resolve(raw)
}

/// Resolve an `InputMessageContent` by which distinguishing field is
/// present.
pub fn input_message_content(raw: &[u8]) -> Result<InputMessageContent, ResolveError> {
    resolve(raw)
}
