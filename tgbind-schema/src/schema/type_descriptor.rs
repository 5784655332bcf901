use std::fmt;
use std::str::FromStr;

use crate::errors::TypeParseError;

const ARRAY_PREFIX: &str = "Array of";

/// A parsed Bot API type expression.
///
/// | Text                                   | Descriptor                         |
/// |----------------------------------------|------------------------------------|
/// | `Integer`                              | `Named("Integer")`                 |
/// | `Array of Array of PhotoSize`          | `Array(Array(Named("PhotoSize")))` |
/// | `InputFile or String`                  | `Union([InputFile, String])`       |
/// | `Array of A, B and C`                  | `Array(Union([A, B, C]))`          |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A primitive (`Integer`, `String`, …) or object type name.
    Named(String),
    /// `Array of T`.
    Array(Box<TypeDescriptor>),
    /// `A or B`, `A, B and C`. Always has two or more members.
    Union(Vec<TypeDescriptor>),
}

impl TypeDescriptor {
    /// The bare name of a [`TypeDescriptor::Named`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(n) => Some(n),
            _ => None,
        }
    }

    /// Whether this is a union containing the named member.
    pub fn has_member(&self, name: &str) -> bool {
        match self {
            Self::Union(members) => members.iter().any(|m| m.name() == Some(name)),
            _ => false,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::Array(inner) => write!(f, "{ARRAY_PREFIX} {inner}"),
            Self::Union(members) => {
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{m}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = TypeParseError;

    /// Parses a documentation type string.
    ///
    /// # Examples
    /// ```
    /// use tgbind_schema::TypeDescriptor;
    /// assert!("Array of PhotoSize".parse::<TypeDescriptor>().is_ok());
    /// assert!("".parse::<TypeDescriptor>().is_err());
    /// ```
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TypeParseError::Empty);
        }

        if raw == ARRAY_PREFIX {
            return Err(TypeParseError::MissingElement);
        }
        if let Some(rest) = raw.strip_prefix(ARRAY_PREFIX).and_then(|r| r.strip_prefix(' ')) {
            let rest = rest.trim();
            if rest.is_empty() {
                return Err(TypeParseError::MissingElement);
            }
            return Ok(Self::Array(Box::new(rest.parse()?)));
        }

        // `A, B and C` is the documentation's long form of `A or B or C`
        let normalised = raw.replace(", ", " or ").replace(" and ", " or ");
        let parts: Vec<&str> = normalised.split(" or ").map(str::trim).collect();
        if parts.len() > 1 {
            return parts
                .into_iter()
                .map(TypeDescriptor::from_str)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Union);
        }

        named(raw)
    }
}

fn named(raw: &str) -> Result<TypeDescriptor, TypeParseError> {
    // The docs occasionally spell it out
    let raw = if raw == "Float number" { "Float" } else { raw };

    if raw.is_empty() {
        return Err(TypeParseError::Empty);
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(TypeParseError::InvalidName(raw.to_owned()));
    }
    Ok(TypeDescriptor::Named(raw.to_owned()))
}
