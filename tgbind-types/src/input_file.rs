//! Files passed to upload-capable methods.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A file argument: either something Telegram can fetch itself, or bytes
/// that must be posted as `multipart/form-data`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFile {
    /// A `file_id` already on Telegram's servers, or an HTTP URL.
    Remote(String),
    /// Local content under a file name.
    Upload { name: String, data: Vec<u8> },
}

impl InputFile {
    pub fn remote(id_or_url: impl Into<String>) -> Self {
        Self::Remote(id_or_url.into())
    }

    pub fn upload(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Upload { name: name.into(), data: data.into() }
    }

    /// Whether this file has to travel in the request body.
    pub fn needs_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }
}

/// Remote files serialize as their string; uploads as
/// `{"attach": name, "data": base64}` for the transport to unpack into a
/// multipart part.
impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Remote(s) => serializer.serialize_str(s),
            Self::Upload { name, data } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("attach", name)?;
                map.serialize_entry("data", &STANDARD.encode(data))?;
                map.end()
            }
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Repr {
    Remote(String),
    Upload { attach: String, data: String },
}

impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Remote(s) => Ok(Self::Remote(s)),
            Repr::Upload { attach, data } => {
                let data = STANDARD.decode(data).map_err(D::Error::custom)?;
                Ok(Self::Upload { name: attach, data })
            }
        }
    }
}
