//! The `Bot` handle, its transport seam, and response decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ParseMode;
use crate::sendable::Sendable;
use crate::types::Message;

// ─── Transport ───────────────────────────────────────────────────────────────

/// A method call ready to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct Request<'a> {
    /// Bot API method name (`sendPhoto`).
    pub method: &'a str,
    /// Encoded parameters, `None` for parameterless methods.
    pub params: Option<serde_json::Value>,
    /// At least one file must be posted as `multipart/form-data`.
    pub multipart: bool,
}

/// Carries a [`Request`] to the Bot API and returns the raw response body.
///
/// Implementations own the HTTP side: URL, token, retries and multipart
/// encoding of [`crate::InputFile`] uploads.
pub trait Transport {
    /// Error produced by the transport.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform the call.
    fn call(&self, request: &Request<'_>) -> Result<Vec<u8>, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn call(&self, request: &Request<'_>) -> Result<Vec<u8>, Self::Error> {
        (**self).call(request)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure of a method call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Telegram answered with `ok: false`.
    #[error("{method} failed with {code}: {description}")]
    Api {
        method: String,
        code: i64,
        description: String,
    },

    /// `ok: true` but no `result`.
    #[error("{method} returned no result")]
    MissingResult { method: String },

    /// The response body does not decode as expected.
    #[error("cannot decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// The parameters could not be encoded.
    #[error("cannot encode {method} parameters: {source}")]
    Encode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// The transport failed before a response was read.
    #[error("transport error during {method}: {source}")]
    Transport {
        method: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// The Telegram error code, for [`Error::Api`].
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<R> {
    ok: bool,
    result: Option<R>,
    error_code: Option<i64>,
    description: Option<String>,
}

// ─── Bot ─────────────────────────────────────────────────────────────────────

/// A bot bound to a transport. Method stubs are generated as inherent
/// methods on this type.
#[derive(Clone, Debug)]
pub struct Bot<T> {
    transport: T,
    default_parse_mode: Option<ParseMode>,
}

impl<T: Transport> Bot<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, default_parse_mode: None }
    }

    /// Parse mode applied by [`Bot::send`] to messages that leave it unset.
    pub fn with_default_parse_mode(mut self, mode: ParseMode) -> Self {
        self.default_parse_mode = Some(mode);
        self
    }

    pub fn default_parse_mode(&self) -> Option<ParseMode> {
        self.default_parse_mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Call `method` with `params` and decode its `result` as `R`.
    pub fn invoke<P, R>(&self, method: &str, params: Option<&P>, multipart: bool) -> Result<R, Error>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let params = params
            .map(serde_json::to_value)
            .transpose()
            .map_err(|source| Error::Encode { method: method.to_owned(), source })?;
        let request = Request { method, params, multipart };

        log::debug!("[tgbind] → {method}{}", if multipart { " (multipart)" } else { "" });
        let body = self
            .transport
            .call(&request)
            .map_err(|e| Error::Transport { method: method.to_owned(), source: Box::new(e) })?;
        log::trace!("[tgbind] ← {method}: {} bytes", body.len());

        decode_response(method, &body)
    }

    /// Send a message built with one of the `Send*Params` records, filling in
    /// the default parse mode when the message supports one and has none.
    pub fn send<S: Sendable>(&self, message: &mut S) -> Result<Message, Error> {
        if let (Some(mode), Some(slot)) = (self.default_parse_mode, message.parse_mode_mut()) {
            if slot.is_none() {
                *slot = Some(mode);
            }
        }
        message.send(self)
    }
}

fn decode_response<R: DeserializeOwned>(method: &str, body: &[u8]) -> Result<R, Error> {
    let envelope: Envelope<R> = serde_json::from_slice(body)
        .map_err(|source| Error::Decode { method: method.to_owned(), source })?;

    if !envelope.ok {
        let err = Error::Api {
            method: method.to_owned(),
            code: envelope.error_code.unwrap_or_default(),
            description: envelope.description.unwrap_or_default(),
        };
        log::debug!("[tgbind] {err}");
        return Err(err);
    }
    envelope.result.ok_or_else(|| Error::MissingResult { method: method.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    #[test]
    fn decodes_result() {
        let user: User = decode_response(
            "getMe",
            br#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"b"}}"#,
        )
        .unwrap();
        assert_eq!(user.id, 1);
    }

    #[test]
    fn api_error() {
        let err = decode_response::<bool>(
            "deleteMessage",
            br#"{"ok":false,"error_code":400,"description":"Bad Request: message to delete not found"}"#,
        )
        .unwrap_err();
        assert_eq!(err.api_code(), Some(400));
        assert_eq!(
            err.to_string(),
            "deleteMessage failed with 400: Bad Request: message to delete not found"
        );
    }

    #[test]
    fn missing_result() {
        let err = decode_response::<bool>("close", br#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, Error::MissingResult { .. }));
    }

    #[test]
    fn mistyped_result() {
        let err = decode_response::<bool>("close", br#"{"ok":true,"result":"yes"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
