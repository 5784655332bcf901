//! # tgbind: Telegram Bot API bindings
//!
//! `tgbind` wires three focused sub-crates together:
//!
//! | Sub-crate       | Role                                                     |
//! |-----------------|----------------------------------------------------------|
//! | `tgbind-schema` | Schema model: method groups, fields, type descriptors    |
//! | `tgbind-gen`    | Generate parameter records and method stubs (build-time) |
//! | `tgbind-types`  | Bot API objects, variant resolution, generated methods   |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use tgbind::{Bot, ChatId, InputFile, Request, Transport};
//! use tgbind::methods::SendPhotoParams;
//!
//! struct Http { token: String }
//!
//! impl Transport for Http {
//!     type Error = std::io::Error;
//!     fn call(&self, req: &Request<'_>) -> Result<Vec<u8>, Self::Error> {
//!         // POST https://api.telegram.org/bot{token}/{req.method}, as
//!         // multipart/form-data when `req.multipart` is set.
//!         # let _ = (&self.token, req); unimplemented!()
//!     }
//! }
//!
//! let bot = Bot::new(Http { token: "123:abc".into() });
//! let params = SendPhotoParams {
//!     chat_id: ChatId::Id(42),
//!     photo: InputFile::upload("cat.jpg", std::fs::read("cat.jpg")?),
//!     caption: Some("meow".into()),
//!     parse_mode: None,
//!     has_spoiler: None,
//!     disable_notification: None,
//!     reply_parameters: None,
//!     reply_markup: None,
//! };
//! assert!(params.has_uploadable());
//! let sent = bot.send_photo(&params)?;
//! println!("sent message {}", sent.message_id);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Updating the bundled methods
//!
//! Edit `tgbind-types/schema/methods.json` and run `cargo build`.
//! Everything else regenerates automatically.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`tgbind_types`]: objects, families, resolver and methods.
pub use tgbind_types as api;

/// Re-export of [`tgbind_schema`] (requires `feature = "schema"`).
#[cfg(feature = "schema")]
pub use tgbind_schema as schema;

/// Re-export of [`tgbind_gen`] (requires `feature = "codegen"`).
#[cfg(feature = "codegen")]
pub use tgbind_gen as codegen;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use tgbind_types::{
    Bot, ChatId, Error, Family, InputFile, ParseMode, Replyable, Request, ResolveError, Sendable,
    Transport, methods, resolve, types,
};
