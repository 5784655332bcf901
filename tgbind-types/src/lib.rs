//! Telegram Bot API types with runtime discriminator resolution, plus
//! method bindings generated from `schema/methods.json`.
//!
//! # Overview
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`types`]     | Domain objects and the seven variant families as `enum`s      |
//! | [`resolve`]   | Peek-then-decode resolution of raw payloads into a family     |
//! | [`methods`]   | Generated `*Params` records and `Bot` method stubs            |
//!
//! # Resolving a payload
//!
//! ```rust
//! use tgbind_types::{resolve, types::MessageOrigin};
//!
//! let raw = br#"{"type":"hidden_user","date":1700000000,"sender_user_name":"anon"}"#;
//! let origin = resolve::message_origin(raw).unwrap();
//! assert!(matches!(origin, MessageOrigin::HiddenUser(_)));
//! ```
//!
//! # Calling a method
//!
//! Any [`Transport`] can drive the generated stubs:
//!
//! ```rust,no_run
//! # use tgbind_types::{Bot, Request, Transport};
//! # struct Http;
//! # impl Transport for Http {
//! #     type Error = std::io::Error;
//! #     fn call(&self, _: &Request<'_>) -> Result<Vec<u8>, Self::Error> { unimplemented!() }
//! # }
//! let bot = Bot::new(Http);
//! let me = bot.get_me()?;
//! println!("running as @{}", me.username.unwrap_or_default());
//! # Ok::<(), tgbind_types::Error>(())
//! ```

#![deny(unsafe_code)]

mod bot;
mod chat_id;
mod generated;
mod input_file;
mod registry;
mod sendable;
pub mod resolve;
pub mod types;

pub use bot::{Bot, Error, Request, Transport};
pub use chat_id::{ChatId, ParseMode};
pub use generated::methods;
pub use input_file::InputFile;
pub use resolve::{Family, Kind, ResolveError, Rule, Variant};
pub use sendable::{Replyable, Sendable};
