//! Capabilities shared by the generated `Send*Params` records.

use crate::methods::{ForwardMessageParams, SendDocumentParams, SendMessageParams, SendPhotoParams};
use crate::types::{Message, ReplyParameters};
use crate::{Bot, ChatId, Error, ParseMode, Transport};

/// A record that sends one message to one chat.
pub trait Sendable {
    /// The target chat.
    fn chat_id(&self) -> &ChatId;

    fn set_chat_id(&mut self, chat_id: ChatId);

    /// The record's parse mode, for records whose text supports one.
    fn parse_mode_mut(&mut self) -> Option<&mut Option<ParseMode>> {
        None
    }

    /// Send through `bot` as-is. [`Bot::send`] also applies the bot's
    /// default parse mode.
    fn send<T: Transport>(&self, bot: &Bot<T>) -> Result<Message, Error>;
}

/// A [`Sendable`] that can reply to an earlier message.
pub trait Replyable: Sendable {
    /// Reply to `message_id` in the current target chat.
    fn reply_to(&mut self, message_id: i64);
}

macro_rules! sendable {
    (@parse_mode) => {
        fn parse_mode_mut(&mut self) -> Option<&mut Option<ParseMode>> {
            Some(&mut self.parse_mode)
        }
    };
    ($params:ty => $method:ident $(, $extra:ident)*) => {
        impl Sendable for $params {
            fn chat_id(&self) -> &ChatId {
                &self.chat_id
            }

            fn set_chat_id(&mut self, chat_id: ChatId) {
                self.chat_id = chat_id;
            }

            $(sendable!(@$extra);)*

            fn send<T: Transport>(&self, bot: &Bot<T>) -> Result<Message, Error> {
                bot.$method(self)
            }
        }
    };
}

macro_rules! replyable {
    ($($params:ty),+) => {
        $(
            impl Replyable for $params {
                fn reply_to(&mut self, message_id: i64) {
                    self.reply_parameters = Some(ReplyParameters::in_chat(self.chat_id.clone(), message_id));
                }
            }
        )+
    };
}

sendable!(SendMessageParams => send_message, parse_mode);
sendable!(SendPhotoParams => send_photo, parse_mode);
sendable!(SendDocumentParams => send_document, parse_mode);
sendable!(ForwardMessageParams => forward_message);

replyable!(SendMessageParams, SendPhotoParams, SendDocumentParams);
