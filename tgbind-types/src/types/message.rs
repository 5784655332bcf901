use serde::{Deserialize, Deserializer, Serialize};

use super::{Chat, User};

/// A message.
///
/// `date` of a real message is never zero; a zero date marks an
/// [`InaccessibleMessage`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,
    /// Unix time the message was sent.
    pub date: i64,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_origin: Option<MessageOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<MaybeInaccessibleMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A message that was deleted or is otherwise unavailable to the bot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InaccessibleMessage {
    pub chat: Chat,
    pub message_id: i64,
    /// Always `0`.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub date: i64,
}

fn zero_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Either a [`Message`] or an [`InaccessibleMessage`], told apart by `date`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MaybeInaccessibleMessage {
    Message(Box<Message>),
    Inaccessible(InaccessibleMessage),
}

impl MaybeInaccessibleMessage {
    /// The chat the message belongs to.
    pub fn chat(&self) -> &Chat {
        match self {
            Self::Message(m) => &m.chat,
            Self::Inaccessible(m) => &m.chat,
        }
    }

    pub fn message_id(&self) -> i64 {
        match self {
            Self::Message(m) => m.message_id,
            Self::Inaccessible(m) => m.message_id,
        }
    }

    /// The message, if it is still accessible.
    pub fn accessible(&self) -> Option<&Message> {
        match self {
            Self::Message(m) => Some(m),
            Self::Inaccessible(_) => None,
        }
    }
}

// ─── MessageOrigin ───────────────────────────────────────────────────────────

/// Originally sent by a known user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOriginUser {
    pub date: i64,
    pub sender_user: User,
}

/// Originally sent by a user who hides their account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOriginHiddenUser {
    pub date: i64,
    pub sender_user_name: String,
}

/// Originally sent on behalf of a chat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOriginChat {
    pub date: i64,
    pub sender_chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}

/// Originally a channel post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOriginChannel {
    pub date: i64,
    pub chat: Chat,
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}

/// Where a forwarded message came from. Discriminated by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageOrigin {
    User(MessageOriginUser),
    HiddenUser(MessageOriginHiddenUser),
    Chat(MessageOriginChat),
    Channel(MessageOriginChannel),
}

impl MessageOrigin {
    /// The `type` discriminator of this origin.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::HiddenUser(_) => "hidden_user",
            Self::Chat(_) => "chat",
            Self::Channel(_) => "channel",
        }
    }

    /// Unix time the original message was sent.
    pub fn date(&self) -> i64 {
        match self {
            Self::User(o) => o.date,
            Self::HiddenUser(o) => o.date,
            Self::Chat(o) => o.date,
            Self::Channel(o) => o.date,
        }
    }
}
