use serde::{Deserialize, Serialize};

use super::User;

/// Boost obtained by subscribing to Telegram Premium.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostSourcePremium {
    pub user: User,
}

/// Boost obtained through a gift code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostSourceGiftCode {
    pub user: User,
}

/// Boost obtained through a giveaway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostSourceGiveaway {
    /// May be `0` if the giveaway message isn't sent yet.
    pub giveaway_message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_star_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_unclaimed: Option<bool>,
}

/// Where a chat boost came from. Discriminated by `source`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ChatBoostSource {
    Premium(ChatBoostSourcePremium),
    GiftCode(ChatBoostSourceGiftCode),
    Giveaway(ChatBoostSourceGiveaway),
}

impl ChatBoostSource {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Premium(_) => "premium",
            Self::GiftCode(_) => "gift_code",
            Self::Giveaway(_) => "giveaway",
        }
    }

    /// The boosting user, when known.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Premium(s) => Some(&s.user),
            Self::GiftCode(s) => Some(&s.user),
            Self::Giveaway(s) => s.user.as_ref(),
        }
    }
}

/// A boost added to a chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoost {
    pub boost_id: String,
    pub add_date: i64,
    pub expiration_date: i64,
    pub source: ChatBoostSource,
}

/// Boosts a user added to a chat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChatBoosts {
    pub boosts: Vec<ChatBoost>,
}
