use serde::{Deserialize, Serialize};

/// A standard emoji reaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionTypeEmoji {
    pub emoji: String,
}

/// A custom emoji reaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionTypeCustomEmoji {
    pub custom_emoji_id: String,
}

/// A reaction. Discriminated by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionType {
    Emoji(ReactionTypeEmoji),
    CustomEmoji(ReactionTypeCustomEmoji),
}

impl ReactionType {
    /// A standard emoji reaction.
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji(ReactionTypeEmoji { emoji: emoji.into() })
    }

    /// A custom emoji reaction.
    pub fn custom_emoji(id: impl Into<String>) -> Self {
        Self::CustomEmoji(ReactionTypeCustomEmoji { custom_emoji_id: id.into() })
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Emoji(_) => "emoji",
            Self::CustomEmoji(_) => "custom_emoji",
        }
    }
}
