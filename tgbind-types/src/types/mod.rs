//! Bot API objects.
//!
//! Plain objects are ordinary serde records. The seven variant families
//! ([`MessageOrigin`], [`ChatMember`], [`ReactionType`], [`MenuButton`],
//! [`ChatBoostSource`], [`MaybeInaccessibleMessage`] and
//! [`InputMessageContent`]) are enums whose `Deserialize` goes through
//! [`crate::resolve`]; their `Serialize` writes the variant's own fields
//! together with its discriminator, so the output resolves back to the same
//! variant.

mod boost;
mod chat_member;
mod common;
mod input_content;
mod menu_button;
mod message;
mod reaction;

pub use boost::{
    ChatBoost, ChatBoostSource, ChatBoostSourceGiftCode, ChatBoostSourceGiveaway,
    ChatBoostSourcePremium, UserChatBoosts,
};
pub use chat_member::{
    ChatMember, ChatMemberAdministrator, ChatMemberBanned, ChatMemberLeft, ChatMemberMember,
    ChatMemberOwner, ChatMemberRestricted,
};
pub use common::{Chat, LabeledPrice, LinkPreviewOptions, ReplyParameters, User, WebAppInfo};
pub use input_content::{
    InputContactMessageContent, InputInvoiceMessageContent, InputLocationMessageContent,
    InputMessageContent, InputTextMessageContent, InputVenueMessageContent,
};
pub use menu_button::{MenuButton, MenuButtonCommands, MenuButtonDefault, MenuButtonWebApp};
pub use message::{
    InaccessibleMessage, MaybeInaccessibleMessage, Message, MessageOrigin, MessageOriginChannel,
    MessageOriginChat, MessageOriginHiddenUser, MessageOriginUser,
};
pub use reaction::{ReactionType, ReactionTypeCustomEmoji, ReactionTypeEmoji};
