//! The seven variant families and their discriminator tables.
//!
//! Tables are literal data. Adding a variant is one table entry plus one
//! enum arm.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::value::RawValue;

use crate::resolve::{Family, Kind, Rule, Variant, resolve};
use crate::types::*;

/// Implements `From<Variant>` for each arm, `variant_name()`, and a
/// `Deserialize` that goes through the family's resolver.
macro_rules! family {
    ($family:ident { $($arm:ident($variant:ty)),+ $(,)? }) => {
        impl $family {
            /// The Bot API type name of the held variant.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    $(Self::$arm(_) => stringify!($variant),)+
                }
            }
        }

        $(
            impl From<$variant> for $family {
                fn from(v: $variant) -> Self {
                    Self::$arm(v.into())
                }
            }
        )+

        impl<'de> Deserialize<'de> for $family {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Box::<RawValue>::deserialize(deserializer)?;
                resolve::<Self>(raw.get().as_bytes()).map_err(D::Error::custom)
            }
        }
    };
}

// ─── Discriminated by a string tag ───────────────────────────────────────────

family!(MessageOrigin {
    User(MessageOriginUser),
    HiddenUser(MessageOriginHiddenUser),
    Chat(MessageOriginChat),
    Channel(MessageOriginChannel),
});

impl Family for MessageOrigin {
    const NAME: &'static str = "MessageOrigin";
    const RULE: Rule<Self> = Rule::Tag {
        field: "type",
        table: &[
            ("user", Variant::of::<MessageOriginUser>("MessageOriginUser")),
            ("hidden_user", Variant::of::<MessageOriginHiddenUser>("MessageOriginHiddenUser")),
            ("chat", Variant::of::<MessageOriginChat>("MessageOriginChat")),
            ("channel", Variant::of::<MessageOriginChannel>("MessageOriginChannel")),
        ],
    };
}

family!(ChatMember {
    Owner(ChatMemberOwner),
    Administrator(ChatMemberAdministrator),
    Member(ChatMemberMember),
    Restricted(ChatMemberRestricted),
    Left(ChatMemberLeft),
    Banned(ChatMemberBanned),
});

impl Family for ChatMember {
    const NAME: &'static str = "ChatMember";
    const RULE: Rule<Self> = Rule::Tag {
        field: "status",
        table: &[
            ("creator", Variant::of::<ChatMemberOwner>("ChatMemberOwner")),
            ("administrator", Variant::of::<ChatMemberAdministrator>("ChatMemberAdministrator")),
            ("member", Variant::of::<ChatMemberMember>("ChatMemberMember")),
            ("restricted", Variant::of::<ChatMemberRestricted>("ChatMemberRestricted")),
            ("left", Variant::of::<ChatMemberLeft>("ChatMemberLeft")),
            ("kicked", Variant::of::<ChatMemberBanned>("ChatMemberBanned")),
        ],
    };
}

family!(ReactionType {
    Emoji(ReactionTypeEmoji),
    CustomEmoji(ReactionTypeCustomEmoji),
});

impl Family for ReactionType {
    const NAME: &'static str = "ReactionType";
    const RULE: Rule<Self> = Rule::Tag {
        field: "type",
        table: &[
            ("emoji", Variant::of::<ReactionTypeEmoji>("ReactionTypeEmoji")),
            ("custom_emoji", Variant::of::<ReactionTypeCustomEmoji>("ReactionTypeCustomEmoji")),
        ],
    };
}

family!(MenuButton {
    Commands(MenuButtonCommands),
    WebApp(MenuButtonWebApp),
    Default(MenuButtonDefault),
});

impl Family for MenuButton {
    const NAME: &'static str = "MenuButton";
    const RULE: Rule<Self> = Rule::Tag {
        field: "type",
        table: &[
            ("commands", Variant::of::<MenuButtonCommands>("MenuButtonCommands")),
            ("web_app", Variant::of::<MenuButtonWebApp>("MenuButtonWebApp")),
            ("default", Variant::of::<MenuButtonDefault>("MenuButtonDefault")),
        ],
    };
}

family!(ChatBoostSource {
    Premium(ChatBoostSourcePremium),
    GiftCode(ChatBoostSourceGiftCode),
    Giveaway(ChatBoostSourceGiveaway),
});

impl Family for ChatBoostSource {
    const NAME: &'static str = "ChatBoostSource";
    const RULE: Rule<Self> = Rule::Tag {
        field: "source",
        table: &[
            ("premium", Variant::of::<ChatBoostSourcePremium>("ChatBoostSourcePremium")),
            ("gift_code", Variant::of::<ChatBoostSourceGiftCode>("ChatBoostSourceGiftCode")),
            ("giveaway", Variant::of::<ChatBoostSourceGiveaway>("ChatBoostSourceGiveaway")),
        ],
    };
}

// ─── Discriminated by a zero value ───────────────────────────────────────────

family!(MaybeInaccessibleMessage {
    Message(Message),
    Inaccessible(InaccessibleMessage),
});

impl Family for MaybeInaccessibleMessage {
    const NAME: &'static str = "MaybeInaccessibleMessage";
    const RULE: Rule<Self> = Rule::ZeroValue {
        field: "date",
        zero: Variant::of::<InaccessibleMessage>("InaccessibleMessage"),
        other: Variant::of::<Message>("Message"),
    };
}

// ─── Discriminated by field presence ─────────────────────────────────────────

family!(InputMessageContent {
    Text(InputTextMessageContent),
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
    Contact(InputContactMessageContent),
    Invoice(InputInvoiceMessageContent),
});

impl Family for InputMessageContent {
    const NAME: &'static str = "InputMessageContent";
    const RULE: Rule<Self> = Rule::Presence {
        table: &[
            ("message_text", Kind::String, Variant::of::<InputTextMessageContent>("InputTextMessageContent")),
            ("address", Kind::String, Variant::of::<InputVenueMessageContent>("InputVenueMessageContent")),
            ("latitude", Kind::Number, Variant::of::<InputLocationMessageContent>("InputLocationMessageContent")),
            ("phone_number", Kind::String, Variant::of::<InputContactMessageContent>("InputContactMessageContent")),
            ("description", Kind::String, Variant::of::<InputInvoiceMessageContent>("InputInvoiceMessageContent")),
        ],
    };
}
