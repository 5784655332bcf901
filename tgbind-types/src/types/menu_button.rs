use serde::{Deserialize, Serialize};

use super::WebAppInfo;

/// Opens the bot's list of commands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonCommands {}

/// Launches a Web App.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonWebApp {
    pub text: String,
    pub web_app: WebAppInfo,
}

/// No specific button is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonDefault {}

/// The bot's menu button in a private chat. Discriminated by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuButton {
    Commands(MenuButtonCommands),
    WebApp(MenuButtonWebApp),
    Default(MenuButtonDefault),
}

impl MenuButton {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Commands(_) => "commands",
            Self::WebApp(_) => "web_app",
            Self::Default(_) => "default",
        }
    }
}

impl Default for MenuButton {
    fn default() -> Self {
        Self::Default(MenuButtonDefault {})
    }
}
