use std::cell::RefCell;
use std::io;

use serde_json::{Value, json};
use tgbind_types::methods::*;
use tgbind_types::types::{ChatMember, MenuButton, ReactionType};
use tgbind_types::{Bot, ChatId, Error, InputFile, ParseMode, Replyable, Request, Sendable, Transport};

// ─── Mock transport ──────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
struct Call {
    method: String,
    params: Option<Value>,
    multipart: bool,
}

/// Answers every call with the same body and records what was sent.
struct Canned {
    body: Result<String, io::ErrorKind>,
    calls: RefCell<Vec<Call>>,
}

impl Canned {
    fn ok(result: Value) -> Self {
        Self::raw(json!({"ok": true, "result": result}).to_string())
    }

    fn raw(body: String) -> Self {
        Self { body: Ok(body), calls: RefCell::new(Vec::new()) }
    }

    fn failing(kind: io::ErrorKind) -> Self {
        Self { body: Err(kind), calls: RefCell::new(Vec::new()) }
    }

    fn last(&self) -> Call {
        self.calls.borrow_mut().pop().expect("no call was made")
    }
}

impl Transport for Canned {
    type Error = io::Error;

    fn call(&self, request: &Request<'_>) -> Result<Vec<u8>, io::Error> {
        self.calls.borrow_mut().push(Call {
            method: request.method.to_owned(),
            params: request.params.clone(),
            multipart: request.multipart,
        });
        match &self.body {
            Ok(body) => Ok(body.clone().into_bytes()),
            Err(kind) => Err(io::Error::new(*kind, "connection reset")),
        }
    }
}

fn message_json() -> Value {
    json!({"message_id": 11, "date": 1_700_000_000, "chat": {"id": 42, "type": "private"}})
}

fn photo(photo: InputFile) -> SendPhotoParams {
    SendPhotoParams {
        chat_id: ChatId::Id(42),
        photo,
        caption: None,
        parse_mode: None,
        has_spoiler: None,
        disable_notification: None,
        reply_parameters: None,
        reply_markup: None,
    }
}

fn document(document: InputFile, thumbnail: Option<InputFile>) -> SendDocumentParams {
    SendDocumentParams {
        chat_id: ChatId::from("@channel"),
        document,
        thumbnail,
        caption: Some("report".into()),
        parse_mode: None,
        disable_content_type_detection: None,
        disable_notification: None,
        reply_parameters: None,
    }
}

fn text(text: &str) -> SendMessageParams {
    SendMessageParams {
        chat_id: ChatId::Id(42),
        message_thread_id: None,
        text: text.into(),
        parse_mode: None,
        link_preview_options: None,
        disable_notification: None,
        protect_content: None,
        reply_parameters: None,
        reply_markup: None,
    }
}

// ─── Uploadable predicate ────────────────────────────────────────────────────

#[test]
fn single_file_field() {
    assert!(!photo(InputFile::remote("AgAD")).has_uploadable());
    assert!(photo(InputFile::upload("cat.jpg", vec![1, 2, 3])).has_uploadable());
}

#[test]
fn optional_file_field_counts_when_set() {
    let remote = || InputFile::remote("https://example.org/a.pdf");
    let local = || InputFile::upload("thumb.jpg", vec![0]);

    assert!(!document(remote(), None).has_uploadable());
    assert!(!document(remote(), Some(remote())).has_uploadable());
    assert!(document(remote(), Some(local())).has_uploadable());
    assert!(document(local(), None).has_uploadable());
}

// ─── Method stubs ────────────────────────────────────────────────────────────

#[test]
fn parameterless_method() {
    let bot = Bot::new(Canned::ok(json!({"id": 1, "is_bot": true, "first_name": "tg", "username": "tg_bot"})));
    let me = bot.get_me().unwrap();
    assert_eq!(me.username.as_deref(), Some("tg_bot"));
    assert_eq!(
        bot.transport().last(),
        Call { method: "getMe".into(), params: None, multipart: false }
    );
}

#[test]
fn remote_photo_is_sent_as_json() {
    let bot = Bot::new(Canned::ok(message_json()));
    let msg = bot.send_photo(&photo(InputFile::remote("AgAD"))).unwrap();
    assert_eq!(msg.message_id, 11);

    let call = bot.transport().last();
    assert_eq!(call.method, "sendPhoto");
    assert!(!call.multipart);
    assert_eq!(call.params, Some(json!({"chat_id": 42, "photo": "AgAD"})));
}

#[test]
fn uploaded_photo_is_multipart() {
    let bot = Bot::new(Canned::ok(message_json()));
    bot.send_photo(&photo(InputFile::upload("a.png", b"PNG".to_vec()))).unwrap();

    let call = bot.transport().last();
    assert!(call.multipart);
    assert_eq!(call.params.unwrap()["photo"], json!({"attach": "a.png", "data": "UE5H"}));
}

#[test]
fn records_without_files_are_never_multipart() {
    let bot = Bot::new(Canned::ok(json!(true)));
    let deleted = bot
        .delete_message(&DeleteMessageParams { chat_id: ChatId::Id(1), message_id: 5 })
        .unwrap();
    assert!(deleted);
    let call = bot.transport().last();
    assert!(!call.multipart);
    assert_eq!(call.params, Some(json!({"chat_id": 1, "message_id": 5})));
}

#[test]
fn family_results_are_resolved() {
    let bot = Bot::new(Canned::ok(json!({
        "status": "kicked",
        "user": {"id": 9, "is_bot": false, "first_name": "spam"},
        "until_date": 0
    })));
    let member = bot
        .get_chat_member(&GetChatMemberParams { chat_id: ChatId::Id(-100), user_id: 9 })
        .unwrap();
    assert!(matches!(member, ChatMember::Banned(_)));
    assert!(!member.is_member());

    let bot = Bot::new(Canned::ok(json!({"type": "commands"})));
    let button = bot.get_chat_menu_button(&GetChatMenuButtonParams { chat_id: None }).unwrap();
    assert_eq!(button.tag(), "commands");
    assert_eq!(bot.transport().last().params, Some(json!({})));
}

#[test]
fn family_params_serialize_with_tags() {
    let bot = Bot::new(Canned::ok(json!(true)));
    bot.set_message_reaction(&SetMessageReactionParams {
        chat_id: ChatId::Id(1),
        message_id: 2,
        reaction: Some(vec![ReactionType::emoji("👌")]),
        is_big: None,
    })
    .unwrap();
    bot.set_chat_menu_button(&SetChatMenuButtonParams { chat_id: Some(7), menu_button: Some(MenuButton::default()) })
        .unwrap();

    let menu = bot.transport().last();
    assert_eq!(menu.params, Some(json!({"chat_id": 7, "menu_button": {"type": "default"}})));
    let reaction = bot.transport().last();
    assert_eq!(reaction.params.unwrap()["reaction"], json!([{"type": "emoji", "emoji": "👌"}]));
}

#[test]
fn ambiguous_return_stays_untyped() {
    let params = EditMessageTextParams {
        chat_id: None,
        message_id: None,
        inline_message_id: Some("AAA".into()),
        text: "edited".into(),
        parse_mode: Some(ParseMode::MarkdownV2),
        link_preview_options: None,
    };

    let bot = Bot::new(Canned::ok(json!(true)));
    let v: Value = bot.edit_message_text(&params).unwrap();
    assert_eq!(v, Value::Bool(true));
    assert_eq!(bot.transport().last().params.unwrap()["parse_mode"], "MarkdownV2");

    let bot = Bot::new(Canned::ok(message_json()));
    let v = bot.edit_message_text(&params).unwrap();
    assert_eq!(v["message_id"], 11);
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn api_errors_surface() {
    let bot = Bot::new(Canned::raw(
        r#"{"ok":false,"error_code":403,"description":"Forbidden: bot was blocked by the user"}"#.into(),
    ));
    let err = bot.send_message(&text("hi")).unwrap_err();
    assert_eq!(err.api_code(), Some(403));
    match err {
        Error::Api { method, description, .. } => {
            assert_eq!(method, "sendMessage");
            assert!(description.contains("blocked"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[test]
fn transport_errors_surface() {
    let bot = Bot::new(Canned::failing(io::ErrorKind::ConnectionReset));
    let err = bot.log_out().unwrap_err();
    assert!(matches!(err, Error::Transport { ref method, .. } if method == "logOut"));
    assert!(err.to_string().contains("connection reset"));
}

#[test]
fn unresolvable_result_is_a_decode_error() {
    let bot = Bot::new(Canned::ok(json!({"status": "owner", "user": {"id": 1, "is_bot": false, "first_name": "a"}})));
    let err = bot
        .get_chat_member(&GetChatMemberParams { chat_id: ChatId::Id(1), user_id: 1 })
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("unknown ChatMember type `owner`"));
}

// ─── Sendable ────────────────────────────────────────────────────────────────

#[test]
fn default_parse_mode_fills_unset_records() {
    let bot = Bot::new(Canned::ok(message_json())).with_default_parse_mode(ParseMode::Html);

    let mut plain = text("<b>hi</b>");
    bot.send(&mut plain).unwrap();
    assert_eq!(plain.parse_mode, Some(ParseMode::Html));
    assert_eq!(bot.transport().last().params.unwrap()["parse_mode"], "HTML");

    let mut explicit = text("*hi*");
    explicit.parse_mode = Some(ParseMode::Markdown);
    bot.send(&mut explicit).unwrap();
    assert_eq!(bot.transport().last().params.unwrap()["parse_mode"], "Markdown");
}

#[test]
fn records_without_parse_mode_are_untouched() {
    let bot = Bot::new(Canned::ok(message_json())).with_default_parse_mode(ParseMode::Html);
    let mut fwd = ForwardMessageParams {
        chat_id: ChatId::Id(1),
        from_chat_id: ChatId::from("@source"),
        disable_notification: None,
        message_id: 3,
    };
    assert!(fwd.parse_mode_mut().is_none());
    bot.send(&mut fwd).unwrap();
    let call = bot.transport().last();
    assert_eq!(call.method, "forwardMessage");
    assert_eq!(call.params.unwrap().get("parse_mode"), None);
}

#[test]
fn replies_and_retargeting() {
    let mut msg = photo(InputFile::remote("AgAD"));
    msg.reply_to(77);
    msg.set_chat_id(ChatId::from("@other"));
    assert_eq!(msg.chat_id(), &ChatId::from("@other"));

    let bot = Bot::new(Canned::ok(message_json()));
    Sendable::send(&msg, &bot).unwrap();
    let params = bot.transport().last().params.unwrap();
    assert_eq!(params["chat_id"], "@other");
    // The replied-to message stays in the chat it was picked from.
    assert_eq!(params["reply_parameters"], json!({"message_id": 77, "chat_id": 42}));
}

#[test]
fn reply_carries_the_target_chat() {
    let mut msg = text("ack");
    msg.set_chat_id(ChatId::from("@group"));
    msg.reply_to(5);
    let reply = msg.reply_parameters.as_ref().unwrap();
    assert_eq!(reply.message_id, 5);
    assert_eq!(reply.chat_id, Some(ChatId::from("@group")));
}
