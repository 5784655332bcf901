use tgbind_gen::{
    Artifact, ArtifactKind, Config, GenError, ReturnExtractor, TypeMapper, BotApiTypes, generate,
    generate_group, generate_types, generate_with, write_module,
};
use tgbind_schema::{Field, Group, SchemaError, TypeDescriptor};

fn kinds(artifacts: &[Artifact]) -> Vec<ArtifactKind> {
    artifacts.iter().map(|a| a.kind).collect()
}

fn send_photo() -> Group {
    Group::new("sendPhoto", "Use this method to send photos. On success, the sent Message is returned.")
        .with_field(Field::required("chat_id", "Integer or String"))
        .with_field(Field::required("photo", "InputFile or String"))
        .with_field(Field::optional("caption", "String"))
}

// ── Record emission ──────────────────────────────────────────────────────────

#[test]
fn no_fields_means_method_only() {
    let group = Group::new("getMe", "Returns basic information about the bot in form of a User object.");
    let artifacts = generate_group(&group, &Config::default()).unwrap();
    assert_eq!(kinds(&artifacts), [ArtifactKind::Method]);

    let text = &artifacts[0].text;
    assert!(text.contains("pub fn get_me(&self) -> Result<crate::types::User, crate::Error>"), "{text}");
    assert!(text.contains(r#"self.invoke::<(), _>("getMe", None, false)"#), "{text}");
}

#[test]
fn record_carries_every_field() {
    let artifacts = generate_group(&send_photo(), &Config::default()).unwrap();
    assert_eq!(
        kinds(&artifacts),
        [ArtifactKind::Record, ArtifactKind::Uploadable, ArtifactKind::Method]
    );

    let record = &artifacts[0].text;
    assert!(record.contains("/// `SendPhotoParams` contains the method's parameters."));
    assert!(record.contains("pub struct SendPhotoParams {"));
    assert!(record.contains("    pub chat_id: crate::ChatId,"));
    assert!(record.contains("    pub photo: crate::InputFile,"));
    assert!(record.contains("    pub caption: Option<String>,"));
    assert!(record.contains("#[derive(Debug)]"));
    assert!(!record.contains("serde::Deserialize"));
}

#[test]
fn optional_fields_are_skipped_when_none() {
    let artifacts = generate_group(&send_photo(), &Config::default()).unwrap();
    let record = &artifacts[0].text;
    let skip = "    #[serde(skip_serializing_if = \"Option::is_none\")]\n    pub caption: Option<String>,";
    assert!(record.contains(skip), "{record}");
}

#[test]
fn keyword_field_becomes_raw_identifier() {
    let group = Group::new("sendChatAction", "Returns True on success.")
        .with_field(Field::required("chat_id", "Integer"))
        .with_field(Field::required("type", "String"));
    let artifacts = generate_group(&group, &Config::default()).unwrap();
    assert!(artifacts[0].text.contains("pub r#type: String,"));
    assert!(!artifacts[0].text.contains("rename"));
}

#[test]
fn config_controls_derives() {
    let config = Config { impl_debug: false, impl_deserialize: true, ..Config::default() };
    let artifacts = generate_group(&send_photo(), &config).unwrap();
    assert!(!artifacts[0].text.contains("Debug"));
    assert!(artifacts[0].text.contains("#[derive(serde::Serialize, serde::Deserialize)]"));
}

// ── Uploadable detection ─────────────────────────────────────────────────────

#[test]
fn single_upload_field_gets_predicate() {
    let artifacts = generate_group(&send_photo(), &Config::default()).unwrap();
    let predicate = &artifacts[1].text;
    assert!(predicate.starts_with("impl SendPhotoParams {"));
    assert!(predicate.contains("pub fn has_uploadable(&self) -> bool {"));
    assert!(predicate.contains("        self.photo.needs_upload()\n"), "{predicate}");
    assert!(!predicate.contains("||"));

    let method = &artifacts[2].text;
    assert!(method.contains(r#"self.invoke("sendPhoto", Some(params), params.has_uploadable())"#));
}

#[test]
fn several_upload_fields_are_ored() {
    let group = send_photo().with_field(Field::optional("thumbnail", "InputFile or String"));
    let artifacts = generate_group(&group, &Config::default()).unwrap();
    let predicate = &artifacts[1].text;
    assert!(predicate.contains(
        "self.photo.needs_upload()\n            || self.thumbnail.as_ref().is_some_and(|f| f.needs_upload())"
    ), "{predicate}");
}

#[test]
fn no_upload_fields_means_no_predicate() {
    let group = Group::new("sendMessage", "On success, the sent Message is returned.")
        .with_field(Field::required("chat_id", "Integer or String"))
        .with_field(Field::required("text", "String"));
    let artifacts = generate_group(&group, &Config::default()).unwrap();
    assert_eq!(kinds(&artifacts), [ArtifactKind::Record, ArtifactKind::Method]);
    assert!(artifacts.iter().all(|a| !a.text.contains("has_uploadable")));
    assert!(artifacts[1].text.contains(r#"self.invoke("sendMessage", Some(params), false)"#));
}

#[test]
fn arrays_of_files_are_not_uploadable_fields() {
    let group = Group::new("sendMediaGroup", "On success, an Array of Message objects is returned.")
        .with_field(Field::required("media", "Array of InputFile"));
    let artifacts = generate_group(&group, &Config::default()).unwrap();
    assert_eq!(kinds(&artifacts), [ArtifactKind::Record, ArtifactKind::Method]);
    assert!(artifacts[1].text.contains("Result<Vec<crate::types::Message>, crate::Error>"));
}

// ── Response types ───────────────────────────────────────────────────────────

#[test]
fn ambiguous_description_is_untyped() {
    let group = Group::new(
        "editMessageText",
        "On success, if the edited message is not an inline message, the edited Message is \
         returned, otherwise True is returned.",
    )
    .with_field(Field::required("text", "String"));
    let artifacts = generate_group(&group, &Config::default()).unwrap();
    let method = &artifacts.last().unwrap().text;
    assert!(method.contains("-> Result<serde_json::Value, crate::Error>"), "{method}");
}

#[test]
fn silent_description_is_untyped() {
    let group = Group::new("close", "Use this method to close the bot instance.");
    let artifacts = generate_group(&group, &Config::default()).unwrap();
    assert!(artifacts[0].text.contains("pub fn close(&self) -> Result<serde_json::Value, crate::Error>"));
}

struct Fixed(&'static [&'static str]);

impl ReturnExtractor for Fixed {
    fn extract(&self, _description: &str) -> Vec<String> {
        self.0.iter().map(|s| s.to_string()).collect()
    }
}

#[test]
fn pluggable_extractor_drives_the_policy() {
    let groups = [Group::new("getChat", "")];
    let config = Config::default();

    let one = generate_with(&groups, &config, &BotApiTypes, &Fixed(&["ChatFullInfo"])).unwrap();
    assert!(one[0].text.contains("Result<crate::types::ChatFullInfo, crate::Error>"));

    let two = generate_with(&groups, &config, &BotApiTypes, &Fixed(&["ChatFullInfo", "Chat"])).unwrap();
    assert!(two[0].text.contains("Result<serde_json::Value, crate::Error>"));
}

struct Shouting;

impl TypeMapper for Shouting {
    fn map(&self, _field: Option<&str>, ty: &TypeDescriptor) -> String {
        ty.to_string().to_uppercase()
    }

    fn upload_type(&self) -> &str {
        "BLOB"
    }
}

#[test]
fn pluggable_mapper_decides_uploadability() {
    let group = Group::new("putBlob", "Returns True on success.")
        .with_field(Field::required("data", "Blob"))
        .with_field(Field::required("photo", "InputFile"));
    let artifacts = generate_with(&[group], &Config::default(), &Shouting, &Fixed(&["True"])).unwrap();
    assert_eq!(
        kinds(&artifacts),
        [ArtifactKind::Record, ArtifactKind::Uploadable, ArtifactKind::Method]
    );
    assert!(artifacts[1].text.contains("self.data.needs_upload()"));
    assert!(!artifacts[1].text.contains("photo"));
    assert!(artifacts[2].text.contains("Result<TRUE, crate::Error>"));
}

// ── Pass-level behaviour ─────────────────────────────────────────────────────

#[test]
fn output_follows_input_order() {
    let groups = [
        Group::new("getMe", "Returns a User object."),
        send_photo(),
        Group::new("logOut", "Returns True on success."),
    ];
    let artifacts = generate(&groups, &Config::default()).unwrap();
    let order: Vec<_> = artifacts.iter().map(|a| (a.group.as_str(), a.kind)).collect();
    assert_eq!(
        order,
        [
            ("getMe", ArtifactKind::Method),
            ("sendPhoto", ArtifactKind::Record),
            ("sendPhoto", ArtifactKind::Uploadable),
            ("sendPhoto", ArtifactKind::Method),
            ("logOut", ArtifactKind::Method),
        ]
    );
}

#[test]
fn parallel_flag_keeps_order() {
    let groups: Vec<Group> = (0..32)
        .map(|i| Group::new(format!("method{i}"), "Returns True on success.")
            .with_field(Field::required("value", "Integer")))
        .collect();
    let sequential = generate(&groups, &Config::default()).unwrap();
    let parallel = generate(&groups, &Config { parallel: true, ..Config::default() }).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn defective_group_fails_the_pass_with_context() {
    let groups = [
        Group::new("getMe", "Returns a User object."),
        Group::new("sendDice", "").with_field(Field::required("chat_id", "")),
    ];
    let err = generate(&groups, &Config::default()).unwrap_err();
    match &err {
        GenError::Schema { group, index, source } => {
            assert_eq!(group, "sendDice");
            assert_eq!(*index, Some(1));
            assert!(matches!(source, SchemaError::InvalidType { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("sendDice"));
}

#[test]
fn unnamed_group_is_a_defect() {
    let err = generate_group(&Group::new("", "Returns True."), &Config::default()).unwrap_err();
    assert!(matches!(err, GenError::Schema { ref group, source: SchemaError::MissingGroupName, .. }
        if group == "<unnamed>"));
}

#[test]
fn module_wrapper_indents_artifacts() {
    let artifacts = generate(&[Group::new("getMe", "Returns a User object.")], &Config::default()).unwrap();
    let mut out = Vec::new();
    write_module(&mut out, "methods", &artifacts).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("// @generated"));
    assert!(text.contains("pub mod methods {\n"));
    assert!(text.contains("\n    impl<T: crate::Transport> crate::Bot<T> {\n"));
    assert!(text.trim_end().ends_with('}'));
}

#[test]
fn object_types_emit_plain_records() {
    let groups = [
        Group::new("User", "This object represents a Telegram user or bot.")
            .with_field(Field::required("id", "Integer"))
            .with_field(Field::optional("username", "String")),
        Group::new("CallbackGame", "A placeholder, currently holds no information."),
    ];
    let artifacts = generate_types(&groups, &Config::default()).unwrap();
    assert_eq!(artifacts.len(), 1);
    assert!(artifacts[0].text.starts_with("/// This object represents a Telegram user or bot.\n"));
    assert!(artifacts[0].text.contains("pub struct User {"));
    assert!(artifacts[0].text.contains("pub username: Option<String>,"));
}
