//! Functions that convert Bot API names to idiomatic Rust identifiers.

/// Uppercases the first letter: `sendPhoto` → `SendPhoto`.
pub(crate) fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Name of the parameter record for a method: `sendPhoto` → `SendPhotoParams`.
pub(crate) fn params_type_name(method: &str) -> String {
    upper_first(method) + "Params"
}

/// Converts `camelCase` / `PascalCase` into `snake_case`.
///
/// Capital runs stay together: `getURLInfo` → `get_url_info`.
pub(crate) fn to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                // End of a capital run followed by a new word (`URLInfo` → `url_info`)
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                Some(_) => false,
            };
            if boundary {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Keywords that may be used as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
];

/// Rust identifier for a wire field name, and whether `#[serde(rename)]` is
/// needed to keep the wire name.
///
/// serde strips the `r#` prefix itself, so raw identifiers need no rename.
pub(crate) fn field_ident(name: &str) -> (String, bool) {
    let snake = to_snake(name);
    match snake.as_str() {
        "self" | "super" | "crate" => (format!("is_{snake}"), true),
        kw if RAW_KEYWORDS.contains(&kw) => (format!("r#{kw}"), snake != name),
        _ => {
            let renamed = snake != name;
            (snake, renamed)
        }
    }
}

/// Non-blank lines of free text, ready to be emitted as `///` comments.
pub(crate) fn doc_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim_end).filter(|l| !l.trim().is_empty())
}
