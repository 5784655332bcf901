//! Best-effort extraction of a method's declared return type from its
//! documentation text.
//!
//! This is an annotation reader, not a type inferencer: it only reports
//! what the prose names. The generator uses the result when exactly one
//! candidate is found and falls back to an untyped response otherwise.

/// Reads candidate return-type names out of free text.
pub trait ReturnExtractor: Sync {
    /// Candidate type names in order of appearance, without duplicates.
    /// `Array of X` phrases are returned as a single candidate.
    fn extract(&self, description: &str) -> Vec<String>;
}

/// Scans every sentence that mentions "return" for capitalised type names.
///
/// ```
/// use tgbind_gen::{ReturnExtractor, SentenceScanner};
///
/// let found = SentenceScanner.extract("On success, the sent Message is returned.");
/// assert_eq!(found, ["Message"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SentenceScanner;

/// Capitalised words that show up in return sentences but are not types,
/// sentence openers included.
const NOT_TYPES: &[&str] = &[
    "A", "An", "API", "Bot", "For", "HTTP", "HTTPS", "ID", "If", "In", "Note", "On", "Otherwise",
    "Returns", "Telegram", "The", "This", "URL", "Use", "When",
];

impl ReturnExtractor for SentenceScanner {
    fn extract(&self, description: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();

        for sentence in description.split(['.', '\n']) {
            if !sentence.to_ascii_lowercase().contains("return") {
                continue;
            }

            let words: Vec<&str> = sentence
                .split_whitespace()
                .map(|w| w.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '_'))
                .filter(|w| !w.is_empty())
                .collect();

            let mut i = 0;
            while i < words.len() {
                let word = words[i];
                let candidate = if word == "Array" && words.get(i + 1) == Some(&"of") {
                    match words.get(i + 2) {
                        Some(elem) if is_type_name(elem) => {
                            i += 2;
                            Some(format!("Array of {elem}"))
                        }
                        _ => None,
                    }
                } else if is_type_name(word) {
                    Some(word.to_owned())
                } else {
                    None
                };

                if let Some(c) = candidate {
                    if !found.contains(&c) {
                        found.push(c);
                    }
                }
                i += 1;
            }
        }

        found
    }
}

fn is_type_name(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_uppercase())
        && word.chars().all(|c| c.is_ascii_alphanumeric())
        && !NOT_TYPES.contains(&word)
}
