//! Case-preserving whole-word substitution.
//!
//! Every case-insensitive, whole-word occurrence of the source word is replaced
//! by the replacement word rendered in the case class of that occurrence.

use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// The word located in eligible files.
pub const SOURCE_WORD: &str = "skl";

/// The word written back, re-cased to match each occurrence.
pub const REPLACEMENT_WORD: &str = "skl";

static BUILTIN_PAIR: LazyLock<WordPair> =
    LazyLock::new(|| WordPair::new(SOURCE_WORD, REPLACEMENT_WORD).unwrap());

/// How a matched occurrence is cased, and therefore how its replacement is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    /// Every cased character is upper-case: `SKL`.
    Upper,
    /// First character upper-case, anything else: `Skl`, `SkL`.
    Title,
    /// Lower-case, or any casing not covered above: `skl`, `sKL`.
    Lower,
}

impl CaseClass {
    pub fn of(matched: &str) -> Self {
        if is_all_upper(matched) {
            CaseClass::Upper
        } else if matched.chars().next().is_some_and(char::is_uppercase) {
            CaseClass::Title
        } else {
            CaseClass::Lower
        }
    }

    pub fn render(self, word: &str) -> String {
        match self {
            CaseClass::Upper => word.to_uppercase(),
            CaseClass::Title => capitalize(&word.to_lowercase()),
            CaseClass::Lower => word.to_lowercase(),
        }
    }
}

/// At least one cased character and no lower-case ones.
fn is_all_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// A replacement word and the compiled matcher for its source word.
#[derive(Debug, Clone)]
pub struct WordPair {
    replacement: String,
    pattern: Regex,
}

impl WordPair {
    pub fn new(source: &str, replacement: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Err(Error::validation_invalid_argument(
                "source",
                "Source word must not be empty",
            ));
        }

        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(source)))
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                Error::validation_invalid_argument(
                    "source",
                    format!("Cannot build pattern for '{}': {}", source, e),
                )
            })?;

        Ok(Self {
            replacement: replacement.to_string(),
            pattern,
        })
    }

    /// The program's fixed pair.
    pub fn builtin() -> &'static WordPair {
        &BUILTIN_PAIR
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Replace every occurrence in a single left-to-right pass.
    ///
    /// Borrows when nothing matched. A match can still render to identical
    /// text, so callers decide whether anything changed by comparing content.
    pub fn substitute<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(content, |caps: &Captures| {
            CaseClass::of(&caps[0]).render(&self.replacement)
        })
    }
}

/// Apply the built-in pair to `content`.
pub fn substitute(content: &str) -> String {
    WordPair::builtin().substitute(content).into_owned()
}
