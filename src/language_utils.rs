use anyhow::{anyhow, Result};
use isolang::Language;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating and resolving ISO 639-1
/// (2-letter) language codes, and the list of display languages the
/// translation provider supports.
/// One entry of the supported-language listing
#[derive(Debug, Clone, Serialize)]
pub struct SupportedLanguage {
    /// ISO 639-1 code
    pub code: &'static str,
    /// English display name
    pub name: &'static str,
}

/// Display languages offered to the client. The base language comes first.
static SUPPORTED_LANGUAGES: Lazy<Vec<SupportedLanguage>> = Lazy::new(|| {
    [
        ("es", "Spanish"),
        ("en", "English"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("ja", "Japanese"),
        ("zh", "Chinese"),
        ("ar", "Arabic"),
    ]
    .iter()
    .map(|(code, name)| SupportedLanguage { code, name })
    .collect()
});

/// Get the supported display languages
pub fn supported_languages() -> &'static [SupportedLanguage] {
    &SUPPORTED_LANGUAGES
}

/// Validate that a language code is a well-formed ISO 639-1 code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 && Language::from_639_1(&normalized_code).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English name of a language from its ISO 639-1 code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    Language::from_639_1(&normalized_code)
        .map(|language| language.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Check whether two ISO 639-1 codes refer to the same language
pub fn language_codes_match(first: &str, second: &str) -> bool {
    first.trim().eq_ignore_ascii_case(second.trim())
}
