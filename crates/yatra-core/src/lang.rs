//! Language-name registry shared by the translator and the voice resolver.
//!
//! Maps human-entered language names ("tamil", "French") to the two-letter
//! codes the translation endpoint expects. Lookups are case-insensitive.

/// Supported display languages as `(name, code)` pairs.
///
/// Names are stored lower-case; `language_code` folds its input before
/// matching so "Tamil", "TAMIL", and "tamil" all resolve.
pub static LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("arabic", "ar"),
    ("bengali", "bn"),
    ("bulgarian", "bg"),
    ("chinese (simplified)", "zh-cn"),
    ("chinese (traditional)", "zh-tw"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hungarian", "hu"),
    ("indonesian", "id"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("kannada", "kn"),
    ("korean", "ko"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("marathi", "mr"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia", "or"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("spanish", "es"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("vietnamese", "vi"),
];

/// Resolve a language name to its translation code.
pub fn language_code(name: &str) -> Option<&'static str> {
    let folded = name.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|(n, _)| *n == folded)
        .map(|(_, code)| *code)
}

/// Resolve a translation code back to its canonical language name.
pub fn language_name(code: &str) -> Option<&'static str> {
    let folded = code.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|(_, c)| *c == folded)
        .map(|(name, _)| *name)
}

/// Returns whether a language name is in the registry.
pub fn is_supported(name: &str) -> bool {
    language_code(name).is_some()
}
