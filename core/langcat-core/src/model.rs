//! Typed catalog entries

/// A written language as shown in pickers: its code and a short description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub id: String,
    pub text: String,
}

/// A supported audio (voiceover) language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioLanguage {
    pub id: String,
    pub description: String,
    /// Written languages this audio language can accompany, in table order.
    pub related_languages: Vec<String>,
}

/// An audio language produced by speech synthesis from a written language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutogeneratedAudioLanguage {
    pub id: String,
    pub description: String,
    /// The written language whose text is read aloud.
    pub exploration_language: String,
    /// Voice code handed to desktop speech synthesizers, e.g. `en-GB`.
    pub speech_synthesis_code: Option<String>,
    /// Voice code handed to mobile speech synthesizers, e.g. `en_US`.
    pub speech_synthesis_code_mobile: Option<String>,
}

/// Strip a trailing parenthetical from a language description.
///
/// Everything from the first `" ("` onwards is dropped, so
/// `"हिन्दी (Hindi)"` becomes `"हिन्दी"`; descriptions without it are
/// returned unchanged.
pub fn short_language_description(full: &str) -> &str {
    match full.find(" (") {
        Some(idx) => &full[..idx],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_parenthetical_suffix() {
        assert_eq!(short_language_description("English (en)"), "English");
        assert_eq!(short_language_description("Finnish"), "Finnish");
        assert_eq!(short_language_description("中文 (Chinese)"), "中文");
    }

    #[test]
    fn only_first_parenthetical_counts() {
        assert_eq!(
            short_language_description("Portuguese (Brazil) (pt-BR)"),
            "Portuguese"
        );
        // No leading space, so nothing to strip.
        assert_eq!(short_language_description("Kurdish(Sorani)"), "Kurdish(Sorani)");
        assert_eq!(short_language_description(" (x)"), "");
    }
}
