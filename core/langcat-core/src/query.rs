//! Language filters

use regex::Regex;

use crate::catalog::LanguageCatalog;
use crate::model::LanguageEntry;
use crate::probe::SpeechSynthesisProbe;

#[derive(Debug, Clone, Default)]
pub struct LanguageQuery {
    codes: Vec<String>,
    name_patterns: Vec<Regex>,
    audio_only: bool,
    autogenerated_audio_only: bool,
}

impl LanguageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codes(mut self, codes: Vec<String>) -> Self {
        self.codes = codes;
        self
    }

    pub fn with_name_patterns(mut self, patterns: Vec<Regex>) -> Self {
        self.name_patterns = patterns;
        self
    }

    /// Keep only languages that some supported audio language relates to.
    pub fn require_audio(mut self, yes: bool) -> Self {
        self.audio_only = yes;
        self
    }

    /// Keep only languages that can be read aloud by speech synthesis right now.
    pub fn require_autogenerated_audio(mut self, yes: bool) -> Self {
        self.autogenerated_audio_only = yes;
        self
    }

    /// Check whether a language entry satisfies every filter of the query.
    pub fn matches<P: SpeechSynthesisProbe>(
        &self,
        entry: &LanguageEntry,
        catalog: &LanguageCatalog<P>,
    ) -> bool {
        if !self.codes.is_empty() && !self.codes.iter().any(|code| *code == entry.id) {
            return false;
        }

        if !self.name_patterns.is_empty() {
            let matched = self
                .name_patterns
                .iter()
                .any(|re| re.is_match(&entry.text) || re.is_match(&entry.id));
            if !matched {
                return false;
            }
        }

        if self.audio_only && catalog.audio_language_codes_for_language(&entry.id).is_empty() {
            return false;
        }

        if self.autogenerated_audio_only && !catalog.supports_autogenerated_audio(&entry.id) {
            return false;
        }

        true
    }
}
