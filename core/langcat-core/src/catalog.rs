//! The language catalog: indices built once, queried many times

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{MalformedTableError, TableKind, UnknownLanguageCodeError};
use crate::model::{AudioLanguage, AutogeneratedAudioLanguage, LanguageEntry};
use crate::probe::{SpeechSynthesisProbe, StaticProbe};
use crate::query::LanguageQuery;
use crate::tables::SourceTables;

/// What to do when a keyed table repeats a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail construction with [`MalformedTableError::DuplicateKey`].
    #[default]
    Reject,
    /// Later rows replace earlier ones in the lookup maps.
    LastWriteWins,
}

/// Construction-time settings for [`LanguageCatalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub duplicate_policy: DuplicatePolicy,
}

/// Read-only catalog of written languages and their audio variants.
///
/// All indices are built by the constructor; nothing is recomputed or
/// mutated afterwards, so a shared reference can be handed to any number
/// of readers.
#[derive(Debug, Clone)]
pub struct LanguageCatalog<P = StaticProbe> {
    languages: Vec<LanguageEntry>,
    audio_language_codes: Vec<String>,
    supported_audio_languages: HashMap<String, AudioLanguage>,
    autogenerated_by_exploration_code: HashMap<String, AutogeneratedAudioLanguage>,
    autogenerated_by_autogenerated_code: HashMap<String, AutogeneratedAudioLanguage>,
    audio_codes_by_related_language: HashMap<String, Vec<String>>,
    probe: P,
}

impl<P: SpeechSynthesisProbe> LanguageCatalog<P> {
    pub fn new(tables: &SourceTables, probe: P) -> Result<Self, MalformedTableError> {
        Self::with_options(tables, probe, &CatalogOptions::default())
    }

    pub fn with_options(
        tables: &SourceTables,
        probe: P,
        opts: &CatalogOptions,
    ) -> Result<Self, MalformedTableError> {
        let languages = tables
            .languages
            .iter()
            .enumerate()
            .map(|(index, record)| record.parse(index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut audio_language_codes = Vec::with_capacity(tables.supported_audio_languages.len());
        let mut supported_audio_languages = HashMap::new();
        for (index, record) in tables.supported_audio_languages.iter().enumerate() {
            let audio = record.parse(index)?;
            if supported_audio_languages.contains_key(&audio.id) {
                on_duplicate(
                    opts.duplicate_policy,
                    TableKind::SupportedAudioLanguages,
                    index,
                    "id",
                    &audio.id,
                )?;
            }
            audio_language_codes.push(audio.id.clone());
            supported_audio_languages.insert(audio.id.clone(), audio);
        }

        let mut autogenerated_by_exploration_code = HashMap::new();
        let mut autogenerated_by_autogenerated_code = HashMap::new();
        for (index, record) in tables.autogenerated_audio_languages.iter().enumerate() {
            let auto = record.parse(index)?;
            if autogenerated_by_autogenerated_code.contains_key(&auto.id) {
                on_duplicate(
                    opts.duplicate_policy,
                    TableKind::AutogeneratedAudioLanguages,
                    index,
                    "id",
                    &auto.id,
                )?;
            }
            if autogenerated_by_exploration_code.contains_key(&auto.exploration_language) {
                on_duplicate(
                    opts.duplicate_policy,
                    TableKind::AutogeneratedAudioLanguages,
                    index,
                    "exploration_language",
                    &auto.exploration_language,
                )?;
            }
            autogenerated_by_exploration_code.insert(auto.exploration_language.clone(), auto.clone());
            autogenerated_by_autogenerated_code.insert(auto.id.clone(), auto);
        }

        let audio_codes_by_related_language =
            index_related_languages(&audio_language_codes, &supported_audio_languages);

        debug!(
            languages = languages.len(),
            audio_languages = audio_language_codes.len(),
            autogenerated_audio_languages = autogenerated_by_autogenerated_code.len(),
            "built language catalog"
        );

        Ok(Self {
            languages,
            audio_language_codes,
            supported_audio_languages,
            autogenerated_by_exploration_code,
            autogenerated_by_autogenerated_code,
            audio_codes_by_related_language,
            probe,
        })
    }

    /// Every written language with its short description, in table order.
    pub fn language_ids_and_texts(&self) -> &[LanguageEntry] {
        &self.languages
    }

    pub fn audio_languages_count(&self) -> usize {
        self.audio_language_codes.len()
    }

    /// Supported audio-language codes in table order.
    pub fn all_audio_language_codes(&self) -> &[String] {
        &self.audio_language_codes
    }

    pub fn audio_language_description(&self, code: &str) -> Result<&str, UnknownLanguageCodeError> {
        self.known_audio_language(code)
            .map(|audio| audio.description.as_str())
    }

    /// Supported audio-language codes that are *not* in `codes`.
    ///
    /// The result follows the catalog's own order; `codes` is only used as
    /// a membership set, so its order, duplicates and unknown members have
    /// no effect.
    pub fn complement_audio_language_codes<I>(&self, codes: I) -> Vec<&str>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let excluded: HashSet<String> = codes
            .into_iter()
            .map(|code| code.as_ref().to_owned())
            .collect();

        self.audio_language_codes
            .iter()
            .filter(|code| !excluded.contains(code.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn language_codes_related_to_audio_language_code(
        &self,
        code: &str,
    ) -> Result<&[String], UnknownLanguageCodeError> {
        self.known_audio_language(code)
            .map(|audio| audio.related_languages.as_slice())
    }

    /// True when speech synthesis is available *and* the written language
    /// has an autogenerated audio language.
    pub fn supports_autogenerated_audio(&self, exploration_language_code: &str) -> bool {
        // The probe goes first; the lookup only runs when it says yes.
        self.probe.supports_speech_synthesis()
            && self
                .autogenerated_by_exploration_code
                .contains_key(exploration_language_code)
    }

    pub fn is_autogenerated_audio_language(&self, code: &str) -> bool {
        self.autogenerated_by_autogenerated_code.contains_key(code)
    }

    /// Autogenerated audio language registered for a written language.
    ///
    /// Unlike the description lookups this never fails; callers that did
    /// not check [`supports_autogenerated_audio`](Self::supports_autogenerated_audio)
    /// first simply get `None`.
    pub fn autogenerated_audio_language(
        &self,
        exploration_language_code: &str,
    ) -> Option<&AutogeneratedAudioLanguage> {
        self.autogenerated_by_exploration_code
            .get(exploration_language_code)
    }

    pub fn autogenerated_audio_language_by_code(
        &self,
        code: &str,
    ) -> Option<&AutogeneratedAudioLanguage> {
        self.autogenerated_by_autogenerated_code.get(code)
    }

    pub fn audio_language(&self, code: &str) -> Option<&AudioLanguage> {
        self.supported_audio_languages.get(code)
    }

    /// Supported audio languages in table order.
    pub fn audio_languages(&self) -> impl Iterator<Item = &AudioLanguage> + '_ {
        self.audio_language_codes
            .iter()
            .filter_map(|code| self.supported_audio_languages.get(code))
    }

    /// Audio languages whose related languages include `language_code`.
    pub fn audio_language_codes_for_language(&self, language_code: &str) -> &[String] {
        self.audio_codes_by_related_language
            .get(language_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn language_entry(&self, code: &str) -> Option<&LanguageEntry> {
        self.languages.iter().find(|entry| entry.id == code)
    }

    /// Written languages matching `query`, in table order.
    pub fn filter_languages(&self, query: &LanguageQuery) -> Vec<&LanguageEntry> {
        self.languages
            .iter()
            .filter(|entry| query.matches(entry, self))
            .collect()
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    fn known_audio_language(&self, code: &str) -> Result<&AudioLanguage, UnknownLanguageCodeError> {
        self.supported_audio_languages
            .get(code)
            .ok_or_else(|| UnknownLanguageCodeError::new(code))
    }
}

fn on_duplicate(
    policy: DuplicatePolicy,
    table: TableKind,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), MalformedTableError> {
    match policy {
        DuplicatePolicy::Reject => Err(MalformedTableError::DuplicateKey {
            table,
            index,
            field,
            value: value.to_string(),
        }),
        DuplicatePolicy::LastWriteWins => {
            warn!(%table, index, field, value, "duplicate key replaces earlier entry");
            Ok(())
        }
    }
}

fn index_related_languages(
    codes: &[String],
    audio_languages: &HashMap<String, AudioLanguage>,
) -> HashMap<String, Vec<String>> {
    let mut by_language: HashMap<String, Vec<String>> = HashMap::new();
    let mut seen = HashSet::new();

    for code in codes {
        // Repeated codes only survive under last-write-wins; index each once.
        if !seen.insert(code.as_str()) {
            continue;
        }
        let Some(audio) = audio_languages.get(code) else {
            continue;
        };
        for related in &audio.related_languages {
            let bucket = by_language.entry(related.clone()).or_default();
            if !bucket.contains(code) {
                bucket.push(code.clone());
            }
        }
    }

    by_language
}
