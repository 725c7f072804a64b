//! Raw source tables and their typed parsing
//!
//! The records here mirror the static constant tables the catalog is built
//! from. Every field is optional at this layer; the `parse` methods enforce
//! the required ones and turn the record into a typed model value.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{MalformedTableError, TableKind};
use crate::model::{short_language_description, AudioLanguage, AutogeneratedAudioLanguage, LanguageEntry};

/// `{ code, description }` row of the full language table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageRecord {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl LanguageRecord {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            description: Some(description.into()),
        }
    }

    pub fn parse(&self, index: usize) -> Result<LanguageEntry, MalformedTableError> {
        let table = TableKind::Languages;
        let id = required(&self.code, table, index, "code")?;
        let description = required(&self.description, table, index, "description")?;
        Ok(LanguageEntry {
            id: id.to_string(),
            text: short_language_description(description).to_string(),
        })
    }
}

/// `{ id, description, related_languages }` row of the supported audio table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AudioLanguageRecord {
    pub id: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub related_languages: Vec<String>,
}

impl AudioLanguageRecord {
    pub fn new<I, S>(id: impl Into<String>, description: impl Into<String>, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Some(id.into()),
            description: Some(description.into()),
            related_languages: related.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse(&self, index: usize) -> Result<AudioLanguage, MalformedTableError> {
        let table = TableKind::SupportedAudioLanguages;
        let id = required(&self.id, table, index, "id")?;
        let description = required(&self.description, table, index, "description")?;
        Ok(AudioLanguage {
            id: id.to_string(),
            description: description.to_string(),
            related_languages: self.related_languages.clone(),
        })
    }
}

/// Row of the autogenerated audio table; only `id` and
/// `exploration_language` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AutogeneratedAudioLanguageRecord {
    pub id: Option<String>,
    pub description: Option<String>,
    pub exploration_language: Option<String>,
    pub speech_synthesis_code: Option<String>,
    pub speech_synthesis_code_mobile: Option<String>,
}

impl AutogeneratedAudioLanguageRecord {
    pub fn new(id: impl Into<String>, exploration_language: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            exploration_language: Some(exploration_language.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_speech_synthesis_codes(
        mut self,
        desktop: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        self.speech_synthesis_code = Some(desktop.into());
        self.speech_synthesis_code_mobile = Some(mobile.into());
        self
    }

    pub fn parse(&self, index: usize) -> Result<AutogeneratedAudioLanguage, MalformedTableError> {
        let table = TableKind::AutogeneratedAudioLanguages;
        let id = required(&self.id, table, index, "id")?;
        let exploration_language =
            required(&self.exploration_language, table, index, "exploration_language")?;
        Ok(AutogeneratedAudioLanguage {
            id: id.to_string(),
            description: self.description.clone().unwrap_or_default(),
            exploration_language: exploration_language.to_string(),
            speech_synthesis_code: self.speech_synthesis_code.clone(),
            speech_synthesis_code_mobile: self.speech_synthesis_code_mobile.clone(),
        })
    }
}

fn required<'a>(
    value: &'a Option<String>,
    table: TableKind,
    index: usize,
    field: &'static str,
) -> Result<&'a str, MalformedTableError> {
    value
        .as_deref()
        .ok_or(MalformedTableError::MissingField { table, index, field })
}

/// The three input tables, in their source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SourceTables {
    #[serde(default, alias = "ALL_LANGUAGE_CODES")]
    pub languages: Vec<LanguageRecord>,
    #[serde(default, alias = "SUPPORTED_AUDIO_LANGUAGES")]
    pub supported_audio_languages: Vec<AudioLanguageRecord>,
    #[serde(default, alias = "AUTOGENERATED_AUDIO_LANGUAGES")]
    pub autogenerated_audio_languages: Vec<AutogeneratedAudioLanguageRecord>,
}

impl SourceTables {
    pub fn new(
        languages: Vec<LanguageRecord>,
        supported_audio_languages: Vec<AudioLanguageRecord>,
        autogenerated_audio_languages: Vec<AutogeneratedAudioLanguageRecord>,
    ) -> Self {
        Self {
            languages,
            supported_audio_languages,
            autogenerated_audio_languages,
        }
    }

    /// Parse a JSON bundle holding all three tables.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parsing language tables")
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).context("parsing language tables")
    }

    /// Read a JSON bundle from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading language tables {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("parsing language tables {}", path.display()))
    }
}
