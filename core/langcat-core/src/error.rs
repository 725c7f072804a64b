//! Error types for catalog construction and lookups

use std::fmt;

use thiserror::Error;

/// The three source tables a catalog is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Languages,
    SupportedAudioLanguages,
    AutogeneratedAudioLanguages,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Languages => "language",
            TableKind::SupportedAudioLanguages => "supported audio language",
            TableKind::AutogeneratedAudioLanguages => "autogenerated audio language",
        };
        f.write_str(name)
    }
}

/// Raised while building a catalog from defective static data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTableError {
    #[error("{table} table entry {index} is missing required field `{field}`")]
    MissingField {
        table: TableKind,
        index: usize,
        field: &'static str,
    },

    #[error("{table} table entry {index} repeats {field} `{value}`")]
    DuplicateKey {
        table: TableKind,
        index: usize,
        field: &'static str,
        value: String,
    },
}

impl MalformedTableError {
    pub fn table(&self) -> TableKind {
        match self {
            MalformedTableError::MissingField { table, .. }
            | MalformedTableError::DuplicateKey { table, .. } => *table,
        }
    }
}

/// A lookup was given a code that is not a supported audio language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown audio language code: {code}")]
pub struct UnknownLanguageCodeError {
    pub code: String,
}

impl UnknownLanguageCodeError {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
