//! langcat-core: a read-only catalog of written languages and their audio variants
//!
//! The catalog is built once from three static tables and then answers
//! lookups for the rest of the process:
//!
//! - the full language table (`{ code, description }`), exposed as short
//!   `{ id, text }` entries for language pickers
//! - the supported audio-language table, with each audio language's
//!   description and the written languages it relates to
//! - the autogenerated audio-language table, describing voices produced by
//!   speech synthesis for a given written language
//!
//! Whether autogenerated audio is actually usable also depends on the host,
//! which is why a [`SpeechSynthesisProbe`](probe::SpeechSynthesisProbe) is
//! handed to the catalog and consulted on every such query.
//!
//! ```rust
//! use langcat_core::catalog::LanguageCatalog;
//! use langcat_core::probe::StaticProbe;
//! use langcat_core::tables::{
//!     AudioLanguageRecord, AutogeneratedAudioLanguageRecord, LanguageRecord, SourceTables,
//! };
//!
//! let tables = SourceTables::new(
//!     vec![
//!         LanguageRecord::new("en", "English"),
//!         LanguageRecord::new("hi", "हिन्दी (Hindi)"),
//!     ],
//!     vec![
//!         AudioLanguageRecord::new("en", "English", ["en"]),
//!         AudioLanguageRecord::new("hi-en", "Hinglish", ["hi", "en"]),
//!     ],
//!     vec![AutogeneratedAudioLanguageRecord::new("en-auto", "en")],
//! );
//!
//! let catalog = LanguageCatalog::new(&tables, StaticProbe(true))?;
//!
//! assert_eq!(catalog.language_ids_and_texts()[1].text, "हिन्दी");
//! assert_eq!(catalog.complement_audio_language_codes(["en"]), ["hi-en"]);
//! assert!(catalog.supports_autogenerated_audio("en"));
//! assert!(catalog.audio_language_description("fr").is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Tables can also be loaded from JSON with
//! [`SourceTables::load`](tables::SourceTables::load); for a process-wide
//! instance see [`CatalogCell`](shared::CatalogCell).

pub mod catalog;
pub mod error;
pub mod model;
pub mod probe;
pub mod query;
pub mod shared;
pub mod tables;
