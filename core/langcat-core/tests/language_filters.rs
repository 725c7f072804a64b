use regex::Regex;

use langcat_core::catalog::LanguageCatalog;
use langcat_core::probe::StaticProbe;
use langcat_core::query::LanguageQuery;
use langcat_core::tables::SourceTables;

fn fixture_catalog(speech: bool) -> LanguageCatalog {
    let tables = SourceTables::from_json_str(include_str!("fixtures/tables.json")).expect("fixture");
    LanguageCatalog::new(&tables, StaticProbe(speech)).expect("catalog")
}

fn ids(entries: &[&langcat_core::model::LanguageEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.id.clone()).collect()
}

#[test]
fn empty_query_returns_everything_in_order() {
    let catalog = fixture_catalog(false);
    let all = catalog.filter_languages(&LanguageQuery::new());

    assert_eq!(all.len(), catalog.language_ids_and_texts().len());
    assert_eq!(all[0].id, "en");
    assert_eq!(all[all.len() - 1].id, "sw");
}

#[test]
fn audio_filter_uses_related_languages() {
    let catalog = fixture_catalog(false);
    let query = LanguageQuery::new().require_audio(true);

    assert_eq!(
        ids(&catalog.filter_languages(&query)),
        vec!["en", "ar", "bn", "zh", "hi", "es", "pt"]
    );
}

#[test]
fn autogenerated_filter_respects_probe() {
    let query = LanguageQuery::new().require_autogenerated_audio(true);

    assert_eq!(ids(&fixture_catalog(true).filter_languages(&query)), vec!["en"]);
    assert!(fixture_catalog(false).filter_languages(&query).is_empty());
}

#[test]
fn codes_and_name_patterns_combine() {
    let catalog = fixture_catalog(false);
    let codes = vec!["en".to_string(), "fi".to_string(), "hi".to_string()];
    let patterns = vec![Regex::new("^suomi$").unwrap(), Regex::new("^en$").unwrap()];

    let query = LanguageQuery::new().with_codes(codes).with_name_patterns(patterns);

    // "en" matches by id, "fi" by its short text, "hi" by neither.
    assert_eq!(ids(&catalog.filter_languages(&query)), vec!["en", "fi"]);
}

#[test]
fn name_patterns_see_short_text_only() {
    let catalog = fixture_catalog(false);
    let patterns = vec![Regex::new("Finnish").unwrap()];
    let query = LanguageQuery::new().with_name_patterns(patterns);

    assert!(catalog.filter_languages(&query).is_empty());
}
