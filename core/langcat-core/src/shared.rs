//! One-time initialisation of a process-wide catalog

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::catalog::LanguageCatalog;
use crate::probe::StaticProbe;

/// Holds a catalog built at most once, suitable for a `static`.
///
/// ```
/// use langcat_core::catalog::LanguageCatalog;
/// use langcat_core::probe::StaticProbe;
/// use langcat_core::shared::CatalogCell;
/// use langcat_core::tables::{AudioLanguageRecord, LanguageRecord, SourceTables};
///
/// static CATALOG: CatalogCell = CatalogCell::new();
///
/// let catalog = CATALOG.get_or_try_init(|| {
///     let tables = SourceTables::new(
///         vec![LanguageRecord::new("en", "English")],
///         vec![AudioLanguageRecord::new("en", "English", ["en"])],
///         Vec::new(),
///     );
///     LanguageCatalog::new(&tables, StaticProbe(false))
/// })?;
/// assert_eq!(catalog.audio_languages_count(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct CatalogCell<P = StaticProbe> {
    cell: OnceCell<LanguageCatalog<P>>,
}

impl<P> CatalogCell<P> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// The catalog, if it has been built.
    pub fn get(&self) -> Option<&LanguageCatalog<P>> {
        self.cell.get()
    }

    /// Return the catalog, building it with `build` on first use.
    ///
    /// `build` runs at most once per successful initialisation: racing
    /// callers block until the first build finishes and then share its
    /// result. A failed build leaves the cell empty.
    pub fn get_or_try_init<E, F>(&self, build: F) -> Result<&LanguageCatalog<P>, E>
    where
        F: FnOnce() -> Result<LanguageCatalog<P>, E>,
    {
        self.cell.get_or_try_init(|| {
            let catalog = build()?;
            debug!("initialised shared language catalog");
            Ok(catalog)
        })
    }
}

impl<P> Default for CatalogCell<P> {
    fn default() -> Self {
        Self::new()
    }
}
