//! Whole-file JSON persistence for the page collection

use crate::domain::Page;
use crate::error::{NonepadError, Result};
use std::fs;
use std::path::PathBuf;

/// File holding the serialized page collection
const PAGES_FILE: &str = "pages.json";

/// JSON-file-backed store for the page collection.
///
/// Every mutation is a full read-modify-write cycle: load the whole
/// collection, edit it in memory, rewrite the whole file. The file is the
/// sole durable truth; vectors returned by [`PageStore::list`] are
/// disposable copies that only persist through [`PageStore::replace_all`].
///
/// Nothing here locks the backing file. Two writers racing each other end
/// with whichever overwrite finishes last; this store assumes a single
/// interactive caller.
#[derive(Debug, Clone)]
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        PageStore { data_dir }
    }

    /// Path of the backing file
    pub fn pages_path(&self) -> PathBuf {
        self.data_dir.join(PAGES_FILE)
    }

    /// Load the full page collection in stored order.
    ///
    /// A missing file is an empty collection, not an error.
    pub fn list(&self) -> Result<Vec<Page>> {
        let path = self.pages_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&path)?;
        let pages = serde_json::from_str(&data)?;
        Ok(pages)
    }

    /// Serialize the given collection and overwrite the backing file in
    /// full, creating the data directory first if needed.
    ///
    /// This is the only persistence primitive; every mutating operation
    /// funnels through it.
    pub fn replace_all(&self, pages: &[Page]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let data = serde_json::to_string(pages)?;
        fs::write(self.pages_path(), data)?;
        Ok(())
    }

    /// Create a page with the given title, append it to the collection,
    /// and persist. Returns the created page.
    pub fn create(&self, title: &str) -> Result<Page> {
        let page = Page::new(title);

        let mut pages = self.list()?;
        pages.push(page.clone());
        self.replace_all(&pages)?;

        Ok(page)
    }

    /// Overwrite a page's title and content, refreshing its update
    /// timestamp. Unknown ids fail before anything is written.
    pub fn update(&self, id: &str, title: &str, content: &str) -> Result<()> {
        let mut pages = self.list()?;

        let page = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| NonepadError::PageNotFound(id.to_string()))?;
        page.update(title, content);

        self.replace_all(&pages)
    }

    /// Remove the page with the given id, preserving the relative order of
    /// the rest. Unknown ids fail before anything is written.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut pages = self.list()?;

        let index = pages
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| NonepadError::PageNotFound(id.to_string()))?;
        pages.remove(index);

        self.replace_all(&pages)
    }
}
