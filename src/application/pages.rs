//! Page collection use cases

use crate::domain::Page;
use crate::error::{NonepadError, Result};
use crate::infrastructure::PageStore;

/// Use-case layer over the page store.
///
/// The store speaks in whole collections and full overwrites; this service
/// adds the lookup and merge steps callers actually want.
pub struct PageService {
    store: PageStore,
}

impl PageService {
    pub fn new(store: PageStore) -> Self {
        PageService { store }
    }

    /// All pages in stored order
    pub fn list(&self) -> Result<Vec<Page>> {
        self.store.list()
    }

    /// Create an empty page with the given title
    pub fn create(&self, title: &str) -> Result<Page> {
        self.store.create(title)
    }

    /// Find a single page by id
    pub fn get(&self, id: &str) -> Result<Page> {
        self.store
            .list()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| NonepadError::PageNotFound(id.to_string()))
    }

    /// Change a page's title, content, or both. Omitted fields keep their
    /// current value; omitting both is rejected before any file access.
    pub fn edit(&self, id: &str, title: Option<&str>, content: Option<&str>) -> Result<()> {
        if title.is_none() && content.is_none() {
            return Err(NonepadError::Config(
                "nothing to change: pass --title and/or --content".to_string(),
            ));
        }

        let current = self.get(id)?;
        let title = title.unwrap_or(&current.title);
        let content = content.unwrap_or(&current.content);

        self.store.update(id, title, content)
    }

    /// Remove a page by id
    pub fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(id)
    }
}
