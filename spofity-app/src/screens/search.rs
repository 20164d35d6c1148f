//! Catalog search.

use spofity_lib::catalog::{CatalogItem, Genre, SearchQuery, sample_items};

pub struct SearchScreen {
    items: Vec<CatalogItem>,
    query: SearchQuery,
}

impl Default for SearchScreen {
    fn default() -> Self {
        Self::new(sample_items())
    }
}

impl SearchScreen {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            query: SearchQuery::default(),
        }
    }

    pub fn genres(&self) -> &'static [Genre] {
        &Genre::ALL
    }

    pub fn selected_genre(&self) -> Option<Genre> {
        self.query.genre
    }

    pub fn text(&self) -> &str {
        &self.query.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    /// Tapping the active chip deselects it.
    pub fn toggle_genre(&mut self, genre: Genre) {
        self.query.toggle_genre(genre);
    }

    pub fn results(&self) -> Vec<&CatalogItem> {
        self.query.apply(&self.items)
    }
}
