//! Genre toggle and fuzzy text search over catalog items.

use nucleo_matcher::Config;
use nucleo_matcher::Matcher;
use nucleo_matcher::Utf32Str;
use nucleo_matcher::pattern::AtomKind;
use nucleo_matcher::pattern::CaseMatching;
use nucleo_matcher::pattern::Normalization;
use nucleo_matcher::pattern::Pattern;

use super::Genre;

/// Something that shows up in search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub genre: Option<Genre>,
}

impl CatalogItem {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        genre: Option<Genre>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            genre,
        }
    }

    /// Text the query is matched against.
    fn haystack(&self) -> String {
        format!("{} {}", self.title, self.subtitle)
    }
}

/// Items shown before any backend catalog exists.
pub fn sample_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1, "Canción ejemplo", "Artista A", Some(Genre::Pop)),
        CatalogItem::new(2, "Playlist ejemplo", "Playlist curada", Some(Genre::Indie)),
    ]
}

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score (highest first). Ties keep input order.
/// A blank query returns all items with score 0.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    if query.trim().is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // stable, so equal scores keep catalog order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Free text plus an optional genre chip.
///
/// # Example
///
/// ```
/// use spofity_lib::catalog::{Genre, SearchQuery, sample_items};
///
/// let mut query = SearchQuery::default();
/// query.toggle_genre(Genre::Pop);
/// let items = sample_items();
/// let hits = query.apply(&items);
/// assert_eq!(hits.len(), 1);
///
/// query.toggle_genre(Genre::Pop);
/// assert_eq!(query.genre, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub genre: Option<Genre>,
}

impl SearchQuery {
    /// Selects `genre`, or clears it if it is already selected.
    pub fn toggle_genre(&mut self, genre: Genre) {
        self.genre = if self.genre == Some(genre) {
            None
        } else {
            Some(genre)
        };
    }

    /// Filters by genre first, then by fuzzy text match.
    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        let candidates: Vec<&CatalogItem> = items
            .iter()
            .filter(|item| self.genre.is_none() || item.genre == self.genre)
            .collect();
        let labels: Vec<String> = candidates.iter().map(|item| item.haystack()).collect();

        fuzzy_filter(&self.text, &labels)
            .into_iter()
            .map(|m| candidates[m.index])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_query_keeps_order() {
        let items = labels(&["b", "a", "c"]);
        let matches = fuzzy_filter("  ", &items);
        let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_fuzzy_is_case_insensitive() {
        let items = labels(&["Canción ejemplo", "Playlist ejemplo"]);
        let matches = fuzzy_filter("PLAY", &items);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 1);
    }

    #[test]
    fn test_no_match() {
        let items = labels(&["Canción ejemplo"]);
        assert!(fuzzy_filter("zzz", &items).is_empty());
    }

    #[test]
    fn test_better_match_first() {
        let items = labels(&["a_p_p_l_e", "apple"]);
        let matches = fuzzy_filter("apple", &items);
        assert_eq!(matches[0].index, 1);
    }

    #[test]
    fn test_genre_then_text() {
        let items = vec![
            CatalogItem::new(1, "Rock clásico", "Varios", Some(Genre::Rock)),
            CatalogItem::new(2, "Pop hits", "Varios", Some(Genre::Pop)),
            CatalogItem::new(3, "Rock nacional", "Varios", Some(Genre::Rock)),
        ];
        let query = SearchQuery {
            text: "nacional".into(),
            genre: Some(Genre::Rock),
        };
        let hits: Vec<u32> = query.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(hits, vec![3]);

        let query = SearchQuery {
            text: String::new(),
            genre: Some(Genre::Rock),
        };
        let hits: Vec<u32> = query.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(hits, vec![1, 3]);
    }

    #[test]
    fn test_toggle_switches_between_genres() {
        let mut query = SearchQuery::default();
        query.toggle_genre(Genre::Rock);
        query.toggle_genre(Genre::Indie);
        assert_eq!(query.genre, Some(Genre::Indie));
    }
}
