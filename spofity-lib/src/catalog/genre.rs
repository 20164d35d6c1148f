use serde::Deserialize;
use serde::Serialize;

/// Genre chips offered on the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Pop,
    Rock,
    Reggaeton,
    Indie,
    Electronica,
    Podcast,
}

impl Genre {
    /// All genres, in display order.
    pub const ALL: [Genre; 6] = [
        Genre::Pop,
        Genre::Rock,
        Genre::Reggaeton,
        Genre::Indie,
        Genre::Electronica,
        Genre::Podcast,
    ];

    /// Chip label.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::Reggaeton => "Reggaetón",
            Genre::Indie => "Indie",
            Genre::Electronica => "Electronica",
            Genre::Podcast => "Podcast",
        }
    }

    /// Looks a genre up by its label, ignoring case.
    pub fn from_label(label: &str) -> Option<Genre> {
        let label = label.trim().to_lowercase();
        Genre::ALL
            .into_iter()
            .find(|g| g.label().to_lowercase() == label)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_label(genre.label()), Some(genre));
        }
        assert_eq!(Genre::from_label("REGGAETÓN"), Some(Genre::Reggaeton));
        assert_eq!(Genre::from_label("jazz"), None);
    }
}
