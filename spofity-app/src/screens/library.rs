//! The user's playlists.

use chrono::{DateTime, Utc};

use super::create_playlist::CreatePlaylistScreen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    pub fn new(id: u32, name: &str, description: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: Utc::now(),
        }
    }
}

/// In-memory library. Newest playlist first.
#[derive(Debug, Default)]
pub struct LibraryScreen {
    playlists: Vec<Playlist>,
    next_id: u32,
}

impl LibraryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Runs the create form and adds the result.
    pub fn create_from(&mut self, form: &mut CreatePlaylistScreen) -> Option<&Playlist> {
        let playlist = form.create(self.next_id + 1)?;
        self.next_id += 1;
        self.playlists.insert(0, playlist);
        self.playlists.first()
    }

    pub fn remove(&mut self, id: u32) -> Option<Playlist> {
        let index = self.playlists.iter().position(|p| p.id == id)?;
        Some(self.playlists.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_remove() {
        let mut library = LibraryScreen::new();
        let mut form = CreatePlaylistScreen::new();

        assert!(library.create_from(&mut form).is_none());
        assert!(library.is_empty());

        form.name_mut().set_value("Uno");
        library.create_from(&mut form);
        form.name_mut().set_value("Dos");
        library.create_from(&mut form);

        let names: Vec<&str> = library.playlists().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Dos", "Uno"]);
        assert_eq!(library.playlists()[0].id, 2);

        assert_eq!(library.remove(1).map(|p| p.name), Some("Uno".to_string()));
        assert!(library.remove(1).is_none());
    }
}
