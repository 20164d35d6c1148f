//! New playlist form.

use spofity_forms::{Rule, ValidatedField};

use super::library::Playlist;

pub const NAME_REQUIRED: &str = "El nombre de la playlist es requerido";
pub const NAME_MAX_CHARS: usize = 100;

pub struct CreatePlaylistScreen {
    name: ValidatedField,
    description: ValidatedField,
}

impl Default for CreatePlaylistScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePlaylistScreen {
    pub fn new() -> Self {
        Self {
            name: ValidatedField::builder("Nombre de la playlist")
                .placeholder("Mi playlist")
                .max_length(NAME_MAX_CHARS)
                .rule(Rule::required(NAME_REQUIRED))
                .rule(Rule::max_length(
                    NAME_MAX_CHARS,
                    format!("Máximo {} caracteres", NAME_MAX_CHARS),
                ))
                .build(),
            description: ValidatedField::builder("Descripción")
                .placeholder("Opcional")
                .build(),
        }
    }

    pub fn name(&self) -> &ValidatedField {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut ValidatedField {
        &mut self.name
    }

    pub fn description_mut(&mut self) -> &mut ValidatedField {
        &mut self.description
    }

    /// Builds the playlist, or reveals the name error.
    ///
    /// The form is cleared after a successful create.
    pub fn create(&mut self, id: u32) -> Option<Playlist> {
        self.name.set_force_show_error(true);
        if self.name.display_error().is_some() {
            return None;
        }

        let description = self.description.value();
        let playlist = Playlist::new(
            id,
            self.name.value().trim(),
            Some(description.trim()).filter(|d| !d.is_empty()),
        );
        log::info!("created playlist {} '{}'", playlist.id, playlist.name);

        *self = Self::new();
        Some(playlist)
    }
}
