//! Local profile editor.

use serde::{Deserialize, Serialize};
use spofity_forms::{KeyboardKind, Rule, ValidatedField};

use super::rules;
use crate::settings::{SettingKey, SettingsError, SettingsProvider};

/// Longest biography accepted.
pub const BIO_MAX_CHARS: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Masculino,
    Femenino,
    Otro,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculino, Gender::Femenino, Gender::Otro];
}

/// What gets saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub alias: String,
    pub bio: String,
    pub email: String,
    pub birth_date: String,
    pub country: String,
    pub gender: Option<Gender>,
}

pub struct EditProfileScreen {
    name: ValidatedField,
    alias: ValidatedField,
    bio: ValidatedField,
    email: ValidatedField,
    birth_date: ValidatedField,
    country: ValidatedField,
    gender: Option<Gender>,
    saved: bool,
}

impl Default for EditProfileScreen {
    fn default() -> Self {
        Self::from_draft(ProfileDraft::default())
    }
}

impl EditProfileScreen {
    pub fn from_draft(draft: ProfileDraft) -> Self {
        let plain = |label: &str, value: String, placeholder: &str| {
            ValidatedField::builder(label)
                .initial_value(value)
                .placeholder(placeholder)
                .build()
        };

        Self {
            name: plain("Nombre Completo", draft.name, "Ingresa tu nombre"),
            alias: plain("Alias / Usuario", draft.alias, "Ingresa tu usuario"),
            bio: ValidatedField::builder("Biografía")
                .initial_value(draft.bio)
                .placeholder("Ingresa una breve biografía")
                .max_length(BIO_MAX_CHARS)
                .rule(Rule::max_length(
                    BIO_MAX_CHARS,
                    format!("Máximo {} caracteres", BIO_MAX_CHARS),
                ))
                .build(),
            email: ValidatedField::builder("Email")
                .initial_value(draft.email)
                .placeholder("spofity@example.com")
                .keyboard(KeyboardKind::Email)
                .rule(rules::optional(rules::email_format()))
                .build(),
            birth_date: plain("Fecha de Nacimiento", draft.birth_date, "XX/XX/XX"),
            country: plain("País", draft.country, "Ingresa tu país"),
            gender: draft.gender,
            saved: false,
        }
    }

    /// Loads the saved draft, or an empty one.
    pub async fn load(settings: &SettingsProvider) -> Result<Self, SettingsError> {
        let draft = settings.get_or(SettingKey::ProfileDraft, ProfileDraft::default()).await?;
        Ok(Self::from_draft(draft))
    }

    pub fn name_mut(&mut self) -> &mut ValidatedField {
        &mut self.name
    }

    pub fn alias_mut(&mut self) -> &mut ValidatedField {
        &mut self.alias
    }

    pub fn email(&self) -> &ValidatedField {
        &self.email
    }

    pub fn email_mut(&mut self) -> &mut ValidatedField {
        &mut self.email
    }

    pub fn birth_date_mut(&mut self) -> &mut ValidatedField {
        &mut self.birth_date
    }

    pub fn country_mut(&mut self) -> &mut ValidatedField {
        &mut self.country
    }

    pub fn bio(&self) -> &ValidatedField {
        &self.bio
    }

    /// Sets the biography, cut to [`BIO_MAX_CHARS`].
    pub fn set_bio(&mut self, text: &str) {
        let clamped = self.bio.options().clamp(text).to_string();
        self.bio.set_value(clamped);
    }

    /// Counter shown under the biography, e.g. `42/150`.
    pub fn bio_counter(&self) -> String {
        format!("{}/{}", self.bio.value().chars().count(), BIO_MAX_CHARS)
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.value(),
            alias: self.alias.value(),
            bio: self.bio.value(),
            email: self.email.value(),
            birth_date: self.birth_date.value(),
            country: self.country.value(),
            gender: self.gender,
        }
    }

    /// Saves the draft locally. Refuses while the email is malformed.
    pub async fn save(&mut self, settings: &SettingsProvider) -> Result<bool, SettingsError> {
        self.email.set_force_show_error(true);
        self.bio.set_force_show_error(true);
        if self.email.display_error().is_some() || self.bio.display_error().is_some() {
            self.saved = false;
            return Ok(false);
        }

        settings.set(SettingKey::ProfileDraft, &self.draft()).await?;
        log::info!("profile draft saved");
        self.saved = true;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bio_is_clamped_and_counted() {
        let mut screen = EditProfileScreen::default();
        screen.set_bio(&"ñ".repeat(200));
        assert_eq!(screen.bio().value().chars().count(), BIO_MAX_CHARS);
        assert_eq!(screen.bio_counter(), "150/150");

        screen.set_bio("hola");
        assert_eq!(screen.bio_counter(), "4/150");
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let settings = SettingsProvider::in_memory();
        let mut screen = EditProfileScreen::default();
        screen.name_mut().set_value("Ana Pérez");
        screen.select_gender(Gender::Femenino);
        assert!(screen.save(&settings).await.unwrap());

        let reloaded = EditProfileScreen::load(&settings).await.unwrap();
        assert_eq!(reloaded.draft().name, "Ana Pérez");
        assert_eq!(reloaded.gender(), Some(Gender::Femenino));
    }

    #[tokio::test]
    async fn test_bad_email_blocks_save() {
        let settings = SettingsProvider::in_memory();
        let mut screen = EditProfileScreen::default();
        screen.email_mut().set_value("ana@");
        assert!(!screen.save(&settings).await.unwrap());
        assert_eq!(screen.email().display_error(), Some(rules::EMAIL_INVALID));
        assert!(!screen.is_saved());
    }
}
