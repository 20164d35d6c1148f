//! The keys this app stores.

use std::fmt;

/// A stored setting. Each variant maps to one row in the settings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// The JWT handed out by login or verification.
    SessionToken,
    /// Backend base URL.
    ApiUrl,
    /// Per-request timeout, in seconds.
    ApiTimeoutSecs,
    /// Unsaved edit-profile form.
    ProfileDraft,
    /// The subscription plan picked on the plan screen.
    AccountPlan,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::SessionToken,
        SettingKey::ApiUrl,
        SettingKey::ApiTimeoutSecs,
        SettingKey::ProfileDraft,
        SettingKey::AccountPlan,
    ];

    /// Name of the row in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::SessionToken => "session.token",
            SettingKey::ApiUrl => "api.url",
            SettingKey::ApiTimeoutSecs => "api.timeout_secs",
            SettingKey::ProfileDraft => "profile.draft",
            SettingKey::AccountPlan => "account.plan",
        }
    }

    /// Reverse of [`SettingKey::as_str`]. Rows written by other versions
    /// of the app come back as `None`.
    pub fn parse(name: &str) -> Option<SettingKey> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Whether the value belongs to the logged-in user rather than the
    /// device. These are dropped on logout.
    pub fn is_user_scoped(self) -> bool {
        matches!(
            self,
            SettingKey::SessionToken | SettingKey::ProfileDraft | SettingKey::AccountPlan
        )
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
