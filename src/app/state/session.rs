/// Angemeldeter Benutzer der lokalen Sitzung
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub username: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn `username` der lokal angemeldete Benutzer ist.
    ///
    /// Ohne Anmeldung gehört keine fremde Nachricht zur Sitzung.
    pub fn is_local_user(&self, username: &str) -> bool {
        self.username.as_deref() == Some(username)
    }
}
