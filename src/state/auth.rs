#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Nothing here survives a page reload; the backend issues no session the
/// client could restore, so a fresh load always starts signed out.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Record a successful sign-in.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Clear the session on logout.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Display name for greetings, falling back when signed out.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| "there".to_owned(), |u| u.name.clone())
    }

    /// Uppercase initials for the avatar, one letter per name part.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Email of the signed-in user, empty when signed out.
    #[must_use]
    pub fn email(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(String::new, |u| u.email.clone())
    }
}
