//! Authentication
//!
//! Login goes through the `Authenticator` trait so the static credential
//! check can be swapped without touching the shell.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::LoginConfig;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingField,
    #[error("Invalid email or password")]
    InvalidCredentials,
}

pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Accepts exactly one configured email/password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAuthenticator {
    login: LoginConfig,
}

impl StaticAuthenticator {
    pub fn new(login: LoginConfig) -> Self {
        Self { login }
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        Self::new(LoginConfig::default())
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let email = credentials.email.trim();
        if email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingField);
        }
        if email != self.login.email || credentials.password != self.login.password {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Session {
            email: email.to_string(),
            name: self.login.display_name.clone(),
        })
    }
}

/// Session holder for the shell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn login(&mut self, auth: &impl Authenticator, credentials: &Credentials) -> Result<&Session, AuthError> {
        match auth.authenticate(credentials) {
            Ok(session) => {
                info!(email = %session.email, "login succeeded");
                Ok(&*self.session.insert(session))
            }
            Err(err) => {
                warn!(email = %credentials.email, %err, "login failed");
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(email = %session.email, "logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Sign-up form; a valid form only returns the user to the login page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let required = [
            ("Full name", &self.full_name),
            ("Email", &self.email),
            ("Password", &self.password),
            ("Confirm password", &self.confirm_password),
        ];
        if let Some((label, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(RegistrationError::MissingField(*label));
        }
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(())
    }
}
