//! # Session State Machine
//!
//! Governs the authentication phase: `Unauthenticated` until a login
//! or registration action succeeds, then `Authenticated(role)` for the
//! rest of the process lifetime (or until an explicit logout).
//!
//! Login is demo semantics by contract: any non-empty email/password
//! pair succeeds and assigns the default role. This is a stand-in for
//! real credential verification and must stay that way until a real
//! auth backend is substituted at the app boundary.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// The two dashboard roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Gamified learning dashboard.
    Student,
    /// Analytics and content-management dashboard.
    Teacher,
}

/// Role assigned by a plain login, where no role is known.
pub const DEFAULT_LOGIN_ROLE: Role = Role::Student;

/// Registration form fields, validated as a unit.
///
/// All five fields must be truthy for [`Session::register`] to
/// transition; a failed validation leaves the session untouched.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub terms_accepted: bool,
}

impl Registration {
    /// Check all field requirements, reporting the first missing one.
    fn validate(&self) -> Result<Role, CoreError> {
        if self.username.trim().is_empty() {
            return Err(CoreError::missing_field("username"));
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::missing_field("email"));
        }
        if self.password.is_empty() {
            return Err(CoreError::missing_field("password"));
        }
        let Some(role) = self.role else {
            return Err(CoreError::missing_field("role"));
        };
        if !self.terms_accepted {
            return Err(CoreError::missing_field("terms acceptance"));
        }
        Ok(role)
    }
}

/// The session: authentication flag plus assigned role.
///
/// Created unauthenticated at app start. Mutated only by a successful
/// [`Session::login`] or [`Session::register`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    role: Option<Role>,
}

impl Session {
    /// A fresh, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self { role: None }
    }

    /// True once a login or registration has succeeded.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// The authenticated role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Log in with email and password.
    ///
    /// Both fields must be non-empty; the login then always succeeds
    /// and assigns [`DEFAULT_LOGIN_ROLE`] (demo contract).
    pub fn login(&mut self, email: &str, password: &str) -> Result<Role, CoreError> {
        if email.trim().is_empty() {
            return Err(CoreError::missing_field("email"));
        }
        if password.is_empty() {
            return Err(CoreError::missing_field("password"));
        }
        self.role = Some(DEFAULT_LOGIN_ROLE);
        Ok(DEFAULT_LOGIN_ROLE)
    }

    /// Register a new account and log in as the chosen role.
    ///
    /// Requires every registration field; on any missing field the
    /// session state is unchanged.
    pub fn register(&mut self, form: &Registration) -> Result<Role, CoreError> {
        let role = form.validate()?;
        self.role = Some(role);
        Ok(role)
    }

    /// Drop authentication and return to the login screen.
    pub fn logout(&mut self) {
        self.role = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
