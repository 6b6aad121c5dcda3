use std::fmt;

use chrono::{DateTime, Utc};

/// Administrative staff account as persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Staff {
    pub id: i32,
    pub name: String,
    /// Always lower-cased.
    pub email: String,
    /// Argon2id PHC string. Never leaves the service.
    pub password_digest: String,
    pub activated: bool,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Staff {
    /// Start an edit of this record. The password is left unset, so saving the
    /// draft keeps the current digest.
    pub fn to_draft(&self) -> StaffDraft {
        StaffDraft {
            id: Some(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            password: None,
            activated: self.activated,
            admin: self.admin,
        }
    }
}

impl fmt::Debug for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Staff")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("activated", &self.activated)
            .field("admin", &self.admin)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish_non_exhaustive()
    }
}

/// Candidate record handed to the save pipeline, carrying raw user input.
///
/// `id: None` creates a new staff; `Some(id)` updates an existing one.
/// An absent or empty `password` on update keeps the stored digest.
#[derive(Clone, Default)]
pub struct StaffDraft {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub activated: bool,
    pub admin: bool,
}

impl StaffDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    pub fn activated(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// The password to hash on save, if one was supplied.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

impl fmt::Debug for StaffDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffDraft")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("activated", &self.activated)
            .field("admin", &self.admin)
            .finish()
    }
}

/// Validated row ready for persistence: normalized email, digest in place of
/// the raw password.
#[derive(Clone)]
pub struct StaffRecord {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub activated: bool,
    pub admin: bool,
}

impl fmt::Debug for StaffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("activated", &self.activated)
            .field("admin", &self.admin)
            .finish_non_exhaustive()
    }
}

/// Public projection of a staff: the only fields the listing exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Staff> for StaffSummary {
    fn from(staff: Staff) -> Self {
        Self {
            id: staff.id,
            name: staff.name,
            email: staff.email,
            created_at: staff.created_at,
        }
    }
}
