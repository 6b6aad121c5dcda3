//! Field rules applied to every staff write.
//!
//! Each field validates independently and one cause yields one message. The
//! activated-email uniqueness rule needs storage and is applied by the save
//! use case on top of [`check_fields`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::types::StaffDraft;

pub const NAME_MAX_CHARS: usize = 30;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 72;

/// `local@domain.tld` built from ASCII word characters. Inner separators are
/// single `-`, `+` or `.` in the local part and `-` or `.` in the domain.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_]+(?:[-+.][A-Za-z0-9_]+)*@[A-Za-z0-9_]+(?:[-.][A-Za-z0-9_]+)*\.[A-Za-z0-9_]+(?:[-.][A-Za-z0-9_]+)*$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid regex pattern defined in code"))
}

/// Staff attribute a violation belongs to. Ordering is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Required,
    TooLong { max: usize },
    TooShort { min: usize },
    InvalidFormat,
    AlreadyTaken,
}

impl ValidationErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::TooLong { .. } => "TOO_LONG",
            Self::TooShort { .. } => "TOO_SHORT",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::AlreadyTaken => "ALREADY_TAKEN",
        }
    }
}

/// A single violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    /// Human-readable message, e.g. `"Email has already been taken"`.
    pub fn message(&self) -> String {
        let label = self.field.label();
        match (self.field, self.kind) {
            (_, ValidationErrorKind::Required) => format!("{label} can't be blank"),
            (_, ValidationErrorKind::TooLong { max }) => {
                format!("{label} is too long (maximum is {max} characters)")
            }
            (_, ValidationErrorKind::TooShort { min }) => {
                format!("{label} is too short (minimum is {min} characters)")
            }
            (Field::Password, ValidationErrorKind::InvalidFormat) => {
                format!("{label} may only contain letters, digits, hyphens and underscores")
            }
            (_, ValidationErrorKind::InvalidFormat) => format!("{label} is invalid"),
            (_, ValidationErrorKind::AlreadyTaken) => format!("{label} has already been taken"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Violations of one save attempt, kept grouped by field in [`Field`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation after any already recorded for the same or earlier fields.
    pub fn push(&mut self, error: ValidationError) {
        let at = self.0.partition_point(|e| e.field <= error.field);
        self.0.insert(at, error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn contains(&self, field: Field, kind: ValidationErrorKind) -> bool {
        self.0.contains(&ValidationError::new(field, kind))
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ValidationError::message).collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Outcome of the storage-free checks on a draft.
#[derive(Debug)]
pub struct FieldCheck {
    /// Lower-cased email as it will be stored.
    pub email: String,
    /// `true` when the email passed every format rule, so the uniqueness
    /// check is meaningful.
    pub email_well_formed: bool,
    pub errors: ValidationErrors,
}

/// Case-fold an email to its stored form. Idempotent.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_name(name: &str, errors: &mut ValidationErrors) {
    if is_blank(name) {
        errors.push(ValidationError::new(Field::Name, ValidationErrorKind::Required));
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.push(ValidationError::new(
            Field::Name,
            ValidationErrorKind::TooLong {
                max: NAME_MAX_CHARS,
            },
        ));
    }
}

/// Validate an already-normalized email. Returns `true` if it passed.
pub fn validate_email(email: &str, errors: &mut ValidationErrors) -> bool {
    if is_blank(email) {
        errors.push(ValidationError::new(Field::Email, ValidationErrorKind::Required));
        return false;
    }
    let mut ok = true;
    if email.chars().count() > EMAIL_MAX_CHARS {
        errors.push(ValidationError::new(
            Field::Email,
            ValidationErrorKind::TooLong {
                max: EMAIL_MAX_CHARS,
            },
        ));
        ok = false;
    }
    if !email_regex().is_match(email) {
        errors.push(ValidationError::new(
            Field::Email,
            ValidationErrorKind::InvalidFormat,
        ));
        ok = false;
    }
    ok
}

fn is_password_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Validate a supplied, non-empty password.
pub fn validate_password(password: &str, errors: &mut ValidationErrors) {
    let len = password.chars().count();
    if len < PASSWORD_MIN_CHARS {
        errors.push(ValidationError::new(
            Field::Password,
            ValidationErrorKind::TooShort {
                min: PASSWORD_MIN_CHARS,
            },
        ));
    } else if len > PASSWORD_MAX_CHARS {
        errors.push(ValidationError::new(
            Field::Password,
            ValidationErrorKind::TooLong {
                max: PASSWORD_MAX_CHARS,
            },
        ));
    }
    if !password.chars().all(is_password_char) {
        errors.push(ValidationError::new(
            Field::Password,
            ValidationErrorKind::InvalidFormat,
        ));
    }
}

/// Run every rule that needs no storage access.
pub fn check_fields(draft: &StaffDraft) -> FieldCheck {
    let mut errors = ValidationErrors::new();
    validate_name(&draft.name, &mut errors);

    let email = normalize_email(&draft.email);
    let email_well_formed = validate_email(&email, &mut errors);

    match draft.new_password() {
        Some(password) => validate_password(password, &mut errors),
        None if draft.is_new() => errors.push(ValidationError::new(
            Field::Password,
            ValidationErrorKind::Required,
        )),
        None => {}
    }

    FieldCheck {
        email,
        email_well_formed,
        errors,
    }
}
