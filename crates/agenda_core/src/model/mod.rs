//! Domain model for the three record kinds.
//!
//! # Responsibility
//! - Define the canonical Event / Location / Contact shapes shared by the
//!   store, the persistence codec and the narration helpers.
//! - Provide shape validation for form-layer callers.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId` generated at
//!   creation and never reused.
//! - An Event's `location_id` is a weak reference: the referenced Location
//!   may be deleted at any time and the reference stays behind, dangling.

use std::error::Error;
use std::fmt::{Display, Formatter};

use uuid::Uuid;

pub mod contact;
pub mod event;
pub mod location;

pub use contact::{Contact, SALUTATIONS};
pub use event::{Event, Recurrence};
pub use location::{parse_coordinate, Location};

/// Stable identifier for every record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Shape violations detected by the per-record `validate()` helpers.
///
/// The store itself never calls these: a mutation is applied unconditionally
/// once its input passed caller-side validation. The helpers exist for form
/// layers, the CLI and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
    /// Contact e-mail does not match the basic `local@domain` pattern.
    InvalidEmail(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { record, field } => {
                write!(f, "{record}.{field} must not be empty")
            }
            Self::InvalidEmail(value) => write!(f, "invalid e-mail address `{value}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_empty(
    value: &str,
    record: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { record, field });
    }
    Ok(())
}
