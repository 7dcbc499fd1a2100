//! Error types for federation entities

use std::fmt;

use thiserror::Error;

use crate::{EntityKind, Field};

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FederationError {
    /// One or more required fields carry no value
    #[error("{kind}: missing required fields: {}", join_fields(.fields))]
    MissingRequired {
        kind: EntityKind,
        fields: Vec<Field>,
    },

    /// A present field broke its capability unit's rule
    #[error("{kind}: invalid {field}: {reason}")]
    InvalidField {
        kind: EntityKind,
        field: Field,
        reason: Violation,
    },
}

impl FederationError {
    /// Field names reported by this error
    pub fn fields(&self) -> &[Field] {
        match self {
            FederationError::MissingRequired { fields, .. } => fields,
            FederationError::InvalidField { field, .. } => std::slice::from_ref(field),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            FederationError::MissingRequired { kind, .. } => *kind,
            FederationError::InvalidField { kind, .. } => *kind,
        }
    }
}

/// The rule a present field violated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Identifier shorter than the protocol minimum
    TooShort { min: usize, actual: usize },
    /// Not an email-shaped address
    MalformedAddress,
    /// Value outside a closed enumerated domain
    OutOfDomain {
        value: String,
        allowed: &'static [&'static str],
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooShort { min, actual } => {
                write!(f, "must be at least {} characters, got {}", min, actual)
            }
            Violation::MalformedAddress => write!(f, "not a valid address"),
            Violation::OutOfDomain { value, allowed } => {
                write!(f, "{:?} should be one of: {}", value, allowed.join(", "))
            }
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for entity validation
pub type FederationResult<T> = Result<T, FederationError>;
