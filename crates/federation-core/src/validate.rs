//! Validation engine
//!
//! Validation runs in two passes:
//! 1. Every `(field, rule)` check the entity declares, in order. The first
//!    broken rule aborts with `InvalidField`.
//! 2. The set of fields carrying a value must cover the entity's required
//!    fields, otherwise `MissingRequired` lists every missing one.
//!
//! Rules only look at present values; an empty required field is reported by
//! the second pass.

use crate::{
    is_valid_address, ClosedDomain, DomainValue, Entity, FederationError, FederationResult,
    Field, Violation,
};

/// A validation rule bound to the value it checks
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule<'a> {
    /// Minimum length in characters
    MinLength { value: &'a str, min: usize },
    /// Email-shaped address
    Address(&'a str),
    /// Member of a closed domain
    Member {
        value: &'a str,
        member: bool,
        allowed: &'static [&'static str],
    },
}

impl<'a> Rule<'a> {
    pub fn member<T: ClosedDomain>(value: &'a DomainValue<T>) -> Self {
        Rule::Member {
            value: value.as_str(),
            member: value.is_member(),
            allowed: T::NAMES,
        }
    }

    /// Check the bound value. Empty values always pass.
    pub fn check(&self) -> Result<(), Violation> {
        match *self {
            Rule::MinLength { value, min } => {
                let actual = value.chars().count();
                if actual > 0 && actual < min {
                    return Err(Violation::TooShort { min, actual });
                }
            }
            Rule::Address(value) => {
                if !value.is_empty() && !is_valid_address(value) {
                    return Err(Violation::MalformedAddress);
                }
            }
            Rule::Member {
                value,
                member,
                allowed,
            } => {
                if !value.is_empty() && !member {
                    return Err(Violation::OutOfDomain {
                        value: value.to_owned(),
                        allowed,
                    });
                }
            }
        }
        Ok(())
    }
}

/// A rule attached to the field it guards
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check<'a> {
    pub field: Field,
    pub rule: Rule<'a>,
}

impl<'a> Check<'a> {
    pub fn new(field: Field, rule: Rule<'a>) -> Self {
        Check { field, rule }
    }
}

/// Validate an entity against its kind's schema
pub fn validate<E: Entity>(entity: &E) -> FederationResult<()> {
    let kind = E::KIND;

    for check in entity.checks() {
        if let Err(reason) = check.rule.check() {
            tracing::debug!(
                %kind,
                field = %check.field,
                %reason,
                "entity rejected: invalid field"
            );
            return Err(FederationError::InvalidField {
                kind,
                field: check.field,
                reason,
            });
        }
    }

    let missing: Vec<Field> = E::required_fields()
        .into_iter()
        .filter(|&field| !entity.is_set(field))
        .collect();

    if !missing.is_empty() {
        tracing::debug!(%kind, ?missing, "entity rejected: missing required fields");
        return Err(FederationError::MissingRequired {
            kind,
            fields: missing,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReactionKind, RelationshipKind, MIN_GUID_LEN};
    use proptest::prelude::*;

    #[test]
    fn test_min_length() {
        let short = Rule::MinLength {
            value: "abc",
            min: MIN_GUID_LEN,
        };
        assert_eq!(
            short.check(),
            Err(Violation::TooShort {
                min: MIN_GUID_LEN,
                actual: 3
            })
        );

        let empty = Rule::MinLength {
            value: "",
            min: MIN_GUID_LEN,
        };
        assert!(empty.check().is_ok());
    }

    #[test]
    fn test_address() {
        assert_eq!(
            Rule::Address("not-an-email").check(),
            Err(Violation::MalformedAddress)
        );
        assert!(Rule::Address("alice@example.org").check().is_ok());
        assert!(Rule::Address("").check().is_ok());
    }

    #[test]
    fn test_member() {
        let dislike: DomainValue<ReactionKind> = DomainValue::raw("dislike");
        assert_eq!(
            Rule::member(&dislike).check(),
            Err(Violation::OutOfDomain {
                value: "dislike".into(),
                allowed: &["like"],
            })
        );

        let blocking: DomainValue<RelationshipKind> = RelationshipKind::Blocking.into();
        assert!(Rule::member(&blocking).check().is_ok());

        let spying: DomainValue<RelationshipKind> = DomainValue::raw("spying");
        assert!(Rule::member(&spying).check().is_err());
    }

    proptest! {
        #[test]
        fn prop_guid_length_boundary(guid in "[a-f0-9]{1,32}") {
            let result = Rule::MinLength { value: &guid, min: MIN_GUID_LEN }.check();
            prop_assert_eq!(result.is_ok(), guid.len() >= MIN_GUID_LEN);
        }
    }
}
