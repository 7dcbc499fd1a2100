//! Entity schema
//!
//! An entity kind is a static schema: the capability units it is composed of,
//! its own fields, its own required fields and any requirement it waives. The
//! required-field set is derived from these declarations, never accumulated at
//! runtime.

use std::fmt;

use crate::{Check, FederationResult, Field, FieldSet, Unit};

/// Entity kinds in the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Post,
    Image,
    Comment,
    Reaction,
    Relationship,
    Profile,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Post => "Post",
            EntityKind::Image => "Image",
            EntityKind::Comment => "Comment",
            EntityKind::Reaction => "Reaction",
            EntityKind::Relationship => "Relationship",
            EntityKind::Profile => "Profile",
        }
    }

    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Post,
            EntityKind::Image,
            EntityKind::Comment,
            EntityKind::Reaction,
            EntityKind::Relationship,
            EntityKind::Profile,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated, serializable federation entity
pub trait Entity {
    const KIND: EntityKind;
    /// Capability units this kind is composed of
    const UNITS: &'static [Unit];
    /// Fields declared by the kind itself
    const OWN_FIELDS: &'static [Field] = &[];
    /// Own fields that must carry a value
    const OWN_REQUIRED: &'static [Field] = &[];
    /// Unit requirements this kind overrides
    const WAIVED: &'static [Field] = &[];

    /// Field validation rules, in declaration order
    fn checks(&self) -> Vec<Check<'_>>;

    /// Whether `field` currently carries a value
    fn is_set(&self, field: Field) -> bool;

    /// Every field the kind exposes
    fn fields() -> FieldSet {
        Self::UNITS
            .iter()
            .flat_map(|unit| unit.fields().iter().copied())
            .chain(Self::OWN_FIELDS.iter().copied())
            .collect()
    }

    /// Union of unit and own requirements, minus waivers
    fn required_fields() -> FieldSet {
        Self::UNITS
            .iter()
            .flat_map(|unit| unit.required().iter().copied())
            .chain(Self::OWN_REQUIRED.iter().copied())
            .filter(|field| !Self::WAIVED.contains(field))
            .collect()
    }

    /// Fields that currently carry a value
    fn present_fields(&self) -> FieldSet {
        Self::fields()
            .into_iter()
            .filter(|&field| self.is_set(field))
            .collect()
    }

    /// Run every rule, then check required fields are present
    fn validate(&self) -> FederationResult<()>
    where
        Self: Sized,
    {
        crate::validate::validate(self)
    }
}
