//! Field-capability units
//!
//! Each unit is a small group of attributes with its own defaults, its own
//! required fields and its own validation rules. Entities are composed from units
//! plus a few kind-specific fields:
//!
//! | Unit | Fields | Required | Rule |
//! |------|--------|----------|------|
//! | Identity | guid | guid | length >= 16 when set |
//! | Authorship | handle | handle | email-shaped address |
//! | Visibility | public | - | - |
//! | Timestamp | created_at | created_at | - |
//! | TextBody | raw_content | raw_content | - |
//! | ParticipationRef | target_guid, participation | both | closed domain |
//! | RelationshipRef | target_handle, relationship | both | address, closed domain |

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::{Check, DomainValue, Field, Participation, RelationshipKind, Rule};

/// Minimum GUID length in characters
pub const MIN_GUID_LEN: usize = 16;

/// Capability unit identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Identity,
    Authorship,
    Visibility,
    Timestamp,
    TextBody,
    ParticipationRef,
    RelationshipRef,
}

impl Unit {
    /// Fields this unit adds to an entity
    pub fn fields(self) -> &'static [Field] {
        match self {
            Unit::Identity => &[Field::Guid],
            Unit::Authorship => &[Field::Handle],
            Unit::Visibility => &[Field::Public],
            Unit::Timestamp => &[Field::CreatedAt],
            Unit::TextBody => &[Field::RawContent],
            Unit::ParticipationRef => &[Field::TargetGuid, Field::Participation],
            Unit::RelationshipRef => &[Field::TargetHandle, Field::Relationship],
        }
    }

    /// Fields this unit requires to carry a value
    pub fn required(self) -> &'static [Field] {
        match self {
            Unit::Identity => &[Field::Guid],
            Unit::Authorship => &[Field::Handle],
            Unit::Visibility => &[],
            Unit::Timestamp => &[Field::CreatedAt],
            Unit::TextBody => &[Field::RawContent],
            Unit::ParticipationRef => &[Field::TargetGuid, Field::Participation],
            Unit::RelationshipRef => &[Field::TargetHandle, Field::Relationship],
        }
    }
}

/// Behaviour shared by every capability unit
pub trait Capability {
    const UNIT: Unit;

    /// Whether `field` carries a value. False for fields of other units.
    fn is_set(&self, field: Field) -> bool;

    /// Validation rules, in field order
    fn checks(&self) -> Vec<Check<'_>> {
        Vec::new()
    }
}

/// Global identifier
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub guid: String,
}

impl Identity {
    pub fn new(guid: impl Into<String>) -> Self {
        Identity { guid: guid.into() }
    }
}

impl Capability for Identity {
    const UNIT: Unit = Unit::Identity;

    fn is_set(&self, field: Field) -> bool {
        field == Field::Guid && !self.guid.is_empty()
    }

    fn checks(&self) -> Vec<Check<'_>> {
        vec![Check::new(
            Field::Guid,
            Rule::MinLength {
                value: &self.guid,
                min: MIN_GUID_LEN,
            },
        )]
    }
}

/// Author handle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Authorship {
    pub handle: String,
}

impl Authorship {
    pub fn new(handle: impl Into<String>) -> Self {
        Authorship {
            handle: handle.into(),
        }
    }
}

impl Capability for Authorship {
    const UNIT: Unit = Unit::Authorship;

    fn is_set(&self, field: Field) -> bool {
        field == Field::Handle && !self.handle.is_empty()
    }

    fn checks(&self) -> Vec<Check<'_>> {
        vec![Check::new(Field::Handle, Rule::Address(&self.handle))]
    }
}

/// Public flag, private unless set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub public: bool,
}

impl Visibility {
    pub fn public() -> Self {
        Visibility { public: true }
    }

    pub fn private() -> Self {
        Visibility { public: false }
    }
}

impl Capability for Visibility {
    const UNIT: Unit = Unit::Visibility;

    fn is_set(&self, field: Field) -> bool {
        field == Field::Public
    }
}

/// Creation time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp {
    pub created_at: DateTime<Utc>,
}

impl Timestamp {
    pub fn at(created_at: DateTime<Utc>) -> Self {
        Timestamp { created_at }
    }

    pub fn now() -> Self {
        Timestamp {
            created_at: Utc::now(),
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::now()
    }
}

impl Capability for Timestamp {
    const UNIT: Unit = Unit::Timestamp;

    fn is_set(&self, field: Field) -> bool {
        field == Field::CreatedAt
    }
}

/// Raw text content
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBody {
    pub raw_content: String,
}

impl TextBody {
    pub fn new(raw_content: impl Into<String>) -> Self {
        TextBody {
            raw_content: raw_content.into(),
        }
    }

    /// Unique `#tag` words in the content, without the `#`
    pub fn tags(&self) -> BTreeSet<String> {
        self.raw_content
            .split_whitespace()
            .filter(|word| word.starts_with('#'))
            .map(|word| word.trim_matches('#'))
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl Capability for TextBody {
    const UNIT: Unit = Unit::TextBody;

    fn is_set(&self, field: Field) -> bool {
        field == Field::RawContent && !self.raw_content.is_empty()
    }
}

/// Reference to a target entity plus the kind of participation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipationRef {
    pub target_guid: String,
    pub participation: DomainValue<Participation>,
}

impl ParticipationRef {
    pub fn new(target_guid: impl Into<String>, participation: Participation) -> Self {
        ParticipationRef {
            target_guid: target_guid.into(),
            participation: participation.into(),
        }
    }

    /// A reference with its kind already fixed, target left unset
    pub fn of(participation: Participation) -> Self {
        ParticipationRef::new("", participation)
    }
}

impl Capability for ParticipationRef {
    const UNIT: Unit = Unit::ParticipationRef;

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::TargetGuid => !self.target_guid.is_empty(),
            Field::Participation => !self.participation.is_empty(),
            _ => false,
        }
    }

    fn checks(&self) -> Vec<Check<'_>> {
        vec![Check::new(
            Field::Participation,
            Rule::member(&self.participation),
        )]
    }
}

/// Reference to another handle plus the kind of relationship
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationshipRef {
    pub target_handle: String,
    pub relationship: DomainValue<RelationshipKind>,
}

impl RelationshipRef {
    pub fn new(target_handle: impl Into<String>, relationship: RelationshipKind) -> Self {
        RelationshipRef {
            target_handle: target_handle.into(),
            relationship: relationship.into(),
        }
    }
}

impl Capability for RelationshipRef {
    const UNIT: Unit = Unit::RelationshipRef;

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::TargetHandle => !self.target_handle.is_empty(),
            Field::Relationship => !self.relationship.is_empty(),
            _ => false,
        }
    }

    fn checks(&self) -> Vec<Check<'_>> {
        vec![
            Check::new(Field::TargetHandle, Rule::Address(&self.target_handle)),
            Check::new(Field::Relationship, Rule::member(&self.relationship)),
        ]
    }
}
