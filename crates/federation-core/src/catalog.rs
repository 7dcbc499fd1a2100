//! Entity catalog
//!
//! Each kind holds one value per composed capability unit plus its own fields.
//! Construction never fails; `Entity::validate` enforces the schema.

use std::collections::BTreeSet;

use crate::{
    Authorship, Capability, Check, DomainValue, Entity, EntityKind, Field, Identity,
    Participation, ParticipationRef, ReactionKind, RelationshipRef, Rule, TextBody, Timestamp,
    Unit, Visibility,
};

/// A post, status message or similar
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    pub body: TextBody,
    pub identity: Identity,
    pub author: Authorship,
    pub visibility: Visibility,
    pub timestamp: Timestamp,
    /// Name of the client or service that created the post
    pub provider_display_name: String,
    pub location: String,
    /// GUIDs of attached images
    pub photos: Vec<String>,
}

impl Post {
    pub fn tags(&self) -> BTreeSet<String> {
        self.body.tags()
    }
}

impl Entity for Post {
    const KIND: EntityKind = EntityKind::Post;
    const UNITS: &'static [Unit] = &[
        Unit::TextBody,
        Unit::Identity,
        Unit::Authorship,
        Unit::Visibility,
        Unit::Timestamp,
    ];
    const OWN_FIELDS: &'static [Field] =
        &[Field::ProviderDisplayName, Field::Location, Field::Photos];

    fn checks(&self) -> Vec<Check<'_>> {
        let mut checks = self.identity.checks();
        checks.extend(self.author.checks());
        checks
    }

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::ProviderDisplayName => !self.provider_display_name.is_empty(),
            Field::Location => !self.location.is_empty(),
            Field::Photos => !self.photos.is_empty(),
            _ => {
                self.body.is_set(field)
                    || self.identity.is_set(field)
                    || self.author.is_set(field)
                    || self.visibility.is_set(field)
                    || self.timestamp.is_set(field)
            }
        }
    }
}

/// A single image, possibly linked to another entity
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pub identity: Identity,
    pub author: Authorship,
    pub visibility: Visibility,
    pub timestamp: Timestamp,
    pub remote_path: String,
    pub remote_name: String,
    pub text: String,
    /// Kind of the linked entity, e.g. "Post"
    pub linked_type: String,
    pub linked_guid: String,
    pub height: u32,
    pub width: u32,
}

impl Entity for Image {
    const KIND: EntityKind = EntityKind::Image;
    const UNITS: &'static [Unit] = &[
        Unit::Identity,
        Unit::Authorship,
        Unit::Visibility,
        Unit::Timestamp,
    ];
    const OWN_FIELDS: &'static [Field] = &[
        Field::RemotePath,
        Field::RemoteName,
        Field::Text,
        Field::LinkedType,
        Field::LinkedGuid,
        Field::Height,
        Field::Width,
    ];
    const OWN_REQUIRED: &'static [Field] = &[Field::RemotePath, Field::RemoteName];

    fn checks(&self) -> Vec<Check<'_>> {
        let mut checks = self.identity.checks();
        checks.extend(self.author.checks());
        checks
    }

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::RemotePath => !self.remote_path.is_empty(),
            Field::RemoteName => !self.remote_name.is_empty(),
            Field::Text => !self.text.is_empty(),
            Field::LinkedType => !self.linked_type.is_empty(),
            Field::LinkedGuid => !self.linked_guid.is_empty(),
            Field::Height => self.height > 0,
            Field::Width => self.width > 0,
            _ => {
                self.identity.is_set(field)
                    || self.author.is_set(field)
                    || self.visibility.is_set(field)
                    || self.timestamp.is_set(field)
            }
        }
    }
}

/// A comment on another entity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub body: TextBody,
    pub identity: Identity,
    pub participation: ParticipationRef,
    pub timestamp: Timestamp,
    pub author: Authorship,
}

impl Default for Comment {
    fn default() -> Self {
        Comment {
            body: TextBody::default(),
            identity: Identity::default(),
            participation: ParticipationRef::of(Participation::Comment),
            timestamp: Timestamp::default(),
            author: Authorship::default(),
        }
    }
}

impl Comment {
    pub fn tags(&self) -> BTreeSet<String> {
        self.body.tags()
    }
}

impl Entity for Comment {
    const KIND: EntityKind = EntityKind::Comment;
    const UNITS: &'static [Unit] = &[
        Unit::TextBody,
        Unit::Identity,
        Unit::ParticipationRef,
        Unit::Timestamp,
        Unit::Authorship,
    ];

    fn checks(&self) -> Vec<Check<'_>> {
        let mut checks = self.identity.checks();
        checks.extend(self.participation.checks());
        checks.extend(self.author.checks());
        checks
    }

    fn is_set(&self, field: Field) -> bool {
        self.body.is_set(field)
            || self.identity.is_set(field)
            || self.participation.is_set(field)
            || self.timestamp.is_set(field)
            || self.author.is_set(field)
    }
}

/// A reaction to another entity, e.g. a like
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reaction {
    pub identity: Identity,
    pub participation: ParticipationRef,
    pub timestamp: Timestamp,
    pub author: Authorship,
    pub reaction: DomainValue<ReactionKind>,
}

impl Default for Reaction {
    fn default() -> Self {
        Reaction {
            identity: Identity::default(),
            participation: ParticipationRef::of(Participation::Reaction),
            timestamp: Timestamp::default(),
            author: Authorship::default(),
            reaction: DomainValue::empty(),
        }
    }
}

impl Entity for Reaction {
    const KIND: EntityKind = EntityKind::Reaction;
    const UNITS: &'static [Unit] = &[
        Unit::Identity,
        Unit::ParticipationRef,
        Unit::Timestamp,
        Unit::Authorship,
    ];
    const OWN_FIELDS: &'static [Field] = &[Field::Reaction];
    const OWN_REQUIRED: &'static [Field] = &[Field::Reaction];

    fn checks(&self) -> Vec<Check<'_>> {
        let mut checks = self.identity.checks();
        checks.extend(self.participation.checks());
        checks.extend(self.author.checks());
        checks.push(Check::new(Field::Reaction, Rule::member(&self.reaction)));
        checks
    }

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Reaction => !self.reaction.is_empty(),
            _ => {
                self.identity.is_set(field)
                    || self.participation.is_set(field)
                    || self.timestamp.is_set(field)
                    || self.author.is_set(field)
            }
        }
    }
}

/// A relationship between two handles
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relationship {
    pub timestamp: Timestamp,
    pub author: Authorship,
    pub relationship: RelationshipRef,
}

impl Entity for Relationship {
    const KIND: EntityKind = EntityKind::Relationship;
    const UNITS: &'static [Unit] = &[Unit::Timestamp, Unit::Authorship, Unit::RelationshipRef];

    fn checks(&self) -> Vec<Check<'_>> {
        let mut checks = self.author.checks();
        checks.extend(self.relationship.checks());
        checks
    }

    fn is_set(&self, field: Field) -> bool {
        self.timestamp.is_set(field) || self.author.is_set(field) || self.relationship.is_set(field)
    }
}

/// Profile picture URLs by size
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageUrls {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl ImageUrls {
    pub fn is_empty(&self) -> bool {
        self.small.is_empty() && self.medium.is_empty() && self.large.is_empty()
    }
}

/// A user profile, keyed by handle rather than GUID
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub timestamp: Timestamp,
    pub author: Authorship,
    /// Bio
    pub body: TextBody,
    /// Searchable flag
    pub visibility: Visibility,
    pub identity: Identity,
    pub name: String,
    pub email: String,
    pub image_urls: ImageUrls,
    pub gender: String,
    pub location: String,
    pub nsfw: bool,
    pub tag_list: Vec<String>,
    pub public_key: String,
}

impl Entity for Profile {
    const KIND: EntityKind = EntityKind::Profile;
    const UNITS: &'static [Unit] = &[
        Unit::Timestamp,
        Unit::Authorship,
        Unit::TextBody,
        Unit::Visibility,
        Unit::Identity,
    ];
    const OWN_FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Email,
        Field::ImageUrls,
        Field::Gender,
        Field::Location,
        Field::Nsfw,
        Field::TagList,
        Field::PublicKey,
    ];
    const WAIVED: &'static [Field] = &[Field::Guid];

    fn checks(&self) -> Vec<Check<'_>> {
        let mut checks = self.author.checks();
        checks.extend(self.identity.checks());
        checks.push(Check::new(Field::Email, Rule::Address(&self.email)));
        checks
    }

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Name => !self.name.is_empty(),
            Field::Email => !self.email.is_empty(),
            Field::ImageUrls => !self.image_urls.is_empty(),
            Field::Gender => !self.gender.is_empty(),
            Field::Location => !self.location.is_empty(),
            Field::Nsfw => true,
            Field::TagList => !self.tag_list.is_empty(),
            Field::PublicKey => !self.public_key.is_empty(),
            _ => {
                self.timestamp.is_set(field)
                    || self.author.is_set(field)
                    || self.body.is_set(field)
                    || self.visibility.is_set(field)
                    || self.identity.is_set(field)
            }
        }
    }
}
