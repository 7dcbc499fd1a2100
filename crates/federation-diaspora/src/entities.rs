//! Diaspora protocol entities
//!
//! Each protocol entity wraps the generic entity it narrows, plus the fields only
//! Diaspora knows about (author signatures). `from_base` copies the generic
//! fields and nothing else; protocol-only fields keep their defaults until the
//! signing layer fills them in.

use federation_core::{
    Check, Comment, DomainValue, Entity, EntityKind, Field, Post, Profile, Reaction,
    ReactionKind, Relationship, RelationshipKind, Unit,
};

/// Conversion from a generic entity to its protocol form
pub trait FromBase: Sized {
    type Base: Entity + Clone;

    /// Structural copy of the generic fields. Never validates, never fails.
    fn from_base(base: &Self::Base) -> Self;

    fn base(&self) -> &Self::Base;
}

/// Narrow a generic entity to its Diaspora form
pub fn adapt<P: FromBase>(base: &P::Base) -> P {
    let kind = <P::Base as Entity>::KIND;
    tracing::trace!(%kind, "adapting entity to diaspora");
    P::from_base(base)
}

/// Diaspora status message
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiasporaPost {
    pub post: Post,
}

impl FromBase for DiasporaPost {
    type Base = Post;

    fn from_base(base: &Post) -> Self {
        DiasporaPost { post: base.clone() }
    }

    fn base(&self) -> &Post {
        &self.post
    }
}

impl From<&Post> for DiasporaPost {
    fn from(post: &Post) -> Self {
        adapt(post)
    }
}

/// Diaspora comment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiasporaComment {
    pub comment: Comment,
    pub author_signature: String,
}

impl FromBase for DiasporaComment {
    type Base = Comment;

    fn from_base(base: &Comment) -> Self {
        DiasporaComment {
            comment: base.clone(),
            ..Default::default()
        }
    }

    fn base(&self) -> &Comment {
        &self.comment
    }
}

impl From<&Comment> for DiasporaComment {
    fn from(comment: &Comment) -> Self {
        adapt(comment)
    }
}

/// Diaspora like
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiasporaLike {
    pub reaction: Reaction,
    pub author_signature: String,
}

impl Default for DiasporaLike {
    fn default() -> Self {
        DiasporaLike {
            reaction: Reaction {
                reaction: ReactionKind::Like.into(),
                ..Default::default()
            },
            author_signature: String::new(),
        }
    }
}

impl FromBase for DiasporaLike {
    type Base = Reaction;

    fn from_base(base: &Reaction) -> Self {
        DiasporaLike {
            reaction: base.clone(),
            ..Default::default()
        }
    }

    fn base(&self) -> &Reaction {
        &self.reaction
    }
}

impl From<&Reaction> for DiasporaLike {
    fn from(reaction: &Reaction) -> Self {
        adapt(reaction)
    }
}

/// Diaspora sharing request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiasporaRequest {
    pub relationship: Relationship,
}

impl Default for DiasporaRequest {
    fn default() -> Self {
        let mut relationship = Relationship::default();
        relationship.relationship.relationship = DomainValue::from(RelationshipKind::Sharing);
        DiasporaRequest { relationship }
    }
}

impl FromBase for DiasporaRequest {
    type Base = Relationship;

    fn from_base(base: &Relationship) -> Self {
        DiasporaRequest {
            relationship: base.clone(),
        }
    }

    fn base(&self) -> &Relationship {
        &self.relationship
    }
}

impl From<&Relationship> for DiasporaRequest {
    fn from(relationship: &Relationship) -> Self {
        adapt(relationship)
    }
}

/// Diaspora profile
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiasporaProfile {
    pub profile: Profile,
}

impl FromBase for DiasporaProfile {
    type Base = Profile;

    fn from_base(base: &Profile) -> Self {
        DiasporaProfile {
            profile: base.clone(),
        }
    }

    fn base(&self) -> &Profile {
        &self.profile
    }
}

impl From<&Profile> for DiasporaProfile {
    fn from(profile: &Profile) -> Self {
        adapt(profile)
    }
}

// Protocol entities share the schema of their base. Author signatures are
// exposed as fields but never required.

impl Entity for DiasporaPost {
    const KIND: EntityKind = EntityKind::Post;
    const UNITS: &'static [Unit] = Post::UNITS;
    const OWN_FIELDS: &'static [Field] = Post::OWN_FIELDS;

    fn checks(&self) -> Vec<Check<'_>> {
        self.post.checks()
    }

    fn is_set(&self, field: Field) -> bool {
        self.post.is_set(field)
    }
}

impl Entity for DiasporaComment {
    const KIND: EntityKind = EntityKind::Comment;
    const UNITS: &'static [Unit] = Comment::UNITS;
    const OWN_FIELDS: &'static [Field] = &[Field::AuthorSignature];

    fn checks(&self) -> Vec<Check<'_>> {
        self.comment.checks()
    }

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::AuthorSignature => !self.author_signature.is_empty(),
            _ => self.comment.is_set(field),
        }
    }
}

impl Entity for DiasporaLike {
    const KIND: EntityKind = EntityKind::Reaction;
    const UNITS: &'static [Unit] = Reaction::UNITS;
    const OWN_FIELDS: &'static [Field] = &[Field::Reaction, Field::AuthorSignature];
    const OWN_REQUIRED: &'static [Field] = Reaction::OWN_REQUIRED;

    fn checks(&self) -> Vec<Check<'_>> {
        self.reaction.checks()
    }

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::AuthorSignature => !self.author_signature.is_empty(),
            _ => self.reaction.is_set(field),
        }
    }
}

impl Entity for DiasporaRequest {
    const KIND: EntityKind = EntityKind::Relationship;
    const UNITS: &'static [Unit] = Relationship::UNITS;

    fn checks(&self) -> Vec<Check<'_>> {
        self.relationship.checks()
    }

    fn is_set(&self, field: Field) -> bool {
        self.relationship.is_set(field)
    }
}

impl Entity for DiasporaProfile {
    const KIND: EntityKind = EntityKind::Profile;
    const UNITS: &'static [Unit] = Profile::UNITS;
    const OWN_FIELDS: &'static [Field] = Profile::OWN_FIELDS;
    const WAIVED: &'static [Field] = Profile::WAIVED;

    fn checks(&self) -> Vec<Check<'_>> {
        self.profile.checks()
    }

    fn is_set(&self, field: Field) -> bool {
        self.profile.is_set(field)
    }
}
