//! Field names
//!
//! Every attribute an entity exposes has a stable name. Signing and transport
//! layers address fields by these names, so renaming one is a breaking change.

use std::collections::BTreeSet;
use std::fmt;

/// Entity attribute name
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    // Capability units
    Guid,
    Handle,
    Public,
    CreatedAt,
    RawContent,
    TargetGuid,
    Participation,
    TargetHandle,
    Relationship,

    // Post
    ProviderDisplayName,
    Location,
    Photos,

    // Image
    RemotePath,
    RemoteName,
    Text,
    LinkedType,
    LinkedGuid,
    Height,
    Width,

    // Reaction
    Reaction,

    // Profile
    Name,
    Email,
    ImageUrls,
    Gender,
    Nsfw,
    TagList,
    PublicKey,

    // Protocol-only
    AuthorSignature,
}

impl Field {
    /// Stable snake_case name
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Guid => "guid",
            Field::Handle => "handle",
            Field::Public => "public",
            Field::CreatedAt => "created_at",
            Field::RawContent => "raw_content",
            Field::TargetGuid => "target_guid",
            Field::Participation => "participation",
            Field::TargetHandle => "target_handle",
            Field::Relationship => "relationship",
            Field::ProviderDisplayName => "provider_display_name",
            Field::Location => "location",
            Field::Photos => "photos",
            Field::RemotePath => "remote_path",
            Field::RemoteName => "remote_name",
            Field::Text => "text",
            Field::LinkedType => "linked_type",
            Field::LinkedGuid => "linked_guid",
            Field::Height => "height",
            Field::Width => "width",
            Field::Reaction => "reaction",
            Field::Name => "name",
            Field::Email => "email",
            Field::ImageUrls => "image_urls",
            Field::Gender => "gender",
            Field::Nsfw => "nsfw",
            Field::TagList => "tag_list",
            Field::PublicKey => "public_key",
            Field::AuthorSignature => "author_signature",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of field names
pub type FieldSet = BTreeSet<Field>;
