//! Diaspora element serializers
//!
//! Each protocol entity maps to a fixed root element with a fixed, ordered list
//! of children:
//!
//! | Entity | Root | Children |
//! |--------|------|----------|
//! | Post | status_message | raw_message, guid, diaspora_handle, public, created_at |
//! | Comment | comment | guid, parent_guid, author_signature, text, diaspora_handle |
//! | Like | like | target_type, guid, parent_guid, author_signature, positive, diaspora_handle |
//! | Request | request | sender_handle, recipient_handle |
//! | Profile | profile | diaspora_handle, first_name, last_name, image_url, image_url_small, image_url_medium, gender, bio, location, searchable, nsfw, tag_string |
//!
//! Serializers never validate. Unset values render as empty leaves.

use bytes::Bytes;
use federation_core::Entity;
use federation_wire::{
    bool_token, format_timestamp, payload_document, tag_string, Element, XmlWriter,
};

use crate::{DiasporaComment, DiasporaLike, DiasporaPost, DiasporaProfile, DiasporaRequest};

/// Target type written on likes
pub const LIKE_TARGET_TYPE: &str = "Post";

/// A protocol entity with a Diaspora wire form
pub trait DiasporaEntity: Entity {
    /// Root element name
    const ROOT: &'static str;

    /// Build the ordered element tree
    fn to_element(&self) -> Element;

    /// Element tree wrapped in the `<XML><post>` payload document
    fn to_payload(&self) -> Element {
        payload_document(self.to_element())
    }

    /// Render the element tree as XML bytes
    fn to_xml(&self, writer: &XmlWriter) -> Bytes {
        let element = self.to_element();
        let kind = Self::KIND;
        tracing::trace!(%kind, root = Self::ROOT, "serializing diaspora entity");
        writer.to_bytes(&element)
    }
}

impl DiasporaEntity for DiasporaPost {
    const ROOT: &'static str = "status_message";

    fn to_element(&self) -> Element {
        let post = &self.post;
        Element::with_leaves(
            Self::ROOT,
            [
                ("raw_message", post.body.raw_content.clone()),
                ("guid", post.identity.guid.clone()),
                ("diaspora_handle", post.author.handle.clone()),
                ("public", bool_token(post.visibility.public).to_owned()),
                ("created_at", format_timestamp(&post.timestamp.created_at)),
            ],
        )
    }
}

impl DiasporaEntity for DiasporaComment {
    const ROOT: &'static str = "comment";

    fn to_element(&self) -> Element {
        let comment = &self.comment;
        Element::with_leaves(
            Self::ROOT,
            [
                ("guid", comment.identity.guid.as_str()),
                ("parent_guid", comment.participation.target_guid.as_str()),
                ("author_signature", self.author_signature.as_str()),
                ("text", comment.body.raw_content.as_str()),
                ("diaspora_handle", comment.author.handle.as_str()),
            ],
        )
    }
}

impl DiasporaEntity for DiasporaLike {
    const ROOT: &'static str = "like";

    fn to_element(&self) -> Element {
        let reaction = &self.reaction;
        Element::with_leaves(
            Self::ROOT,
            [
                ("target_type", LIKE_TARGET_TYPE),
                ("guid", reaction.identity.guid.as_str()),
                ("parent_guid", reaction.participation.target_guid.as_str()),
                ("author_signature", self.author_signature.as_str()),
                ("positive", bool_token(true)),
                ("diaspora_handle", reaction.author.handle.as_str()),
            ],
        )
    }
}

impl DiasporaEntity for DiasporaRequest {
    const ROOT: &'static str = "request";

    fn to_element(&self) -> Element {
        let relationship = &self.relationship;
        Element::with_leaves(
            Self::ROOT,
            [
                ("sender_handle", relationship.author.handle.as_str()),
                (
                    "recipient_handle",
                    relationship.relationship.target_handle.as_str(),
                ),
            ],
        )
    }
}

impl DiasporaEntity for DiasporaProfile {
    const ROOT: &'static str = "profile";

    fn to_element(&self) -> Element {
        let profile = &self.profile;
        Element::with_leaves(
            Self::ROOT,
            [
                ("diaspora_handle", profile.author.handle.clone()),
                ("first_name", profile.name.clone()),
                // Modern profiles only carry a single name
                ("last_name", String::new()),
                ("image_url", profile.image_urls.large.clone()),
                ("image_url_small", profile.image_urls.small.clone()),
                ("image_url_medium", profile.image_urls.medium.clone()),
                ("gender", profile.gender.clone()),
                ("bio", profile.body.raw_content.clone()),
                ("location", profile.location.clone()),
                ("searchable", bool_token(profile.visibility.public).to_owned()),
                ("nsfw", bool_token(profile.nsfw).to_owned()),
                ("tag_string", tag_string(&profile.tag_list)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use federation_core::{
        Authorship, Comment, Identity, ImageUrls, Participation, ParticipationRef, Post, Profile,
        Reaction, ReactionKind, Relationship, RelationshipKind, RelationshipRef, TextBody,
        Timestamp, Visibility,
    };
    use federation_wire::WriterConfig;
    use proptest::prelude::*;

    const GUID: &str = "a0a0a0a0a0a0a0a0";
    const PARENT: &str = "b1b1b1b1b1b1b1b1";

    fn post() -> DiasporaPost {
        DiasporaPost::from(&Post {
            body: TextBody::new("((status message))"),
            identity: Identity::new(GUID),
            author: Authorship::new("alice@alice.example.org"),
            visibility: Visibility::private(),
            timestamp: Timestamp::at(Utc.with_ymd_and_hms(2011, 7, 20, 1, 36, 7).unwrap()),
            ..Default::default()
        })
    }

    #[test]
    fn test_post_elements() {
        let element = post().to_element();
        assert_eq!(element.name, "status_message");
        assert_eq!(
            element.child_names(),
            vec!["raw_message", "guid", "diaspora_handle", "public", "created_at"]
        );
        assert_eq!(element.child_text("raw_message"), Some("((status message))"));
        assert_eq!(element.child_text("guid"), Some(GUID));
        assert_eq!(
            element.child_text("diaspora_handle"),
            Some("alice@alice.example.org")
        );
        assert_eq!(element.child_text("public"), Some("false"));
        assert_eq!(
            element.child_text("created_at"),
            Some("2011-07-20 01:36:07 UTC")
        );
    }

    #[test]
    fn test_public_post() {
        let mut post = post();
        post.post.visibility = Visibility::public();
        assert_eq!(post.to_element().child_text("public"), Some("true"));
    }

    #[test]
    fn test_comment_elements() {
        let mut comment = DiasporaComment::from(&Comment {
            body: TextBody::new("((text))"),
            identity: Identity::new(GUID),
            participation: ParticipationRef::new(PARENT, Participation::Comment),
            author: Authorship::new("alice@alice.example.org"),
            ..Default::default()
        });
        comment.author_signature = "((base64-encoded data))".into();

        let element = comment.to_element();
        assert_eq!(element.name, "comment");
        assert_eq!(
            element.child_names(),
            vec![
                "guid",
                "parent_guid",
                "author_signature",
                "text",
                "diaspora_handle"
            ]
        );
        assert_eq!(element.child_text("parent_guid"), Some(PARENT));
        assert_eq!(element.child_text("text"), Some("((text))"));
        assert_eq!(
            element.child_text("author_signature"),
            Some("((base64-encoded data))")
        );
    }

    #[test]
    fn test_like_elements() {
        let like = DiasporaLike::from(&Reaction {
            identity: Identity::new(GUID),
            participation: ParticipationRef::new(PARENT, Participation::Reaction),
            author: Authorship::new("alice@alice.example.org"),
            reaction: ReactionKind::Like.into(),
            ..Default::default()
        });

        let element = like.to_element();
        assert_eq!(element.name, "like");
        assert_eq!(
            element.child_names(),
            vec![
                "target_type",
                "guid",
                "parent_guid",
                "author_signature",
                "positive",
                "diaspora_handle"
            ]
        );
        assert_eq!(element.child_text("target_type"), Some("Post"));
        assert_eq!(element.child_text("positive"), Some("true"));
        assert_eq!(element.child_text("author_signature"), Some(""));
    }

    #[test]
    fn test_request_elements() {
        let request = DiasporaRequest::from(&Relationship {
            author: Authorship::new("bob@example.com"),
            relationship: RelationshipRef::new("alice@alice.example.org", RelationshipKind::Sharing),
            ..Default::default()
        });

        let element = request.to_element();
        assert_eq!(element.name, "request");
        assert_eq!(element.child_names(), vec!["sender_handle", "recipient_handle"]);
        assert_eq!(element.child_text("sender_handle"), Some("bob@example.com"));
        assert_eq!(
            element.child_text("recipient_handle"),
            Some("alice@alice.example.org")
        );
    }

    #[test]
    fn test_profile_elements() {
        let profile = DiasporaProfile::from(&Profile {
            author: Authorship::new("bob@example.com"),
            body: TextBody::new("A cool bio"),
            visibility: Visibility::public(),
            name: "Bob Bobertson".into(),
            image_urls: ImageUrls {
                small: "small.jpg".into(),
                medium: "medium.jpg".into(),
                large: "large.jpg".into(),
            },
            location: "Helsinki".into(),
            tag_list: vec!["socialfederation".into(), "federation".into()],
            ..Default::default()
        });

        let element = profile.to_element();
        assert_eq!(element.name, "profile");
        assert_eq!(
            element.child_names(),
            vec![
                "diaspora_handle",
                "first_name",
                "last_name",
                "image_url",
                "image_url_small",
                "image_url_medium",
                "gender",
                "bio",
                "location",
                "searchable",
                "nsfw",
                "tag_string"
            ]
        );
        assert_eq!(element.child_text("first_name"), Some("Bob Bobertson"));
        assert_eq!(element.child_text("last_name"), Some(""));
        assert_eq!(element.child_text("image_url"), Some("large.jpg"));
        assert_eq!(element.child_text("image_url_small"), Some("small.jpg"));
        assert_eq!(element.child_text("image_url_medium"), Some("medium.jpg"));
        assert_eq!(element.child_text("bio"), Some("A cool bio"));
        assert_eq!(element.child_text("searchable"), Some("true"));
        assert_eq!(element.child_text("nsfw"), Some("false"));
        assert_eq!(
            element.child_text("tag_string"),
            Some("#socialfederation #federation")
        );
    }

    #[test]
    fn test_incomplete_entity_renders_empty_leaves() {
        let element = DiasporaComment::default().to_element();
        assert_eq!(element.children.len(), 5);
        assert!(element.children.iter().all(|child| child.text.is_empty()));

        let element = DiasporaProfile::default().to_element();
        assert_eq!(element.child_text("tag_string"), Some(""));
        assert_eq!(element.child_text("searchable"), Some("false"));
    }

    #[test]
    fn test_to_xml() {
        let request = DiasporaRequest::from(&Relationship {
            author: Authorship::new("bob@example.com"),
            relationship: RelationshipRef::new("alice@alice.example.org", RelationshipKind::Sharing),
            ..Default::default()
        });
        let xml = request.to_xml(&XmlWriter::new(WriterConfig::default()));
        assert_eq!(
            &xml[..],
            b"<request><sender_handle>bob@example.com</sender_handle>\
              <recipient_handle>alice@alice.example.org</recipient_handle></request>"
        );
    }

    #[test]
    fn test_to_payload() {
        let document = post().to_payload();
        assert_eq!(document.name, "XML");
        let entity = federation_wire::payload_entity(&document).unwrap();
        assert_eq!(entity.name, "status_message");
    }

    proptest! {
        #[test]
        fn prop_post_shape_is_fixed(raw in ".{0,64}", guid in "[a-f0-9]{0,32}", public in any::<bool>()) {
            let mut post = post();
            post.post.body.raw_content = raw.clone();
            post.post.identity.guid = guid;
            post.post.visibility.public = public;

            let element = post.to_element();
            prop_assert_eq!(element.children.len(), 5);
            prop_assert_eq!(element.child_text("raw_message"), Some(raw.as_str()));
            prop_assert_eq!(element.child_text("public"), Some(if public { "true" } else { "false" }));
        }
    }
}
