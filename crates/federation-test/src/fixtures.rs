//! Sample entities and the Diaspora documents they serialize to

use chrono::{DateTime, TimeZone, Utc};
use federation_core::{
    Authorship, Comment, Identity, Image, ImageUrls, Participation, ParticipationRef, Post,
    Profile, Reaction, ReactionKind, Relationship, RelationshipKind, RelationshipRef, TextBody,
    Timestamp, Visibility,
};

pub const ALICE: &str = "alice@alice.diaspora.example.org";
pub const BOB: &str = "bob@example.com";

pub const POST_GUID: &str = "a0a0a0a0a0a0a0a0";
pub const COMMENT_GUID: &str = "c0c0c0c0c0c0c0c0";
pub const LIKE_GUID: &str = "d0d0d0d0d0d0d0d0";
pub const IMAGE_GUID: &str = "e0e0e0e0e0e0e0e0";

pub const SIGNATURE: &str = "((base64-encoded data))";

/// 2011-07-20 01:36:07 UTC
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2011, 7, 20, 1, 36, 7)
        .single()
        .unwrap_or_default()
}

pub fn post() -> Post {
    Post {
        body: TextBody::new("((status message))"),
        identity: Identity::new(POST_GUID),
        author: Authorship::new(ALICE),
        visibility: Visibility::private(),
        timestamp: Timestamp::at(created_at()),
        photos: vec![IMAGE_GUID.to_owned()],
        ..Default::default()
    }
}

pub fn image() -> Image {
    Image {
        identity: Identity::new(IMAGE_GUID),
        author: Authorship::new(ALICE),
        visibility: Visibility::private(),
        timestamp: Timestamp::at(created_at()),
        remote_path: "https://alice.diaspora.example.org/uploads/images/".into(),
        remote_name: "1234.jpg".into(),
        linked_type: "Post".into(),
        linked_guid: POST_GUID.into(),
        height: 480,
        width: 640,
        ..Default::default()
    }
}

pub fn comment() -> Comment {
    Comment {
        body: TextBody::new("((text))"),
        identity: Identity::new(COMMENT_GUID),
        participation: ParticipationRef::new(POST_GUID, Participation::Comment),
        timestamp: Timestamp::at(created_at()),
        author: Authorship::new(ALICE),
    }
}

pub fn reaction() -> Reaction {
    Reaction {
        identity: Identity::new(LIKE_GUID),
        participation: ParticipationRef::new(POST_GUID, Participation::Reaction),
        timestamp: Timestamp::at(created_at()),
        author: Authorship::new(ALICE),
        reaction: ReactionKind::Like.into(),
    }
}

pub fn relationship() -> Relationship {
    Relationship {
        timestamp: Timestamp::at(created_at()),
        author: Authorship::new(BOB),
        relationship: RelationshipRef::new(ALICE, RelationshipKind::Sharing),
    }
}

pub fn profile() -> Profile {
    Profile {
        timestamp: Timestamp::at(created_at()),
        author: Authorship::new(BOB),
        body: TextBody::new("A cool bio"),
        visibility: Visibility::public(),
        name: "Bob Bobertson".into(),
        image_urls: ImageUrls {
            small: "https://example.com/uploads/images/thumb_small_c8b147578b5.jpg".into(),
            medium: "https://example.com/uploads/images/thumb_medium_c8b1aab04f3.jpg".into(),
            large: "https://example.com/uploads/images/thumb_large_c833747578b5.jpg".into(),
        },
        location: "Helsinki".into(),
        tag_list: vec!["socialfederation".into(), "federation".into()],
        ..Default::default()
    }
}

pub const DIASPORA_POST: &str = r#"<XML>
  <post>
    <status_message>
      <raw_message>((status message))</raw_message>
      <guid>a0a0a0a0a0a0a0a0</guid>
      <diaspora_handle>alice@alice.diaspora.example.org</diaspora_handle>
      <public>false</public>
      <created_at>2011-07-20 01:36:07 UTC</created_at>
    </status_message>
  </post>
</XML>"#;

pub const DIASPORA_COMMENT: &str = r#"<XML>
  <post>
    <comment>
      <guid>c0c0c0c0c0c0c0c0</guid>
      <parent_guid>a0a0a0a0a0a0a0a0</parent_guid>
      <author_signature>((base64-encoded data))</author_signature>
      <text>((text))</text>
      <diaspora_handle>alice@alice.diaspora.example.org</diaspora_handle>
    </comment>
  </post>
</XML>"#;

pub const DIASPORA_LIKE: &str = r#"<XML>
  <post>
    <like>
      <target_type>Post</target_type>
      <guid>d0d0d0d0d0d0d0d0</guid>
      <parent_guid>a0a0a0a0a0a0a0a0</parent_guid>
      <author_signature>((base64-encoded data))</author_signature>
      <positive>true</positive>
      <diaspora_handle>alice@alice.diaspora.example.org</diaspora_handle>
    </like>
  </post>
</XML>"#;

pub const DIASPORA_REQUEST: &str = r#"<XML>
  <post>
    <request>
      <sender_handle>bob@example.com</sender_handle>
      <recipient_handle>alice@alice.diaspora.example.org</recipient_handle>
    </request>
  </post>
</XML>"#;

pub const DIASPORA_PROFILE: &str = r#"<XML>
  <post>
    <profile>
      <diaspora_handle>bob@example.com</diaspora_handle>
      <first_name>Bob Bobertson</first_name>
      <last_name></last_name>
      <image_url>https://example.com/uploads/images/thumb_large_c833747578b5.jpg</image_url>
      <image_url_small>https://example.com/uploads/images/thumb_small_c8b147578b5.jpg</image_url_small>
      <image_url_medium>https://example.com/uploads/images/thumb_medium_c8b1aab04f3.jpg</image_url_medium>
      <gender></gender>
      <bio>A cool bio</bio>
      <location>Helsinki</location>
      <searchable>true</searchable>
      <nsfw>false</nsfw>
      <tag_string>#socialfederation #federation</tag_string>
    </profile>
  </post>
</XML>"#;
