//! Payload document
//!
//! A serialized entity travels inside `<XML><post>...</post></XML>`. The
//! header and signature envelope around that document belong to the transport
//! and crypto layers.

use crate::Element;

pub const PAYLOAD_ROOT: &str = "XML";
pub const PAYLOAD_POST: &str = "post";

/// Wrap a serialized entity in the payload document
pub fn payload_document(entity: Element) -> Element {
    let mut post = Element::new(PAYLOAD_POST);
    post.push(entity);

    let mut root = Element::new(PAYLOAD_ROOT);
    root.push(post);
    root
}

/// The entity carried by a payload document, if the document has that shape
pub fn payload_entity(document: &Element) -> Option<&Element> {
    if document.name != PAYLOAD_ROOT {
        return None;
    }
    document.child(PAYLOAD_POST)?.children.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::XmlWriter;

    #[test]
    fn test_payload_wraps_entity() {
        let entity = Element::with_leaves("request", [("sender_handle", "bob@example.com")]);
        let document = payload_document(entity.clone());

        assert_eq!(document.name, "XML");
        assert_eq!(document.child_names(), vec!["post"]);
        assert_eq!(payload_entity(&document), Some(&entity));

        let xml = XmlWriter::default().to_string(&document);
        assert_eq!(
            xml,
            "<XML><post><request><sender_handle>bob@example.com</sender_handle></request></post></XML>"
        );
    }

    #[test]
    fn test_payload_entity_rejects_other_shapes() {
        assert_eq!(payload_entity(&Element::new("post")), None);
        assert_eq!(payload_entity(&Element::new(PAYLOAD_ROOT)), None);
    }
}
