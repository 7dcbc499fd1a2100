//! Ordered element tree
//!
//! The wire representation of an entity is a tree of named elements. Child order
//! is part of the wire contract, so children are kept in insertion order and
//! never sorted or deduplicated.

/// A named element with text and ordered children
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: &'static str) -> Self {
        Element {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Create a text-only element
    pub fn leaf(name: &'static str, text: impl Into<String>) -> Self {
        Element {
            name,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create an element whose children are text leaves, in the given order
    pub fn with_leaves<I, S>(name: &'static str, leaves: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, S)>,
        S: Into<String>,
    {
        let mut element = Element::new(name);
        element.extend_leaves(leaves);
        element
    }

    /// Append a child element
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Append text leaves, in the given order
    pub fn extend_leaves<I, S>(&mut self, leaves: I)
    where
        I: IntoIterator<Item = (&'static str, S)>,
        S: Into<String>,
    {
        self.children
            .extend(leaves.into_iter().map(|(name, text)| Element::leaf(name, text)));
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Text of the first child with the given name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|child| child.text.as_str())
    }

    /// Child names in wire order
    pub fn child_names(&self) -> Vec<&'static str> {
        self.children.iter().map(|child| child.name).collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves_keep_order() {
        let element = Element::with_leaves(
            "request",
            [
                ("sender_handle", "bob@example.com"),
                ("recipient_handle", "alice@example.org"),
            ],
        );

        assert_eq!(element.child_names(), vec!["sender_handle", "recipient_handle"]);
        assert_eq!(element.child_text("sender_handle"), Some("bob@example.com"));
        assert!(!element.is_leaf());
        assert!(element.children.iter().all(Element::is_leaf));
    }

    #[test]
    fn test_duplicate_names_kept() {
        let mut element = Element::new("list");
        element.push(Element::leaf("item", "a"));
        element.push(Element::leaf("item", "b"));

        assert_eq!(element.children.len(), 2);
        assert_eq!(element.child_text("item"), Some("a"));
    }

    #[test]
    fn test_missing_child() {
        let element = Element::leaf("guid", "");
        assert_eq!(element.child("guid"), None);
        assert_eq!(element.text, "");
    }
}
