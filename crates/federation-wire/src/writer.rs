//! XML rendering of element trees
//!
//! Empty elements are written as `<name></name>`, never self-closed, to match
//! documents produced by other implementations.

use bytes::{BufMut, Bytes, BytesMut};

use crate::Element;

/// XML declaration written when `WriterConfig::declaration` is set
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>";

/// Writer configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterConfig {
    /// Emit the XML declaration before the root element
    pub declaration: bool,
    /// Spaces per nesting level; `None` writes everything on one line
    pub indent: Option<usize>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            declaration: false,
            indent: None,
        }
    }
}

impl WriterConfig {
    /// One element per line, two-space indentation
    pub fn pretty() -> Self {
        WriterConfig {
            declaration: false,
            indent: Some(2),
        }
    }
}

/// Renders element trees as XML
#[derive(Clone, Debug, Default)]
pub struct XmlWriter {
    config: WriterConfig,
}

impl XmlWriter {
    pub fn new(config: WriterConfig) -> Self {
        XmlWriter { config }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Append the rendering of `element` to `buf`
    pub fn write(&self, element: &Element, buf: &mut BytesMut) {
        if self.config.declaration {
            buf.put_slice(XML_DECLARATION.as_bytes());
            if self.config.indent.is_some() {
                buf.put_u8(b'\n');
            }
        }
        self.write_element(element, 0, buf);
    }

    pub fn to_bytes(&self, element: &Element) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.estimate(element));
        self.write(element, &mut buf);
        tracing::trace!(root = element.name, len = buf.len(), "rendered element tree");
        buf.freeze()
    }

    pub fn to_string(&self, element: &Element) -> String {
        let bytes = self.to_bytes(element);
        // Only UTF-8 is ever written
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn write_element(&self, element: &Element, depth: usize, buf: &mut BytesMut) {
        self.write_indent(depth, buf);

        buf.put_u8(b'<');
        buf.put_slice(element.name.as_bytes());
        buf.put_u8(b'>');

        escape_text(&element.text, buf);

        if !element.children.is_empty() {
            for child in &element.children {
                if self.config.indent.is_some() {
                    buf.put_u8(b'\n');
                }
                self.write_element(child, depth + 1, buf);
            }
            if self.config.indent.is_some() {
                buf.put_u8(b'\n');
                self.write_indent(depth, buf);
            }
        }

        buf.put_slice(b"</");
        buf.put_slice(element.name.as_bytes());
        buf.put_u8(b'>');
    }

    fn write_indent(&self, depth: usize, buf: &mut BytesMut) {
        if let Some(width) = self.config.indent {
            buf.put_bytes(b' ', width * depth);
        }
    }

    fn estimate(&self, element: &Element) -> usize {
        let own = element.name.len() * 2 + 5 + element.text.len();
        own + element
            .children
            .iter()
            .map(|child| self.estimate(child) + self.config.indent.map_or(0, |w| w + 1))
            .sum::<usize>()
    }
}

/// Escape `&`, `<` and `>` in element text
fn escape_text(text: &str, buf: &mut BytesMut) {
    let mut start = 0;
    for (i, b) in text.bytes().enumerate() {
        let replacement: &[u8] = match b {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            _ => continue,
        };
        buf.put_slice(&text.as_bytes()[start..i]);
        buf.put_slice(replacement);
        start = i + 1;
    }
    buf.put_slice(&text.as_bytes()[start..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Element {
        Element::with_leaves(
            "request",
            [
                ("sender_handle", "bob@example.com"),
                ("recipient_handle", "alice@example.org"),
            ],
        )
    }

    #[test]
    fn test_compact() {
        let xml = XmlWriter::default().to_string(&request());
        assert_eq!(
            xml,
            "<request><sender_handle>bob@example.com</sender_handle>\
             <recipient_handle>alice@example.org</recipient_handle></request>"
        );
    }

    #[test]
    fn test_pretty() {
        let xml = XmlWriter::new(WriterConfig::pretty()).to_string(&request());
        assert_eq!(
            xml,
            "<request>\n  <sender_handle>bob@example.com</sender_handle>\n  \
             <recipient_handle>alice@example.org</recipient_handle>\n</request>"
        );
    }

    #[test]
    fn test_declaration() {
        let config = WriterConfig {
            declaration: true,
            ..Default::default()
        };
        let xml = XmlWriter::new(config).to_string(&Element::leaf("guid", "x"));
        assert_eq!(xml, format!("{}<guid>x</guid>", XML_DECLARATION));
    }

    #[test]
    fn test_empty_leaf_not_self_closed() {
        let xml = XmlWriter::default().to_string(&Element::leaf("last_name", ""));
        assert_eq!(xml, "<last_name></last_name>");
    }

    #[test]
    fn test_escaping() {
        let element = Element::leaf("raw_message", "a < b && c > \"d\"");
        let xml = XmlWriter::default().to_string(&element);
        assert_eq!(
            xml,
            "<raw_message>a &lt; b &amp;&amp; c &gt; \"d\"</raw_message>"
        );
    }

    #[test]
    fn test_escaping_keeps_multibyte_text() {
        let element = Element::leaf("bio", "héllo <wörld>");
        let xml = XmlWriter::default().to_string(&element);
        assert_eq!(xml, "<bio>héllo &lt;wörld&gt;</bio>");
    }

    #[test]
    fn test_bytes_match_string() {
        let writer = XmlWriter::default();
        let bytes = writer.to_bytes(&request());
        assert_eq!(&bytes[..], writer.to_string(&request()).as_bytes());
    }
}
