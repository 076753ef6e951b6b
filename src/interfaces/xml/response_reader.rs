use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlReadError {
    #[error("{source} at position {position}")]
    Syntax {
        source: quick_xml::Error,
        position: usize,
    },
    #[error("document has no root element")]
    NoRoot,
    #[error("element <{0}> is not closed")]
    Unclosed(String),
    #[error("unexpected content after the root element at position {0}")]
    TrailingContent(usize),
    #[error("text outside the root element at position {0}")]
    StrayText(usize),
}

/// A parsed element: its local name, its own text and its child elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follows `path` through first-matching children.
    pub fn descend(&self, path: &[&str]) -> Option<&XmlElement> {
        path.iter().try_fold(self, |el, name| el.child(name))
    }

    /// The element's own text, trimmed; `None` when blank.
    pub fn text(&self) -> Option<&str> {
        Some(self.text.trim()).filter(|t| !t.is_empty())
    }
}

/// Parses a response body into its root element.
///
/// Anything but exactly one well-formed root element is an error, with the
/// parser diagnostic and byte position where available.
pub fn read_document(input: &str) -> Result<XmlElement, XmlReadError> {
    let mut reader = Reader::from_str(input);
    reader.trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader.read_event().map_err(|source| XmlReadError::Syntax {
            source,
            position: reader.buffer_position(),
        })?;

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(XmlReadError::TrailingContent(reader.buffer_position()));
                }
                stack.push(element(&start));
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(XmlReadError::TrailingContent(reader.buffer_position()));
                }
                attach(&mut stack, &mut root, element(&start));
            }
            Event::End(_) => {
                // End-name mismatches are rejected by the reader itself.
                if let Some(done) = stack.pop() {
                    attach(&mut stack, &mut root, done);
                }
            }
            Event::Text(text) => {
                let position = reader.buffer_position();
                let text = text.unescape().map_err(|source| XmlReadError::Syntax {
                    source,
                    position,
                })?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None if root.is_some() => return Err(XmlReadError::TrailingContent(position)),
                    None => return Err(XmlReadError::StrayText(position)),
                }
            }
            Event::CData(data) => {
                let position = reader.buffer_position();
                match stack.last_mut() {
                    Some(current) => {
                        current.text.push_str(&String::from_utf8_lossy(&data.into_inner()))
                    }
                    None => return Err(XmlReadError::StrayText(position)),
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes.
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlReadError::Unclosed(open.name));
    }
    root.ok_or(XmlReadError::NoRoot)
}

fn element(start: &BytesStart<'_>) -> XmlElement {
    XmlElement {
        name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
        ..XmlElement::default()
    }
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, done: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(done),
        None => *root = Some(done),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_nested_elements() {
        let root = read_document(
            "<?xml version=\"1.0\"?><payment><pid>1</pid><body><payment_url> https://x </payment_url></body></payment>",
        )
        .unwrap();

        assert_eq!(root.name, "payment");
        assert_eq!(root.child("pid").and_then(XmlElement::text), Some("1"));
        assert_eq!(
            root.descend(&["body", "payment_url"]).and_then(XmlElement::text),
            Some("https://x")
        );
    }

    #[test]
    fn test_unescapes_entities_and_cdata() {
        let root = read_document("<r><a>x &amp; y</a><b><![CDATA[<raw>]]></b></r>").unwrap();
        assert_eq!(root.child("a").and_then(XmlElement::text), Some("x & y"));
        assert_eq!(root.child("b").and_then(XmlElement::text), Some("<raw>"));
    }

    #[test]
    fn test_empty_elements_are_children() {
        let root = read_document("<r><url/><error>bad</error></r>").unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.child("url").and_then(XmlElement::text), None);
    }

    #[test]
    fn test_rejects_unfinished_tag() {
        assert!(read_document("<not xml at all").is_err());
    }

    #[test]
    fn test_rejects_mismatched_end_tag() {
        assert!(matches!(
            read_document("<a><b></a>"),
            Err(XmlReadError::Syntax { .. })
        ));
    }

    #[test]
    fn test_rejects_unclosed_root() {
        assert!(matches!(
            read_document("<a><b>text</b>"),
            Err(XmlReadError::Unclosed(name)) if name == "a"
        ));
    }

    #[test]
    fn test_rejects_plain_text_and_empty_input() {
        assert!(matches!(read_document("OK"), Err(XmlReadError::StrayText(_))));
        assert!(matches!(read_document(""), Err(XmlReadError::NoRoot)));
    }

    #[test]
    fn test_rejects_second_root() {
        assert!(matches!(
            read_document("<a/><b/>"),
            Err(XmlReadError::TrailingContent(_))
        ));
    }
}
