use crate::document::Declaration;
use crate::error::Error;
use crate::name::validate_name;
use crate::xmltree::{Node, XmlTree};
use crate::xmlvalue::{Document, Tag, TextTag, Value};

/// ## Creation
///
/// New nodes are detached: they have no parent until they are added to a
/// document or tag with [`XmlTree::add_element`].
impl XmlTree {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    /// Create a new document with the default [`Declaration`].
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let doc = xml.new_document();
    /// assert_eq!(xml.to_string(doc), r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    /// ```
    pub fn new_document(&mut self) -> Node {
        self.new_document_with(&Declaration::default())
    }

    /// Create a new document starting out with the attributes of `declaration`.
    pub fn new_document_with(&mut self, declaration: &Declaration) -> Node {
        let mut document = Document::default();
        for (name, value) in declaration.attributes() {
            document.attributes.set(name, value);
        }
        self.new_node(Value::Document(document))
    }

    /// Create a new tag.
    ///
    /// Fails with [`Error::InvalidName`] if `name` is not a valid name.
    pub fn new_tag(&mut self, name: &str) -> Result<Node, Error> {
        validate_name(name)?;
        Ok(self.new_node(Value::Tag(Tag::new(name.to_string()))))
    }

    /// Create a new text tag holding `text`.
    ///
    /// Fails with [`Error::InvalidName`] if `name` is not a valid name.
    pub fn new_text_tag(&mut self, name: &str, text: &str) -> Result<Node, Error> {
        validate_name(name)?;
        Ok(self.new_node(Value::TextTag(TextTag::new(
            name.to_string(),
            text.to_string(),
        ))))
    }
}
