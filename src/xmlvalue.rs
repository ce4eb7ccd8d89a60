use crate::attributes::Attributes;
use crate::name::DOCUMENT_NAME;

/// The type of a node.
///
/// Use it if you are interested in the kind of a node without needing
/// to match on its [`Value`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document root. Holds at most one child.
    Document,
    /// Tag with an ordered list of children.
    Tag,
    /// Leaf tag with text content.
    TextTag,
}

/// The value stored in a node.
///
/// Access it using [`XmlTree::value`](crate::XmlTree::value).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Document root. Its name is always `xml` and it never has a parent.
    Document(Document),
    /// Tag; it has a name, attributes and children.
    Tag(Tag),
    /// Text tag; it has a name, attributes and text but no children.
    TextTag(TextTag),
}

impl Value {
    /// Returns the type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Document(_) => ValueType::Document,
            Value::Tag(_) => ValueType::Tag,
            Value::TextTag(_) => ValueType::TextTag,
        }
    }

    /// The name of the node. A document is always called `xml`.
    pub fn name(&self) -> &str {
        match self {
            Value::Document(_) => DOCUMENT_NAME,
            Value::Tag(tag) => &tag.name,
            Value::TextTag(text_tag) => &text_tag.name,
        }
    }

    /// The attributes of the node, in insertion order.
    pub fn attributes(&self) -> &Attributes {
        match self {
            Value::Document(document) => &document.attributes,
            Value::Tag(tag) => &tag.attributes,
            Value::TextTag(text_tag) => &text_tag.attributes,
        }
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Value::Document(document) => &mut document.attributes,
            Value::Tag(tag) => &mut tag.attributes,
            Value::TextTag(text_tag) => &mut text_tag.attributes,
        }
    }
}

/// Document value. Serialized as `<?xml ...?>`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub(crate) attributes: Attributes,
}

/// Tag value.
///
/// Example: `<fuc codigo="M4310">...</fuc>` or `<componente/>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
}

impl Tag {
    pub(crate) fn new(name: String) -> Self {
        Tag {
            name,
            attributes: Attributes::new(),
        }
    }

    /// The name of the tag.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Text tag value.
///
/// Example: `<nome>Dissertação</nome>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTag {
    pub(crate) name: String,
    pub(crate) text: String,
    pub(crate) attributes: Attributes,
}

impl TextTag {
    pub(crate) fn new(name: String, text: String) -> Self {
        TextTag {
            name,
            text,
            attributes: Attributes::new(),
        }
    }

    /// The name of the text tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text content.
    pub fn text(&self) -> &str {
        &self.text
    }
}
