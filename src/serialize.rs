use crate::attributes::Attributes;
use crate::xmltree::{Node, XmlTree};
use crate::xmlvalue::Value;

/// Options to control serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Number of spaces per level of depth.
    pub indentation: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions { indentation: 2 }
    }
}

/// ## Serialization
///
/// Every node is written on its own line, indented by its
/// [depth](XmlTree::depth). A tag without children is self-closing. Names,
/// attribute values and text are written as they are, without escaping.
impl XmlTree {
    /// Serialize a node to a string, indenting with two spaces per level.
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let doc = xml.new_document();
    /// let plano = xml.new_tag("plano")?;
    /// let curso = xml.new_text_tag("curso", "MEI")?;
    /// xml.add_element(doc, plano)?;
    /// xml.add_element(plano, curso)?;
    /// assert_eq!(
    ///     xml.to_string(doc),
    ///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plano>\n  <curso>MEI</curso>\n</plano>"
    /// );
    /// # Ok::<(), xmltag::Error>(())
    /// ```
    pub fn to_string(&self, node: Node) -> String {
        self.to_string_with(node, &SerializeOptions::default())
    }

    /// Serialize a node to a string using `options`.
    pub fn to_string_with(&self, node: Node, options: &SerializeOptions) -> String {
        let mut s = String::new();
        self.serialize_node(node, self.depth(node), options, &mut s);
        s
    }

    fn serialize_node(
        &self,
        node: Node,
        depth: usize,
        options: &SerializeOptions,
        s: &mut String,
    ) {
        let indent = " ".repeat((depth - 1) * options.indentation);
        match self.value(node) {
            Value::Document(document) => {
                s.push_str("<?xml");
                write_attributes(&document.attributes, s);
                s.push_str("?>");
                if let Some(child) = self.document_child(node) {
                    s.push('\n');
                    self.serialize_node(child, 1, options, s);
                }
            }
            Value::Tag(tag) => {
                s.push_str(&indent);
                s.push('<');
                s.push_str(&tag.name);
                write_attributes(&tag.attributes, s);
                let mut children = self.children(node).peekable();
                if children.peek().is_none() {
                    s.push_str("/>");
                    return;
                }
                s.push_str(">\n");
                for (i, child) in children.enumerate() {
                    if i > 0 {
                        s.push('\n');
                    }
                    self.serialize_node(child, depth + 1, options, s);
                }
                s.push('\n');
                s.push_str(&indent);
                s.push_str("</");
                s.push_str(&tag.name);
                s.push('>');
            }
            Value::TextTag(text_tag) => {
                s.push_str(&indent);
                s.push('<');
                s.push_str(&text_tag.name);
                write_attributes(&text_tag.attributes, s);
                s.push('>');
                s.push_str(&text_tag.text);
                s.push_str("</");
                s.push_str(&text_tag.name);
                s.push('>');
            }
        }
    }
}

fn write_attributes(attributes: &Attributes, s: &mut String) {
    for (name, value) in attributes.iter() {
        s.push(' ');
        s.push_str(name);
        s.push_str("=\"");
        s.push_str(value);
        s.push('"');
    }
}
