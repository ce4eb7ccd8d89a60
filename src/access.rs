use crate::attributes::Attributes;
use crate::xmltree::{Node, XmlTree};
use crate::xmlvalue::{Value, ValueType};

/// ## Read-only access
impl XmlTree {
    /// The type of the node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// The name of the node. For a document this is always `xml`.
    pub fn name(&self, node: Node) -> &str {
        self.value(node).name()
    }

    /// The attributes of the node, in insertion order.
    pub fn attributes(&self, node: Node) -> &Attributes {
        self.value(node).attributes()
    }

    /// Get the value of a single attribute.
    pub fn attribute(&self, node: Node, name: &str) -> Option<&str> {
        self.attributes(node).get(name)
    }

    /// The text of a text tag, [`None`] for other nodes.
    pub fn text(&self, node: Node) -> Option<&str> {
        match self.value(node) {
            Value::TextTag(text_tag) => Some(text_tag.text()),
            _ => None,
        }
    }

    /// Get parent node.
    ///
    /// Returns [`None`] for a document or a detached node.
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let doc = xml.new_document();
    /// let plano = xml.new_tag("plano")?;
    /// xml.add_element(doc, plano)?;
    /// assert_eq!(xml.parent(plano), Some(doc));
    /// assert_eq!(xml.parent(doc), None);
    /// # Ok::<(), xmltag::Error>(())
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// The single child of a document, if any.
    ///
    /// Returns [`None`] if `node` is not a document.
    pub fn document_child(&self, node: Node) -> Option<Node> {
        if self.value_type(node) != ValueType::Document {
            return None;
        }
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Iterator over the children of this node, in order.
    ///
    /// A document yields its single child, a text tag yields nothing.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over this node and its descendants, in pre-order.
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let a = xml.new_tag("a")?;
    /// let b = xml.new_tag("b")?;
    /// let c = xml.new_text_tag("c", "C")?;
    /// xml.add_element(a, b)?;
    /// xml.add_element(b, c)?;
    /// assert_eq!(xml.descendants(a).collect::<Vec<_>>(), vec![a, b, c]);
    /// # Ok::<(), xmltag::Error>(())
    /// ```
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// The depth of a node.
    ///
    /// A document has depth 1, and so does its child. Below that every
    /// level adds one. A detached node has depth 1.
    pub fn depth(&self, node: Node) -> usize {
        if self.value_type(node) == ValueType::Document {
            return 1;
        }
        match self.parent(node) {
            Some(parent) if self.value_type(parent) == ValueType::Document => 1,
            Some(parent) => 1 + self.depth(parent),
            None => 1,
        }
    }

    /// The path of names from the root to this node.
    ///
    /// A document has path `/`; its child `plano` has path `/plano`.
    /// The path of a node in a detached fragment starts with the name of the
    /// fragment's top node, without a leading `/`.
    pub fn path(&self, node: Node) -> String {
        if self.value_type(node) == ValueType::Document {
            return "/".to_string();
        }
        match self.parent(node) {
            Some(parent) => {
                let mut path = self.path(parent);
                if !path.ends_with('/') {
                    path.push('/');
                }
                path.push_str(self.name(node));
                path
            }
            None => self.name(node).to_string(),
        }
    }

    /// Count the tags and text tags in this subtree, including `node`.
    ///
    /// Returns `(tags, text_tags)`. A document is counted in neither.
    pub fn count_elements(&self, node: Node) -> (usize, usize) {
        let mut tags = 0;
        let mut text_tags = 0;
        self.accept(node, |xml, n| {
            match xml.value_type(n) {
                ValueType::Tag => tags += 1,
                ValueType::TextTag => text_tags += 1,
                ValueType::Document => {}
            }
            true
        });
        (tags, text_tags)
    }
}
