use crate::xmltree::{Node, XmlTree};
use crate::xmlvalue::ValueType;

/// ## Traversal
///
/// Pre-order, depth-first visits of a node and its descendants. The
/// visitor returns whether to descend into the children of the node it was
/// given; returning `false` prunes that subtree only, siblings elsewhere in
/// the tree are still visited.
impl XmlTree {
    /// Visit `node` and its descendants.
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let a = xml.new_tag("a")?;
    /// let b = xml.new_tag("b")?;
    /// let c = xml.new_tag("c")?;
    /// let d = xml.new_tag("d")?;
    /// xml.add_element(a, b)?;
    /// xml.add_element(b, c)?;
    /// xml.add_element(a, d)?;
    ///
    /// let mut seen = Vec::new();
    /// xml.accept(a, |xml, node| {
    ///     seen.push(xml.name(node).to_string());
    ///     xml.name(node) != "b"
    /// });
    /// assert_eq!(seen, vec!["a", "b", "d"]);
    /// # Ok::<(), xmltag::Error>(())
    /// ```
    pub fn accept<F>(&self, node: Node, mut visitor: F)
    where
        F: FnMut(&XmlTree, Node) -> bool,
    {
        self.accept_with(node, &mut visitor);
    }

    fn accept_with<F>(&self, node: Node, visitor: &mut F)
    where
        F: FnMut(&XmlTree, Node) -> bool,
    {
        match self.value_type(node) {
            ValueType::Document => {
                if visitor(self, node) {
                    if let Some(child) = self.document_child(node) {
                        self.accept_with(child, visitor);
                    }
                }
            }
            ValueType::Tag => {
                if visitor(self, node) {
                    for child in self.children(node) {
                        self.accept_with(child, visitor);
                    }
                }
            }
            ValueType::TextTag => {
                visitor(self, node);
            }
        }
    }

    /// Visit `node` and its descendants, allowing the visitor to change the
    /// tree.
    ///
    /// The children of a node are looked up after the visitor returns, so
    /// children the visitor removed are not visited.
    pub fn accept_mut<F>(&mut self, node: Node, mut visitor: F)
    where
        F: FnMut(&mut XmlTree, Node) -> bool,
    {
        self.accept_mut_with(node, &mut visitor);
    }

    fn accept_mut_with<F>(&mut self, node: Node, visitor: &mut F)
    where
        F: FnMut(&mut XmlTree, Node) -> bool,
    {
        match self.value_type(node) {
            ValueType::Document | ValueType::Tag => {
                if visitor(self, node) {
                    let children = self.children(node).collect::<Vec<_>>();
                    for child in children {
                        self.accept_mut_with(child, visitor);
                    }
                }
            }
            ValueType::TextTag => {
                visitor(self, node);
            }
        }
    }
}
