use crate::error::Error;
use crate::name::validate_name;
use crate::xmltree::{Node, XmlTree};
use crate::xmlvalue::{Value, ValueType};

/// ## Manipulation
///
/// This maintains the tree structure:
/// - A document holds at most one child and never has a parent.
/// - A tag holds an ordered list of children.
/// - A text tag holds text and never has children.
/// - Every node has at most one parent; a node cannot be added below
///   itself.
impl XmlTree {
    /// Add `child` to `parent`.
    ///
    /// A tag appends the child to the end of its children. A document
    /// replaces its single child; the previous child, if any, is detached.
    /// If `child` is attached elsewhere it is moved.
    ///
    /// Fails with [`Error::InvalidOperation`] if `parent` is a text tag,
    /// `child` is a document, or `child` is `parent` or one of its
    /// ancestors.
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let plano = xml.new_tag("plano")?;
    /// let curso = xml.new_text_tag("curso", "MEI")?;
    /// xml.add_element(plano, curso)?;
    /// assert_eq!(xml.parent(curso), Some(plano));
    /// # Ok::<(), xmltag::Error>(())
    /// ```
    pub fn add_element(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        if self.value_type(parent) == ValueType::Document {
            if let Some(previous) = self.document_child(parent) {
                if previous == child {
                    return Ok(());
                }
                previous.get().detach(self.arena_mut());
            }
        }
        parent
            .get()
            .checked_append(child.get(), self.arena_mut())
            .map_err(|e| Error::InvalidOperation(format!("{:?}", e)))
    }

    /// Remove the single child of a document.
    ///
    /// Returns the detached child. Fails with [`Error::InvalidOperation`] if
    /// `document` is not a document or has no child.
    pub fn remove_document_child(&mut self, document: Node) -> Result<Node, Error> {
        if self.value_type(document) != ValueType::Document {
            return Err(Error::InvalidOperation(
                "Only a document has a single child to remove".into(),
            ));
        }
        let child = self.document_child(document).ok_or_else(|| {
            Error::InvalidOperation("The document doesn't have a child".into())
        })?;
        child.get().detach(self.arena_mut());
        Ok(child)
    }

    /// Remove the first child of `parent` called `name`.
    ///
    /// Returns the detached child, or [`None`] if no child has that name;
    /// this is not an error. For a document this removes its child if the
    /// name matches.
    pub fn remove_element(&mut self, parent: Node, name: &str) -> Option<Node> {
        let child = self.children(parent).find(|&c| self.name(c) == name)?;
        child.get().detach(self.arena_mut());
        Some(child)
    }

    /// Detach a node (and its descendants) from its parent.
    ///
    /// It now becomes a fragment of its own. Detaching a detached node
    /// does nothing.
    pub fn detach(&mut self, node: Node) {
        node.get().detach(self.arena_mut());
    }

    pub(crate) fn remove_subtree(&mut self, node: Node) {
        node.get().remove_subtree(self.arena_mut());
    }

    /// Rename a tag or text tag.
    ///
    /// Fails with [`Error::InvalidOperation`] for a document, whose name is
    /// fixed, and with [`Error::InvalidName`] if `new_name` is invalid.
    pub fn update_name(&mut self, node: Node, new_name: &str) -> Result<(), Error> {
        match self.value_mut(node) {
            Value::Document(_) => Err(Error::InvalidOperation(
                "The document can't change name".into(),
            )),
            Value::Tag(tag) => {
                validate_name(new_name)?;
                tag.name = new_name.to_string();
                Ok(())
            }
            Value::TextTag(text_tag) => {
                validate_name(new_name)?;
                text_tag.name = new_name.to_string();
                Ok(())
            }
        }
    }

    /// Replace the text of a text tag.
    ///
    /// Fails with [`Error::InvalidOperation`] for any other node.
    pub fn set_text(&mut self, node: Node, text: &str) -> Result<(), Error> {
        match self.value_mut(node) {
            Value::TextTag(text_tag) => {
                text_tag.text = text.to_string();
                Ok(())
            }
            _ => Err(Error::InvalidOperation("Only a text tag has text".into())),
        }
    }

    /// Add an attribute at the end of the attributes of `node`.
    ///
    /// If the attribute already exists its value is replaced in place.
    /// Fails with [`Error::InvalidName`] if `name` is invalid.
    pub fn add_attribute(&mut self, node: Node, name: &str, value: &str) -> Result<(), Error> {
        self.value_mut(node).attributes_mut().insert(name, value)
    }

    /// Rename an attribute without moving it.
    ///
    /// If another attribute is already called `new_name`, that one is
    /// removed. Does nothing if the attribute doesn't exist. Fails with
    /// [`Error::InvalidName`] if `new_name` is invalid.
    pub fn update_attribute_name(
        &mut self,
        node: Node,
        name: &str,
        new_name: &str,
    ) -> Result<(), Error> {
        self.value_mut(node).attributes_mut().rename(name, new_name)
    }

    /// Replace the value of an attribute.
    ///
    /// Does nothing if the attribute doesn't exist.
    pub fn update_attribute_value(&mut self, node: Node, name: &str, new_value: &str) {
        self.value_mut(node).attributes_mut().set_value(name, new_value);
    }

    /// Remove an attribute. Does nothing if it doesn't exist.
    pub fn remove_attribute(&mut self, node: Node, name: &str) {
        self.value_mut(node).attributes_mut().remove(name);
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        match self.value_type(parent) {
            ValueType::Document | ValueType::Tag => {}
            ValueType::TextTag => {
                return Err(Error::InvalidOperation(
                    "A text tag can't have children".into(),
                ));
            }
        }
        if self.value_type(child) == ValueType::Document {
            return Err(Error::InvalidOperation(
                "A document can't have a parent".into(),
            ));
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::InvalidOperation(
                "Cannot add a node below itself".into(),
            ));
        }
        Ok(())
    }
}
