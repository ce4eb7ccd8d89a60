use tracing::debug;

use crate::error::Error;
use crate::name::validate_name;
use crate::xmltree::{Node, XmlTree};
use crate::xmlvalue::ValueType;

/// ## Bulk operations
///
/// These walk the whole subtree of `root` and change every node whose name
/// matches. Running them again once nothing matches changes nothing.
impl XmlTree {
    /// Rename every tag and text tag called `name` to `new_name`.
    ///
    /// The document keeps its fixed name. Fails with
    /// [`Error::InvalidName`] before changing anything if `new_name` is
    /// invalid.
    pub fn rename_all_elements(
        &mut self,
        root: Node,
        name: &str,
        new_name: &str,
    ) -> Result<(), Error> {
        validate_name(new_name)?;
        let mut matches = Vec::new();
        self.accept(root, |xml, node| {
            if xml.value_type(node) != ValueType::Document && xml.name(node) == name {
                matches.push(node);
            }
            true
        });
        for &node in &matches {
            self.update_name(node, new_name)?;
        }
        debug!(name, new_name, renamed = matches.len(), "renamed elements");
        Ok(())
    }

    /// Remove every element called `name`, with its descendants.
    ///
    /// A document loses its child if the child matches; a tag loses all
    /// matching children.
    pub fn remove_all_elements(&mut self, root: Node, name: &str) {
        let mut removed = 0;
        self.accept_mut(root, |xml, node| {
            match xml.value_type(node) {
                ValueType::Document => {
                    if xml.remove_element(node, name).is_some() {
                        removed += 1;
                    }
                }
                ValueType::Tag => {
                    while xml.remove_element(node, name).is_some() {
                        removed += 1;
                    }
                }
                ValueType::TextTag => {}
            }
            true
        });
        debug!(name, removed, "removed elements");
    }

    /// Rename attribute `attribute` to `new_attribute` on every node called
    /// `element`, keeping its position.
    ///
    /// Fails with [`Error::InvalidName`] before changing anything if
    /// `new_attribute` is invalid.
    pub fn rename_all_attributes(
        &mut self,
        root: Node,
        element: &str,
        attribute: &str,
        new_attribute: &str,
    ) -> Result<(), Error> {
        validate_name(new_attribute)?;
        let mut matches = Vec::new();
        self.accept(root, |xml, node| {
            if xml.name(node) == element {
                matches.push(node);
            }
            true
        });
        for &node in &matches {
            self.update_attribute_name(node, attribute, new_attribute)?;
        }
        debug!(element, attribute, new_attribute, "renamed attributes");
        Ok(())
    }

    /// Remove attribute `attribute` from every node called `element`.
    pub fn remove_all_attributes(&mut self, root: Node, element: &str, attribute: &str) {
        self.accept_mut(root, |xml, node| {
            if xml.name(node) == element {
                xml.remove_attribute(node, attribute);
            }
            true
        });
        debug!(element, attribute, "removed attributes");
    }
}
