use crate::error::Error;
use crate::xmltree::{Node, XmlTree};

/// Builds children below a document or tag.
///
/// Obtain one through [`XmlTree::document`] or [`XmlTree::build`]. Each
/// built node is added to the node the builder is working on.
pub struct ElementBuilder<'a> {
    xml: &'a mut XmlTree,
    current: Node,
}

impl<'a> ElementBuilder<'a> {
    /// The node children are added to.
    pub fn node(&self) -> Node {
        self.current
    }

    /// The tree being built.
    pub fn xml(&mut self) -> &mut XmlTree {
        &mut *self.xml
    }

    /// Add a tag with `attributes`, then build its children with `build`.
    pub fn tag<F>(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        build: F,
    ) -> Result<Node, Error>
    where
        F: FnOnce(&mut ElementBuilder<'_>) -> Result<(), Error>,
    {
        let tag = self.xml.new_tag(name)?;
        self.attach(tag, attributes)?;
        build(&mut ElementBuilder {
            xml: &mut *self.xml,
            current: tag,
        })?;
        Ok(tag)
    }

    /// Add an empty tag with `attributes`.
    pub fn empty_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<Node, Error> {
        self.tag(name, attributes, |_| Ok(()))
    }

    /// Add a text tag with `attributes`.
    pub fn text_tag(
        &mut self,
        name: &str,
        text: &str,
        attributes: &[(&str, &str)],
    ) -> Result<Node, Error> {
        let text_tag = self.xml.new_text_tag(name, text)?;
        self.attach(text_tag, attributes)?;
        Ok(text_tag)
    }

    fn attach(&mut self, node: Node, attributes: &[(&str, &str)]) -> Result<(), Error> {
        self.xml.add_element(self.current, node)?;
        for (name, value) in attributes {
            self.xml.add_attribute(node, name, value)?;
        }
        Ok(())
    }
}

/// ## Building
impl XmlTree {
    /// Create a document with the default [`Declaration`](crate::Declaration), add
    /// `attributes` to it, and build its child with `build`.
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let doc = xml.document(&[], |b| {
    ///     b.tag("plano", &[], |b| {
    ///         b.text_tag("curso", "MEI", &[])?;
    ///         b.empty_tag("fuc", &[("codigo", "M4310")])?;
    ///         Ok(())
    ///     })?;
    ///     Ok(())
    /// })?;
    /// assert_eq!(
    ///     xml.to_string(doc),
    ///     concat!(
    ///         "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    ///         "<plano>\n",
    ///         "  <curso>MEI</curso>\n",
    ///         "  <fuc codigo=\"M4310\"/>\n",
    ///         "</plano>"
    ///     )
    /// );
    /// # Ok::<(), xmltag::Error>(())
    /// ```
    pub fn document<F>(&mut self, attributes: &[(&str, &str)], build: F) -> Result<Node, Error>
    where
        F: FnOnce(&mut ElementBuilder<'_>) -> Result<(), Error>,
    {
        let document = self.new_document();
        for (name, value) in attributes {
            self.add_attribute(document, name, value)?;
        }
        self.build(document, build)?;
        Ok(document)
    }

    /// Build children below an existing document or tag.
    pub fn build<F>(&mut self, node: Node, build: F) -> Result<(), Error>
    where
        F: FnOnce(&mut ElementBuilder<'_>) -> Result<(), Error>,
    {
        build(&mut ElementBuilder {
            xml: self,
            current: node,
        })
    }

    /// Select the first child of `node` called `name`.
    ///
    /// For a document this is its single child if the name matches. Fails
    /// with [`Error::LookupFailure`] if there is no such child.
    pub fn select(&self, node: Node, name: &str) -> Result<Node, Error> {
        self.children(node)
            .find(|&child| self.name(child) == name)
            .ok_or_else(|| {
                Error::LookupFailure(format!("{} has no child {}", self.path(node), name))
            })
    }

    /// Select a descendant by following child names from `node`.
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let doc = xml.document(&[], |b| {
    ///     b.tag("plano", &[], |b| {
    ///         b.text_tag("curso", "MEI", &[])?;
    ///         Ok(())
    ///     })?;
    ///     Ok(())
    /// })?;
    /// let curso = xml.select_path(doc, &["plano", "curso"])?;
    /// assert_eq!(xml.text(curso), Some("MEI"));
    /// assert!(xml.select_path(doc, &["plano", "fuc"]).is_err());
    /// # Ok::<(), xmltag::Error>(())
    /// ```
    pub fn select_path(&self, node: Node, names: &[&str]) -> Result<Node, Error> {
        names
            .iter()
            .try_fold(node, |current, name| self.select(current, name))
    }

    /// Add an attribute and return the node, for chaining.
    pub fn with_attribute(&mut self, node: Node, attribute: (&str, &str)) -> Result<Node, Error> {
        self.add_attribute(node, attribute.0, attribute.1)?;
        Ok(node)
    }

    /// Remove an attribute and return the node, for chaining.
    pub fn without_attribute(&mut self, node: Node, name: &str) -> Node {
        self.remove_attribute(node, name);
        node
    }
}
