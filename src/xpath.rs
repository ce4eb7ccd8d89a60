use crate::xmltree::{Node, XmlTree};

/// ## Path queries
impl XmlTree {
    /// Find nodes in the subtree of `node` by their [path](XmlTree::path).
    ///
    /// A query starting with `/` matches paths exactly. Any other query
    /// matches every path that ends with the query text. This comparison is
    /// on characters, not on name segments: `a/b` also matches `/xa/b`.
    ///
    /// Matches are returned in pre-order.
    ///
    /// ```rust
    /// let mut xml = xmltag::XmlTree::new();
    /// let doc = xml.new_document();
    /// let plano = xml.new_tag("plano")?;
    /// let curso = xml.new_text_tag("curso", "MEI")?;
    /// xml.add_element(doc, plano)?;
    /// xml.add_element(plano, curso)?;
    ///
    /// assert_eq!(xml.xpath(doc, "/plano/curso"), vec![curso]);
    /// assert_eq!(xml.xpath(doc, "curso"), vec![curso]);
    /// assert!(xml.xpath(doc, "/curso").is_empty());
    /// # Ok::<(), xmltag::Error>(())
    /// ```
    pub fn xpath(&self, node: Node, query: &str) -> Vec<Node> {
        let absolute = query.starts_with('/');
        let mut results = Vec::new();
        self.accept(node, |xml, n| {
            let path = xml.path(n);
            let matches = if absolute {
                path == query
            } else {
                path.ends_with(query)
            };
            if matches {
                results.push(n);
            }
            true
        });
        results
    }
}
