/// Attributes a new document starts out with.
///
/// The default is `version="1.0" encoding="UTF-8"`. An empty field is left
/// out.
///
/// ```rust
/// use xmltag::{Declaration, XmlTree};
///
/// let mut xml = XmlTree::new();
/// let doc = xml.new_document_with(&Declaration {
///     version: "1.1".to_string(),
///     encoding: String::new(),
/// });
/// assert_eq!(xml.to_string(doc), r#"<?xml version="1.1"?>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Value of the `version` attribute.
    pub version: String,
    /// Value of the `encoding` attribute.
    pub encoding: String,
}

impl Default for Declaration {
    fn default() -> Self {
        Declaration {
            version: "1.0".to_string(),
            encoding: "UTF-8".to_string(),
        }
    }
}

impl Declaration {
    pub(crate) fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [("version", self.version.as_str()), ("encoding", self.encoding.as_str())]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
    }
}
